use std::sync::Arc;

use tracing::{debug, warn};
use up_core::ports::CaptureStorePort;
use up_core::upload::{
    AcceptSet, AccessMode, AcquisitionCandidate, ChooserCapabilities, ChooserPresentation,
    ContentSelectionAction, ContentSelectionForm, SelectionDescriptor,
};

/// Use case for composing the composite chooser shown for one upload request.
/// 为单个上传请求组装复合选择器的用例。
///
/// Capture candidates come out in image-then-video order, each bound to a
/// freshly reserved output. A modality whose reservation fails is dropped
/// rather than fatal: the user still gets the rest of the chooser. The
/// generic selection action is always present.
pub struct ComposeChooser {
    capture_store: Arc<dyn CaptureStorePort>,
}

impl ComposeChooser {
    pub fn from_ports(capture_store: Arc<dyn CaptureStorePort>) -> Self {
        Self { capture_store }
    }

    #[tracing::instrument(name = "usecase.compose_chooser.execute", skip(self, descriptor))]
    pub async fn execute(
        &self,
        accept: AcceptSet,
        descriptor: &SelectionDescriptor,
        capabilities: ChooserCapabilities,
    ) -> ChooserPresentation {
        let mut candidates = Vec::with_capacity(2);
        for kind in accept.kinds() {
            match self.capture_store.reserve(kind).await {
                Ok(output) => {
                    debug!(kind = %kind, output = %output, "reserved capture output");
                    candidates.push(AcquisitionCandidate::new(kind, output));
                }
                Err(e) => {
                    warn!(kind = %kind, error = %e, "capture reservation failed, dropping modality");
                }
            }
        }

        // Multi-select only exists on the full document picker form.
        let form = if capabilities.document_picker {
            ContentSelectionForm::DocumentPicker
        } else {
            ContentSelectionForm::OpenableAny
        };
        let allow_multiple = descriptor.allows_multiple() && capabilities.document_picker;

        ChooserPresentation {
            candidates,
            content_selection: ContentSelectionAction {
                form,
                intent: descriptor.intent.clone(),
                allow_multiple,
                access: AccessMode::READ_WRITE,
            },
        }
    }
}
