use std::sync::Arc;

use tracing::{debug, info};
use up_core::ports::{ChooserSurfacePort, ContentMetadataPort};
use up_core::upload::{
    resolve, CaptureKind, ChooserOutcome, InFlightUpload, Locator, ProbedCapture,
    ResolvedSelection,
};

/// Use case for interpreting the single chooser outcome and answering the
/// requester.
///
/// Infallible by contract: every failure along the way degrades to "this
/// path produced nothing". The reply is always completed (or safely skipped
/// when nobody is listening) and the surface is dismissed no matter what,
/// so an abandoned chooser can never wedge the host.
pub struct ResolveSelection {
    metadata: Arc<dyn ContentMetadataPort>,
    surface: Arc<dyn ChooserSurfacePort>,
}

impl ResolveSelection {
    pub fn from_ports(
        metadata: Arc<dyn ContentMetadataPort>,
        surface: Arc<dyn ChooserSurfacePort>,
    ) -> Self {
        Self { metadata, surface }
    }

    #[tracing::instrument(
        name = "usecase.resolve_selection.execute",
        skip(self, inflight, outcome),
        fields(request_id = %inflight.id())
    )]
    pub async fn execute(
        &self,
        inflight: InFlightUpload,
        outcome: ChooserOutcome,
    ) -> ResolvedSelection {
        let selection = if outcome.is_cancelled() {
            // Nothing to probe, the answer is already known.
            ResolvedSelection::Empty
        } else {
            let image = self.probe(inflight.reservations().get(CaptureKind::Image)).await;
            let video = self.probe(inflight.reservations().get(CaptureKind::Video)).await;
            resolve(&outcome, image.as_ref(), video.as_ref())
        };

        info!(selected = selection.count(), "chooser outcome resolved");
        inflight.deliver(selection.clone());
        self.surface.dismiss().await;
        selection
    }

    async fn probe(&self, output: Option<&Locator>) -> Option<ProbedCapture> {
        let output = output?;
        let size = match self.metadata.size_of(output).await {
            Ok(size) => size,
            Err(e) => {
                debug!(locator = %output, error = %e, "size lookup failed, treating as empty");
                None
            }
        };
        Some(ProbedCapture::new(output.clone(), size))
    }
}
