use serde::{Deserialize, Serialize};

use super::{AcquisitionCandidate, CaptureKind, NativeSelectionIntent};

/// Access scope requested on whatever the user picks through the generic
/// selection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessMode {
    pub read: bool,
    pub write: bool,
}

impl AccessMode {
    /// The grant the upload flow always asks for.
    pub const READ_WRITE: AccessMode = AccessMode {
        read: true,
        write: true,
    };
}

/// Selection forms the host is able to present.
///
/// Declared by the host surface up front, never derived from platform version
/// probing inside the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooserCapabilities {
    /// Host can show a full document picker with persistent grants and
    /// multi-select. Without it the chooser degrades to the openable-any
    /// form, single selection only.
    pub document_picker: bool,
}

impl Default for ChooserCapabilities {
    fn default() -> Self {
        Self {
            document_picker: true,
        }
    }
}

impl ChooserCapabilities {
    pub fn without_document_picker() -> Self {
        Self {
            document_picker: false,
        }
    }
}

/// Shape of the generic content-selection action the host should dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentSelectionForm {
    /// Full document picker.
    DocumentPicker,
    /// Degraded "openable content, any type" form for hosts without one.
    OpenableAny,
}

/// The generic selection fallback offered next to the capture candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSelectionAction {
    pub form: ContentSelectionForm,
    pub intent: NativeSelectionIntent,
    pub allow_multiple: bool,
    pub access: AccessMode,
}

/// One composite chooser surface: zero or more capture candidates plus the
/// generic selection action, presented to the user as a single choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChooserPresentation {
    pub candidates: Vec<AcquisitionCandidate>,
    pub content_selection: ContentSelectionAction,
}

impl ChooserPresentation {
    pub fn candidate(&self, kind: CaptureKind) -> Option<&AcquisitionCandidate> {
        self.candidates.iter().find(|c| c.kind == kind)
    }
}
