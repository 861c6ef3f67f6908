//! Upload chooser domain models.
mod accept;
mod candidate;
mod chooser;
mod locator;
mod outcome;
mod request;
mod resolution;
mod selection;

pub use accept::{AcceptSet, CaptureKind};
pub use candidate::AcquisitionCandidate;
pub use chooser::{
    AccessMode, ChooserCapabilities, ChooserPresentation, ContentSelectionAction,
    ContentSelectionForm,
};
pub use locator::Locator;
pub use outcome::{ChooserOutcome, SelectionPayload};
pub use request::{CaptureReservations, InFlightUpload, PendingUpload, SelectionReply};
pub use resolution::{resolve, ProbedCapture, ResolvedSelection};
pub use selection::{NativeSelectionIntent, SelectionDescriptor, SelectionMode};
