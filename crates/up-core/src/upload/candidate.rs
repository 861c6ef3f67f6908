use serde::{Deserialize, Serialize};

use super::{CaptureKind, Locator};

/// A capture action offered in the chooser, bound to its pre-reserved output.
///
/// The capture collaborator writes into `output`; whether it actually did is
/// only known at resolution time, by size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquisitionCandidate {
    pub kind: CaptureKind,
    pub output: Locator,
}

impl AcquisitionCandidate {
    pub fn new(kind: CaptureKind, output: Locator) -> Self {
        Self { kind, output }
    }
}
