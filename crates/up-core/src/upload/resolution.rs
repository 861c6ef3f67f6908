//! Chooser outcome resolution.
//!
//! A single outcome can have several plausible interpretations at once: a
//! sized image capture, a sized video capture and a selection payload may all
//! be present. Resolution is first-match-wins over a fixed priority order,
//! so exactly one path is ever attributed:
//!
//! 1. cancelled chooser
//! 2. image capture that wrote data
//! 3. video capture that wrote data
//! 4. selection payload, single item before item list
//! 5. nothing

use serde::{Deserialize, Serialize};

use super::{ChooserOutcome, Locator, SelectionPayload};

/// A reserved capture output together with its probed byte size.
///
/// `size` is what the metadata collaborator reported. `None` means the lookup
/// had no answer, which resolution treats the same as zero: an unreadable
/// reservation never counts as a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedCapture {
    pub output: Locator,
    pub size: Option<u64>,
}

impl ProbedCapture {
    pub fn new(output: Locator, size: Option<u64>) -> Self {
        Self { output, size }
    }

    fn has_data(&self) -> bool {
        self.size.unwrap_or(0) > 0
    }
}

/// The final answer for one upload request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedSelection {
    /// Ordered, non-empty locator list.
    Selected(Vec<Locator>),
    /// Explicitly nothing. Cancellation and failure both land here; the
    /// requester only ever learns "no files".
    Empty,
}

impl ResolvedSelection {
    pub fn single(locator: Locator) -> Self {
        Self::Selected(vec![locator])
    }

    /// Builds a selection from a locator list, normalizing an empty list to
    /// `Empty` so `Selected` always carries at least one item.
    pub fn from_locators(locators: Vec<Locator>) -> Self {
        if locators.is_empty() {
            Self::Empty
        } else {
            Self::Selected(locators)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Selected(locators) => locators.len(),
            Self::Empty => 0,
        }
    }

    pub fn into_locators(self) -> Vec<Locator> {
        match self {
            Self::Selected(locators) => locators,
            Self::Empty => Vec::new(),
        }
    }
}

/// Resolves one chooser outcome against the probed capture reservations.
///
/// Pure; all I/O (the size probes) happens before this is called. The
/// priority order above is deliberate, keep it when touching this.
pub fn resolve(
    outcome: &ChooserOutcome,
    image: Option<&ProbedCapture>,
    video: Option<&ProbedCapture>,
) -> ResolvedSelection {
    let payload = match outcome {
        ChooserOutcome::Cancelled => return ResolvedSelection::Empty,
        ChooserOutcome::Confirmed { payload } => payload.as_ref(),
    };

    if let Some(capture) = image.filter(|c| c.has_data()) {
        return ResolvedSelection::single(capture.output.clone());
    }
    if let Some(capture) = video.filter(|c| c.has_data()) {
        return ResolvedSelection::single(capture.output.clone());
    }

    match payload {
        Some(SelectionPayload {
            single: Some(locator),
            ..
        }) => ResolvedSelection::single(locator.clone()),
        Some(SelectionPayload {
            multi: Some(items), ..
        }) => ResolvedSelection::from_locators(items.clone()),
        _ => ResolvedSelection::Empty,
    }
}
