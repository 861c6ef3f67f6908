use serde::{Deserialize, Serialize};

use super::Locator;

/// Result payload of the generic content-selection path.
///
/// Mirrors the two accessors platforms expose on a selection result: a
/// primary single item and an enumerated item list. Both may be populated at
/// once; resolution prefers the single item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionPayload {
    pub single: Option<Locator>,
    pub multi: Option<Vec<Locator>>,
}

impl SelectionPayload {
    pub fn single(locator: Locator) -> Self {
        Self {
            single: Some(locator),
            multi: None,
        }
    }

    pub fn multi(locators: Vec<Locator>) -> Self {
        Self {
            single: None,
            multi: Some(locators),
        }
    }
}

/// Terminal status reported by the host when the chooser surface closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChooserOutcome {
    /// The user backed out of the chooser entirely.
    Cancelled,
    /// The chooser closed claiming success. The payload is present only when
    /// the generic selection path produced one; capture paths confirm with
    /// nothing attached.
    Confirmed { payload: Option<SelectionPayload> },
}

impl ChooserOutcome {
    pub fn confirmed(payload: SelectionPayload) -> Self {
        Self::Confirmed {
            payload: Some(payload),
        }
    }

    pub fn confirmed_without_payload() -> Self {
        Self::Confirmed { payload: None }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
