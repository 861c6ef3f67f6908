use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How many items the renderer's request allows the user to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// Platform selection intent pre-built by the renderer.
///
/// Opaque to this crate: the composer decorates around it (selection form,
/// grants, multi-select) and hands it through to the host surface verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeSelectionIntent(Value);

impl NativeSelectionIntent {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for NativeSelectionIntent {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The renderer's file-chooser request: selection mode plus the selection
/// intent it already built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionDescriptor {
    pub mode: SelectionMode,
    pub intent: NativeSelectionIntent,
}

impl SelectionDescriptor {
    pub fn new(mode: SelectionMode, intent: NativeSelectionIntent) -> Self {
        Self { mode, intent }
    }

    pub fn allows_multiple(&self) -> bool {
        matches!(self.mode, SelectionMode::Multiple)
    }
}
