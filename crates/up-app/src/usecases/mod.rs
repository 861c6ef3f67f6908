//! Business logic use cases
//!
//! One use case per decision the upload flow makes:
//! - `ComposeChooser`: what the user gets to choose from
//! - `ResolveSelection`: what the chooser outcome actually means
//! - `UploadBroker`: the request lifecycle around the two

pub mod broker;
pub mod compose_chooser;
pub mod resolve_selection;

pub use broker::{BeginSelectionError, UploadBroker};
pub use compose_chooser::ComposeChooser;
pub use resolve_selection::ResolveSelection;
