//! # up-app
//!
//! Application layer for UniPick: the use cases that drive chooser
//! composition, presentation and outcome resolution over the up-core ports.

pub mod usecases;

pub use usecases::{BeginSelectionError, ComposeChooser, ResolveSelection, UploadBroker};
