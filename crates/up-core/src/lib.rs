//! # up-core
//!
//! Core domain models and business logic for UniPick.
//!
//! This crate contains the pure chooser composition and outcome resolution
//! logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod ports;
pub mod upload;

// Re-export commonly used types at the crate root
pub use config::{CaptureConfig, UploadConfig};
pub use ids::RequestId;
pub use upload::{
    AcceptSet, AcquisitionCandidate, CaptureKind, ChooserOutcome, ChooserPresentation,
    InFlightUpload, Locator, PendingUpload, ResolvedSelection, SelectionDescriptor,
};
