//! Port interfaces for the application layer
//!
//! Ports define the contract between the chooser use cases and whatever host
//! embeds them. Infrastructure and platform layers implement these; the core
//! business logic stays independent of both.

mod capture_store;
mod chooser_surface;
mod clock;
mod content_metadata;
pub mod errors;

pub use capture_store::CaptureStorePort;
pub use chooser_surface::ChooserSurfacePort;
pub use clock::*;
pub use content_metadata::ContentMetadataPort;
pub use errors::CaptureStoreError;
