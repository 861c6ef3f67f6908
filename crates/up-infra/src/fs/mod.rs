//! Filesystem adapters.

mod capture_store;
mod content_metadata;
pub mod spool;

pub use capture_store::FsCaptureStore;
pub use content_metadata::FsContentMetadata;
