//! # up-infra
//!
//! Infrastructure adapters for UniPick: filesystem-backed implementations of
//! the up-core ports.

pub mod fs;
pub mod time;

pub use fs::{FsCaptureStore, FsContentMetadata};
pub use time::SystemClock;
