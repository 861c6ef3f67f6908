//! # Pure Data Module - Configuration DTOs Only
//!
//! Data structures plus TOML → DTO mapping, nothing else. No validation,
//! no default-path calculation; absence is a fact the adapters interpret.

mod upload_config;

pub use upload_config::{CaptureConfig, UploadConfig};
