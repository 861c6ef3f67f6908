use std::path::PathBuf;

/// Upload chooser configuration DTO (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadConfig {
    pub capture: CaptureConfig,
}

/// Capture spool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Spool directory for pre-reserved capture outputs (path info only,
    /// no existence check). `None` means the adapter picks the platform
    /// default.
    pub spool_dir: Option<PathBuf>,
}

impl UploadConfig {
    /// Create UploadConfig from a TOML value.
    ///
    /// Must not contain validation or default-path logic. A missing key is a
    /// valid "fact" and stays `None`.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            capture: CaptureConfig {
                spool_dir: toml_value
                    .get("capture")
                    .and_then(|c| c.get("spool_dir"))
                    .and_then(|v| v.as_str())
                    .map(PathBuf::from),
            },
        })
    }
}
