use std::path::PathBuf;

use up_core::config::CaptureConfig;

const SPOOL_DIR_NAME: &str = "unipick";
const CAPTURES_DIR_NAME: &str = "captures";

/// Resolve the capture spool directory.
///
/// An explicit config path wins. Otherwise the platform cache directory is
/// used (captures are disposable), with the system temp dir as last resort.
/// The directory is not created here; the store creates it on first reserve.
pub fn resolve_dir(config: &CaptureConfig) -> PathBuf {
    if let Some(dir) = &config.spool_dir {
        return dir.clone();
    }
    dirs::cache_dir()
        .map(|cache| cache.join(SPOOL_DIR_NAME).join(CAPTURES_DIR_NAME))
        .unwrap_or_else(|| std::env::temp_dir().join(SPOOL_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_spool_dir_wins() {
        let config = CaptureConfig {
            spool_dir: Some(PathBuf::from("/custom/spool")),
        };
        assert_eq!(resolve_dir(&config), PathBuf::from("/custom/spool"));
    }

    #[test]
    fn test_default_spool_dir_is_somewhere_writable() {
        let dir = resolve_dir(&CaptureConfig::default());
        assert!(dir.components().any(|c| c.as_os_str() == "unipick"));
    }
}
