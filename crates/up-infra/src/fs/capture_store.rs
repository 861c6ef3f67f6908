use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use up_core::config::CaptureConfig;
use up_core::ports::{CaptureStoreError, CaptureStorePort, ClockPort};
use up_core::upload::{CaptureKind, Locator};

const IMAGE_PREFIX: &str = "image-";
const IMAGE_SUFFIX: &str = ".jpg";
const VIDEO_PREFIX: &str = "video-";
const VIDEO_SUFFIX: &str = ".mp4";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Filesystem-backed capture spool.
///
/// `reserve` pre-creates an empty file named
/// `<prefix><timestamp>-<uniq><suffix>` under the spool directory and hands
/// its path back as the locator, so the capture collaborator has a writable
/// destination before it ever starts. Empty files that never get written are
/// exactly what resolution expects from an unused reservation.
pub struct FsCaptureStore {
    spool_dir: PathBuf,
    clock: Arc<dyn ClockPort>,
}

impl FsCaptureStore {
    pub fn new(spool_dir: PathBuf, clock: Arc<dyn ClockPort>) -> Self {
        Self { spool_dir, clock }
    }

    /// Builds the store from config, falling back to the platform spool
    /// location when no directory is configured.
    pub fn from_config(config: &CaptureConfig, clock: Arc<dyn ClockPort>) -> Self {
        Self::new(super::spool::resolve_dir(config), clock)
    }

    fn file_name(&self, kind: CaptureKind) -> String {
        let (prefix, suffix) = match kind {
            CaptureKind::Image => (IMAGE_PREFIX, IMAGE_SUFFIX),
            CaptureKind::Video => (VIDEO_PREFIX, VIDEO_SUFFIX),
        };
        let stamp = format_timestamp(self.clock.now_ms());
        // Timestamps collide within a second; the random fragment keeps
        // reservations distinct.
        let uniq = uuid::Uuid::new_v4().simple().to_string();
        format!("{}{}-{}{}", prefix, stamp, &uniq[..8], suffix)
    }
}

fn format_timestamp(now_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(now_ms)
        .unwrap_or_default()
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

#[async_trait]
impl CaptureStorePort for FsCaptureStore {
    async fn reserve(&self, kind: CaptureKind) -> Result<Locator, CaptureStoreError> {
        fs::create_dir_all(&self.spool_dir)
            .await
            .map_err(CaptureStoreError::Spool)?;

        let path = self.spool_dir.join(self.file_name(kind));
        fs::File::create(&path)
            .await
            .map_err(CaptureStoreError::Create)?;

        debug!(kind = %kind, path = %path.display(), "reserved capture output");
        Ok(Locator::new(path.to_string_lossy()))
    }
}
