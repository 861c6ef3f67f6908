use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use up_core::ports::ContentMetadataPort;
use up_core::upload::Locator;

/// Size lookup over plain filesystem paths.
///
/// Lookup failures become `Ok(None)`: a reservation the capture collaborator
/// deleted or never flushed has no size, which is an answer, not an error.
pub struct FsContentMetadata;

#[async_trait]
impl ContentMetadataPort for FsContentMetadata {
    async fn size_of(&self, locator: &Locator) -> anyhow::Result<Option<u64>> {
        match fs::metadata(Path::new(locator.as_str())).await {
            Ok(meta) => Ok(Some(meta.len())),
            Err(e) => {
                debug!(locator = %locator, error = %e, "no metadata for locator");
                Ok(None)
            }
        }
    }
}
