use async_trait::async_trait;

use super::errors::CaptureStoreError;
use crate::upload::{CaptureKind, Locator};

/// Reserves pre-allocated capture destinations.
///
/// A reservation must point at real, writable storage before the user ever
/// opens the capture collaborator: that collaborator writes into it, and
/// resolution later asks the metadata port whether it actually did.
#[async_trait]
pub trait CaptureStorePort: Send + Sync {
    /// Reserve a fresh output locator for one capture modality.
    ///
    /// Each call yields a distinct locator, even within the same request.
    async fn reserve(&self, kind: CaptureKind) -> Result<Locator, CaptureStoreError>;
}

#[cfg(test)]
mockall::mock! {
    pub CaptureStore {}

    #[async_trait]
    impl CaptureStorePort for CaptureStore {
        async fn reserve(&self, kind: CaptureKind) -> Result<Locator, CaptureStoreError>;
    }
}
