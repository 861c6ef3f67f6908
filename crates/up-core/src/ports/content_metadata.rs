use async_trait::async_trait;

use crate::upload::Locator;

/// Byte-size lookup for locators.
#[async_trait]
pub trait ContentMetadataPort: Send + Sync {
    /// Reported size of the resource behind `locator`.
    ///
    /// `Ok(None)` when the backing store has no answer for it (missing
    /// entry, never written). Errors are reserved for the lookup machinery
    /// itself; resolution treats both the same as size zero.
    async fn size_of(&self, locator: &Locator) -> anyhow::Result<Option<u64>>;
}

#[cfg(test)]
mockall::mock! {
    pub ContentMetadata {}

    #[async_trait]
    impl ContentMetadataPort for ContentMetadata {
        async fn size_of(&self, locator: &Locator) -> anyhow::Result<Option<u64>>;
    }
}
