use async_trait::async_trait;

use crate::upload::{ChooserCapabilities, ChooserPresentation};

/// The transient host surface that shows the composite chooser.
///
/// One surface instance serves one request at a time; the host lifecycle
/// reports the outcome back through the broker, not through this port.
#[async_trait]
pub trait ChooserSurfacePort: Send + Sync {
    /// Selection forms this host can present.
    fn capabilities(&self) -> ChooserCapabilities;

    /// Put the composite chooser on screen. Returns once dispatched; the
    /// outcome arrives later through the host lifecycle.
    async fn present(&self, presentation: &ChooserPresentation) -> anyhow::Result<()>;

    /// Tear the surface down. Called unconditionally once a request has been
    /// answered, whether anything was selected or not.
    async fn dismiss(&self);
}

#[cfg(test)]
mockall::mock! {
    pub ChooserSurface {}

    #[async_trait]
    impl ChooserSurfacePort for ChooserSurface {
        fn capabilities(&self) -> ChooserCapabilities;
        async fn present(&self, presentation: &ChooserPresentation) -> anyhow::Result<()>;
        async fn dismiss(&self);
    }
}
