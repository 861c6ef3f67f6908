use std::sync::Arc;

use tracing::{info, warn};
use up_core::ports::{CaptureStorePort, ChooserSurfacePort, ContentMetadataPort};
use up_core::upload::{
    AcceptSet, CaptureReservations, ChooserOutcome, InFlightUpload, PendingUpload,
    ResolvedSelection, SelectionDescriptor, SelectionReply,
};

use super::{ComposeChooser, ResolveSelection};

/// Why a chooser never reached the screen.
#[derive(Debug, thiserror::Error)]
pub enum BeginSelectionError {
    /// The host surface refused to present. The pending reply has already
    /// been answered with the empty selection; there is nothing to retry.
    #[error("chooser presentation failed: {0}")]
    Presentation(#[source] anyhow::Error),
}

/// Orchestrates one upload request end to end: register a pending handle,
/// compose and present the chooser, resolve the eventual outcome.
///
/// The broker itself holds no request state. Each request lives in its own
/// handle, so overlapping requests cannot overwrite each other's replies and
/// an outcome can only ever answer the request it was produced for.
pub struct UploadBroker {
    compose: ComposeChooser,
    resolve: ResolveSelection,
    surface: Arc<dyn ChooserSurfacePort>,
}

impl UploadBroker {
    pub fn from_ports(
        capture_store: Arc<dyn CaptureStorePort>,
        metadata: Arc<dyn ContentMetadataPort>,
        surface: Arc<dyn ChooserSurfacePort>,
    ) -> Self {
        Self {
            compose: ComposeChooser::from_ports(capture_store),
            resolve: ResolveSelection::from_ports(metadata, Arc::clone(&surface)),
            surface,
        }
    }

    /// Registers an upload request: binds the renderer's descriptor and the
    /// one-shot reply into a fresh pending handle.
    pub fn register(&self, reply: SelectionReply, descriptor: SelectionDescriptor) -> PendingUpload {
        let request = PendingUpload::new(descriptor, reply);
        info!(request_id = %request.id(), "upload request registered");
        request
    }

    /// Composes the chooser for `accept` and puts it on screen, moving the
    /// request in flight.
    ///
    /// On presentation failure the requester is answered with the empty
    /// selection before the error is returned, so callers never owe the
    /// renderer anything afterwards.
    #[tracing::instrument(
        name = "usecase.begin_selection.execute",
        skip(self, request),
        fields(request_id = %request.id())
    )]
    pub async fn begin_selection(
        &self,
        request: PendingUpload,
        accept: AcceptSet,
    ) -> Result<InFlightUpload, BeginSelectionError> {
        let presentation = self
            .compose
            .execute(accept, request.descriptor(), self.surface.capabilities())
            .await;
        let reservations = CaptureReservations::from_candidates(&presentation.candidates);

        if let Err(e) = self.surface.present(&presentation).await {
            warn!(error = %e, "chooser presentation failed, answering empty");
            request.deliver(ResolvedSelection::Empty);
            self.surface.dismiss().await;
            return Err(BeginSelectionError::Presentation(e));
        }

        info!(candidates = presentation.candidates.len(), "chooser presented");
        Ok(InFlightUpload::new(request, reservations))
    }

    /// Hands the outcome reported by the host lifecycle to resolution and
    /// answers the requester. Consumes the in-flight handle: exactly one
    /// outcome per request.
    pub async fn on_outcome(
        &self,
        inflight: InFlightUpload,
        outcome: ChooserOutcome,
    ) -> ResolvedSelection {
        self.resolve.execute(inflight, outcome).await
    }
}
