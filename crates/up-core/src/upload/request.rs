//! Pending upload request handles.
//!
//! One handle per logical request, moved by value through presentation and
//! back. There is no shared "current request" slot anywhere: a burst of
//! requests cannot overwrite each other's replies, and delivering twice does
//! not typecheck because delivery consumes the handle.

use tokio::sync::oneshot;
use tracing::warn;

use super::{AcquisitionCandidate, CaptureKind, Locator, ResolvedSelection, SelectionDescriptor};
use crate::ids::RequestId;

/// One-shot channel the resolved selection is delivered on.
pub type SelectionReply = oneshot::Sender<ResolvedSelection>;

/// A registered upload request waiting for its chooser to be presented.
#[derive(Debug)]
pub struct PendingUpload {
    id: RequestId,
    descriptor: SelectionDescriptor,
    reply: Option<SelectionReply>,
}

impl PendingUpload {
    pub fn new(descriptor: SelectionDescriptor, reply: SelectionReply) -> Self {
        Self {
            id: RequestId::new(),
            descriptor,
            reply: Some(reply),
        }
    }

    /// A request with nowhere to deliver to. Resolution still runs and the
    /// surface is still torn down; delivery becomes a logged no-op.
    pub fn detached(descriptor: SelectionDescriptor) -> Self {
        Self {
            id: RequestId::new(),
            descriptor,
            reply: None,
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn descriptor(&self) -> &SelectionDescriptor {
        &self.descriptor
    }

    /// Completes the reply channel, consuming the request.
    ///
    /// A missing reply or a dropped receiver degrades to a warn. The chooser
    /// contract is "always close with an answer", never a fault, so there is
    /// nothing to propagate here.
    pub fn deliver(self, selection: ResolvedSelection) {
        match self.reply {
            Some(reply) => {
                if reply.send(selection).is_err() {
                    warn!(request_id = %self.id, "upload requester dropped its reply receiver");
                }
            }
            None => {
                warn!(request_id = %self.id, "no reply registered for upload request, dropping selection");
            }
        }
    }
}

/// Capture outputs reserved for one request, keyed by modality.
///
/// A modality is absent when it was not accepted or its reservation failed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptureReservations {
    pub image: Option<Locator>,
    pub video: Option<Locator>,
}

impl CaptureReservations {
    pub fn from_candidates(candidates: &[AcquisitionCandidate]) -> Self {
        let mut reservations = Self::default();
        for candidate in candidates {
            reservations.bind(candidate.kind, candidate.output.clone());
        }
        reservations
    }

    pub fn bind(&mut self, kind: CaptureKind, output: Locator) {
        match kind {
            CaptureKind::Image => self.image = Some(output),
            CaptureKind::Video => self.video = Some(output),
        }
    }

    pub fn get(&self, kind: CaptureKind) -> Option<&Locator> {
        match kind {
            CaptureKind::Image => self.image.as_ref(),
            CaptureKind::Video => self.video.as_ref(),
        }
    }
}

/// A presented request: the pending handle plus its capture reservations.
///
/// Handed to the host while the chooser is on screen and consumed by exactly
/// one outcome.
#[derive(Debug)]
pub struct InFlightUpload {
    request: PendingUpload,
    reservations: CaptureReservations,
}

impl InFlightUpload {
    pub fn new(request: PendingUpload, reservations: CaptureReservations) -> Self {
        Self {
            request,
            reservations,
        }
    }

    pub fn id(&self) -> RequestId {
        self.request.id()
    }

    pub fn reservations(&self) -> &CaptureReservations {
        &self.reservations
    }

    /// Answers the requester, consuming the in-flight request.
    pub fn deliver(self, selection: ResolvedSelection) {
        self.request.deliver(selection);
    }
}
