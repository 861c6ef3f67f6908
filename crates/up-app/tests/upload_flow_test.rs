//! End-to-end upload chooser flow over the real filesystem adapters.
//!
//! Only the host surface is faked; reservations, size probing and the spool
//! directory are the real up-infra implementations on a temp dir.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;
use tokio::sync::oneshot;

use up_app::usecases::UploadBroker;
use up_core::ports::ChooserSurfacePort;
use up_core::upload::{
    AcceptSet, CaptureKind, ChooserCapabilities, ChooserOutcome, ChooserPresentation, Locator,
    NativeSelectionIntent, ResolvedSelection, SelectionDescriptor, SelectionMode,
    SelectionPayload,
};
use up_infra::fs::{FsCaptureStore, FsContentMetadata};
use up_infra::time::SystemClock;

static TRACE_INIT: Once = Once::new();

fn init_tracing() {
    TRACE_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

struct RecordingSurface {
    presented: Mutex<Vec<ChooserPresentation>>,
    dismissed: AtomicUsize,
}

impl RecordingSurface {
    fn new() -> Self {
        Self {
            presented: Mutex::new(Vec::new()),
            dismissed: AtomicUsize::new(0),
        }
    }

    fn last_presentation(&self) -> ChooserPresentation {
        self.presented
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("a chooser was presented")
    }
}

#[async_trait]
impl ChooserSurfacePort for RecordingSurface {
    fn capabilities(&self) -> ChooserCapabilities {
        ChooserCapabilities::default()
    }

    async fn present(&self, presentation: &ChooserPresentation) -> anyhow::Result<()> {
        self.presented.lock().unwrap().push(presentation.clone());
        Ok(())
    }

    async fn dismiss(&self) {
        self.dismissed.fetch_add(1, Ordering::SeqCst);
    }
}

fn build_broker(spool: &TempDir, surface: Arc<RecordingSurface>) -> UploadBroker {
    init_tracing();
    let capture_store = Arc::new(FsCaptureStore::new(
        spool.path().to_path_buf(),
        Arc::new(SystemClock),
    ));
    let metadata = Arc::new(FsContentMetadata);
    UploadBroker::from_ports(capture_store, metadata, surface)
}

fn descriptor(mode: SelectionMode) -> SelectionDescriptor {
    SelectionDescriptor::new(
        mode,
        NativeSelectionIntent::new(json!({"action": "open-document"})),
    )
}

#[tokio::test]
async fn upload_flow_test_generic_selection_reaches_the_requester() {
    let spool = TempDir::new().expect("temp spool");
    let surface = Arc::new(RecordingSurface::new());
    let broker = build_broker(&spool, surface.clone());

    let (tx, rx) = oneshot::channel();
    let request = broker.register(tx, descriptor(SelectionMode::Single));
    let inflight = broker
        .begin_selection(request, AcceptSet::default())
        .await
        .expect("begin selection");

    let outcome = ChooserOutcome::confirmed(SelectionPayload::single(Locator::from(
        "content://picked/doc/7",
    )));
    broker.on_outcome(inflight, outcome).await;

    assert_eq!(
        rx.await.expect("reply delivered"),
        ResolvedSelection::single(Locator::from("content://picked/doc/7"))
    );
    assert_eq!(surface.dismissed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn upload_flow_test_written_capture_beats_the_selection_payload() {
    let spool = TempDir::new().expect("temp spool");
    let surface = Arc::new(RecordingSurface::new());
    let broker = build_broker(&spool, surface.clone());

    let (tx, rx) = oneshot::channel();
    let request = broker.register(tx, descriptor(SelectionMode::Single));
    let inflight = broker
        .begin_selection(request, AcceptSet::new(true, false))
        .await
        .expect("begin selection");

    // The capture collaborator writes into its reserved output.
    let image = surface
        .last_presentation()
        .candidate(CaptureKind::Image)
        .expect("image candidate offered")
        .output
        .clone();
    std::fs::write(image.as_str(), b"jpeg bytes").expect("write into reservation");

    let outcome = ChooserOutcome::confirmed(SelectionPayload::single(Locator::from("picked")));
    broker.on_outcome(inflight, outcome).await;

    assert_eq!(
        rx.await.expect("reply delivered"),
        ResolvedSelection::single(image)
    );
}

#[tokio::test]
async fn upload_flow_test_untouched_reservations_fall_through_to_the_payload() {
    let spool = TempDir::new().expect("temp spool");
    let surface = Arc::new(RecordingSurface::new());
    let broker = build_broker(&spool, surface.clone());

    let (tx, rx) = oneshot::channel();
    let request = broker.register(tx, descriptor(SelectionMode::Multiple));
    let inflight = broker
        .begin_selection(request, AcceptSet::new(true, true))
        .await
        .expect("begin selection");

    // Both reservations exist on disk but stay empty.
    let presentation = surface.last_presentation();
    assert!(presentation.candidate(CaptureKind::Image).is_some());
    assert!(presentation.candidate(CaptureKind::Video).is_some());
    assert!(presentation.content_selection.allow_multiple);

    let outcome = ChooserOutcome::confirmed(SelectionPayload::multi(vec![
        Locator::from("picked/a"),
        Locator::from("picked/b"),
    ]));
    broker.on_outcome(inflight, outcome).await;

    assert_eq!(
        rx.await.expect("reply delivered"),
        ResolvedSelection::Selected(vec![Locator::from("picked/a"), Locator::from("picked/b")])
    );
}

#[tokio::test]
async fn upload_flow_test_cancelled_chooser_answers_empty() {
    let spool = TempDir::new().expect("temp spool");
    let surface = Arc::new(RecordingSurface::new());
    let broker = build_broker(&spool, surface.clone());

    let (tx, rx) = oneshot::channel();
    let request = broker.register(tx, descriptor(SelectionMode::Single));
    let inflight = broker
        .begin_selection(request, AcceptSet::new(true, true))
        .await
        .expect("begin selection");

    broker.on_outcome(inflight, ChooserOutcome::Cancelled).await;

    assert_eq!(rx.await.expect("reply delivered"), ResolvedSelection::Empty);
    assert_eq!(surface.dismissed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn upload_flow_test_interleaved_requests_keep_their_replies_apart() {
    let spool = TempDir::new().expect("temp spool");
    let surface = Arc::new(RecordingSurface::new());
    let broker = build_broker(&spool, surface.clone());

    let (tx_a, rx_a) = oneshot::channel();
    let (tx_b, rx_b) = oneshot::channel();
    let a = broker.register(tx_a, descriptor(SelectionMode::Single));
    let b = broker.register(tx_b, descriptor(SelectionMode::Single));

    let inflight_a = broker
        .begin_selection(a, AcceptSet::new(true, false))
        .await
        .expect("begin a");
    let inflight_b = broker
        .begin_selection(b, AcceptSet::new(true, false))
        .await
        .expect("begin b");

    // Distinct reservations even for identical requests.
    let presented = surface.presented.lock().unwrap().clone();
    let image_a = presented[0].candidate(CaptureKind::Image).unwrap().output.clone();
    let image_b = presented[1].candidate(CaptureKind::Image).unwrap().output.clone();
    assert_ne!(image_a, image_b);

    // Second chooser resolves first.
    broker
        .on_outcome(
            inflight_b,
            ChooserOutcome::confirmed(SelectionPayload::single(Locator::from("for-b"))),
        )
        .await;
    broker.on_outcome(inflight_a, ChooserOutcome::Cancelled).await;

    assert_eq!(rx_a.await.expect("reply a"), ResolvedSelection::Empty);
    assert_eq!(
        rx_b.await.expect("reply b"),
        ResolvedSelection::single(Locator::from("for-b"))
    );
}
