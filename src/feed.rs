//! Subscription lifecycle for one remote analytic object.
//!
//! A feed owns a session-scoped clone of the object's query definition,
//! fetches the full matrix once at open time, and keeps display
//! metadata fresh from the clone's change notifications. Row data is
//! captured once; only labels refresh reactively thereafter.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::data_types::{ChartMetadata, RowSet};
use crate::engine::{Document, PageRequest, RemoteObject, CUBE_PATH};
use crate::error::{ChartError, ChartResult};

pub struct DataFeed;

impl DataFeed {
    /// Opens a subscription to `object_id`: clears stale selection state
    /// on the base object, clones its definition into the session, and
    /// fetches the complete matrix in one bounded page.
    ///
    /// Fails with [`ChartError::Connection`] or
    /// [`ChartError::ObjectNotFound`]; no partial handle is installed on
    /// failure. A cube with no dimensions or measures yields an empty
    /// row set instead of an error.
    pub async fn open(document: Arc<dyn Document>, object_id: &str) -> ChartResult<FeedHandle> {
        let base = document.get_object(object_id).await?;
        base.clear_selections(CUBE_PATH).await?;

        // The base object is only read; the session clone is private to
        // this handle.
        let properties = base.get_properties().await?;
        drop(base);
        let session = document.create_session_object(properties).await?;

        let layout = session.get_layout().await?;
        let (metadata, rows) = match ChartMetadata::from_layout(&layout) {
            Ok(metadata) => {
                let size = layout.cube.size;
                let rows = if size.rows == 0 {
                    RowSet::new()
                } else {
                    let page = PageRequest {
                        top: 0,
                        left: 0,
                        width: size.columns,
                        height: size.rows,
                    };
                    let pages = session.get_hypercube_data(CUBE_PATH, &[page]).await?;
                    let matrix = pages.into_iter().next().map(|p| p.matrix).unwrap_or_default();
                    RowSet::from_matrix(matrix)
                };
                (metadata, rows)
            }
            Err(ChartError::EmptyData) => {
                warn!(object_id, "cube has no dimensions or measures, rendering empty");
                (ChartMetadata::default(), RowSet::new())
            }
            Err(err) => return Err(err),
        };

        let (tx, rx) = watch::channel(metadata);
        let closed = Arc::new(AtomicBool::new(false));
        let listener = spawn_change_listener(session.clone(), tx, closed.clone());

        debug!(object_id, rows = rows.len(), "feed opened");
        Ok(FeedHandle {
            rows,
            metadata: rx,
            session,
            listener: Some(listener),
            closed,
        })
    }
}

/// One open subscription: the session clone plus its change listener.
pub struct FeedHandle {
    rows: RowSet,
    metadata: watch::Receiver<ChartMetadata>,
    session: Arc<dyn RemoteObject>,
    listener: Option<JoinHandle<()>>,
    closed: Arc<AtomicBool>,
}

impl std::fmt::Debug for FeedHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedHandle")
            .field("closed", &self.closed.load(Ordering::Acquire))
            .field("listening", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl FeedHandle {
    /// The normalized matrix captured at open time.
    pub fn rows(&self) -> &RowSet {
        &self.rows
    }

    /// Latest display metadata.
    pub fn metadata(&self) -> ChartMetadata {
        self.metadata.borrow().clone()
    }

    /// Watch endpoint for awaiting metadata changes.
    pub fn metadata_watch(&self) -> watch::Receiver<ChartMetadata> {
        self.metadata.clone()
    }

    /// Session object backing this feed.
    pub fn session(&self) -> &Arc<dyn RemoteObject> {
        &self.session
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Detaches the change listener; no further metadata deliveries
    /// occur. Idempotent, and safe while a layout re-read is in flight:
    /// the in-flight result is discarded.
    pub fn close(&mut self) {
        self.closed.store(true, Ordering::Release);
        if let Some(listener) = self.listener.take() {
            listener.abort();
            debug!("feed closed, change listener detached");
        }
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.close();
    }
}

fn spawn_change_listener(
    object: Arc<dyn RemoteObject>,
    tx: watch::Sender<ChartMetadata>,
    closed: Arc<AtomicBool>,
) -> JoinHandle<()> {
    let mut changes = object.subscribe_changed();
    tokio::spawn(async move {
        loop {
            match changes.recv().await {
                // Missed notifications coalesce into the next re-read.
                Ok(()) | Err(RecvError::Lagged(_)) => {}
                Err(RecvError::Closed) => break,
            }
            // Metadata only: the row matrix is not re-fetched here.
            let layout = match object.get_layout().await {
                Ok(layout) => layout,
                Err(err) => {
                    warn!(%err, "layout re-read failed after change notification");
                    continue;
                }
            };
            if closed.load(Ordering::Acquire) {
                break;
            }
            match ChartMetadata::from_layout(&layout) {
                Ok(metadata) => {
                    let _ = tx.send(metadata);
                }
                Err(err) => warn!(%err, "metadata re-derivation failed"),
            }
        }
    })
}
