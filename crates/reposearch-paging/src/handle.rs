//! Consumer side of a running pager.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::error::PagerError;
use crate::snapshot::PagingSnapshot;

/// Stream of snapshots. A new subscriber first sees the latest snapshot,
/// then every later one it has time to observe.
pub type SnapshotStream<T> = WatchStream<Arc<PagingSnapshot<T>>>;

/// Requests a consumer can make of the pager task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Append,
    Prepend,
    Retry,
    Refresh,
    Access(usize),
}

/// Handle to a running pager.
///
/// Cloning is cheap and every clone talks to the same pager; the query cache
/// hands out clones of one handle for a repeated query. The pager task stops
/// when its cancellation token fires or the last clone is dropped.
pub struct PagingHandle<T> {
    inner: Arc<HandleInner<T>>,
}

struct HandleInner<T> {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Arc<PagingSnapshot<T>>>,
    cancel: CancellationToken,
}

impl<T> PagingHandle<T> {
    pub(crate) fn new(
        commands: mpsc::UnboundedSender<Command>,
        snapshots: watch::Receiver<Arc<PagingSnapshot<T>>>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                commands,
                snapshots,
                cancel,
            }),
        }
    }

    /// The latest snapshot.
    pub fn snapshot(&self) -> Arc<PagingSnapshot<T>> {
        Arc::clone(&self.inner.snapshots.borrow())
    }

    /// Wait until a snapshot satisfies `predicate`, checking the current one
    /// first.
    pub async fn wait_for<F>(&self, mut predicate: F) -> Result<Arc<PagingSnapshot<T>>, PagerError>
    where
        F: FnMut(&PagingSnapshot<T>) -> bool,
    {
        let mut rx = self.inner.snapshots.clone();
        let snapshot = rx
            .wait_for(|s| predicate(&**s))
            .await
            .map_err(|_| PagerError::Closed)?;
        Ok(Arc::clone(&snapshot))
    }

    /// Wait for the next snapshot after the current one.
    pub async fn changed(&self) -> Result<Arc<PagingSnapshot<T>>, PagerError> {
        let mut rx = self.inner.snapshots.clone();
        rx.mark_unchanged();
        rx.changed().await.map_err(|_| PagerError::Closed)?;
        Ok(Arc::clone(&rx.borrow_and_update()))
    }

    /// Load the page after the last one. A no-op while an append is in
    /// flight, after it failed (until [`retry`](Self::retry)) or once the end
    /// was reached.
    pub fn append(&self) {
        self.send(Command::Append);
    }

    /// Load the page before the first one. Guarded like [`append`](Self::append).
    pub fn prepend(&self) {
        self.send(Command::Prepend);
    }

    /// Re-issue every load whose direction is in the error state.
    pub fn retry(&self) {
        self.send(Command::Retry);
    }

    /// Invalidate the session and reload near the last accessed item.
    pub fn refresh(&self) {
        self.send(Command::Refresh);
    }

    /// Report that the item at `index` was shown. Records the refresh anchor
    /// and prefetches when `index` is close to either edge.
    pub fn access(&self, index: usize) {
        self.send(Command::Access(index));
    }

    /// Stop the pager and abandon its in-flight loads.
    pub fn cancel(&self) {
        self.inner.cancel.cancel();
    }

    /// Returns true once the pager has been cancelled or its task has
    /// stopped.
    pub fn is_closed(&self) -> bool {
        self.inner.cancel.is_cancelled() || self.inner.commands.is_closed()
    }

    /// Returns true if both handles drive the same pager.
    pub fn same_stream(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn send(&self, command: Command) {
        if self.inner.commands.send(command).is_err() {
            trace!(?command, "pager stopped, dropping command");
        }
    }
}

impl<T> PagingHandle<T>
where
    T: Send + Sync + 'static,
{
    /// Subscribe to snapshots as a [`Stream`](futures_util::Stream).
    pub fn subscribe(&self) -> SnapshotStream<T> {
        WatchStream::new(self.inner.snapshots.clone())
    }
}

impl<T> Clone for PagingHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for PagingHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.inner.snapshots.borrow();
        f.debug_struct("PagingHandle")
            .field("session", &snapshot.session())
            .field("items", &snapshot.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}
