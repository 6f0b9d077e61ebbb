//! The pager: drives a [`PagingSource`] and publishes snapshots.
//!
//! Each pager runs as one tokio task that owns the current source, the
//! loaded pages and the per-direction load states. Loads run as futures
//! polled by that task, at most one per [`LoadType`], so results are applied
//! strictly in completion order without locking. Consumers talk to the task
//! through a [`PagingHandle`].

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::future::BoxFuture;
use futures_util::stream::FuturesUnordered;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use reposearch_core::{
    LoadParams, LoadResult, LoadState, LoadStates, LoadType, Page, PagingSource, PagingState,
};

use crate::config::PagingConfig;
use crate::handle::{Command, PagingHandle};
use crate::snapshot::PagingSnapshot;

type SourceFactory<S> = Arc<dyn Fn() -> S + Send + Sync>;

/// Builder for a paged stream over sources produced by a factory.
///
/// The factory is called once when the pager starts and again on every
/// invalidation, so each session gets a fresh source.
pub struct Pager<S: PagingSource> {
    config: PagingConfig,
    factory: SourceFactory<S>,
}

impl<S: PagingSource> Pager<S> {
    pub fn new<F>(config: PagingConfig, factory: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        Self {
            config,
            factory: Arc::new(factory),
        }
    }

    /// Spawn the pager task and issue the initial refresh.
    ///
    /// The task stops when `cancel` fires or every handle is dropped;
    /// in-flight loads are abandoned and their results discarded.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(self, cancel: CancellationToken) -> PagingHandle<S::Item> {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(PagingSnapshot::initial()));

        let task = PagerTask {
            source: Arc::new((self.factory)()),
            config: self.config,
            factory: self.factory,
            session: 0,
            pages: VecDeque::new(),
            loaded_keys: HashSet::new(),
            states: LoadStates::refreshing(),
            failed: HashMap::new(),
            anchor: None,
            resume_offset: None,
            snapshots: snapshot_tx,
            in_flight: FuturesUnordered::new(),
        };

        tokio::spawn(task.run(command_rx, cancel.clone()));

        PagingHandle::new(command_tx, snapshot_rx, cancel)
    }
}

/// A finished load, tagged with the session that issued it.
struct Completed<K, T> {
    session: u64,
    load_type: LoadType,
    params: LoadParams<K>,
    result: LoadResult<K, T>,
}

type InFlight<K, T> = FuturesUnordered<BoxFuture<'static, Completed<K, T>>>;

struct PagerTask<S: PagingSource> {
    config: PagingConfig,
    factory: SourceFactory<S>,
    source: Arc<S>,
    session: u64,
    pages: VecDeque<Page<S::Key, S::Item>>,
    loaded_keys: HashSet<S::Key>,
    states: LoadStates,
    /// Params of the last failed load per direction, re-issued by retry.
    failed: HashMap<LoadType, LoadParams<S::Key>>,
    anchor: Option<usize>,
    /// Anchor offset within the page a pending refresh resumes from.
    resume_offset: Option<usize>,
    snapshots: watch::Sender<Arc<PagingSnapshot<S::Item>>>,
    in_flight: InFlight<S::Key, S::Item>,
}

impl<S: PagingSource> PagerTask<S> {
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>, cancel: CancellationToken) {
        self.launch(
            LoadType::Refresh,
            LoadParams::new(None, self.config.initial_load_size),
        );
        self.publish();

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(session = self.session, "pager cancelled");
                    break;
                }
                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => {
                        debug!(session = self.session, "all handles dropped, stopping pager");
                        break;
                    }
                },
                Some(done) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    self.complete(done);
                }
            }
        }
    }

    fn handle(&mut self, command: Command) {
        trace!(?command, "pager command");
        match command {
            Command::Append => self.extend(LoadType::Append),
            Command::Prepend => self.extend(LoadType::Prepend),
            Command::Retry => self.retry(),
            Command::Refresh => self.invalidate(),
            Command::Access(index) => self.access(index),
        }
    }

    /// Start an append or prepend if that direction is idle and not finished.
    fn extend(&mut self, load_type: LoadType) {
        if !matches!(self.states.refresh, LoadState::NotLoading { .. }) {
            return;
        }
        if *self.states.get(load_type) != LoadState::INCOMPLETE {
            return;
        }

        let edge = match load_type {
            LoadType::Append => self.pages.back().map(|p| p.next_key),
            LoadType::Prepend => self.pages.front().map(|p| p.prev_key),
            LoadType::Refresh => return,
        };
        let Some(key) = edge else {
            return;
        };

        match key {
            None => self.states.set(load_type, LoadState::COMPLETE),
            Some(key) if self.loaded_keys.contains(&key) => {
                warn!(%load_type, ?key, "source returned an already loaded key, ending pagination");
                self.states.set(load_type, LoadState::COMPLETE);
            }
            Some(key) => {
                self.launch(load_type, LoadParams::new(Some(key), self.config.page_size));
            }
        }
        self.publish();
    }

    fn retry(&mut self) {
        let failed: Vec<_> = LoadType::ALL
            .into_iter()
            .filter(|t| self.states.get(*t).is_error())
            .filter_map(|t| self.failed.get(&t).map(|params| (t, *params)))
            .collect();

        if failed.is_empty() {
            return;
        }

        for (load_type, params) in failed {
            debug!(%load_type, key = ?params.key, "retrying load");
            self.launch(load_type, params);
        }
        self.publish();
    }

    /// Start a new session on a fresh source, resuming near the anchor.
    fn invalidate(&mut self) {
        let state = self.paging_state();
        self.resume_offset = self.anchor.and_then(|anchor| self.offset_in_page(anchor));

        self.session += 1;
        self.in_flight = FuturesUnordered::new();
        self.failed.clear();
        self.source = Arc::new((self.factory)());

        let key = self.source.refresh_key(&state);
        debug!(session = self.session, ?key, "invalidated, refreshing");

        self.states = LoadStates::refreshing();
        self.launch(
            LoadType::Refresh,
            LoadParams::new(key, self.config.initial_load_size),
        );
        self.publish();
    }

    fn access(&mut self, index: usize) {
        self.anchor = Some(index);

        let count = self.item_count();
        if count == 0 {
            return;
        }

        let distance = self.config.prefetch_distance as usize;
        if index.saturating_add(distance) >= count {
            self.extend(LoadType::Append);
        }
        if index < distance {
            self.extend(LoadType::Prepend);
        }
    }

    fn launch(&mut self, load_type: LoadType, params: LoadParams<S::Key>) {
        self.states.set(load_type, LoadState::Loading);

        let source = Arc::clone(&self.source);
        let session = self.session;
        trace!(%load_type, key = ?params.key, load_size = params.load_size, "launching load");

        self.in_flight.push(Box::pin(async move {
            let result = source.load(params).await;
            Completed {
                session,
                load_type,
                params,
                result,
            }
        }));
    }

    fn complete(&mut self, done: Completed<S::Key, S::Item>) {
        if done.session != self.session {
            trace!(session = done.session, "dropping result of an abandoned session");
            return;
        }

        let load_type = done.load_type;
        match done.result {
            LoadResult::Page(page) => {
                debug!(%load_type, key = ?done.params.key, items = page.len(), "page loaded");
                self.failed.remove(&load_type);

                let edge_state = |key: &Option<S::Key>| {
                    if key.is_none() {
                        LoadState::COMPLETE
                    } else {
                        LoadState::INCOMPLETE
                    }
                };

                match load_type {
                    LoadType::Refresh => {
                        self.pages.clear();
                        self.loaded_keys.clear();
                        self.anchor = self
                            .resume_offset
                            .take()
                            .map(|offset| offset.min(page.len().saturating_sub(1)));
                        self.states = LoadStates {
                            refresh: LoadState::INCOMPLETE,
                            prepend: edge_state(&page.prev_key),
                            append: edge_state(&page.next_key),
                        };
                        self.pages.push_back(page);
                    }
                    LoadType::Append => {
                        self.states.append = edge_state(&page.next_key);
                        self.pages.push_back(page);
                    }
                    LoadType::Prepend => {
                        self.states.prepend = edge_state(&page.prev_key);
                        if let Some(anchor) = self.anchor.as_mut() {
                            *anchor += page.len();
                        }
                        self.pages.push_front(page);
                    }
                }

                let key = match load_type {
                    LoadType::Refresh => done.params.key.or_else(|| self.source.initial_key()),
                    _ => done.params.key,
                };
                if let Some(key) = key {
                    self.loaded_keys.insert(key);
                }
            }
            LoadResult::Error(err) => {
                warn!(%load_type, key = ?done.params.key, error = %err, "load failed");
                self.failed.insert(load_type, done.params);
                self.states.set(load_type, LoadState::Error(err));
            }
        }

        self.publish();
    }

    /// Position of `anchor` within the page holding it, clamped to the last
    /// non-empty page like [`PagingState::closest_page_to_position`].
    fn offset_in_page(&self, anchor: usize) -> Option<usize> {
        let mut remaining = anchor;
        for page in &self.pages {
            if remaining < page.len() {
                return Some(remaining);
            }
            remaining -= page.len();
        }
        self.pages
            .iter()
            .rev()
            .find(|p| !p.is_empty())
            .map(|p| p.len() - 1)
    }

    fn item_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    fn paging_state(&self) -> PagingState<S::Key, S::Item> {
        PagingState::new(self.pages.iter().cloned().collect(), self.anchor)
    }

    fn publish(&self) {
        let pages = self.pages.iter().map(|p| Arc::clone(&p.data)).collect();
        let snapshot = PagingSnapshot::new(self.session, pages, self.states.clone());
        self.snapshots.send_replace(Arc::new(snapshot));
    }
}
