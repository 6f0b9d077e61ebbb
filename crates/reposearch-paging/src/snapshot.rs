//! Immutable views of the materialized list.

use std::sync::Arc;

use reposearch_core::LoadStates;

/// The items loaded so far and the load state of every direction.
///
/// Pages are shared with the pager, so cloning a snapshot or holding on to
/// an old one never copies items.
#[derive(Debug)]
pub struct PagingSnapshot<T> {
    session: u64,
    pages: Vec<Arc<[T]>>,
    load_states: LoadStates,
    len: usize,
}

impl<T> PagingSnapshot<T> {
    pub(crate) fn new(session: u64, pages: Vec<Arc<[T]>>, load_states: LoadStates) -> Self {
        let len = pages.iter().map(|p| p.len()).sum();
        Self {
            session,
            pages,
            load_states,
            len,
        }
    }

    /// Snapshot published before the first load completes.
    pub(crate) fn initial() -> Self {
        Self::new(0, Vec::new(), LoadStates::refreshing())
    }

    /// Session number; increases every time the pager is invalidated.
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn load_states(&self) -> &LoadStates {
        &self.load_states
    }

    /// Number of loaded items.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of loaded pages, including empty ones.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Loaded pages in display order.
    pub fn pages(&self) -> &[Arc<[T]>] {
        &self.pages
    }

    /// The item at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut remaining = index;
        for page in &self.pages {
            if remaining < page.len() {
                return page.get(remaining);
            }
            remaining -= page.len();
        }
        None
    }

    /// All items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.pages.iter().flat_map(|p| p.iter())
    }

    /// Returns true once the refresh has landed and nothing failed it.
    pub fn is_ready(&self) -> bool {
        matches!(
            self.load_states.refresh,
            reposearch_core::LoadState::NotLoading { .. }
        )
    }
}

impl<T: Clone> PagingSnapshot<T> {
    /// Copy all items out of the snapshot.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
