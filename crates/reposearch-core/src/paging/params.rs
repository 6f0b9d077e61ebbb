//! Load requests and their results.

use std::sync::Arc;

use super::LoadError;

/// A request to load one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadParams<K> {
    /// The key to load, or `None` for a refresh from the source's start key.
    pub key: Option<K>,
    /// Number of items requested.
    pub load_size: u32,
}

impl<K> LoadParams<K> {
    pub fn new(key: Option<K>, load_size: u32) -> Self {
        Self { key, load_size }
    }
}

/// A successfully loaded page.
#[derive(Debug)]
pub struct Page<K, T> {
    /// Items in this page, in display order.
    pub data: Arc<[T]>,
    /// Key of the page before this one, `None` at the start.
    pub prev_key: Option<K>,
    /// Key of the page after this one, `None` at the end.
    pub next_key: Option<K>,
}

impl<K, T> Page<K, T> {
    pub fn new(data: Vec<T>, prev_key: Option<K>, next_key: Option<K>) -> Self {
        Self {
            data: data.into(),
            prev_key,
            next_key,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K: Clone, T> Clone for Page<K, T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            prev_key: self.prev_key.clone(),
            next_key: self.next_key.clone(),
        }
    }
}

/// Outcome of a [`PagingSource::load`](crate::PagingSource::load).
#[derive(Debug, Clone)]
pub enum LoadResult<K, T> {
    Page(Page<K, T>),
    Error(LoadError),
}

impl<K, T> LoadResult<K, T> {
    /// Returns the page, if the load succeeded.
    pub fn page(&self) -> Option<&Page<K, T>> {
        match self {
            LoadResult::Page(page) => Some(page),
            LoadResult::Error(_) => None,
        }
    }

    /// Returns the failure, if the load failed.
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadResult::Page(_) => None,
            LoadResult::Error(err) => Some(err),
        }
    }
}

impl<K, T> From<crate::Result<Page<K, T>>> for LoadResult<K, T> {
    fn from(result: crate::Result<Page<K, T>>) -> Self {
        match result {
            Ok(page) => LoadResult::Page(page),
            Err(err) => LoadResult::Error(LoadError::new(err)),
        }
    }
}
