//! Per-direction load state.

use std::fmt;
use std::sync::Arc;

use crate::error::Error;

/// The direction a load extends the materialized list in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadType {
    /// Replace everything with a fresh session.
    Refresh,
    /// Load the page before the first materialized page.
    Prepend,
    /// Load the page after the last materialized page.
    Append,
}

impl LoadType {
    /// All directions, in the order they are reported.
    pub const ALL: [LoadType; 3] = [LoadType::Refresh, LoadType::Prepend, LoadType::Append];
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadType::Refresh => "refresh",
            LoadType::Prepend => "prepend",
            LoadType::Append => "append",
        };
        f.write_str(name)
    }
}

/// The cause of a failed load.
///
/// Cheap to clone; two load errors are equal when they render the same
/// message.
#[derive(Debug, Clone)]
pub struct LoadError(Arc<Error>);

impl LoadError {
    /// Wrap an error as a load failure.
    pub fn new(err: Error) -> Self {
        Self(Arc::new(err))
    }

    /// The underlying error.
    pub fn error(&self) -> &Error {
        &self.0
    }
}

impl From<Error> for LoadError {
    fn from(err: Error) -> Self {
        Self::new(err)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.0.as_ref())
    }
}

impl PartialEq for LoadError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.to_string() == other.0.to_string()
    }
}

impl Eq for LoadError {}

/// State of one load direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Idle. `end_of_pagination_reached` is set once the source reported
    /// there is nothing further in this direction.
    NotLoading { end_of_pagination_reached: bool },
    /// A load is in flight.
    Loading,
    /// The last load failed; `retry` re-issues it.
    Error(LoadError),
}

impl LoadState {
    /// Idle with more pages possibly available.
    pub const INCOMPLETE: LoadState = LoadState::NotLoading {
        end_of_pagination_reached: false,
    };

    /// Idle with no more pages in this direction.
    pub const COMPLETE: LoadState = LoadState::NotLoading {
        end_of_pagination_reached: true,
    };

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    pub fn end_of_pagination_reached(&self) -> bool {
        matches!(
            self,
            LoadState::NotLoading {
                end_of_pagination_reached: true
            }
        )
    }

    /// The failure, if this direction is in the error state.
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl Default for LoadState {
    fn default() -> Self {
        Self::INCOMPLETE
    }
}

/// The load states of all three directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStates {
    pub refresh: LoadState,
    pub prepend: LoadState,
    pub append: LoadState,
}

impl LoadStates {
    /// States for a session whose first load has just been issued.
    pub fn refreshing() -> Self {
        Self {
            refresh: LoadState::Loading,
            ..Self::default()
        }
    }

    pub fn get(&self, load_type: LoadType) -> &LoadState {
        match load_type {
            LoadType::Refresh => &self.refresh,
            LoadType::Prepend => &self.prepend,
            LoadType::Append => &self.append,
        }
    }

    pub fn set(&mut self, load_type: LoadType, state: LoadState) {
        match load_type {
            LoadType::Refresh => self.refresh = state,
            LoadType::Prepend => self.prepend = state,
            LoadType::Append => self.append = state,
        }
    }

    /// Returns true if any direction has a load in flight.
    pub fn is_loading(&self) -> bool {
        LoadType::ALL.iter().any(|t| self.get(*t).is_loading())
    }

    /// The first error found, checking append, prepend, then refresh.
    pub fn first_error(&self) -> Option<(LoadType, &LoadError)> {
        [LoadType::Append, LoadType::Prepend, LoadType::Refresh]
            .into_iter()
            .find_map(|t| self.get(t).error().map(|e| (t, e)))
    }
}
