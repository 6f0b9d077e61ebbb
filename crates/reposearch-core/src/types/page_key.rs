//! Page index type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use crate::error::{Error, InvalidInputError};

/// A 1-based index of a page in the remote search results.
///
/// # Example
///
/// ```
/// use reposearch_core::PageKey;
///
/// let key = PageKey::STARTING;
/// assert_eq!(key.get(), 1);
/// assert!(key.prev().is_none());
/// assert_eq!(key.advance(3).get(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageKey(NonZeroU32);

impl PageKey {
    /// The first page of every search.
    pub const STARTING: PageKey = PageKey(NonZeroU32::MIN);

    /// Create a page key, rejecting zero.
    pub fn new(value: u32) -> Result<Self, Error> {
        NonZeroU32::new(value).map(Self).ok_or_else(|| {
            InvalidInputError::PageKey {
                value,
                reason: "page indices start at 1".to_string(),
            }
            .into()
        })
    }

    /// Returns the raw page index.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns true for [`PageKey::STARTING`].
    pub fn is_starting(self) -> bool {
        self == Self::STARTING
    }

    /// The key `step` pages further on, saturating at `u32::MAX`.
    pub fn advance(self, step: u32) -> Self {
        Self(self.0.saturating_add(step))
    }

    /// The following page.
    pub fn next(self) -> Self {
        self.advance(1)
    }

    /// The preceding page, or `None` on the first page.
    pub fn prev(self) -> Option<Self> {
        NonZeroU32::new(self.get() - 1).map(Self)
    }
}

impl Default for PageKey {
    fn default() -> Self {
        Self::STARTING
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageKey {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageKey> for u32 {
    fn from(key: PageKey) -> Self {
        key.get()
    }
}
