//! Materialized paging state handed to [`PagingSource::refresh_key`].
//!
//! [`PagingSource::refresh_key`]: crate::PagingSource::refresh_key

use super::Page;

/// The pages loaded so far in a session plus the last accessed position.
#[derive(Debug)]
pub struct PagingState<K, T> {
    /// Loaded pages in display order.
    pub pages: Vec<Page<K, T>>,
    /// Index of the most recently accessed item, if the consumer reported one.
    pub anchor_position: Option<usize>,
}

impl<K, T> PagingState<K, T> {
    pub fn new(pages: Vec<Page<K, T>>, anchor_position: Option<usize>) -> Self {
        Self {
            pages,
            anchor_position,
        }
    }

    /// Total number of loaded items.
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Returns true when no page holds any item.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(Page::is_empty)
    }

    /// The page holding the item at `position`.
    ///
    /// Positions past the end resolve to the last non-empty page. Returns
    /// `None` when nothing has been loaded.
    pub fn closest_page_to_position(&self, position: usize) -> Option<&Page<K, T>> {
        let mut remaining = position;
        for page in &self.pages {
            if remaining < page.len() {
                return Some(page);
            }
            remaining -= page.len();
        }
        self.pages.iter().rev().find(|p| !p.is_empty())
    }

    /// The item at `position`, if loaded.
    pub fn item_at(&self, position: usize) -> Option<&T> {
        let mut remaining = position;
        for page in &self.pages {
            if remaining < page.len() {
                return page.data.get(remaining);
            }
            remaining -= page.len();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(data: Vec<u32>, prev: Option<u32>, next: Option<u32>) -> Page<u32, u32> {
        Page::new(data, prev, next)
    }

    fn three_pages() -> PagingState<u32, u32> {
        PagingState::new(
            vec![
                page(vec![1, 2], None, Some(2)),
                page(vec![3, 4, 5], Some(1), Some(3)),
                page(vec![6], Some(2), None),
            ],
            Some(3),
        )
    }

    #[test]
    fn finds_page_containing_position() {
        let state = three_pages();
        assert_eq!(state.closest_page_to_position(0).unwrap().next_key, Some(2));
        assert_eq!(state.closest_page_to_position(2).unwrap().next_key, Some(3));
        assert_eq!(state.closest_page_to_position(4).unwrap().next_key, Some(3));
        assert_eq!(state.closest_page_to_position(5).unwrap().next_key, None);
    }

    #[test]
    fn clamps_past_the_end() {
        let state = three_pages();
        assert_eq!(state.closest_page_to_position(99).unwrap().prev_key, Some(2));
    }

    #[test]
    fn empty_state_has_no_page() {
        let state: PagingState<u32, u32> = PagingState::new(Vec::new(), Some(0));
        assert!(state.closest_page_to_position(0).is_none());

        let blank = PagingState::new(vec![page(Vec::new(), None, None)], Some(0));
        assert!(blank.is_empty());
        assert!(blank.closest_page_to_position(0).is_none());
    }

    #[test]
    fn item_lookup() {
        let state = three_pages();
        assert_eq!(state.item_count(), 6);
        assert_eq!(state.item_at(3), Some(&4));
        assert_eq!(state.item_at(6), None);
    }
}
