//! Pager configuration.

/// How many items the pager asks for and when it prefetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    /// Items per append/prepend load.
    pub page_size: u32,
    /// Items requested by a refresh load.
    pub initial_load_size: u32,
    /// How close to either edge an accessed index must be to trigger a load
    /// in that direction.
    pub prefetch_distance: u32,
}

impl PagingConfig {
    /// Configuration loading `page_size` items per load in every direction.
    ///
    /// A zero page size is raised to one.
    pub fn new(page_size: u32) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            initial_load_size: page_size,
            prefetch_distance: page_size,
        }
    }

    /// Request `size` items on refresh instead of `page_size`.
    pub fn with_initial_load_size(mut self, size: u32) -> Self {
        self.initial_load_size = size.max(1);
        self
    }

    /// Set the prefetch distance.
    pub fn with_prefetch_distance(mut self, distance: u32) -> Self {
        self.prefetch_distance = distance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_page_size() {
        let config = PagingConfig::new(50);
        assert_eq!(config.initial_load_size, 50);
        assert_eq!(config.prefetch_distance, 50);
    }

    #[test]
    fn zero_sizes_are_raised() {
        let config = PagingConfig::new(0).with_initial_load_size(0);
        assert_eq!(config.page_size, 1);
        assert_eq!(config.initial_load_size, 1);
    }
}
