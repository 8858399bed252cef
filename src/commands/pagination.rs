//! Pagination Module
//!
//! Location-area paging state for the `map` and `mapb` commands.

// == Pagination ==
/// Tracks which page of location areas is on screen.
#[derive(Debug, Clone)]
pub struct Pagination {
    page_size: usize,
    /// Offset of the page last shown, if any
    current: Option<usize>,
    /// Whether the page last shown was short, i.e. the end of records
    at_end: bool,
}

impl Pagination {
    // == Constructor ==
    /// Creates paging state with nothing shown yet. A zero page size is
    /// raised to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: None,
            at_end: false,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // == Offsets ==
    /// Offset `map` should fetch: the page after the current one. At the end
    /// of records the last page is shown again.
    pub fn next_offset(&self) -> usize {
        match self.current {
            None => 0,
            Some(current) if self.at_end => current,
            Some(current) => current + self.page_size,
        }
    }

    /// Offset `mapb` should fetch: the page before the current one, clamped
    /// at the first page.
    pub fn previous_offset(&self) -> usize {
        self.current
            .map_or(0, |current| current.saturating_sub(self.page_size))
    }

    // == Record ==
    /// Records that the page at `offset` was shown with `len` results.
    ///
    /// Returns true when that page was the end of records.
    pub fn record(&mut self, offset: usize, len: usize) -> bool {
        self.current = Some(offset);
        self.at_end = len < self.page_size;
        self.at_end
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_paging() {
        let mut pages = Pagination::new(20);
        assert_eq!(pages.next_offset(), 0);

        assert!(!pages.record(0, 20));
        assert_eq!(pages.next_offset(), 20);

        assert!(!pages.record(20, 20));
        assert_eq!(pages.next_offset(), 40);
    }

    #[test]
    fn test_backward_paging_clamps_at_first_page() {
        let mut pages = Pagination::new(20);
        assert_eq!(pages.previous_offset(), 0);

        pages.record(0, 20);
        assert_eq!(pages.previous_offset(), 0);

        pages.record(40, 20);
        assert_eq!(pages.previous_offset(), 20);
    }

    #[test]
    fn test_back_then_forward_resumes() {
        let mut pages = Pagination::new(20);
        pages.record(0, 20);
        pages.record(20, 20);
        pages.record(40, 20);

        let back = pages.previous_offset();
        pages.record(back, 20);
        assert_eq!(back, 20);
        assert_eq!(pages.next_offset(), 40);
    }

    #[test]
    fn test_end_of_records_repeats_last_page() {
        let mut pages = Pagination::new(20);
        pages.record(0, 20);

        assert!(pages.record(20, 7));
        assert_eq!(pages.next_offset(), 20);
        assert_eq!(pages.previous_offset(), 0);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(Pagination::new(0).page_size(), 1);
    }
}
