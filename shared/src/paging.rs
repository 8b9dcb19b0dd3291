//! Client-side pagination over an in-memory collection.
//!
//! The tables never re-sort or copy their data: the store keeps each
//! collection newest-first and a [`Page`] is recomputed from the current
//! snapshot whenever the collection or the requested page changes.

/// Rows per table page.
pub const PAGE_SIZE: usize = 5;

/// Which record list a table is showing. Income is special-cased because
/// it renders the carryover row ahead of page-1 content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Expense,
    Income,
}

/// One display-ready page over a collection. `None` entries are spacer
/// rows padding the page out to [`PAGE_SIZE`] for layout stability.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<Option<T>>,
    /// Effective page number after clamping, 1-indexed.
    pub page_number: usize,
    /// Never 0, even for an empty collection.
    pub total_pages: usize,
    /// 1-indexed position of the first real row shown; 0 when empty.
    pub range_start: usize,
    /// 1-indexed position of the last real row shown; 0 when empty.
    pub range_end: usize,
    pub total_items: usize,
}

impl<T: Clone> Page<T> {
    /// Derive the page for `requested_page` over `collection`.
    ///
    /// A requested page that points past the end of the collection (for
    /// example after deleting the last item on the last page) is clamped
    /// down to the last non-empty page; page 0 is treated as page 1.
    pub fn compute(collection: &[T], requested_page: usize) -> Page<T> {
        let total_items = collection.len();
        let total_pages = std::cmp::max(1, total_items.div_ceil(PAGE_SIZE));

        let requested = std::cmp::max(1, requested_page);
        let page_number = if (requested - 1) * PAGE_SIZE >= total_items && requested > 1 {
            total_pages
        } else {
            requested
        };

        let start = (page_number - 1) * PAGE_SIZE;
        let end = std::cmp::min(start + PAGE_SIZE, total_items);

        let mut items: Vec<Option<T>> = collection[start..end].iter().cloned().map(Some).collect();
        while items.len() < PAGE_SIZE {
            items.push(None);
        }

        let (range_start, range_end) = if total_items == 0 {
            (0, 0)
        } else {
            (start + 1, end)
        };

        Page {
            items,
            page_number,
            total_pages,
            range_start,
            range_end,
            total_items,
        }
    }

    /// Whether the pagination footer should be rendered at all.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_items > PAGE_SIZE
    }
}

/// The carryover row is shown only on page 1 of the income table, as an
/// extra leading row on top of the regular data rows.
pub fn shows_carryover(kind: ListKind, page_number: usize, carryover_present: bool) -> bool {
    kind == ListKind::Income && page_number == 1 && carryover_present
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(n: usize) -> Vec<u32> {
        (1..=n as u32).collect()
    }

    #[test]
    fn test_empty_collection_is_one_page_of_placeholders() {
        let page = Page::<u32>::compute(&[], 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.items, vec![None; PAGE_SIZE]);
        assert_eq!(page.range_start, 0);
        assert_eq!(page.range_end, 0);
        assert_eq!(page.total_items, 0);
    }

    #[test]
    fn test_total_pages_is_ceiling_with_floor_of_one() {
        let cases = [(0, 1), (1, 1), (5, 1), (6, 2), (10, 2), (11, 3), (12, 3)];
        for (len, expected) in cases {
            let page = Page::compute(&collection(len), 1);
            assert_eq!(page.total_pages, expected, "len={}", len);
        }
    }

    #[test]
    fn test_full_page_has_no_placeholders() {
        let page = Page::compute(&collection(12), 1);
        assert_eq!(
            page.items,
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
        assert_eq!(page.range_start, 1);
        assert_eq!(page.range_end, 5);
    }

    #[test]
    fn test_last_partial_page_is_padded() {
        // 12 items, page 3: rows 11-12 plus three spacers.
        let page = Page::compute(&collection(12), 3);
        assert_eq!(page.items, vec![Some(11), Some(12), None, None, None]);
        assert_eq!(page.page_number, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.range_start, 11);
        assert_eq!(page.range_end, 12);
    }

    #[test]
    fn test_padding_law() {
        for len in 0..=13 {
            let data = collection(len);
            let pages = Page::compute(&data, 1).total_pages;
            for requested in 1..=pages + 2 {
                let page = Page::compute(&data, requested);
                assert_eq!(page.items.len(), PAGE_SIZE, "len={} page={}", len, requested);
            }
        }
    }

    #[test]
    fn test_out_of_range_request_clamps_to_last_page() {
        let page = Page::compute(&collection(12), 9);
        assert_eq!(page.page_number, 3);
        assert_eq!(page.items[0], Some(11));
    }

    #[test]
    fn test_page_zero_is_treated_as_page_one() {
        let page = Page::compute(&collection(7), 0);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.items[0], Some(1));
    }

    #[test]
    fn test_deleting_sole_item_on_last_page_clamps_down_by_one() {
        // Three pages of 11 items; page 3 holds a single row.
        let mut data = collection(11);
        assert_eq!(Page::compute(&data, 3).page_number, 3);

        // Delete that row and reconcile with the stale page request.
        data.pop();
        let page = Page::compute(&data, 3);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items, vec![Some(6), Some(7), Some(8), Some(9), Some(10)]);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let data = collection(12);
        let first = Page::compute(&data, 3);
        let second = Page::compute(&data, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_range_line_matches_visible_rows() {
        // "Showing 6-10 of 12"
        let page = Page::compute(&collection(12), 2);
        assert_eq!((page.range_start, page.range_end, page.total_items), (6, 10, 12));
    }

    #[test]
    fn test_has_multiple_pages_only_past_one_page() {
        assert!(!Page::compute(&collection(5), 1).has_multiple_pages());
        assert!(Page::compute(&collection(6), 1).has_multiple_pages());
    }

    #[test]
    fn test_carryover_row_rule() {
        assert!(shows_carryover(ListKind::Income, 1, true));
        assert!(!shows_carryover(ListKind::Income, 2, true));
        assert!(!shows_carryover(ListKind::Income, 1, false));
        assert!(!shows_carryover(ListKind::Expense, 1, true));
    }
}
