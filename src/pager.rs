//! Offset pagination over an over-fetched result set.
//!
//! Callers ask the history source for `page_size + 1` records. If the extra
//! record comes back there is at least one more page; it is dropped before
//! the page is rendered. No count query is needed.

use serde::Serialize;

use crate::error::{AppError, Result};

pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const DEFAULT_MAX_PAGE_SIZE: usize = 1000;
/// Upper bound for any configured maximum page size.
pub const PAGE_SIZE_LIMIT: usize = 100_000;

/// A requested window into an ordered history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: usize,
    page_size: usize,
}

impl PageRequest {
    /// Builds a request, rejecting a zero page size and clamping to
    /// `max_page_size` (itself capped at `PAGE_SIZE_LIMIT`).
    pub fn new(offset: usize, page_size: usize, max_page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(AppError::InvalidRequest(
                "pagesize must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            offset,
            page_size: page_size.min(max_page_size.clamp(1, PAGE_SIZE_LIMIT)),
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records to ask the history source for.
    pub fn fetch_limit(&self) -> usize {
        self.page_size.saturating_add(1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult<T> {
    pub entries: Vec<T>,
    pub has_more: bool,
    pub offset: usize,
    pub page_size: usize,
}

/// Trims an over-fetched result down to one page.
///
/// `fetched` must come from a fetch with `limit = requested.fetch_limit()`.
/// Anything beyond `page_size` entries means a further page exists.
pub fn compute<T>(requested: &PageRequest, mut fetched: Vec<T>) -> PageResult<T> {
    let has_more = fetched.len() > requested.page_size;
    fetched.truncate(requested.page_size);

    PageResult {
        entries: fetched,
        has_more,
        offset: requested.offset,
        page_size: requested.page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn request(offset: usize, page_size: usize) -> PageRequest {
        PageRequest::new(offset, page_size, DEFAULT_MAX_PAGE_SIZE).unwrap()
    }

    #[test]
    fn full_page_plus_one_has_more() {
        let req = request(0, 100);
        let page = compute(&req, (0..101).collect::<Vec<_>>());
        assert!(page.has_more);
        assert_eq!(page.entries.len(), 100);
        assert_eq!(page.entries.last(), Some(&99));
    }

    #[test]
    fn short_page_is_last() {
        let req = request(0, 100);
        let page = compute(&req, (0..50).collect::<Vec<_>>());
        assert!(!page.has_more);
        assert_eq!(page.entries.len(), 50);
    }

    #[test]
    fn offset_is_carried_and_extra_entry_dropped() {
        let req = request(20, 10);
        let fetched: Vec<u32> = (21..=31).collect();
        let page = compute(&req, fetched);
        assert_eq!(
            page,
            PageResult {
                entries: (21..=30).collect(),
                has_more: true,
                offset: 20,
                page_size: 10,
            }
        );
    }

    #[rstest]
    #[case(1, 0)]
    #[case(1, 1)]
    #[case(1, 2)]
    #[case(5, 3)]
    #[case(5, 5)]
    #[case(5, 6)]
    #[case(5, 40)]
    fn entries_never_exceed_page_size(#[case] page_size: usize, #[case] fetched: usize) {
        let req = request(7, page_size);
        let page = compute(&req, vec![(); fetched]);
        assert!(page.entries.len() <= page_size);
        assert_eq!(page.has_more, fetched > page_size);
        assert_eq!(page.entries.len(), fetched.min(page_size));
    }

    #[test]
    fn compute_is_idempotent() {
        let req = request(3, 4);
        let fetched = vec!["a", "b", "c", "d", "e"];
        assert_eq!(compute(&req, fetched.clone()), compute(&req, fetched));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = PageRequest::new(0, 0, DEFAULT_MAX_PAGE_SIZE).unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn oversized_page_is_clamped() {
        let req = PageRequest::new(0, 50_000, 500).unwrap();
        assert_eq!(req.page_size(), 500);
        assert_eq!(req.fetch_limit(), 501);
    }

    #[test]
    fn unbounded_maximum_cannot_overflow_fetch_limit() {
        let req = PageRequest::new(0, usize::MAX, usize::MAX).unwrap();
        assert_eq!(req.page_size(), PAGE_SIZE_LIMIT);
        assert_eq!(req.fetch_limit(), PAGE_SIZE_LIMIT + 1);
    }

    #[test]
    fn defaults() {
        let req = PageRequest::default();
        assert_eq!(req.offset(), 0);
        assert_eq!(req.page_size(), 100);
        assert_eq!(req.fetch_limit(), 101);
    }
}
