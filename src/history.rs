//! History retrieval contract and the fetch-then-window sequence.
//!
//! `HistoryFetcher` is implemented by `GitRepository` (one repository) and
//! `RepositoryRegistry` (dispatch on `SourceLocation::repository`).

use crate::error::Result;
use crate::models::{HistoryEntry, SourceLocation};
use crate::pager::{self, PageRequest, PageResult};

pub trait HistoryFetcher {
    /// Up to `limit` entries for `location`, most recent first, starting at
    /// position `offset`. Returns fewer than `limit` only when the history
    /// is exhausted.
    fn fetch(
        &self,
        location: &SourceLocation,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<HistoryEntry>>;
}

/// Fetch one page of history. Fetch errors are returned untouched.
pub fn load_page<F>(
    fetcher: &F,
    location: &SourceLocation,
    request: &PageRequest,
) -> Result<PageResult<HistoryEntry>>
where
    F: HistoryFetcher + ?Sized,
{
    let fetched = fetcher.fetch(location, request.offset(), request.fetch_limit())?;
    Ok(pager::compute(request, fetched))
}
