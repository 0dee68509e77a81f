//! Paginated commit history for git repositories.
//!
//! A request names a repository, an optional branch and an optional path.
//! `history::load_page` asks a `HistoryFetcher` for one entry more than the
//! page size and `pager::compute` trims it back, which tells the caller
//! whether another page exists without counting the full history.

pub mod config;
pub mod error;
pub mod git;
pub mod history;
pub mod models;
pub mod pager;
pub mod routes;
pub mod view;
