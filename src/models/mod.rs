//! Data transfer objects (DTOs) for API responses.
//!
//! - `location`: SourceLocation, the repository/branch/path a request targets
//! - `history`: HistoryEntry, AuthorInfo for one commit in a history listing
//! - `repository`: RepositoryInfo for the repository index

pub mod history;
pub mod location;
pub mod repository;

pub use history::*;
pub use location::*;
pub use repository::*;
