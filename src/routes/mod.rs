//! API route handlers - maps HTTP endpoints to history operations.
//!
//! Each submodule defines routes for a feature area:
//! - `repository`: Served repositories (GET /api/v1/repositories)
//! - `history`: Paginated commit history for a repository path

pub mod history;
pub mod repository;

use std::sync::Arc;

use axum::Router;

use crate::config::PagingConfig;
use crate::git::RepositoryRegistry;

pub struct AppState {
    pub registry: RepositoryRegistry,
    pub paging: PagingConfig,
}

pub type SharedState = Arc<AppState>;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .merge(repository::routes(state.clone()))
        .merge(history::routes(state))
}
