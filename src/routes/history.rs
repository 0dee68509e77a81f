//! Commit history endpoint.
//!
//! GET /api/v1/repositories/{repo}/history[/{*path}]?branch=&pagesize=&offset=
//!
//! `offset` is a position in the history, not a page index. `page` is
//! accepted as an alias so older links keep working.
//!
//! Returns a `StandardPage` with breadcrumbs, side navigation, history rows
//! and prior/next links.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::Uri,
    routing::get,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::history::load_page;
use crate::models::SourceLocation;
use crate::pager::PageRequest;
use crate::routes::SharedState;
use crate::view::{
    CrumbSpec, HistoryContent, PagerState, PagerView, StandardPage, ViewKind, build_crumbs,
    build_history_table, build_side_nav,
};

pub type HistoryPage = StandardPage<HistoryContent>;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/repositories/{repo}/history", get(repository_history))
        .route("/api/v1/repositories/{repo}/history/{*path}", get(path_history))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub branch: Option<String>,
    #[serde(default, rename = "pagesize")]
    pub page_size: Option<usize>,
    #[serde(default, alias = "page")]
    pub offset: usize,
}

pub async fn repository_history(
    State(state): State<SharedState>,
    Path(repo): Path<String>,
    query: std::result::Result<Query<HistoryQuery>, QueryRejection>,
    uri: Uri,
) -> Result<Json<HistoryPage>> {
    let Query(query) = query?;
    render_history(state, repo, None, query, uri).await.map(Json)
}

pub async fn path_history(
    State(state): State<SharedState>,
    Path((repo, path)): Path<(String, String)>,
    query: std::result::Result<Query<HistoryQuery>, QueryRejection>,
    uri: Uri,
) -> Result<Json<HistoryPage>> {
    let Query(query) = query?;
    render_history(state, repo, Some(path), query, uri).await.map(Json)
}

async fn render_history(
    state: SharedState,
    repo: String,
    path: Option<String>,
    query: HistoryQuery,
    uri: Uri,
) -> Result<HistoryPage> {
    let page_size = query.page_size.unwrap_or(state.paging.default_page_size);
    let request = PageRequest::new(query.offset, page_size, state.paging.max_page_size)?;
    let location = SourceLocation::new(repo, query.branch.as_deref(), path.as_deref());

    tracing::info!(
        "History for {}:{} (offset {}, page size {})",
        location.repository(),
        location.path().unwrap_or("/"),
        request.offset(),
        request.page_size()
    );

    let page = {
        let state = state.clone();
        let location = location.clone();
        tokio::task::spawn_blocking(move || load_page(&state.registry, &location, &request))
            .await
            .map_err(|e| AppError::Internal(format!("History task failed: {}", e)))??
    };

    let rows = build_history_table(&location, &page.entries);
    let pager = PagerView::from(&PagerState::from_page(&page, uri.to_string()));

    let crumbs = build_crumbs(
        &location,
        CrumbSpec {
            branch: true,
            path: true,
            view: "history",
        },
    );
    let nav = build_side_nav(&location, ViewKind::History, false);

    Ok(StandardPage {
        title: "history".to_string(),
        crumbs,
        nav,
        content: HistoryContent { rows, pager },
    })
}
