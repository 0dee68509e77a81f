use axum::{Json, Router, extract::State, routing::get};

use crate::error::Result;
use crate::models::RepositoryInfo;
use crate::routes::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/repositories", get(list_repositories))
        .with_state(state)
}

pub async fn list_repositories(
    State(state): State<SharedState>,
) -> Result<Json<Vec<RepositoryInfo>>> {
    let repos = state
        .registry
        .iter()
        .map(|repo| repo.info())
        .collect::<Result<Vec<_>>>()?;
    Ok(Json(repos))
}
