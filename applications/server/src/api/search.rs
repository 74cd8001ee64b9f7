/// Search API routes
use crate::{
    api::version,
    error::{ErrorEnvelope, Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use reverb_core::{search_library, SearchResults, TypeSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,

    /// Comma-separated subset of `artists,albums,songs,folders`
    #[serde(default, rename = "type")]
    pub types: Option<String>,
}

/// JSON envelope for search responses
///
/// `error` is null on success and populated (with every result field
/// omitted) on failure; the two never mix.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub error: Option<ErrorEnvelope>,

    #[serde(flatten)]
    pub results: SearchResults,
}

/// GET /api/search and /api/:version/search
///
/// Searches artists, albums, songs, and folders matching the query,
/// restricted to the kinds named by `type` (all kinds when absent).
pub async fn search(
    State(app_state): State<AppState>,
    version: Option<Path<String>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    version::ensure_supported(version.as_ref().map(|p| p.0.as_str()))?;

    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ServerError::BadRequest("no search query specified".to_string()))?;

    let types = TypeSet::parse(params.types.as_deref().unwrap_or(""));

    let results = search_library(app_state.store.as_ref(), &query, &types).await?;

    Ok(Json(SearchResponse {
        error: None,
        results,
    }))
}
