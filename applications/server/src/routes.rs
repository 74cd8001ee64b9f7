/// Router assembly
use crate::{api, state::AppState, subsonic};
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
pub fn create_router(app_state: AppState) -> Router {
    // Native JSON API
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/search", get(api::search::search))
        .route("/:version/search", get(api::search::search));

    // Subsonic compatibility surface; `.view` aliases match what stock
    // Subsonic clients request
    let subsonic_routes = Router::new()
        .route("/ping", get(subsonic::ping::ping))
        .route("/ping.view", get(subsonic::ping::ping))
        .route(
            "/getMusicFolders",
            get(subsonic::music_folders::get_music_folders),
        )
        .route(
            "/getMusicFolders.view",
            get(subsonic::music_folders::get_music_folders),
        );

    Router::new()
        .nest("/api", api_routes)
        .nest("/subsonic", subsonic_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
