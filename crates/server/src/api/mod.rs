pub mod albums;
pub mod stats;
pub mod tracks;

use axum::{
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::state::{AppState, HealthResponse};

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/albums", get(albums::list_albums))
        .route(
            "/albums/:album_id",
            get(albums::get_album)
                .patch(albums::patch_album)
                .delete(albums::delete_album),
        )
        .route("/tracks", get(tracks::list_tracks))
        .route(
            "/tracks/:track_id",
            axum::routing::patch(tracks::patch_track).delete(tracks::delete_track),
        )
        .route("/facets", get(stats::get_facets))
        .route("/stats", get(stats::get_stats))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
