use axum::http::StatusCode;
use axum::Json;
use catalog::{CatalogStore, FacetCount, MutationGate};
use common::{Album, Track};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
    pub gate: MutationGate,
}

impl AppState {
    pub fn new(catalog: CatalogStore) -> Self {
        let gate = MutationGate::new(catalog.clone());
        Self { catalog, gate }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct AlbumQuery {
    pub q: Option<String>,
    pub genre: Option<String>,
    pub artist: Option<String>,
    pub format: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct FacetQuery {
    pub genre: Option<String>,
    pub artist: Option<String>,
    pub format: Option<String>,
}

#[derive(Serialize)]
pub struct AlbumDetail {
    #[serde(flatten)]
    pub album: Album,
    pub tracks: Vec<TrackView>,
}

/// Track hydrated with its parent album's artist and title, which the
/// track record itself does not carry.
#[derive(Serialize)]
pub struct TrackView {
    #[serde(flatten)]
    pub track: Track,
    pub artist: String,
    pub album: String,
    pub duration_fmt: String,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub albums: usize,
    pub tracks: u64,
    pub artists: usize,
    pub genres: usize,
    pub total_playtime_secs: u64,
    pub total_playtime_fmt: String,
    pub formats: Vec<FacetCount>,
}

pub type JsonResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;
