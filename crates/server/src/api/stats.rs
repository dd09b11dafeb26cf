use axum::{
    extract::{Query, State},
    Json,
};
use catalog::{facets, stats, FacetSummary, FilterSet};

use crate::state::{AppState, FacetQuery, JsonResult, StatsResponse};
use crate::utils::{catalog_error, format_duration_secs};

pub async fn get_facets(
    State(state): State<AppState>,
    Query(params): Query<FacetQuery>,
) -> JsonResult<FacetSummary> {
    let filters = FilterSet {
        genre: params.genre,
        artist: params.artist,
        format: params.format,
    };
    let summary = facets(&state.catalog, &filters).map_err(catalog_error)?;
    Ok(Json(summary))
}

pub async fn get_stats(State(state): State<AppState>) -> JsonResult<StatsResponse> {
    let stats = stats(&state.catalog).map_err(catalog_error)?;
    Ok(Json(StatsResponse {
        albums: stats.totals.albums,
        tracks: stats.totals.tracks,
        artists: stats.totals.artists,
        genres: stats.genres,
        total_playtime_secs: stats.totals.playtime_secs,
        total_playtime_fmt: format_duration_secs(stats.totals.playtime_secs),
        formats: stats.formats,
    }))
}
