use axum::{
    extract::{Path as AxumPath, Query, State},
    http::StatusCode,
    Json,
};
use catalog::{query, TrackPatch};
use common::Track;

use crate::state::{AppState, DeleteResponse, JsonResult, ListResponse, TrackQuery, TrackView};
use crate::utils::{catalog_error, format_duration_secs, json_error};

pub async fn list_tracks(
    State(state): State<AppState>,
    Query(params): Query<TrackQuery>,
) -> JsonResult<ListResponse<TrackView>> {
    let limit = query::effective_limit(params.limit.unwrap_or(0));
    let offset = params.offset.unwrap_or(0);
    let (tracks, total) = state
        .catalog
        .list_tracks(params.q.as_deref(), limit, offset)
        .map_err(catalog_error)?;

    let mut items = Vec::with_capacity(tracks.len());
    for track in tracks {
        items.push(hydrate(&state, track)?);
    }
    Ok(Json(ListResponse { items, total }))
}

pub async fn patch_track(
    State(state): State<AppState>,
    AxumPath(track_id): AxumPath<u64>,
    Json(body): Json<serde_json::Value>,
) -> JsonResult<TrackView> {
    let patch: TrackPatch = serde_json::from_value(body)
        .map_err(|err| json_error(StatusCode::BAD_REQUEST, format!("invalid patch: {}", err)))?;
    let track = state
        .gate
        .update_track(track_id, &patch)
        .map_err(catalog_error)?;
    Ok(Json(hydrate(&state, track)?))
}

pub async fn delete_track(
    State(state): State<AppState>,
    AxumPath(track_id): AxumPath<u64>,
) -> JsonResult<DeleteResponse> {
    state.gate.delete_track(track_id).map_err(catalog_error)?;
    Ok(Json(DeleteResponse { deleted: track_id }))
}

fn hydrate(
    state: &AppState,
    track: Track,
) -> Result<TrackView, (StatusCode, Json<crate::state::ErrorResponse>)> {
    let album = state
        .catalog
        .get_album(track.album_id)
        .map_err(catalog_error)?
        .ok_or_else(|| json_error(StatusCode::INTERNAL_SERVER_ERROR, "catalog error"))?;
    Ok(TrackView {
        artist: album.artist,
        album: album.title,
        duration_fmt: format_duration_secs(u64::from(track.duration_secs)),
        track,
    })
}
