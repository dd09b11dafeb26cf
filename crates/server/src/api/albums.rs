use axum::{
    extract::{Path as AxumPath, Query, State},
    http::StatusCode,
    Json,
};
use catalog::{query, AlbumPatch, FilterSet, SearchRequest, SortKey};
use common::Album;

use crate::state::{
    AlbumDetail, AlbumQuery, AppState, DeleteResponse, JsonResult, ListResponse, TrackView,
};
use crate::utils::{catalog_error, format_duration_secs, json_error};

pub async fn list_albums(
    State(state): State<AppState>,
    Query(params): Query<AlbumQuery>,
) -> JsonResult<ListResponse<Album>> {
    let request = SearchRequest {
        term: params.q,
        filters: FilterSet {
            genre: params.genre,
            artist: params.artist,
            format: params.format,
        },
        sort: params
            .sort
            .as_deref()
            .map(SortKey::parse)
            .unwrap_or_default(),
        limit: params.limit.unwrap_or(0),
        offset: params.offset.unwrap_or(0),
    };

    let page = query::search(&state.catalog, &request).map_err(catalog_error)?;
    Ok(Json(ListResponse {
        items: page.items,
        total: page.total,
    }))
}

pub async fn get_album(
    State(state): State<AppState>,
    AxumPath(album_id): AxumPath<u64>,
) -> JsonResult<AlbumDetail> {
    let album = state
        .catalog
        .get_album(album_id)
        .map_err(catalog_error)?
        .ok_or_else(|| json_error(StatusCode::NOT_FOUND, "album not found"))?;
    let tracks = state
        .catalog
        .get_album_tracks(album_id)
        .map_err(catalog_error)?;

    let tracks = tracks
        .into_iter()
        .map(|track| {
            let duration_fmt = format_duration_secs(u64::from(track.duration_secs));
            TrackView {
                artist: album.artist.clone(),
                album: album.title.clone(),
                duration_fmt,
                track,
            }
        })
        .collect();
    Ok(Json(AlbumDetail { album, tracks }))
}

pub async fn patch_album(
    State(state): State<AppState>,
    AxumPath(album_id): AxumPath<u64>,
    Json(body): Json<serde_json::Value>,
) -> JsonResult<Album> {
    // deserialize by hand so unknown fields come back as 400, not 422
    let patch: AlbumPatch = serde_json::from_value(body)
        .map_err(|err| json_error(StatusCode::BAD_REQUEST, format!("invalid patch: {}", err)))?;
    let album = state
        .gate
        .update_album(album_id, &patch)
        .map_err(catalog_error)?;
    Ok(Json(album))
}

pub async fn delete_album(
    State(state): State<AppState>,
    AxumPath(album_id): AxumPath<u64>,
) -> JsonResult<DeleteResponse> {
    state.gate.delete_album(album_id).map_err(catalog_error)?;
    Ok(Json(DeleteResponse { deleted: album_id }))
}
