use common::{Album, Track};
use serde::Deserialize;

use crate::error::CatalogError;
use crate::store::CatalogStore;

/// Partial update for an album. Unknown fields are rejected at the
/// deserialization boundary so typos fail loudly instead of being dropped.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlbumPatch {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub label: Option<String>,
}

impl AlbumPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.year.is_none()
            && self.genre.is_none()
            && self.label.is_none()
    }

    pub fn apply(&self, album: &mut Album) {
        if let Some(title) = &self.title {
            album.title = title.trim().to_string();
        }
        if let Some(artist) = &self.artist {
            album.artist = artist.trim().to_string();
        }
        if let Some(year) = self.year {
            album.year = Some(year);
        }
        if let Some(genre) = &self.genre {
            album.genre = Some(genre.trim().to_string());
        }
        if let Some(label) = &self.label {
            album.label = Some(label.trim().to_string());
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::validation("patch", "no fields to update"));
        }
        require_text("title", self.title.as_deref())?;
        require_text("artist", self.artist.as_deref())?;
        require_text("genre", self.genre.as_deref())?;
        require_text("label", self.label.as_deref())?;
        if let Some(year) = self.year {
            if !(1000..=9999).contains(&year) {
                return Err(CatalogError::validation(
                    "year",
                    "must be a four-digit year",
                ));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackPatch {
    pub title: Option<String>,
    pub track_no: Option<u32>,
    pub duration_secs: Option<u32>,
}

impl TrackPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.track_no.is_none() && self.duration_secs.is_none()
    }

    pub fn apply(&self, track: &mut Track) {
        if let Some(title) = &self.title {
            track.title = title.trim().to_string();
        }
        if let Some(track_no) = self.track_no {
            track.track_no = Some(track_no);
        }
        if let Some(duration_secs) = self.duration_secs {
            track.duration_secs = duration_secs;
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::validation("patch", "no fields to update"));
        }
        require_text("title", self.title.as_deref())?;
        if let Some(track_no) = self.track_no {
            if track_no == 0 {
                return Err(CatalogError::validation("track_no", "must be at least 1"));
            }
        }
        Ok(())
    }
}

fn require_text(field: &str, value: Option<&str>) -> Result<(), CatalogError> {
    if let Some(value) = value {
        if value.trim().is_empty() {
            return Err(CatalogError::validation(field, "must not be blank"));
        }
    }
    Ok(())
}

/// Validates patches before they reach the store. A patch that fails
/// validation leaves the catalog untouched.
#[derive(Clone)]
pub struct MutationGate {
    store: CatalogStore,
}

impl MutationGate {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    /// A missing target reports NotFound even when the patch itself is
    /// invalid.
    pub fn update_album(&self, album_id: u64, patch: &AlbumPatch) -> Result<Album, CatalogError> {
        if self.store.get_album(album_id)?.is_none() {
            return Err(CatalogError::NotFound("album"));
        }
        patch.validate()?;
        self.store.update_album(album_id, patch)
    }

    pub fn update_track(&self, track_id: u64, patch: &TrackPatch) -> Result<Track, CatalogError> {
        if self.store.get_track(track_id)?.is_none() {
            return Err(CatalogError::NotFound("track"));
        }
        patch.validate()?;
        self.store.update_track(track_id, patch)
    }

    pub fn delete_album(&self, album_id: u64) -> Result<Album, CatalogError> {
        self.store.delete_album(album_id)
    }

    pub fn delete_track(&self, track_id: u64) -> Result<Track, CatalogError> {
        self.store.delete_track(track_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AlbumDraft, TrackDraft};
    use common::AudioFormat;

    fn gate() -> (MutationGate, CatalogStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CatalogStore::open(&dir.path().join("catalog.redb")).expect("open store");
        (MutationGate::new(store.clone()), store, dir)
    }

    fn seed(store: &CatalogStore) -> common::Album {
        store
            .insert_album(AlbumDraft {
                title: "Blue Train".to_string(),
                artist: "John Coltrane".to_string(),
                year: Some(1957),
                genre: Some("Jazz".to_string()),
                label: Some("Blue Note".to_string()),
                tracks: vec![TrackDraft {
                    title: "Blue Train".to_string(),
                    track_no: Some(1),
                    duration_secs: 643,
                    format: AudioFormat::Flac,
                    bitrate_kbps: None,
                }],
            })
            .expect("insert")
    }

    #[test]
    fn empty_patch_is_rejected() {
        let (gate, store, _dir) = gate();
        let album = seed(&store);
        match gate.update_album(album.id, &AlbumPatch::default()) {
            Err(CatalogError::Validation { field, .. }) => assert_eq!(field, "patch"),
            other => panic!("expected validation error, got {:?}", other.map(|a| a.title)),
        }
    }

    #[test]
    fn blank_title_is_rejected_without_partial_apply() {
        let (gate, store, _dir) = gate();
        let album = seed(&store);
        let patch = AlbumPatch {
            title: Some("   ".to_string()),
            year: Some(1960),
            ..Default::default()
        };
        assert!(gate.update_album(album.id, &patch).is_err());
        let unchanged = store.get_album(album.id).expect("get").expect("some");
        assert_eq!(unchanged.year, Some(1957));
    }

    #[test]
    fn out_of_range_year_is_rejected() {
        let (gate, store, _dir) = gate();
        let album = seed(&store);
        let patch = AlbumPatch {
            year: Some(99),
            ..Default::default()
        };
        match gate.update_album(album.id, &patch) {
            Err(CatalogError::Validation { field, .. }) => assert_eq!(field, "year"),
            other => panic!("expected validation error, got {:?}", other.map(|a| a.year)),
        }
    }

    #[test]
    fn patch_trims_values() {
        let (gate, store, _dir) = gate();
        let album = seed(&store);
        let patch = AlbumPatch {
            genre: Some("  Hard Bop  ".to_string()),
            ..Default::default()
        };
        let updated = gate.update_album(album.id, &patch).expect("update");
        assert_eq!(updated.genre.as_deref(), Some("Hard Bop"));
    }

    #[test]
    fn patch_is_idempotent() {
        let (gate, store, _dir) = gate();
        let album = seed(&store);
        let patch = AlbumPatch {
            label: Some("Impulse!".to_string()),
            ..Default::default()
        };
        let first = gate.update_album(album.id, &patch).expect("update");
        let second = gate.update_album(album.id, &patch).expect("update");
        assert_eq!(first, second);
    }

    #[test]
    fn zero_track_no_is_rejected() {
        let (gate, store, _dir) = gate();
        let album = seed(&store);
        let tracks = store.get_album_tracks(album.id).expect("tracks");
        let patch = TrackPatch {
            track_no: Some(0),
            ..Default::default()
        };
        match gate.update_track(tracks[0].id, &patch) {
            Err(CatalogError::Validation { field, .. }) => assert_eq!(field, "track_no"),
            other => panic!("expected validation error, got {:?}", other.map(|t| t.track_no)),
        }
    }

    #[test]
    fn missing_targets_are_not_found() {
        let (gate, _store, _dir) = gate();
        let patch = AlbumPatch {
            title: Some("x".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            gate.update_album(404, &patch),
            Err(CatalogError::NotFound("album"))
        ));
        let patch = TrackPatch {
            title: Some("x".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            gate.update_track(404, &patch),
            Err(CatalogError::NotFound("track"))
        ));
    }

    #[test]
    fn missing_target_outranks_invalid_patch() {
        let (gate, _store, _dir) = gate();
        assert!(matches!(
            gate.update_album(404, &AlbumPatch::default()),
            Err(CatalogError::NotFound("album"))
        ));
        assert!(matches!(
            gate.update_track(404, &TrackPatch::default()),
            Err(CatalogError::NotFound("track"))
        ));
    }

    #[test]
    fn delete_track_through_gate() {
        let (gate, store, _dir) = gate();
        let album = seed(&store);
        let tracks = store.get_album_tracks(album.id).expect("tracks");

        gate.delete_track(tracks[0].id).expect("delete");
        let album = store.get_album(album.id).expect("get").expect("some");
        assert_eq!(album.track_count, 0);

        assert!(matches!(
            gate.delete_track(tracks[0].id),
            Err(CatalogError::NotFound("track"))
        ));
    }

    #[test]
    fn unknown_patch_fields_fail_deserialization() {
        let err = serde_json::from_str::<AlbumPatch>(r#"{"titel": "oops"}"#);
        assert!(err.is_err());
    }
}
