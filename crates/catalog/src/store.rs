use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use common::{Album, AudioFormat, Track};
use redb::{Database, ReadableTable, Table, TableDefinition};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::CatalogError;
use crate::mutate::{AlbumPatch, TrackPatch};
use crate::text::tokenize;

const SCHEMA_VERSION: u32 = 1;
const KEY_SEP: char = '\x1f';

const META_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("meta");
const ALBUMS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("albums");
const TRACKS_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("tracks");
const ALBUM_TRACKS_TABLE: TableDefinition<&str, u64> = TableDefinition::new("album_tracks");
const TERM_POSTINGS_TABLE: TableDefinition<&str, u32> = TableDefinition::new("term_postings");
const ALBUM_TERMS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("album_terms");

const META_VERSION_KEY: &str = "version";
const META_NEXT_ID_KEY: &str = "next_id";

const WEIGHT_TITLE: u32 = 4;
const WEIGHT_ARTIST: u32 = 3;
const WEIGHT_GENRE: u32 = 2;
const WEIGHT_LABEL: u32 = 2;
const WEIGHT_TRACK_TITLE: u32 = 1;

/// Input for creating an album together with its tracks. Derived fields
/// (track_count, duration_secs, format) are computed by the store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlbumDraft {
    pub title: String,
    pub artist: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub label: Option<String>,
    pub tracks: Vec<TrackDraft>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrackDraft {
    pub title: String,
    pub track_no: Option<u32>,
    pub duration_secs: u32,
    pub format: AudioFormat,
    pub bitrate_kbps: Option<u32>,
}

/// redb-backed catalog of albums and tracks plus an inverted full-text
/// index over their searchable fields. Every mutation is a single write
/// transaction covering both the records and the index, so readers never
/// observe one without the other. Reads run on snapshots and need no
/// locking; writes are serialized by redb's single write transaction.
#[derive(Clone)]
pub struct CatalogStore {
    db: Arc<Database>,
}

impl CatalogStore {
    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let db = if path.exists() {
            Database::open(path)?
        } else {
            Database::create(path)?
        };
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    fn init_tables(&self) -> Result<(), CatalogError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut meta = write_txn.open_table(META_TABLE)?;
            write_txn.open_table(ALBUMS_TABLE)?;
            write_txn.open_table(TRACKS_TABLE)?;
            write_txn.open_table(ALBUM_TRACKS_TABLE)?;
            write_txn.open_table(TERM_POSTINGS_TABLE)?;
            write_txn.open_table(ALBUM_TERMS_TABLE)?;
            if meta.get(META_VERSION_KEY)?.is_none() {
                let version = encode_value(&SCHEMA_VERSION)?;
                meta.insert(META_VERSION_KEY, version.as_slice())?;
            }
            if meta.get(META_NEXT_ID_KEY)?.is_none() {
                let next = encode_value(&1u64)?;
                meta.insert(META_NEXT_ID_KEY, next.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get_album(&self, album_id: u64) -> Result<Option<Album>, CatalogError> {
        let read_txn = self.db.begin_read()?;
        let albums = read_txn.open_table(ALBUMS_TABLE)?;
        let album = match albums.get(album_id)? {
            Some(value) => Some(decode_value(value.value())?),
            None => None,
        };
        Ok(album)
    }

    pub fn get_track(&self, track_id: u64) -> Result<Option<Track>, CatalogError> {
        let read_txn = self.db.begin_read()?;
        let tracks = read_txn.open_table(TRACKS_TABLE)?;
        let track = match tracks.get(track_id)? {
            Some(value) => Some(decode_value(value.value())?),
            None => None,
        };
        Ok(track)
    }

    /// Tracks of an album ordered by track number, unnumbered tracks last.
    pub fn get_album_tracks(&self, album_id: u64) -> Result<Vec<Track>, CatalogError> {
        let read_txn = self.db.begin_read()?;
        let tracks_table = read_txn.open_table(TRACKS_TABLE)?;
        let album_tracks = read_txn.open_table(ALBUM_TRACKS_TABLE)?;

        let prefix = prefix_key(&format!("{:016x}", album_id));
        let mut end = prefix.clone();
        end.push('\u{10ffff}');
        let mut tracks = Vec::new();

        for entry in album_tracks.range(prefix.as_str()..end.as_str())? {
            let entry = entry?;
            let track_id = entry.1.value();
            match tracks_table.get(track_id)? {
                Some(value) => tracks.push(decode_value(value.value())?),
                None => {
                    let detail =
                        format!("album {} lists track {} which does not exist", album_id, track_id);
                    error!("{}", detail);
                    return Err(CatalogError::IndexInconsistency(detail));
                }
            }
        }

        Ok(tracks)
    }

    pub fn all_albums(&self) -> Result<Vec<Album>, CatalogError> {
        let read_txn = self.db.begin_read()?;
        let albums = read_txn.open_table(ALBUMS_TABLE)?;
        let mut items = Vec::new();
        for entry in albums.iter()? {
            let entry = entry?;
            items.push(decode_value(entry.1.value())?);
        }
        Ok(items)
    }

    pub fn album_count(&self) -> Result<usize, CatalogError> {
        let read_txn = self.db.begin_read()?;
        let albums = read_txn.open_table(ALBUMS_TABLE)?;
        Ok(albums.len()? as usize)
    }

    /// Tracks across the whole catalog, ordered by album artist, then
    /// title, filtered by an optional case-insensitive substring over
    /// title and artist. Returns the page plus the unpaginated total.
    pub fn list_tracks(
        &self,
        search: Option<&str>,
        limit: usize,
        offset: usize,
    ) -> Result<(Vec<Track>, usize), CatalogError> {
        let search = search
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(|value| value.to_lowercase());

        let read_txn = self.db.begin_read()?;
        let albums = read_txn.open_table(ALBUMS_TABLE)?;
        let tracks_table = read_txn.open_table(TRACKS_TABLE)?;

        let mut artist_by_album: HashMap<u64, String> = HashMap::new();
        for entry in albums.iter()? {
            let entry = entry?;
            let album: Album = decode_value(entry.1.value())?;
            artist_by_album.insert(album.id, album.artist);
        }

        let mut matches: Vec<(String, String, Track)> = Vec::new();
        for entry in tracks_table.iter()? {
            let entry = entry?;
            let track: Track = decode_value(entry.1.value())?;
            let artist = match artist_by_album.get(&track.album_id) {
                Some(artist) => artist.clone(),
                None => {
                    let detail = format!(
                        "track {} references missing album {}",
                        track.id, track.album_id
                    );
                    error!("{}", detail);
                    return Err(CatalogError::IndexInconsistency(detail));
                }
            };
            if let Some(search) = &search {
                if !track.title.to_lowercase().contains(search)
                    && !artist.to_lowercase().contains(search)
                {
                    continue;
                }
            }
            matches.push((artist.to_lowercase(), track.title.to_lowercase(), track));
        }

        matches.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| a.1.cmp(&b.1))
                .then_with(|| a.2.id.cmp(&b.2.id))
        });

        let total = matches.len();
        let items = matches
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|(_, _, track)| track)
            .collect();
        Ok((items, total))
    }

    /// Albums matching ALL of the given terms, with their accumulated
    /// relevance score. An index posting without a backing album record is
    /// an invariant violation and fails the whole lookup.
    pub fn text_match_albums(
        &self,
        terms: &[String],
    ) -> Result<Vec<(Album, u32)>, CatalogError> {
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let read_txn = self.db.begin_read()?;
        let postings = read_txn.open_table(TERM_POSTINGS_TABLE)?;
        let albums = read_txn.open_table(ALBUMS_TABLE)?;

        let mut scores: Option<HashMap<u64, u32>> = None;
        for term in terms {
            let mut term_scores: HashMap<u64, u32> = HashMap::new();
            let prefix = prefix_key(term);
            let mut end = prefix.clone();
            end.push('\u{10ffff}');
            for entry in postings.range(prefix.as_str()..end.as_str())? {
                let entry = entry?;
                let (_, id_part) = split_key_last(entry.0.value())?;
                let album_id = parse_id(id_part)?;
                term_scores.insert(album_id, entry.1.value());
            }

            scores = Some(match scores.take() {
                None => term_scores,
                Some(mut acc) => {
                    acc.retain(|id, _| term_scores.contains_key(id));
                    for (id, weight) in acc.iter_mut() {
                        *weight += term_scores[id];
                    }
                    acc
                }
            });
            if scores.as_ref().map(|acc| acc.is_empty()).unwrap_or(false) {
                return Ok(Vec::new());
            }
        }

        let mut results = Vec::new();
        for (album_id, score) in scores.unwrap_or_default() {
            match albums.get(album_id)? {
                Some(value) => results.push((decode_value::<Album>(value.value())?, score)),
                None => {
                    let detail =
                        format!("index entry points at missing album {}", album_id);
                    error!("{}", detail);
                    return Err(CatalogError::IndexInconsistency(detail));
                }
            }
        }
        Ok(results)
    }

    /// Inserts an album and its tracks, computing the derived rollup and
    /// writing the full-text postings, all in one transaction.
    pub fn insert_album(&self, draft: AlbumDraft) -> Result<Album, CatalogError> {
        let write_txn = self.db.begin_write()?;
        let album = {
            let mut meta = write_txn.open_table(META_TABLE)?;
            let mut albums = write_txn.open_table(ALBUMS_TABLE)?;
            let mut tracks_table = write_txn.open_table(TRACKS_TABLE)?;
            let mut album_tracks = write_txn.open_table(ALBUM_TRACKS_TABLE)?;
            let mut postings = write_txn.open_table(TERM_POSTINGS_TABLE)?;
            let mut album_terms = write_txn.open_table(ALBUM_TERMS_TABLE)?;

            let first_id = allocate_ids(&mut meta, 1 + draft.tracks.len() as u64)?;
            let album_id = first_id;

            let tracks: Vec<Track> = draft
                .tracks
                .into_iter()
                .enumerate()
                .map(|(i, track)| Track {
                    id: first_id + 1 + i as u64,
                    album_id,
                    title: track.title,
                    track_no: track.track_no,
                    duration_secs: track.duration_secs,
                    format: track.format,
                    bitrate_kbps: track.bitrate_kbps,
                })
                .collect();

            let (track_count, duration_secs, format) = derive_rollup(&tracks);
            let album = Album {
                id: album_id,
                title: draft.title,
                artist: draft.artist,
                year: draft.year,
                genre: draft.genre,
                label: draft.label,
                track_count,
                duration_secs,
                format,
                added_at: now_secs(),
            };

            let album_bytes = encode_value(&album)?;
            albums.insert(album_id, album_bytes.as_slice())?;
            for track in &tracks {
                let track_bytes = encode_value(track)?;
                tracks_table.insert(track.id, track_bytes.as_slice())?;
                let key = album_track_key(album_id, track.track_no, track.id);
                album_tracks.insert(key.as_str(), track.id)?;
            }
            index_album(&mut postings, &mut album_terms, &album, &tracks)?;
            album
        };
        write_txn.commit()?;
        Ok(album)
    }

    /// Applies a validated patch to an album and regenerates its index
    /// entries before the transaction commits.
    pub fn update_album(&self, album_id: u64, patch: &AlbumPatch) -> Result<Album, CatalogError> {
        let write_txn = self.db.begin_write()?;
        let album = {
            let mut albums = write_txn.open_table(ALBUMS_TABLE)?;
            let tracks_table = write_txn.open_table(TRACKS_TABLE)?;
            let album_tracks = write_txn.open_table(ALBUM_TRACKS_TABLE)?;
            let mut postings = write_txn.open_table(TERM_POSTINGS_TABLE)?;
            let mut album_terms = write_txn.open_table(ALBUM_TERMS_TABLE)?;

            let mut album: Album = match albums.get(album_id)? {
                Some(value) => decode_value(value.value())?,
                None => return Err(CatalogError::NotFound("album")),
            };
            patch.apply(&mut album);

            let tracks = tracks_in_txn(&album_tracks, &tracks_table, album_id)?;
            deindex_album(&mut postings, &mut album_terms, album_id)?;
            index_album(&mut postings, &mut album_terms, &album, &tracks)?;

            let album_bytes = encode_value(&album)?;
            albums.insert(album_id, album_bytes.as_slice())?;
            album
        };
        write_txn.commit()?;
        Ok(album)
    }

    /// Applies a validated patch to a track, recomputes the parent album's
    /// derived fields, and reindexes the album in the same transaction.
    pub fn update_track(&self, track_id: u64, patch: &TrackPatch) -> Result<Track, CatalogError> {
        let write_txn = self.db.begin_write()?;
        let track = {
            let mut albums = write_txn.open_table(ALBUMS_TABLE)?;
            let mut tracks_table = write_txn.open_table(TRACKS_TABLE)?;
            let mut album_tracks = write_txn.open_table(ALBUM_TRACKS_TABLE)?;
            let mut postings = write_txn.open_table(TERM_POSTINGS_TABLE)?;
            let mut album_terms = write_txn.open_table(ALBUM_TERMS_TABLE)?;

            let mut track: Track = match tracks_table.get(track_id)? {
                Some(value) => decode_value(value.value())?,
                None => return Err(CatalogError::NotFound("track")),
            };
            let old_track_no = track.track_no;
            patch.apply(&mut track);

            let track_bytes = encode_value(&track)?;
            tracks_table.insert(track_id, track_bytes.as_slice())?;
            if old_track_no != track.track_no {
                let old_key = album_track_key(track.album_id, old_track_no, track_id);
                album_tracks.remove(old_key.as_str())?;
                let new_key = album_track_key(track.album_id, track.track_no, track_id);
                album_tracks.insert(new_key.as_str(), track_id)?;
            }

            let mut album: Album = match albums.get(track.album_id)? {
                Some(value) => decode_value(value.value())?,
                None => {
                    let detail = format!(
                        "track {} references missing album {}",
                        track_id, track.album_id
                    );
                    error!("{}", detail);
                    return Err(CatalogError::IndexInconsistency(detail));
                }
            };
            let tracks = tracks_in_txn(&album_tracks, &tracks_table, album.id)?;
            let (track_count, duration_secs, format) = derive_rollup(&tracks);
            album.track_count = track_count;
            album.duration_secs = duration_secs;
            album.format = format;

            deindex_album(&mut postings, &mut album_terms, album.id)?;
            index_album(&mut postings, &mut album_terms, &album, &tracks)?;
            let album_bytes = encode_value(&album)?;
            albums.insert(album.id, album_bytes.as_slice())?;
            track
        };
        write_txn.commit()?;
        Ok(track)
    }

    /// Deletes a track and recomputes the parent album's derived fields
    /// in the same transaction. The album record stays even when its
    /// last track goes.
    pub fn delete_track(&self, track_id: u64) -> Result<Track, CatalogError> {
        let write_txn = self.db.begin_write()?;
        let track = {
            let mut albums = write_txn.open_table(ALBUMS_TABLE)?;
            let mut tracks_table = write_txn.open_table(TRACKS_TABLE)?;
            let mut album_tracks = write_txn.open_table(ALBUM_TRACKS_TABLE)?;
            let mut postings = write_txn.open_table(TERM_POSTINGS_TABLE)?;
            let mut album_terms = write_txn.open_table(ALBUM_TERMS_TABLE)?;

            let track: Track = match tracks_table.remove(track_id)? {
                Some(value) => decode_value(value.value())?,
                None => return Err(CatalogError::NotFound("track")),
            };
            let key = album_track_key(track.album_id, track.track_no, track_id);
            album_tracks.remove(key.as_str())?;

            let mut album: Album = match albums.get(track.album_id)? {
                Some(value) => decode_value(value.value())?,
                None => {
                    let detail = format!(
                        "track {} references missing album {}",
                        track_id, track.album_id
                    );
                    error!("{}", detail);
                    return Err(CatalogError::IndexInconsistency(detail));
                }
            };
            let tracks = tracks_in_txn(&album_tracks, &tracks_table, album.id)?;
            let (track_count, duration_secs, format) = derive_rollup(&tracks);
            album.track_count = track_count;
            album.duration_secs = duration_secs;
            album.format = format;

            deindex_album(&mut postings, &mut album_terms, album.id)?;
            index_album(&mut postings, &mut album_terms, &album, &tracks)?;
            let album_bytes = encode_value(&album)?;
            albums.insert(album.id, album_bytes.as_slice())?;
            track
        };
        write_txn.commit()?;
        Ok(track)
    }

    /// Deletes an album, its tracks, and its index entries atomically.
    pub fn delete_album(&self, album_id: u64) -> Result<Album, CatalogError> {
        let write_txn = self.db.begin_write()?;
        let album = {
            let mut albums = write_txn.open_table(ALBUMS_TABLE)?;
            let mut tracks_table = write_txn.open_table(TRACKS_TABLE)?;
            let mut album_tracks = write_txn.open_table(ALBUM_TRACKS_TABLE)?;
            let mut postings = write_txn.open_table(TERM_POSTINGS_TABLE)?;
            let mut album_terms = write_txn.open_table(ALBUM_TERMS_TABLE)?;

            let album: Album = match albums.get(album_id)? {
                Some(value) => decode_value(value.value())?,
                None => return Err(CatalogError::NotFound("album")),
            };

            let prefix = prefix_key(&format!("{:016x}", album_id));
            let mut end = prefix.clone();
            end.push('\u{10ffff}');
            let mut keys: Vec<(String, u64)> = Vec::new();
            for entry in album_tracks.range(prefix.as_str()..end.as_str())? {
                let entry = entry?;
                keys.push((entry.0.value().to_string(), entry.1.value()));
            }
            for (key, track_id) in keys {
                album_tracks.remove(key.as_str())?;
                tracks_table.remove(track_id)?;
            }

            deindex_album(&mut postings, &mut album_terms, album_id)?;
            albums.remove(album_id)?;
            album
        };
        write_txn.commit()?;
        Ok(album)
    }
}

fn allocate_ids(
    meta: &mut Table<'_, '_, &'static str, &'static [u8]>,
    count: u64,
) -> Result<u64, CatalogError> {
    let first = match meta.get(META_NEXT_ID_KEY)? {
        Some(value) => decode_value::<u64>(value.value())?,
        None => 1,
    };
    let next = encode_value(&(first + count))?;
    meta.insert(META_NEXT_ID_KEY, next.as_slice())?;
    Ok(first)
}

fn tracks_in_txn(
    album_tracks: &impl ReadableTable<&'static str, u64>,
    tracks_table: &impl ReadableTable<u64, &'static [u8]>,
    album_id: u64,
) -> Result<Vec<Track>, CatalogError> {
    let prefix = prefix_key(&format!("{:016x}", album_id));
    let mut end = prefix.clone();
    end.push('\u{10ffff}');
    let mut tracks = Vec::new();
    for entry in album_tracks.range(prefix.as_str()..end.as_str())? {
        let entry = entry?;
        let track_id = entry.1.value();
        match tracks_table.get(track_id)? {
            Some(value) => tracks.push(decode_value(value.value())?),
            None => {
                let detail =
                    format!("album {} lists track {} which does not exist", album_id, track_id);
                error!("{}", detail);
                return Err(CatalogError::IndexInconsistency(detail));
            }
        }
    }
    Ok(tracks)
}

/// Accumulates the weighted terms of an album's searchable fields.
fn index_entries(album: &Album, tracks: &[Track]) -> HashMap<String, u32> {
    let mut entries: HashMap<String, u32> = HashMap::new();
    let mut add = |text: &str, weight: u32| {
        for term in tokenize(text) {
            *entries.entry(term).or_insert(0) += weight;
        }
    };
    add(&album.title, WEIGHT_TITLE);
    add(&album.artist, WEIGHT_ARTIST);
    if let Some(genre) = &album.genre {
        add(genre, WEIGHT_GENRE);
    }
    if let Some(label) = &album.label {
        add(label, WEIGHT_LABEL);
    }
    for track in tracks {
        add(&track.title, WEIGHT_TRACK_TITLE);
    }
    entries
}

fn index_album(
    postings: &mut Table<'_, '_, &'static str, u32>,
    album_terms: &mut Table<'_, '_, &'static str, &'static [u8]>,
    album: &Album,
    tracks: &[Track],
) -> Result<(), CatalogError> {
    let empty: &[u8] = &[];
    for (term, weight) in index_entries(album, tracks) {
        let posting_key = posting_key(&term, album.id);
        postings.insert(posting_key.as_str(), weight)?;
        let term_key = album_term_key(album.id, &term);
        album_terms.insert(term_key.as_str(), empty)?;
    }
    Ok(())
}

fn deindex_album(
    postings: &mut Table<'_, '_, &'static str, u32>,
    album_terms: &mut Table<'_, '_, &'static str, &'static [u8]>,
    album_id: u64,
) -> Result<(), CatalogError> {
    let prefix = prefix_key(&format!("{:016x}", album_id));
    let mut end = prefix.clone();
    end.push('\u{10ffff}');
    let mut term_keys = Vec::new();
    for entry in album_terms.range(prefix.as_str()..end.as_str())? {
        let entry = entry?;
        term_keys.push(entry.0.value().to_string());
    }
    for term_key in term_keys {
        let (_, term) = split_key_last(&term_key)?;
        let posting_key = posting_key(term, album_id);
        postings.remove(posting_key.as_str())?;
        album_terms.remove(term_key.as_str())?;
    }
    Ok(())
}

/// Dominant format among the tracks; ties broken by declaration order.
fn derive_rollup(tracks: &[Track]) -> (u32, u64, Option<AudioFormat>) {
    let track_count = tracks.len() as u32;
    let duration_secs = tracks.iter().map(|t| u64::from(t.duration_secs)).sum();

    let mut counts: HashMap<AudioFormat, u32> = HashMap::new();
    for track in tracks {
        *counts.entry(track.format).or_insert(0) += 1;
    }
    let mut format = None;
    let mut best = 0u32;
    for candidate in [AudioFormat::Flac, AudioFormat::Mp3, AudioFormat::Ogg] {
        let count = counts.get(&candidate).copied().unwrap_or(0);
        if count > best {
            best = count;
            format = Some(candidate);
        }
    }

    (track_count, duration_secs, format)
}

fn encode_value<T: Serialize>(value: &T) -> Result<Vec<u8>, CatalogError> {
    Ok(bincode::serialize(value)?)
}

fn decode_value<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> Result<T, CatalogError> {
    Ok(bincode::deserialize(bytes)?)
}

fn posting_key(term: &str, album_id: u64) -> String {
    let mut out = String::new();
    out.push_str(term);
    out.push(KEY_SEP);
    out.push_str(&format!("{:016x}", album_id));
    out
}

fn album_term_key(album_id: u64, term: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:016x}", album_id));
    out.push(KEY_SEP);
    out.push_str(term);
    out
}

fn album_track_key(album_id: u64, track_no: Option<u32>, track_id: u64) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:016x}", album_id));
    out.push(KEY_SEP);
    out.push_str(&format!("{:08x}", track_no.unwrap_or(u32::MAX)));
    out.push(KEY_SEP);
    out.push_str(&format!("{:016x}", track_id));
    out
}

fn prefix_key(prefix: &str) -> String {
    let mut out = String::new();
    out.push_str(prefix);
    out.push(KEY_SEP);
    out
}

fn split_key_last(value: &str) -> Result<(&str, &str), CatalogError> {
    let idx = value
        .rfind(KEY_SEP)
        .ok_or_else(|| CatalogError::KeyParse(value.to_string()))?;
    let next = idx + KEY_SEP.len_utf8();
    Ok((&value[..idx], &value[next..]))
}

fn parse_id(value: &str) -> Result<u64, CatalogError> {
    u64::from_str_radix(value, 16).map_err(|_| CatalogError::KeyParse(value.to_string()))
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_secs()
}
