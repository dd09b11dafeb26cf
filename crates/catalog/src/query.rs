use std::cmp::Ordering;

use common::{Album, AudioFormat};

use crate::error::CatalogError;
use crate::store::CatalogStore;
use crate::text::query_terms;

pub const DEFAULT_LIMIT: usize = 50;
pub const MAX_LIMIT: usize = 200;

/// Requested result order. Title and artist sort ascending, year and
/// added sort newest first. Ties always fall back to id ascending so a
/// given catalog yields one canonical order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Artist,
    #[default]
    Year,
    Added,
}

impl SortKey {
    /// Unknown values fall back to the default rather than erroring.
    pub fn parse(value: &str) -> SortKey {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => SortKey::Title,
            "artist" => SortKey::Artist,
            "year" => SortKey::Year,
            "added" => SortKey::Added,
            _ => SortKey::default(),
        }
    }
}

/// Structural filters over albums. Values are case-insensitive exact
/// matches; blank values count as absent.
#[derive(Clone, Debug, Default)]
pub struct FilterSet {
    pub genre: Option<String>,
    pub artist: Option<String>,
    pub format: Option<String>,
}

impl FilterSet {
    pub fn matches(&self, album: &Album) -> bool {
        if let Some(genre) = active(&self.genre) {
            match &album.genre {
                Some(value) if value.eq_ignore_ascii_case(genre) => {}
                _ => return false,
            }
        }
        if let Some(artist) = active(&self.artist) {
            if !album.artist.eq_ignore_ascii_case(artist) {
                return false;
            }
        }
        if let Some(format) = active(&self.format) {
            // a value naming no known format matches nothing
            match (AudioFormat::parse(format), album.format) {
                (Some(want), Some(have)) if want == have => {}
                _ => return false,
            }
        }
        true
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[derive(Clone, Debug, Default)]
pub struct SearchRequest {
    pub term: Option<String>,
    pub filters: FilterSet,
    pub sort: SortKey,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Clone, Debug)]
pub struct SearchPage {
    pub items: Vec<Album>,
    pub total: usize,
}

/// Runs a search request against the store: candidate selection by text
/// term (or the whole catalog), structural filtering, deterministic
/// ordering, then pagination. `total` counts all matches before the
/// window is applied.
pub fn search(store: &CatalogStore, req: &SearchRequest) -> Result<SearchPage, CatalogError> {
    let terms = req
        .term
        .as_deref()
        .map(query_terms)
        .unwrap_or_default();

    let mut candidates: Vec<(Album, u32)> = if terms.is_empty() {
        store
            .all_albums()?
            .into_iter()
            .map(|album| (album, 0))
            .collect()
    } else {
        store.text_match_albums(&terms)?
    };

    candidates.retain(|(album, _)| req.filters.matches(album));
    candidates.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| compare_by_key(&a.0, &b.0, req.sort))
            .then_with(|| a.0.id.cmp(&b.0.id))
    });

    let total = candidates.len();
    let limit = effective_limit(req.limit);
    let items = candidates
        .into_iter()
        .skip(req.offset)
        .take(limit)
        .map(|(album, _)| album)
        .collect();
    Ok(SearchPage { items, total })
}

pub fn effective_limit(limit: usize) -> usize {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}

fn compare_by_key(a: &Album, b: &Album, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a
            .title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.artist.to_lowercase().cmp(&b.artist.to_lowercase())),
        SortKey::Artist => a
            .artist
            .to_lowercase()
            .cmp(&b.artist.to_lowercase())
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
        // albums without a year sort after all dated albums
        SortKey::Year => match (a.year, b.year) {
            (Some(a_year), Some(b_year)) => b_year.cmp(&a_year),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
        SortKey::Added => b.added_at.cmp(&a.added_at),
    }
}
