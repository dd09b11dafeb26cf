use std::collections::{HashMap, HashSet};

use common::Album;
use serde::Serialize;

use crate::error::CatalogError;
use crate::query::FilterSet;
use crate::store::CatalogStore;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CatalogTotals {
    pub albums: usize,
    pub tracks: u64,
    pub artists: usize,
    pub playtime_secs: u64,
}

/// Facet counts plus totals for a filtered view of the catalog.
#[derive(Clone, Debug, Serialize)]
pub struct FacetSummary {
    pub genres: Vec<FacetCount>,
    pub formats: Vec<FacetCount>,
    pub artists: Vec<FacetCount>,
    pub totals: CatalogTotals,
}

/// Whole-catalog statistics, unaffected by any filters.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogStats {
    pub totals: CatalogTotals,
    pub genres: usize,
    pub formats: Vec<FacetCount>,
}

/// Computes facet counts against the structural filters only; any text
/// term is ignored so users still see counts for values they have not
/// narrowed to yet. Each dimension is counted with the other dimensions'
/// filters applied and its own filter lifted, so selecting "Jazz" keeps
/// the sibling genres visible. Totals apply the full filter set.
pub fn facets(store: &CatalogStore, filters: &FilterSet) -> Result<FacetSummary, CatalogError> {
    let albums = store.all_albums()?;

    let genre_view = FilterSet {
        genre: None,
        ..filters.clone()
    };
    let format_view = FilterSet {
        format: None,
        ..filters.clone()
    };
    let artist_view = FilterSet {
        artist: None,
        ..filters.clone()
    };

    let mut genres: HashMap<String, usize> = HashMap::new();
    let mut formats: HashMap<String, usize> = HashMap::new();
    let mut artists: HashMap<String, usize> = HashMap::new();
    let mut totals = CatalogTotals::default();
    let mut total_artists: HashSet<String> = HashSet::new();

    for album in &albums {
        if genre_view.matches(album) {
            // albums without a genre are left out of the genre facet
            if let Some(genre) = &album.genre {
                *genres.entry(genre.clone()).or_insert(0) += 1;
            }
        }
        if format_view.matches(album) {
            if let Some(format) = album.format {
                *formats.entry(format.as_str().to_string()).or_insert(0) += 1;
            }
        }
        if artist_view.matches(album) {
            *artists.entry(album.artist.clone()).or_insert(0) += 1;
        }
        if filters.matches(album) {
            totals.albums += 1;
            totals.tracks += u64::from(album.track_count);
            totals.playtime_secs += album.duration_secs;
            total_artists.insert(album.artist.to_lowercase());
        }
    }
    totals.artists = total_artists.len();

    Ok(FacetSummary {
        genres: ranked(genres),
        formats: ranked(formats),
        artists: ranked(artists),
        totals,
    })
}

/// Whole-catalog totals plus a format breakdown and distinct genre count.
pub fn stats(store: &CatalogStore) -> Result<CatalogStats, CatalogError> {
    let albums = store.all_albums()?;

    let mut totals = CatalogTotals::default();
    let mut artists: HashSet<String> = HashSet::new();
    let mut genres: HashSet<String> = HashSet::new();
    let mut formats: HashMap<String, usize> = HashMap::new();

    for album in &albums {
        totals.albums += 1;
        totals.tracks += u64::from(album.track_count);
        totals.playtime_secs += album.duration_secs;
        artists.insert(album.artist.to_lowercase());
        if let Some(genre) = &album.genre {
            genres.insert(genre.to_lowercase());
        }
        if let Some(format) = album.format {
            *formats.entry(format.as_str().to_string()).or_insert(0) += 1;
        }
    }
    totals.artists = artists.len();

    Ok(CatalogStats {
        totals,
        genres: genres.len(),
        formats: ranked(formats),
    })
}

/// Highest count first, ties alphabetical, so the order is stable.
fn ranked(counts: HashMap<String, usize>) -> Vec<FacetCount> {
    let mut ranked: Vec<FacetCount> = counts
        .into_iter()
        .map(|(value, count)| FacetCount { value, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AlbumDraft, TrackDraft};
    use common::AudioFormat;

    fn open_store() -> (CatalogStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CatalogStore::open(&dir.path().join("catalog.redb")).expect("open store");
        (store, dir)
    }

    fn add(store: &CatalogStore, artist: &str, genre: Option<&str>, format: AudioFormat) {
        store
            .insert_album(AlbumDraft {
                title: format!("{} album", artist),
                artist: artist.to_string(),
                year: Some(1970),
                genre: genre.map(|g| g.to_string()),
                label: None,
                tracks: vec![
                    TrackDraft {
                        title: "One".to_string(),
                        track_no: Some(1),
                        duration_secs: 100,
                        format,
                        bitrate_kbps: None,
                    },
                    TrackDraft {
                        title: "Two".to_string(),
                        track_no: Some(2),
                        duration_secs: 200,
                        format,
                        bitrate_kbps: None,
                    },
                ],
            })
            .expect("insert");
    }

    #[test]
    fn unfiltered_facets_count_everything() {
        let (store, _dir) = open_store();
        add(&store, "Miles Davis", Some("Jazz"), AudioFormat::Flac);
        add(&store, "Led Zeppelin", Some("Rock"), AudioFormat::Mp3);

        let summary = facets(&store, &FilterSet::default()).expect("facets");
        assert_eq!(summary.genres, vec![
            FacetCount { value: "Jazz".to_string(), count: 1 },
            FacetCount { value: "Rock".to_string(), count: 1 },
        ]);
        assert_eq!(summary.totals.albums, 2);
        assert_eq!(summary.totals.tracks, 4);
        assert_eq!(summary.totals.artists, 2);
        assert_eq!(summary.totals.playtime_secs, 600);
    }

    #[test]
    fn own_dimension_filter_does_not_hide_siblings() {
        let (store, _dir) = open_store();
        add(&store, "Miles Davis", Some("Jazz"), AudioFormat::Flac);
        add(&store, "Led Zeppelin", Some("Rock"), AudioFormat::Mp3);
        add(&store, "Nirvana", Some("Rock"), AudioFormat::Mp3);

        let filters = FilterSet {
            genre: Some("Jazz".to_string()),
            ..Default::default()
        };
        let summary = facets(&store, &filters).expect("facets");

        // genre facet keeps both values; format facet narrows to Jazz albums
        assert_eq!(summary.genres.len(), 2);
        assert_eq!(summary.formats, vec![FacetCount {
            value: "FLAC".to_string(),
            count: 1,
        }]);
        assert_eq!(summary.totals.albums, 1);
    }

    #[test]
    fn albums_without_genre_are_omitted_from_genre_facet() {
        let (store, _dir) = open_store();
        add(&store, "Unknown Genre Band", None, AudioFormat::Ogg);
        add(&store, "Miles Davis", Some("Jazz"), AudioFormat::Flac);

        let summary = facets(&store, &FilterSet::default()).expect("facets");
        assert_eq!(summary.genres.len(), 1);
        assert_eq!(summary.totals.albums, 2);
    }

    #[test]
    fn facet_order_is_count_desc_then_value() {
        let (store, _dir) = open_store();
        add(&store, "A", Some("Rock"), AudioFormat::Mp3);
        add(&store, "B", Some("Rock"), AudioFormat::Mp3);
        add(&store, "C", Some("Ambient"), AudioFormat::Flac);
        add(&store, "D", Some("Jazz"), AudioFormat::Flac);

        let summary = facets(&store, &FilterSet::default()).expect("facets");
        let values: Vec<&str> = summary.genres.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["Rock", "Ambient", "Jazz"]);
    }

    #[test]
    fn facets_reflect_mutations_immediately() {
        let (store, _dir) = open_store();
        add(&store, "Miles Davis", Some("Jazz"), AudioFormat::Flac);
        let albums = store.all_albums().expect("albums");
        store.delete_album(albums[0].id).expect("delete");

        let summary = facets(&store, &FilterSet::default()).expect("facets");
        assert!(summary.genres.is_empty());
        assert_eq!(summary.totals.albums, 0);
    }

    #[test]
    fn stats_cover_the_whole_catalog() {
        let (store, _dir) = open_store();
        add(&store, "Miles Davis", Some("Jazz"), AudioFormat::Flac);
        add(&store, "Led Zeppelin", Some("Rock"), AudioFormat::Mp3);
        add(&store, "Nirvana", Some("rock"), AudioFormat::Mp3);

        let stats = stats(&store).expect("stats");
        assert_eq!(stats.totals.albums, 3);
        assert_eq!(stats.totals.tracks, 6);
        assert_eq!(stats.totals.playtime_secs, 900);
        assert_eq!(stats.genres, 2);
        assert_eq!(stats.formats[0], FacetCount {
            value: "MP3".to_string(),
            count: 2,
        });
    }
}
