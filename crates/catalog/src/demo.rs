//! Built-in demo catalog, used when a fresh store starts empty so the
//! API has something to serve. Track durations are derived from a hash
//! of the album title and track number, so repeated seedings of a fresh
//! store produce identical data.

use common::AudioFormat;
use tracing::info;

use crate::error::CatalogError;
use crate::store::{AlbumDraft, CatalogStore, TrackDraft};

struct DemoAlbum {
    title: &'static str,
    artist: &'static str,
    year: i32,
    genre: &'static str,
    label: &'static str,
    tracks: u32,
    format: AudioFormat,
    bitrate_kbps: u32,
}

const fn demo(
    title: &'static str,
    artist: &'static str,
    year: i32,
    genre: &'static str,
    label: &'static str,
    tracks: u32,
    format: AudioFormat,
    bitrate_kbps: u32,
) -> DemoAlbum {
    DemoAlbum {
        title,
        artist,
        year,
        genre,
        label,
        tracks,
        format,
        bitrate_kbps,
    }
}

use AudioFormat::{Flac, Mp3};

const DEMO_ALBUMS: &[DemoAlbum] = &[
    // Rock
    demo("Abbey Road", "The Beatles", 1969, "Rock", "Apple Records", 17, Flac, 1411),
    demo("Dark Side of the Moon", "Pink Floyd", 1973, "Rock", "Harvest Records", 10, Flac, 1411),
    demo("Led Zeppelin IV", "Led Zeppelin", 1971, "Rock", "Atlantic Records", 8, Flac, 1411),
    demo("Rumours", "Fleetwood Mac", 1977, "Rock", "Warner Bros.", 11, Mp3, 320),
    demo("Born to Run", "Bruce Springsteen", 1975, "Rock", "Columbia", 8, Flac, 1411),
    demo("Nevermind", "Nirvana", 1991, "Grunge", "DGC Records", 13, Mp3, 320),
    demo("OK Computer", "Radiohead", 1997, "Art Rock", "Parlophone", 12, Flac, 1411),
    demo("Appetite for Destruction", "Guns N' Roses", 1987, "Hard Rock", "Geffen Records", 12, Mp3, 320),
    demo("The Joshua Tree", "U2", 1987, "Rock", "Island Records", 11, Flac, 1411),
    demo("Paranoid", "Black Sabbath", 1970, "Heavy Metal", "Vertigo", 8, Flac, 1411),
    // Electronic / dance
    demo("Random Access Memories", "Daft Punk", 2013, "Electronic", "Columbia", 13, Flac, 1411),
    demo("Discovery", "Daft Punk", 2001, "Electronic", "Virgin", 14, Mp3, 320),
    demo("Selected Ambient Works 85-92", "Aphex Twin", 1992, "Ambient", "Apollo", 13, Flac, 1411),
    demo("Music Has the Right to Children", "Boards of Canada", 1998, "IDM", "Warp Records", 18, Flac, 1411),
    demo("Homework", "Daft Punk", 1997, "House", "Virgin", 16, Mp3, 320),
    demo("Since I Left You", "The Avalanches", 2000, "Electronic", "Modular", 18, Mp3, 320),
    demo("Untrue", "Burial", 2007, "UK Garage", "Hyperdub", 13, Flac, 1411),
    // Hip-hop
    demo("Illmatic", "Nas", 1994, "Hip-Hop", "Columbia", 10, Mp3, 320),
    demo("To Pimp a Butterfly", "Kendrick Lamar", 2015, "Hip-Hop", "Aftermath", 16, Flac, 1411),
    demo("The Chronic", "Dr. Dre", 1992, "Hip-Hop", "Death Row", 16, Mp3, 320),
    demo("Ready to Die", "The Notorious B.I.G.", 1994, "Hip-Hop", "Bad Boy", 17, Mp3, 320),
    demo("Madvillainy", "Madvillain", 2004, "Hip-Hop", "Stones Throw", 22, Flac, 1411),
    demo("Aquemini", "OutKast", 1998, "Hip-Hop", "LaFace", 16, Mp3, 320),
    demo("My Beautiful Dark Twisted Fantasy", "Kanye West", 2010, "Hip-Hop", "Roc-A-Fella", 13, Flac, 1411),
    // Jazz
    demo("Kind of Blue", "Miles Davis", 1959, "Jazz", "Columbia", 5, Flac, 1411),
    demo("A Love Supreme", "John Coltrane", 1965, "Jazz", "Impulse!", 4, Flac, 1411),
    demo("Time Out", "Dave Brubeck Quartet", 1959, "Jazz", "Columbia", 7, Flac, 1411),
    demo("Bitches Brew", "Miles Davis", 1970, "Jazz Fusion", "Columbia", 6, Flac, 1411),
    demo("Mingus Ah Um", "Charles Mingus", 1959, "Jazz", "Columbia", 9, Flac, 1411),
    // Classical
    demo("The Well-Tempered Clavier", "Glenn Gould", 1963, "Classical", "Columbia Masterworks", 48, Flac, 1411),
    demo("Goldberg Variations", "Glenn Gould", 1981, "Classical", "CBS Masterworks", 32, Flac, 1411),
    // R&B / soul
    demo("What's Going On", "Marvin Gaye", 1971, "Soul", "Tamla", 9, Flac, 1411),
    demo("Songs in the Key of Life", "Stevie Wonder", 1976, "R&B", "Tamla", 21, Flac, 1411),
    demo("Purple Rain", "Prince", 1984, "R&B", "Warner Bros.", 9, Mp3, 320),
    demo("Lemonade", "Beyoncé", 2016, "R&B", "Columbia", 12, Flac, 1411),
    demo("I Never Loved a Man the Way I Love You", "Aretha Franklin", 1967, "Soul", "Atlantic", 11, Flac, 1411),
    // Indie / alternative
    demo("In the Aeroplane Over the Sea", "Neutral Milk Hotel", 1998, "Indie Folk", "Merge Records", 11, Flac, 1411),
    demo("Funeral", "Arcade Fire", 2004, "Indie Rock", "Merge Records", 10, Mp3, 320),
    demo("Is This It", "The Strokes", 2001, "Indie Rock", "RCA", 11, Mp3, 320),
    demo("Kid A", "Radiohead", 2000, "Art Rock", "Parlophone", 10, Flac, 1411),
    demo("Yankee Hotel Foxtrot", "Wilco", 2002, "Alt-Country", "Nonesuch", 11, Flac, 1411),
    demo("Loveless", "My Bloody Valentine", 1991, "Shoegaze", "Creation Records", 11, Flac, 1411),
    demo("Blue", "Joni Mitchell", 1971, "Folk", "Reprise Records", 10, Flac, 1411),
    // Country / Americana
    demo("At Folsom Prison", "Johnny Cash", 1968, "Country", "Columbia", 28, Mp3, 320),
    demo("Harvest", "Neil Young", 1972, "Country Rock", "Reprise", 10, Flac, 1411),
    // World / reggae
    demo("Legend", "Bob Marley & The Wailers", 1984, "Reggae", "Island Records", 14, Mp3, 320),
    demo("Graceland", "Paul Simon", 1986, "World", "Warner Bros.", 11, Flac, 1411),
    // Pop
    demo("Thriller", "Michael Jackson", 1982, "Pop", "Epic Records", 9, Mp3, 320),
    demo("Ray of Light", "Madonna", 1998, "Pop", "Maverick", 13, Mp3, 320),
    demo("Tapestry", "Carole King", 1971, "Pop", "Ode Records", 13, Flac, 1411),
    // Metal
    demo("Master of Puppets", "Metallica", 1986, "Heavy Metal", "Elektra", 8, Mp3, 320),
    demo("Rust in Peace", "Megadeth", 1990, "Thrash Metal", "Capitol", 9, Mp3, 320),
    // Punk
    demo("London Calling", "The Clash", 1979, "Punk", "CBS", 19, Mp3, 320),
    demo("Never Mind the Bollocks", "Sex Pistols", 1977, "Punk", "Virgin", 12, Mp3, 320),
    // Extras
    demo("Pet Sounds", "The Beach Boys", 1966, "Pop", "Capitol", 13, Flac, 1411),
    demo("Songs of Leonard Cohen", "Leonard Cohen", 1967, "Folk", "Columbia", 10, Flac, 1411),
];

const ROCK_TITLES: &[&str] = &[
    "Intro", "Highway Jam", "Electric Daydream", "Stone Cold", "Fire in the Sky",
    "Midnight Rider", "Rolling Thunder", "Last Train Home", "Gasoline Dreams", "Iron Curtain",
    "River of Souls", "Locomotive", "Desert Rain", "Signal Fire", "Ghost Road",
];
const ELECTRONIC_TITLES: &[&str] = &[
    "System Boot", "Radiant Flux", "Data Stream", "Neon Pulse", "Binary Sunset",
    "Frequency Drift", "Vapor Trail", "Circuit Breaker", "Phase Shift", "Resonance",
    "Sync", "Module 7", "Echo Chamber", "Particle Storm", "White Noise",
];
const HIP_HOP_TITLES: &[&str] = &[
    "Intro", "Street Wisdom", "Hard Knock", "Crown Heights", "Real Talk",
    "Paper Chase", "Night Moves", "Still Standing", "Block Party", "On the Come Up",
    "Hustle Hard", "Concrete Jungle", "No Sleep", "Outro", "Freestyle",
];
const JAZZ_TITLES: &[&str] = &[
    "Prelude", "Blue Note", "After Midnight", "Walking Bass", "Modal Shift",
    "Cool Breeze", "Ballad for No One", "Uptempo", "The Change", "Resolution",
];
const CLASSICAL_TITLES: &[&str] = &[
    "Allegro", "Andante", "Scherzo", "Adagio", "Presto",
    "Rondo", "Minuet", "Theme and Variations", "Coda", "Overture",
];
const DEFAULT_TITLES: &[&str] = &[
    "Opening", "Main Theme", "Interlude", "Bridge", "Chorus",
    "Verse", "Outro", "Reprise", "Finale", "Coda",
    "Movement I", "Movement II", "Movement III", "Movement IV", "Epilogue",
];

fn track_titles(genre: &str) -> &'static [&'static str] {
    match genre {
        "Rock" => ROCK_TITLES,
        "Electronic" => ELECTRONIC_TITLES,
        "Hip-Hop" => HIP_HOP_TITLES,
        "Jazz" => JAZZ_TITLES,
        "Classical" => CLASSICAL_TITLES,
        _ => DEFAULT_TITLES,
    }
}

/// Duration between 2:00 and 8:30, keyed on album title and track number.
fn track_duration(album_title: &str, track_no: u32) -> u32 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(album_title.as_bytes());
    hasher.update(&track_no.to_le_bytes());
    let bytes = *hasher.finalize().as_bytes();
    let n = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    120 + n % 391
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedStats {
    pub albums: usize,
    pub tracks: usize,
}

/// Seeds the demo catalog into an empty store. A store that already
/// holds albums is left untouched and `None` is returned.
pub fn seed_demo(store: &CatalogStore) -> Result<Option<SeedStats>, CatalogError> {
    if store.album_count()? > 0 {
        return Ok(None);
    }

    let mut stats = SeedStats {
        albums: 0,
        tracks: 0,
    };
    for album in DEMO_ALBUMS {
        let titles = track_titles(album.genre);
        let tracks: Vec<TrackDraft> = (0..album.tracks)
            .map(|i| TrackDraft {
                title: titles[i as usize % titles.len()].to_string(),
                track_no: Some(i + 1),
                duration_secs: track_duration(album.title, i + 1),
                format: album.format,
                bitrate_kbps: Some(album.bitrate_kbps),
            })
            .collect();

        stats.tracks += tracks.len();
        store.insert_album(AlbumDraft {
            title: album.title.to_string(),
            artist: album.artist.to_string(),
            year: Some(album.year),
            genre: Some(album.genre.to_string()),
            label: Some(album.label.to_string()),
            tracks,
        })?;
        stats.albums += 1;
    }

    info!(albums = stats.albums, tracks = stats.tracks, "seeded demo catalog");
    Ok(Some(stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store() -> (CatalogStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CatalogStore::open(&dir.path().join("catalog.redb")).expect("open store");
        (store, dir)
    }

    #[test]
    fn seeds_once_and_only_once() {
        let (store, _dir) = open_store();
        let stats = seed_demo(&store).expect("seed").expect("seeded");
        assert_eq!(stats.albums, DEMO_ALBUMS.len());
        assert_eq!(store.album_count().expect("count"), DEMO_ALBUMS.len());

        let again = seed_demo(&store).expect("seed");
        assert!(again.is_none());
        assert_eq!(store.album_count().expect("count"), DEMO_ALBUMS.len());
    }

    #[test]
    fn seeded_albums_are_searchable() {
        let (store, _dir) = open_store();
        seed_demo(&store).expect("seed").expect("seeded");

        let matches = store
            .text_match_albums(&["coltrane".to_string()])
            .expect("match");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].0.title, "A Love Supreme");
    }

    #[test]
    fn seeded_rollups_are_consistent() {
        let (store, _dir) = open_store();
        seed_demo(&store).expect("seed").expect("seeded");

        for album in store.all_albums().expect("albums") {
            let tracks = store.get_album_tracks(album.id).expect("tracks");
            assert_eq!(album.track_count as usize, tracks.len());
            let sum: u64 = tracks.iter().map(|t| u64::from(t.duration_secs)).sum();
            assert_eq!(album.duration_secs, sum);
            for track in &tracks {
                assert!((120..=510).contains(&track.duration_secs));
            }
        }
    }

    #[test]
    fn durations_are_deterministic() {
        assert_eq!(
            track_duration("Abbey Road", 1),
            track_duration("Abbey Road", 1)
        );
        assert_ne!(
            track_duration("Abbey Road", 1),
            track_duration("Abbey Road", 2)
        );
    }
}
