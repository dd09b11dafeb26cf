pub mod demo;
pub mod error;
pub mod facets;
pub mod mutate;
pub mod query;
pub mod store;
pub mod text;

pub use demo::{seed_demo, SeedStats};
pub use error::CatalogError;
pub use facets::{facets, stats, CatalogStats, CatalogTotals, FacetCount, FacetSummary};
pub use mutate::{AlbumPatch, MutationGate, TrackPatch};
pub use query::{search, FilterSet, SearchPage, SearchRequest, SortKey};
pub use store::{AlbumDraft, CatalogStore, TrackDraft};
