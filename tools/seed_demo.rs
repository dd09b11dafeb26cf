use std::env;
use std::path::PathBuf;

use catalog::{seed_demo, CatalogStore};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let catalog_path = args
        .next()
        .or_else(|| env::var("CATALOG_PATH").ok())
        .unwrap_or_else(|| "data/catalog.redb".to_string());

    let store = CatalogStore::open(&PathBuf::from(&catalog_path))?;
    match seed_demo(&store)? {
        Some(stats) => println!(
            "Seeded {}: {} albums, {} tracks",
            catalog_path, stats.albums, stats.tracks
        ),
        None => println!("Catalog at {} is not empty; nothing to do", catalog_path),
    }

    Ok(())
}
