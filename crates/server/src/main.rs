mod api;
mod config;
mod state;
mod utils;

use api::api_router;
use axum::Router;
use catalog::{seed_demo, CatalogStore};
use config::{config_path_from_env, load_or_create_config, resolve_path};
use state::AppState;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = config_path_from_env();
    let (config, created) = load_or_create_config(&config_path)?;

    if created {
        info!("Created default config at {:?}", config_path);
    } else {
        info!("Loaded config from {:?}", config_path);
    }

    let catalog_path_value = config.catalog_path.trim();
    let catalog_path_value = if catalog_path_value.is_empty() {
        "catalog.redb"
    } else {
        catalog_path_value
    };
    let port = if config.port == 0 { 8508 } else { config.port };
    let bind_addr = format!("0.0.0.0:{}", port);

    let catalog_path = resolve_path(&config_path, catalog_path_value);
    let catalog = CatalogStore::open(&catalog_path)?;
    info!("Opened catalog at {:?}", catalog_path);

    if config.demo_seed {
        match seed_demo(&catalog)? {
            Some(stats) => info!(
                "Seeded demo catalog: {} albums, {} tracks",
                stats.albums, stats.tracks
            ),
            None => info!("Catalog already populated; skipping demo seed"),
        }
    }

    let state = AppState::new(catalog);
    let app = Router::new()
        .nest("/api/v1", api_router(state))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut term = match signal(SignalKind::terminate()) {
            Ok(signal) => signal,
            Err(err) => {
                warn!("Failed to install terminate signal handler: {}", err);
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for ctrl-c: {}", err);
        }
    }

    info!("Shutdown signal received.");
}
