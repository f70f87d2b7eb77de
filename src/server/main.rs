//! Campus Connect API server.
//!
//! Serves the campus boundary, buildings, roads and map configuration from
//! GeoJSON/JSON files in the data directory, plus an in-memory events list.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campus_connect::data::Config;
use campus_connect::CampusData;

mod api;
mod events;

use api::AppState;
use events::EventStore;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Campus navigation API server")]
struct Args {
    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:5000
    #[arg(short, long)]
    listen: Option<String>,

    /// Listen port, keeping the configured host
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Directory containing the GeoJSON and navigation config files
    #[arg(long, env = "DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Serve an empty location list instead of demo buildings when buildings.geojson is missing
    #[arg(long)]
    no_demo_fallback: bool,
}

impl Args {
    /// Config file (or defaults) with command line and environment applied on top
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Loading {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(port) = self.port {
            config.server.set_port(port);
        }
        if let Some(listen) = &self.listen {
            config.server.listen = listen.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.data.dir = dir.clone();
        }
        if self.no_demo_fallback {
            config.data.demo_fallback = false;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let config = args.resolve_config()?;

    info!("Campus Connect API Server");
    info!("Data directory: {}", config.data.dir.display());

    let data = CampusData::new(&config.data);
    for path in data.paths().all() {
        if path.is_file() {
            info!("  found {}", path.display());
        } else {
            warn!("  missing {} (defaults will be served)", path.display());
        }
    }

    let state = Arc::new(AppState {
        data,
        events: EventStore::seeded(),
    });

    let app = api::router(state);

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen))?;
    axum::serve(listener, app).await?;

    Ok(())
}
