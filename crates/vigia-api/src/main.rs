//! Vigia API server binary.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use vigia_core::{Config, DataBackend};

/// Electoral observation dashboard API.
#[derive(Parser, Debug)]
#[command(name = "vigia-api")]
#[command(about = "Read-only API over electoral observation data", long_about = None)]
struct Args {
    /// Configuration file path (TOML). Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port. Overrides the config file and the PORT variable.
    #[arg(short, long)]
    port: Option<u16>,

    /// Data source backend. Overrides the config file.
    #[arg(long, value_enum)]
    data_source: Option<DataSourceArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DataSourceArg {
    /// Seeded in-memory demo dataset.
    Memory,
    /// SQLite database (requires data_source.database_url in the config).
    Sqlite,
}

impl From<DataSourceArg> for DataBackend {
    fn from(arg: DataSourceArg) -> Self {
        match arg {
            DataSourceArg::Memory => DataBackend::Memory,
            DataSourceArg::Sqlite => DataBackend::Sqlite,
        }
    }
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(backend) = args.data_source {
        config.data_source.backend = backend.into();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    apply_overrides(&mut config, &args);
    // Overrides can change the backend, so cross-field constraints get
    // checked again before anything connects.
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log.filter.clone())),
        )
        .init();

    vigia_api::serve(config).await?;
    Ok(())
}
