use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use depositor_core::{
    load_config, validate_config, Config, FileTracker, Journal, OrchestratorConfig,
    ProcessUploader, UploadOrchestrator, UploadTracker,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Batch-deposit dataset directories and zip archives to a remote repository.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the downloads directory containing the datasets
    #[arg(short, long, env = "DEPOSITOR_DOWNLOADS")]
    downloads: PathBuf,

    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "DEPOSITOR_CONFIG", default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Without a config file every path falls back to the fixed defaults.
    let config = if cli.config.exists() {
        load_config(&cli.config)
            .with_context(|| format!("Failed to load config from {:?}", cli.config))?
    } else {
        Config::default()
    };
    validate_config(&config).context("Configuration validation failed")?;

    // General log: stdout plus an append-only file under the logs dir.
    std::fs::create_dir_all(&config.logs.dir)
        .with_context(|| format!("Failed to create logs directory {:?}", config.logs.dir))?;
    let general_log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.logs.general_path())
        .with_context(|| format!("Failed to open log file {:?}", config.logs.general_path()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(general_log))
                .with_ansi(false),
        )
        .init();

    // Compute config hash for the startup line
    let config_json = serde_json::to_string(&config).unwrap_or_default();
    let config_hash = format!("{:x}", Sha256::digest(config_json.as_bytes()));
    let config_hash_short = &config_hash[..16];

    info!(
        "Starting depositor {} (config hash {}), downloads dir {:?}",
        VERSION, config_hash_short, cli.downloads
    );

    let tracker: Arc<dyn UploadTracker> = Arc::new(
        FileTracker::open(&config.paths.tracker_file).context("Failed to open tracker file")?,
    );
    info!(
        "Tracker loaded from {:?} ({} datasets already uploaded)",
        config.paths.tracker_file,
        tracker.len()
    );

    let journal = Arc::new(
        Journal::open(&config.logs.success_path(), &config.logs.failure_path())
            .context("Failed to open journal files")?,
    );

    let uploader = ProcessUploader::new(config.uploader.clone());

    let orchestrator = UploadOrchestrator::new(
        OrchestratorConfig::new(cli.downloads.clone(), config.paths.input_file.clone()),
        uploader,
        tracker,
        journal,
    );

    // Per-dataset outcomes live in the journals and the tracker; the
    // process itself exits 0 even when individual uploads failed.
    let report = orchestrator.run().await?;
    debug!(?report, "Run complete");

    Ok(())
}
