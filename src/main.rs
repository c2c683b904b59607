#![allow(non_snake_case)]

mod app;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use moodreads_core::logging::JsonlLayer;
use moodreads_core::MoodConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Resolved launch options, set once from the command line
static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// Everything the App component needs from the command line.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config: MoodConfig,
    pub session_file: Option<PathBuf>,
    pub reduced_motion: bool,
}

/// Get the launch options (set from command line or defaults)
pub fn launch_options() -> LaunchOptions {
    LAUNCH.get().cloned().unwrap_or_else(|| LaunchOptions {
        config: MoodConfig::default(),
        session_file: None,
        reduced_motion: false,
    })
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moodreads")
}

/// MoodReads - book recommendations for how you feel
#[derive(Parser, Debug)]
#[command(name = "moodreads-desktop")]
#[command(about = "MoodReads - pick a mood, get a reading list")]
struct Args {
    /// Data directory (config.json is picked up from here)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON file overriding timing constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep session state (the easter egg) in this file across restarts
    #[arg(short, long)]
    session_file: Option<PathBuf>,

    /// Disable animations regardless of the system preference
    #[arg(long)]
    reduced_motion: bool,

    /// Also write JSONL logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn init_logging(log_dir: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("moodreads=info,moodreads_core=info"));

    let jsonl = log_dir
        .map(JsonlLayer::new)
        .transpose()
        .context("failed to open log directory")?;
    let log_path = jsonl.as_ref().map(|layer| layer.log_path().to_path_buf());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(jsonl)
        .init();

    if let Some(path) = log_path {
        tracing::info!(path = %path.display(), "Writing JSONL logs");
    }
    Ok(())
}

fn load_config(args: &Args, data_dir: &std::path::Path) -> anyhow::Result<MoodConfig> {
    if let Some(path) = &args.config {
        return MoodConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }
    let default_path = data_dir.join("config.json");
    if default_path.exists() {
        return MoodConfig::load(&default_path)
            .with_context(|| format!("failed to load config from {}", default_path.display()));
    }
    Ok(MoodConfig::default())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_dir.as_ref())?;

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let config = load_config(&args, &data_dir)?;

    tracing::info!(
        data_dir = %data_dir.display(),
        session_file = ?args.session_file,
        reduced_motion = args.reduced_motion,
        "Starting MoodReads"
    );

    let _ = LAUNCH.set(LaunchOptions {
        config,
        session_file: args.session_file,
        reduced_motion: args.reduced_motion,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("MoodReads")
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
    Ok(())
}
