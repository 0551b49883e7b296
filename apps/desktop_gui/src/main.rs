use std::{path::PathBuf, sync::Arc};

mod config;
mod controller;
mod platform;
mod ui;

use anyhow::Context;
use board_core::Dataset;
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::JobBoardApp;

const UI_EVENT_QUEUE_CAPACITY: usize = 256;

#[derive(Debug, Parser)]
#[command(name = "job-board", about = "Browse employers on a list and a map")]
struct Args {
    /// Employer dataset (JSON array); the bundled sample is used when omitted.
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Settings file; defaults to ./job_board.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dataset(path: Option<&PathBuf>) -> anyhow::Result<Dataset> {
    match path {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("failed to load dataset '{}'", path.display())),
        None => {
            let dataset = Dataset::bundled().context("bundled dataset is invalid")?;
            tracing::info!(employers = dataset.len(), "using bundled employer dataset");
            Ok(dataset)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_filter);

    let settings = config::load_settings(args.config.as_deref())?;
    let dataset_path = args.dataset.or_else(|| settings.dataset_path.clone());
    let dataset = Arc::new(load_dataset(dataset_path.as_ref())?);

    let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);

    let title = settings.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(JobBoardApp::new(ui_tx, ui_rx, dataset, &settings)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop ui exited with error: {err}"))
}
