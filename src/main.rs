#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use panorama_core::{Palette, PanoramaConfig};

/// Global configuration, resolved once from the command line
static CONFIG: OnceLock<Arc<PanoramaConfig>> = OnceLock::new();

/// Get the site configuration (set at startup or default)
pub fn get_config() -> Arc<PanoramaConfig> {
    CONFIG
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(PanoramaConfig::default()))
}

/// Default config location: `<config dir>/panorama/panorama.json`
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("panorama").join("panorama.json"))
}

/// Panorama - scroll-driven portfolio
#[derive(Parser, Debug)]
#[command(name = "panorama-desktop")]
#[command(about = "Panorama - a horizontally paneled portfolio")]
struct Args {
    /// Panel configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in palette used when no configuration file is found
    #[arg(short, long, default_value = "lilac")]
    palette: Palette,
}

fn resolve_config(args: &Args) -> Result<PanoramaConfig> {
    if let Some(ref path) = args.config {
        return PanoramaConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    match default_config_path() {
        Some(path) if path.exists() => PanoramaConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        _ => Ok(PanoramaConfig::with_palette(args.palette)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    tracing::info!(
        "Starting with {} panels ({} palette fallback)",
        config.panel_count(),
        args.palette.name()
    );

    let _ = CONFIG.set(Arc::new(config));

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Panorama")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
