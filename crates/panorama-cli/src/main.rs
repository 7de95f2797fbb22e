//! Panorama CLI
//!
//! Thin wrapper around panorama-core for checking panel configurations and
//! replaying recorded input against the navigator without a window.
//!
//! ## Usage
//!
//! ```bash
//! # List the panels of the built-in lilac palette
//! panorama panels
//!
//! # List the panels of a config file
//! panorama --config site.json panels
//!
//! # Validate a config file
//! panorama --config site.json check
//!
//! # Replay an input trace
//! panorama replay trace.json
//!
//! # Replay starting from a given panel
//! panorama replay --start gallery trace.json
//! ```
//!
//! A trace is a JSON array of timestamped input events:
//!
//! ```json
//! [
//!   { "at_ms": 0,   "event": { "type": "wheel", "delta_y": 120 } },
//!   { "at_ms": 200, "event": { "type": "wheel", "delta_y": 120 } },
//!   { "at_ms": 900, "event": { "type": "key", "key": "End" } }
//! ]
//! ```

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use panorama_core::{HashSync, InputAdapter, InputEvent, Palette, PanelNavigator, PanoramaConfig};
use serde::Deserialize;

/// Panorama - paneled portfolio tooling
#[derive(Parser)]
#[command(name = "panorama")]
#[command(version = "0.1.0")]
#[command(about = "Panorama - inspect panel configs and replay navigation traces")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Panel configuration file (default: <config dir>/panorama/panorama.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Built-in palette used when no configuration file is found
    #[arg(short, long, global = true, default_value = "lilac")]
    palette: Palette,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List panels with their fragment ids and backgrounds
    Panels,

    /// Feed a recorded input trace through the navigator
    Replay {
        /// Trace file (JSON array of `{ "at_ms", "event" }`)
        trace: PathBuf,

        /// Fragment id of the panel to start on
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Validate the configuration
    Check,
}

/// One recorded input.
#[derive(Debug, Deserialize)]
struct TraceEntry {
    /// Milliseconds since the start of the trace
    at_ms: u64,
    event: InputEvent,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Default config location: `<config dir>/panorama/panorama.json`
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("panorama").join("panorama.json"))
}

fn load_config(path: &Path) -> Result<PanoramaConfig> {
    PanoramaConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))
}

/// Explicit `--config`, then the default location, then the palette.
fn resolve_config(cli: &Cli) -> Result<PanoramaConfig> {
    if let Some(ref path) = cli.config {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config(&path),
        _ => {
            tracing::debug!("No config file, using {} palette", cli.palette.name());
            Ok(PanoramaConfig::with_palette(cli.palette))
        }
    }
}

fn load_trace(path: &Path) -> Result<Vec<TraceEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read trace {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid trace {}", path.display()))
}

fn cmd_panels(config: &PanoramaConfig) {
    println!("Panels ({}):", config.panel_count());
    for (index, panel) in config.panels.iter().enumerate() {
        println!("  {:>2}  #{:<14} {}", index, panel.id, panel.title);
        println!("      {}", panel.gradient);
    }
}

/// Replay `trace`, returning the printed transcript.
///
/// `start` moves to a named panel first, without a cooldown and without a
/// transcript line. Unknown names are an error.
fn replay(
    config: &PanoramaConfig,
    trace: &[TraceEntry],
    start: Option<&str>,
) -> Result<Vec<String>> {
    let mut navigator = PanelNavigator::new(config);
    let mut adapter = InputAdapter::new(config);
    let fragments = Rc::new(RefCell::new(HashSync::from_config(config)));
    navigator.subscribe(Box::new(fragments.clone()));

    if let Some(id) = start {
        let index = adapter.hash().index_of(id)?;
        navigator.go_to_panel(index);
    }

    let t0 = Instant::now();
    let mut lines = Vec::new();

    for entry in trace {
        let now = t0 + Duration::from_millis(entry.at_ms);
        if let Some(transition) = adapter.dispatch(&mut navigator, &entry.event, now) {
            let fragments = fragments.borrow();
            let fragment = fragments.current_fragment().unwrap_or("?");
            lines.push(format!(
                "t={} {} -> {} #{}",
                entry.at_ms, transition.from, transition.to, fragment
            ));
        } else {
            tracing::debug!(at_ms = entry.at_ms, event = ?entry.event, "No transition");
        }
    }

    let current = navigator.current_index();
    lines.push(format!(
        "final index={} fragment={}",
        current,
        adapter.hash().fragment_for(current).unwrap_or("?")
    ));
    Ok(lines)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Panels => cmd_panels(&config),
        Commands::Replay {
            ref trace,
            ref start,
        } => {
            let entries = load_trace(trace)?;
            tracing::info!("Replaying {} events", entries.len());
            for line in replay(&config, &entries, start.as_deref())? {
                println!("{line}");
            }
        }
        Commands::Check => {
            // load() already validated; this catches palette configs too
            config.validate()?;
            println!(
                "ok: {} panels, cooldown {}ms, reveal {}ms",
                config.panel_count(),
                config.timing.cooldown_ms,
                config.timing.reveal_delay_ms
            );
        }
    }

    Ok(())
}
