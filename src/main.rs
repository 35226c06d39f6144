#![forbid(unsafe_code)]

mod collaborator;
mod config;
mod constants;
mod monitor;
mod profiles;
mod selector;
mod status;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{Level as TraceLevel, error, info};
use tracing_subscriber::FmtSubscriber;

use collaborator::{CommandRunner, SystemRunner};
use config::Config;
use profiles::ProfileTool;

/// Status bar widget for Hyprland monitor profiles
#[derive(Debug, Parser)]
#[command(name = "hyprmon-widget", version, about)]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/hyprmon-widget/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Launch the TUI for profile selection
    Tui,
}

fn log_level(default: TraceLevel) -> TraceLevel {
    match std::env::var(constants::env::LOG_LEVEL)
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "info" => TraceLevel::INFO,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => default,
    }
}

/// Status mode logs to stderr; stdout carries only the JSON line
fn init_status_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(TraceLevel::WARN))
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Selector mode logs to a file so nothing is drawn over the alternate screen
fn init_selector_logging() {
    let level = log_level(TraceLevel::INFO);
    let builder = FmtSubscriber::builder().with_max_level(level).with_ansi(false);
    let _ = match open_selector_log() {
        Ok(file) => tracing::subscriber::set_global_default(builder.with_writer(Mutex::new(file)).finish()),
        Err(_) => tracing::subscriber::set_global_default(builder.with_writer(std::io::sink).finish()),
    };
}

fn open_selector_log() -> Result<File> {
    let dir = dirs::cache_dir()
        .context("Failed to determine cache directory")?
        .join(constants::config::APP_DIR);
    fs::create_dir_all(&dir).context(format!("Failed to create {}", dir.display()))?;
    let path = dir.join(constants::config::SELECTOR_LOG);
    File::options()
        .create(true)
        .append(true)
        .open(&path)
        .context(format!("Failed to open {}", path.display()))
}

/// One query → format → print cycle; `out` receives only the JSON line
fn run_status(config: &Config, runner: &dyn CommandRunner, out: &mut dyn Write) -> ExitCode {
    let monitors = match monitor::query_monitors(runner, &config.monitor_command) {
        Ok(monitors) => monitors,
        Err(e) => {
            eprintln!("Error getting monitors: {e}");
            return ExitCode::FAILURE;
        }
    };

    let tool = ProfileTool::new(runner, &config.profile_command);
    let payload = status::build_status(&config.glyph, &config.class, &monitors, || tool.active());

    let json = match payload.to_json() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error marshaling JSON: {e}");
            return ExitCode::FAILURE;
        }
    };

    match writeln!(out, "{json}") {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing status: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_selector(config: &Config) -> ExitCode {
    let runner = SystemRunner;
    let tool = ProfileTool::new(&runner, &config.profile_command);
    match selector::terminal::run(&tool) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "Selector failed");
            eprintln!("Error running TUI: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        None => init_status_logging(),
        Some(Mode::Tui) => init_selector_logging(),
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    info!(?config, "Configuration loaded");

    match cli.command {
        None => run_status(&config, &SystemRunner, &mut io::stdout().lock()),
        Some(Mode::Tui) => run_selector(&config),
    }
}
