use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use gpui::Application;
use tracing::{debug, info, warn};

use income_ui::app::AppServices;
use income_ui::components::WindowPreferences;
use income_ui::config::AppConfig;
use income_ui::{gui, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Net income calculator that shows the cards available for an income range.
///
/// Settings come from a TOML file; the flags below override it.
#[derive(Debug, Parser)]
#[command(name = "IncomeCalculator", version)]
struct Cli {
    /// Configuration file. Defaults to `income-calculator.toml` in the
    /// working directory when that file exists.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Root directory of the card assets (overrides `assets.root`).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Log level or filter directive (overrides `logging.level` and `RUST_LOG`).
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file (overrides `logging.file`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply_to(
        self,
        config: &mut AppConfig,
    ) -> Option<String> {
        if let Some(root) = self.assets {
            config.assets.root = root;
        }
        if let Some(file) = self.log_file {
            config.logging.file = Some(file);
        }
        self.log_level
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let mut config = AppConfig::discover(cli.config.as_deref(), &cwd)?;

    let cli_level = cli.apply_to(&mut config);
    match cli_level {
        Some(level) => logging::set_log_level(&level)?,
        None if !logging::env_filter_overrides() => logging::set_log_level(&config.logging.level)?,
        None => debug!("RUST_LOG is set, ignoring configured log level"),
    }
    if let Some(path) = &config.logging.file {
        if let Err(error) = logging::enable_file_logging(path) {
            warn!(%error, "continuing without a log file");
        }
    }
    debug!(?config, "configuration resolved");

    let services = AppServices::from_config(&config).context("cannot open card store")?;
    info!(root = %config.assets.root.display(), "starting income calculator");

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx| {
            gui::setup_app(cx);
            gui::open_main_window(cx, services, WindowPreferences::default());
        });

    Ok(())
}
