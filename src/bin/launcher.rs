use std::process::ExitCode;

use anyhow::Context as _;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use game_portal::app::{AppConfig, DisplayContext, Launcher, SurfaceSpec};
use game_portal::assets::AssetService;
use game_portal::build_info;
use game_portal::health;
use game_portal::menu::catalog::Catalog;

fn main() -> ExitCode {
    let (config, config_error) = match AppConfig::load_from_env() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.logging.filter);
    if let Some(e) = config_error {
        warn!(error = %e, "Could not load configuration, using defaults");
    }

    info!(version = %build_info::version_string(), profile = %config.profile, "Starting game portal");
    for line in build_info::detailed_info().lines() {
        info!("{line}");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let assets = AssetService::from_config(&config.assets);

    if config.startup_checks {
        let report = health::run_all_checks(&assets);
        health::print_report(&report);
        if !report.is_healthy() {
            warn!(failed = report.failed, "Startup checks failed, continuing");
        }
    }

    let catalog = Catalog::builtin().context("invalid game catalog")?;
    let mut launcher = Launcher::new(catalog, config, &assets);
    let mut display = DisplayContext::new(SurfaceSpec::launcher()).context("no display available")?;

    launcher.run(&mut display)
}
