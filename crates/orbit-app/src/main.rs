mod app_state;
mod cli;

use std::path::Path;

use orbit_common::{ConfigError, OrbitError};
use orbit_config::OrbitConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const FALLBACK_DIRECTIVE: &str = "orbit=info";

fn main() {
    let args = cli::parse();

    // Config is read first so its log level can seed the filter.
    let loaded = orbit_config::load_config(args.config.as_deref());
    init_logging(args.log_level.as_deref(), &loaded);

    tracing::info!("Orbit v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args.config.as_deref(), loaded) {
        tracing::error!("Orbit failed: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

fn init_logging(cli_level: Option<&str>, loaded: &Result<OrbitConfig, ConfigError>) {
    let log_directive = match (cli_level, loaded) {
        (Some(level), _) => level.to_string(),
        (None, Ok(config)) => format!("orbit={}", config.logging.level.as_directive()),
        (None, Err(_)) => FALLBACK_DIRECTIVE.to_string(),
    };
    let directive = log_directive
        .parse::<Directive>()
        .or_else(|_| FALLBACK_DIRECTIVE.parse::<Directive>());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(
    config_path: Option<&Path>,
    loaded: Result<OrbitConfig, ConfigError>,
) -> orbit_common::Result<()> {
    let config = resolve_config(config_path, loaded)?;
    tracing::info!("Config loaded ({} items)", config.items.len());

    let event_loop =
        EventLoop::new().map_err(|e| OrbitError::Other(format!("event loop: {e}")))?;
    let mut app = app_state::OrbitApp::new(config)?;

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| OrbitError::Other(format!("event loop: {e}")))?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// An explicit `--config` must load; the default location falls back to
/// built-in defaults.
fn resolve_config(
    config_path: Option<&Path>,
    loaded: Result<OrbitConfig, ConfigError>,
) -> orbit_common::Result<OrbitConfig> {
    match (config_path, loaded) {
        (_, Ok(config)) => Ok(config),
        (Some(path), Err(e)) => {
            tracing::error!("Config override {} could not be used", path.display());
            Err(e.into())
        }
        (None, Err(e)) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            Ok(OrbitConfig::default())
        }
    }
}
