mod app_state;
mod cli;
mod crash_report;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Used when neither `--log-level` nor the config file says otherwise.
const DEFAULT_LOG_DIRECTIVE: &str = "polygpt=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = crash_report::write_crash_report(info);

        eprintln!("\n--- PolyGPT crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("-----------------------\n");

        default_hook(info);
    }));
}

fn log_directive(raw: &str) -> Directive {
    raw.parse().unwrap_or_else(|e| {
        eprintln!("invalid log level {raw:?} ({e}); falling back to info");
        LevelFilter::INFO.into()
    })
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Parsed before logging starts so its level can seed the filter.
    let config = polygpt_config::load_config(args.config.as_deref());

    let directive = match (&args.log_level, &config) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => format!("polygpt={}", config.logging.level.as_str()),
        _ => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_directive(&directive)))
        .init();

    tracing::info!("PolyGPT v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        polygpt_config::PolyConfig::default()
    });
    let selectors = polygpt_config::load_selectors_or_empty(args.selectors.as_deref());
    tracing::info!(
        providers = selectors.len(),
        zoom = config.zoom.default,
        "Config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::PolyApp::new(config, selectors, args.devtools);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
