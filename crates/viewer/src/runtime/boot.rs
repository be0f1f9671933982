//! Boot — logging init, config load, viewer construction.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ViewerConfig;
use crate::view::LogView;

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viewer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load and validate configuration, then build the viewer facade.
pub fn boot() -> Result<LogView, Box<dyn std::error::Error>> {
    let config = ViewerConfig::load()?;
    config.validate()?;

    info!(
        log_dir = %config.log_dir,
        pattern = %config.pattern,
        threshold_mib = config.large_file_threshold_mib,
        "configuration loaded"
    );

    Ok(LogView::new(config))
}
