pub mod config;
pub mod error;

pub use config::{
    ApiConfig, Config, LocationConfig, NotificationConfig, StorageConfig, ValidationResult,
};
pub use error::{
    AppError, InputError, LocationError, NetworkError, ReqwestErrorExt,
    StorageError, WeatherError,
};

use anyhow::Result;

/// Initialize logging.
///
/// Logs go to stderr so they never interleave with the rendered surface on
/// stdout. `RUST_LOG` wins over the `verbose` default.
pub fn init(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("WeatherNow core initialized");
    Ok(())
}
