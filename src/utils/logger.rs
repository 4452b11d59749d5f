use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{DeferredError, Result};
use crate::utils::validation::Validate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber described by `config`.
///
/// `RUST_LOG` still takes precedence over `config.filter`. Fails if the config
/// is invalid or a global subscriber is already set.
pub fn init_from_config(config: &LoggingConfig) -> Result<()> {
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| DeferredError::LoggerInitError {
            message: e.to_string(),
        })?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(config.with_target)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Compact => registry.with(fmt_layer.compact()).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    };

    installed.map_err(|e| DeferredError::LoggerInitError {
        message: e.to_string(),
    })
}
