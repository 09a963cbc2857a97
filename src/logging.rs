// 📜 Logging - tracing subscriber setup shared by both binaries

use crate::config::LogFormat;
use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_level` when set.
pub fn init_logging(format: LogFormat, default_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},hyper=info,tower_http=info", default_level))
    });

    let registry = tracing_subscriber::registry();

    let result = match format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_current_span(true)
                .with_filter(env_filter);
            registry.with(fmt_layer).try_init()
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter);
            registry.with(fmt_layer).try_init()
        }
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!(format = ?format, "logging initialized");
    Ok(())
}
