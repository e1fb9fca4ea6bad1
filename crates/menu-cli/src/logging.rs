use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sends tracing output to `path`. The terminal belongs to the UI, so with no
/// path nothing is installed. Keep the guard alive until exit to flush.
pub fn init(path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let file = File::create(path).with_context(|| format!("open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(env_filter)
        .try_init()?;

    Ok(Some(guard))
}
