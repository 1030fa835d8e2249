//! Log setup
//! Diagnostics go to a file so they never mix with the drawn screen

use anyhow::Context;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `search=debug`)
pub const LOG_ENV: &str = "TILDE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Per-process log file, so concurrent editors never truncate each other's log
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(format!("tilde-{}.log", std::process::id()))
}

/// Install the global subscriber, writing to [`log_path`]
pub fn init() -> anyhow::Result<PathBuf> {
    let path = log_path();
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_is_per_process() {
        let path = log_path();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(name, format!("tilde-{}.log", std::process::id()));
        assert_eq!(path.parent(), Some(std::env::temp_dir().as_path()));
    }
}
