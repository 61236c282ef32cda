use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file prefix.
pub const LOG_ENV_VAR: &str = "LIFETERM_LOG";

/// Initialize tracing with optional file output.
///
/// The board owns the terminal, so nothing is logged unless `LIFETERM_LOG`
/// holds a file prefix. Level filtering comes from `RUST_LOG` (default
/// `info`). Returns the file actually written to.
pub fn init_tracing() -> Option<PathBuf> {
    let prefix = std::env::var(LOG_ENV_VAR).ok()?;
    let path = log_file_path(&prefix, std::process::id(), SystemTime::now());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(path = %path.display(), "Logging initialised");
    Some(path)
}

/// `{prefix}.{unix-seconds}.{pid}`, so concurrent runs never share a file.
pub fn log_file_path(prefix: &str, pid: u32, now: SystemTime) -> PathBuf {
    let timestamp = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", prefix, timestamp, pid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn log_file_path_appends_timestamp_and_pid() {
        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(
            log_file_path("/tmp/life.log", 42, now),
            PathBuf::from("/tmp/life.log.1700000000.42")
        );
    }
}
