//! Logging for friend.
use anyhow::Context;
use friend_core::get_data_dir;
use std::io::LineWriter;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::OffsetTime;

const MAX_LOG_BYTES: u64 = 100 * 1024;

/// Filter directives for a `-v` count. `RUST_LOG` takes precedence when set.
pub fn log_filter(verbosity: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directives = match verbosity {
        0 | 1 => "friend=debug,friend_core=debug,rustyline=info",
        // Trace also shows the HTTP client's request handling
        _ => "friend=trace,friend_core=trace,async_openai=debug,rustyline=info",
    };
    EnvFilter::new(directives)
}

/// Initializes file-based logging at `<data_dir>/friend.log`.
///
/// A log larger than 100KB is moved to `friend.log.old` first, replacing any
/// previous backup.
///
/// # Errors
///
/// Fails if the data directory cannot be created, the log file cannot be
/// rotated or opened, or the local UTC offset cannot be determined.
pub fn setup_logging(verbosity: u8) -> anyhow::Result<()> {
    let data_dir = get_data_dir().context("Failed to get data directory")?;
    let log_path = data_dir.join("friend.log");

    if log_path.exists() && std::fs::metadata(&log_path)?.len() > MAX_LOG_BYTES {
        let backup_path = data_dir.join("friend.log.old");
        if backup_path.exists() {
            std::fs::remove_file(&backup_path)?;
        }
        std::fs::rename(&log_path, backup_path)?;
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Ensure the logs are flushed after every line
    let writer = Mutex::new(LineWriter::new(log_file));

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbosity))
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(OffsetTime::local_rfc_3339()?)
        .init();

    tracing::info!(log = %log_path.display(), verbosity, "Logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_by_verbosity() {
        // RUST_LOG would override the directives under test
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let debug = log_filter(1).to_string();
        assert!(debug.contains("friend_core=debug"));
        assert!(!debug.contains("trace"));
        assert!(log_filter(2).to_string().contains("friend_core=trace"));
        assert!(log_filter(5).to_string().contains("async_openai=debug"));
    }
}
