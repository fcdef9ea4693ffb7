//! Log file setup.
//!
//! Logs always go to `<cache>/lutemon/logs/lutemon.log`. Set
//! `LUTEMON_LOG_STDERR` to mirror them on stderr; `RUST_LOG` overrides the
//! default INFO filter.

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "lutemon.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = std::env::var_os("LUTEMON_LOG_STDERR").map(|_| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Keep the file writer alive for the whole process.
    std::mem::forget(guard);

    tracing::debug!("Log file: {}/lutemon.log", log_dir.display());
    Ok(())
}

/// Platform cache directory for logs.
///
/// - Linux: `~/.cache/lutemon/logs`
/// - macOS: `~/Library/Caches/lutemon/logs`
/// - Fallback: `/tmp/lutemon/logs`
fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "lutemon")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/lutemon"))
        .join("logs")
}
