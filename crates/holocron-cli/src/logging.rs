//! Log setup.
//!
//! Console commands log to stderr. The TUI owns the terminal, so `browse`
//! writes to `<data dir>/holocron/holocron.log` instead. `RUST_LOG` takes
//! precedence over `--log-level`.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::types::LogLevel;

pub const LOG_FILE_NAME: &str = "holocron.log";

pub fn init_console(level: LogLevel) {
    let installed = tracing_subscriber::registry()
        .with(filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
    report_existing(installed);
}

pub fn init_file(level: LogLevel) -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = tracing_subscriber::registry()
        .with(filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .try_init();
    report_existing(installed);

    Ok(guard)
}

pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("holocron")
}

/// A second init keeps the subscriber already in place
fn report_existing(installed: std::result::Result<(), TryInitError>) {
    if let Err(err) = installed {
        tracing::debug!(error = %err, "log subscriber already installed");
    }
}

fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)))
}

fn directive(level: LogLevel) -> String {
    format!("holocron={level},holocron_catalog={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_scopes_to_own_crates() {
        assert_eq!(
            directive(LogLevel::Debug),
            "holocron=debug,holocron_catalog=debug"
        );
    }

    #[test]
    fn test_second_init_keeps_first_subscriber() {
        init_console(LogLevel::Warn);
        init_console(LogLevel::Debug);
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn test_log_dir_is_namespaced() {
        assert!(log_dir().ends_with("holocron"));
    }
}
