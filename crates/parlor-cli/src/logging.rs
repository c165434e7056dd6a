//! Tracing setup for the parlor binary.
//!
//! Logs go to `<data_dir>/parlor/logs/parlor.log`. When that file cannot be
//! opened, warnings and errors go to stderr instead so the REPL stays quiet.

use parlor_infrastructure::ParlorPaths;
use std::fs::{self, OpenOptions};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_NAME: &str = "parlor.log";

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the lifetime of `main`.
pub fn init_logging() -> Option<WorkerGuard> {
    let file = ParlorPaths::logs_dir().and_then(|dir| {
        fs::create_dir_all(&dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE_NAME))?;
        Ok(file)
    });

    match file {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,parlor_core=debug"));

            let installed = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init();

            match installed {
                Ok(()) => {
                    tracing::info!("Logging initialized");
                    Some(guard)
                }
                Err(e) => {
                    eprintln!("[parlor] Failed to set tracing subscriber: {}", e);
                    None
                }
            }
        }
        Err(e) => {
            eprintln!("[parlor] No log file available ({}), using stderr", e);
            init_stderr_logging();
            None
        }
    }
}

fn init_stderr_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
