use crate::app_dirs::AppDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TYPER_LOG=debug`
pub const LOG_ENV: &str = "TYPER_LOG";
const LOG_FILE: &str = "typer.log";

/// Route tracing output to a file, since the terminal is owned by the UI.
/// Keep the returned guard alive for the program's lifetime so buffered
/// lines are flushed; `None` means logging is disabled.
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = AppDirs::log_dir()?;
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("typer: logging disabled, cannot create {}: {err}", dir.display());
        return None;
    }

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
