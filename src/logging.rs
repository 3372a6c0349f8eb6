use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file used in TUI mode.
pub const LOG_ENV: &str = "PAGESCAN_LOG";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Interactive mode: the terminal belongs to the UI, so logs go to the
    /// file named by `PAGESCAN_LOG`, or nowhere.
    File,
    /// One-shot mode: stderr, keeping stdout for the report.
    Stderr,
}

/// Initialize tracing for the given target.
///
/// The filter comes from `RUST_LOG`, defaulting to `info` for files and
/// `warn` on stderr.
pub fn init_tracing(target: LogTarget) {
    match target {
        LogTarget::File => init_file(),
        LogTarget::Stderr => init_stderr(),
    }
}

fn init_file() {
    let Some(log_path) = std::env::var(LOG_ENV).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter_or("info"))
        .with(file_layer)
        .try_init();
}

fn init_stderr() {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter_or("warn"))
        .with(stderr_layer)
        .try_init();
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// `{path}.{timestamp}.{pid}`, so concurrent instances never share a file.
fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
