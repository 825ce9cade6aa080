use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file prefix.
pub const LOG_FILE_ENV: &str = "CONFUSION_LOG";

/// Pick the filter.
///
/// Order: `verbose` forces `debug`, then a valid `RUST_LOG` value
/// (`env_filter`), then the configured default, then `warn`.
pub fn build_filter(env_filter: Option<&str>, default_filter: &str, verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    env_filter
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_filter).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Initialize tracing.
///
/// Logs go to stderr so rendered views on stdout stay clean. Set
/// `CONFUSION_LOG` to a file path to write logs to
/// `{path}.{timestamp}.{pid}` instead.
pub fn init_tracing(default_filter: &str, verbose: bool) {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env_filter.as_deref(), default_filter, verbose);

    let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .init();
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
