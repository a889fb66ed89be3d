use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.bloglist/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.bloglist/`
/// - `~/.bloglist/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let bloglist_dir = home.join(".bloglist");
    std::fs::create_dir_all(&bloglist_dir)?;
    std::fs::create_dir_all(bloglist_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data-file discovery ────────────────────────────────────────────────────────

/// Locate the blog data file on the local system.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `~/.bloglist/blogs.jsonl`
/// 2. `./blogs.jsonl`
///
/// When neither exists, the first candidate is returned anyway: the store
/// treats a missing file as empty and creates it on first write.
pub fn discover_data_file() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let default = home.join(".bloglist").join("blogs.jsonl");

    let candidates = [default.clone(), PathBuf::from("blogs.jsonl")];
    candidates
        .into_iter()
        .find(|p| p.exists())
        .unwrap_or(default)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
