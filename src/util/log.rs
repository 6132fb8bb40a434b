// src/util/log.rs

//! File-based tracing setup. The terminal belongs to the UI, so nothing is
//! ever logged to stdout or stderr while the chat is running.
use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE: &str = "property-chat.log";

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// `--debug`, or `DEBUG=true` in the environment.
pub fn debug_enabled(flag: bool) -> bool {
    *DEBUG_ENABLED.get_or_init(|| flag || std::env::var("DEBUG").unwrap_or_default() == "true")
}

/// `RUST_LOG` wins; otherwise `debug` or `info` for this crate and `warn` for the rest.
pub fn default_filter(debug: bool) -> EnvFilter {
    let fallback = if debug {
        "property_chat=debug,warn"
    } else {
        "property_chat=info,warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Creates `log_dir`, truncates the log file (start fresh each time) and
/// installs the global subscriber. Returns the log file path.
pub fn init_file_logging(log_dir: &Path, debug: bool) -> std::io::Result<PathBuf> {
    create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE);
    let file = File::create(&path)?;

    tracing_subscriber::registry()
        .with(default_filter(debug_enabled(debug)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();

    Ok(path)
}
