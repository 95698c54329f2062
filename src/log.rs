// src/log.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing::Level;
use tracing_subscriber::fmt::time::uptime;

use crate::config::consts::{LOG_DIR, LOG_FILE};

static INIT: OnceLock<()> = OnceLock::new();

fn log_path() -> PathBuf {
    PathBuf::from(LOG_DIR).join(LOG_FILE)
}

fn open_log_file() -> io::Result<File> {
    fs::create_dir_all(LOG_DIR)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())
}

/// Install the global subscriber: `[uptime] LEVEL msg` lines appended to
/// `.store/debug.log`, or stderr when the file can't be opened.
/// Repeat calls are no-ops.
pub fn init() {
    INIT.get_or_init(|| {
        let builder = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_timer(uptime())
            .with_target(false)
            .with_ansi(false);

        // Another subscriber may already be set (tests); keep it.
        if tracing::dispatcher::has_been_set() {
            return;
        }

        let installed = match open_log_file() {
            Ok(file) => builder.with_writer(Mutex::new(file)).try_init(),
            Err(e) => {
                eprintln!("log: {} unavailable ({e}), logging to stderr", log_path().display());
                builder.with_writer(io::stderr).try_init()
            }
        };
        if let Err(e) = installed {
            eprintln!("log: subscriber not installed: {e}");
        }
    });
}
