//! File logging.
//!
//! The terminal is owned by the game screen, so log records go to a file
//! instead of stderr. `RUST_LOG` filters as usual (default `info`).

use env_logger::{Env, Target, WriteStyle};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

/// Install the global logger, appending to `log_path`.
pub fn init(log_path: &Path) -> io::Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
