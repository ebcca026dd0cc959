//! Logger setup.
//!
//! The terminal is in raw/alternate-screen mode while the game runs, so log
//! records go to a file in the game directory instead of stderr. The filter
//! comes from `RUST_LOG` and defaults to `warn`.

use super::persistence::save_path;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

pub const LOG_FILENAME: &str = "game.log";

/// Install the global logger. Returns the log file path.
pub fn init_logging() -> io::Result<PathBuf> {
    let path = save_path(LOG_FILENAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    Ok(path)
}
