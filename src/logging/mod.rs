// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::core::config::Config;

/// Install the global logger.
///
/// Logs go to stderr unless `LOG_FILE` is set, in which case they are
/// appended to that file. `RUST_LOG` still refines per-module levels.
pub fn init(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if let Some(path) = &config.log_file {
        ensure_parent_dir(path)?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A second init (tests, embedding) keeps the first logger.
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("passforge.log");

        ensure_parent_dir(&path).unwrap();

        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn bare_file_name_needs_no_directory() {
        assert!(ensure_parent_dir(Path::new("passforge.log")).is_ok());
    }
}
