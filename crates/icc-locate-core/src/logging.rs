//! Logging setup. The CLI prefers a log file in the XDG state dir and drops
//! to stderr when that file cannot be opened or when asked to.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,icc_locate_core=debug,icc_locate=debug";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// `~/.local/state/icc-locate/icc-locate.log`.
    pub fn state_file() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("icc-locate")?;
        Ok(LogTarget::File(xdg_dirs.get_state_home().join("icc-locate.log")))
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Opens `path` for appending, creating parent directories.
fn open_append(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Installs the global subscriber for `target`.
pub fn init(target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false);
    let installed = match target {
        LogTarget::File(path) => builder.with_writer(Mutex::new(open_append(path)?)).try_init(),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;

    if let LogTarget::File(path) = target {
        tracing::info!("icc-locate logging to {}", path.display());
    }
    Ok(())
}

/// Logs to the state-dir file unless `stderr` is set, falling back to stderr
/// if the file is unusable. Returns the target actually installed.
pub fn init_with_fallback(stderr: bool) -> LogTarget {
    if !stderr {
        if let Ok(target) = LogTarget::state_file() {
            if init(&target).is_ok() {
                return target;
            }
        }
    }
    // A second install only fails if one is already in place.
    let _ = init(&LogTarget::Stderr);
    LogTarget::Stderr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn open_append_creates_parents_and_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/state/icc-locate.log");
        writeln!(open_append(&path).unwrap(), "first").unwrap();
        writeln!(open_append(&path).unwrap(), "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_append_reports_unusable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let err = open_append(&blocker.join("icc-locate.log")).unwrap_err();
        assert!(err.to_string().contains("create log dir"), "{err}");
    }

    #[test]
    fn state_file_is_named_after_crate() {
        if let Ok(LogTarget::File(path)) = LogTarget::state_file() {
            assert_eq!(path.file_name().unwrap(), "icc-locate.log");
        }
    }
}
