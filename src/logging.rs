use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file for terminal UI mode.
pub const LOG_PATH_ENV: &str = "GHPROFILE_LOG";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Terminal UI owns the screen: log to a file, or not at all.
    File,
    /// Plain output on stdout: log to stderr.
    Stderr,
}

/// Initialize tracing for the given output mode.
///
/// `RUST_LOG` controls the filter in both modes. In [`LogTarget::File`] mode
/// logging stays off unless `GHPROFILE_LOG` is set; each run then writes its
/// own file beside that path, see [`log_file_path`].
pub fn init_tracing(target: LogTarget) {
    match target {
        LogTarget::Stderr => init_stderr(),
        LogTarget::File => init_file(),
    }
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or("warn"))
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339())
        .try_init();
}

fn init_file() {
    let Some(base) = std::env::var_os(LOG_PATH_ENV).filter(|p| !p.is_empty()) else {
        return;
    };
    let path = log_file_path(
        Path::new(&base),
        Local::now().naive_local(),
        std::process::id(),
    );

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        let _ = fs::create_dir_all(dir);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            // The UI has not taken the screen yet, so this still shows.
            eprintln!("Warning: cannot open log file {}: {}", path.display(), err);
            return;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_or("info"))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "Session started");
    }
}

/// Per-run log file for `base`.
///
/// The start time and pid go between stem and extension, so
/// `/tmp/ghprofile.log` becomes `/tmp/ghprofile-20240102-030405-42.log`.
/// A base without an extension gets `.log`.
pub fn log_file_path(base: &Path, started: NaiveDateTime, pid: u32) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ghprofile".to_string());
    let extension = base
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "log".to_string());
    base.with_file_name(format!(
        "{}-{}-{}.{}",
        stem,
        started.format("%Y%m%d-%H%M%S"),
        pid,
        extension
    ))
}
