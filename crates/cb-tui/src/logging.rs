//! Tracing subscriber setup shared by the binaries.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "CB_LOG";

/// Default filter for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

/// Log to stderr.
pub fn init_stderr(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to a file, or nowhere when `path` is `None`.
///
/// The TUI owns the terminal, so it never logs to stderr.
pub fn init_for_tui(verbosity: u8, path: Option<&Path>) -> Result<(), String> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).map_err(|e| format!("cannot open {}: {e}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(7), "trace");
    }

    #[test]
    fn tui_logging_without_file_is_noop() {
        assert!(init_for_tui(0, None).is_ok());
    }

    #[test]
    fn tui_logging_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cb.log");
        assert!(init_for_tui(1, Some(&path)).is_ok());
        assert!(path.exists());
    }
}
