//! Tracing setup for the `proxy-uri` binary.
//!
//! Events go to `proxy-uri.log` in the XDG state directory. Rejected proxy
//! URIs are logged at debug level, which the default filter keeps for this
//! crate. `RUST_LOG` overrides the filter.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,proxy_uri=debug";
const LOG_FILE_NAME: &str = "proxy-uri.log";

/// Per-event log sink. Falls to stderr when the log file handle cannot be
/// duplicated for the event.
enum LogSink {
    File(std::fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(std::fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Open (append) the proxy-uri log file inside `state_dir`, creating the
/// directory as needed.
fn open_log_file(state_dir: &Path) -> Result<(PathBuf, fs::File)> {
    fs::create_dir_all(state_dir)?;
    let path = state_dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Install the global subscriber writing to `~/.local/state/proxy-uri/proxy-uri.log`.
///
/// Errors when the state directory or log file is unusable, or when a
/// subscriber is already installed. The binary then uses [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("proxy-uri")?;
    let (log_path, file) = open_log_file(&xdg_dirs.get_state_home().join("proxy-uri"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::info!("proxy-uri logging to {}", log_path.display());

    Ok(())
}

/// Install a stderr-only subscriber when the log file is unavailable.
pub fn init_logging_stderr() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
    // Only fails when a global subscriber already exists; events keep going there.
    if let Err(e) = installed {
        tracing::debug!("stderr logging not installed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_log_file_creates_dir_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = dir.path().join("nested").join("proxy-uri");

        let (path, mut file) = open_log_file(&state_dir).unwrap();
        assert_eq!(path, state_dir.join("proxy-uri.log"));
        writeln!(file, "first").unwrap();

        let (_, mut file) = open_log_file(&state_dir).unwrap();
        writeln!(file, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn stderr_fallback_tolerates_existing_subscriber() {
        init_logging_stderr();
        init_logging_stderr();
    }
}
