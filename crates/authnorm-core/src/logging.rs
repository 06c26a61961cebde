//! Logging init. Stdout carries command output, so events go to a file under
//! the XDG state dir, or to stderr when that file cannot be opened.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,authnorm=debug";

/// Where log events end up after [`init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

/// Writer over a cloned log file handle, degrading to stderr if cloning fails.
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file: `~/.local/state/authnorm/authnorm.log`. Creates the directory.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("authnorm")?;
    Ok(xdg_dirs.place_state_file("authnorm.log")?)
}

fn open_log_file() -> Result<(fs::File, PathBuf)> {
    let path = log_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    Ok((file, path))
}

/// Initialize structured logging, preferring the state-dir log file.
///
/// Falls back to stderr when the file cannot be opened; returns the sink used.
/// Fails only if a global subscriber is already installed.
pub fn init_logging() -> Result<LogSink> {
    let (writer, sink) = match open_log_file() {
        Ok((file, path)) => (BoxMakeWriter::new(FileMakeWriter(file)), LogSink::File(path)),
        Err(err) => {
            eprintln!("authnorm: logging to stderr ({err:#})");
            (BoxMakeWriter::new(io::stderr), LogSink::Stderr)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    if let LogSink::File(path) = &sink {
        tracing::info!("authnorm logging initialized at {}", path.display());
    }
    Ok(sink)
}
