//! Logging setup
//!
//! Events go to stderr so they never mix with the rendered file on stdout.
//! `RUST_LOG` takes precedence over the level given on the command line.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log verbosity selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Install the global subscriber.
///
/// With `log_file` events are appended to that file through a non-blocking
/// writer; the returned guard must be held until exit to flush it.
pub fn init(level: LogLevel, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.as_tracing_level().into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let filename = path.file_name().unwrap_or("gobump.log".as_ref());
            let file_appender = tracing_appender::rolling::never(parent, filename);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
            Ok(None)
        }
    }
}
