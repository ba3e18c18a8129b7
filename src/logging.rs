// Primer logging setup
//
// `log` records from every crate go through one tracing-subscriber fmt
// subscriber. The filter comes from PRIMER_LOG (EnvFilter syntax).

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use miette::{miette, IntoDiagnostic, Result, WrapErr};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PRIMER_LOG";

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file; used by the interactive app
    File(PathBuf),
    Stderr,
    Off,
}

impl LogTarget {
    /// Stderr would draw over the terminal UI, so interactive sessions only
    /// log when a file is configured.
    pub fn choose(log_file: Option<PathBuf>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, false) => LogTarget::Stderr,
            (None, true) => LogTarget::Off,
        }
    }

    fn default_directive(&self) -> &'static str {
        match self {
            LogTarget::File(_) => "info",
            _ => "warn",
        }
    }
}

fn filter(target: &LogTarget) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(target.default_directive()))
}

pub fn init(target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(&target));
    let installed = match &target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|e| miette!("failed to install logger: {e}"))
}
