use crate::config::Config;
use std::fs::File;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain mode: stderr is free.
    Stderr,
    /// Interactive mode: the screen is owned by the UI, so only `config.log_file`.
    FileOnly,
}

fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(config: &Config, target: LogTarget) -> io::Result<()> {
    match (&config.log_file, target) {
        (Some(path), _) => {
            let file = File::create(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(config))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        (None, LogTarget::Stderr) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(config))
                .with_writer(io::stderr)
                .try_init();
        }
        (None, LogTarget::FileOnly) => {}
    }
    Ok(())
}
