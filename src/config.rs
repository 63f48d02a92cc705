//! Runtime configuration
//!
//! The data file path comes from, in order: the `--file` flag, the
//! `TASKCMD_FILE` environment variable, then `tasks.json` in the working
//! directory.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "tasks.json";

// Environment variable names
pub const ENV_DATA_FILE: &str = "TASKCMD_FILE";
pub const ENV_LOG: &str = "TASKCMD_LOG";

const DEFAULT_LOG_FILTER: &str = "error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    /// Resolve configuration from an optional CLI override and the environment
    pub fn resolve(file_override: Option<PathBuf>) -> Self {
        Self::resolve_with(file_override, env::var_os(ENV_DATA_FILE).map(PathBuf::from))
    }

    fn resolve_with(file_override: Option<PathBuf>, from_env: Option<PathBuf>) -> Self {
        let data_file = file_override
            .or_else(|| from_env.filter(|p| !p.as_os_str().is_empty()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Self { data_file }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// Install the stderr log subscriber. Quiet unless `TASKCMD_LOG` asks otherwise.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(ENV_LOG)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
