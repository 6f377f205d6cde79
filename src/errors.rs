use std::path::PathBuf;
use thiserror::Error;
use tonyear_core::TonYearError;

/// Errors raised while configuring, running or saving an accounting run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Accounting(#[from] TonYearError),
    #[error("Could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid configuration in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Missing required setting '{0}'. Set it in the config file or on the command line")]
    MissingSetting(&'static str),
}

/// Convenience type for `Result<T, RunError>`.
pub type RunResult<T> = Result<T, RunError>;
