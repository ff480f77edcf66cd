use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RcfigError {
    #[error("command-line arguments have been applied already")]
    ArgsAlreadyApplied,

    #[error(
        "no home directory found — set the environment variable {env_var} to point to your config file as a workaround"
    )]
    HomeNotFound { env_var: String },

    #[error("failed to open {} for reading and writing: {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to seek to the beginning of {}: {source}", path.display())]
    SeekFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to truncate {}: {source}", path.display())]
    TruncateFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unknown option '{name}' supplied on the command line")]
    UnknownOption { name: String },

    #[error("invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("failed to parse command-line arguments: {reason}")]
    InvalidArgs { reason: String },

    #[error("App name is required — call .app_name() on the builder")]
    AppNameRequired,
}
