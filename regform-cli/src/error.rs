use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("no cache directory available for the log file; pass --log-file")]
    NoLogDir,
    #[error(transparent)]
    Setup(#[from] regform::SetupError),
}
