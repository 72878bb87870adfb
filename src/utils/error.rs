use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl ScriptError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScriptError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                "Standard output was closed before all lines were written".to_string()
            }
            ScriptError::IoError(e) => format!("Could not write to standard output: {}", e),
            ScriptError::ConfigError { message } => format!("Invalid arguments: {}", message),
        }
    }

    /// Process exit status for this error. Success (0) is never returned.
    ///
    /// The binary only ever exits with the `IoError` code: `CliConfig::from_env`
    /// recovers from parse failures, so `ConfigError` surfaces through
    /// `CliConfig::from_args` callers alone.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScriptError::IoError(_) => 1,
            ScriptError::ConfigError { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
