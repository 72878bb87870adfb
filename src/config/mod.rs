use std::ffi::OsString;

use clap::Parser;

use crate::utils::error::{Result, ScriptError};

/// Command line for the example script.
///
/// The script takes no input. Every argument, including `-h` and `--version`,
/// is captured here and ignored so it cannot change what is printed.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "devvit-ui-example")]
#[command(about = "Example helper script for devvit-mobile-ui-reconstruction")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

impl CliConfig {
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| ScriptError::ConfigError {
            message: e.to_string(),
        })
    }

    /// Parses the process arguments, falling back to an empty config on failure.
    pub fn from_env() -> Self {
        match Self::from_args(std::env::args_os()) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Ignoring unparsable arguments: {}", e);
                Self::default()
            }
        }
    }

    /// Number of captured arguments. A leading `--` is consumed by the parser
    /// and not counted.
    pub fn ignored_args(&self) -> usize {
        self.ignored.len()
    }
}
