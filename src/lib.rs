pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::ExampleScript;
pub use core::runner::ScriptRunner;
pub use domain::{model::RunSummary, ports::Script};
pub use utils::error::{Result, ScriptError};
