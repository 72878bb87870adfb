pub mod runner;

pub use crate::domain::model::RunSummary;
pub use crate::domain::ports::Script;
pub use crate::utils::error::Result;
