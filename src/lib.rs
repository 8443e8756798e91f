pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::{build_service, session::SessionStore, storage::LocalStorage};
pub use config::TomlConfig;
pub use crate::core::analyzer::Analyzer;
pub use crate::core::calendar::{calculate_chart, chart_for};
pub use utils::error::{BaziError, Result};
