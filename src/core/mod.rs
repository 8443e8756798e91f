pub mod analyzer;
pub mod calendar;
pub mod narrative;
pub mod prompt;
pub mod render;
pub mod sections;

pub use crate::domain::model::{AnalysisReport, Chart, UserProfile};
pub use crate::domain::ports::{ConfigProvider, NarrativeService, Storage};
pub use crate::utils::error::Result;
