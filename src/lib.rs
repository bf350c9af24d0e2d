pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::classifier::{classify, display_format, initials, parse_date, weekday_of, youngest_first};
pub use crate::core::{engine::BirthdayEngine, pipeline::BirthdayPipeline};
pub use crate::domain::model::{ClassifiedView, DayMap, ParsedDate, PersonRecord};
pub use crate::utils::error::{BirthdayError, Result};
