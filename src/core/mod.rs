pub mod cards;
pub mod classifier;
pub mod date_format;
pub mod engine;
pub mod people;
pub mod pipeline;
pub mod render;
pub mod years;

pub use crate::domain::model::{ClassifiedView, DayMap, ParsedDate, PersonRecord};
pub use crate::domain::ports::{ConfigProvider, InputSource, Pipeline, Storage};
pub use crate::utils::error::Result;
