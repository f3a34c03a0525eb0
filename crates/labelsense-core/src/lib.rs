//! LabelSense Core — shared types, error handling, configuration, reference data.

pub mod config;
pub mod error;
pub mod labels;
pub mod reference;

pub use config::{DataPaths, LabelSenseConfig};
pub use error::{Error, Result};
pub use labels::{Compatibility, DietLabel, ItemRecord, ProductReport};
