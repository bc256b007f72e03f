pub mod commands;
pub mod config;
pub mod error;
pub mod picker;

pub use error::{PickerError, Result};
pub use picker::{DurationPicker, ObserverId, PickerObserver};

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
