pub mod commands;
pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod shell;
pub mod units;
pub mod validate;

use clap::ValueEnum;
use serde::Serialize;

pub use convert::{ConversionResult, Quantity, convert};
pub use error::TimeconvError;
pub use format::format_decimal;
pub use i18n::Language;
pub use shell::ConverterShell;
pub use units::Unit;
pub use validate::{InputState, InvalidReason, validate};

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
