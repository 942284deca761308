pub mod config;
pub mod convert;
pub mod interactive;
pub mod units;
