pub mod cli;
pub mod commands;
pub mod config;
pub mod date;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod item;
pub mod number;
pub mod output;
pub mod stats;

pub use error::{ChartError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
