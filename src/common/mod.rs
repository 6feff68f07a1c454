//! Общие типы и утилиты для sqltoken

pub mod config;
pub mod constants;
pub mod error;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use config::*;
pub use constants::*;
pub use error::{Error, Result, TokenizeError};
pub use utils::*;
