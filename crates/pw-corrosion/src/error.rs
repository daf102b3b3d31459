//! Error types for corrosion calculations.

use pw_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrosionError {
    #[error("Invalid input: {what} = {value}")]
    Validation { what: &'static str, value: f64 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type CorrosionResult<T> = Result<T, CorrosionError>;
