//! Table loading and validation errors.

use thiserror::Error;

pub type TablesResult<T> = Result<T, TablesError>;

#[derive(Error, Debug)]
pub enum TablesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid table entry: {what}")]
    Invalid { what: String },
}
