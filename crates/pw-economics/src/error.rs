//! Error types for repair costing.

use pw_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EconomicsError {
    #[error("Invalid geometry for component '{component}': {source}")]
    Geometry {
        component: String,
        #[source]
        source: CoreError,
    },
}

pub type EconomicsResult<T> = Result<T, EconomicsError>;
