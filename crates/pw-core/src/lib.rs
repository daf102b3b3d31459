//! pw-core: stable foundation for pipewear.
//!
//! Contains:
//! - units (unit-suffixed aliases + named conversions)
//! - numeric (float guards for validated inputs)
//! - asset (components, sections and their placement)
//! - condition (remaining-thickness classifier)
//! - error (shared error types)

pub mod asset;
pub mod condition;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use asset::*;
pub use condition::{ColorTag, ConditionLevel, classify};
pub use error::CoreError;
pub use numeric::*;
