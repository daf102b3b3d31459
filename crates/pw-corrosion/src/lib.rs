//! pw-corrosion: internal corrosion of pipeline walls.
//!
//! Layers, bottom-up:
//! - [`ph`]: pH of the aqueous phase
//! - [`models`]: De Waard–Milliams and Norsok M-506 correlations
//! - [`wear`]: oil/gas orchestrators that derive inputs, pick a model and
//!   apply flow and site factors
//! - [`assess`]: remaining thickness and condition for components, sections
//!   and batches
//!
//! All functions are pure over a borrowed [`pw_tables::Coefficients`].
//!
//! # Example
//!
//! ```no_run
//! use pw_core::{Placement, SimpleSection};
//! use pw_corrosion::{FluidEnvironment, assess_simple};
//! use pw_tables::Coefficients;
//!
//! let section = SimpleSection {
//!     name: "Участок 1".into(),
//!     object_type: "pipe".into(),
//!     placement: Placement::default(),
//!     material: "09Г2С".into(),
//!     length_m: 100.0,
//!     diameter_mm: 500.0,
//!     thickness_mm: 10.0,
//!     remaining_mm: None,
//! };
//! let wall = assess_simple(&FluidEnvironment::default(), &section, 25.0, &Coefficients::default())
//!     .unwrap();
//! println!("{:.2} mm left, {}", wall.remaining_mm, wall.condition);
//! ```

pub mod assess;
pub mod error;
pub mod fluid;
pub mod models;
pub mod ph;
pub mod wear;

pub use assess::{
    ComponentAssessment, SectionAssessment, WallAssessment, assess_component, assess_section,
    assess_sections, assess_simple, project_years, remaining_thickness,
};
pub use error::{CorrosionError, CorrosionResult};
pub use fluid::{FluidEnvironment, GasFlow, OilFlow};
pub use models::{RateModel, rate_co2_h2s, rate_co2_only, rate_co2_only_with};
pub use ph::{estimate_ph, estimate_ph_within};
pub use wear::{
    Exposure, FlowFactors, RateBreakdown, WallLoss, corrosion_over_time, corrosion_over_time_gas,
    corrosion_over_time_oil,
};
