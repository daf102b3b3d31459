//! pw-economics: repair cost estimation.
//!
//! Costs are derived from the condition of each component (its remaining
//! wall thickness) and the placement of its section. Components are costed
//! in [`component`], sections in [`section`] and whole fleets in [`fleet`].
//!
//! Every estimate is a pure function of its inputs and the borrowed
//! [`pw_tables::EconomicTables`].

pub mod component;
pub mod error;
pub mod fleet;
pub mod methods;
pub mod section;

pub use component::{RepairCostBreakdown, UNPROTECTED, estimate_component_cost};
pub use error::{EconomicsError, EconomicsResult};
pub use fleet::{FleetSummary, fleet_economic_summary, fleet_multiplier};
pub use methods::{RepairMethodInfo, repair_method_info};
pub use section::{
    SectionCost, SectionCostBreakdown, SectionRepairMethod, detailed_section_cost,
    estimate_section_cost,
};
