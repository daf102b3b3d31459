//! pw-tables: coefficient tables and their resolution rules.
//!
//! [`Coefficients`] is the complete, immutable table set every engine call
//! reads from. It is built once (defaults or a YAML file) and passed by
//! reference. Editing at runtime goes through [`SharedCoefficients`], which
//! hands out consistent snapshots for batch evaluation.
//!
//! Unknown keys never fail: each table documents its neutral default.

pub mod calibration;
pub mod economics;
pub mod environment;
pub mod error;
pub mod materials;
pub mod protection;
pub mod shared;
pub mod special;

pub use calibration::{Calibration, PhRange};
pub use economics::{ComplexityFactors, EconomicTables, StateCoefficient, StateTable};
pub use environment::{EnvironmentTable, LocationFactors};
pub use error::{TablesError, TablesResult};
pub use materials::{MaterialGrade, MaterialRule, MaterialTable};
pub use protection::ProtectionTable;
pub use shared::SharedCoefficients;
pub use special::{SpecialEntry, SpecialTable};

use pw_core::{Location, Placement};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every table and calibration constant the engines consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Coefficients {
    pub calibration: Calibration,
    pub materials: MaterialTable,
    pub environment: EnvironmentTable,
    pub locations: LocationFactors,
    pub protection: ProtectionTable,
    pub special: SpecialTable,
    pub economics: EconomicTables,
}

/// Placement-derived multipliers applied to a corrosion rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiteFactors {
    pub location: f64,
    pub environment: f64,
    pub protection: f64,
    pub special: f64,
}

impl SiteFactors {
    pub fn product(&self) -> f64 {
        self.location * self.environment * self.protection * self.special
    }
}

impl Coefficients {
    /// Load a table set from YAML. Missing sections keep their defaults.
    pub fn load_yaml(path: &Path) -> TablesResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> TablesResult<Self> {
        let tables: Coefficients = serde_yaml::from_str(content)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn save_yaml(&self, path: &Path) -> TablesResult<()> {
        self.validate()?;
        std::fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    pub fn to_yaml_string(&self) -> TablesResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject tables that would make the engines produce non-physical output.
    pub fn validate(&self) -> TablesResult<()> {
        self.calibration.validate()?;
        self.materials.validate()?;
        self.environment.validate()?;
        self.locations.validate()?;
        self.protection.validate()?;
        self.special.validate()?;
        self.economics.validate()?;
        Ok(())
    }

    /// Material resistance factor of a grade.
    pub fn material_factor(&self, material: &str) -> f64 {
        self.materials.factor(material)
    }

    /// Location, environment, protection and special multipliers for one
    /// component in its placement.
    pub fn site_factors(
        &self,
        placement: &Placement,
        component_type: &str,
        component_id: &str,
        object_type: &str,
    ) -> SiteFactors {
        SiteFactors {
            location: self.locations.factor(placement.location),
            environment: self
                .environment
                .factor(placement.location, &placement.environment),
            protection: self.protection.factor(&placement.protection),
            special: self.special.resolve(component_type, component_id, object_type),
        }
    }

    /// Environment keys valid for a location (water bodies when submerged).
    pub fn environment_keys(&self, location: Location) -> Vec<&str> {
        self.environment.keys(location)
    }
}

pub(crate) fn check_factor(value: f64, what: &str) -> TablesResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TablesError::Invalid {
            what: format!("{what} = {value} (must be finite and non-negative)"),
        })
    }
}
