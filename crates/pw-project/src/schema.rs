//! Project schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    pub fluid: FluidDef,
    /// Service time the assessment projects forward.
    #[serde(default)]
    pub years: f64,
    #[serde(default)]
    pub sections: Vec<SectionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FluidDef {
    Oil(OilDef),
    Gas(GasDef),
}

impl Default for FluidDef {
    fn default() -> Self {
        Self::Oil(OilDef::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OilDef {
    pub temperature_c: f64,
    pub water_content_pct: f64,
    pub h2s_ppm: f64,
    pub viscosity_cst: f64,
    pub flow_rate_m3ph: f64,
}

impl Default for OilDef {
    fn default() -> Self {
        Self {
            temperature_c: 60.0,
            water_content_pct: 5.0,
            h2s_ppm: 50.0,
            viscosity_cst: 15.0,
            flow_rate_m3ph: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GasDef {
    pub temperature_c: f64,
    pub pressure_mpa: f64,
    pub co2_pct: f64,
    pub methane_pct: f64,
    pub dew_point_c: f64,
}

impl Default for GasDef {
    fn default() -> Self {
        Self {
            temperature_c: 20.0,
            pressure_mpa: 5.0,
            co2_pct: 2.0,
            methane_pct: 85.0,
            dew_point_c: -10.0,
        }
    }
}

/// Placement of a section. `location` holds the Russian label
/// (`"надземная"`, `"подземная"`, ...) and is checked by validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlacementDef {
    pub location: String,
    pub protection: String,
    pub environment: String,
}

impl Default for PlacementDef {
    fn default() -> Self {
        Self {
            location: "надземная".to_string(),
            protection: "без защиты".to_string(),
            environment: "Поволжье".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SectionDef {
    Simple(SimpleSectionDef),
    Complex(ComplexSectionDef),
}

impl SectionDef {
    pub fn name(&self) -> &str {
        match self {
            Self::Simple(s) => &s.name,
            Self::Complex(s) => &s.name,
        }
    }

    pub fn placement(&self) -> &PlacementDef {
        match self {
            Self::Simple(s) => &s.placement,
            Self::Complex(s) => &s.placement,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimpleSectionDef {
    pub name: String,
    #[serde(default = "default_object_type")]
    pub object_type: String,
    #[serde(default)]
    pub placement: PlacementDef,
    pub material: String,
    pub length_m: f64,
    pub diameter_mm: f64,
    pub thickness_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_mm: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplexSectionDef {
    pub name: String,
    pub object_type: String,
    #[serde(default)]
    pub placement: PlacementDef,
    #[serde(default)]
    pub components: Vec<ComponentDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub material: String,
    pub kind: ComponentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_mm: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ComponentKind {
    Pipe {
        length_m: f64,
        diameter_mm: f64,
        thickness_mm: f64,
    },
    Equipment {
        wall_thickness_mm: f64,
        #[serde(default = "default_count")]
        count: u32,
    },
    Fitting {
        fitting: FittingDef,
        diameter_mm: f64,
        wall_thickness_mm: f64,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FittingDef {
    Valve,
    Flange,
    Tee,
}

fn default_object_type() -> String {
    "pipe".to_string()
}

fn default_count() -> u32 {
    1
}
