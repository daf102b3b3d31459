//! Asset model: components, sections and their placement context.
//!
//! Records carry no behavior beyond geometry accessors. Derived values
//! (remaining thickness) are computed by the engines and may be attached
//! back through [`Component::remaining_mm`] / [`SimpleSection::remaining_mm`].

use crate::condition::{ConditionLevel, classify, worst};
use crate::units::{Meters, Millimeters};
use std::fmt;

/// Diameter used to cost items that carry no pipe geometry.
pub const NOMINAL_DIAMETER_MM: Millimeters = 100.0;
/// Length used to cost items that carry no pipe geometry.
pub const NOMINAL_LENGTH_M: Meters = 1.0;
/// Thickness assumed when nothing is known about a wall.
pub const NOMINAL_THICKNESS_MM: Millimeters = 10.0;

/// How a section is laid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "надземная"))]
    AboveGround,
    #[cfg_attr(feature = "serde", serde(rename = "подземная"))]
    Buried,
    #[cfg_attr(feature = "serde", serde(rename = "подводная"))]
    Submerged,
    #[cfg_attr(feature = "serde", serde(rename = "в помещении"))]
    Indoor,
    #[cfg_attr(feature = "serde", serde(rename = "в агрессивной среде"))]
    Aggressive,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::AboveGround,
        Location::Buried,
        Location::Submerged,
        Location::Indoor,
        Location::Aggressive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AboveGround => "надземная",
            Self::Buried => "подземная",
            Self::Submerged => "подводная",
            Self::Indoor => "в помещении",
            Self::Aggressive => "в агрессивной среде",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|loc| loc.label() == label)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Placement context shared by every component of a section.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub location: Location,
    /// Protection scheme key, e.g. `"без защиты"`.
    pub protection: String,
    /// Region or water-body key, e.g. `"Поволжье"`.
    pub environment: String,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            location: Location::AboveGround,
            protection: "без защиты".to_string(),
            environment: "Поволжье".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FittingKind {
    Valve,
    Flange,
    Tee,
}

impl FittingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valve => "valve",
            Self::Flange => "flange",
            Self::Tee => "tee",
        }
    }
}

/// Geometry of a component; the variant decides which fields exist.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentShape {
    Pipe {
        length_m: Meters,
        diameter_mm: Millimeters,
        thickness_mm: Millimeters,
    },
    Equipment {
        wall_thickness_mm: Millimeters,
        count: u32,
    },
    Fitting {
        kind: FittingKind,
        diameter_mm: Millimeters,
        wall_thickness_mm: Millimeters,
    },
}

/// One physical item of a section.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: String,
    pub name: String,
    /// Material grade key, e.g. `"09Г2С"`.
    pub material: String,
    pub shape: ComponentShape,
    /// Remaining wall thickness from the last corrosion assessment.
    pub remaining_mm: Option<Millimeters>,
}

impl Component {
    pub fn pipe(
        id: impl Into<String>,
        material: impl Into<String>,
        length_m: Meters,
        diameter_mm: Millimeters,
        thickness_mm: Millimeters,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            material: material.into(),
            shape: ComponentShape::Pipe {
                length_m,
                diameter_mm,
                thickness_mm,
            },
            remaining_mm: None,
        }
    }

    pub fn equipment(
        id: impl Into<String>,
        material: impl Into<String>,
        wall_thickness_mm: Millimeters,
        count: u32,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            material: material.into(),
            shape: ComponentShape::Equipment {
                wall_thickness_mm,
                count,
            },
            remaining_mm: None,
        }
    }

    pub fn fitting(
        id: impl Into<String>,
        material: impl Into<String>,
        kind: FittingKind,
        diameter_mm: Millimeters,
        wall_thickness_mm: Millimeters,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            material: material.into(),
            shape: ComponentShape::Fitting {
                kind,
                diameter_mm,
                wall_thickness_mm,
            },
            remaining_mm: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_remaining(mut self, remaining_mm: Millimeters) -> Self {
        self.remaining_mm = Some(remaining_mm);
        self
    }

    /// Type key used by coefficient fallbacks (`pipe`, `equipment`, `valve`, ...).
    pub fn kind(&self) -> &'static str {
        match &self.shape {
            ComponentShape::Pipe { .. } => "pipe",
            ComponentShape::Equipment { .. } => "equipment",
            ComponentShape::Fitting { kind, .. } => kind.as_str(),
        }
    }

    pub fn is_pipe(&self) -> bool {
        matches!(self.shape, ComponentShape::Pipe { .. })
    }

    /// As-built wall thickness.
    pub fn thickness_mm(&self) -> Millimeters {
        match &self.shape {
            ComponentShape::Pipe { thickness_mm, .. } => *thickness_mm,
            ComponentShape::Equipment {
                wall_thickness_mm, ..
            }
            | ComponentShape::Fitting {
                wall_thickness_mm, ..
            } => *wall_thickness_mm,
        }
    }

    /// Diameter used by the rate and cost models; 0 for equipment bodies.
    pub fn diameter_mm(&self) -> Millimeters {
        match &self.shape {
            ComponentShape::Pipe { diameter_mm, .. }
            | ComponentShape::Fitting { diameter_mm, .. } => *diameter_mm,
            ComponentShape::Equipment { .. } => 0.0,
        }
    }

    /// Diameter for costing; equipment falls back to [`NOMINAL_DIAMETER_MM`].
    pub fn cost_diameter_mm(&self) -> Millimeters {
        match &self.shape {
            ComponentShape::Equipment { .. } => NOMINAL_DIAMETER_MM,
            _ => self.diameter_mm(),
        }
    }

    /// Run length for costing; non-pipe items count as [`NOMINAL_LENGTH_M`].
    pub fn cost_length_m(&self) -> Meters {
        match &self.shape {
            ComponentShape::Pipe { length_m, .. } => *length_m,
            _ => NOMINAL_LENGTH_M,
        }
    }

    /// Number of physical units this record stands for.
    pub fn unit_count(&self) -> u32 {
        match &self.shape {
            ComponentShape::Equipment { count, .. } => *count,
            _ => 1,
        }
    }

    /// Remaining thickness if assessed, otherwise the as-built thickness.
    pub fn effective_remaining_mm(&self) -> Millimeters {
        self.remaining_mm.unwrap_or_else(|| self.thickness_mm())
    }

    pub fn condition(&self) -> ConditionLevel {
        classify(self.effective_remaining_mm()).0
    }
}

/// A single homogeneous pipe run described directly on the section.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleSection {
    pub name: String,
    pub object_type: String,
    pub placement: Placement,
    pub material: String,
    pub length_m: Meters,
    pub diameter_mm: Millimeters,
    pub thickness_mm: Millimeters,
    pub remaining_mm: Option<Millimeters>,
}

impl SimpleSection {
    /// The implicit pipe component (empty id) this section stands for.
    pub fn as_component(&self) -> Component {
        Component {
            id: String::new(),
            name: self.name.clone(),
            material: self.material.clone(),
            shape: ComponentShape::Pipe {
                length_m: self.length_m,
                diameter_mm: self.diameter_mm,
                thickness_mm: self.thickness_mm,
            },
            remaining_mm: self.remaining_mm,
        }
    }
}

/// A segment modeled as several heterogeneous components.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSection {
    pub name: String,
    pub object_type: String,
    pub placement: Placement,
    pub components: Vec<Component>,
}

impl ComplexSection {
    /// Total pipe run length of the section.
    pub fn total_length_m(&self) -> Meters {
        self.components
            .iter()
            .filter_map(|c| match &c.shape {
                ComponentShape::Pipe { length_m, .. } => Some(*length_m),
                _ => None,
            })
            .sum()
    }

    /// Physical unit count (equipment counts multiply).
    pub fn total_units(&self) -> u32 {
        self.components.iter().map(Component::unit_count).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Simple(SimpleSection),
    Complex(ComplexSection),
}

impl Section {
    pub fn name(&self) -> &str {
        match self {
            Self::Simple(s) => &s.name,
            Self::Complex(s) => &s.name,
        }
    }

    pub fn object_type(&self) -> &str {
        match self {
            Self::Simple(s) => &s.object_type,
            Self::Complex(s) => &s.object_type,
        }
    }

    pub fn placement(&self) -> &Placement {
        match self {
            Self::Simple(s) => &s.placement,
            Self::Complex(s) => &s.placement,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(_))
    }

    pub fn component_count(&self) -> usize {
        match self {
            Self::Simple(_) => 1,
            Self::Complex(s) => s.components.len(),
        }
    }

    /// Worst condition over the section; `None` for a complex section with
    /// no components.
    pub fn worst_condition(&self) -> Option<ConditionLevel> {
        match self {
            Self::Simple(s) => Some(s.as_component().condition()),
            Self::Complex(s) => worst(s.components.iter().map(Component::condition)),
        }
    }
}
