//! Conversion from project definitions to the engine's asset model.

use crate::schema::{
    ComplexSectionDef, ComponentDef, ComponentKind, FittingDef, FluidDef, PlacementDef, Project,
    SectionDef, SimpleSectionDef,
};
use crate::templates::FluidKind;
use crate::validate::ValidationError;
use crate::{ProjectError, ProjectResult};
use pw_core::{
    ComplexSection, Component, ComponentShape, FittingKind, Location, Placement, Section,
    SimpleSection,
};
use pw_corrosion::{FluidEnvironment, GasFlow, OilFlow};

impl FluidDef {
    pub fn kind(&self) -> FluidKind {
        match self {
            Self::Oil(_) => FluidKind::Oil,
            Self::Gas(_) => FluidKind::Gas,
        }
    }

    /// Fluid parameters for the corrosion engine, range-checked.
    pub fn to_environment(&self) -> ProjectResult<FluidEnvironment> {
        let fluid = match self {
            Self::Oil(o) => FluidEnvironment::Oil(OilFlow {
                temperature_c: o.temperature_c,
                water_content_pct: o.water_content_pct,
                h2s_ppm: o.h2s_ppm,
                viscosity_cst: o.viscosity_cst,
                flow_rate_m3ph: o.flow_rate_m3ph,
            }),
            Self::Gas(g) => FluidEnvironment::Gas(GasFlow {
                temperature_c: g.temperature_c,
                pressure_mpa: g.pressure_mpa,
                co2_pct: g.co2_pct,
                methane_pct: g.methane_pct,
                dew_point_c: g.dew_point_c,
            }),
        };
        fluid.validate()?;
        Ok(fluid)
    }
}

impl From<FittingDef> for FittingKind {
    fn from(def: FittingDef) -> Self {
        match def {
            FittingDef::Valve => FittingKind::Valve,
            FittingDef::Flange => FittingKind::Flange,
            FittingDef::Tee => FittingKind::Tee,
        }
    }
}

impl From<FittingKind> for FittingDef {
    fn from(kind: FittingKind) -> Self {
        match kind {
            FittingKind::Valve => FittingDef::Valve,
            FittingKind::Flange => FittingDef::Flange,
            FittingKind::Tee => FittingDef::Tee,
        }
    }
}

fn placement(section: &str, def: PlacementDef) -> ProjectResult<Placement> {
    let location = Location::from_label(&def.location).ok_or_else(|| {
        ValidationError::UnknownLocation {
            section: section.to_string(),
            value: def.location.clone(),
        }
    })?;
    Ok(Placement {
        location,
        protection: def.protection,
        environment: def.environment,
    })
}

fn component(def: ComponentDef) -> Component {
    let shape = match def.kind {
        ComponentKind::Pipe {
            length_m,
            diameter_mm,
            thickness_mm,
        } => ComponentShape::Pipe {
            length_m,
            diameter_mm,
            thickness_mm,
        },
        ComponentKind::Equipment {
            wall_thickness_mm,
            count,
        } => ComponentShape::Equipment {
            wall_thickness_mm,
            count,
        },
        ComponentKind::Fitting {
            fitting,
            diameter_mm,
            wall_thickness_mm,
        } => ComponentShape::Fitting {
            kind: fitting.into(),
            diameter_mm,
            wall_thickness_mm,
        },
    };
    Component {
        name: if def.name.is_empty() {
            def.id.clone()
        } else {
            def.name
        },
        id: def.id,
        material: def.material,
        shape,
        remaining_mm: def.remaining_mm,
    }
}

impl SectionDef {
    pub fn into_section(self) -> ProjectResult<Section> {
        Ok(match self {
            SectionDef::Simple(s) => Section::Simple(SimpleSection {
                placement: placement(&s.name, s.placement)?,
                name: s.name,
                object_type: s.object_type,
                material: s.material,
                length_m: s.length_m,
                diameter_mm: s.diameter_mm,
                thickness_mm: s.thickness_mm,
                remaining_mm: s.remaining_mm,
            }),
            SectionDef::Complex(s) => Section::Complex(ComplexSection {
                placement: placement(&s.name, s.placement)?,
                name: s.name,
                object_type: s.object_type,
                components: s.components.into_iter().map(component).collect(),
            }),
        })
    }
}

/// Project definition of an asset section, carrying any attached
/// remaining thickness.
impl From<&Section> for SectionDef {
    fn from(section: &Section) -> Self {
        let placement = |p: &Placement| PlacementDef {
            location: p.location.label().to_string(),
            protection: p.protection.clone(),
            environment: p.environment.clone(),
        };
        match section {
            Section::Simple(s) => SectionDef::Simple(SimpleSectionDef {
                name: s.name.clone(),
                object_type: s.object_type.clone(),
                placement: placement(&s.placement),
                material: s.material.clone(),
                length_m: s.length_m,
                diameter_mm: s.diameter_mm,
                thickness_mm: s.thickness_mm,
                remaining_mm: s.remaining_mm,
            }),
            Section::Complex(s) => SectionDef::Complex(ComplexSectionDef {
                name: s.name.clone(),
                object_type: s.object_type.clone(),
                placement: placement(&s.placement),
                components: s.components.iter().map(ComponentDef::from).collect(),
            }),
        }
    }
}

impl From<&Component> for ComponentDef {
    fn from(c: &Component) -> Self {
        let kind = match &c.shape {
            ComponentShape::Pipe {
                length_m,
                diameter_mm,
                thickness_mm,
            } => ComponentKind::Pipe {
                length_m: *length_m,
                diameter_mm: *diameter_mm,
                thickness_mm: *thickness_mm,
            },
            ComponentShape::Equipment {
                wall_thickness_mm,
                count,
            } => ComponentKind::Equipment {
                wall_thickness_mm: *wall_thickness_mm,
                count: *count,
            },
            ComponentShape::Fitting {
                kind,
                diameter_mm,
                wall_thickness_mm,
            } => ComponentKind::Fitting {
                fitting: (*kind).into(),
                diameter_mm: *diameter_mm,
                wall_thickness_mm: *wall_thickness_mm,
            },
        };
        ComponentDef {
            id: c.id.clone(),
            name: if c.name == c.id {
                String::new()
            } else {
                c.name.clone()
            },
            material: c.material.clone(),
            kind,
            remaining_mm: c.remaining_mm,
        }
    }
}

impl Project {
    /// Convert every section definition into the asset model.
    pub fn into_sections(self) -> ProjectResult<Vec<Section>> {
        self.sections
            .into_iter()
            .map(SectionDef::into_section)
            .collect()
    }

    /// Replace the section definitions with (possibly assessed) sections.
    pub fn set_sections(&mut self, sections: &[Section]) {
        self.sections = sections.iter().map(SectionDef::from).collect();
    }
}
