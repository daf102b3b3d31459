//! Project validation logic.

use crate::schema::{
    ComplexSectionDef, ComponentDef, ComponentKind, FluidDef, PlacementDef, Project,
    SectionDef, SimpleSectionDef,
};
use pw_core::Location;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Unknown location '{value}' in section '{section}'")]
    UnknownLocation { section: String, value: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    non_negative("years".to_string(), project.years)?;
    validate_fluid(&project.fluid)?;

    let mut names = HashSet::new();
    for section in &project.sections {
        if !names.insert(section.name()) {
            return Err(ValidationError::DuplicateId {
                id: section.name().to_string(),
                context: "sections".to_string(),
            });
        }
        validate_placement(section.name(), section.placement())?;
        match section {
            SectionDef::Simple(s) => validate_simple(s)?,
            SectionDef::Complex(s) => validate_complex(s)?,
        }
    }

    Ok(())
}

fn validate_fluid(fluid: &FluidDef) -> Result<(), ValidationError> {
    match fluid {
        FluidDef::Oil(oil) => {
            finite("fluid.temperature_c".to_string(), oil.temperature_c)?;
            percent("fluid.water_content_pct", oil.water_content_pct)?;
            non_negative("fluid.h2s_ppm".to_string(), oil.h2s_ppm)?;
            non_negative("fluid.viscosity_cst".to_string(), oil.viscosity_cst)?;
            non_negative("fluid.flow_rate_m3ph".to_string(), oil.flow_rate_m3ph)?;
        }
        FluidDef::Gas(gas) => {
            finite("fluid.temperature_c".to_string(), gas.temperature_c)?;
            non_negative("fluid.pressure_mpa".to_string(), gas.pressure_mpa)?;
            percent("fluid.co2_pct", gas.co2_pct)?;
            percent("fluid.methane_pct", gas.methane_pct)?;
            finite("fluid.dew_point_c".to_string(), gas.dew_point_c)?;
        }
    }
    Ok(())
}

fn validate_placement(section: &str, placement: &PlacementDef) -> Result<(), ValidationError> {
    if Location::from_label(&placement.location).is_none() {
        return Err(ValidationError::UnknownLocation {
            section: section.to_string(),
            value: placement.location.clone(),
        });
    }
    Ok(())
}

fn validate_simple(section: &SimpleSectionDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("section '{}' {}", section.name, name);
    positive(field("length_m"), section.length_m)?;
    positive(field("diameter_mm"), section.diameter_mm)?;
    positive(field("thickness_mm"), section.thickness_mm)?;
    if let Some(remaining) = section.remaining_mm {
        non_negative(field("remaining_mm"), remaining)?;
    }
    Ok(())
}

fn validate_complex(section: &ComplexSectionDef) -> Result<(), ValidationError> {
    let mut ids = HashSet::new();
    for component in &section.components {
        if !ids.insert(&component.id) {
            return Err(ValidationError::DuplicateId {
                id: component.id.clone(),
                context: format!("section '{}' components", section.name),
            });
        }
        validate_component(component, &section.name)?;
    }
    Ok(())
}

fn validate_component(component: &ComponentDef, section: &str) -> Result<(), ValidationError> {
    let field = |name: &str| format!("component '{}' in section '{}' {}", component.id, section, name);
    match &component.kind {
        ComponentKind::Pipe {
            length_m,
            diameter_mm,
            thickness_mm,
        } => {
            positive(field("length_m"), *length_m)?;
            positive(field("diameter_mm"), *diameter_mm)?;
            positive(field("thickness_mm"), *thickness_mm)?;
        }
        ComponentKind::Equipment {
            wall_thickness_mm,
            count,
        } => {
            positive(field("wall_thickness_mm"), *wall_thickness_mm)?;
            if *count == 0 {
                return Err(ValidationError::InvalidValue {
                    field: field("count"),
                    value: count.to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        ComponentKind::Fitting {
            diameter_mm,
            wall_thickness_mm,
            ..
        } => {
            positive(field("diameter_mm"), *diameter_mm)?;
            positive(field("wall_thickness_mm"), *wall_thickness_mm)?;
        }
    }
    if let Some(remaining) = component.remaining_mm {
        non_negative(field("remaining_mm"), remaining)?;
    }
    Ok(())
}

fn finite(field: String, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field,
            value: value.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    Ok(())
}

fn positive(field: String, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field,
            value: value.to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

fn non_negative(field: String, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field,
            value: value.to_string(),
            reason: "must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn percent(field: &str, value: f64) -> Result<(), ValidationError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be within 0..=100 %".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FittingDef, GasDef, OilDef};

    fn project(sections: Vec<SectionDef>) -> Project {
        Project {
            version: crate::migrate::LATEST_VERSION,
            name: "test".into(),
            fluid: FluidDef::default(),
            years: 10.0,
            sections,
        }
    }

    fn pipe_section(name: &str) -> SectionDef {
        SectionDef::Simple(SimpleSectionDef {
            name: name.into(),
            object_type: "pipe".into(),
            placement: PlacementDef::default(),
            material: "Ст20".into(),
            length_m: 1000.0,
            diameter_mm: 720.0,
            thickness_mm: 10.0,
            remaining_mm: None,
        })
    }

    fn station(components: Vec<ComponentDef>) -> SectionDef {
        SectionDef::Complex(ComplexSectionDef {
            name: "НПС".into(),
            object_type: "pump_station".into(),
            placement: PlacementDef::default(),
            components,
        })
    }

    fn pumps(id: &str) -> ComponentDef {
        ComponentDef {
            id: id.into(),
            name: String::new(),
            material: "09Г2С".into(),
            kind: ComponentKind::Equipment {
                wall_thickness_mm: 15.0,
                count: 3,
            },
            remaining_mm: None,
        }
    }

    #[test]
    fn accepts_valid_project() {
        let p = project(vec![pipe_section("a"), station(vec![pumps("pumps")])]);
        validate_project(&p).unwrap();
    }

    #[test]
    fn duplicate_section_names() {
        let p = project(vec![pipe_section("a"), pipe_section("a")]);
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::DuplicateId { ref context, .. }) if context == "sections"
        ));
    }

    #[test]
    fn duplicate_component_ids() {
        let p = project(vec![station(vec![pumps("pumps"), pumps("pumps")])]);
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::DuplicateId { ref id, .. }) if id == "pumps"
        ));
    }

    #[test]
    fn unknown_location() {
        let mut section = pipe_section("a");
        if let SectionDef::Simple(s) = &mut section {
            s.placement.location = "на орбите".into();
        }
        assert!(matches!(
            validate_project(&project(vec![section])),
            Err(ValidationError::UnknownLocation { .. })
        ));
    }

    #[test]
    fn non_positive_geometry() {
        let fitting = ComponentDef {
            id: "valve".into(),
            name: String::new(),
            material: "Ст20".into(),
            kind: ComponentKind::Fitting {
                fitting: FittingDef::Valve,
                diameter_mm: 0.0,
                wall_thickness_mm: 8.0,
            },
            remaining_mm: None,
        };
        assert!(validate_project(&project(vec![station(vec![fitting])])).is_err());

        let mut section = pipe_section("a");
        if let SectionDef::Simple(s) = &mut section {
            s.thickness_mm = -2.0;
        }
        assert!(validate_project(&project(vec![section])).is_err());
    }

    #[test]
    fn zero_equipment_count() {
        let mut c = pumps("pumps");
        c.kind = ComponentKind::Equipment {
            wall_thickness_mm: 12.0,
            count: 0,
        };
        assert!(validate_project(&project(vec![station(vec![c])])).is_err());
    }

    #[test]
    fn negative_years_and_bad_percentages() {
        let mut p = project(vec![]);
        p.years = -1.0;
        assert!(validate_project(&p).is_err());

        let mut p = project(vec![]);
        p.fluid = FluidDef::Oil(OilDef {
            water_content_pct: 101.0,
            ..OilDef::default()
        });
        assert!(validate_project(&p).is_err());

        p.fluid = FluidDef::Gas(GasDef {
            methane_pct: -5.0,
            ..GasDef::default()
        });
        assert!(validate_project(&p).is_err());
    }

    #[test]
    fn future_version_rejected() {
        let mut p = project(vec![]);
        p.version = crate::migrate::LATEST_VERSION + 1;
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }
}
