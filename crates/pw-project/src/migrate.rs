//! Schema migration framework.

use crate::ProjectError;
use crate::schema::{Project, SectionDef};
use crate::templates::resolve_template_id;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut project: Project) -> Result<Project, ProjectError> {
    while project.version < LATEST_VERSION {
        let from = project.version;
        project = migrate_one_version(project)?;
        tracing::info!(from, to = project.version, name = %project.name, "migrated project");
    }
    Ok(project)
}

fn migrate_one_version(project: Project) -> Result<Project, ProjectError> {
    match project.version {
        0 => migrate_v0_to_v1(project),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files named complex objects by their Russian short names
/// (`НПС`, `ГРС`, ...). Version 1 uses template ids.
fn migrate_v0_to_v1(mut project: Project) -> Result<Project, ProjectError> {
    let fluid = project.fluid.kind();
    for section in &mut project.sections {
        if let SectionDef::Complex(s) = section {
            let id = resolve_template_id(fluid, &s.object_type);
            if id != s.object_type {
                tracing::debug!(section = %s.name, old = %s.object_type, new = id, "legacy object type");
                s.object_type = id.to_string();
            }
        }
    }
    project.version = 1;
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ComplexSectionDef, FluidDef, GasDef, PlacementDef};

    fn v0(object_type: &str) -> Project {
        Project {
            version: 0,
            name: "old".into(),
            fluid: FluidDef::Gas(GasDef::default()),
            years: 0.0,
            sections: vec![SectionDef::Complex(ComplexSectionDef {
                name: "a".into(),
                object_type: object_type.into(),
                placement: PlacementDef::default(),
                components: vec![],
            })],
        }
    }

    fn object_type(p: &Project) -> &str {
        match &p.sections[0] {
            SectionDef::Complex(s) => &s.object_type,
            SectionDef::Simple(s) => &s.object_type,
        }
    }

    #[test]
    fn legacy_names_become_template_ids() {
        let p = migrate_to_latest(v0("КС")).unwrap();
        assert_eq!(p.version, LATEST_VERSION);
        assert_eq!(object_type(&p), "compressor_station");
    }

    #[test]
    fn current_ids_are_kept() {
        let p = migrate_to_latest(v0("dryer")).unwrap();
        assert_eq!(object_type(&p), "dryer");
    }

    #[test]
    fn latest_is_untouched() {
        let mut p = v0("КС");
        p.version = LATEST_VERSION;
        let migrated = migrate_to_latest(p.clone()).unwrap();
        assert_eq!(migrated, p);
    }
}
