use pw_core::Section;
use pw_project::schema::*;
use pw_project::templates::FluidKind;
use pw_project::{
    LATEST_VERSION, ProjectError, load, load_json, load_yaml, save_json, save_yaml,
    section_from_template, validate_project,
};

fn sample_project() -> Project {
    let station = section_from_template(
        FluidKind::Oil,
        "separator",
        "Сепаратор-1",
        PlacementDef {
            location: "подземная".to_string(),
            protection: "битум. изоляц.".to_string(),
            environment: "Урал".to_string(),
        },
        false,
    )
    .unwrap();

    Project {
        version: LATEST_VERSION,
        name: "Нефтепровод Восток".to_string(),
        fluid: FluidDef::Oil(OilDef::default()),
        years: 25.0,
        sections: vec![
            SectionDef::Simple(SimpleSectionDef {
                name: "Участок 1".to_string(),
                object_type: "pipe".to_string(),
                placement: PlacementDef::default(),
                material: "Ст20".to_string(),
                length_m: 5000.0,
                diameter_mm: 720.0,
                thickness_mm: 10.0,
                remaining_mm: None,
            }),
            SectionDef::Complex(station),
        ],
    }
}

#[test]
fn roundtrip_yaml_empty_project() {
    let project = Project {
        version: LATEST_VERSION,
        name: "Empty Project".to_string(),
        fluid: FluidDef::Gas(GasDef::default()),
        years: 0.0,
        sections: vec![],
    };

    validate_project(&project).unwrap();

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("pw_project_roundtrip_empty.yaml");

    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_yaml_sections() {
    let project = sample_project();
    let path = std::env::temp_dir().join("pw_project_roundtrip_sections.yaml");

    save_yaml(&path, &project).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_sections() {
    let project = sample_project();
    let path = std::env::temp_dir().join("pw_project_roundtrip_sections.json");

    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn minimal_yaml_uses_defaults() {
    let yaml = r#"
version: 1
name: Газопровод
fluid:
  type: Gas
  co2_pct: 3.5
sections:
  - type: Simple
    name: Участок 1
    material: X60
    length_m: 1000
    diameter_mm: 1020
    thickness_mm: 13
  - type: Complex
    name: ГРС-2
    object_type: grs
    placement:
      location: подземная
    components:
      - id: fork
        material: X60
        kind:
          type: Equipment
          wall_thickness_mm: 15
      - id: valve
        material: Ст20
        kind:
          type: Fitting
          fitting: valve
          diameter_mm: 325
          wall_thickness_mm: 8
"#;
    let project: Project = serde_yaml::from_str(yaml).unwrap();
    validate_project(&project).unwrap();

    assert_eq!(project.years, 0.0);
    let FluidDef::Gas(gas) = &project.fluid else {
        panic!("expected gas");
    };
    assert_eq!(gas.co2_pct, 3.5);
    assert_eq!(gas.methane_pct, 85.0);

    let sections = project.into_sections().unwrap();
    let Section::Simple(pipe) = &sections[0] else {
        panic!("expected simple section");
    };
    assert_eq!(pipe.object_type, "pipe");
    assert_eq!(pipe.placement.protection, "без защиты");

    let Section::Complex(grs) = &sections[1] else {
        panic!("expected complex section");
    };
    assert_eq!(grs.components[0].unit_count(), 1);
    assert_eq!(grs.components[1].kind(), "valve");
}

#[test]
fn version_zero_files_are_migrated() {
    let yaml = r#"
version: 0
name: Старый проект
fluid:
  type: Oil
sections:
  - type: Complex
    name: Станция
    object_type: НПС
"#;
    let path = std::env::temp_dir().join("pw_project_v0.yaml");
    std::fs::write(&path, yaml).unwrap();

    let project = load_yaml(&path).unwrap();
    assert_eq!(project.version, LATEST_VERSION);
    let SectionDef::Complex(s) = &project.sections[0] else {
        panic!("expected complex section");
    };
    assert_eq!(s.object_type, "pump_station");
}

#[test]
fn save_rejects_invalid_project() {
    let mut project = sample_project();
    project.sections.push(project.sections[0].clone());
    let path = std::env::temp_dir().join("pw_project_invalid.yaml");
    assert!(matches!(
        save_yaml(&path, &project),
        Err(ProjectError::Validation(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("pw_project_does_not_exist.yaml");
    assert!(matches!(load_yaml(&path), Err(ProjectError::Io(_))));
}
