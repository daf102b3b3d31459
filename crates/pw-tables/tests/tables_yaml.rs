//! Coefficient files on disk and their interaction with resolution.

use pw_core::{Location, Placement};
use pw_tables::{Coefficients, SharedCoefficients, TablesError};

#[test]
fn save_and_load_file() {
    let mut tables = Coefficients::default();
    tables.environment.regions.insert("Ямал".to_string(), 1.9);
    tables.protection.schemes.insert("термоусадка".to_string(), 0.04);

    let path = std::env::temp_dir().join("pw_tables_save_and_load.yaml");
    tables.save_yaml(&path).unwrap();
    let loaded = Coefficients::load_yaml(&path).unwrap();
    assert_eq!(tables, loaded);

    let placement = Placement {
        location: Location::AboveGround,
        protection: "термоусадка".into(),
        environment: "Ямал".into(),
    };
    let f = loaded.site_factors(&placement, "pipe", "", "pipe");
    assert_eq!(f.environment, 1.9);
    assert_eq!(f.protection, 0.04);
    assert!((f.product() - 1.9 * 0.04).abs() < 1e-12);
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("pw_tables_does_not_exist.yaml");
    let err = Coefficients::load_yaml(&path).unwrap_err();
    assert!(matches!(err, TablesError::Io(_)));
}

#[test]
fn malformed_yaml_is_reported() {
    let err = Coefficients::from_yaml_str("materials: [1, 2").unwrap_err();
    assert!(matches!(err, TablesError::Yaml(_)));
}

#[test]
fn material_order_override() {
    // a site table listing only a custom grade still falls back to the rules
    let yaml = r#"
materials:
  grades:
    - name: "K56"
      factor: 0.6
"#;
    let tables = Coefficients::from_yaml_str(yaml).unwrap();
    assert_eq!(tables.material_factor("K56-У"), 0.6);
    assert_eq!(tables.material_factor("10Г2"), 0.80);
    assert_eq!(tables.material_factor("Ст3"), 1.0);
}

#[test]
fn shared_snapshots_feed_threads() {
    let shared = SharedCoefficients::default();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            std::thread::spawn(move || shared.snapshot().locations.buried)
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 3.0);
    }
}

#[test]
fn submerged_environment_keys() {
    let tables = Coefficients::default();
    let keys = tables.environment_keys(Location::Submerged);
    assert!(keys.contains(&"Каспийское море"));
    assert!(!keys.contains(&"Поволжье"));
}
