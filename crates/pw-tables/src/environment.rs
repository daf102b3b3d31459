//! Location and environment multipliers.
//!
//! A submerged section is keyed by water body, everything else by region.
//! Unknown keys resolve to 1.0.

use crate::error::TablesResult;
use pw_core::Location;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Corrosion multiplier per laying method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationFactors {
    pub above_ground: f64,
    pub buried: f64,
    pub submerged: f64,
    pub indoor: f64,
    pub aggressive: f64,
}

impl Default for LocationFactors {
    fn default() -> Self {
        Self {
            above_ground: 1.0,
            buried: 3.0,
            submerged: 2.0,
            indoor: 1.0,
            aggressive: 1.0,
        }
    }
}

impl LocationFactors {
    pub fn factor(&self, location: Location) -> f64 {
        match location {
            Location::AboveGround => self.above_ground,
            Location::Buried => self.buried,
            Location::Submerged => self.submerged,
            Location::Indoor => self.indoor,
            Location::Aggressive => self.aggressive,
        }
    }

    pub fn validate(&self) -> TablesResult<()> {
        for loc in Location::ALL {
            crate::check_factor(self.factor(loc), &format!("location '{loc}'"))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentTable {
    pub regions: BTreeMap<String, f64>,
    pub water_bodies: BTreeMap<String, f64>,
}

fn table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl Default for EnvironmentTable {
    fn default() -> Self {
        Self {
            regions: table(&[
                ("Поволжье", 1.0),
                ("Урал", 1.1),
                ("Сибирь", 1.2),
                ("Западная Сибирь", 1.3),
                ("Дальний Восток", 1.3),
                ("Крайний Север", 1.5),
            ]),
            water_bodies: table(&[
                ("Волга", 1.2),
                ("Обь", 1.1),
                ("Балтийское море", 1.5),
                ("Чёрное море", 1.6),
                ("Баренцево море", 1.7),
                ("Каспийское море", 1.8),
            ]),
        }
    }
}

impl EnvironmentTable {
    fn table_for(&self, location: Location) -> &BTreeMap<String, f64> {
        match location {
            Location::Submerged => &self.water_bodies,
            _ => &self.regions,
        }
    }

    pub fn factor(&self, location: Location, key: &str) -> f64 {
        match self.table_for(location).get(key.trim()) {
            Some(f) => *f,
            None => {
                tracing::trace!(%location, key, "unknown environment key, using 1.0");
                1.0
            }
        }
    }

    /// Keys valid for `location`, sorted.
    pub fn keys(&self, location: Location) -> Vec<&str> {
        self.table_for(location).keys().map(String::as_str).collect()
    }

    pub fn validate(&self) -> TablesResult<()> {
        for (k, v) in self.regions.iter().chain(&self.water_bodies) {
            crate::check_factor(*v, &format!("environment '{k}'"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_defaults() {
        let f = LocationFactors::default();
        assert_eq!(f.factor(Location::AboveGround), 1.0);
        assert_eq!(f.factor(Location::Buried), 3.0);
        assert_eq!(f.factor(Location::Submerged), 2.0);
        assert_eq!(f.factor(Location::Indoor), 1.0);
    }

    #[test]
    fn submerged_reads_water_bodies() {
        let t = EnvironmentTable::default();
        assert_eq!(t.factor(Location::Submerged, "Каспийское море"), 1.8);
        // a region key is unknown under water
        assert_eq!(t.factor(Location::Submerged, "Сибирь"), 1.0);
        assert_eq!(t.factor(Location::Buried, "Сибирь"), 1.2);
        assert_eq!(t.factor(Location::AboveGround, "Марс"), 1.0);
    }

    #[test]
    fn keys_follow_location() {
        let t = EnvironmentTable::default();
        assert!(t.keys(Location::Submerged).contains(&"Волга"));
        assert!(t.keys(Location::AboveGround).contains(&"Урал"));
        assert!(!t.keys(Location::AboveGround).contains(&"Волга"));
    }
}
