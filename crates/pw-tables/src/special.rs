//! Special multipliers for known component roles inside process objects.
//!
//! Resolution tiers, first hit wins:
//! 1. exact component id;
//! 2. substring match either way, component id before object type, in
//!    table order (empty strings never match);
//! 3. component type fallback;
//! 4. 1.0.

use crate::error::{TablesError, TablesResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialEntry {
    pub key: String,
    pub factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialTable {
    /// Ordered: substring matching scans top to bottom.
    pub entries: Vec<SpecialEntry>,
    /// Factor by component type when no key matched.
    pub type_fallbacks: BTreeMap<String, f64>,
}

impl Default for SpecialTable {
    fn default() -> Self {
        let entries = [
            ("pipe", 1.0),
            ("equipment", 1.2),
            // oil
            ("pump_station_pumps", 1.8),
            ("pump_station_filters", 1.3),
            ("pump_station_reservoirs", 2.0),
            ("separator_dirty_oil", 1.6),
            ("separator_water", 3.0),
            ("separator_clean_oil", 0.8),
            ("heater_base", 2.5),
            ("reservoir_base", 1.5),
            // gas
            ("compressor_station", 2.2),
            ("dryer_adsorbers", 1.8),
            ("grs_filter", 1.4),
            ("grs_fork", 1.2),
        ]
        .into_iter()
        .map(|(key, factor)| SpecialEntry {
            key: key.to_string(),
            factor,
        })
        .collect();

        let type_fallbacks = [
            ("equipment", 1.2),
            ("tank", 1.2),
            ("separator", 1.2),
            ("compressor", 1.2),
            ("pipe", 1.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            entries,
            type_fallbacks,
        }
    }
}

impl SpecialTable {
    pub fn resolve(&self, component_type: &str, component_id: &str, object_type: &str) -> f64 {
        if !component_id.is_empty() {
            if let Some(e) = self.entries.iter().find(|e| e.key == component_id) {
                return e.factor;
            }
        }

        for needle in [component_id, object_type] {
            if needle.is_empty() {
                continue;
            }
            if let Some(e) = self
                .entries
                .iter()
                .find(|e| e.key.contains(needle) || needle.contains(e.key.as_str()))
            {
                tracing::trace!(needle, key = %e.key, factor = e.factor, "special factor by substring");
                return e.factor;
            }
        }

        self.type_fallbacks
            .get(component_type)
            .copied()
            .unwrap_or(1.0)
    }

    pub fn validate(&self) -> TablesResult<()> {
        for e in &self.entries {
            // an empty key would match every needle
            if e.key.is_empty() {
                return Err(TablesError::Invalid {
                    what: "special coefficient with empty key".to_string(),
                });
            }
            crate::check_factor(e.factor, &format!("special '{}'", e.key))?;
        }
        for (k, v) in &self.type_fallbacks {
            crate::check_factor(*v, &format!("special fallback '{k}'"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_id_wins() {
        let t = SpecialTable::default();
        assert_eq!(t.resolve("equipment", "separator_water", "separator"), 3.0);
        assert_eq!(t.resolve("pipe", "pipe", "pump_station"), 1.0);
    }

    #[test]
    fn substring_both_directions() {
        let t = SpecialTable::default();
        // id inside a key
        assert_eq!(t.resolve("equipment", "pumps", "pump_station"), 1.8);
        // key inside the id
        assert_eq!(t.resolve("equipment", "heater_base_2", ""), 2.5);
        // id misses, object type hits
        assert_eq!(t.resolve("equipment", "zzz", "compressor_station"), 2.2);
    }

    #[test]
    fn table_order_breaks_ties() {
        let t = SpecialTable::default();
        // "separator" is inside three keys; the first one listed wins
        assert_eq!(t.resolve("", "separator", ""), 1.6);
    }

    #[test]
    fn type_fallback_and_default() {
        let t = SpecialTable::default();
        assert_eq!(t.resolve("tank", "", ""), 1.2);
        assert_eq!(t.resolve("pipe", "", ""), 1.0);
        assert_eq!(t.resolve("valve", "", ""), 1.0);
        assert_eq!(t.resolve("", "", ""), 1.0);
    }

    #[test]
    fn empty_key_rejected() {
        let mut t = SpecialTable::default();
        t.entries.push(SpecialEntry {
            key: String::new(),
            factor: 1.0,
        });
        assert!(t.validate().is_err());
    }
}
