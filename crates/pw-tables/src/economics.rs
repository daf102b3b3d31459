//! Economic parameters for repair costing.
//!
//! Prices are in rubles: materials per tonne, coatings per square meter,
//! labor per hour, transport per kilometer.

use crate::error::{TablesError, TablesResult};
use pw_core::{ConditionLevel, Location};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-condition costing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateCoefficient {
    /// Share of the new-material cost the repair consumes.
    pub material_coefficient: f64,
    /// Component-level repair method label.
    pub method: String,
    pub hours_per_meter: f64,
    pub urgency: f64,
}

impl StateCoefficient {
    fn new(material_coefficient: f64, method: &str, hours_per_meter: f64, urgency: f64) -> Self {
        Self {
            material_coefficient,
            method: method.to_string(),
            hours_per_meter,
            urgency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateTable {
    pub excellent: StateCoefficient,
    pub good: StateCoefficient,
    pub satisfactory: StateCoefficient,
    pub poor: StateCoefficient,
    pub critical: StateCoefficient,
}

impl Default for StateTable {
    fn default() -> Self {
        Self {
            excellent: StateCoefficient::new(0.3, "обслуживание", 0.5, 1.0),
            good: StateCoefficient::new(0.5, "покраска", 1.0, 1.0),
            satisfactory: StateCoefficient::new(0.8, "частичный_ремонт", 2.0, 1.2),
            poor: StateCoefficient::new(1.5, "полная_замена", 4.0, 1.5),
            critical: StateCoefficient::new(2.5, "экстренная_замена", 6.0, 2.0),
        }
    }
}

impl StateTable {
    pub fn get(&self, level: ConditionLevel) -> &StateCoefficient {
        match level {
            ConditionLevel::Excellent => &self.excellent,
            ConditionLevel::Good => &self.good,
            ConditionLevel::Satisfactory => &self.satisfactory,
            ConditionLevel::Poor => &self.poor,
            ConditionLevel::Critical => &self.critical,
        }
    }
}

/// Repair complexity multiplier per laying method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityFactors {
    pub above_ground: f64,
    pub buried: f64,
    pub submerged: f64,
    pub indoor: f64,
    pub aggressive: f64,
}

impl Default for ComplexityFactors {
    fn default() -> Self {
        Self {
            above_ground: 1.0,
            buried: 2.5,
            submerged: 4.0,
            indoor: 0.8,
            aggressive: 1.8,
        }
    }
}

impl ComplexityFactors {
    pub fn get(&self, location: Location) -> f64 {
        match location {
            Location::AboveGround => self.above_ground,
            Location::Buried => self.buried,
            Location::Submerged => self.submerged,
            Location::Indoor => self.indoor,
            Location::Aggressive => self.aggressive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicTables {
    pub labor_rate_per_hour: f64,
    pub transport_rate_per_km: f64,
    pub overhead_percent: f64,
    /// Reported alongside detailed breakdowns; not part of repair totals.
    pub downtime_rate_per_hour: f64,

    pub material_prices: BTreeMap<String, f64>,
    pub default_material_price: f64,
    /// Keyed by the same protection-scheme names as the corrosion tables.
    pub coating_prices: BTreeMap<String, f64>,
    pub default_coating_price: f64,
    /// Surcharge on coating restoration versus new application.
    pub coating_restoration_factor: f64,

    /// Flat labor for items that are neither pipe nor fitting, hours.
    pub equipment_labor_hours: f64,
    /// Surcharge for coordinating work on multi-component sections.
    pub coordination_factor: f64,

    pub states: StateTable,
    pub complexity: ComplexityFactors,
    /// Logistics multiplier per region; unknown regions are 1.0.
    pub regional: BTreeMap<String, f64>,
}

fn prices(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl Default for EconomicTables {
    fn default() -> Self {
        Self {
            labor_rate_per_hour: 1500.0,
            transport_rate_per_km: 50.0,
            overhead_percent: 15.0,
            downtime_rate_per_hour: 10000.0,
            material_prices: prices(&[
                ("Ст20", 45000.0),
                ("Ст45", 52000.0),
                ("09Г2С", 68000.0),
                ("17Г1С", 72000.0),
                ("X42", 85000.0),
                ("X52", 95000.0),
                ("X60", 110000.0),
                ("X65", 125000.0),
                ("X70", 140000.0),
                ("13ХФА", 180000.0),
                ("08Х18Н10Т", 320000.0),
                ("AISI 304", 350000.0),
                ("AISI 316", 480000.0),
            ]),
            default_material_price: 50000.0,
            coating_prices: prices(&[
                ("без защиты", 0.0),
                ("ППУ изоляц.", 1200.0),
                ("эпоксид. покр.", 800.0),
                ("битум. изоляц.", 600.0),
                ("катод. з. + изоляц.", 1500.0),
                ("бетонное покрытие", 900.0),
                ("полимер. изоляц. усилен.", 1400.0),
                ("катод. защ. + протекторы", 2000.0),
                ("двойная изоляция + мониторинг", 2800.0),
                ("комплекс. защ.", 3500.0),
            ]),
            default_coating_price: 0.0,
            coating_restoration_factor: 1.5,
            equipment_labor_hours: 8.0,
            coordination_factor: 1.2,
            states: StateTable::default(),
            complexity: ComplexityFactors::default(),
            regional: prices(&[
                ("Поволжье", 1.0),
                ("Урал", 1.2),
                ("Сибирь", 1.4),
                ("Дальний Восток", 1.6),
                ("Крайний Север", 2.0),
            ]),
        }
    }
}

impl EconomicTables {
    /// Price per tonne; exact grade key, otherwise the default price.
    pub fn material_price(&self, material: &str) -> f64 {
        self.material_prices
            .get(material.trim())
            .copied()
            .unwrap_or(self.default_material_price)
    }

    /// Price per square meter of the section's protection scheme.
    pub fn coating_price(&self, protection: &str) -> f64 {
        self.coating_prices
            .get(protection.trim())
            .copied()
            .unwrap_or(self.default_coating_price)
    }

    pub fn region_multiplier(&self, region: &str) -> f64 {
        self.regional.get(region.trim()).copied().unwrap_or(1.0)
    }

    pub fn overhead_fraction(&self) -> f64 {
        self.overhead_percent / 100.0
    }

    pub fn validate(&self) -> TablesResult<()> {
        for (what, value) in [
            ("labor_rate_per_hour", self.labor_rate_per_hour),
            ("transport_rate_per_km", self.transport_rate_per_km),
            ("overhead_percent", self.overhead_percent),
            ("downtime_rate_per_hour", self.downtime_rate_per_hour),
            ("default_material_price", self.default_material_price),
            ("default_coating_price", self.default_coating_price),
            ("coating_restoration_factor", self.coating_restoration_factor),
            ("equipment_labor_hours", self.equipment_labor_hours),
            ("coordination_factor", self.coordination_factor),
        ] {
            crate::check_factor(value, what)?;
        }
        for (k, v) in &self.material_prices {
            crate::check_factor(*v, &format!("material price '{k}'"))?;
        }
        for (k, v) in &self.coating_prices {
            crate::check_factor(*v, &format!("coating price '{k}'"))?;
        }
        for (k, v) in &self.regional {
            crate::check_factor(*v, &format!("regional multiplier '{k}'"))?;
        }
        for level in ConditionLevel::ALL {
            let s = self.states.get(level);
            crate::check_factor(s.material_coefficient, &format!("state '{level}' coefficient"))?;
            crate::check_factor(s.hours_per_meter, &format!("state '{level}' hours"))?;
            crate::check_factor(s.urgency, &format!("state '{level}' urgency"))?;
            if s.method.trim().is_empty() {
                return Err(TablesError::Invalid {
                    what: format!("state '{level}' has no repair method"),
                });
            }
        }
        for loc in Location::ALL {
            crate::check_factor(self.complexity.get(loc), &format!("complexity '{loc}'"))?;
        }
        Ok(())
    }
}
