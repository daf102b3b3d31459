//! Section-level repair cost.
//!
//! A simple section is costed as its implicit pipe. A complex section is the
//! sum of its components, labelled with a section-level repair method chosen
//! by the worst component condition.

use crate::component::{RepairCostBreakdown, estimate_component_cost};
use crate::error::EconomicsResult;
use pw_core::condition::worst;
use pw_core::units::{Hours, Rubles};
use pw_core::{ComplexSection, ConditionLevel, Section};
use pw_tables::EconomicTables;
use serde::Serialize;
use std::fmt;

/// Repair method for a whole multi-component section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionRepairMethod {
    EmergencyComprehensive,
    Comprehensive,
    Planned,
    Maintenance,
    Diagnostics,
}

impl SectionRepairMethod {
    pub fn for_condition(level: ConditionLevel) -> Self {
        match level {
            ConditionLevel::Critical => Self::EmergencyComprehensive,
            ConditionLevel::Poor => Self::Comprehensive,
            ConditionLevel::Satisfactory => Self::Planned,
            ConditionLevel::Good => Self::Maintenance,
            ConditionLevel::Excellent => Self::Diagnostics,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::EmergencyComprehensive => "экстренный_комплексный_ремонт",
            Self::Comprehensive => "комплексный_ремонт",
            Self::Planned => "плановый_ремонт",
            Self::Maintenance => "техническое_обслуживание",
            Self::Diagnostics => "диагностика",
        }
    }
}

impl fmt::Display for SectionRepairMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline cost of a section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionCost {
    pub total_cost: Rubles,
    pub repair_method: String,
    /// `None` for a complex section without components.
    pub condition: Option<ConditionLevel>,
}

/// Full audit trail of a section estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionCostBreakdown {
    pub section: String,
    pub condition: Option<ConditionLevel>,
    pub repair_method: String,
    pub component_count: usize,

    pub labor_hours: Hours,
    pub labor_cost: Rubles,
    pub material_cost: Rubles,
    pub coating_cost: Rubles,
    pub transport_cost: Rubles,
    pub subtotal: Rubles,

    pub complexity: f64,
    pub coordination: f64,
    /// Surcharge from complexity and coordination. For a simple section this
    /// is informational only and not part of the total.
    pub complexity_cost: Rubles,
    pub overhead_percent: f64,
    pub overhead: Rubles,
    pub total_cost: Rubles,
    pub downtime_rate_per_hour: Rubles,

    pub components: Vec<RepairCostBreakdown>,
}

impl SectionCostBreakdown {
    pub fn base_cost(&self) -> Rubles {
        self.labor_cost + self.material_cost
    }
}

fn complex_components(
    section: &ComplexSection,
    tables: &EconomicTables,
) -> EconomicsResult<Vec<RepairCostBreakdown>> {
    section
        .components
        .iter()
        .map(|c| estimate_component_cost(c, &section.placement, tables))
        .collect()
}

fn section_method(condition: Option<ConditionLevel>) -> SectionRepairMethod {
    condition
        .map(SectionRepairMethod::for_condition)
        .unwrap_or(SectionRepairMethod::Maintenance)
}

pub fn estimate_section_cost(
    section: &Section,
    tables: &EconomicTables,
) -> EconomicsResult<SectionCost> {
    match section {
        Section::Simple(s) => {
            let c = estimate_component_cost(&s.as_component(), &s.placement, tables)?;
            Ok(SectionCost {
                total_cost: c.total_cost,
                repair_method: c.repair_method,
                condition: Some(c.condition),
            })
        }
        Section::Complex(s) => {
            let parts = complex_components(s, tables)?;
            let condition = worst(parts.iter().map(|c| c.condition));
            Ok(SectionCost {
                total_cost: parts.iter().map(|c| c.total_cost).sum(),
                repair_method: section_method(condition).label().to_string(),
                condition,
            })
        }
    }
}

pub fn detailed_section_cost(
    section: &Section,
    tables: &EconomicTables,
) -> EconomicsResult<SectionCostBreakdown> {
    let complexity = tables.complexity.get(section.placement().location);

    match section {
        Section::Simple(s) => {
            let c = estimate_component_cost(&s.as_component(), &s.placement, tables)?;
            Ok(SectionCostBreakdown {
                section: s.name.clone(),
                condition: Some(c.condition),
                repair_method: c.repair_method.clone(),
                component_count: 1,
                labor_hours: c.labor_hours,
                labor_cost: c.labor_cost,
                material_cost: c.material_cost,
                coating_cost: c.coating_cost,
                transport_cost: c.transport_cost,
                subtotal: c.subtotal,
                complexity,
                coordination: 1.0,
                complexity_cost: c.total_cost * (complexity - 1.0),
                overhead_percent: tables.overhead_percent,
                overhead: c.overhead,
                total_cost: c.total_cost,
                downtime_rate_per_hour: tables.downtime_rate_per_hour,
                components: vec![c],
            })
        }
        Section::Complex(s) => {
            let parts = complex_components(s, tables)?;
            let condition = worst(parts.iter().map(|c| c.condition));

            let labor_hours: Hours = parts.iter().map(|c| c.labor_hours).sum();
            let labor_cost: Rubles = parts.iter().map(|c| c.labor_cost).sum();
            let material_cost: Rubles = parts.iter().map(|c| c.material_cost).sum();
            let coating_cost: Rubles = parts.iter().map(|c| c.coating_cost).sum();
            let transport_cost: Rubles = parts.iter().map(|c| c.transport_cost).sum();
            let subtotal = labor_cost + material_cost + coating_cost + transport_cost;

            let surcharged = subtotal * complexity * tables.coordination_factor;
            let overhead = surcharged * tables.overhead_fraction();

            Ok(SectionCostBreakdown {
                section: s.name.clone(),
                condition,
                repair_method: section_method(condition).label().to_string(),
                component_count: parts.len(),
                labor_hours,
                labor_cost,
                material_cost,
                coating_cost,
                transport_cost,
                subtotal,
                complexity,
                coordination: tables.coordination_factor,
                complexity_cost: surcharged - subtotal,
                overhead_percent: tables.overhead_percent,
                overhead,
                total_cost: surcharged + overhead,
                downtime_rate_per_hour: tables.downtime_rate_per_hour,
                components: parts,
            })
        }
    }
}
