//! Repair cost of a single component.
//!
//! ```text
//! labor     = base hours × location complexity × rate × urgency
//! material  = steel mass × price × state coefficient          (pipe)
//!           = D × 10 × price / 1000 × state coefficient       (other)
//! coating   = π·D·L × price × 1.5, only when poor/critical or unprotected
//! transport = L × 0.001 × rate × region multiplier
//! total     = subtotal × (1 + overhead)
//! ```
//!
//! Intermediates are kept at full precision; rounding is a display concern.

use crate::error::{EconomicsError, EconomicsResult};
use pw_core::units::{
    Hours, Kilograms, Kilometers, Rubles, SquareMeters, constants, kg_to_tonnes, mm_to_m, route_km,
};
use pw_core::{
    Component, ComponentShape, ConditionLevel, CoreError, Placement, ensure_finite,
    ensure_non_negative, ensure_positive,
};
use pw_tables::EconomicTables;
use serde::Serialize;
use std::f64::consts::PI;

/// Protection key of a section with no protection at all.
pub const UNPROTECTED: &str = "без защиты";

/// Fittings are priced per 100 mm of bore.
const FITTING_BORE_STEP_MM: f64 = 100.0;
const FITTING_LABOR_MULTIPLIER: f64 = 2.0;
/// Simplified non-pipe material heuristic: mass proxy per mm of diameter.
const NON_PIPE_MATERIAL_PER_MM: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepairCostBreakdown {
    pub component_id: String,
    pub condition: ConditionLevel,
    pub repair_method: String,

    pub labor_hours: Hours,
    pub labor_cost: Rubles,
    /// Steel mass, pipes only.
    pub material_mass_kg: Option<Kilograms>,
    pub material_price: Rubles,
    pub material_cost: Rubles,
    pub coating_area_m2: SquareMeters,
    pub coating_price: Rubles,
    pub coating_cost: Rubles,
    pub transport_km: Kilometers,
    pub transport_cost: Rubles,
    pub subtotal: Rubles,
    pub overhead: Rubles,
    pub total_cost: Rubles,

    pub state_coefficient: f64,
    pub urgency_multiplier: f64,
    pub complexity_multiplier: f64,
    pub region_multiplier: f64,
}

impl RepairCostBreakdown {
    /// Labor and material only.
    pub fn base_cost(&self) -> Rubles {
        self.labor_cost + self.material_cost
    }
}

fn geometry(component: &Component) -> Result<(), CoreError> {
    match &component.shape {
        ComponentShape::Pipe {
            length_m,
            diameter_mm,
            thickness_mm,
        } => {
            ensure_non_negative(*length_m, "length")?;
            ensure_non_negative(*diameter_mm, "diameter")?;
            ensure_positive(*thickness_mm, "thickness")?;
        }
        ComponentShape::Equipment {
            wall_thickness_mm, ..
        } => {
            ensure_positive(*wall_thickness_mm, "wall thickness")?;
        }
        ComponentShape::Fitting {
            diameter_mm,
            wall_thickness_mm,
            ..
        } => {
            ensure_non_negative(*diameter_mm, "diameter")?;
            ensure_positive(*wall_thickness_mm, "wall thickness")?;
        }
    }
    if let Some(remaining) = component.remaining_mm {
        ensure_finite(remaining, "remaining thickness")?;
    }
    Ok(())
}

fn check_geometry(component: &Component) -> EconomicsResult<()> {
    geometry(component).map_err(|source| EconomicsError::Geometry {
        component: if component.id.is_empty() {
            component.name.clone()
        } else {
            component.id.clone()
        },
        source,
    })
}

fn base_labor_hours(component: &Component, hours_per_meter: f64, tables: &EconomicTables) -> Hours {
    match &component.shape {
        ComponentShape::Pipe { length_m, .. } => hours_per_meter * length_m,
        ComponentShape::Fitting { diameter_mm, .. } => {
            hours_per_meter * (diameter_mm / FITTING_BORE_STEP_MM) * FITTING_LABOR_MULTIPLIER
        }
        ComponentShape::Equipment { .. } => tables.equipment_labor_hours,
    }
}

/// Estimate the repair cost of one component in its section placement.
///
/// The condition comes from the attached remaining thickness, or the
/// as-built wall when the component was never assessed.
pub fn estimate_component_cost(
    component: &Component,
    placement: &Placement,
    tables: &EconomicTables,
) -> EconomicsResult<RepairCostBreakdown> {
    check_geometry(component)?;

    let condition = component.condition();
    let state = tables.states.get(condition);
    let complexity = tables.complexity.get(placement.location);
    let region = tables.region_multiplier(&placement.environment);

    let diameter_mm = component.cost_diameter_mm();
    let length_m = component.cost_length_m();

    let labor_hours = base_labor_hours(component, state.hours_per_meter, tables) * complexity;
    let labor_cost = labor_hours * tables.labor_rate_per_hour * state.urgency;

    let material_price = tables.material_price(&component.material);
    let (material_mass_kg, material_cost) = match &component.shape {
        ComponentShape::Pipe { thickness_mm, .. } => {
            let volume_m3 = PI * mm_to_m(diameter_mm) * mm_to_m(*thickness_mm) * length_m;
            let mass = volume_m3 * constants::STEEL_DENSITY_KG_M3;
            let cost = kg_to_tonnes(mass) * material_price * state.material_coefficient;
            (Some(mass), cost)
        }
        _ => {
            let cost = diameter_mm * NON_PIPE_MATERIAL_PER_MM * material_price / 1000.0
                * state.material_coefficient;
            (None, cost)
        }
    };

    let coating_area_m2 = PI * mm_to_m(diameter_mm) * length_m;
    let coating_price = tables.coating_price(&placement.protection);
    let coating_cost = if condition.is_urgent() || placement.protection.trim() == UNPROTECTED {
        coating_area_m2 * coating_price * tables.coating_restoration_factor
    } else {
        0.0
    };

    let transport_km = route_km(length_m);
    let transport_cost = transport_km * tables.transport_rate_per_km * region;

    let subtotal = labor_cost + material_cost + coating_cost + transport_cost;
    let overhead = subtotal * tables.overhead_fraction();
    let total_cost = subtotal + overhead;

    tracing::trace!(
        component = %component.id,
        condition = %condition,
        labor_cost,
        material_cost,
        coating_cost,
        transport_cost,
        total_cost,
        "component repair cost"
    );

    Ok(RepairCostBreakdown {
        component_id: component.id.clone(),
        condition,
        repair_method: state.method.clone(),
        labor_hours,
        labor_cost,
        material_mass_kg,
        material_price,
        material_cost,
        coating_area_m2,
        coating_price,
        coating_cost,
        transport_km,
        transport_cost,
        subtotal,
        overhead,
        total_cost,
        state_coefficient: state.material_coefficient,
        urgency_multiplier: state.urgency,
        complexity_multiplier: complexity,
        region_multiplier: region,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_core::{FittingKind, Location};

    fn buried_siberia() -> Placement {
        Placement {
            location: Location::Buried,
            protection: "битум. изоляц.".into(),
            environment: "Сибирь".into(),
        }
    }

    #[test]
    fn excellent_pipe_above_ground() {
        let tables = EconomicTables::default();
        let pipe = Component::pipe("", "Ст20", 100.0, 500.0, 10.0);
        let c = estimate_component_cost(&pipe, &Placement::default(), &tables).unwrap();

        assert_eq!(c.condition, ConditionLevel::Excellent);
        assert_eq!(c.repair_method, "обслуживание");
        assert_eq!(c.labor_hours, 50.0);
        assert_eq!(c.labor_cost, 75_000.0);

        let mass = PI * 0.5 * 0.01 * 100.0 * 7850.0;
        assert!((c.material_mass_kg.unwrap() - mass).abs() < 1e-9);
        assert!((c.material_cost - mass / 1000.0 * 45_000.0 * 0.3).abs() < 1e-6);

        // unprotected, but the "no protection" scheme costs nothing to coat
        assert_eq!(c.coating_cost, 0.0);
        assert!((c.transport_cost - 5.0).abs() < 1e-12);
        assert!((c.total_cost - c.subtotal * 1.15).abs() < 1e-6);
    }

    #[test]
    fn poor_equipment_buried() {
        let tables = EconomicTables::default();
        let pumps = Component::equipment("pumps", "09Г2С", 15.0, 3).with_remaining(5.0);
        let c = estimate_component_cost(&pumps, &buried_siberia(), &tables).unwrap();

        assert_eq!(c.condition, ConditionLevel::Poor);
        assert_eq!(c.labor_hours, 20.0);
        assert_eq!(c.labor_cost, 45_000.0);
        assert_eq!(c.material_mass_kg, None);
        assert!((c.material_cost - 102_000.0).abs() < 1e-9);
        assert!((c.coating_area_m2 - PI * 0.1).abs() < 1e-12);
        assert!((c.coating_cost - PI * 0.1 * 600.0 * 1.5).abs() < 1e-9);
        assert!((c.transport_cost - 0.07).abs() < 1e-12);
        assert_eq!(c.region_multiplier, 1.4);
        assert_eq!(c.complexity_multiplier, 2.5);
    }

    #[test]
    fn protected_healthy_wall_has_no_coating_cost() {
        let tables = EconomicTables::default();
        let valve = Component::fitting("valve", "Ст20", FittingKind::Valve, 300.0, 9.0);
        let c = estimate_component_cost(&valve, &buried_siberia(), &tables).unwrap();
        assert_eq!(c.condition, ConditionLevel::Good);
        assert_eq!(c.coating_cost, 0.0);
        // 1 h/m × 3 × 2, buried
        assert!((c.labor_hours - 15.0).abs() < 1e-12);
    }

    #[test]
    fn estimate_is_pure() {
        let tables = EconomicTables::default();
        let pipe = Component::pipe("p1", "X52", 42.0, 219.0, 6.0).with_remaining(3.2);
        let a = estimate_component_cost(&pipe, &buried_siberia(), &tables).unwrap();
        let b = estimate_component_cost(&pipe, &buried_siberia(), &tables).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.repair_method, "экстренная_замена");
    }

    #[test]
    fn negative_length_rejected() {
        let tables = EconomicTables::default();
        let pipe = Component::pipe("bad", "Ст20", -1.0, 100.0, 5.0);
        let err = estimate_component_cost(&pipe, &Placement::default(), &tables).unwrap_err();
        assert!(matches!(err, EconomicsError::Geometry { ref component, .. } if component == "bad"));
    }
}
