//! Fleet-wide cost summary split by urgency.

use crate::error::EconomicsResult;
use crate::section::estimate_section_cost;
use pw_core::Section;
use pw_core::units::Rubles;
use pw_tables::EconomicTables;
use rayon::prelude::*;
use serde::Serialize;

/// Extra share per component applied to complex sections in fleet totals.
const FLEET_STEP_PER_COMPONENT: f64 = 0.1;
const FLEET_MULTIPLIER_CAP: f64 = 2.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FleetSummary {
    pub urgent_repair_cost: Rubles,
    pub planned_repair_cost: Rubles,
    pub total_repair_cost: Rubles,
    pub urgent_count: usize,
    pub planned_count: usize,
    /// Complex sections without components. They count toward neither
    /// `urgent_count` nor `planned_count` and add nothing to the repair cost.
    pub undetermined_count: usize,
}

/// Coordination multiplier a complex section carries in fleet totals.
pub fn fleet_multiplier(component_count: usize) -> f64 {
    (1.0 + FLEET_STEP_PER_COMPONENT * component_count as f64).min(FLEET_MULTIPLIER_CAP)
}

/// Summarize repair cost over all sections.
///
/// Sections are costed in parallel; totals are folded in input order so the
/// result does not depend on scheduling.
pub fn fleet_economic_summary(
    sections: &[Section],
    tables: &EconomicTables,
) -> EconomicsResult<FleetSummary> {
    let costed = sections
        .par_iter()
        .map(|section| -> EconomicsResult<_> {
            let cost = estimate_section_cost(section, tables)?;
            let total = match section {
                Section::Complex(s) => cost.total_cost * fleet_multiplier(s.components.len()),
                Section::Simple(_) => cost.total_cost,
            };
            Ok((cost.condition, total))
        })
        .collect::<EconomicsResult<Vec<_>>>()?;

    let mut summary = FleetSummary::default();
    for (condition, total) in costed {
        match condition {
            Some(level) if level.is_urgent() => {
                summary.urgent_repair_cost += total;
                summary.urgent_count += 1;
            }
            Some(_) => {
                summary.planned_repair_cost += total;
                summary.planned_count += 1;
            }
            None => summary.undetermined_count += 1,
        }
    }
    summary.total_repair_cost = summary.urgent_repair_cost + summary.planned_repair_cost;

    tracing::info!(
        sections = sections.len(),
        urgent = summary.urgent_count,
        planned = summary.planned_count,
        undetermined = summary.undetermined_count,
        total = summary.total_repair_cost,
        "fleet summary"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_core::{ComplexSection, Component, Placement, SimpleSection};

    fn simple(name: &str, remaining: f64) -> Section {
        Section::Simple(SimpleSection {
            name: name.into(),
            object_type: "pipe".into(),
            placement: Placement::default(),
            material: "Ст20".into(),
            length_m: 100.0,
            diameter_mm: 500.0,
            thickness_mm: 10.0,
            remaining_mm: Some(remaining),
        })
    }

    #[test]
    fn multiplier_is_capped() {
        assert_eq!(fleet_multiplier(0), 1.0);
        assert!((fleet_multiplier(3) - 1.3).abs() < 1e-12);
        assert_eq!(fleet_multiplier(10), 2.0);
        assert_eq!(fleet_multiplier(25), 2.0);
    }

    #[test]
    fn buckets_by_urgency() {
        let tables = EconomicTables::default();
        let sections = vec![
            simple("a", 10.0),
            simple("b", 5.0),
            simple("c", 2.0),
            Section::Complex(ComplexSection {
                name: "empty".into(),
                object_type: "pipe".into(),
                placement: Placement::default(),
                components: vec![],
            }),
        ];
        let s = fleet_economic_summary(&sections, &tables).unwrap();
        assert_eq!(s.urgent_count, 2);
        assert_eq!(s.planned_count, 1);
        assert_eq!(s.undetermined_count, 1);
        assert_eq!(s.total_repair_cost, s.urgent_repair_cost + s.planned_repair_cost);
    }

    #[test]
    fn empty_section_is_not_planned_work() {
        let tables = EconomicTables::default();
        let empty = Section::Complex(ComplexSection {
            name: "empty".into(),
            object_type: "pipe".into(),
            placement: Placement::default(),
            components: vec![],
        });
        let with = fleet_economic_summary(&[simple("a", 7.0), empty], &tables).unwrap();
        let without = fleet_economic_summary(&[simple("a", 7.0)], &tables).unwrap();
        assert_eq!(with.planned_count, without.planned_count);
        assert_eq!(with.total_repair_cost, without.total_repair_cost);
        assert_eq!(with.undetermined_count, 1);
    }

    #[test]
    fn complex_sections_carry_fleet_multiplier() {
        let tables = EconomicTables::default();
        let section = Section::Complex(ComplexSection {
            name: "ГРС".into(),
            object_type: "grs".into(),
            placement: Placement::default(),
            components: vec![
                Component::equipment("filter", "Ст20", 12.0, 1),
                Component::equipment("fork", "Ст20", 12.0, 1),
            ],
        });
        let plain = estimate_section_cost(&section, &tables).unwrap().total_cost;
        let s = fleet_economic_summary(std::slice::from_ref(&section), &tables).unwrap();
        assert!((s.planned_repair_cost - plain * 1.2).abs() < 1e-6);
    }

    #[test]
    fn empty_fleet() {
        let s = fleet_economic_summary(&[], &EconomicTables::default()).unwrap();
        assert_eq!(s, FleetSummary::default());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use pw_core::{Placement, SimpleSection};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn partition_law(remaining in proptest::collection::vec(0.5f64..14.0, 0..20)) {
            let sections: Vec<Section> = remaining
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    Section::Simple(SimpleSection {
                        name: format!("s{i}"),
                        object_type: "pipe".into(),
                        placement: Placement::default(),
                        material: "09Г2С".into(),
                        length_m: 50.0,
                        diameter_mm: 325.0,
                        thickness_mm: 14.0,
                        remaining_mm: Some(*r),
                    })
                })
                .collect();
            let s = fleet_economic_summary(&sections, &EconomicTables::default()).unwrap();
            prop_assert_eq!(s.urgent_repair_cost + s.planned_repair_cost, s.total_repair_cost);
            prop_assert_eq!(s.urgent_count + s.planned_count, sections.len());
            prop_assert_eq!(s.undetermined_count, 0);
        }
    }
}
