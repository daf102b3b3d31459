//! Costing sections before and after a corrosion assessment.

use pw_core::{ComplexSection, Component, ConditionLevel, Location, Placement, Section, SimpleSection};
use pw_corrosion::{FluidEnvironment, GasFlow, OilFlow, assess_sections};
use pw_economics::{
    detailed_section_cost, estimate_component_cost, estimate_section_cost,
    fleet_economic_summary, repair_method_info,
};
use pw_tables::Coefficients;

fn levels_section() -> Section {
    Section::Complex(ComplexSection {
        name: "КС-4".into(),
        object_type: "compressor_station".into(),
        placement: Placement {
            location: Location::Indoor,
            protection: "эпоксид. покр.".into(),
            environment: "Урал".into(),
        },
        components: vec![
            Component::pipe("pipe.main", "X60", 60.0, 1020.0, 14.0),
            Component::equipment("builds", "X60", 18.0, 4).with_remaining(5.5),
            Component::equipment("filter", "X52", 12.0, 2).with_remaining(3.0),
        ],
    })
}

#[test]
fn mixed_levels_escalate_to_emergency() {
    let tables = Coefficients::default();
    let cost = estimate_section_cost(&levels_section(), &tables.economics).unwrap();
    assert_eq!(cost.condition, Some(ConditionLevel::Critical));
    assert_eq!(cost.condition.map(ConditionLevel::label), Some("аварийное"));
    assert_eq!(cost.repair_method, "экстренный_комплексный_ремонт");
    assert_eq!(repair_method_info(&cost.repair_method).urgency, "КРИТИЧЕСКАЯ");
}

#[test]
fn estimates_do_not_touch_inputs() {
    let tables = Coefficients::default();
    let section = levels_section();
    let before = section.clone();
    let a = detailed_section_cost(&section, &tables.economics).unwrap();
    let b = detailed_section_cost(&section, &tables.economics).unwrap();
    assert_eq!(section, before);
    assert_eq!(a, b);
    assert_eq!(a.components.len(), 3);
}

#[test]
fn corrosion_raises_repair_cost() {
    let tables = Coefficients::default();
    let pipe = SimpleSection {
        name: "Участок 7".into(),
        object_type: "pipe_underground".into(),
        placement: Placement {
            location: Location::Buried,
            protection: "без защиты".into(),
            environment: "Крайний Север".into(),
        },
        material: "Ст20".into(),
        length_m: 1000.0,
        diameter_mm: 720.0,
        thickness_mm: 12.0,
        remaining_mm: None,
    };
    let fresh = estimate_section_cost(&Section::Simple(pipe.clone()), &tables.economics).unwrap();
    assert_eq!(fresh.condition, Some(ConditionLevel::Excellent));

    let fluid = FluidEnvironment::Oil(OilFlow {
        water_content_pct: 40.0,
        h2s_ppm: 400.0,
        ..OilFlow::default()
    });
    let mut sections = vec![Section::Simple(pipe)];
    assess_sections(&fluid, &mut sections, 40.0, &tables).unwrap();
    let Section::Simple(aged) = &sections[0] else {
        unreachable!()
    };
    assert!(aged.remaining_mm.is_some_and(|r| r < 12.0));

    let aged_cost = estimate_section_cost(&sections[0], &tables.economics).unwrap();
    assert!(aged_cost.condition < fresh.condition);
    assert!(aged_cost.total_cost > fresh.total_cost);
}

#[test]
fn fleet_after_gas_assessment() {
    let tables = Coefficients::default();
    let mut sections = vec![
        levels_section(),
        Section::Complex(ComplexSection {
            name: "ГРС-1".into(),
            object_type: "grs".into(),
            placement: Placement::default(),
            components: vec![
                Component::pipe("pipe.main", "X60", 40.0, 1020.0, 13.0),
                Component::equipment("filter", "X52", 12.0, 2),
                Component::equipment("fork", "X60", 15.0, 1),
            ],
        }),
    ];
    let fluid = FluidEnvironment::Gas(GasFlow::default());
    assess_sections(&fluid, &mut sections, 15.0, &tables).unwrap();

    let summary = fleet_economic_summary(&sections, &tables.economics).unwrap();
    assert_eq!(summary.urgent_count + summary.planned_count, 2);
    assert_eq!(summary.undetermined_count, 0);
    assert!(summary.total_repair_cost > 0.0);

    // the assessment replaced the hand-set remaining walls
    let Section::Complex(station) = &sections[0] else {
        unreachable!()
    };
    for component in &station.components {
        let c = estimate_component_cost(component, &station.placement, &tables.economics).unwrap();
        assert_eq!(c.condition, component.condition());
    }
}
