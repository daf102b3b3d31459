//! Wall assessments: loss → remaining thickness → condition.
//!
//! `assess_section` and `assess_sections` write the remaining thickness back
//! onto the asset model so the cost engine classifies the corroded wall.
//! Nothing is written unless every wall in the call assessed cleanly.

use crate::error::CorrosionResult;
use crate::fluid::FluidEnvironment;
use crate::wear::{Exposure, RateBreakdown, corrosion_over_time};
use pw_core::condition::worst;
use pw_core::units::{Millimeters, MmPerYear, Years};
use pw_core::{
    ColorTag, Component, ConditionLevel, Placement, Section, SimpleSection, classify, ensure_finite,
};
use pw_tables::Coefficients;
use rayon::prelude::*;
use serde::Serialize;

/// Result of exposing one wall for a number of years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallAssessment {
    pub years: Years,
    pub rate_mm_per_year: MmPerYear,
    pub loss_mm: Millimeters,
    pub initial_mm: Millimeters,
    pub remaining_mm: Millimeters,
    pub condition: ConditionLevel,
    pub color: ColorTag,
    pub breakdown: RateBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentAssessment {
    pub id: String,
    pub kind: &'static str,
    pub wall: WallAssessment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionAssessment {
    pub section: String,
    pub components: Vec<ComponentAssessment>,
    /// Worst component condition; `None` for a section without components.
    pub condition: Option<ConditionLevel>,
}

/// Remaining wall after `loss`, never below `floor`.
pub fn remaining_thickness(initial: Millimeters, loss: Millimeters, floor: Millimeters) -> Millimeters {
    (initial - loss).max(floor)
}

fn assess_exposure(
    fluid: &FluidEnvironment,
    exposure: &Exposure<'_>,
    tables: &Coefficients,
) -> CorrosionResult<WallAssessment> {
    let wear = corrosion_over_time(fluid, exposure, tables)?;
    let remaining = ensure_finite(
        remaining_thickness(
            exposure.thickness_mm,
            wear.loss_mm,
            tables.calibration.min_remaining_mm,
        ),
        "remaining thickness",
    )?;
    let (condition, color) = classify(remaining);
    Ok(WallAssessment {
        years: exposure.years,
        rate_mm_per_year: wear.rate_mm_per_year,
        loss_mm: wear.loss_mm,
        initial_mm: exposure.thickness_mm,
        remaining_mm: remaining,
        condition,
        color,
        breakdown: wear.breakdown,
    })
}

/// Assess one component of an object placed at `placement`.
pub fn assess_component(
    fluid: &FluidEnvironment,
    component: &Component,
    placement: &Placement,
    object_type: &str,
    years: Years,
    tables: &Coefficients,
) -> CorrosionResult<WallAssessment> {
    let exposure = Exposure::of_component(component, placement, object_type, years);
    assess_exposure(fluid, &exposure, tables)
}

pub fn assess_simple(
    fluid: &FluidEnvironment,
    section: &SimpleSection,
    years: Years,
    tables: &Coefficients,
) -> CorrosionResult<WallAssessment> {
    let pipe = section.as_component();
    assess_component(
        fluid,
        &pipe,
        &section.placement,
        &section.object_type,
        years,
        tables,
    )
}

fn evaluate_section(
    fluid: &FluidEnvironment,
    section: &Section,
    years: Years,
    tables: &Coefficients,
) -> CorrosionResult<SectionAssessment> {
    let components = match section {
        Section::Simple(s) => vec![ComponentAssessment {
            id: String::new(),
            kind: "pipe",
            wall: assess_simple(fluid, s, years, tables)?,
        }],
        Section::Complex(s) => s
            .components
            .iter()
            .map(|component| {
                let wall = assess_component(
                    fluid,
                    component,
                    &s.placement,
                    &s.object_type,
                    years,
                    tables,
                )?;
                Ok(ComponentAssessment {
                    id: component.id.clone(),
                    kind: component.kind(),
                    wall,
                })
            })
            .collect::<CorrosionResult<Vec<_>>>()?,
    };

    Ok(SectionAssessment {
        section: section.name().to_string(),
        condition: worst(components.iter().map(|c| c.wall.condition)),
        components,
    })
}

fn attach(section: &mut Section, assessment: &SectionAssessment) {
    match section {
        Section::Simple(s) => {
            s.remaining_mm = assessment.components.first().map(|c| c.wall.remaining_mm);
        }
        Section::Complex(s) => {
            for (component, assessed) in s.components.iter_mut().zip(&assessment.components) {
                component.remaining_mm = Some(assessed.wall.remaining_mm);
            }
        }
    }
}

/// Assess every component of a section and store the remaining thickness.
///
/// The section is left unchanged when any component fails.
pub fn assess_section(
    fluid: &FluidEnvironment,
    section: &mut Section,
    years: Years,
    tables: &Coefficients,
) -> CorrosionResult<SectionAssessment> {
    let assessment = evaluate_section(fluid, section, years, tables)?;
    attach(section, &assessment);
    Ok(assessment)
}

/// Assess a batch of sections in parallel over one table snapshot.
///
/// Results keep input order. The first error aborts the batch and no
/// section is written to.
pub fn assess_sections(
    fluid: &FluidEnvironment,
    sections: &mut [Section],
    years: Years,
    tables: &Coefficients,
) -> CorrosionResult<Vec<SectionAssessment>> {
    fluid.validate()?;
    let results = sections
        .par_iter()
        .map(|section| evaluate_section(fluid, section, years, tables))
        .collect::<CorrosionResult<Vec<_>>>()?;
    for (section, assessment) in sections.iter_mut().zip(&results) {
        attach(section, assessment);
    }

    let urgent = results
        .iter()
        .filter(|r| r.condition.is_some_and(ConditionLevel::is_urgent))
        .count();
    tracing::info!(
        sections = results.len(),
        urgent,
        years,
        fluid = fluid.kind(),
        "sections assessed"
    );
    Ok(results)
}

/// Remaining-thickness curve of one component over a list of horizons.
pub fn project_years(
    fluid: &FluidEnvironment,
    component: &Component,
    placement: &Placement,
    object_type: &str,
    horizons: &[Years],
    tables: &Coefficients,
) -> CorrosionResult<Vec<WallAssessment>> {
    horizons
        .iter()
        .map(|&years| assess_component(fluid, component, placement, object_type, years, tables))
        .collect()
}
