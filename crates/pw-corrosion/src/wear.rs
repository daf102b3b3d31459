//! Oil and gas corrosion orchestrators.
//!
//! Each path derives the correlation inputs from the fluid description,
//! picks a rate model by threshold, then applies flow and site factors:
//!
//! ```text
//! rate = base_rate × flow factors × location × environment × protection × special
//! loss = rate × years
//! ```

use crate::error::CorrosionResult;
use crate::fluid::{FluidEnvironment, GasFlow, OilFlow, check};
use crate::models::{RateModel, rate_co2_h2s, rate_co2_only_with};
use crate::ph::estimate_ph_within;
use pw_core::units::{
    Bar, Centistokes, Millimeters, MmPerYear, MmolPerLiter, Percent, Years, bore_velocity,
    h2s_ppm_to_bar, partial_pressure_bar, percent_to_fraction,
};
use pw_core::{Component, Placement, ensure_non_negative, ensure_positive};
use pw_tables::{Coefficients, SiteFactors};
use serde::Serialize;

/// The wall being corroded: geometry, grade, placement and identity.
#[derive(Debug, Clone, Copy)]
pub struct Exposure<'a> {
    pub years: Years,
    pub thickness_mm: Millimeters,
    pub diameter_mm: Millimeters,
    pub material: &'a str,
    pub placement: &'a Placement,
    /// `pipe`, `equipment`, `valve`, ... for the special-factor fallback.
    pub component_type: &'a str,
    pub component_id: &'a str,
    pub object_type: &'a str,
}

impl<'a> Exposure<'a> {
    pub fn of_component(
        component: &'a Component,
        placement: &'a Placement,
        object_type: &'a str,
        years: Years,
    ) -> Self {
        Self {
            years,
            thickness_mm: component.thickness_mm(),
            diameter_mm: component.diameter_mm(),
            material: &component.material,
            placement,
            component_type: component.kind(),
            component_id: &component.id,
            object_type,
        }
    }

    pub fn validate(&self) -> CorrosionResult<()> {
        check(ensure_non_negative(self.years, "years"))?;
        check(ensure_positive(self.thickness_mm, "wall thickness"))?;
        check(ensure_non_negative(self.diameter_mm, "diameter"))?;
        Ok(())
    }

    fn site_factors(&self, tables: &Coefficients) -> SiteFactors {
        tables.site_factors(
            self.placement,
            self.component_type,
            self.component_id,
            self.object_type,
        )
    }
}

/// Fluid-specific multipliers applied on top of the base rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum FlowFactors {
    Oil { water_cut: f64, viscosity: f64 },
    Gas { condensation: f64, methane_dilution: f64 },
}

impl FlowFactors {
    pub fn product(&self) -> f64 {
        match *self {
            Self::Oil {
                water_cut,
                viscosity,
            } => water_cut * viscosity,
            Self::Gas {
                condensation,
                methane_dilution,
            } => condensation * methane_dilution,
        }
    }
}

/// Every intermediate of one rate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateBreakdown {
    pub model: RateModel,
    pub ph: f64,
    pub p_co2_bar: Bar,
    pub p_h2s_bar: Bar,
    pub velocity_mps: f64,
    pub bicarbonate_mmol: MmolPerLiter,
    pub material_factor: f64,
    /// Model output before flow and site factors, mm/yr.
    pub base_rate: MmPerYear,
    pub flow: FlowFactors,
    pub site: SiteFactors,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallLoss {
    pub loss_mm: Millimeters,
    pub rate_mm_per_year: MmPerYear,
    pub breakdown: RateBreakdown,
}

/// Derating for viscous oil: thick oil slows mass transfer to the wall.
pub fn viscosity_factor(viscosity: Centistokes) -> f64 {
    if viscosity > 100.0 {
        0.3
    } else if viscosity > 50.0 {
        0.5
    } else if viscosity > 20.0 {
        0.7
    } else if viscosity > 10.0 {
        0.8
    } else {
        1.0
    }
}

/// Reduction from inert methane.
pub fn methane_dilution_factor(methane: Percent, per_pct: f64) -> f64 {
    1.0 - per_pct * methane
}

pub fn corrosion_over_time_oil(
    oil: &OilFlow,
    exposure: &Exposure<'_>,
    tables: &Coefficients,
) -> CorrosionResult<WallLoss> {
    oil.validate()?;
    exposure.validate()?;
    let cal = &tables.calibration;

    let p_co2 = cal.oil_p_co2_bar;
    let p_h2s = h2s_ppm_to_bar(oil.h2s_ppm);
    let velocity = bore_velocity(oil.flow_rate_m3ph, exposure.diameter_mm)
        .unwrap_or(cal.fallback_velocity_mps);
    let bicarbonate = if oil.water_content_pct > cal.oil_buffered_water_cut_pct {
        cal.oil_bicarbonate_buffered_mmol
    } else {
        cal.oil_bicarbonate_unbuffered_mmol
    };
    let ph = estimate_ph_within(cal.ph_range, oil.temperature_c, p_co2, bicarbonate);
    let material_factor = tables.material_factor(exposure.material);

    let (model, base_rate) = if p_h2s > cal.oil_h2s_threshold_bar {
        let rate = rate_co2_h2s(oil.temperature_c, p_co2, p_h2s, velocity, ph, material_factor);
        (RateModel::NorsokM506, rate)
    } else {
        let rate = rate_co2_only_with(
            cal.oil_phase_factor,
            oil.temperature_c,
            p_co2,
            ph,
            material_factor,
        );
        (RateModel::DeWaardMilliams, rate)
    };

    let flow = FlowFactors::Oil {
        water_cut: percent_to_fraction(oil.water_content_pct),
        viscosity: viscosity_factor(oil.viscosity_cst),
    };
    let site = exposure.site_factors(tables);
    let rate = base_rate * flow.product() * site.product();

    tracing::debug!(
        fluid = "oil",
        model = %model,
        temperature_c = oil.temperature_c,
        p_co2_bar = p_co2,
        p_h2s_bar = p_h2s,
        ph,
        base_rate,
        flow = ?flow,
        location = site.location,
        environment = site.environment,
        protection = site.protection,
        special = site.special,
        rate,
        "corrosion rate"
    );

    Ok(WallLoss {
        loss_mm: rate * exposure.years,
        rate_mm_per_year: rate,
        breakdown: RateBreakdown {
            model,
            ph,
            p_co2_bar: p_co2,
            p_h2s_bar: p_h2s,
            velocity_mps: velocity,
            bicarbonate_mmol: bicarbonate,
            material_factor,
            base_rate,
            flow,
            site,
        },
    })
}

pub fn corrosion_over_time_gas(
    gas: &GasFlow,
    exposure: &Exposure<'_>,
    tables: &Coefficients,
) -> CorrosionResult<WallLoss> {
    gas.validate()?;
    exposure.validate()?;
    let cal = &tables.calibration;

    let p_co2 = partial_pressure_bar(gas.pressure_mpa, gas.co2_pct);
    let p_h2s = cal.gas_p_h2s_bar;
    let velocity = cal.gas_velocity_mps;
    let bicarbonate = cal.gas_bicarbonate_mmol;
    let ph = estimate_ph_within(cal.ph_range, gas.temperature_c, p_co2, bicarbonate);
    let material_factor = tables.material_factor(exposure.material);

    let (model, base_rate) = if p_co2 > cal.gas_co2_threshold_bar {
        let rate = rate_co2_h2s(gas.temperature_c, p_co2, p_h2s, velocity, ph, material_factor);
        (RateModel::NorsokM506, rate)
    } else {
        let rate = rate_co2_only_with(
            cal.oil_phase_factor,
            gas.temperature_c,
            p_co2,
            ph,
            material_factor,
        );
        (RateModel::DeWaardMilliams, rate)
    };

    let flow = FlowFactors::Gas {
        condensation: if gas.condensing() {
            cal.condensation_factor
        } else {
            1.0
        },
        methane_dilution: methane_dilution_factor(gas.methane_pct, cal.methane_dilution_per_pct),
    };
    let site = exposure.site_factors(tables);
    let rate = base_rate * flow.product() * site.product();

    tracing::debug!(
        fluid = "gas",
        model = %model,
        temperature_c = gas.temperature_c,
        p_co2_bar = p_co2,
        ph,
        condensing = gas.condensing(),
        base_rate,
        flow = ?flow,
        location = site.location,
        environment = site.environment,
        protection = site.protection,
        special = site.special,
        rate,
        "corrosion rate"
    );

    Ok(WallLoss {
        loss_mm: rate * exposure.years,
        rate_mm_per_year: rate,
        breakdown: RateBreakdown {
            model,
            ph,
            p_co2_bar: p_co2,
            p_h2s_bar: p_h2s,
            velocity_mps: velocity,
            bicarbonate_mmol: bicarbonate,
            material_factor,
            base_rate,
            flow,
            site,
        },
    })
}

/// Dispatch on the fluid family.
pub fn corrosion_over_time(
    fluid: &FluidEnvironment,
    exposure: &Exposure<'_>,
    tables: &Coefficients,
) -> CorrosionResult<WallLoss> {
    match fluid {
        FluidEnvironment::Oil(oil) => corrosion_over_time_oil(oil, exposure, tables),
        FluidEnvironment::Gas(gas) => corrosion_over_time_gas(gas, exposure, tables),
    }
}
