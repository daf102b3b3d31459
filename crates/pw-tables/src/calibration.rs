//! Calibration constants of the empirical corrosion models.
//!
//! These are domain simplifications (fixed oil-system CO2 partial pressure,
//! nominal gas velocity, the pH clamp...) kept as data so a site can
//! recalibrate without touching the formulas.

use crate::error::{TablesError, TablesResult};
use serde::{Deserialize, Serialize};

/// Closed pH interval estimates are clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PhRange {
    fn default() -> Self {
        Self { min: 3.0, max: 7.0 }
    }
}

impl PhRange {
    /// Clamp into the range; NaN resolves to the upper bound.
    pub fn clamp(&self, ph: f64) -> f64 {
        if ph.is_nan() {
            self.max
        } else {
            ph.clamp(self.min, self.max)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    pub ph_range: PhRange,
    /// Oil-wetting reduction applied by the CO2-only model.
    pub oil_phase_factor: f64,
    /// Floor for remaining wall thickness, mm.
    pub min_remaining_mm: f64,

    /// Assumed CO2 partial pressure in oil systems, bar.
    pub oil_p_co2_bar: f64,
    /// Oil path switches to the CO2/H2S model above this H2S pressure, bar.
    pub oil_h2s_threshold_bar: f64,
    /// Velocity used when the bore has no area, m/s.
    pub fallback_velocity_mps: f64,
    /// Water cut above which the brine is treated as buffered, %.
    pub oil_buffered_water_cut_pct: f64,
    pub oil_bicarbonate_buffered_mmol: f64,
    pub oil_bicarbonate_unbuffered_mmol: f64,

    /// Nominal H2S partial pressure in gas streams, bar.
    pub gas_p_h2s_bar: f64,
    /// Nominal trunk-line gas velocity, m/s.
    pub gas_velocity_mps: f64,
    pub gas_bicarbonate_mmol: f64,
    /// Gas path switches to the CO2/H2S model above this CO2 pressure, bar.
    pub gas_co2_threshold_bar: f64,
    /// Multiplier when operating at or below the dew point.
    pub condensation_factor: f64,
    /// Rate reduction per percent of methane.
    pub methane_dilution_per_pct: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            ph_range: PhRange::default(),
            oil_phase_factor: 0.7,
            min_remaining_mm: 0.1,
            oil_p_co2_bar: 0.5,
            oil_h2s_threshold_bar: 0.001,
            fallback_velocity_mps: 1.0,
            oil_buffered_water_cut_pct: 10.0,
            oil_bicarbonate_buffered_mmol: 5.0,
            oil_bicarbonate_unbuffered_mmol: 1.0,
            gas_p_h2s_bar: 0.001,
            gas_velocity_mps: 15.0,
            gas_bicarbonate_mmol: 0.1,
            gas_co2_threshold_bar: 10.0,
            condensation_factor: 2.0,
            methane_dilution_per_pct: 0.005,
        }
    }
}

impl Calibration {
    pub fn validate(&self) -> TablesResult<()> {
        let PhRange { min, max } = self.ph_range;
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(TablesError::Invalid {
                what: format!("ph_range [{min}, {max}]"),
            });
        }
        if !(self.min_remaining_mm.is_finite() && self.min_remaining_mm > 0.0) {
            return Err(TablesError::Invalid {
                what: format!("min_remaining_mm = {}", self.min_remaining_mm),
            });
        }
        for (what, value) in [
            ("oil_phase_factor", self.oil_phase_factor),
            ("oil_p_co2_bar", self.oil_p_co2_bar),
            ("oil_h2s_threshold_bar", self.oil_h2s_threshold_bar),
            ("fallback_velocity_mps", self.fallback_velocity_mps),
            ("oil_buffered_water_cut_pct", self.oil_buffered_water_cut_pct),
            ("oil_bicarbonate_buffered_mmol", self.oil_bicarbonate_buffered_mmol),
            (
                "oil_bicarbonate_unbuffered_mmol",
                self.oil_bicarbonate_unbuffered_mmol,
            ),
            ("gas_p_h2s_bar", self.gas_p_h2s_bar),
            ("gas_velocity_mps", self.gas_velocity_mps),
            ("gas_bicarbonate_mmol", self.gas_bicarbonate_mmol),
            ("gas_co2_threshold_bar", self.gas_co2_threshold_bar),
            ("condensation_factor", self.condensation_factor),
            ("methane_dilution_per_pct", self.methane_dilution_per_pct),
        ] {
            crate::check_factor(value, what)?;
        }
        Ok(())
    }
}
