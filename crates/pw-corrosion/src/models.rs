//! Empirical corrosion-rate correlations, mm/yr.
//!
//! Both models return non-negative rates. Dispatch between them is
//! threshold-based and lives in the orchestrators.

use pw_core::units::{Bar, Celsius, MetersPerSecond, MmPerYear, celsius_to_kelvin};
use serde::Serialize;
use std::fmt;

/// Oil-wetting reduction applied by the CO2-only model by default.
pub const DEFAULT_OIL_PHASE_FACTOR: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RateModel {
    /// De Waard–Milliams (1995), CO2 only.
    DeWaardMilliams,
    /// Norsok M-506, CO2 with H2S and flow effects.
    NorsokM506,
}

impl RateModel {
    pub fn name(self) -> &'static str {
        match self {
            Self::DeWaardMilliams => "De Waard-Milliams",
            Self::NorsokM506 => "Norsok M-506",
        }
    }
}

impl fmt::Display for RateModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// De Waard–Milliams CO2 rate with the default oil-phase factor.
pub fn rate_co2_only(t_c: Celsius, p_co2_bar: Bar, ph: f64, material_factor: f64) -> MmPerYear {
    rate_co2_only_with(DEFAULT_OIL_PHASE_FACTOR, t_c, p_co2_bar, ph, material_factor)
}

pub fn rate_co2_only_with(
    oil_phase_factor: f64,
    t_c: Celsius,
    p_co2_bar: Bar,
    ph: f64,
    material_factor: f64,
) -> MmPerYear {
    if p_co2_bar.is_nan() || p_co2_bar <= 0.0 {
        return 0.0;
    }
    let t_k = celsius_to_kelvin(t_c);
    let log_rate = 5.8 - 1710.0 / t_k + 0.67 * p_co2_bar.log10();
    let rate = 10f64.powf(log_rate) * dwm_ph_factor(ph) * oil_phase_factor * material_factor;
    non_negative(rate)
}

/// Norsok M-506 rate for CO2 with H2S.
pub fn rate_co2_h2s(
    t_c: Celsius,
    p_co2_bar: Bar,
    p_h2s_bar: Bar,
    velocity_mps: MetersPerSecond,
    ph: f64,
    material_factor: f64,
) -> MmPerYear {
    let effective = p_co2_bar + 0.1 * p_h2s_bar;
    if effective.is_nan() || effective <= 0.0 {
        return 0.0;
    }
    let t_k = celsius_to_kelvin(t_c);
    let log_rate = 5.45 - 1119.0 / t_k + 0.58 * effective.log10();
    let rate = 10f64.powf(log_rate)
        * norsok_ph_factor(ph)
        * flow_factor(velocity_mps)
        * sulfide_film_factor(t_c, p_co2_bar, p_h2s_bar)
        * material_factor;
    non_negative(rate)
}

fn dwm_ph_factor(ph: f64) -> f64 {
    if ph < 3.5 {
        1.0
    } else if ph < 6.0 {
        1.0 - 0.13 * (ph - 3.5)
    } else {
        0.67
    }
}

fn norsok_ph_factor(ph: f64) -> f64 {
    if ph < 3.5 {
        1.0
    } else if ph < 6.0 {
        0.67
    } else {
        // protective film at high pH
        0.1
    }
}

/// Erosion-corrosion multiplier by flow velocity.
pub fn flow_factor(velocity_mps: MetersPerSecond) -> f64 {
    if velocity_mps < 1.0 {
        1.0
    } else if velocity_mps < 10.0 {
        1.0 + 0.1 * (velocity_mps - 1.0)
    } else if velocity_mps < 20.0 {
        2.0 + 0.3 * (velocity_mps - 10.0)
    } else {
        5.0
    }
}

/// Iron sulfide film halves the rate when enough H2S is present below 100 °C.
/// No CO2 at all counts as an unbounded H2S/CO2 ratio.
pub fn sulfide_film_factor(t_c: Celsius, p_co2_bar: Bar, p_h2s_bar: Bar) -> f64 {
    let ratio_ok = p_co2_bar <= 0.0 || p_h2s_bar / p_co2_bar > 0.01;
    if p_h2s_bar > 0.01 && t_c < 100.0 && ratio_ok {
        0.5
    } else {
        1.0
    }
}

fn non_negative(rate: f64) -> f64 {
    // NaN.max(0.0) is 0.0
    rate.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dwm_zero_pressure_is_zero() {
        assert_eq!(rate_co2_only(60.0, 0.0, 5.0, 1.0), 0.0);
        assert_eq!(rate_co2_only(60.0, -2.0, 5.0, 1.0), 0.0);
    }

    #[test]
    fn dwm_reference_value() {
        // 25 °C, 1 bar, pH 3 (factor 1), carbon steel
        let expected = 10f64.powf(5.8 - 1710.0 / 298.15) * 0.7;
        let rate = rate_co2_only(25.0, 1.0, 3.0, 1.0);
        assert!((rate - expected).abs() < 1e-9);
    }

    #[test]
    fn dwm_ph_bands() {
        assert_eq!(dwm_ph_factor(3.0), 1.0);
        assert!((dwm_ph_factor(5.0) - 0.805).abs() < 1e-12);
        assert_eq!(dwm_ph_factor(6.0), 0.67);
    }

    #[test]
    fn oil_phase_factor_is_configurable() {
        let a = rate_co2_only_with(1.0, 40.0, 2.0, 4.0, 1.0);
        let b = rate_co2_only_with(0.5, 40.0, 2.0, 4.0, 1.0);
        assert!((a - 2.0 * b).abs() < 1e-12);
    }

    #[test]
    fn flow_bands_are_continuous() {
        assert_eq!(flow_factor(0.5), 1.0);
        assert!((flow_factor(10.0) - 2.0).abs() < 1e-12);
        assert!((flow_factor(9.999_999) - 1.9).abs() < 1e-5);
        assert!((flow_factor(15.0) - 3.5).abs() < 1e-12);
        assert_eq!(flow_factor(25.0), 5.0);
    }

    #[test]
    fn sulfide_film_conditions() {
        assert_eq!(sulfide_film_factor(50.0, 1.0, 0.1), 0.5);
        // too hot
        assert_eq!(sulfide_film_factor(100.0, 1.0, 0.1), 1.0);
        // too little H2S
        assert_eq!(sulfide_film_factor(50.0, 1.0, 0.005), 1.0);
        // ratio too small
        assert_eq!(sulfide_film_factor(50.0, 10.0, 0.05), 1.0);
        // no CO2
        assert_eq!(sulfide_film_factor(50.0, 0.0, 0.05), 0.5);
    }

    #[test]
    fn norsok_h2s_only_is_finite() {
        let rate = rate_co2_h2s(50.0, 0.0, 0.5, 2.0, 5.0, 1.0);
        assert!(rate.is_finite() && rate > 0.0);
    }

    #[test]
    fn model_names() {
        assert_eq!(RateModel::DeWaardMilliams.to_string(), "De Waard-Milliams");
        assert_eq!(RateModel::NorsokM506.name(), "Norsok M-506");
    }
}
