//! pH of the aqueous phase in a CO2–H2O–HCO3⁻ system.

use pw_core::units::{Bar, Celsius, MmolPerLiter, celsius_to_kelvin};
use pw_tables::PhRange;

/// Reference temperature of the Henry constant, K.
const T_REF_K: f64 = 298.15;

/// Estimate pH, clamped to the default `[3, 7]` window.
pub fn estimate_ph(t_c: Celsius, p_co2_bar: Bar, bicarbonate_mmol: MmolPerLiter) -> f64 {
    estimate_ph_within(PhRange::default(), t_c, p_co2_bar, bicarbonate_mmol)
}

/// Estimate pH, clamped to `range`.
///
/// With bicarbonate present the solution is treated as a buffer
/// (Henderson–Hasselbalch on the first dissociation), otherwise as pure water
/// saturated with CO2. Inputs that leave nothing dissolved produce a
/// non-finite intermediate, which the clamp resolves to the upper bound.
pub fn estimate_ph_within(
    range: PhRange,
    t_c: Celsius,
    p_co2_bar: Bar,
    bicarbonate_mmol: MmolPerLiter,
) -> f64 {
    let t_k = celsius_to_kelvin(t_c);
    let pka1 = 6.35 - 0.01 * (t_c - 25.0);

    // Henry solubility, mol/(L·atm)
    let k_h = 0.034 * (2400.0 * (1.0 / t_k - 1.0 / T_REF_K)).exp();
    let c_co2 = k_h * p_co2_bar;

    let ph = if bicarbonate_mmol > 0.0 {
        pka1 + (bicarbonate_mmol / (c_co2 * 1000.0)).log10()
    } else {
        0.5 * (pka1 - c_co2.log10())
    };
    range.clamp(ph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_brine_at_reference_temperature() {
        // 25 °C, 1 bar, 1 mmol/L: pKa1 + log10(1 / 34) = 6.35 - 1.5315
        let ph = estimate_ph(25.0, 1.0, 1.0);
        assert!((ph - (6.35 - 34.0f64.log10())).abs() < 1e-12);
    }

    #[test]
    fn pure_water_branch() {
        let ph = estimate_ph(25.0, 1.0, 0.0);
        let expected = 0.5 * (6.35 - 0.034f64.log10());
        assert!((ph - expected).abs() < 1e-12);
    }

    #[test]
    fn clamped_at_both_ends() {
        // heavy buffering saturates at 7
        assert_eq!(estimate_ph(60.0, 0.5, 5000.0), 7.0);
        // huge CO2 with trace bicarbonate drives toward acid
        assert_eq!(estimate_ph(25.0, 1e6, 1e-3), 3.0);
    }

    #[test]
    fn no_dissolved_co2_resolves_to_upper_bound() {
        assert_eq!(estimate_ph(25.0, 0.0, 1.0), 7.0);
        assert_eq!(estimate_ph(25.0, 0.0, 0.0), 7.0);
        assert_eq!(estimate_ph(25.0, -1.0, 0.0), 7.0);
    }

    #[test]
    fn custom_range() {
        let range = PhRange { min: 4.0, max: 6.0 };
        assert_eq!(estimate_ph_within(range, 60.0, 0.5, 5000.0), 6.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ph_always_inside_window(
            t in -50.0f64..200.0,
            p in 0.0f64..500.0,
            hco3 in 0.0f64..100.0,
        ) {
            let ph = estimate_ph(t, p, hco3);
            prop_assert!((3.0..=7.0).contains(&ph));
        }

        #[test]
        fn more_co2_never_raises_ph(
            t in 0.0f64..150.0,
            p in 0.01f64..50.0,
            hco3 in 0.0f64..20.0,
        ) {
            prop_assert!(estimate_ph(t, p * 2.0, hco3) <= estimate_ph(t, p, hco3));
        }
    }
}
