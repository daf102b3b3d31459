// pw-core/src/units.rs
//
// The empirical correlations are calibrated in mixed engineering units
// (°C, bar, mm/yr, m³/h). Values stay plain `f64`; the aliases name the unit
// and every conversion between units goes through a function below.

// Public unit aliases
pub type Millimeters = f64;
pub type Meters = f64;
pub type Kilometers = f64;
pub type SquareMeters = f64;
pub type CubicMeters = f64;
pub type Kilograms = f64;
pub type Tonnes = f64;
pub type Celsius = f64;
pub type Kelvin = f64;
pub type Bar = f64;
pub type MegaPascal = f64;
pub type MetersPerSecond = f64;
pub type CubicMetersPerHour = f64;
pub type Centistokes = f64;
pub type Percent = f64;
pub type Ppm = f64;
pub type Years = f64;
pub type MmPerYear = f64;
pub type MmolPerLiter = f64;
pub type Rubles = f64;
pub type Hours = f64;

pub mod constants {
    pub const ZERO_CELSIUS_K: f64 = 273.15;
    pub const BAR_PER_MPA: f64 = 10.0;
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    /// Carbon steel density, kg/m³.
    pub const STEEL_DENSITY_KG_M3: f64 = 7850.0;
    /// ppm of H2S to bar, linear scaling used by the oil-flow path.
    pub const H2S_BAR_PER_PPM: f64 = 1e-6 * 10.0;
}

#[inline]
pub fn celsius_to_kelvin(t: Celsius) -> Kelvin {
    t + constants::ZERO_CELSIUS_K
}

#[inline]
pub fn mm_to_m(v: Millimeters) -> Meters {
    v / 1000.0
}

#[inline]
pub fn kg_to_tonnes(v: Kilograms) -> Tonnes {
    v / 1000.0
}

#[inline]
pub fn mpa_to_bar(v: MegaPascal) -> Bar {
    v * constants::BAR_PER_MPA
}

#[inline]
pub fn percent_to_fraction(v: Percent) -> f64 {
    v / 100.0
}

/// Partial pressure of a species given total pressure and its percentage.
#[inline]
pub fn partial_pressure_bar(total: MegaPascal, content: Percent) -> Bar {
    mpa_to_bar(total) * percent_to_fraction(content)
}

#[inline]
pub fn h2s_ppm_to_bar(v: Ppm) -> Bar {
    v * constants::H2S_BAR_PER_PPM
}

/// Route length as a logistics distance (km-equivalent).
#[inline]
pub fn route_km(length: Meters) -> Kilometers {
    length * 0.001
}

/// Internal cross-section of a pipe.
#[inline]
pub fn bore_area_m2(diameter: Millimeters) -> SquareMeters {
    std::f64::consts::PI * mm_to_m(diameter).powi(2) / 4.0
}

/// Mean flow velocity through a bore; `None` when the bore has no area.
#[inline]
pub fn bore_velocity(flow: CubicMetersPerHour, diameter: Millimeters) -> Option<MetersPerSecond> {
    let area = bore_area_m2(diameter);
    (area > 0.0).then(|| flow / constants::SECONDS_PER_HOUR / area)
}
