//! Process-fluid parameters driving the corrosion orchestrators.

use crate::error::{CorrosionError, CorrosionResult};
use pw_core::units::{
    Celsius, Centistokes, CubicMetersPerHour, MegaPascal, Percent, Ppm, constants,
};
use pw_core::{CoreError, ensure_finite, ensure_non_negative, ensure_percent};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OilFlow {
    pub temperature_c: Celsius,
    pub water_content_pct: Percent,
    pub h2s_ppm: Ppm,
    pub viscosity_cst: Centistokes,
    pub flow_rate_m3ph: CubicMetersPerHour,
}

impl Default for OilFlow {
    fn default() -> Self {
        Self {
            temperature_c: 60.0,
            water_content_pct: 5.0,
            h2s_ppm: 50.0,
            viscosity_cst: 15.0,
            flow_rate_m3ph: 1000.0,
        }
    }
}

impl OilFlow {
    pub fn validate(&self) -> CorrosionResult<()> {
        check(temperature(self.temperature_c, "oil temperature"))?;
        check(ensure_percent(self.water_content_pct, "water content"))?;
        check(ensure_non_negative(self.h2s_ppm, "H2S content"))?;
        check(ensure_non_negative(self.viscosity_cst, "viscosity"))?;
        check(ensure_non_negative(self.flow_rate_m3ph, "flow rate"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GasFlow {
    pub temperature_c: Celsius,
    pub pressure_mpa: MegaPascal,
    pub co2_pct: Percent,
    pub methane_pct: Percent,
    pub dew_point_c: Celsius,
}

impl Default for GasFlow {
    fn default() -> Self {
        Self {
            temperature_c: 20.0,
            pressure_mpa: 5.0,
            co2_pct: 2.0,
            methane_pct: 85.0,
            dew_point_c: -10.0,
        }
    }
}

impl GasFlow {
    pub fn validate(&self) -> CorrosionResult<()> {
        check(temperature(self.temperature_c, "gas temperature"))?;
        check(ensure_non_negative(self.pressure_mpa, "gas pressure"))?;
        check(ensure_percent(self.co2_pct, "CO2 content"))?;
        check(ensure_percent(self.methane_pct, "methane content"))?;
        check(ensure_finite(self.dew_point_c, "dew point"))?;
        Ok(())
    }

    /// Liquid water forms on the wall at or below the dew point.
    pub fn condensing(&self) -> bool {
        self.temperature_c <= self.dew_point_c
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum FluidEnvironment {
    Oil(OilFlow),
    Gas(GasFlow),
}

impl Default for FluidEnvironment {
    fn default() -> Self {
        Self::Oil(OilFlow::default())
    }
}

impl FluidEnvironment {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Oil(_) => "oil",
            Self::Gas(_) => "gas",
        }
    }

    pub fn validate(&self) -> CorrosionResult<()> {
        match self {
            Self::Oil(oil) => oil.validate(),
            Self::Gas(gas) => gas.validate(),
        }
    }
}

fn temperature(t: Celsius, what: &'static str) -> Result<f64, CoreError> {
    let t = ensure_finite(t, what)?;
    if t <= -constants::ZERO_CELSIUS_K {
        return Err(CoreError::OutOfRange { what, value: t });
    }
    Ok(t)
}

/// Input problems surface as validation errors naming the field.
pub(crate) fn check(result: Result<f64, CoreError>) -> CorrosionResult<f64> {
    result.map_err(|e| match e {
        CoreError::NonFinite { what, value } | CoreError::OutOfRange { what, value } => {
            CorrosionError::Validation { what, value }
        }
        other => CorrosionError::Core(other),
    })
}
