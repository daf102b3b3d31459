use crate::CoreError;

/// Finite guard shared by every validated input.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`.
pub fn ensure_non_negative(v: f64, what: &'static str) -> Result<f64, CoreError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(CoreError::OutOfRange { what, value: v });
    }
    Ok(v)
}

/// Finite and `> 0`.
pub fn ensure_positive(v: f64, what: &'static str) -> Result<f64, CoreError> {
    let v = ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(CoreError::OutOfRange { what, value: v });
    }
    Ok(v)
}

/// Finite and inside the closed percentage range `[0, 100]`.
pub fn ensure_percent(v: f64, what: &'static str) -> Result<f64, CoreError> {
    let v = ensure_finite(v, what)?;
    if !(0.0..=100.0).contains(&v) {
        return Err(CoreError::OutOfRange { what, value: v });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn range_guards() {
        assert!(ensure_non_negative(0.0, "x").is_ok());
        assert!(ensure_non_negative(-0.1, "x").is_err());
        assert!(ensure_positive(0.0, "x").is_err());
        assert!(ensure_positive(1e-9, "x").is_ok());
        assert!(ensure_percent(100.0, "x").is_ok());
        assert!(matches!(
            ensure_percent(100.5, "x"),
            Err(CoreError::OutOfRange { .. })
        ));
        assert!(ensure_percent(f64::INFINITY, "x").is_err());
    }
}
