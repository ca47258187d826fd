use crate::{SfError, SfResult};

/// Divide, returning 0 when the denominator is not strictly positive.
///
/// Degenerate inputs (zero efficiency, empty steam volume, a non-positive
/// enthalpy bracket) zero the dependent quantity instead of producing
/// NaN or infinity.
#[inline]
pub fn guarded_div(num: f64, den: f64) -> f64 {
    if den > 0.0 { num / den } else { 0.0 }
}

/// |a - b| / |b|, or |a - b| when `b` is zero.
pub fn relative_error(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    if b == 0.0 { diff } else { diff / b.abs() }
}

pub fn ensure_finite(v: f64, what: &'static str) -> SfResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SfError::NonFinite { what, value: v })
    }
}

/// Like [`ensure_finite`], additionally rejecting zero and negative values.
pub fn ensure_positive(v: f64, what: &'static str) -> SfResult<f64> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(SfError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_div_zeroes_degenerate_denominators() {
        assert_eq!(guarded_div(10.0, 4.0), 2.5);
        assert_eq!(guarded_div(10.0, 0.0), 0.0);
        assert_eq!(guarded_div(10.0, -3.0), 0.0);
        assert_eq!(guarded_div(10.0, f64::NAN), 0.0);
    }

    #[test]
    fn relative_error_handles_zero_reference() {
        assert!((relative_error(1.01, 1.0) - 0.01).abs() < 1e-12);
        assert_eq!(relative_error(0.5, 0.0), 0.5);
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "rate").unwrap_err();
        assert!(format!("{err}").contains("Non-finite"));
        assert_eq!(ensure_finite(2.0, "rate"), Ok(2.0));
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert_eq!(
            ensure_positive(0.0, "rate"),
            Err(SfError::InvalidArg { what: "rate" })
        );
        assert!(matches!(
            ensure_positive(f64::INFINITY, "rate"),
            Err(SfError::NonFinite { .. })
        ));
        assert_eq!(ensure_positive(565.0, "rate"), Ok(565.0));
    }
}
