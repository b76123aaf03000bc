//! Float helpers shared by the curve and farm crates.

use crate::WfError;

/// Floating point type of wind speeds, powers, heights and efficiencies
pub type Real = f64;

/// Absolute and relative tolerance for comparing powers and heights.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol.abs`, or within `tol.rel` of the
/// larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WfError> {
    if !v.is_finite() {
        return Err(WfError::NonFinite { what, value: v });
    }
    Ok(v)
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, WfError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(WfError::InvalidArg { what })
    }
}

/// Finite and within `[0, 1]` (efficiencies, turbulence intensities).
pub fn ensure_fraction(v: Real, what: &'static str) -> Result<Real, WfError> {
    let v = ensure_finite(v, what)?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(WfError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installed_powers_compare_relatively() {
        let tol = Tolerances::default();
        let forward = 7.5e6 * 6.0 + 2.0e6 * 3.0;
        let backward = 2.0e6 * 3.0 + 7.5e6 * 6.0;
        assert!(nearly_equal(forward, backward, tol));
        assert!(nearly_equal(51.0e6, 51.0e6 + 1e-3, tol));
        assert!(!nearly_equal(51.0e6, 51.0e6 + 1.0e3, tol));
        // Zero power at cut-in only matches within the absolute tolerance
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(0.0, 1e-6, tol));
    }

    #[test]
    fn ensure_finite_reports_the_quantity() {
        let err = ensure_finite(Real::NAN, "mean hub height").unwrap_err();
        assert!(matches!(
            err,
            WfError::NonFinite { what: "mean hub height", value } if value.is_nan()
        ));
        assert!(err.to_string().contains("mean hub height"));
        assert_eq!(ensure_finite(90.88, "mean hub height"), Ok(90.88));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(100.0, "hub height").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "hub height"),
            Err(WfError::InvalidArg { .. })
        ));
        assert!(ensure_positive(-1.0, "hub height").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "hub height"),
            Err(WfError::NonFinite { .. })
        ));
    }

    #[test]
    fn ensure_fraction_bounds_are_inclusive() {
        assert!(ensure_fraction(0.0, "efficiency").is_ok());
        assert!(ensure_fraction(1.0, "efficiency").is_ok());
        assert!(ensure_fraction(1.01, "efficiency").is_err());
        assert!(ensure_fraction(-0.01, "efficiency").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
