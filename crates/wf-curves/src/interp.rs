//! Linear interpolation over sorted tables and the curve union used to sum
//! power curves of different turbine types.
//!
//! All routines expect `xs` sorted ascending and as long as `ys`.

use crate::curve::PowerCurve;
use crate::error::{CurveError, CurveResult};
use wf_core::numeric::Real;

/// Linear interpolation of `ys` over `xs`; holds the boundary value outside
/// `[xs[0], xs[n-1]]`. Returns NaN for an empty table.
pub fn interp_clamped(x: Real, xs: &[Real], ys: &[Real]) -> Real {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return Real::NAN;
    }
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // First index with xs[i] > x; 1 <= hi <= n-1 here
    let hi = xs[..n].partition_point(|&v| v <= x);
    let lo = hi - 1;
    let (x0, x1) = (xs[lo], xs[hi]);
    let (y0, y1) = (ys[lo], ys[hi]);
    if x == x0 {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Linear interpolation of `ys` over `xs`; returns `outside` beyond the table.
pub fn interp_or(x: Real, xs: &[Real], ys: &[Real], outside: Real) -> Real {
    let n = xs.len().min(ys.len());
    if n == 0 || x < xs[0] || x > xs[n - 1] {
        return outside;
    }
    interp_clamped(x, xs, ys)
}

/// Sorted set of every distinct wind speed across `curves`.
pub fn merged_index(curves: &[PowerCurve]) -> Vec<Real> {
    let mut index: Vec<Real> = curves
        .iter()
        .flat_map(|c| c.wind_speeds().iter().copied())
        .collect();
    index.sort_by(|a, b| a.total_cmp(b));
    index.dedup();
    index
}

/// Contribution of `curve` at `wind_speed` to a union sum: zero below its
/// first wind speed, its last power above its last wind speed, linearly
/// interpolated in between.
pub fn forward_filled(curve: &PowerCurve, wind_speed: Real) -> Real {
    if wind_speed < curve.first_wind_speed() {
        0.0
    } else {
        curve.power_clamped(wind_speed)
    }
}

/// Sum `curves` on the union of their wind speeds.
///
/// Each curve is interpolated at the wind speeds it does not define. Below
/// its first wind speed a curve adds nothing; above its last one it holds
/// its last power.
pub fn union_sum(curves: &[PowerCurve]) -> CurveResult<PowerCurve> {
    if curves.is_empty() {
        return Err(CurveError::Empty {
            what: "curves to sum",
        });
    }

    let index = merged_index(curves);
    let powers: Vec<Real> = index
        .iter()
        .map(|&v| curves.iter().map(|c| forward_filled(c, v)).sum::<Real>())
        .collect();

    PowerCurve::new(index, powers)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use wf_core::numeric::{Tolerances, nearly_equal};

    fn curve_strategy() -> impl Strategy<Value = PowerCurve> {
        prop::collection::vec((0.1_f64..2.0, 0.0_f64..3000.0), 1..12).prop_map(|steps| {
            let mut v = 0.0;
            let pairs: Vec<(Real, Real)> = steps
                .into_iter()
                .map(|(dv, p)| {
                    v += dv;
                    (v, p)
                })
                .collect();
            PowerCurve::from_pairs(pairs).expect("generated curve is sorted")
        })
    }

    proptest! {
        #[test]
        fn union_sum_is_order_independent(a in curve_strategy(), b in curve_strategy()) {
            let ab = union_sum(&[a.clone(), b.clone()]).unwrap();
            let ba = union_sum(&[b, a]).unwrap();
            prop_assert_eq!(ab.wind_speeds(), ba.wind_speeds());
            for (x, y) in ab.powers().iter().zip(ba.powers()) {
                prop_assert!(nearly_equal(*x, *y, Tolerances::default()));
            }
        }

        #[test]
        fn union_sum_keeps_native_samples(a in curve_strategy(), b in curve_strategy()) {
            let sum = union_sum(&[a.clone(), b.clone()]).unwrap();
            for (v, p) in a.iter() {
                let expected = p + forward_filled(&b, v);
                let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
                prop_assert!(nearly_equal(sum.power_clamped(v), expected, tol));
            }
        }

        #[test]
        fn interp_clamped_stays_within_bounds(c in curve_strategy(), x in -5.0_f64..30.0) {
            let y = c.power_clamped(x);
            let lo = c.powers().iter().copied().fold(f64::INFINITY, f64::min);
            prop_assert!(y >= lo - 1e-9 && y <= c.max_power() + 1e-9);
        }
    }
}
