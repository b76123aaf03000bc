//! Power curve table.

use crate::error::{CurveError, CurveResult};
use crate::interp::{interp_clamped, interp_or};
use wf_core::numeric::Real;

/// Distance (m/s) of the synthetic zero-power points added by
/// [`PowerCurve::with_zero_bounds`].
pub const ZERO_BOUND_STEP: Real = 0.5;

/// Ordered (wind speed, power) samples.
///
/// Wind speeds are in m/s and strictly increasing, powers are in W. A curve
/// always holds at least one sample and only finite values.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerCurve {
    wind_speeds: Vec<Real>,
    powers: Vec<Real>,
}

impl PowerCurve {
    /// Build a curve from parallel columns.
    ///
    /// # Errors
    /// Fails if the columns differ in length, are empty, contain non-finite
    /// values or the wind speeds are not strictly increasing.
    pub fn new(wind_speeds: Vec<Real>, powers: Vec<Real>) -> CurveResult<Self> {
        if wind_speeds.len() != powers.len() {
            return Err(CurveError::LengthMismatch {
                what: "power curve columns",
                left: wind_speeds.len(),
                right: powers.len(),
            });
        }
        if wind_speeds.is_empty() {
            return Err(CurveError::Empty {
                what: "power curve",
            });
        }
        if wind_speeds.iter().chain(powers.iter()).any(|v| !v.is_finite()) {
            return Err(CurveError::NonFinite {
                what: "power curve",
            });
        }
        if let Some(index) = wind_speeds.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CurveError::NotIncreasing {
                what: "power curve",
                index: index + 1,
            });
        }

        Ok(Self {
            wind_speeds,
            powers,
        })
    }

    /// Build a curve from `(wind_speed, power)` pairs.
    pub fn from_pairs<I>(pairs: I) -> CurveResult<Self>
    where
        I: IntoIterator<Item = (Real, Real)>,
    {
        let (wind_speeds, powers) = pairs.into_iter().unzip();
        Self::new(wind_speeds, powers)
    }

    pub fn wind_speeds(&self) -> &[Real] {
        &self.wind_speeds
    }

    pub fn powers(&self) -> &[Real] {
        &self.powers
    }

    pub fn len(&self) -> usize {
        self.wind_speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wind_speeds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Real, Real)> + '_ {
        self.wind_speeds
            .iter()
            .copied()
            .zip(self.powers.iter().copied())
    }

    pub fn first_wind_speed(&self) -> Real {
        self.wind_speeds[0]
    }

    pub fn last_wind_speed(&self) -> Real {
        self.wind_speeds[self.wind_speeds.len() - 1]
    }

    pub fn max_power(&self) -> Real {
        self.powers.iter().copied().fold(Real::NEG_INFINITY, Real::max)
    }

    /// Power at `wind_speed`, linearly interpolated; zero outside the curve.
    pub fn power_at(&self, wind_speed: Real) -> Real {
        interp_or(wind_speed, &self.wind_speeds, &self.powers, 0.0)
    }

    /// Power at `wind_speed`, linearly interpolated; boundary value outside.
    pub fn power_clamped(&self, wind_speed: Real) -> Real {
        interp_clamped(wind_speed, &self.wind_speeds, &self.powers)
    }

    /// Copy of the curve with every power multiplied by `factor`.
    pub fn scaled(&self, factor: Real) -> Self {
        Self {
            wind_speeds: self.wind_speeds.clone(),
            powers: self.powers.iter().map(|p| p * factor).collect(),
        }
    }

    /// Copy of the curve with each power replaced by `f(wind_speed, power)`.
    pub(crate) fn map_powers(&self, f: impl Fn(Real, Real) -> Real) -> Self {
        Self {
            wind_speeds: self.wind_speeds.clone(),
            powers: self.iter().map(|(v, p)| f(v, p)).collect(),
        }
    }

    /// Pad the curve with zero-power points so that interpolation on a
    /// wider wind speed index does not report power below cut-in or above
    /// cut-out.
    ///
    /// A point `(first - 0.5, 0)` is prepended unless the first wind speed is
    /// already zero, and `(last + 0.5, 0)` is appended unless the last power
    /// is already zero.
    pub fn with_zero_bounds(&self) -> Self {
        let mut wind_speeds = Vec::with_capacity(self.len() + 2);
        let mut powers = Vec::with_capacity(self.len() + 2);

        if self.first_wind_speed() != 0.0 {
            wind_speeds.push(self.first_wind_speed() - ZERO_BOUND_STEP);
            powers.push(0.0);
        }
        wind_speeds.extend_from_slice(&self.wind_speeds);
        powers.extend_from_slice(&self.powers);
        if self.powers[self.powers.len() - 1] != 0.0 {
            wind_speeds.push(self.last_wind_speed() + ZERO_BOUND_STEP);
            powers.push(0.0);
        }

        Self {
            wind_speeds,
            powers,
        }
    }
}
