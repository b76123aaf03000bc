//! Gaussian smoothing of power curves.
//!
//! A measured power curve describes a single turbine at a single point. Spread
//! over a farm, or over the variability of wind speed within an averaging
//! interval, the curve is better represented by its convolution with a normal
//! distribution of wind speeds:
//!
//! ```text
//! P_smooth(v) = Σ_x  Δx · P(x) · φ(v - x; σ(v))
//! ```
//!
//! where `x` runs over a block `[v - range, v + range)` with step `Δx`
//! (`block_width`) and `σ(v)` depends on the selected [`Spread`]:
//!
//! - turbulence intensity: `σ(v) = v · TI`
//! - Staffell & Pfenninger (2016): `σ(v) = 0.2 · v + 0.6`
//!
//! The curve is extended with zero-power samples every 0.5 m/s up to
//! `last + range` so that the smoothed tail is represented.

use crate::curve::PowerCurve;
use crate::error::{CurveError, CurveResult};
use crate::interp::interp_or;
use std::f64::consts::PI;
use wf_core::numeric::{Real, ensure_finite, ensure_positive};

/// Step (m/s) of the zero-power samples appended before smoothing.
pub const EXTENSION_STEP: Real = 0.5;

/// Upper bound on the samples of the convolution block and of the tail
/// extension.
pub const MAX_BLOCK_POINTS: usize = 100_000;

/// Normalised standard deviation used by the Staffell & Pfenninger method.
pub const STAFFELL_PFENNINGER_NORMALIZED_STD: Real = 0.2;

/// Constant offset (m/s) of the Staffell & Pfenninger standard deviation.
pub const STAFFELL_PFENNINGER_OFFSET: Real = 0.6;

/// How the standard deviation of the Gaussian kernel is derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spread {
    /// `σ = v · turbulence_intensity`
    TurbulenceIntensity(Real),
    /// `σ = 0.2 · v + 0.6`
    StaffellPfenninger,
}

impl Spread {
    /// Kernel standard deviation at `wind_speed`.
    pub fn standard_deviation(&self, wind_speed: Real) -> Real {
        match *self {
            Spread::TurbulenceIntensity(ti) => wind_speed * ti,
            Spread::StaffellPfenninger => {
                wind_speed * STAFFELL_PFENNINGER_NORMALIZED_STD + STAFFELL_PFENNINGER_OFFSET
            }
        }
    }
}

/// Parameters of one smoothing call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianSmoothing {
    pub spread: Spread,
    /// Step of the convolution block (m/s)
    pub block_width: Real,
    /// Half-width of the convolution block and tail extension (m/s)
    pub wind_speed_range: Real,
    /// Mean of the Gaussian kernel (m/s)
    pub mean_gauss: Real,
}

impl GaussianSmoothing {
    pub const DEFAULT_BLOCK_WIDTH: Real = 0.5;
    pub const DEFAULT_WIND_SPEED_RANGE: Real = 15.0;

    pub fn new(spread: Spread) -> Self {
        Self {
            spread,
            block_width: Self::DEFAULT_BLOCK_WIDTH,
            wind_speed_range: Self::DEFAULT_WIND_SPEED_RANGE,
            mean_gauss: 0.0,
        }
    }

    pub fn with_block_width(mut self, block_width: Real) -> Self {
        self.block_width = block_width;
        self
    }

    pub fn with_wind_speed_range(mut self, wind_speed_range: Real) -> Self {
        self.wind_speed_range = wind_speed_range;
        self
    }

    /// Check the parameters without smoothing anything.
    ///
    /// # Errors
    /// Fails on a non-positive block width or range, a negative turbulence
    /// intensity, or a block or tail extension of more than
    /// [`MAX_BLOCK_POINTS`] samples.
    pub fn validate(&self) -> CurveResult<()> {
        ensure_positive(self.block_width, "block width")?;
        ensure_positive(self.wind_speed_range, "wind speed range")?;
        let block_points = 2.0 * self.wind_speed_range / self.block_width;
        if block_points > MAX_BLOCK_POINTS as Real {
            return Err(CurveError::OutOfRange {
                what: "smoothing block points (wind speed range / block width)",
                value: block_points,
            });
        }
        let extension_points = self.wind_speed_range / EXTENSION_STEP;
        if extension_points > MAX_BLOCK_POINTS as Real {
            return Err(CurveError::OutOfRange {
                what: "smoothing extension points (wind speed range)",
                value: extension_points,
            });
        }
        ensure_finite(self.mean_gauss, "gauss mean")?;
        if let Spread::TurbulenceIntensity(ti) = self.spread {
            ensure_finite(ti, "turbulence intensity")?;
            if ti < 0.0 {
                return Err(CurveError::OutOfRange {
                    what: "turbulence intensity",
                    value: ti,
                });
            }
        }
        Ok(())
    }

    /// Offsets of the convolution block relative to the wind speed, i.e.
    /// `[-range, range)` with step `block_width`.
    fn block_offsets(&self) -> impl Iterator<Item = Real> + '_ {
        let count = ((2.0 * self.wind_speed_range) / self.block_width).ceil() as usize;
        (0..count).map(move |i| -self.wind_speed_range + i as Real * self.block_width)
    }
}

/// Normal probability density of `x` for the given standard deviation and
/// mean.
pub fn gauss_distribution(x: Real, standard_deviation: Real, mean: Real) -> Real {
    let z = (x - mean) / standard_deviation;
    (-(z * z) / 2.0).exp() / (standard_deviation * (2.0 * PI).sqrt())
}

/// Smooth `curve` with a Gaussian kernel.
///
/// The returned curve starts at the first wind speed of `curve` and extends
/// `wind_speed_range` past its last one. Wind speeds whose kernel standard
/// deviation is not positive get zero power.
pub fn smooth_power_curve(
    curve: &PowerCurve,
    params: &GaussianSmoothing,
) -> CurveResult<PowerCurve> {
    params.validate()?;

    let mut wind_speeds = curve.wind_speeds().to_vec();
    let mut powers = curve.powers().to_vec();
    let maximum = curve.last_wind_speed() + params.wind_speed_range;
    let mut last = curve.last_wind_speed();
    while last < maximum {
        last += EXTENSION_STEP;
        wind_speeds.push(last);
        powers.push(0.0);
    }

    let smoothed: Vec<Real> = wind_speeds
        .iter()
        .map(|&v| {
            let sigma = params.spread.standard_deviation(v);
            if sigma <= 0.0 {
                return 0.0;
            }
            params
                .block_offsets()
                .map(|offset| {
                    let x = v + offset;
                    params.block_width
                        * interp_or(x, &wind_speeds, &powers, 0.0)
                        * gauss_distribution(v - x, sigma, params.mean_gauss)
                })
                .sum::<Real>()
        })
        .collect();

    PowerCurve::new(wind_speeds, smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepped_curve() -> PowerCurve {
        PowerCurve::from_pairs([
            (3.0, 0.0),
            (5.0, 300.0),
            (8.0, 1200.0),
            (12.0, 3000.0),
            (25.0, 3000.0),
        ])
        .unwrap()
    }

    #[test]
    fn gauss_peak_matches_closed_form() {
        let peak = gauss_distribution(0.0, 1.0, 0.0);
        assert!((peak - 1.0 / (2.0 * PI).sqrt()).abs() < 1e-12);
        let asymmetry = gauss_distribution(1.0, 1.0, 0.0) - gauss_distribution(-1.0, 1.0, 0.0);
        assert!(asymmetry.abs() < 1e-15);
    }

    #[test]
    fn spread_standard_deviation() {
        assert_eq!(Spread::TurbulenceIntensity(0.1).standard_deviation(10.0), 1.0);
        assert!((Spread::StaffellPfenninger.standard_deviation(10.0) - 2.6).abs() < 1e-12);
    }

    #[test]
    fn block_covers_range_with_block_width_step() {
        let params = GaussianSmoothing::new(Spread::StaffellPfenninger);
        let offsets: Vec<_> = params.block_offsets().collect();
        assert_eq!(offsets.len(), 60);
        assert_eq!(offsets[0], -15.0);
        assert_eq!(offsets[59], 14.5);
    }

    #[test]
    fn smoothed_curve_is_extended_by_range() {
        let params = GaussianSmoothing::new(Spread::TurbulenceIntensity(0.15));
        let smoothed = smooth_power_curve(&stepped_curve(), &params).unwrap();

        assert_eq!(smoothed.first_wind_speed(), 3.0);
        assert_eq!(smoothed.last_wind_speed(), 40.0);
        assert_eq!(smoothed.len(), stepped_curve().len() + 30);
    }

    #[test]
    fn smoothing_softens_cut_out_and_keeps_plateau() {
        let params = GaussianSmoothing::new(Spread::TurbulenceIntensity(0.1));
        let smoothed = smooth_power_curve(&stepped_curve(), &params).unwrap();

        // Plateau well inside the rated region stays close to rated power
        let at_18 = smoothed.power_at(18.0);
        assert!((at_18 - 3000.0).abs() < 60.0, "got {at_18}");
        // Power leaks past the sharp cut-out at 25 m/s
        assert!(smoothed.power_at(26.0) > 0.0);
        assert!(smoothed.max_power() <= 3000.0 * 1.01);
    }

    #[test]
    fn zero_turbulence_intensity_yields_zero_power() {
        let params = GaussianSmoothing::new(Spread::TurbulenceIntensity(0.0));
        let smoothed = smooth_power_curve(&stepped_curve(), &params).unwrap();
        assert!(smoothed.powers().iter().all(|&p| p == 0.0));
    }

    #[test]
    fn smoothing_is_deterministic() {
        let params = GaussianSmoothing::new(Spread::StaffellPfenninger).with_block_width(0.25);
        let a = smooth_power_curve(&stepped_curve(), &params).unwrap();
        let b = smooth_power_curve(&stepped_curve(), &params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_parameters() {
        let bad_width = GaussianSmoothing::new(Spread::StaffellPfenninger).with_block_width(0.0);
        assert!(smooth_power_curve(&stepped_curve(), &bad_width).is_err());

        let tiny_width = GaussianSmoothing::new(Spread::StaffellPfenninger).with_block_width(1e-12);
        assert!(matches!(
            smooth_power_curve(&stepped_curve(), &tiny_width),
            Err(CurveError::OutOfRange { .. })
        ));

        let huge_range =
            GaussianSmoothing::new(Spread::StaffellPfenninger).with_wind_speed_range(1e9);
        assert!(huge_range.validate().is_err());

        let bad_ti = GaussianSmoothing::new(Spread::TurbulenceIntensity(-0.1));
        assert!(matches!(
            smooth_power_curve(&stepped_curve(), &bad_ti),
            Err(CurveError::OutOfRange { .. })
        ));
    }
}
