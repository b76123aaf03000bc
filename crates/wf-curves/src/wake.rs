//! Wake losses expressed as a wind farm efficiency.

use crate::curve::PowerCurve;
use crate::error::{CurveError, CurveResult};
use crate::interp::interp_clamped;
use wf_core::numeric::{Real, ensure_fraction};

/// How a wind farm efficiency reduces the summed power curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WakeLossesModel {
    /// Efficiency depends on wind speed (needs [`Efficiency::Curve`]).
    PowerEfficiencyCurve,
    /// One efficiency for every wind speed (needs [`Efficiency::Constant`]).
    ConstantEfficiency,
}

impl WakeLossesModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WakeLossesModel::PowerEfficiencyCurve => "power_efficiency_curve",
            WakeLossesModel::ConstantEfficiency => "constant_efficiency",
        }
    }
}

impl std::fmt::Display for WakeLossesModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wind-speed dependent efficiency, each value in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct EfficiencyCurve {
    wind_speeds: Vec<Real>,
    efficiencies: Vec<Real>,
}

impl EfficiencyCurve {
    pub fn new(wind_speeds: Vec<Real>, efficiencies: Vec<Real>) -> CurveResult<Self> {
        if wind_speeds.len() != efficiencies.len() {
            return Err(CurveError::LengthMismatch {
                what: "efficiency curve columns",
                left: wind_speeds.len(),
                right: efficiencies.len(),
            });
        }
        if wind_speeds.is_empty() {
            return Err(CurveError::Empty {
                what: "efficiency curve",
            });
        }
        if wind_speeds.iter().any(|v| !v.is_finite()) {
            return Err(CurveError::NonFinite {
                what: "efficiency curve wind speeds",
            });
        }
        if let Some(index) = wind_speeds.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CurveError::NotIncreasing {
                what: "efficiency curve",
                index: index + 1,
            });
        }
        for &e in &efficiencies {
            ensure_fraction(e, "efficiency").map_err(|_| CurveError::OutOfRange {
                what: "efficiency",
                value: e,
            })?;
        }

        Ok(Self {
            wind_speeds,
            efficiencies,
        })
    }

    pub fn from_pairs<I>(pairs: I) -> CurveResult<Self>
    where
        I: IntoIterator<Item = (Real, Real)>,
    {
        let (wind_speeds, efficiencies) = pairs.into_iter().unzip();
        Self::new(wind_speeds, efficiencies)
    }

    pub fn wind_speeds(&self) -> &[Real] {
        &self.wind_speeds
    }

    pub fn efficiencies(&self) -> &[Real] {
        &self.efficiencies
    }

    /// Efficiency at `wind_speed`; boundary value outside the table.
    pub fn at(&self, wind_speed: Real) -> Real {
        interp_clamped(wind_speed, &self.wind_speeds, &self.efficiencies)
    }
}

/// Wind farm efficiency.
#[derive(Clone, Debug, PartialEq)]
pub enum Efficiency {
    Constant(Real),
    Curve(EfficiencyCurve),
}

impl Efficiency {
    /// Constant efficiency, validated to lie in `[0, 1]`.
    pub fn constant(value: Real) -> CurveResult<Self> {
        ensure_fraction(value, "efficiency").map_err(|_| CurveError::OutOfRange {
            what: "efficiency",
            value,
        })?;
        Ok(Efficiency::Constant(value))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Efficiency::Constant(_) => "constant",
            Efficiency::Curve(_) => "curve",
        }
    }
}

/// Reduce `curve` by the wind farm efficiency.
///
/// `ConstantEfficiency` multiplies every power by the constant;
/// `PowerEfficiencyCurve` multiplies each power by the efficiency
/// interpolated at its wind speed.
///
/// # Errors
/// Fails if the efficiency kind does not match the model.
pub fn apply_wake_losses(
    curve: &PowerCurve,
    model: WakeLossesModel,
    efficiency: &Efficiency,
) -> CurveResult<PowerCurve> {
    check_efficiency_kind(model, efficiency)?;
    Ok(match efficiency {
        Efficiency::Constant(e) => curve.scaled(*e),
        Efficiency::Curve(table) => curve.map_powers(|v, p| p * table.at(v)),
    })
}

/// Check that `efficiency` can be used with `model` without applying it.
pub fn check_efficiency_kind(model: WakeLossesModel, efficiency: &Efficiency) -> CurveResult<()> {
    match (model, efficiency) {
        (WakeLossesModel::ConstantEfficiency, Efficiency::Constant(_))
        | (WakeLossesModel::PowerEfficiencyCurve, Efficiency::Curve(_)) => Ok(()),
        _ => Err(CurveError::EfficiencyMismatch {
            model: model.as_str(),
            expected: match model {
                WakeLossesModel::ConstantEfficiency => "a constant",
                WakeLossesModel::PowerEfficiencyCurve => "a curve",
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farm_curve() -> PowerCurve {
        PowerCurve::from_pairs([(2.5, 0.0), (5.0, 1000.0), (10.0, 4000.0), (20.0, 7000.0)])
            .unwrap()
    }

    fn efficiency_curve() -> EfficiencyCurve {
        EfficiencyCurve::from_pairs([(4.0, 0.8), (8.0, 0.9), (16.0, 1.0)]).unwrap()
    }

    #[test]
    fn constant_efficiency_scales_uniformly() {
        let reduced = apply_wake_losses(
            &farm_curve(),
            WakeLossesModel::ConstantEfficiency,
            &Efficiency::constant(0.9).unwrap(),
        )
        .unwrap();
        assert_eq!(reduced.wind_speeds(), farm_curve().wind_speeds());
        for (r, p) in reduced.powers().iter().zip(farm_curve().powers()) {
            assert_eq!(*r, p * 0.9);
        }
    }

    #[test]
    fn efficiency_curve_is_interpolated_per_wind_speed() {
        let reduced = apply_wake_losses(
            &farm_curve(),
            WakeLossesModel::PowerEfficiencyCurve,
            &Efficiency::Curve(efficiency_curve()),
        )
        .unwrap();
        // 5 m/s: 0.825; 10 m/s: 0.925; 20 m/s clamps to 1.0
        assert!((reduced.power_at(5.0) - 825.0).abs() < 1e-9);
        assert!((reduced.power_at(10.0) - 3700.0).abs() < 1e-9);
        assert_eq!(reduced.power_at(20.0), 7000.0);
    }

    #[test]
    fn mismatched_kind_is_rejected() {
        let err = apply_wake_losses(
            &farm_curve(),
            WakeLossesModel::PowerEfficiencyCurve,
            &Efficiency::Constant(0.9),
        )
        .unwrap_err();
        assert!(matches!(err, CurveError::EfficiencyMismatch { .. }));
        assert!(err.to_string().contains("power_efficiency_curve"));

        assert!(
            check_efficiency_kind(
                WakeLossesModel::ConstantEfficiency,
                &Efficiency::Curve(efficiency_curve())
            )
            .is_err()
        );
    }

    #[test]
    fn efficiency_values_are_validated() {
        assert!(Efficiency::constant(1.2).is_err());
        assert!(EfficiencyCurve::from_pairs([(5.0, 0.9), (10.0, -0.1)]).is_err());
        assert!(EfficiencyCurve::from_pairs([(5.0, 0.9), (5.0, 0.95)]).is_err());
    }
}
