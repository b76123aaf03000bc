//! Options of the farm power curve aggregation.

use crate::error::{FarmError, FarmResult};
use wf_core::numeric::{Real, ensure_finite, ensure_positive};
use wf_curves::{GaussianSmoothing, Spread, WakeLossesModel, estimate_turbulence_intensity};

/// How the spread of the smoothing kernel is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StandardDeviationMethod {
    /// From a turbulence intensity (explicit or estimated from a roughness
    /// length and the hub height).
    #[default]
    TurbulenceIntensity,
    /// Staffell & Pfenninger (2016), independent of site.
    StaffellPfenninger,
}

/// When smoothing is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SmoothingOrder {
    /// To each turbine type's curve, before summation.
    TurbinePowerCurves,
    /// Once to the summed farm curve.
    #[default]
    WindFarmPowerCurves,
}

/// Options for [`crate::WindFarm::assign_power_curve`].
#[derive(Clone, Debug, PartialEq)]
pub struct PowerCurveOptions {
    /// Wake losses model; `None` disables wake losses
    pub wake_losses_model: Option<WakeLossesModel>,
    /// Smooth power curves with a Gaussian kernel
    pub smoothing: bool,
    /// Step of the smoothing block (m/s)
    pub block_width: Real,
    pub standard_deviation_method: StandardDeviationMethod,
    pub smoothing_order: SmoothingOrder,
    /// Explicit turbulence intensity; takes precedence over `roughness_length`
    pub turbulence_intensity: Option<Real>,
    /// Roughness length (m) used to estimate the turbulence intensity at hub height
    pub roughness_length: Option<Real>,
    /// Half-width of the smoothing block and tail extension (m/s)
    pub wind_speed_range: Real,
}

impl Default for PowerCurveOptions {
    fn default() -> Self {
        Self {
            wake_losses_model: Some(WakeLossesModel::PowerEfficiencyCurve),
            smoothing: false,
            block_width: GaussianSmoothing::DEFAULT_BLOCK_WIDTH,
            standard_deviation_method: StandardDeviationMethod::default(),
            smoothing_order: SmoothingOrder::default(),
            turbulence_intensity: None,
            roughness_length: None,
            wind_speed_range: GaussianSmoothing::DEFAULT_WIND_SPEED_RANGE,
        }
    }
}

impl PowerCurveOptions {
    /// True when smoothing is requested for `order`.
    pub fn smooths(&self, order: SmoothingOrder) -> bool {
        self.smoothing && self.smoothing_order == order
    }

    /// Smoothing with the turbulence intensity method needs either an explicit
    /// intensity or a roughness length to estimate one.
    pub fn check_turbulence_input(&self) -> FarmResult<()> {
        if self.smoothing
            && self.standard_deviation_method == StandardDeviationMethod::TurbulenceIntensity
            && self.turbulence_intensity.is_none()
            && self.roughness_length.is_none()
        {
            return Err(FarmError::MissingTurbulenceInput);
        }
        Ok(())
    }

    /// Range checks on the numeric options that are used.
    pub fn validate(&self) -> FarmResult<()> {
        if !self.smoothing {
            return Ok(());
        }
        self.gaussian(Spread::StaffellPfenninger).validate()?;
        if let Some(ti) = self.turbulence_intensity {
            ensure_finite(ti, "turbulence intensity")?;
            if ti < 0.0 {
                return Err(FarmError::InvalidArg {
                    what: "turbulence intensity must not be negative",
                });
            }
        }
        if let Some(z0) = self.roughness_length {
            ensure_positive(z0, "roughness length")?;
        }
        Ok(())
    }

    /// Kernel spread for one smoothing call.
    ///
    /// `hub_height` is only evaluated when the turbulence intensity has to be
    /// estimated from the roughness length, so each call gets the intensity
    /// of its own height.
    pub fn resolve_spread(
        &self,
        hub_height: impl FnOnce() -> FarmResult<Real>,
    ) -> FarmResult<Spread> {
        match self.standard_deviation_method {
            StandardDeviationMethod::StaffellPfenninger => Ok(Spread::StaffellPfenninger),
            StandardDeviationMethod::TurbulenceIntensity => {
                match (self.turbulence_intensity, self.roughness_length) {
                    (Some(ti), _) => Ok(Spread::TurbulenceIntensity(ti)),
                    (None, Some(z0)) => {
                        let ti = estimate_turbulence_intensity(hub_height()?, z0)?;
                        Ok(Spread::TurbulenceIntensity(ti))
                    }
                    (None, None) => Err(FarmError::MissingTurbulenceInput),
                }
            }
        }
    }

    /// Smoothing parameters for the given spread.
    pub fn gaussian(&self, spread: Spread) -> GaussianSmoothing {
        GaussianSmoothing::new(spread)
            .with_block_width(self.block_width)
            .with_wind_speed_range(self.wind_speed_range)
    }
}
