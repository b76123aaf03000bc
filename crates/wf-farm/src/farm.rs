//! Wind farm model.

use crate::error::{FarmError, FarmResult};
use crate::fleet::FleetEntry;
use crate::options::{PowerCurveOptions, SmoothingOrder};
use tracing::{debug, trace};
use wf_core::numeric::{Real, ensure_finite};
use wf_core::units::{Length, Power, m, w};
use wf_curves::{
    Efficiency, PowerCurve, WakeLossesModel, apply_wake_losses, check_efficiency_kind,
    smooth_power_curve, union_sum,
};

/// Geographic location of a wind farm (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: Real,
    pub lon: Real,
}

/// Wind farm made of a fleet of wind turbine types.
///
/// Fleet, coordinates and efficiency are fixed at construction. The hub
/// height and power curve are derived on request and only written when the
/// derivation succeeds.
#[derive(Clone, Debug)]
pub struct WindFarm {
    /// Farm name for diagnostics
    pub name: String,
    fleet: Vec<FleetEntry>,
    coordinates: Option<Coordinates>,
    efficiency: Option<Efficiency>,
    hub_height: Option<Length>,
    power_curve: Option<PowerCurve>,
}

impl WindFarm {
    pub fn new(name: impl Into<String>, fleet: Vec<FleetEntry>) -> Self {
        Self {
            name: name.into(),
            fleet,
            coordinates: None,
            efficiency: None,
            hub_height: None,
            power_curve: None,
        }
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn with_efficiency(mut self, efficiency: Efficiency) -> Self {
        self.efficiency = Some(efficiency);
        self
    }

    pub fn fleet(&self) -> &[FleetEntry] {
        &self.fleet
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn efficiency(&self) -> Option<&Efficiency> {
        self.efficiency.as_ref()
    }

    /// Mean hub height, once [`WindFarm::mean_hub_height`] has run.
    pub fn hub_height(&self) -> Option<Length> {
        self.hub_height
    }

    /// Farm power curve, once [`WindFarm::assign_power_curve`] has run.
    pub fn power_curve(&self) -> Option<&PowerCurve> {
        self.power_curve.as_ref()
    }

    /// Installed power in W: Σ nominal power × number of turbines.
    ///
    /// Recomputed on every call; an empty fleet gives zero.
    pub fn get_installed_power(&self) -> Real {
        self.fleet.iter().map(FleetEntry::installed_power).sum()
    }

    pub fn installed_power(&self) -> Power {
        w(self.get_installed_power())
    }

    /// Power-weighted geometric mean of the hub heights:
    ///
    /// ```text
    /// h_WF = exp( Σ_k ln(h_k) · P_N,k · n_k / Σ_k P_N,k · n_k )
    /// ```
    ///
    /// Knorr, K.: "Modellierung von raum-zeitlichen Eigenschaften der
    /// Windenergieeinspeisung für wetterdatenbasierte
    /// Windleistungssimulationen", Universität Kassel, 2016, p. 35.
    ///
    /// # Errors
    /// Returns error if the installed power or any hub height is not positive.
    pub fn weighted_hub_height(&self) -> FarmResult<Length> {
        let installed = self.get_installed_power();
        if !installed.is_finite() || installed <= 0.0 {
            return Err(FarmError::NonPhysical {
                what: "installed power must be positive",
            });
        }

        let mut weighted_log = 0.0;
        for entry in &self.fleet {
            let h = entry.turbine().hub_height().value;
            if !h.is_finite() || h <= 0.0 {
                return Err(FarmError::NonPhysical {
                    what: "hub height must be positive",
                });
            }
            weighted_log += h.ln() * entry.installed_power();
        }

        let height = ensure_finite((weighted_log / installed).exp(), "mean hub height")?;
        Ok(m(height))
    }

    /// Compute and store the mean hub height (see
    /// [`WindFarm::weighted_hub_height`]).
    pub fn mean_hub_height(&mut self) -> FarmResult<&mut Self> {
        let height = self.weighted_hub_height()?;
        debug!(farm = %self.name, hub_height_m = height.value, "mean hub height");
        self.hub_height = Some(height);
        Ok(self)
    }

    /// Compute and store the aggregated farm power curve.
    ///
    /// See [`WindFarm::compute_power_curve`] for the procedure. The stored
    /// curve is replaced only on success.
    pub fn assign_power_curve(&mut self, options: &PowerCurveOptions) -> FarmResult<&mut Self> {
        let curve = self.compute_power_curve(options)?;
        debug!(
            farm = %self.name,
            samples = curve.len(),
            max_power_w = curve.max_power(),
            "assigned farm power curve"
        );
        self.power_curve = Some(curve);
        Ok(self)
    }

    /// Aggregate the turbine power curves into a farm power curve.
    ///
    /// 1. Each type's curve is smoothed (smoothing order
    ///    `TurbinePowerCurves`) or padded with zero-power points.
    /// 2. It is multiplied by the number of turbines of that type.
    /// 3. All curves are summed on the union of their wind speeds.
    /// 4. The sum is smoothed (smoothing order `WindFarmPowerCurves`).
    /// 5. The wind farm efficiency is applied if a wake losses model is set.
    ///
    /// # Errors
    /// Fails before any computation if a turbine has no power curve, the
    /// wake losses model needs an efficiency the farm lacks (or has of the
    /// wrong kind), or turbulence intensity smoothing has neither an
    /// intensity nor a roughness length.
    pub fn compute_power_curve(&self, options: &PowerCurveOptions) -> FarmResult<PowerCurve> {
        self.check_power_curve_inputs(options)?;

        let smooth_types = options.smooths(SmoothingOrder::TurbinePowerCurves);
        let mut curves = Vec::with_capacity(self.fleet.len());
        for entry in &self.fleet {
            let turbine = entry.turbine();
            let curve = turbine
                .power_curve()
                .ok_or_else(|| FarmError::MissingPowerCurve {
                    turbine: turbine.name().to_string(),
                })?;

            let adjusted = if smooth_types {
                let spread = options.resolve_spread(|| Ok(turbine.hub_height().value))?;
                trace!(turbine = turbine.name(), ?spread, "smoothing turbine power curve");
                smooth_power_curve(curve, &options.gaussian(spread))?
            } else {
                curve.with_zero_bounds()
            };
            curves.push(adjusted.scaled(Real::from(entry.count())));
        }

        let mut farm_curve = union_sum(&curves)?;
        trace!(farm = %self.name, samples = farm_curve.len(), "summed turbine power curves");

        if options.smooths(SmoothingOrder::WindFarmPowerCurves) {
            let spread = options.resolve_spread(|| self.smoothing_hub_height())?;
            trace!(farm = %self.name, ?spread, "smoothing farm power curve");
            farm_curve = smooth_power_curve(&farm_curve, &options.gaussian(spread))?;
        }

        if let Some(model) = options.wake_losses_model {
            let efficiency = self.required_efficiency(model)?;
            trace!(farm = %self.name, %model, "applying wake losses");
            farm_curve = apply_wake_losses(&farm_curve, model, efficiency)?;
        }

        Ok(farm_curve)
    }

    fn check_power_curve_inputs(&self, options: &PowerCurveOptions) -> FarmResult<()> {
        if self.fleet.is_empty() {
            return Err(FarmError::InvalidArg {
                what: "wind farm fleet is empty",
            });
        }
        if let Some(entry) = self.fleet.iter().find(|e| e.turbine().power_curve().is_none()) {
            return Err(FarmError::MissingPowerCurve {
                turbine: entry.turbine().name().to_string(),
            });
        }
        if let Some(model) = options.wake_losses_model {
            check_efficiency_kind(model, self.required_efficiency(model)?)?;
        }
        options.check_turbulence_input()?;
        options.validate()
    }

    fn required_efficiency(&self, model: WakeLossesModel) -> FarmResult<&Efficiency> {
        self.efficiency
            .as_ref()
            .ok_or_else(|| FarmError::MissingEfficiency {
                farm: self.name.clone(),
                model,
            })
    }

    /// Height used to estimate the farm-level turbulence intensity: the
    /// stored mean hub height if present, otherwise a freshly computed one.
    fn smoothing_hub_height(&self) -> FarmResult<Real> {
        match self.hub_height {
            Some(h) => Ok(h.value),
            None => Ok(self.weighted_hub_height()?.value),
        }
    }
}
