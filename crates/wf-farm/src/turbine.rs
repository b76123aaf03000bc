//! Wind turbine types as seen by a wind farm.

use crate::error::{FarmError, FarmResult};
use std::fmt;
use wf_core::numeric::ensure_positive;
use wf_core::units::{Length, Power};
use wf_curves::PowerCurve;

/// Read-only view of a wind turbine type.
///
/// The farm only needs hub height, nominal power and (for aggregation) a
/// power curve, so anything exposing those can take part in a fleet.
pub trait WindTurbineModel: fmt::Debug + Send + Sync {
    /// Turbine type name used in diagnostics.
    fn name(&self) -> &str;

    /// Hub height (> 0).
    fn hub_height(&self) -> Length;

    /// Nominal (rated) power (> 0).
    fn nominal_power(&self) -> Power;

    /// Power curve in m/s and W, if known.
    fn power_curve(&self) -> Option<&PowerCurve>;
}

/// Wind turbine type with a fixed hub height and rating.
#[derive(Clone, Debug, PartialEq)]
pub struct WindTurbine {
    /// Turbine type name
    pub name: String,
    hub_height: Length,
    nominal_power: Power,
    power_curve: Option<PowerCurve>,
}

impl WindTurbine {
    /// Create a turbine type without a power curve.
    ///
    /// # Errors
    /// Returns error if hub height or nominal power are not positive.
    pub fn new(
        name: impl Into<String>,
        hub_height: Length,
        nominal_power: Power,
    ) -> FarmResult<Self> {
        ensure_positive(hub_height.value, "hub height").map_err(|_| FarmError::NonPhysical {
            what: "hub height must be positive",
        })?;
        ensure_positive(nominal_power.value, "nominal power").map_err(|_| {
            FarmError::NonPhysical {
                what: "nominal power must be positive",
            }
        })?;

        Ok(Self {
            name: name.into(),
            hub_height,
            nominal_power,
            power_curve: None,
        })
    }

    pub fn with_power_curve(mut self, power_curve: PowerCurve) -> Self {
        self.power_curve = Some(power_curve);
        self
    }
}

impl WindTurbineModel for WindTurbine {
    fn name(&self) -> &str {
        &self.name
    }

    fn hub_height(&self) -> Length {
        self.hub_height
    }

    fn nominal_power(&self) -> Power {
        self.nominal_power
    }

    fn power_curve(&self) -> Option<&PowerCurve> {
        self.power_curve.as_ref()
    }
}
