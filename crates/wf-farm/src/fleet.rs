//! Fleet entries: a turbine type and how many of it a farm has.

use crate::error::{FarmError, FarmResult};
use crate::turbine::WindTurbineModel;
use std::num::NonZeroU32;
use std::sync::Arc;
use wf_core::numeric::Real;

/// `count` identical turbines of one type.
///
/// Turbine types are shared, so several farms (or several entries) can
/// reference the same type without copying its power curve.
#[derive(Clone, Debug)]
pub struct FleetEntry {
    turbine: Arc<dyn WindTurbineModel>,
    count: NonZeroU32,
}

impl FleetEntry {
    /// # Errors
    /// Returns error if `count` is zero.
    pub fn new(turbine: Arc<dyn WindTurbineModel>, count: u32) -> FarmResult<Self> {
        let count = NonZeroU32::new(count).ok_or(FarmError::InvalidArg {
            what: "number of turbines must be positive",
        })?;
        Ok(Self { turbine, count })
    }

    pub fn turbine(&self) -> &dyn WindTurbineModel {
        self.turbine.as_ref()
    }

    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// Nominal power of all turbines of this entry (W).
    pub fn installed_power(&self) -> Real {
        self.turbine.nominal_power().value * Real::from(self.count.get())
    }
}
