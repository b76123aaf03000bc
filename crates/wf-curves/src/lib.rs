//! wf-curves: power curve tables and the numerics that act on them.
//!
//! Provides:
//! - `PowerCurve`, an ordered (wind speed, power) table
//! - linear interpolation and the sorted-index union used to sum curves
//! - Gaussian smoothing of power curves
//! - turbulence intensity estimation from a roughness length
//! - wake-loss (wind farm efficiency) application
//!
//! Wind speeds are in m/s, power in W, efficiencies dimensionless.

pub mod curve;
pub mod error;
pub mod interp;
pub mod smoothing;
pub mod turbulence;
pub mod wake;

pub use curve::PowerCurve;
pub use error::{CurveError, CurveResult};
pub use interp::{forward_filled, interp_clamped, interp_or, union_sum};
pub use smoothing::{GaussianSmoothing, Spread, gauss_distribution, smooth_power_curve};
pub use turbulence::estimate_turbulence_intensity;
pub use wake::{
    Efficiency, EfficiencyCurve, WakeLossesModel, apply_wake_losses, check_efficiency_kind,
};
