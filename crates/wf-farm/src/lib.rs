//! wf-farm: wind farms built from fleets of wind turbine types.
//!
//! A [`WindFarm`] owns an ordered fleet of turbine types and counts and
//! derives from it:
//! - the installed power (`get_installed_power`)
//! - the power-weighted geometric mean hub height (`mean_hub_height`)
//! - an aggregated farm power curve (`assign_power_curve`), optionally
//!   smoothed and reduced by a wind farm efficiency
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wf_core::units::{m, w};
//! use wf_curves::PowerCurve;
//! use wf_farm::{FleetEntry, PowerCurveOptions, WindFarm, WindTurbine};
//!
//! let curve = PowerCurve::from_pairs([(3.0, 0.0), (12.0, 2.0e6), (25.0, 2.0e6)]).unwrap();
//! let turbine = WindTurbine::new("E-82", m(98.0), w(2.0e6))
//!     .unwrap()
//!     .with_power_curve(curve);
//!
//! let mut farm = WindFarm::new("demo", vec![FleetEntry::new(Arc::new(turbine), 4).unwrap()]);
//! let options = PowerCurveOptions {
//!     wake_losses_model: None,
//!     ..PowerCurveOptions::default()
//! };
//! farm.mean_hub_height().unwrap().assign_power_curve(&options).unwrap();
//!
//! assert_eq!(farm.get_installed_power(), 8.0e6);
//! assert_eq!(farm.power_curve().unwrap().power_at(12.0), 8.0e6);
//! ```

pub mod batch;
pub mod error;
pub mod farm;
pub mod fleet;
pub mod options;
pub mod turbine;

pub use batch::assign_power_curves;
pub use error::{FarmError, FarmResult};
pub use farm::{Coordinates, WindFarm};
pub use fleet::FleetEntry;
pub use options::{PowerCurveOptions, SmoothingOrder, StandardDeviationMethod};
pub use turbine::{WindTurbine, WindTurbineModel};
