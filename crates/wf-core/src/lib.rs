//! wf-core: shared foundation for the windfarm crates.
//!
//! Contains:
//! - units (uom SI types + constructors for hub heights and nominal power)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{WfError, WfResult};
pub use numeric::*;
pub use units::*;
