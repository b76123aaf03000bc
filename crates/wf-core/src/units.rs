//! SI unit types for turbine and farm quantities.
//!
//! Hub heights and nominal powers carry units; wind speeds, powers inside
//! curve tables and efficiencies stay plain [`crate::Real`] values in m/s, W
//! and dimensionless fractions.

use uom::si::f64::{Length as UomLength, Power as UomPower};

pub type Length = UomLength;
pub type Power = UomPower;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}
