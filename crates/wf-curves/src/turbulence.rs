//! Turbulence intensity estimation.

use crate::error::{CurveError, CurveResult};
use wf_core::numeric::{Real, ensure_finite, ensure_positive};

/// Estimate the turbulence intensity at `height` from the logarithmic wind
/// profile of a surface with the given roughness length:
///
/// ```text
/// TI = 1 / ln(h / z0)
/// ```
///
/// Heights and roughness lengths are in metres.
///
/// # Errors
/// Fails unless `height > roughness_length > 0`.
pub fn estimate_turbulence_intensity(height: Real, roughness_length: Real) -> CurveResult<Real> {
    ensure_positive(height, "height")?;
    ensure_positive(roughness_length, "roughness length")?;
    if height <= roughness_length {
        return Err(CurveError::OutOfRange {
            what: "height must exceed roughness length",
            value: height,
        });
    }
    let ti = 1.0 / (height / roughness_length).ln();
    Ok(ensure_finite(ti, "turbulence intensity")?)
}
