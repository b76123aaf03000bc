//! Power curve assignment for many independent farms.

use crate::error::FarmResult;
use crate::farm::WindFarm;
use crate::options::PowerCurveOptions;
use rayon::prelude::*;
use tracing::debug;

/// Assign power curves to `farms` in parallel.
///
/// Farms share no state, so each one is processed on its own worker. The
/// returned results are in the order of `farms`; a failing farm keeps its
/// previous power curve and does not affect the others.
pub fn assign_power_curves(
    farms: &mut [WindFarm],
    options: &PowerCurveOptions,
) -> Vec<FarmResult<()>> {
    let results: Vec<FarmResult<()>> = farms
        .par_iter_mut()
        .map(|farm| farm.assign_power_curve(options).map(|_| ()))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    debug!(farms = results.len(), failed, "assigned farm power curves");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::FleetEntry;
    use crate::turbine::WindTurbine;
    use std::sync::Arc;
    use wf_core::units::{m, w};
    use wf_curves::PowerCurve;

    fn farm(name: &str, count: u32, with_curve: bool) -> WindFarm {
        let mut turbine = WindTurbine::new("T", m(100.0), w(3000.0)).unwrap();
        if with_curve {
            turbine = turbine.with_power_curve(
                PowerCurve::from_pairs([(3.0, 0.0), (13.0, 3000.0), (25.0, 3000.0)]).unwrap(),
            );
        }
        WindFarm::new(name, vec![FleetEntry::new(Arc::new(turbine), count).unwrap()])
    }

    #[test]
    fn parallel_matches_sequential() {
        let options = PowerCurveOptions {
            wake_losses_model: None,
            ..PowerCurveOptions::default()
        };
        let mut farms: Vec<WindFarm> = (1..=8).map(|n| farm(&format!("f{n}"), n, true)).collect();
        let results = assign_power_curves(&mut farms, &options);
        assert!(results.iter().all(|r| r.is_ok()));

        for (n, f) in (1..=8).zip(&farms) {
            let expected = farm("seq", n, true).compute_power_curve(&options).unwrap();
            assert_eq!(f.power_curve(), Some(&expected));
        }
    }

    #[test]
    fn failures_are_reported_per_farm() {
        let options = PowerCurveOptions {
            wake_losses_model: None,
            ..PowerCurveOptions::default()
        };
        let mut farms = vec![farm("ok", 2, true), farm("bare", 2, false)];
        let results = assign_power_curves(&mut farms, &options);

        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(farms[0].power_curve().is_some());
        assert!(farms[1].power_curve().is_none());
    }
}
