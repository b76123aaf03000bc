//! Conversion of validated definitions into farm model types.

use crate::schema::{
    EfficiencyDef, FarmDef, OptionsDef, SmoothingOrderDef, StandardDeviationMethodDef, TurbineDef,
    WakeLossesModelDef,
};
use crate::validate::validate_farm_def;
use crate::{ProjectError, ProjectResult};
use std::collections::HashMap;
use std::sync::Arc;
use wf_core::units::{m, w};
use wf_curves::{Efficiency, EfficiencyCurve, PowerCurve, WakeLossesModel};
use wf_farm::{
    Coordinates, FleetEntry, PowerCurveOptions, SmoothingOrder, StandardDeviationMethod, WindFarm,
    WindTurbine, WindTurbineModel,
};

impl From<&OptionsDef> for PowerCurveOptions {
    fn from(def: &OptionsDef) -> Self {
        Self {
            wake_losses_model: match def.wake_losses_model {
                WakeLossesModelDef::PowerEfficiencyCurve => {
                    Some(WakeLossesModel::PowerEfficiencyCurve)
                }
                WakeLossesModelDef::ConstantEfficiency => Some(WakeLossesModel::ConstantEfficiency),
                WakeLossesModelDef::None => None,
            },
            smoothing: def.smoothing,
            block_width: def.block_width,
            standard_deviation_method: match def.standard_deviation_method {
                StandardDeviationMethodDef::TurbulenceIntensity => {
                    StandardDeviationMethod::TurbulenceIntensity
                }
                StandardDeviationMethodDef::StaffellPfenninger => {
                    StandardDeviationMethod::StaffellPfenninger
                }
            },
            smoothing_order: match def.smoothing_order {
                SmoothingOrderDef::TurbinePowerCurves => SmoothingOrder::TurbinePowerCurves,
                SmoothingOrderDef::WindFarmPowerCurves => SmoothingOrder::WindFarmPowerCurves,
            },
            turbulence_intensity: def.turbulence_intensity,
            roughness_length: def.roughness_length,
            wind_speed_range: def.wind_speed_range,
        }
    }
}

pub fn build_turbine(def: &TurbineDef) -> ProjectResult<WindTurbine> {
    let turbine = WindTurbine::new(def.name.clone(), m(def.hub_height_m), w(def.nominal_power_w))?;
    Ok(match &def.power_curve {
        Some(points) => {
            let curve = PowerCurve::from_pairs(points.iter().map(|p| (p.wind_speed, p.power)))?;
            turbine.with_power_curve(curve)
        }
        None => turbine,
    })
}

pub fn build_efficiency(def: &EfficiencyDef) -> ProjectResult<Efficiency> {
    Ok(match def {
        EfficiencyDef::Constant(e) => Efficiency::constant(*e)?,
        EfficiencyDef::Curve(points) => Efficiency::Curve(EfficiencyCurve::from_pairs(
            points.iter().map(|p| (p.wind_speed, p.efficiency)),
        )?),
    })
}

/// Validate `def` and build the farm it describes together with its power
/// curve options.
pub fn build_farm(def: &FarmDef) -> ProjectResult<(WindFarm, PowerCurveOptions)> {
    validate_farm_def(def)?;

    let mut turbines: HashMap<&str, Arc<dyn WindTurbineModel>> = HashMap::new();
    for turbine in &def.turbines {
        turbines.insert(turbine.id.as_str(), Arc::new(build_turbine(turbine)?));
    }

    let fleet = def
        .fleet
        .iter()
        .map(|entry| {
            let turbine = turbines.get(entry.turbine_id.as_str()).ok_or_else(|| {
                ProjectError::Build {
                    what: format!("unknown turbine '{}'", entry.turbine_id),
                }
            })?;
            Ok(FleetEntry::new(Arc::clone(turbine), entry.count)?)
        })
        .collect::<ProjectResult<Vec<_>>>()?;

    let mut farm = WindFarm::new(def.name.clone(), fleet);
    if let Some(c) = def.coordinates {
        farm = farm.with_coordinates(Coordinates {
            lat: c.lat,
            lon: c.lon,
        });
    }
    if let Some(efficiency) = &def.efficiency {
        farm = farm.with_efficiency(build_efficiency(efficiency)?);
    }

    Ok((farm, PowerCurveOptions::from(&def.options)))
}
