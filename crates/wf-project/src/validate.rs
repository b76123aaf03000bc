//! Farm definition validation.

use crate::schema::{EfficiencyDef, FarmDef, OptionsDef, TurbineDef};
use std::collections::HashSet;
use wf_curves::{GaussianSmoothing, Spread};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: impl Into<String>, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_farm_def(farm: &FarmDef) -> Result<(), ValidationError> {
    if farm.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: farm.version,
        });
    }
    if farm.name.trim().is_empty() {
        return Err(invalid("name", "\"\"", "farm name must not be empty"));
    }

    let mut turbine_ids = HashSet::new();
    for turbine in &farm.turbines {
        if !turbine_ids.insert(turbine.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: turbine.id.clone(),
                context: "turbines".to_string(),
            });
        }
        validate_turbine(turbine)?;
    }

    if farm.fleet.is_empty() {
        return Err(invalid("fleet", "[]", "fleet must not be empty"));
    }
    for entry in &farm.fleet {
        if !turbine_ids.contains(entry.turbine_id.as_str()) {
            return Err(ValidationError::MissingReference {
                id: entry.turbine_id.clone(),
                context: "fleet turbine_id".to_string(),
            });
        }
        if entry.count == 0 {
            return Err(invalid(
                format!("fleet[{}].count", entry.turbine_id),
                entry.count,
                "number of turbines must be positive",
            ));
        }
    }

    if let Some(efficiency) = &farm.efficiency {
        validate_efficiency(efficiency)?;
    }
    validate_options(&farm.options)
}

fn validate_turbine(turbine: &TurbineDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("turbines[{}].{}", turbine.id, name);

    if !(turbine.hub_height_m.is_finite() && turbine.hub_height_m > 0.0) {
        return Err(invalid(
            field("hub_height_m"),
            turbine.hub_height_m,
            "must be positive",
        ));
    }
    if !(turbine.nominal_power_w.is_finite() && turbine.nominal_power_w > 0.0) {
        return Err(invalid(
            field("nominal_power_w"),
            turbine.nominal_power_w,
            "must be positive",
        ));
    }
    if let Some(curve) = &turbine.power_curve {
        if curve.is_empty() {
            return Err(invalid(field("power_curve"), "[]", "must not be empty"));
        }
        if curve.windows(2).any(|w| w[1].wind_speed <= w[0].wind_speed) {
            return Err(invalid(
                field("power_curve"),
                "...",
                "wind speeds must be strictly increasing",
            ));
        }
        if let Some(p) = curve
            .iter()
            .find(|p| !p.wind_speed.is_finite() || !p.power.is_finite() || p.power < 0.0)
        {
            return Err(invalid(
                field("power_curve"),
                format!("({}, {})", p.wind_speed, p.power),
                "points must be finite with non-negative power",
            ));
        }
    }
    Ok(())
}

fn validate_efficiency(efficiency: &EfficiencyDef) -> Result<(), ValidationError> {
    let in_range = |e: f64| (0.0..=1.0).contains(&e);
    match efficiency {
        EfficiencyDef::Constant(e) if !in_range(*e) => {
            Err(invalid("efficiency", e, "must be within [0, 1]"))
        }
        EfficiencyDef::Curve(points) => {
            if points.is_empty() {
                return Err(invalid("efficiency", "[]", "must not be empty"));
            }
            if let Some(p) = points.iter().find(|p| !in_range(p.efficiency)) {
                return Err(invalid(
                    format!("efficiency[{}]", p.wind_speed),
                    p.efficiency,
                    "must be within [0, 1]",
                ));
            }
            Ok(())
        }
        EfficiencyDef::Constant(_) => Ok(()),
    }
}

fn validate_options(options: &OptionsDef) -> Result<(), ValidationError> {
    if !(options.block_width.is_finite() && options.block_width > 0.0) {
        return Err(invalid(
            "options.block_width",
            options.block_width,
            "must be positive",
        ));
    }
    if !(options.wind_speed_range.is_finite() && options.wind_speed_range > 0.0) {
        return Err(invalid(
            "options.wind_speed_range",
            options.wind_speed_range,
            "must be positive",
        ));
    }
    if let Err(e) = GaussianSmoothing::new(Spread::StaffellPfenninger)
        .with_block_width(options.block_width)
        .with_wind_speed_range(options.wind_speed_range)
        .validate()
    {
        return Err(invalid(
            "options.block_width",
            options.block_width,
            &e.to_string(),
        ));
    }
    if let Some(ti) = options
        .turbulence_intensity
        .filter(|ti| !(ti.is_finite() && *ti >= 0.0))
    {
        return Err(invalid(
            "options.turbulence_intensity",
            ti,
            "must not be negative",
        ));
    }
    if let Some(z0) = options
        .roughness_length
        .filter(|z0| !(z0.is_finite() && *z0 > 0.0))
    {
        return Err(invalid(
            "options.roughness_length",
            z0,
            "must be positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CurvePointDef, EfficiencyPointDef, FleetEntryDef};

    fn turbine(id: &str) -> TurbineDef {
        TurbineDef {
            id: id.to_string(),
            name: format!("type {id}"),
            hub_height_m: 100.0,
            nominal_power_w: 2.0e6,
            power_curve: Some(vec![
                CurvePointDef {
                    wind_speed: 3.0,
                    power: 0.0,
                },
                CurvePointDef {
                    wind_speed: 12.0,
                    power: 2.0e6,
                },
            ]),
        }
    }

    fn farm() -> FarmDef {
        FarmDef {
            version: 1,
            name: "test".to_string(),
            coordinates: None,
            efficiency: Some(EfficiencyDef::Constant(0.9)),
            turbines: vec![turbine("a")],
            fleet: vec![FleetEntryDef {
                turbine_id: "a".to_string(),
                count: 3,
            }],
            options: OptionsDef::default(),
        }
    }

    #[test]
    fn valid_farm_passes() {
        validate_farm_def(&farm()).unwrap();
    }

    #[test]
    fn duplicate_turbine_ids() {
        let mut f = farm();
        f.turbines.push(turbine("a"));
        assert!(matches!(
            validate_farm_def(&f),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn unknown_fleet_reference() {
        let mut f = farm();
        f.fleet[0].turbine_id = "missing".to_string();
        assert!(matches!(
            validate_farm_def(&f),
            Err(ValidationError::MissingReference { .. })
        ));
    }

    #[test]
    fn future_version_is_rejected() {
        let mut f = farm();
        f.version = LATEST_VERSION + 1;
        assert_eq!(
            validate_farm_def(&f),
            Err(ValidationError::UnsupportedVersion {
                version: LATEST_VERSION + 1
            })
        );
    }

    #[test]
    fn out_of_range_values() {
        let mut f = farm();
        f.fleet[0].count = 0;
        assert!(validate_farm_def(&f).is_err());

        let mut f = farm();
        f.turbines[0].hub_height_m = -1.0;
        assert!(validate_farm_def(&f).is_err());

        let mut f = farm();
        f.efficiency = Some(EfficiencyDef::Curve(vec![EfficiencyPointDef {
            wind_speed: 5.0,
            efficiency: 1.5,
        }]));
        assert!(validate_farm_def(&f).is_err());

        let mut f = farm();
        f.options.roughness_length = Some(0.0);
        assert!(validate_farm_def(&f).is_err());

        let mut f = farm();
        f.options.block_width = 1e-12;
        let err = validate_farm_def(&f).unwrap_err();
        assert!(err.to_string().contains("smoothing block points"));
    }

    #[test]
    fn unsorted_power_curve_is_rejected() {
        let mut f = farm();
        if let Some(curve) = f.turbines[0].power_curve.as_mut() {
            curve.reverse();
        }
        let err = validate_farm_def(&f).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }
}
