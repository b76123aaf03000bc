//! wf-project: farm definition format, validation and conversion.
//!
//! Farm definitions are plain serde documents (YAML or JSON) describing
//! turbine types, the fleet, the wind farm efficiency and the options of the
//! power curve aggregation. Parsing works on strings; reading and writing
//! files is left to the caller.

pub mod build;
pub mod schema;
pub mod validate;

pub use build::{build_efficiency, build_farm, build_turbine};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_farm_def};

use wf_curves::CurveError;
use wf_farm::{FarmError, PowerCurveOptions, WindFarm};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Build error: {what}")]
    Build { what: String },

    #[error("Farm error: {0}")]
    Farm(#[from] FarmError),

    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(content: &str) -> ProjectResult<FarmDef> {
    let farm: FarmDef = serde_yaml::from_str(content)?;
    validate_farm_def(&farm)?;
    Ok(farm)
}

pub fn to_yaml_string(farm: &FarmDef) -> ProjectResult<String> {
    validate_farm_def(farm)?;
    Ok(serde_yaml::to_string(farm)?)
}

pub fn from_json_str(content: &str) -> ProjectResult<FarmDef> {
    let farm: FarmDef = serde_json::from_str(content)?;
    validate_farm_def(&farm)?;
    Ok(farm)
}

pub fn to_json_string(farm: &FarmDef) -> ProjectResult<String> {
    validate_farm_def(farm)?;
    Ok(serde_json::to_string_pretty(farm)?)
}

/// Parse a YAML farm definition and build the farm and its options.
pub fn load_farm_yaml(content: &str) -> ProjectResult<(WindFarm, PowerCurveOptions)> {
    build_farm(&from_yaml_str(content)?)
}
