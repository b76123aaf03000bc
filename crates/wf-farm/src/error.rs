//! Error types for wind farm operations.

use thiserror::Error;
use wf_core::error::WfError;
use wf_curves::{CurveError, WakeLossesModel};

/// Errors that can occur while deriving wind farm quantities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FarmError {
    #[error(
        "For an aggregated wind farm power curve each wind turbine needs a power curve, \
         but wind turbine '{turbine}' has none"
    )]
    MissingPowerCurve { turbine: String },

    #[error("Wind farm '{farm}' needs an efficiency for wake losses model '{model}'")]
    MissingEfficiency { farm: String, model: WakeLossesModel },

    #[error(
        "Smoothing with the turbulence intensity method needs a turbulence intensity \
         or a roughness length"
    )]
    MissingTurbulenceInput,

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Numeric error: {what}")]
    Numeric { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),
}

pub type FarmResult<T> = Result<T, FarmError>;

impl From<WfError> for FarmError {
    fn from(e: WfError) -> Self {
        match e {
            WfError::NonFinite { what, .. } => FarmError::Numeric { what },
            WfError::InvalidArg { what } => FarmError::InvalidArg { what },
            WfError::Invariant { what } => FarmError::Numeric { what },
        }
    }
}

impl From<FarmError> for WfError {
    fn from(e: FarmError) -> Self {
        match e {
            FarmError::MissingPowerCurve { .. } => WfError::InvalidArg {
                what: "missing power curve",
            },
            FarmError::MissingEfficiency { .. } => WfError::InvalidArg {
                what: "missing efficiency",
            },
            FarmError::MissingTurbulenceInput => WfError::InvalidArg {
                what: "missing turbulence input",
            },
            FarmError::NonPhysical { what } => WfError::InvalidArg { what },
            FarmError::Numeric { what } => WfError::Invariant { what },
            FarmError::InvalidArg { what } => WfError::InvalidArg { what },
            FarmError::Curve(e) => e.into(),
        }
    }
}
