//! Error types for curve operations.

use thiserror::Error;
use wf_core::WfError;

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors raised while building or transforming curves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("Empty curve: {what}")]
    Empty { what: &'static str },

    #[error("Length mismatch for {what}: {left} vs {right}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("Wind speeds must be strictly increasing in {what} (index {index})")]
    NotIncreasing { what: &'static str, index: usize },

    #[error("Non-finite value in {what}")]
    NonFinite { what: &'static str },

    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Wake losses model '{model}' needs {expected} efficiency")]
    EfficiencyMismatch {
        model: &'static str,
        expected: &'static str,
    },
}

impl From<WfError> for CurveError {
    fn from(e: WfError) -> Self {
        match e {
            WfError::NonFinite { what, .. } => CurveError::NonFinite { what },
            WfError::InvalidArg { what } => CurveError::InvalidArg { what },
            WfError::Invariant { what } => CurveError::InvalidArg { what },
        }
    }
}

impl From<CurveError> for WfError {
    fn from(e: CurveError) -> Self {
        match e {
            CurveError::NonFinite { what } => WfError::NonFinite {
                what,
                value: f64::NAN,
            },
            CurveError::Empty { what }
            | CurveError::LengthMismatch { what, .. }
            | CurveError::NotIncreasing { what, .. }
            | CurveError::OutOfRange { what, .. }
            | CurveError::InvalidArg { what } => WfError::InvalidArg { what },
            CurveError::EfficiencyMismatch { .. } => WfError::InvalidArg {
                what: "efficiency kind",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CurveError::NotIncreasing {
            what: "power curve",
            index: 3,
        };
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn error_conversion() {
        let err: WfError = CurveError::Empty { what: "power curve" }.into();
        assert!(matches!(err, WfError::InvalidArg { .. }));

        let back: CurveError = WfError::NonFinite {
            what: "power",
            value: f64::NAN,
        }
        .into();
        assert_eq!(back, CurveError::NonFinite { what: "power" });
    }
}
