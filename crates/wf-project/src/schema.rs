//! Farm definition schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmDef {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<CoordinatesDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<EfficiencyDef>,
    #[serde(default)]
    pub turbines: Vec<TurbineDef>,
    #[serde(default)]
    pub fleet: Vec<FleetEntryDef>,
    #[serde(default)]
    pub options: OptionsDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CoordinatesDef {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurbineDef {
    pub id: String,
    pub name: String,
    pub hub_height_m: f64,
    pub nominal_power_w: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_curve: Option<Vec<CurvePointDef>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurvePointDef {
    pub wind_speed: f64,
    pub power: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FleetEntryDef {
    pub turbine_id: String,
    pub count: u32,
}

/// Either one efficiency for all wind speeds or a wind speed table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EfficiencyDef {
    Constant(f64),
    Curve(Vec<EfficiencyPointDef>),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EfficiencyPointDef {
    pub wind_speed: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WakeLossesModelDef {
    #[default]
    PowerEfficiencyCurve,
    ConstantEfficiency,
    None,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StandardDeviationMethodDef {
    #[default]
    TurbulenceIntensity,
    #[serde(rename = "Staffell_Pfenninger", alias = "staffell_pfenninger")]
    StaffellPfenninger,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingOrderDef {
    TurbinePowerCurves,
    #[default]
    WindFarmPowerCurves,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OptionsDef {
    pub wake_losses_model: WakeLossesModelDef,
    pub smoothing: bool,
    pub block_width: f64,
    pub standard_deviation_method: StandardDeviationMethodDef,
    pub smoothing_order: SmoothingOrderDef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbulence_intensity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roughness_length: Option<f64>,
    pub wind_speed_range: f64,
}

impl Default for OptionsDef {
    fn default() -> Self {
        Self {
            wake_losses_model: WakeLossesModelDef::default(),
            smoothing: false,
            block_width: 0.5,
            standard_deviation_method: StandardDeviationMethodDef::default(),
            smoothing_order: SmoothingOrderDef::default(),
            turbulence_intensity: None,
            roughness_length: None,
            wind_speed_range: 15.0,
        }
    }
}
