pub mod entity;
pub use entity::InnovaClimate;
pub mod mapping;
pub mod service;
pub use service::{ServiceCall, ServiceError};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Whole degrees.
pub const PRECISION_WHOLE: f32 = 1.0;

pub const TARGET_TEMPERATURE_STEP: f32 = 1.0;

// Host vocabulary. The string forms must match the host platform exactly.

/// What the unit is configured to do.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HvacMode {
    Off,
    Cool,
    Heat,
    Dry,
    FanOnly,
    Auto,
}

/// What the unit is currently doing.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HvacAction {
    Off,
    Heating,
    Cooling,
    Drying,
    Fan,
    Idle,
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FanMode {
    Auto,
    Low,
    Medium,
    High,
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SwingMode {
    Off,
    On,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    #[serde(rename = "°C")]
    Celsius,
    #[serde(rename = "°F")]
    Fahrenheit,
}

/// Capabilities the entity advertises to the host.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SupportedFeatures {
    pub target_temperature: bool,
    pub swing_mode: bool,
    pub fan_mode: bool,
}

impl SupportedFeatures {
    pub const INNOVA: SupportedFeatures = SupportedFeatures {
        target_temperature: true,
        swing_mode: true,
        fan_mode: true,
    };
}

/// The attributes the host renders for the entity, computed from the latest status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClimateState {
    pub name: Option<String>,
    pub unique_id: Option<String>,
    pub hvac_mode: HvacMode,
    pub hvac_action: HvacAction,
    pub current_temperature: f32,
    #[serde(rename = "temperature")]
    pub target_temperature: f32,
    pub min_temp: f32,
    pub max_temp: f32,
    pub fan_mode: Option<FanMode>,
    pub swing_mode: SwingMode,
}

impl From<&crate::innova::Status> for ClimateState {
    fn from(status: &crate::innova::Status) -> Self {
        Self {
            name: status.name.clone(),
            unique_id: status.id.clone(),
            hvac_mode: mapping::hvac_mode(status),
            hvac_action: mapping::hvac_action(status),
            current_temperature: status.ambient_temp,
            target_temperature: status.target_temperature,
            min_temp: status.min_temperature,
            max_temp: status.max_temperature,
            fan_mode: mapping::fan_mode(status.fan_speed),
            swing_mode: mapping::swing_mode(status.rotation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::innova::{Mode, Status};
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_labels() {
        let modes: Vec<_> = HvacMode::iter().map(|m| m.to_string()).collect();
        assert_eq!(modes, ["off", "cool", "heat", "dry", "fan_only", "auto"]);

        let actions: Vec<_> = HvacAction::iter().map(|a| a.to_string()).collect();
        assert_eq!(
            actions,
            ["off", "heating", "cooling", "drying", "fan", "idle"]
        );

        assert_eq!(FanMode::from_str("medium").unwrap(), FanMode::Medium);
        assert!(FanMode::from_str("turbo").is_err());
        assert_eq!(SwingMode::On.as_ref(), "on");
    }

    #[test]
    fn test_state_json() {
        let status = Status {
            name: Some("Bedroom".into()),
            id: Some("IN-7".into()),
            power: true,
            mode: Mode::FanOnly,
            fan_speed: 9,
            ..Default::default()
        };

        let value = serde_json::to_value(ClimateState::from(&status)).unwrap();
        assert_eq!(value["hvac_mode"], "fan_only");
        assert_eq!(value["hvac_action"], "fan");
        assert_eq!(value["fan_mode"], serde_json::Value::Null);
        assert_eq!(value["swing_mode"], "off");
        assert_eq!(value["temperature"], 22.0);
        assert_eq!(value["unique_id"], "IN-7");
    }

    #[test]
    fn test_unit_json() {
        assert_eq!(
            serde_json::to_string(&TemperatureUnit::Celsius).unwrap(),
            "\"°C\""
        );
    }
}
