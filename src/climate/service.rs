use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{FanMode, HvacMode, InnovaClimate, SwingMode};
use crate::innova::Device;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failed to parse service call: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A host service call against the climate entity, with labels as the host sends them.
///
/// ```json
/// {"service": "set_fan_mode", "fan_mode": "medium"}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "service", rename_all = "snake_case")]
pub enum ServiceCall {
    SetHvacMode {
        hvac_mode: String,
    },
    SetFanMode {
        fan_mode: String,
    },
    SetSwingMode {
        swing_mode: String,
    },
    SetTemperature {
        #[serde(default)]
        temperature: Option<f32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored,
}

impl FromStr for ServiceCall {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl ServiceCall {
    /// Runs the call against `climate`. Labels the entity doesn't offer and a missing
    /// temperature are ignored without touching the device.
    pub fn apply<D: Device>(&self, climate: &mut InnovaClimate<D>) -> Result<Outcome, D::Error> {
        match self {
            ServiceCall::SetHvacMode { hvac_mode } => match HvacMode::from_str(hvac_mode) {
                Ok(mode) => climate.set_hvac_mode(mode)?,
                Err(_) => return Ok(ignored("hvac_mode", hvac_mode)),
            },
            ServiceCall::SetFanMode { fan_mode } => match FanMode::from_str(fan_mode) {
                Ok(mode) => climate.set_fan_mode(mode)?,
                Err(_) => return Ok(ignored("fan_mode", fan_mode)),
            },
            ServiceCall::SetSwingMode { swing_mode } => match SwingMode::from_str(swing_mode) {
                Ok(mode) => climate.set_swing_mode(mode)?,
                Err(_) => return Ok(ignored("swing_mode", swing_mode)),
            },
            ServiceCall::SetTemperature { temperature: None } => return Ok(Outcome::Ignored),
            ServiceCall::SetTemperature { temperature } => climate.set_temperature(*temperature)?,
        }

        Ok(Outcome::Applied)
    }
}

fn ignored(attribute: &str, label: &str) -> Outcome {
    warn!("ignoring unsupported {}: '{}'", attribute, label);
    Outcome::Ignored
}
