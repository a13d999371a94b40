use std::{fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{climate::InnovaClimate, innova::Device};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing host")]
    MissingHost,

    #[error("invalid host: '{0}'")]
    InvalidHost(String),

    #[error("failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum SetupError<E> {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("device error: {0}")]
    Device(E),
}

/// Platform configuration for one unit.
///
/// ```json
/// {"host": "192.168.1.20", "name": "Living room"}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    #[serde(default)]
    pub host: String,

    // Overrides the name reported by the unit
    #[serde(default)]
    pub name: Option<String>,
}

impl PlatformConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            name: None,
        }
    }

    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: PlatformConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ConfigError::MissingHost);
        }
        if host.len() != self.host.len() || host.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidHost(self.host.clone()));
        }
        Ok(())
    }
}

/// Connects to the configured unit with `connect`, polls it once and returns the entity
/// for the host to register.
pub fn setup_platform<D, F>(
    config: &PlatformConfig,
    connect: F,
) -> Result<InnovaClimate<D>, SetupError<D::Error>>
where
    D: Device,
    F: FnOnce(&str) -> Result<D, D::Error>,
{
    config.validate()?;

    let device = connect(&config.host).map_err(SetupError::Device)?;
    let climate = InnovaClimate::new(device).map_err(SetupError::Device)?;
    let climate = match &config.name {
        Some(name) => climate.with_name(name.clone()),
        None => climate,
    };

    info!(
        "set up {} at {}",
        climate.name().unwrap_or("innova"),
        config.host
    );
    Ok(climate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::innova::{Simulator, SimulatorError, Status};

    #[test]
    fn test_from_json() {
        let config = PlatformConfig::from_json(r#"{"host": "192.168.1.20"}"#).unwrap();
        assert_eq!(config, PlatformConfig::new("192.168.1.20"));

        assert!(matches!(
            PlatformConfig::from_json("{}"),
            Err(ConfigError::MissingHost)
        ));
        assert!(matches!(
            PlatformConfig::from_json(r#"{"host": "   "}"#),
            Err(ConfigError::MissingHost)
        ));
        assert!(matches!(
            PlatformConfig::from_json(r#"{"host": "my unit"}"#),
            Err(ConfigError::InvalidHost(_))
        ));
        assert!(matches!(
            PlatformConfig::from_json("host"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_setup_platform() {
        let config = PlatformConfig {
            host: "192.168.1.20".into(),
            name: Some("Hallway".into()),
        };

        let climate = setup_platform(&config, |host| {
            Ok(Simulator::new(host, Status::default()))
        })
        .unwrap();
        assert_eq!(climate.name(), Some("Hallway"));
        assert_eq!(climate.device().host(), "192.168.1.20");
        assert_eq!(climate.device().commands().len(), 1);
    }

    #[test]
    fn test_setup_errors() {
        let unreachable = |host: &str| -> Result<Simulator, SimulatorError> {
            let mut sim = Simulator::new(host, Status::default());
            sim.fail_next(1);
            Ok(sim)
        };

        let result = setup_platform(&PlatformConfig::new("10.0.0.9"), unreachable);
        assert!(matches!(
            result,
            Err(SetupError::Device(SimulatorError::Unreachable(_)))
        ));

        let result = setup_platform(&PlatformConfig::new(""), unreachable);
        assert!(matches!(
            result,
            Err(SetupError::Config(ConfigError::MissingHost))
        ));
    }
}
