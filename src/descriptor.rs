use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::{
    climate::{FanMode, HvacMode, InnovaClimate, SupportedFeatures, SwingMode, TemperatureUnit},
    innova::Device,
};

/*
{
   "platform": "innova",
   "host": "192.168.1.20",
   "supported_features": { "target_temperature": true, "swing_mode": true, "fan_mode": true },
   "hvac_modes": [ "off", "cool", "heat", "dry", "fan_only", "auto" ],
   "fan_modes": [ "auto", "low", "medium", "high" ],
   "swing_modes": [ "off", "on" ],
   "min_temp": 16.0,
   "max_temp": 31.0,
   ...
*/

/// Everything the host needs to know to register the entity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EntityDescriptor {
    pub platform: String,
    pub host: String,
    pub name: Option<String>,
    pub unique_id: Option<String>,
    pub should_poll: bool,
    pub supported_features: SupportedFeatures,
    pub hvac_modes: Vec<HvacMode>,
    pub fan_modes: Vec<FanMode>,
    pub swing_modes: Vec<SwingMode>,
    pub min_temp: f32,
    pub max_temp: f32,
    pub precision: f32,
    pub target_temperature_step: f32,
    pub temperature_unit: TemperatureUnit,
}

impl EntityDescriptor {
    pub const PLATFORM: &'static str = "innova";

    pub fn new<D: Device>(host: &str, climate: &InnovaClimate<D>) -> Self {
        Self {
            platform: Self::PLATFORM.into(),
            host: host.into(),
            name: climate.name().map(String::from),
            unique_id: climate.unique_id().map(String::from),
            should_poll: climate.should_poll(),
            supported_features: climate.supported_features(),
            hvac_modes: climate.hvac_modes().to_vec(),
            fan_modes: climate.fan_modes().to_vec(),
            swing_modes: climate.swing_modes().to_vec(),
            min_temp: climate.min_temperature(),
            max_temp: climate.max_temperature(),
            precision: climate.precision(),
            target_temperature_step: climate.target_temperature_step(),
            temperature_unit: climate.temperature_unit(),
        }
    }

    /// Writes the descriptor as pretty JSON followed by a newline.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::innova::{Simulator, Status};

    #[test]
    fn test_describe() {
        let status = Status {
            id: Some("IN-99".into()),
            min_temperature: 17.0,
            max_temperature: 30.0,
            ..Default::default()
        };
        let climate = InnovaClimate::new(Simulator::new("10.0.0.2", status)).unwrap();
        let descriptor = EntityDescriptor::new("10.0.0.2", &climate);

        assert_eq!(descriptor.unique_id.as_deref(), Some("IN-99"));
        assert_eq!(descriptor.min_temp, 17.0);
        assert_eq!(descriptor.max_temp, 30.0);

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["platform"], "innova");
        assert_eq!(
            value["hvac_modes"],
            serde_json::json!(["off", "cool", "heat", "dry", "fan_only", "auto"])
        );
        assert_eq!(
            value["fan_modes"],
            serde_json::json!(["auto", "low", "medium", "high"])
        );
        assert_eq!(value["swing_modes"], serde_json::json!(["off", "on"]));
        assert_eq!(value["supported_features"]["fan_mode"], true);
        assert_eq!(value["temperature_unit"], "°C");
        assert_eq!(value["precision"], 1.0);

        let mut out = Vec::new();
        descriptor.write_to(&mut out).unwrap();
        let written: EntityDescriptor = serde_json::from_slice(&out).unwrap();
        assert_eq!(written, descriptor);
        assert_eq!(out.last(), Some(&b'\n'));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_write_to_closed_pipe() {
        let climate = InnovaClimate::new(Simulator::new("10.0.0.2", Status::default())).unwrap();
        let err = EntityDescriptor::new("10.0.0.2", &climate)
            .write_to(ClosedPipe)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
