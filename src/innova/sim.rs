use log::debug;
use thiserror::Error;

use super::{Device, Mode, Status, FAN_HIGH};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulatorError {
    #[error("unit at {0} is unreachable")]
    Unreachable(String),

    #[error("mode {0} can't be set")]
    UnsupportedMode(Mode),

    #[error("fan speed {0} out of range. Must be between 0 and 3")]
    FanSpeedOutOfRange(u8),

    #[error("temperature {value} out of range. Must be between {min} and {max}")]
    TemperatureOutOfRange { value: f32, min: f32, max: f32 },
}

/// A command accepted by the simulated unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Status,
    PowerOff,
    SetMode(Mode),
    SetFanSpeed(u8),
    RotationOn,
    RotationOff,
    SetTemperature(f32),
}

/// An in-memory unit that applies commands to its own state.
#[derive(Debug, Clone)]
pub struct Simulator {
    host: String,
    status: Status,
    implicit_power_on: bool,
    failures: usize,
    commands: Vec<Command>,
}

impl Simulator {
    pub fn new(host: impl Into<String>, status: Status) -> Self {
        Self {
            host: host.into(),
            status,
            implicit_power_on: false,
            failures: 0,
            commands: Vec::new(),
        }
    }

    /// Power the unit on whenever a mode is set. Real firmware behavior here is unknown,
    /// so this is off unless asked for.
    pub fn with_implicit_power_on(mut self, enabled: bool) -> Self {
        self.implicit_power_on = enabled;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The unit's own state, regardless of what has been polled.
    pub fn state(&self) -> &Status {
        &self.status
    }

    pub fn state_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Makes the next `count` calls fail as if the unit was unreachable.
    pub fn fail_next(&mut self, count: usize) {
        self.failures = count;
    }

    /// Commands accepted so far, oldest first.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    fn accept(&mut self, command: Command) -> Result<(), SimulatorError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(SimulatorError::Unreachable(self.host.clone()));
        }

        match command {
            Command::Status => {}
            Command::PowerOff => self.status.power = false,
            Command::SetMode(mode) => {
                if !mode.is_settable() {
                    return Err(SimulatorError::UnsupportedMode(mode));
                }
                self.status.mode = mode;
                if self.implicit_power_on {
                    self.status.power = true;
                }
            }
            Command::SetFanSpeed(speed) => {
                if speed > FAN_HIGH {
                    return Err(SimulatorError::FanSpeedOutOfRange(speed));
                }
                self.status.fan_speed = speed.into();
            }
            Command::RotationOn => self.status.rotation = true,
            Command::RotationOff => self.status.rotation = false,
            Command::SetTemperature(value) => {
                let (min, max) = (self.status.min_temperature, self.status.max_temperature);
                if !(min..=max).contains(&value) {
                    return Err(SimulatorError::TemperatureOutOfRange { value, min, max });
                }
                self.status.target_temperature = value;
            }
        }

        debug!("{}: accepted {:?}", self.host, command);
        self.commands.push(command);
        Ok(())
    }
}

impl Device for Simulator {
    type Error = SimulatorError;

    fn status(&mut self) -> Result<Status, Self::Error> {
        self.accept(Command::Status)?;
        Ok(self.status.clone())
    }

    fn power_off(&mut self) -> Result<(), Self::Error> {
        self.accept(Command::PowerOff)
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error> {
        self.accept(Command::SetMode(mode))
    }

    fn set_fan_speed(&mut self, speed: u8) -> Result<(), Self::Error> {
        self.accept(Command::SetFanSpeed(speed))
    }

    fn rotation_on(&mut self) -> Result<(), Self::Error> {
        self.accept(Command::RotationOn)
    }

    fn rotation_off(&mut self) -> Result<(), Self::Error> {
        self.accept(Command::RotationOff)
    }

    fn set_temperature(&mut self, temperature: f32) -> Result<(), Self::Error> {
        self.accept(Command::SetTemperature(temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn powered() -> Status {
        Status {
            power: true,
            mode: Mode::Cooling,
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_commands() {
        let mut sim = Simulator::new("10.0.0.5", powered());
        sim.set_mode(Mode::Heating).unwrap();
        sim.set_fan_speed(3).unwrap();
        sim.rotation_on().unwrap();
        sim.set_temperature(25.0).unwrap();

        let status = sim.status().unwrap();
        assert_eq!(status.mode, Mode::Heating);
        assert_eq!(status.fan_speed, 3);
        assert!(status.rotation);
        assert_eq!(status.target_temperature, 25.0);

        sim.power_off().unwrap();
        assert!(!sim.state().power);
        assert_eq!(sim.commands().len(), 6);
    }

    #[test]
    fn test_set_mode_keeps_power() {
        let mut sim = Simulator::new("10.0.0.5", Status::default());
        sim.set_mode(Mode::Cooling).unwrap();
        assert!(!sim.state().power);

        let mut sim = Simulator::new("10.0.0.5", Status::default()).with_implicit_power_on(true);
        sim.set_mode(Mode::Cooling).unwrap();
        assert!(sim.state().power);
    }

    #[test]
    fn test_rejects_invalid() {
        let mut sim = Simulator::new("10.0.0.5", powered());
        assert_eq!(
            sim.set_mode(Mode::Off),
            Err(SimulatorError::UnsupportedMode(Mode::Off))
        );
        assert_eq!(
            sim.set_fan_speed(4),
            Err(SimulatorError::FanSpeedOutOfRange(4))
        );
        assert!(matches!(
            sim.set_temperature(40.0),
            Err(SimulatorError::TemperatureOutOfRange { .. })
        ));
        assert!(sim.commands().is_empty());
        assert_eq!(sim.state(), &powered());
    }

    #[test]
    fn test_fail_next() {
        let mut sim = Simulator::new("10.0.0.5", powered());
        sim.fail_next(2);
        assert_eq!(
            sim.status(),
            Err(SimulatorError::Unreachable("10.0.0.5".into()))
        );
        assert!(sim.rotation_on().is_err());
        assert!(!sim.state().rotation);
        assert!(sim.rotation_on().is_ok());
        assert_eq!(sim.take_commands(), vec![Command::RotationOn]);
        assert!(sim.commands().is_empty());
    }
}
