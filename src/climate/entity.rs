use log::{debug, warn};

use super::{
    mapping, ClimateState, FanMode, HvacAction, HvacMode, SupportedFeatures, SwingMode,
    TemperatureUnit, PRECISION_WHOLE, TARGET_TEMPERATURE_STEP,
};
use crate::innova::{Device, Mode, Status};

/// Climate entity for a single Innova unit.
///
/// Reads come from the status captured by the last successful [`refresh`](Self::refresh).
/// Writes go straight to the device and are only visible after the next refresh. Device
/// errors are returned as-is.
pub struct InnovaClimate<D: Device> {
    device: D,
    status: Status,
    name: Option<String>,
}

impl<D: Device> InnovaClimate<D> {
    /// Wraps a device, polling it once for the initial status.
    pub fn new(mut device: D) -> Result<Self, D::Error> {
        let status = device.status()?;
        let climate = Self {
            device,
            status,
            name: None,
        };
        climate.warn_unrecognized();
        Ok(climate)
    }

    /// Uses `name` instead of the name reported by the unit.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Polls the unit. On failure the previous status is kept.
    pub fn refresh(&mut self) -> Result<(), D::Error> {
        let status = self.device.status()?;
        debug!("{}: refreshed {:?}", self.label(), status);

        self.status = status;
        self.warn_unrecognized();
        Ok(())
    }

    /// Logs the status values that only read through a fallback. Returns how many there were.
    fn warn_unrecognized(&self) -> usize {
        let mut count = 0;
        if self.status.power && self.status.mode == Mode::Unknown {
            warn!("{}: unit reported an unrecognized mode", self.label());
            count += 1;
        }
        if mapping::fan_mode(self.status.fan_speed).is_none() {
            warn!(
                "{}: unit reported unrecognized fan speed {}",
                self.label(),
                self.status.fan_speed
            );
            count += 1;
        }
        count
    }

    fn label(&self) -> &str {
        self.name().unwrap_or("innova")
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().or(self.status.name.as_deref())
    }

    pub fn unique_id(&self) -> Option<&str> {
        self.status.id.as_deref()
    }

    pub fn supported_features(&self) -> SupportedFeatures {
        SupportedFeatures::INNOVA
    }

    pub fn should_poll(&self) -> bool {
        true
    }

    pub fn precision(&self) -> f32 {
        PRECISION_WHOLE
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        TemperatureUnit::Celsius
    }

    pub fn target_temperature_step(&self) -> f32 {
        TARGET_TEMPERATURE_STEP
    }

    pub fn current_temperature(&self) -> f32 {
        self.status.ambient_temp
    }

    pub fn target_temperature(&self) -> f32 {
        self.status.target_temperature
    }

    pub fn min_temperature(&self) -> f32 {
        self.status.min_temperature
    }

    pub fn max_temperature(&self) -> f32 {
        self.status.max_temperature
    }

    pub fn hvac_mode(&self) -> HvacMode {
        mapping::hvac_mode(&self.status)
    }

    pub fn hvac_action(&self) -> HvacAction {
        mapping::hvac_action(&self.status)
    }

    pub fn hvac_modes(&self) -> &'static [HvacMode] {
        &[
            HvacMode::Off,
            HvacMode::Cool,
            HvacMode::Heat,
            HvacMode::Dry,
            HvacMode::FanOnly,
            HvacMode::Auto,
        ]
    }

    pub fn fan_mode(&self) -> Option<FanMode> {
        mapping::fan_mode(self.status.fan_speed)
    }

    pub fn fan_modes(&self) -> &'static [FanMode] {
        &[FanMode::Auto, FanMode::Low, FanMode::Medium, FanMode::High]
    }

    pub fn swing_mode(&self) -> SwingMode {
        mapping::swing_mode(self.status.rotation)
    }

    pub fn swing_modes(&self) -> &'static [SwingMode] {
        &[SwingMode::Off, SwingMode::On]
    }

    /// Everything the host renders, in one go.
    pub fn state(&self) -> ClimateState {
        let mut state = ClimateState::from(&self.status);
        if let Some(name) = &self.name {
            state.name = Some(name.clone());
        }
        state
    }

    /// Selecting a mode other than `Off` doesn't power the unit on by itself.
    pub fn set_hvac_mode(&mut self, mode: HvacMode) -> Result<(), D::Error> {
        debug!("{}: set hvac mode {}", self.label(), mode);
        match mapping::device_mode(mode) {
            Some(mode) => self.device.set_mode(mode),
            None => self.device.power_off(),
        }
    }

    pub fn set_fan_mode(&mut self, mode: FanMode) -> Result<(), D::Error> {
        debug!("{}: set fan mode {}", self.label(), mode);
        self.device.set_fan_speed(mapping::fan_speed(mode))
    }

    pub fn set_swing_mode(&mut self, mode: SwingMode) -> Result<(), D::Error> {
        debug!("{}: set swing mode {}", self.label(), mode);
        match mode {
            SwingMode::On => self.device.rotation_on(),
            SwingMode::Off => self.device.rotation_off(),
        }
    }

    /// Bounds are left for the device to check. `None` does nothing.
    pub fn set_temperature(&mut self, temperature: Option<f32>) -> Result<(), D::Error> {
        let temperature = match temperature {
            Some(temperature) => temperature,
            None => return Ok(()),
        };

        debug!("{}: set temperature {}", self.label(), temperature);
        self.device.set_temperature(temperature)
    }
}
