pub mod device;
pub use device::Device;
pub mod sim;
pub use sim::{Command, Simulator, SimulatorError};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

// Fan speeds as reported by the unit
pub const FAN_AUTO: u8 = 0;
pub const FAN_LOW: u8 = 1;
pub const FAN_MEDIUM: u8 = 2;
pub const FAN_HIGH: u8 = 3;

// The last state polled from the unit, replaced wholesale on every refresh
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Status {
    // Device reported name, if any
    #[serde(default)]
    pub name: Option<String>,

    // Serial number of the unit
    #[serde(default)]
    pub id: Option<String>,

    pub power: bool,

    pub mode: Mode,

    // 0 = auto, 1..=3 = low..high. Firmware may report other values.
    pub fan_speed: i32,

    // Louver swing
    pub rotation: bool,

    // Room temperature in Celsius
    pub ambient_temp: f32,

    // Setpoint in Celsius
    pub target_temperature: f32,

    pub min_temperature: f32,
    pub max_temperature: f32,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            name: None,
            id: None,
            power: false,
            mode: Mode::Off,
            fan_speed: FAN_AUTO.into(),
            rotation: false,
            ambient_temp: 20.0,
            target_temperature: 22.0,
            min_temperature: 16.0,
            max_temperature: 31.0,
        }
    }
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    Cooling,
    Heating,
    Dehumidification,
    FanOnly,
    Auto,
    Off,

    // Anything the firmware reports that isn't listed above
    #[serde(other)]
    Unknown,
}

impl Mode {
    /// Whether the unit can be commanded into this mode.
    pub fn is_settable(&self) -> bool {
        !matches!(self, Mode::Off | Mode::Unknown)
    }
}
