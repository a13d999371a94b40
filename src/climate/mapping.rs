//! Translation between the unit's status fields and the host vocabulary.
//!
//! Values the tables don't know about never produce an error: an unknown mode reads as
//! `Off`/`Idle` and an unknown fan speed reads as no fan mode at all.

use super::{FanMode, HvacAction, HvacMode, SwingMode};
use crate::innova::{Mode, Status, FAN_AUTO, FAN_HIGH, FAN_LOW, FAN_MEDIUM};

/// Degrees either side of the setpoint within which an auto mode unit is idle.
pub const AUTO_DEADBAND: f32 = 1.0;

pub fn hvac_mode(status: &Status) -> HvacMode {
    if !status.power {
        return HvacMode::Off;
    }

    match status.mode {
        Mode::Cooling => HvacMode::Cool,
        Mode::Heating => HvacMode::Heat,
        Mode::Dehumidification => HvacMode::Dry,
        Mode::FanOnly => HvacMode::FanOnly,
        Mode::Auto => HvacMode::Auto,
        Mode::Off | Mode::Unknown => HvacMode::Off,
    }
}

pub fn hvac_action(status: &Status) -> HvacAction {
    if !status.power {
        return HvacAction::Off;
    }

    match status.mode {
        Mode::Cooling => HvacAction::Cooling,
        Mode::Heating => HvacAction::Heating,
        Mode::Dehumidification => HvacAction::Drying,
        Mode::FanOnly => HvacAction::Fan,
        Mode::Auto => auto_action(status.ambient_temp, status.target_temperature),
        Mode::Off | Mode::Unknown => HvacAction::Idle,
    }
}

fn auto_action(current: f32, target: f32) -> HvacAction {
    if current > target + AUTO_DEADBAND {
        HvacAction::Cooling
    } else if current < target - AUTO_DEADBAND {
        HvacAction::Heating
    } else {
        HvacAction::Idle
    }
}

/// Firmware may report any integer here, only 0..=3 have a fan mode.
pub fn fan_mode(speed: i32) -> Option<FanMode> {
    Some(match u8::try_from(speed).ok()? {
        FAN_AUTO => FanMode::Auto,
        FAN_LOW => FanMode::Low,
        FAN_MEDIUM => FanMode::Medium,
        FAN_HIGH => FanMode::High,
        _ => return None,
    })
}

pub fn swing_mode(rotation: bool) -> SwingMode {
    if rotation {
        SwingMode::On
    } else {
        SwingMode::Off
    }
}

/// The unit mode to command for a host mode, or `None` when the unit should be powered off.
pub fn device_mode(mode: HvacMode) -> Option<Mode> {
    Some(match mode {
        HvacMode::Off => return None,
        HvacMode::Cool => Mode::Cooling,
        HvacMode::Heat => Mode::Heating,
        HvacMode::Dry => Mode::Dehumidification,
        HvacMode::FanOnly => Mode::FanOnly,
        HvacMode::Auto => Mode::Auto,
    })
}

pub fn fan_speed(mode: FanMode) -> u8 {
    match mode {
        FanMode::Auto => FAN_AUTO,
        FanMode::Low => FAN_LOW,
        FanMode::Medium => FAN_MEDIUM,
        FanMode::High => FAN_HIGH,
    }
}
