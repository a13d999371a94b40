use super::{Mode, Status};

/// A handle to a single unit. Every call blocks until the unit answers or fails.
pub trait Device {
    type Error;

    /// Fetches the current state of the unit.
    fn status(&mut self) -> Result<Status, Self::Error>;

    fn power_off(&mut self) -> Result<(), Self::Error>;
    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error>;
    fn set_fan_speed(&mut self, speed: u8) -> Result<(), Self::Error>;
    fn rotation_on(&mut self) -> Result<(), Self::Error>;
    fn rotation_off(&mut self) -> Result<(), Self::Error>;
    fn set_temperature(&mut self, temperature: f32) -> Result<(), Self::Error>;
}

impl<D: Device + ?Sized> Device for Box<D> {
    type Error = D::Error;

    fn status(&mut self) -> Result<Status, Self::Error> {
        (**self).status()
    }

    fn power_off(&mut self) -> Result<(), Self::Error> {
        (**self).power_off()
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error> {
        (**self).set_mode(mode)
    }

    fn set_fan_speed(&mut self, speed: u8) -> Result<(), Self::Error> {
        (**self).set_fan_speed(speed)
    }

    fn rotation_on(&mut self) -> Result<(), Self::Error> {
        (**self).rotation_on()
    }

    fn rotation_off(&mut self) -> Result<(), Self::Error> {
        (**self).rotation_off()
    }

    fn set_temperature(&mut self, temperature: f32) -> Result<(), Self::Error> {
        (**self).set_temperature(temperature)
    }
}
