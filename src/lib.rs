pub mod climate;
pub mod config;
pub mod descriptor;
pub mod innova;

pub use climate::{ClimateState, InnovaClimate, ServiceCall};
pub use config::{setup_platform, PlatformConfig};
pub use descriptor::EntityDescriptor;
pub use innova::{Device, Simulator, Status};
