// libnur-rs/libnur/src/setup/mod.rs

pub mod antenna;
pub mod mock;
pub mod traits;

pub use antenna::{auto_detect, AntennaSelection, MaskGuard};
pub use mock::MockSetup;
pub use traits::{ReflectedPower, SetupBackend};
