// libnur-rs/libnur/src/setup/traits.rs

use crate::types::{AntennaId, AntennaMask, Region};
use crate::Result;

/// Raw reflected power measurement of one antenna port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReflectedPower {
    pub i: i32,
    pub q: i32,
    pub divider: i32,
}

/// Module configuration: region, antenna mask and antenna state.
///
/// Implementations cache the module setup; `load` refreshes the cache.
pub trait SetupBackend {
    fn load(&mut self) -> Result<()>;

    fn current_region(&self) -> Region;

    /// Antennas currently enabled for transmission.
    fn antenna_mask(&self) -> AntennaMask;

    /// Write a new antenna mask to the module.
    fn apply_antenna_mask(&mut self, mask: AntennaMask) -> Result<()>;

    /// Antennas known to have something attached.
    fn connected_antennas(&self) -> AntennaMask;

    fn set_antenna_connected(&mut self, antenna: AntennaId, connected: bool);

    /// Measure reflected power on `antenna`. It must be the only enabled one.
    fn reflected_power(&mut self, antenna: AntennaId) -> Result<ReflectedPower>;
}
