// libnur-rs/libnur/src/setup/mock.rs

use std::collections::VecDeque;

use crate::setup::traits::{ReflectedPower, SetupBackend};
use crate::types::{AntennaId, AntennaMask, Region};
use crate::{Error, Result};

/// In-memory module setup for unit tests.
#[derive(Debug, Default)]
pub struct MockSetup {
    pub region: Region,
    pub mask: AntennaMask,
    pub connected: AntennaMask,
    /// Every mask written, in order, including rollbacks.
    pub mask_writes: Vec<AntennaMask>,
    /// Testing hook: number of upcoming mask writes that fail.
    pub fail_mask_writes: usize,
    pub reflected: VecDeque<Result<ReflectedPower>>,
    pub loads: usize,
    pub fail_load: bool,
}

impl MockSetup {
    /// Setup where every antenna of `mask` is enabled and connected.
    pub fn new(region: Region, mask: AntennaMask) -> Self {
        Self {
            region,
            mask,
            connected: mask,
            ..Self::default()
        }
    }

    pub fn push_reflected(&mut self, power: Result<ReflectedPower>) {
        self.reflected.push_back(power);
    }
}

impl SetupBackend for MockSetup {
    fn load(&mut self) -> Result<()> {
        self.loads += 1;
        if self.fail_load {
            return Err(Error::NotConnected);
        }
        Ok(())
    }

    fn current_region(&self) -> Region {
        self.region
    }

    fn antenna_mask(&self) -> AntennaMask {
        self.mask
    }

    fn apply_antenna_mask(&mut self, mask: AntennaMask) -> Result<()> {
        if self.fail_mask_writes > 0 {
            self.fail_mask_writes -= 1;
            return Err(Error::Transport("mask write rejected".into()));
        }
        self.mask_writes.push(mask);
        self.mask = mask;
        Ok(())
    }

    fn connected_antennas(&self) -> AntennaMask {
        self.connected
    }

    fn set_antenna_connected(&mut self, antenna: AntennaId, connected: bool) {
        self.connected = if connected {
            self.connected | antenna.mask()
        } else {
            AntennaMask::new(self.connected.bits() & !antenna.mask().bits())
        };
    }

    fn reflected_power(&mut self, _antenna: AntennaId) -> Result<ReflectedPower> {
        self.reflected.pop_front().unwrap_or(Err(Error::Timeout))
    }
}
