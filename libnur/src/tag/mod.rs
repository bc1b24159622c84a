// libnur-rs/libnur/src/tag/mod.rs

use crate::constants::EM4325_TID_PREFIX;
use crate::protocol::ProtocolControl;
use crate::types::AntennaId;

mod data;
pub use data::TagData;

pub mod epc_bank;
pub mod processor;
pub mod singulation;

pub use epc_bank::EpcBankData;
pub use processor::{TagContext, TagProcessor};
pub use singulation::{Singulation, SingulationStrategy};

/// A tag reported by one inventory round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoriedTag {
    antenna: AntennaId,
    channel: u16,
    rssi: i8,
    pc: u16,
    epc: Vec<u8>,
    tid: Option<Vec<u8>>,
    shadow_epc: Option<Vec<u8>>,
}

impl InventoriedTag {
    pub fn new(antenna: AntennaId, pc: u16, epc: Vec<u8>) -> Self {
        Self {
            antenna,
            channel: 0,
            rssi: 0,
            pc,
            epc,
            tid: None,
            shadow_epc: None,
        }
    }

    pub fn with_channel(mut self, channel: u16) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_rssi(mut self, rssi: i8) -> Self {
        self.rssi = rssi;
        self
    }

    /// TID words captured during the inventory round.
    pub fn with_tid(mut self, tid: Vec<u8>) -> Self {
        self.tid = Some(tid);
        self
    }

    pub fn antenna(&self) -> AntennaId {
        self.antenna
    }

    pub fn channel(&self) -> u16 {
        self.channel
    }

    pub fn rssi(&self) -> i8 {
        self.rssi
    }

    pub fn pc(&self) -> ProtocolControl {
        ProtocolControl::new(self.pc)
    }

    /// EPC as backscattered during inventory.
    pub fn inventoried_epc(&self) -> &[u8] {
        &self.epc
    }

    /// EPC after any writes in the current operation sequence.
    pub fn epc(&self) -> &[u8] {
        self.shadow_epc.as_deref().unwrap_or(&self.epc)
    }

    pub fn tid(&self) -> Option<&[u8]> {
        self.tid.as_deref()
    }

    pub fn shadow_epc(&self) -> Option<&[u8]> {
        self.shadow_epc.as_deref()
    }

    /// EM4325 sensor tags need their inventoried flag reset around access.
    pub fn is_em4325(&self) -> bool {
        self.tid
            .as_deref()
            .is_some_and(|tid| tid.len() >= 4 && tid[1..4] == EM4325_TID_PREFIX[1..4])
    }
}
