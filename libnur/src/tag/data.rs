// libnur-rs/libnur/src/tag/data.rs

use crate::operation::OperationResult;
use crate::types::AntennaId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-tag record returned by an `execute` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagData {
    /// Position of the tag in the inventory result, 0-based.
    pub tag_data_id: usize,
    pub antenna: Option<AntennaId>,
    pub channel: u16,
    pub rssi: i8,
    pub crc: u16,
    pub pc: u16,
    pub xpc: u16,
    pub epc: Vec<u8>,
    pub results: Vec<OperationResult>,
}

impl TagData {
    pub fn new(tag_data_id: usize) -> Self {
        Self {
            tag_data_id,
            ..Default::default()
        }
    }

    pub fn result(&self, id: &str) -> Option<&OperationResult> {
        self.results.iter().find(|r| r.id() == id)
    }
}
