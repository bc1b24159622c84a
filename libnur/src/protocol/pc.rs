// libnur-rs/libnur/src/protocol/pc.rs

/// Decoded Gen2 Protocol-Control word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolControl {
    raw: u16,
}

impl ProtocolControl {
    pub const fn new(raw: u16) -> Self {
        Self { raw }
    }

    /// Build a PC word from its fields; unused bits are zero.
    pub fn from_fields(epc_words: u8, umi: bool, xi: bool) -> Self {
        let raw = ((epc_words as u16 & 0x1F) << 11) | ((umi as u16) << 10) | ((xi as u16) << 9);
        Self { raw }
    }

    pub const fn raw(&self) -> u16 {
        self.raw
    }

    /// EPC length in words.
    pub const fn epc_words(&self) -> u16 {
        self.raw >> 11
    }

    /// User memory indicator.
    pub const fn umi(&self) -> u16 {
        (self.raw & 0x0400) >> 10
    }

    /// XPC indicator: an XPC_W1 word follows the EPC.
    pub const fn xi(&self) -> u16 {
        (self.raw & 0x0200) >> 9
    }

    pub const fn has_xpc(&self) -> bool {
        self.xi() == 1
    }
}

impl From<u16> for ProtocolControl {
    fn from(raw: u16) -> Self {
        Self::new(raw)
    }
}
