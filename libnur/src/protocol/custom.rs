// libnur-rs/libnur/src/protocol/custom.rs

//! Framing for vendor-custom Gen2 commands.
//!
//! Only sensor commands for EM4325-based tags are forwarded. Two forms are
//! accepted: the raw 44-bit command, and the same command prefixed with the
//! tag's mask designer id and model number (`00 0B 00 40`), which must match
//! the TID captured for the addressed tag.

use crate::constants::{
    SENSOR_COMMAND_DEPRECATED, SENSOR_COMMAND_DEPRECATED_BITS, SENSOR_MODEL_ID,
    SENSOR_PREFIX_BITS, SENSOR_VENDOR_ID,
};
use crate::protocol::tid;
use crate::utils::{leading_bits_equal, pack_bits};

/// Command payload accepted for transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorCommand<'a> {
    pub data: &'a [u8],
    /// Significant bits of `data`; 0 means every bit.
    pub bit_len: usize,
}

/// Match a custom payload against the supported sensor commands.
///
/// Returns the payload to transmit with any vendor prefix removed, or
/// `None` when the command is not possible for this tag.
pub fn sensor_command<'a>(data: &'a [u8], bit_len: usize, tid: Option<&[u8]>) -> Option<SensorCommand<'a>> {
    if bit_len == SENSOR_COMMAND_DEPRECATED_BITS
        && leading_bits_equal(data, &SENSOR_COMMAND_DEPRECATED, SENSOR_COMMAND_DEPRECATED_BITS)
    {
        return Some(SensorCommand { data, bit_len });
    }

    let tid = tid?;
    let prefix_bits = SENSOR_PREFIX_BITS as usize;
    if bit_len <= prefix_bits || data.len() <= 4 || tid.len() < 4 {
        return None;
    }

    let vendor = u16::from_be_bytes([data[0], data[1]]);
    let model = u16::from_be_bytes([data[2], data[3]]);
    let matches_tag = tid::mask_designer_id(tid) == Some(SENSOR_VENDOR_ID)
        && tid::model_number(tid) == Some(SENSOR_MODEL_ID);

    if vendor == SENSOR_VENDOR_ID && model == SENSOR_MODEL_ID && matches_tag {
        Some(SensorCommand {
            data: &data[4..],
            bit_len: bit_len - prefix_bits,
        })
    } else {
        None
    }
}

/// Bit-exact custom exchange handed to the radio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomExchange {
    pub bit_buffer: Vec<u8>,
    pub bit_len: usize,
    /// Access password, 0 for none.
    pub password: u32,
    /// Append the tag handle to the transmitted frame.
    pub append_handle: bool,
    /// Strip the handle from the tag's reply.
    pub strip_handle: bool,
    /// Use write-style (delayed) reply timing.
    pub as_write: bool,
    pub rx_len_unknown: bool,
}

impl CustomExchange {
    /// Pack `command` into a buffer holding exactly its significant bits.
    ///
    /// `None` if the payload is shorter than its declared bit length.
    pub fn new(command: &SensorCommand<'_>, password: u32) -> Option<Self> {
        let bit_len = match command.bit_len {
            0 => command.data.len() * 8,
            n => n,
        };
        let bit_buffer = pack_bits(command.data, bit_len)?;
        Some(Self {
            bit_buffer,
            bit_len,
            password,
            append_handle: true,
            strip_handle: true,
            as_write: true,
            rx_len_unknown: true,
        })
    }

    pub fn uses_password(&self) -> bool {
        self.password != 0
    }
}
