// libnur-rs/libnur/src/protocol/tid.rs

//! Gen2 TID bank layout (ISO/IEC 15963 class E2).
//!
//! ```text
//! bits  0..8   class identifier (0xE2)
//! bit   8      XTID header present
//! bits 11..20  mask designer id
//! bits 20..32  tag model number
//! bits 32..48  XTID header word, serialization length in bits 32..35
//! ```

use crate::constants::{TID_BASE_BITS, TID_SHORT_BITS};

/// Whether the XTID bit is set in a captured TID prefix.
pub fn has_xtid_header(tid: &[u8]) -> bool {
    tid.get(1).is_some_and(|b| b & 0x80 != 0)
}

/// 3-bit serialization length code of the XTID header, 0 when absent.
pub fn serial_length_code(tid: &[u8]) -> u8 {
    tid.get(4).map_or(0, |b| (b & 0xE0) >> 5)
}

/// A TID prefix that names a tag uniquely: XTID header plus a serial.
pub fn is_serialized(tid: &[u8]) -> bool {
    has_xtid_header(tid) && serial_length_code(tid) != 0
}

/// Size of the TID bank implied by its header, in bits.
///
/// Without an XTID header only the vendor and model words are guaranteed.
pub fn bank_bits(tid: &[u8]) -> u32 {
    if !has_xtid_header(tid) {
        return TID_SHORT_BITS;
    }
    match serial_length_code(tid) {
        0 => TID_BASE_BITS,
        code => TID_BASE_BITS + 48 + 16 * (code as u32 - 1),
    }
}

/// 9-bit mask designer id.
pub fn mask_designer_id(tid: &[u8]) -> Option<u16> {
    let hi = *tid.get(1)? as u16;
    let lo = *tid.get(2)? as u16;
    Some(((hi << 8 | lo) >> 4) & 0x01FF)
}

/// 12-bit tag model number.
pub fn model_number(tid: &[u8]) -> Option<u16> {
    let hi = *tid.get(2)? as u16;
    let lo = *tid.get(3)? as u16;
    Some((hi & 0x0F) << 8 | lo)
}
