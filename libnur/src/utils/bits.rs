//! Bit-level helpers over MSB-first byte buffers.
//!
//! Gen2 numbers bits from the most significant bit of the first byte, so bit
//! 0 is `bytes[0] & 0x80`.

/// Bit `index` of `bytes`; bits past the end read as zero.
pub fn bit_at(bytes: &[u8], index: usize) -> bool {
    bytes
        .get(index / 8)
        .is_some_and(|b| b & (0x80 >> (index % 8)) != 0)
}

/// Copy `len` bits starting at bit `start` into a new MSB-first buffer.
pub fn extract_bits(bytes: &[u8], start: usize, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len.div_ceil(8)];
    for i in 0..len {
        if bit_at(bytes, start + i) {
            out[i / 8] |= 0x80 >> (i % 8);
        }
    }
    out
}

/// Contiguous runs of set bits within the first `bit_len` bits of `mask`,
/// as `(start, len)` pairs in ascending order.
pub fn ones_runs(mask: &[u8], bit_len: usize) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;
    for i in 0..bit_len {
        match (bit_at(mask, i), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push((s, i - s));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push((s, bit_len - s));
    }
    runs
}

/// True when the first `bits` bits of both buffers are present and equal.
pub fn leading_bits_equal(a: &[u8], b: &[u8], bits: usize) -> bool {
    let bytes = bits.div_ceil(8);
    if a.len() < bytes || b.len() < bytes {
        return false;
    }
    (0..bits).all(|i| bit_at(a, i) == bit_at(b, i))
}

/// Copy the first `bit_len` bits of `data`, clearing the unused low bits of
/// the final byte. `None` if `data` is too short.
pub fn pack_bits(data: &[u8], bit_len: usize) -> Option<Vec<u8>> {
    let bytes = bit_len.div_ceil(8);
    let mut out = data.get(..bytes)?.to_vec();
    let rem = bit_len % 8;
    if rem != 0 {
        if let Some(last) = out.last_mut() {
            *last &= 0xFF << (8 - rem);
        }
    }
    Some(out)
}
