//! Hexadecimal rendering for log output.
//!
//! [`Hex`] formats lazily, so `debug!("{}", Hex(&epc))` costs nothing when
//! the record is filtered out.

use std::fmt;

/// Display adapter printing a byte slice as uppercase hex without separators.
///
/// Example: `Hex(&[0xca, 0xfe])` -> `"CAFE"`
#[derive(Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Convert a byte slice to an uppercase hex string.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    Hex(bytes).to_string()
}
