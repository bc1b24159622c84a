//! Utilities for libnur: bit-level helpers shared by the Gen2 codecs and
//! hex rendering for log output.

pub mod bits;
pub mod hex;

pub use bits::*;
pub use hex::*;
