// libnur-rs/libnur/src/lib.rs

//! libnur
//!
//! EPC Gen2 tag operations for Nordic ID NUR RFID modules: inventory with
//! select filters, then read, write, lock, kill and custom commands on
//! every tag found, with module errors mapped to a stable taxonomy.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod operation;
pub mod prelude;
pub mod protocol;
pub mod radio;
pub mod setup;
pub mod tag;
pub mod taxonomy;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
