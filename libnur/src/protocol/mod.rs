// libnur-rs/libnur/src/protocol/mod.rs

//! Pure Gen2 codecs: nothing here talks to the radio.

pub mod custom;
pub mod filter;
pub mod lock;
pub mod parser;
pub mod pc;
pub mod tid;

pub use custom::{CustomExchange, SensorCommand};
pub use filter::{Filter, FilterAction, FilterProgram, SelectState, SubFilter};
pub use lock::{LockField, LockPrivilege};
pub use pc::ProtocolControl;
