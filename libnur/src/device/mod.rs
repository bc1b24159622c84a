// libnur-rs/libnur/src/device/mod.rs

pub mod builder;
mod execute;
pub mod handle;

pub use builder::ReaderBuilder;
pub use handle::{firmware_version_for, Initialized, Reader, Uninitialized};
