// libnur-rs/libnur/src/device/builder.rs

use crate::config::ExecuteConfig;
use crate::device::handle::{Reader, Uninitialized};
use crate::radio::Radio;
use crate::setup::SetupBackend;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    radio: Option<Box<dyn Radio>>,
    setup: Option<Box<dyn SetupBackend>>,
    config: ExecuteConfig,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-connected radio (e.g. MockRadio)
    pub fn with_radio(mut self, radio: Box<dyn Radio>) -> Self {
        self.radio = Some(radio);
        self
    }

    pub fn with_setup(mut self, setup: Box<dyn SetupBackend>) -> Self {
        self.setup = Some(setup);
        self
    }

    pub fn with_config(mut self, config: ExecuteConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Reader.
    /// Requires both a radio and a setup backend; otherwise returns NotConnected.
    pub fn build_uninitialized(self) -> Result<Reader<Uninitialized>> {
        match (self.radio, self.setup) {
            (Some(radio), Some(setup)) => Ok(Reader::new(radio, setup, self.config)),
            _ => Err(Error::NotConnected),
        }
    }
}
