// libnur-rs/libnur/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use log::{debug, info, warn};

use crate::config::{ExecuteConfig, SingulationControl};
use crate::constants::DISCONNECT_TIMEOUT_MS;
use crate::radio::{Radio, ReaderInfo};
use crate::setup::{self, AntennaSelection, SetupBackend};
use crate::types::{AntennaId, ConnectType, Region};
use crate::Result;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Reader handle that enforces initialization state at compile time.
pub struct Reader<State = Uninitialized> {
    pub(crate) radio: Box<dyn Radio>,
    pub(crate) setup: Box<dyn SetupBackend>,
    pub(crate) config: ExecuteConfig,
    pub(crate) selection: AntennaSelection,
    _state: PhantomData<State>,
}

impl<State> Reader<State> {
    fn into_state<Next>(self) -> Reader<Next> {
        Reader {
            radio: self.radio,
            setup: self.setup,
            config: self.config,
            selection: self.selection,
            _state: PhantomData,
        }
    }

    pub fn config(&self) -> &ExecuteConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ExecuteConfig) {
        self.config = config;
    }
}

impl Reader<Uninitialized> {
    /// Create a reader from a connected radio and its setup backend.
    pub fn new(radio: Box<dyn Radio>, setup: Box<dyn SetupBackend>, config: ExecuteConfig) -> Self {
        Self {
            radio,
            setup,
            config,
            selection: AntennaSelection::new(),
            _state: PhantomData,
        }
    }

    /// Load the module setup and return an initialized reader.
    pub fn initialize(mut self) -> Result<Reader<Initialized>> {
        self.setup.load()?;
        match self.radio.reader_info() {
            Ok(ReaderInfo {
                name,
                serial,
                sw_version,
                ..
            }) => info!("reader {} (serial {}) firmware {}", name, serial, sw_version),
            Err(e) => debug!("reader info unavailable: {}", e),
        }
        info!("region {}", self.setup.current_region());
        Ok(self.into_state())
    }
}

impl Reader<Initialized> {
    /// Disconnect and wait for the module to confirm it.
    ///
    /// A confirmation that does not arrive in time is logged; the reader is
    /// returned uninitialized either way.
    pub fn close(mut self) -> Result<Reader<Uninitialized>> {
        let signal = self.radio.disconnect()?;
        if let Err(e) = signal.wait(Duration::from_millis(DISCONNECT_TIMEOUT_MS)) {
            warn!("disconnect not confirmed: {}", e);
        }
        self.selection = AntennaSelection::new();
        info!("reader disconnected");
        Ok(self.into_state())
    }

    pub fn region(&self) -> Region {
        self.setup.current_region()
    }

    pub fn reader_info(&mut self) -> Result<ReaderInfo> {
        self.radio.reader_info()
    }

    /// Product firmware version derived from the module software version.
    pub fn firmware_version(&mut self) -> Result<&'static str> {
        let info = self.radio.reader_info()?;
        Ok(firmware_version_for(&info.sw_version))
    }

    pub fn singulation_control(&self) -> SingulationControl {
        self.config.singulation
    }

    pub fn set_singulation_control(&mut self, control: SingulationControl) {
        self.config.singulation = control;
    }

    /// Probe whether something is attached to `antenna`.
    pub fn auto_detect(&mut self, antenna: AntennaId) -> Result<bool> {
        setup::auto_detect(&mut *self.setup, antenna)
    }

    /// Set how each antenna's connection state is determined.
    ///
    /// Returns the resulting connection state per antenna.
    pub fn antenna_properties(
        &mut self,
        properties: &[(AntennaId, ConnectType)],
    ) -> Result<Vec<(AntennaId, bool)>> {
        let mut states = Vec::with_capacity(properties.len());
        for &(antenna, connect) in properties {
            let connected = match connect {
                ConnectType::Connected => true,
                ConnectType::Disconnected => false,
                ConnectType::Auto => self.auto_detect(antenna)?,
            };
            debug!("{} {:?} -> connected={}", antenna, connect, connected);
            self.setup.set_antenna_connected(antenna, connected);
            states.push((antenna, connected));
        }
        Ok(states)
    }
}

/// 製品ファームウェアバージョンへの変換
pub fn firmware_version_for(sw_version: &str) -> &'static str {
    match sw_version {
        "5.16-A" => "2.6",
        "5.10-A" => "1.7",
        "5.5-A" => "1.5",
        "5.4-A" => "1.1",
        "4.8-A" => "1.0",
        _ => "UNKNOWN",
    }
}
