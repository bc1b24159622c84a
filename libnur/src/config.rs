// libnur-rs/libnur/src/config.rs

//! Reader-wide settings applied by every `execute` call.

use crate::constants::USER_BANK_DEFAULT_WORDS;
use crate::types::{AntennaId, Session};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gen2 anti-collision parameters for inventory rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SingulationControl {
    pub session: Session,
    /// Initial Q; 0 lets the module adapt it.
    pub q: u8,
    pub rounds: u8,
    pub transit_time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExecuteConfig {
    /// Words probed by a complete User bank read.
    pub user_bank_word_count: u16,
    /// Replaces the antenna list of every call when set.
    pub antenna_override: Option<Vec<AntennaId>>,
    /// Capture TID words during inventory and answer TID reads from them.
    pub optimized_tid_reading: bool,
    /// Follow EPC-bank writes when addressing the tag afterwards.
    pub handle_epc_change: bool,
    pub singulation: SingulationControl,
}

impl Default for ExecuteConfig {
    fn default() -> Self {
        Self {
            user_bank_word_count: USER_BANK_DEFAULT_WORDS,
            antenna_override: None,
            optimized_tid_reading: true,
            handle_epc_change: true,
            singulation: SingulationControl::default(),
        }
    }
}

impl ExecuteConfig {
    pub fn builder() -> ExecuteConfigBuilder {
        ExecuteConfigBuilder::new()
    }
}

/// Helper to construct an [`ExecuteConfig`] starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct ExecuteConfigBuilder {
    config: ExecuteConfig,
}

impl ExecuteConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_bank_word_count(mut self, words: u16) -> Self {
        self.config.user_bank_word_count = words;
        self
    }

    pub fn antenna_override(mut self, antennas: Vec<AntennaId>) -> Self {
        self.config.antenna_override = Some(antennas);
        self
    }

    pub fn optimized_tid_reading(mut self, enabled: bool) -> Self {
        self.config.optimized_tid_reading = enabled;
        self
    }

    pub fn handle_epc_change(mut self, enabled: bool) -> Self {
        self.config.handle_epc_change = enabled;
        self
    }

    pub fn singulation(mut self, control: SingulationControl) -> Self {
        self.config.singulation = control;
        self
    }

    pub fn build(self) -> ExecuteConfig {
        self.config
    }
}
