// libnur-rs/libnur/src/radio/traits.rs

use crate::protocol::{CustomExchange, FilterProgram};
use crate::radio::lifecycle::DisconnectSignal;
use crate::tag::{InventoriedTag, Singulation};
use crate::types::{MemoryBank, Session};
use crate::{Error, Result};

/// Inventory round parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryParams {
    pub session: Session,
    pub q: u8,
    pub rounds: u8,
    /// Per-round time budget in milliseconds, 0 for the module default.
    pub transit_time: u32,
    /// Capture this many TID words from word 0 with every tag.
    pub tid_words: Option<u8>,
}

/// Reader identification reported by the module.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReaderInfo {
    pub name: String,
    pub serial: String,
    pub hw_version: String,
    /// Module software version, e.g. "5.10-A".
    pub sw_version: String,
}

/// Radio abstracts the module's Gen2 primitives away from tag logic.
///
/// Every call addresses the tag selected by `sing`. Passwords of 0 mean
/// that no access password is sent.
pub trait Radio {
    /// Read `byte_len` bytes from `bank` starting at word `word_offset`.
    fn read(
        &mut self,
        sing: &Singulation,
        bank: MemoryBank,
        word_offset: u32,
        byte_len: usize,
        password: u32,
    ) -> Result<Vec<u8>>;

    /// Write whole words; returns the number of words written.
    fn write(
        &mut self,
        sing: &Singulation,
        bank: MemoryBank,
        word_offset: u32,
        data: &[u8],
        password: u32,
    ) -> Result<u16>;

    fn lock(
        &mut self,
        sing: &Singulation,
        memory_code: u32,
        action_code: u32,
        password: u32,
    ) -> Result<()>;

    fn kill(&mut self, sing: &Singulation, password: u32) -> Result<()>;

    /// Transmit a bit-exact vendor command and return the tag's reply.
    fn custom_exchange(&mut self, sing: &Singulation, exchange: &CustomExchange) -> Result<Vec<u8>>;

    /// Run one inventory round with the given select chain.
    fn run_inventory(
        &mut self,
        params: &InventoryParams,
        program: &FilterProgram,
    ) -> Result<Vec<InventoriedTag>>;

    /// Force the inventoried flag of `session` back to A (or B).
    fn reset_to_target(&mut self, session: Session, target_a: bool) -> Result<()>;

    fn reader_info(&mut self) -> Result<ReaderInfo> {
        Err(Error::UnsupportedOperation("reader info".into()))
    }

    /// Request a disconnect. The returned signal completes once the
    /// module confirms it.
    fn disconnect(&mut self) -> Result<DisconnectSignal> {
        Ok(DisconnectSignal::completed())
    }
}
