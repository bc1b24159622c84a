// libnur-rs/libnur/src/radio/mock.rs

use std::collections::VecDeque;

use crate::protocol::{CustomExchange, FilterProgram};
use crate::radio::lifecycle::DisconnectSignal;
use crate::radio::traits::{InventoryParams, Radio, ReaderInfo};
use crate::tag::{InventoriedTag, Singulation};
use crate::types::{MemoryBank, Session};
use crate::{Error, Result};

/// A call observed by [`MockRadio`].
#[derive(Debug, Clone, PartialEq)]
pub enum RadioCall {
    Read {
        sing: Vec<u8>,
        bank: MemoryBank,
        word_offset: u32,
        byte_len: usize,
        password: u32,
    },
    Write {
        sing: Vec<u8>,
        bank: MemoryBank,
        word_offset: u32,
        data: Vec<u8>,
        password: u32,
    },
    Lock {
        memory_code: u32,
        action_code: u32,
        password: u32,
    },
    Kill {
        password: u32,
    },
    Custom(CustomExchange),
    Inventory {
        params: InventoryParams,
        program: FilterProgram,
    },
    ResetToTarget {
        session: Session,
        target_a: bool,
    },
    Disconnect,
}

/// Mock radio for unit tests. It records calls and answers from queues.
///
/// Reads and custom exchanges with an empty queue fail with `Timeout`;
/// writes, locks, kills and resets succeed, and inventories find nothing.
#[derive(Debug, Default)]
pub struct MockRadio {
    pub calls: Vec<RadioCall>,
    pub inventories: VecDeque<Result<Vec<InventoriedTag>>>,
    pub reads: VecDeque<Result<Vec<u8>>>,
    pub writes: VecDeque<Result<u16>>,
    pub locks: VecDeque<Result<()>>,
    pub kills: VecDeque<Result<()>>,
    pub customs: VecDeque<Result<Vec<u8>>>,
    pub resets: VecDeque<Result<()>>,
    pub info: Option<ReaderInfo>,
}

impl MockRadio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_inventory(&mut self, tags: Vec<InventoriedTag>) {
        self.inventories.push_back(Ok(tags));
    }

    pub fn push_read(&mut self, result: Result<Vec<u8>>) {
        self.reads.push_back(result);
    }

    pub fn push_write(&mut self, result: Result<u16>) {
        self.writes.push_back(result);
    }

    pub fn push_custom(&mut self, result: Result<Vec<u8>>) {
        self.customs.push_back(result);
    }

    /// Calls that went over the air to a tag, excluding inventory and resets.
    pub fn tag_calls(&self) -> Vec<&RadioCall> {
        self.calls
            .iter()
            .filter(|c| {
                !matches!(
                    c,
                    RadioCall::Inventory { .. } | RadioCall::ResetToTarget { .. } | RadioCall::Disconnect
                )
            })
            .collect()
    }

    pub fn inventory_calls(&self) -> Vec<(&InventoryParams, &FilterProgram)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RadioCall::Inventory { params, program } => Some((params, program)),
                _ => None,
            })
            .collect()
    }
}

impl Radio for MockRadio {
    fn read(
        &mut self,
        sing: &Singulation,
        bank: MemoryBank,
        word_offset: u32,
        byte_len: usize,
        password: u32,
    ) -> Result<Vec<u8>> {
        self.calls.push(RadioCall::Read {
            sing: sing.data().to_vec(),
            bank,
            word_offset,
            byte_len,
            password,
        });
        self.reads.pop_front().unwrap_or(Err(Error::Timeout))
    }

    fn write(
        &mut self,
        sing: &Singulation,
        bank: MemoryBank,
        word_offset: u32,
        data: &[u8],
        password: u32,
    ) -> Result<u16> {
        self.calls.push(RadioCall::Write {
            sing: sing.data().to_vec(),
            bank,
            word_offset,
            data: data.to_vec(),
            password,
        });
        self.writes
            .pop_front()
            .unwrap_or(Ok((data.len() / 2) as u16))
    }

    fn lock(
        &mut self,
        _sing: &Singulation,
        memory_code: u32,
        action_code: u32,
        password: u32,
    ) -> Result<()> {
        self.calls.push(RadioCall::Lock {
            memory_code,
            action_code,
            password,
        });
        self.locks.pop_front().unwrap_or(Ok(()))
    }

    fn kill(&mut self, _sing: &Singulation, password: u32) -> Result<()> {
        self.calls.push(RadioCall::Kill { password });
        self.kills.pop_front().unwrap_or(Ok(()))
    }

    fn custom_exchange(&mut self, _sing: &Singulation, exchange: &CustomExchange) -> Result<Vec<u8>> {
        self.calls.push(RadioCall::Custom(exchange.clone()));
        self.customs.pop_front().unwrap_or(Err(Error::Timeout))
    }

    fn run_inventory(
        &mut self,
        params: &InventoryParams,
        program: &FilterProgram,
    ) -> Result<Vec<InventoriedTag>> {
        self.calls.push(RadioCall::Inventory {
            params: params.clone(),
            program: program.clone(),
        });
        self.inventories.pop_front().unwrap_or(Ok(Vec::new()))
    }

    fn reset_to_target(&mut self, session: Session, target_a: bool) -> Result<()> {
        self.calls.push(RadioCall::ResetToTarget { session, target_a });
        self.resets.pop_front().unwrap_or(Ok(()))
    }

    fn reader_info(&mut self) -> Result<ReaderInfo> {
        self.info
            .clone()
            .ok_or_else(|| Error::UnsupportedOperation("reader info".into()))
    }

    fn disconnect(&mut self) -> Result<DisconnectSignal> {
        self.calls.push(RadioCall::Disconnect);
        Ok(DisconnectSignal::completed())
    }
}
