// libnur-rs/libnur/src/tag/singulation.rs

use log::trace;

use crate::constants::{
    EPC_HEADER_WORDS, EPC_SINGULATION_ADDRESS, MAX_SINGULATION_BITS, TID_SERIAL_FILTER_BITS,
    TID_SINGULATION_ADDRESS,
};
use crate::operation::WriteOperation;
use crate::protocol::{tid, Filter};
use crate::tag::InventoriedTag;
use crate::types::MemoryBank;
use crate::utils::Hex;

/// How tags are addressed after the inventory round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SingulationStrategy {
    #[default]
    Epc,
    /// By serialized TID; chosen only when a caller filter pins one down.
    Tid,
}

/// Select pattern addressing one tag for access commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Singulation {
    bank: MemoryBank,
    address: u32,
    data: Vec<u8>,
    strategy: SingulationStrategy,
}

impl Singulation {
    /// Singulation without a pattern yet.
    pub fn unseeded(strategy: SingulationStrategy) -> Self {
        Self::seeded(strategy, Vec::new())
    }

    fn seeded(strategy: SingulationStrategy, data: Vec<u8>) -> Self {
        let (bank, address) = match strategy {
            SingulationStrategy::Epc => (MemoryBank::Epc, EPC_SINGULATION_ADDRESS),
            SingulationStrategy::Tid => (MemoryBank::Tid, TID_SINGULATION_ADDRESS),
        };
        Self {
            bank,
            address,
            data,
            strategy,
        }
    }

    /// Address `tag` by its current EPC or by its captured TID.
    pub fn for_tag(strategy: SingulationStrategy, tag: &InventoriedTag) -> Self {
        let data = match strategy {
            SingulationStrategy::Epc => tag.epc().to_vec(),
            SingulationStrategy::Tid => tag.tid().map(<[u8]>::to_vec).unwrap_or_default(),
        };
        Self::seeded(strategy, data)
    }

    /// Pick the strategy for a round from the caller's filters.
    ///
    /// The first filter that selects exactly one serialized TID switches the
    /// round to TID singulation, seeded with that filter's data.
    pub fn optimal(filters: &[Filter]) -> Self {
        match filters.iter().find(|f| identifies_serialized_tid(f)) {
            Some(filter) => {
                trace!("singulating by TID {}", Hex(&filter.data));
                Self::seeded(SingulationStrategy::Tid, filter.data.clone())
            }
            None => Self::unseeded(SingulationStrategy::Epc),
        }
    }

    pub fn bank(&self) -> MemoryBank {
        self.bank
    }

    /// Bit address of the pattern inside [`Self::bank`].
    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn strategy(&self) -> SingulationStrategy {
        self.strategy
    }

    pub fn is_seeded(&self) -> bool {
        !self.data.is_empty()
    }

    /// Pattern length in bits, capped at the module's select limit.
    pub fn bit_count(&self) -> u32 {
        ((self.data.len() as u32) * 8).min(MAX_SINGULATION_BITS)
    }

    /// Track an EPC-bank write on the tag record.
    ///
    /// Only words inside the EPC (after CRC and PC) are applied, and the EPC
    /// never changes length. Returns the new EPC when it changed; under EPC
    /// strategy the singulation pattern follows it.
    pub fn apply_write(&mut self, tag: &mut InventoriedTag, write: &WriteOperation) -> Option<Vec<u8>> {
        if write.bank != MemoryBank::Epc {
            return None;
        }

        let start = write.offset as usize;
        let end = start + write.data.len() / 2;
        let header = EPC_HEADER_WORDS as usize;
        let epc_end = header + tag.epc().len() / 2;
        if end <= header || start >= epc_end {
            return None;
        }

        let mut epc = tag.epc().to_vec();
        let src = header.saturating_sub(start) * 2;
        let dst = start.saturating_sub(header) * 2;
        for (to, from) in epc[dst..].iter_mut().zip(&write.data[src..]) {
            *to = *from;
        }

        trace!("EPC changed by write {}: {}", write.id, Hex(&epc));
        tag.shadow_epc = Some(epc.clone());
        if self.strategy == SingulationStrategy::Epc {
            self.data = epc.clone();
        }
        Some(epc)
    }
}

fn identifies_serialized_tid(filter: &Filter) -> bool {
    let data = &filter.data;
    let full_mask = filter.mask.len() >= data.len() && filter.mask[..data.len()].iter().all(|b| *b == 0xFF);

    filter.bank == MemoryBank::Tid
        && data.len() >= 12
        && filter.mask.len() >= 12
        && filter.bit_offset == 0
        && filter.matching
        && filter.bit_length as u32 >= TID_SERIAL_FILTER_BITS
        && full_mask
        && tid::is_serialized(data)
}
