// libnur-rs/libnur/src/tag/epc_bank.rs

use log::debug;

use crate::constants::{EPC_BANK_XPC_WORDS, EPC_HEADER_WORDS, XPC_BYTE_OFFSET};
use crate::protocol::parser::{be_u16_at, word_at};
use crate::radio::Radio;
use crate::tag::{InventoriedTag, Singulation};
use crate::taxonomy::{map_error, ErrorContext, ReadResultKind};
use crate::types::MemoryBank;
use crate::Result;

/// Structure of a tag's EPC bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpcBankData {
    pub crc: u16,
    pub pc: u16,
    pub epc: Vec<u8>,
    pub xpc: u16,
    pub umi: u16,
    pub result: ReadResultKind,
}

impl EpcBankData {
    fn failed(result: ReadResultKind) -> Self {
        Self {
            crc: 0,
            pc: 0,
            epc: Vec::new(),
            xpc: 0,
            umi: 0,
            result,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result == ReadResultKind::Success
    }
}

/// Decode the EPC bank of `tag`.
///
/// PC and EPC come from the inventory reply. The bank is only read when
/// the CRC is wanted or the PC announces an XPC.
pub fn read_epc_bank_data(
    radio: &mut dyn Radio,
    sing: &Singulation,
    tag: &InventoriedTag,
    read_crc: bool,
) -> EpcBankData {
    let pc = tag.pc();

    match read_crc_and_xpc(radio, sing, tag, read_crc) {
        Ok((crc, xpc)) => EpcBankData {
            crc,
            pc: pc.raw(),
            epc: tag.epc().to_vec(),
            xpc,
            umi: pc.umi(),
            result: ReadResultKind::Success,
        },
        Err(e) => {
            debug!("failed to read EPC bank: {}", e);
            EpcBankData::failed(map_error(&e, ErrorContext::read(0)).into())
        }
    }
}

fn read_crc_and_xpc(
    radio: &mut dyn Radio,
    sing: &Singulation,
    tag: &InventoriedTag,
    read_crc: bool,
) -> Result<(u16, u16)> {
    let pc = tag.pc();

    if pc.has_xpc() {
        let words = EPC_BANK_XPC_WORDS as usize;
        let data = radio.read(sing, MemoryBank::Epc, 0, words * 2, 0)?;
        return Ok((word_at(&data, 0)?, be_u16_at(&data, XPC_BYTE_OFFSET)?));
    }

    if !read_crc {
        return Ok((0, 0));
    }

    let words = EPC_HEADER_WORDS as usize + pc.epc_words() as usize;
    let data = radio.read(sing, MemoryBank::Epc, 0, words * 2, 0)?;
    Ok((word_at(&data, 0)?, 0))
}
