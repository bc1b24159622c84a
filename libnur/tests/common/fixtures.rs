// fixtures.rs — provides commonly used tags, TIDs and operations

use libnur::operation::{ReadOperation, TagOperation, WriteOperation};
use libnur::tag::InventoriedTag;
use libnur::test_support::sample_tag;
use libnur::types::MemoryBank;

pub fn cafebabe_tag() -> InventoriedTag {
    sample_tag(1, &hex::decode("CAFEBABE").unwrap())
}

/// Impinj-style TID with XTID header and a 48-bit serial.
pub fn serialized_tid() -> Vec<u8> {
    hex::decode("E2801105200012345678ABCD").unwrap()
}

/// EM4325 TID prefix followed by serial words.
pub fn em4325_tid() -> Vec<u8> {
    hex::decode("E280B04020000001").unwrap()
}

pub fn read(id: &str, bank: MemoryBank, offset: u16, length: u16) -> TagOperation {
    TagOperation::Read(ReadOperation {
        id: id.into(),
        bank,
        offset,
        length,
        password: 0,
    })
}

pub fn write(id: &str, bank: MemoryBank, offset: u16, hex_data: &str) -> TagOperation {
    TagOperation::Write(WriteOperation {
        id: id.into(),
        bank,
        offset,
        data: hex::decode(hex_data).unwrap(),
        password: 0,
    })
}
