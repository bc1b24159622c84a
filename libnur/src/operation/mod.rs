// libnur-rs/libnur/src/operation/mod.rs

//! Tag operations requested by the caller and their results.

pub mod result;

pub use result::{CustomResult, KillResult, LockResult, OperationResult, ReadResult, WriteResult};

use crate::protocol::{LockField, LockPrivilege};
use crate::tag::TagData;
use crate::taxonomy::RfcError;
use crate::types::MemoryBank;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read `length` words from `bank` at word `offset`. A length of 0 reads
/// the complete bank.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReadOperation {
    pub id: String,
    pub bank: MemoryBank,
    pub offset: u16,
    pub length: u16,
    pub password: u32,
}

/// Write `data` (whole words) to `bank` at word `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WriteOperation {
    pub id: String,
    pub bank: MemoryBank,
    pub offset: u16,
    pub data: Vec<u8>,
    pub password: u32,
}

impl WriteOperation {
    /// Words covered by the payload.
    pub fn word_count(&self) -> u16 {
        (self.data.len() / 2) as u16
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LockOperation {
    pub id: String,
    pub field: LockField,
    pub privilege: LockPrivilege,
    pub password: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KillOperation {
    pub id: String,
    pub kill_password: u32,
}

/// Vendor command of `bit_length` bits (0 for every bit of `data`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomOperation {
    pub id: String,
    pub data: Vec<u8>,
    pub bit_length: u16,
    pub password: u32,
}

/// Ask the [`OperationSource`] for more operations on the current tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RequestOperation {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TagOperation {
    Read(ReadOperation),
    Write(WriteOperation),
    Lock(LockOperation),
    Kill(KillOperation),
    Custom(CustomOperation),
    Request(RequestOperation),
}

impl TagOperation {
    pub fn id(&self) -> &str {
        match self {
            TagOperation::Read(op) => &op.id,
            TagOperation::Write(op) => &op.id,
            TagOperation::Lock(op) => &op.id,
            TagOperation::Kill(op) => &op.id,
            TagOperation::Custom(op) => &op.id,
            TagOperation::Request(op) => &op.id,
        }
    }

    /// Result reported for this operation when the tag already failed.
    ///
    /// Requests produce no result of their own.
    pub fn failed(&self, err: RfcError) -> Option<OperationResult> {
        let result = match self {
            TagOperation::Read(op) => OperationResult::Read(ReadResult::failed(&op.id, err.into())),
            TagOperation::Write(op) => {
                OperationResult::Write(WriteResult::failed(&op.id, err.into()))
            }
            TagOperation::Lock(op) => OperationResult::Lock(LockResult::new(&op.id, err.into())),
            TagOperation::Kill(op) => OperationResult::Kill(KillResult::new(&op.id, err.into())),
            TagOperation::Custom(op) => {
                OperationResult::Custom(CustomResult::failed(&op.id, err.into()))
            }
            TagOperation::Request(_) => return None,
        };
        Some(result)
    }
}

/// True if any operation reads the TID bank.
pub fn reads_tid_bank(operations: &[TagOperation]) -> bool {
    operations
        .iter()
        .any(|op| matches!(op, TagOperation::Read(r) if r.bank == MemoryBank::Tid))
}

/// Supplies additional operations for a tag when a
/// [`TagOperation::Request`] is reached.
pub trait OperationSource {
    fn additional_operations(&mut self, tag: &TagData) -> Vec<TagOperation>;
}

impl<F> OperationSource for F
where
    F: FnMut(&TagData) -> Vec<TagOperation>,
{
    fn additional_operations(&mut self, tag: &TagData) -> Vec<TagOperation> {
        self(tag)
    }
}
