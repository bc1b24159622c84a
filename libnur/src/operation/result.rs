// libnur-rs/libnur/src/operation/result.rs

use crate::taxonomy::{
    CustomResultKind, KillResultKind, LockResultKind, ReadResultKind, WriteResultKind,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReadResult {
    pub id: String,
    pub kind: ReadResultKind,
    pub data: Vec<u8>,
}

impl ReadResult {
    pub fn success(id: &str, data: Vec<u8>) -> Self {
        Self {
            id: id.to_string(),
            kind: ReadResultKind::Success,
            data,
        }
    }

    pub fn failed(id: &str, kind: ReadResultKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            data: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WriteResult {
    pub id: String,
    pub kind: WriteResultKind,
    pub words_written: u16,
}

impl WriteResult {
    pub fn success(id: &str, words_written: u16) -> Self {
        Self {
            id: id.to_string(),
            kind: WriteResultKind::Success,
            words_written,
        }
    }

    pub fn failed(id: &str, kind: WriteResultKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            words_written: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LockResult {
    pub id: String,
    pub kind: LockResultKind,
}

impl LockResult {
    pub fn new(id: &str, kind: LockResultKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KillResult {
    pub id: String,
    pub kind: KillResultKind,
}

impl KillResult {
    pub fn new(id: &str, kind: KillResultKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomResult {
    pub id: String,
    pub kind: CustomResultKind,
    /// Tag reply with the handle stripped.
    pub data: Vec<u8>,
}

impl CustomResult {
    pub fn success(id: &str, data: Vec<u8>) -> Self {
        Self {
            id: id.to_string(),
            kind: CustomResultKind::Success,
            data,
        }
    }

    pub fn failed(id: &str, kind: CustomResultKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            data: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationResult {
    Read(ReadResult),
    Write(WriteResult),
    Lock(LockResult),
    Kill(KillResult),
    Custom(CustomResult),
}

impl OperationResult {
    pub fn id(&self) -> &str {
        match self {
            OperationResult::Read(r) => &r.id,
            OperationResult::Write(r) => &r.id,
            OperationResult::Lock(r) => &r.id,
            OperationResult::Kill(r) => &r.id,
            OperationResult::Custom(r) => &r.id,
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            OperationResult::Read(r) => r.kind == ReadResultKind::Success,
            OperationResult::Write(r) => r.kind == WriteResultKind::Success,
            OperationResult::Lock(r) => r.kind == LockResultKind::Success,
            OperationResult::Kill(r) => r.kind == KillResultKind::Success,
            OperationResult::Custom(r) => r.kind == CustomResultKind::Success,
        }
    }
}
