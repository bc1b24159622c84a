// libnur-rs/libnur/src/prelude.rs

pub use crate::config::{ExecuteConfig, SingulationControl};
pub use crate::device::{Initialized, Reader, ReaderBuilder, Uninitialized};
pub use crate::operation::{
    CustomOperation, KillOperation, LockOperation, OperationResult, OperationSource,
    ReadOperation, RequestOperation, TagOperation, WriteOperation,
};
pub use crate::protocol::{Filter, LockField, LockPrivilege};
pub use crate::radio::{InventoryParams, Radio};
pub use crate::setup::SetupBackend;
pub use crate::tag::{InventoriedTag, TagData};
pub use crate::taxonomy::{
    CustomResultKind, KillResultKind, LockResultKind, ModuleErrorCode, ReadResultKind, RfcError,
    WriteResultKind,
};
pub use crate::{
    AntennaId, AntennaMask, ConnectType, Error, MemoryBank, Region, Result, Session,
};

// Re-export small utilities for convenience
pub use crate::utils::bytes_to_hex;
