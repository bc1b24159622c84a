// libnur-rs/libnur/src/protocol/lock.rs

use std::convert::TryFrom;

use crate::constants::*;
use crate::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lock privilege requested for a memory field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LockPrivilege {
    Unlock,
    Lock,
    PermaUnlock,
    PermaLock,
}

impl LockPrivilege {
    /// Module lock action code.
    pub const fn action_code(&self) -> u32 {
        match self {
            LockPrivilege::Unlock => LOCK_ACTION_OPEN,
            LockPrivilege::Lock => LOCK_ACTION_SECURED,
            LockPrivilege::PermaUnlock => LOCK_ACTION_PERMAWRITE,
            LockPrivilege::PermaLock => LOCK_ACTION_PERMALOCK,
        }
    }
}

impl TryFrom<u8> for LockPrivilege {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Unlock),
            1 => Ok(Self::Lock),
            2 => Ok(Self::PermaUnlock),
            3 => Ok(Self::PermaLock),
            other => Err(Error::Parameter(format!("unknown lock privilege {}", other))),
        }
    }
}

/// Memory field a lock applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LockField {
    KillPassword,
    AccessPassword,
    EpcMemory,
    TidMemory,
    UserMemory,
}

impl LockField {
    /// Module lock memory code.
    pub const fn memory_code(&self) -> u32 {
        match self {
            LockField::KillPassword => LOCK_MEMORY_KILL_PASSWORD,
            LockField::AccessPassword => LOCK_MEMORY_ACCESS_PASSWORD,
            LockField::EpcMemory => LOCK_MEMORY_EPC,
            LockField::TidMemory => LOCK_MEMORY_TID,
            LockField::UserMemory => LOCK_MEMORY_USER,
        }
    }
}

impl TryFrom<u8> for LockField {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::KillPassword),
            1 => Ok(Self::AccessPassword),
            2 => Ok(Self::EpcMemory),
            3 => Ok(Self::TidMemory),
            4 => Ok(Self::UserMemory),
            other => Err(Error::Parameter(format!("unknown lock field {}", other))),
        }
    }
}
