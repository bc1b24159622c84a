// libnur-rs/libnur/src/taxonomy/results.rs

//! Public result kinds, one per operation.
//!
//! Each enum is a projection of [`RfcError`]: taxonomy values an operation
//! cannot produce collapse to `NonSpecificTagError`.

use derive_more::Display;

use super::RfcError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReadResultKind {
    Success,
    NonSpecificTagError,
    NoResponseFromTag,
    NonSpecificReaderError,
    MemoryOverrunError,
    MemoryLockedError,
    IncorrectPasswordError,
}

impl From<RfcError> for ReadResultKind {
    fn from(err: RfcError) -> Self {
        match err {
            RfcError::NoResponseFromTagError => Self::NoResponseFromTag,
            RfcError::NonSpecificReaderError => Self::NonSpecificReaderError,
            RfcError::MemoryOverrunError => Self::MemoryOverrunError,
            RfcError::MemoryLockedError => Self::MemoryLockedError,
            RfcError::IncorrectPasswordError => Self::IncorrectPasswordError,
            RfcError::NonSpecificTagError
            | RfcError::InsufficientPowerError
            | RfcError::ZeroKillPasswordError => Self::NonSpecificTagError,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WriteResultKind {
    Success,
    NonSpecificTagError,
    NoResponseFromTag,
    NonSpecificReaderError,
    MemoryOverrunError,
    MemoryLockedError,
    InsufficientPower,
    IncorrectPasswordError,
}

impl From<RfcError> for WriteResultKind {
    fn from(err: RfcError) -> Self {
        match err {
            RfcError::NoResponseFromTagError => Self::NoResponseFromTag,
            RfcError::NonSpecificReaderError => Self::NonSpecificReaderError,
            RfcError::MemoryOverrunError => Self::MemoryOverrunError,
            RfcError::MemoryLockedError => Self::MemoryLockedError,
            RfcError::InsufficientPowerError => Self::InsufficientPower,
            RfcError::IncorrectPasswordError => Self::IncorrectPasswordError,
            RfcError::NonSpecificTagError | RfcError::ZeroKillPasswordError => {
                Self::NonSpecificTagError
            }
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LockResultKind {
    Success,
    NonSpecificTagError,
    NoResponseFromTag,
    NonSpecificReaderError,
    MemoryOverrunError,
    MemoryLockedError,
    InsufficientPower,
    IncorrectPasswordError,
}

impl From<RfcError> for LockResultKind {
    fn from(err: RfcError) -> Self {
        match err {
            RfcError::NoResponseFromTagError => Self::NoResponseFromTag,
            RfcError::NonSpecificReaderError => Self::NonSpecificReaderError,
            RfcError::MemoryOverrunError => Self::MemoryOverrunError,
            RfcError::MemoryLockedError => Self::MemoryLockedError,
            RfcError::InsufficientPowerError => Self::InsufficientPower,
            RfcError::IncorrectPasswordError => Self::IncorrectPasswordError,
            RfcError::NonSpecificTagError | RfcError::ZeroKillPasswordError => {
                Self::NonSpecificTagError
            }
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KillResultKind {
    Success,
    ZeroKillPasswordError,
    InsufficientPower,
    NonSpecificTagError,
    NoResponseFromTag,
    NonSpecificReaderError,
    IncorrectPasswordError,
}

impl From<RfcError> for KillResultKind {
    fn from(err: RfcError) -> Self {
        match err {
            RfcError::ZeroKillPasswordError => Self::ZeroKillPasswordError,
            RfcError::InsufficientPowerError => Self::InsufficientPower,
            RfcError::NoResponseFromTagError => Self::NoResponseFromTag,
            RfcError::NonSpecificReaderError => Self::NonSpecificReaderError,
            RfcError::IncorrectPasswordError => Self::IncorrectPasswordError,
            RfcError::NonSpecificTagError
            | RfcError::MemoryOverrunError
            | RfcError::MemoryLockedError => Self::NonSpecificTagError,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CustomResultKind {
    Success,
    /// The payload matched no supported vendor command.
    OpNotPossibleError,
    NonSpecificTagError,
    NoResponseFromTag,
    NonSpecificReaderError,
    MemoryOverrunError,
    MemoryLockedError,
    InsufficientPower,
    IncorrectPasswordError,
}

impl From<RfcError> for CustomResultKind {
    fn from(err: RfcError) -> Self {
        match err {
            RfcError::NoResponseFromTagError => Self::NoResponseFromTag,
            RfcError::NonSpecificReaderError => Self::NonSpecificReaderError,
            RfcError::MemoryOverrunError => Self::MemoryOverrunError,
            RfcError::MemoryLockedError => Self::MemoryLockedError,
            RfcError::InsufficientPowerError => Self::InsufficientPower,
            RfcError::IncorrectPasswordError => Self::IncorrectPasswordError,
            RfcError::NonSpecificTagError | RfcError::ZeroKillPasswordError => {
                Self::NonSpecificTagError
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_never_exposes_power_or_kill_errors() {
        assert_eq!(
            ReadResultKind::from(RfcError::InsufficientPowerError),
            ReadResultKind::NonSpecificTagError
        );
        assert_eq!(
            ReadResultKind::from(RfcError::ZeroKillPasswordError),
            ReadResultKind::NonSpecificTagError
        );
        assert_eq!(
            ReadResultKind::from(RfcError::MemoryLockedError),
            ReadResultKind::MemoryLockedError
        );
    }

    #[test]
    fn kill_collapses_memory_errors() {
        assert_eq!(
            KillResultKind::from(RfcError::MemoryOverrunError),
            KillResultKind::NonSpecificTagError
        );
        assert_eq!(
            KillResultKind::from(RfcError::MemoryLockedError),
            KillResultKind::NonSpecificTagError
        );
        assert_eq!(
            KillResultKind::from(RfcError::ZeroKillPasswordError),
            KillResultKind::ZeroKillPasswordError
        );
    }

    #[test]
    fn write_lock_custom_share_projection() {
        for err in RfcError::ALL {
            if *err == RfcError::ZeroKillPasswordError {
                continue;
            }
            let w = WriteResultKind::from(*err).to_string();
            let l = LockResultKind::from(*err).to_string();
            let c = CustomResultKind::from(*err).to_string();
            assert_eq!(w, l);
            assert_eq!(w, c);
        }
    }

    #[test]
    fn display_is_variant_name() {
        assert_eq!(ReadResultKind::Success.to_string(), "Success");
        assert_eq!(
            CustomResultKind::OpNotPossibleError.to_string(),
            "OpNotPossibleError"
        );
    }
}
