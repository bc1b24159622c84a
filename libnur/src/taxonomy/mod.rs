// libnur-rs/libnur/src/taxonomy/mod.rs

//! Hardware-independent error taxonomy.
//!
//! Module error codes are reduced to an [`RfcError`] first, then widened
//! into the result kind of the operation that failed. A few codes mean
//! something different depending on the operation, so the mapper takes an
//! [`ErrorContext`].

pub mod codes;
pub mod results;

pub use codes::ModuleErrorCode;
pub use results::{
    CustomResultKind, KillResultKind, LockResultKind, ReadResultKind, WriteResultKind,
};

use derive_more::Display;

use crate::Error;

/// Closed taxonomy of tag and reader failures.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RfcError {
    NonSpecificTagError,
    NonSpecificReaderError,
    NoResponseFromTagError,
    MemoryOverrunError,
    MemoryLockedError,
    IncorrectPasswordError,
    InsufficientPowerError,
    /// Never reported by the module; a Gen2 kill with password 0 is refused locally.
    ZeroKillPasswordError,
}

impl RfcError {
    pub const ALL: &'static [RfcError] = &[
        RfcError::NonSpecificTagError,
        RfcError::NonSpecificReaderError,
        RfcError::NoResponseFromTagError,
        RfcError::MemoryOverrunError,
        RfcError::MemoryLockedError,
        RfcError::IncorrectPasswordError,
        RfcError::InsufficientPowerError,
        RfcError::ZeroKillPasswordError,
    ];
}

/// Operation a module error was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Read,
    Write,
    Lock,
    Kill,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorContext {
    pub kind: OperationKind,
    /// Whether the caller sent a non-zero access password with the command.
    pub password_supplied: bool,
}

impl ErrorContext {
    pub fn read(password: u32) -> Self {
        Self::with_password(OperationKind::Read, password)
    }

    pub fn write(password: u32) -> Self {
        Self::with_password(OperationKind::Write, password)
    }

    pub fn custom(password: u32) -> Self {
        Self::with_password(OperationKind::Custom, password)
    }

    pub fn lock() -> Self {
        Self {
            kind: OperationKind::Lock,
            password_supplied: true,
        }
    }

    pub fn kill() -> Self {
        Self {
            kind: OperationKind::Kill,
            password_supplied: true,
        }
    }

    fn with_password(kind: OperationKind, password: u32) -> Self {
        Self {
            kind,
            password_supplied: password != 0,
        }
    }
}

/// Generic family of a module code, independent of the operation.
///
/// Codes missing from the table are reader faults.
pub fn classify(code: ModuleErrorCode) -> RfcError {
    use ModuleErrorCode as C;

    match code {
        C::MISSING_SELDATA
        | C::G2_READ
        | C::G2_RD_PART
        | C::G2_WRITE
        | C::G2_WR_PART
        | C::G2_SPECIAL
        | C::G2_TAG_NON_SPECIFIC => RfcError::NonSpecificTagError,
        C::G2_SELECT | C::G2_ACCESS => RfcError::IncorrectPasswordError,
        C::G2_TAG_MEM_OVERRUN => RfcError::MemoryOverrunError,
        C::G2_TAG_MEM_LOCKED => RfcError::MemoryLockedError,
        C::G2_TAG_INSUF_POWER => RfcError::InsufficientPowerError,
        C::G2_TAG_RESP => RfcError::NoResponseFromTagError,
        _ => RfcError::NonSpecificReaderError,
    }
}

/// Map a module error code raised by the operation described by `ctx`.
pub fn map_module_error(code: ModuleErrorCode, ctx: ErrorContext) -> RfcError {
    use ModuleErrorCode as C;

    match (ctx.kind, code) {
        (OperationKind::Read | OperationKind::Write | OperationKind::Custom, C::G2_ACCESS) => {
            if ctx.password_supplied {
                RfcError::IncorrectPasswordError
            } else {
                RfcError::NonSpecificTagError
            }
        }
        (OperationKind::Lock, C::G2_WRITE) => RfcError::IncorrectPasswordError,
        (OperationKind::Kill, C::G2_WRITE | C::G2_TAG_RESP) => RfcError::IncorrectPasswordError,
        _ => classify(code),
    }
}

/// Map any crate error raised while talking to a tag.
///
/// Module faults go through [`map_module_error`]; host-side transport
/// failures are reader errors and everything else is a tag error.
pub fn map_error(err: &Error, ctx: ErrorContext) -> RfcError {
    match err {
        Error::Module(code) => map_module_error(*code, ctx),
        Error::Timeout | Error::Io(_) | Error::Transport(_) | Error::NotConnected => {
            RfcError::NonSpecificReaderError
        }
        _ => RfcError::NonSpecificTagError,
    }
}
