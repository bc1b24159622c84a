// libnur-rs/libnur/src/error.rs

use thiserror::Error;

use crate::taxonomy::ModuleErrorCode;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The radio module rejected a command with a numeric error code.
    #[error("module error: {0}")]
    Module(ModuleErrorCode),

    #[error("operation timed out")]
    Timeout,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal indexing fault while decoding a module response.
    #[error("indexing error: {0}")]
    Indexing(String),

    /// Caller supplied an argument the core cannot express on the air
    /// interface (unknown lock code, malformed filter, ...).
    #[error("invalid parameter: {0}")]
    Parameter(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("reader not connected")]
    NotConnected,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// Module code carried by this error, if it came from the radio module.
    pub fn module_code(&self) -> Option<ModuleErrorCode> {
        match self {
            Error::Module(code) => Some(*code),
            _ => None,
        }
    }

    /// Transient faults that an inventory round treats as "no tags found".
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Timeout | Error::Io(_) | Error::Indexing(_) => true,
            Error::Module(code) => code.is_timeout(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
