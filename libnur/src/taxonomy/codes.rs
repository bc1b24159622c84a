// libnur-rs/libnur/src/taxonomy/codes.rs

use std::fmt;

/// Numeric error code reported by a NUR radio module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleErrorCode(u32);

macro_rules! module_codes {
    ($($(#[$doc:meta])* $name:ident = $value:literal;)*) => {
        impl ModuleErrorCode {
            $(
                $(#[$doc])*
                pub const $name: Self = Self($value);
            )*

            /// Every code this crate knows by name.
            pub const KNOWN: &'static [Self] = &[$(Self::$name),*];

            /// Symbolic name of a known code.
            pub fn name(&self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some(stringify!($name)),)*
                    _ => None,
                }
            }
        }
    };
}

module_codes! {
    /// Command not recognised by the module firmware.
    INVALID_COMMAND = 0x01;
    INVALID_LENGTH = 0x02;
    PARAMETER_OUT_OF_RANGE = 0x03;
    RECEIVE_TIMEOUT = 0x04;
    INVALID_PARAMETER = 0x05;
    PROGRAM_FAILED = 0x06;
    PARAMETER_MISMATCH = 0x07;
    HW_MISMATCH = 0x08;
    RESERVED1 = 0x09;
    PAGE_PROGRAM = 0x0A;
    CRC_CHECK = 0x0B;
    CRC_MISMATCH = 0x0C;
    NOT_READY = 0x0D;
    APP_NOT_PRESENT = 0x0E;
    GENERAL = 0x10;

    /// No tag answered in the field.
    NO_TAG = 0x20;
    RESP_AIR = 0x21;
    /// Singulation of the addressed tag failed.
    G2_SELECT = 0x22;
    MISSING_SELDATA = 0x23;
    /// Tag refused the access command.
    G2_ACCESS = 0x24;
    G2_READ = 0x30;
    G2_RD_PART = 0x31;
    G2_WRITE = 0x40;
    G2_WR_PART = 0x41;
    /// Tag did not respond to an access command.
    G2_TAG_RESP = 0x42;
    G2_SPECIAL = 0x50;
    READER_HW = 0x60;
    BAD_ANTENNA = 0x61;
    LOW_VOLTAGE = 0x62;
    OVER_TEMP = 0x63;

    INVALID_HANDLE = 0x1000;
    TRANSPORT = 0x1001;
    TR_NOT_CONNECTED = 0x1002;
    TR_TIMEOUT = 0x1003;
    BUFFER_TOO_SMALL = 0x1004;
    NOT_SUPPORTED = 0x1005;
    NO_PAYLOAD = 0x1006;
    INVALID_PACKET = 0x1007;
    PACKET_TOO_LONG = 0x1008;
    PACKET_CS_ERROR = 0x1009;
    NOT_WORD_BOUNDARY = 0x100A;
    FILE_NOT_FOUND = 0x100B;
    FILE_INVALID = 0x100C;
    MCU_ARCH = 0x100D;

    /// Gen2 tag backscattered an "other error" reply.
    G2_TAG_OTHER_ERROR = 0x100E;
    G2_TAG_MEM_OVERRUN = 0x100F;
    G2_TAG_MEM_LOCKED = 0x1010;
    G2_TAG_INSUF_POWER = 0x1011;
    G2_TAG_NON_SPECIFIC = 0x1012;
}

impl ModuleErrorCode {
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Host- or module-side timeouts.
    pub fn is_timeout(&self) -> bool {
        matches!(*self, Self::RECEIVE_TIMEOUT | Self::TR_TIMEOUT)
    }
}

impl From<u32> for ModuleErrorCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for ModuleErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({:#06x})", name, self.0),
            None => write!(f, "unknown ({:#06x})", self.0),
        }
    }
}
