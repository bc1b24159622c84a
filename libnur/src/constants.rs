// libnur-rs/libnur/src/constants.rs
//! Gen2 memory geometry and module constants used across the crate

/// Word count of the reserved (password) bank.
pub const RESERVED_BANK_WORDS: u32 = 4;

/// TID words that every Gen2 tag answers reliably.
pub const TID_MIN_WORDS: u32 = 3;

/// TID words captured during inventory when optimized TID reading is on.
pub const TID_SNAPSHOT_WORDS: u8 = 4;

/// Default word count probed for a complete User bank read.
pub const USER_BANK_DEFAULT_WORDS: u16 = 32;

/// EPC bank words covering CRC and PC ahead of the EPC.
pub const EPC_HEADER_WORDS: u32 = 2;

/// EPC bank words read when an XPC is present (0x000..0x21F).
pub const EPC_BANK_XPC_WORDS: u32 = 22;

/// Byte offset of the first XPC word inside that read.
pub const XPC_BYTE_OFFSET: usize = 42;

/// Bit address of the EPC inside the EPC bank.
pub const EPC_SINGULATION_ADDRESS: u32 = 0x20;

/// Bit address used for TID singulation.
pub const TID_SINGULATION_ADDRESS: u32 = 0x00;

/// Longest select mask the module accepts.
pub const MAX_SINGULATION_BITS: u32 = 0xFF;

/// TID bits guaranteed without an extended header (class, vendor, model).
pub const TID_SHORT_BITS: u32 = 32;

/// TID bits up to and including the XTID header.
pub const TID_BASE_BITS: u32 = 48;

/// TID bits a filter must cover to identify a tag by serial.
pub const TID_SERIAL_FILTER_BITS: u32 = 96;

/// TID prefix of EM Microelectronic EM4325 sensor tags.
pub const EM4325_TID_PREFIX: [u8; 4] = [0xE2, 0x80, 0xB0, 0x40];

/// Raw sensor command understood without a vendor prefix.
pub const SENSOR_COMMAND_DEPRECATED: [u8; 6] = [0xE0, 0x02, 0x48, 0x00, 0x00, 0x00];

/// Significant bits of [`SENSOR_COMMAND_DEPRECATED`].
pub const SENSOR_COMMAND_DEPRECATED_BITS: usize = 44;

/// Mask designer id prefixing vendor sensor commands.
pub const SENSOR_VENDOR_ID: u16 = 0x000B;

/// Tag model number prefixing vendor sensor commands.
pub const SENSOR_MODEL_ID: u16 = 0x0040;

/// Bits of vendor and model prefix stripped before transmission.
pub const SENSOR_PREFIX_BITS: u32 = 32;

/// Module lock action codes.
pub const LOCK_ACTION_OPEN: u32 = 0;
pub const LOCK_ACTION_PERMAWRITE: u32 = 1;
pub const LOCK_ACTION_SECURED: u32 = 2;
pub const LOCK_ACTION_PERMALOCK: u32 = 3;

/// Module lock memory codes.
pub const LOCK_MEMORY_USER: u32 = 1;
pub const LOCK_MEMORY_TID: u32 = 2;
pub const LOCK_MEMORY_EPC: u32 = 4;
pub const LOCK_MEMORY_ACCESS_PASSWORD: u32 = 8;
pub const LOCK_MEMORY_KILL_PASSWORD: u32 = 16;

/// Reflected power reported for a non-finite measurement, in dB.
pub const REFLECTED_POWER_FLOOR_DB: f64 = -30.0;

/// Upper bound on waiting for the module to confirm a disconnect, in ms.
pub const DISCONNECT_TIMEOUT_MS: u64 = 5000;
