// libnur-rs/libnur/src/types.rs

use derive_more::{BitAnd, BitOr, Display};
use std::convert::TryFrom;

use crate::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gen2 メモリバンク
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MemoryBank {
    /// Kill and access passwords.
    Reserved = 0,
    Epc = 1,
    Tid = 2,
    User = 3,
}

impl MemoryBank {
    pub const fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for MemoryBank {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Reserved),
            1 => Ok(Self::Epc),
            2 => Ok(Self::Tid),
            3 => Ok(Self::User),
            other => Err(Error::Parameter(format!("unknown memory bank {}", other))),
        }
    }
}

/// Gen2 セッション / Select target
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Session {
    #[default]
    S0 = 0,
    S1 = 1,
    S2 = 2,
    S3 = 3,
    /// Selected flag; only valid as a Select target.
    Sl = 4,
}

impl Session {
    pub const fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Session {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::S0),
            1 => Ok(Self::S1),
            2 => Ok(Self::S2),
            3 => Ok(Self::S3),
            4 => Ok(Self::Sl),
            other => Err(Error::Parameter(format!("unknown session {}", other))),
        }
    }
}

/// Antenna id, 1-based. Id 0 requests every connected antenna.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "antenna {}", _0)]
pub struct AntennaId(u8);

impl AntennaId {
    pub const ALL: Self = Self(0);

    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == 0
    }

    /// Mask bit driving this antenna; the sentinel selects every antenna.
    pub fn mask(&self) -> AntennaMask {
        match self.0 {
            0 => AntennaMask::ALL,
            id if id as u32 <= AntennaMask::MAX_ANTENNAS => AntennaMask(1 << (id - 1)),
            _ => AntennaMask::NONE,
        }
    }
}

/// Antenna enable bitmask as stored in the module setup.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, BitAnd, BitOr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "{:#06x}", _0)]
pub struct AntennaMask(u32);

impl AntennaMask {
    pub const NONE: Self = Self(0);
    pub const MAX_ANTENNAS: u32 = 4;
    pub const ALL: Self = Self((1 << Self::MAX_ANTENNAS) - 1);

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn for_antennas(antennas: &[AntennaId]) -> Self {
        antennas
            .iter()
            .fold(Self::NONE, |mask, antenna| mask | antenna.mask())
    }

    pub fn contains(&self, antenna: AntennaId) -> bool {
        !antenna.is_all() && (*self & antenna.mask()) == antenna.mask()
    }

    pub fn enabled_count(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn antennas(&self) -> Vec<AntennaId> {
        (1..=Self::MAX_ANTENNAS as u8)
            .map(AntennaId::new)
            .filter(|a| self.contains(*a))
            .collect()
    }
}

/// Regulatory region of the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Region {
    Eu,
    Fcc,
    Japan,
    China,
    /// No region configured; the module must not transmit.
    #[default]
    Unspecified,
}

impl Region {
    pub fn code(&self) -> &'static str {
        match self {
            Region::Eu => "EU",
            Region::Fcc => "FCC",
            Region::Japan => "Japan",
            Region::China => "China",
            Region::Unspecified => "Unspecified",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "EU" => Region::Eu,
            "FCC" => Region::Fcc,
            "Japan" => Region::Japan,
            "China" => Region::China,
            _ => Region::Unspecified,
        }
    }

    /// Map a module region id; regions without a profile here are unspecified.
    pub fn from_module_id(id: u8) -> Self {
        match id {
            0 => Region::Eu,
            1 => Region::Fcc,
            2 => Region::China,
            7 => Region::Japan,
            _ => Region::Unspecified,
        }
    }

    pub fn module_id(&self) -> u8 {
        match self {
            Region::Eu => 0,
            Region::Fcc => 1,
            Region::China => 2,
            Region::Japan => 7,
            Region::Unspecified => 0xFE,
        }
    }

    pub fn is_specified(&self) -> bool {
        *self != Region::Unspecified
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// How an antenna's connection state is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConnectType {
    Connected,
    Disconnected,
    #[default]
    Auto,
}
