// libnur-rs/libnur/src/protocol/filter.rs

//! Inventory filter program.
//!
//! The module's select primitive compares one contiguous bit span per
//! filter slot. A caller filter whose mask has gaps is therefore expanded
//! into one sub-filter per run of ones, and the resulting chain is combined
//! on the SL flag: the first sub-filter sets or clears SL for every tag, each
//! later one may only clear it. Two fixed filters on session S0 follow so
//! that tags read in an earlier round answer again.

use crate::types::{MemoryBank, Session};
use crate::utils::{extract_bits, ones_runs, Hex};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Caller filter: compare `bit_length` bits of `bank` starting at
/// `bit_offset` against `data` wherever `mask` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Filter {
    pub bank: MemoryBank,
    pub bit_offset: u16,
    pub bit_length: u16,
    pub data: Vec<u8>,
    pub mask: Vec<u8>,
    /// Select matching tags when true, non-matching tags when false.
    pub matching: bool,
}

impl Filter {
    pub fn new(
        bank: MemoryBank,
        bit_offset: u16,
        bit_length: u16,
        data: Vec<u8>,
        mask: Vec<u8>,
        matching: bool,
    ) -> Self {
        Self {
            bank,
            bit_offset,
            bit_length,
            data,
            mask,
            matching,
        }
    }

    /// Filter comparing every bit of `data`.
    pub fn exact(bank: MemoryBank, bit_offset: u16, data: Vec<u8>, matching: bool) -> Self {
        let bit_length = (data.len() * 8) as u16;
        let mask = vec![0xFF; data.len()];
        Self::new(bank, bit_offset, bit_length, data, mask, matching)
    }

    /// Reject filters whose mask or data do not cover `bit_length`.
    pub fn validate(&self) -> Result<()> {
        let bits = self.bit_length as usize;
        if self.mask.len() * 8 < bits {
            return Err(Error::Parameter(format!(
                "filter mask of {} bytes shorter than {} bits",
                self.mask.len(),
                bits
            )));
        }
        if self.data.len() < bits.div_ceil(8) {
            return Err(Error::Parameter(format!(
                "filter data of {} bytes shorter than {} bits",
                self.data.len(),
                bits
            )));
        }
        Ok(())
    }

    /// Split into one filter per contiguous run of mask bits.
    ///
    /// A mask without any set bit still yields one zero-length filter so
    /// the chain keeps one entry per caller filter at least.
    pub fn split_mask(&self) -> Result<Vec<Filter>> {
        let runs = ones_runs(&self.mask, self.bit_length as usize);
        if runs.is_empty() {
            return Ok(vec![Filter::new(
                self.bank,
                self.bit_offset,
                0,
                Vec::new(),
                Vec::new(),
                self.matching,
            )]);
        }

        runs.into_iter()
            .map(|(start, len)| {
                let bit_offset = u16::try_from(start)
                    .ok()
                    .and_then(|start| self.bit_offset.checked_add(start))
                    .ok_or_else(|| {
                        Error::Parameter(format!(
                            "filter run at bit {} past offset {} is out of range",
                            start, self.bit_offset
                        ))
                    })?;
                Ok(Filter::new(
                    self.bank,
                    bit_offset,
                    len as u16,
                    extract_bits(&self.data, start, len),
                    extract_bits(&self.mask, start, len),
                    self.matching,
                ))
            })
            .collect()
    }
}

/// Validate and expand caller filters into contiguous-mask filters.
pub fn expand(filters: &[Filter]) -> Result<Vec<Filter>> {
    let mut expanded = Vec::with_capacity(filters.len());
    for filter in filters {
        filter.validate()?;
        expanded.extend(filter.split_mask()?);
    }
    Ok(expanded)
}

/// Gen2 Select action (3 bits): what to do on match / on mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FilterAction {
    /// match: assert, mismatch: deassert
    AssertOrDeassert = 0,
    /// match: assert, mismatch: nothing
    AssertOnMatch = 1,
    /// match: nothing, mismatch: deassert
    DeassertOnMismatch = 2,
    /// match: toggle, mismatch: nothing
    ToggleOnMatch = 3,
    /// match: deassert, mismatch: assert
    DeassertOrAssert = 4,
    /// match: deassert, mismatch: nothing
    DeassertOnMatch = 5,
    /// match: nothing, mismatch: assert
    AssertOnMismatch = 6,
    /// match: nothing, mismatch: toggle
    ToggleOnMismatch = 7,
}

impl FilterAction {
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Action for the sub-filter at `index` so that the chain ANDs together.
    pub fn for_position(index: usize, matching: bool) -> Self {
        match (index, matching) {
            (0, true) => FilterAction::AssertOrDeassert,
            (0, false) => FilterAction::DeassertOrAssert,
            (_, true) => FilterAction::DeassertOnMismatch,
            (_, false) => FilterAction::DeassertOnMatch,
        }
    }
}

/// Which tags take part in the inventory after the select chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SelectState {
    All = 0b00,
    /// Only tags with SL asserted.
    Selected = 0b11,
}

/// One entry of the module's extended inventory filter table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubFilter {
    pub action: FilterAction,
    pub target: Session,
    pub bank: MemoryBank,
    /// Bit address inside `bank`.
    pub address: u32,
    pub mask_bit_length: u32,
    pub mask_data: Vec<u8>,
}

impl SubFilter {
    fn inventoried_reset(action: FilterAction) -> Self {
        Self {
            action,
            target: Session::S0,
            bank: MemoryBank::Epc,
            address: 0,
            mask_bit_length: 0,
            mask_data: Vec::new(),
        }
    }
}

/// Compiled select chain for one inventory round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterProgram {
    pub select_state: SelectState,
    pub filters: Vec<SubFilter>,
}

impl FilterProgram {
    /// Expand caller filters and build the chain.
    pub fn compile(filters: &[Filter]) -> Result<Self> {
        let expanded = expand(filters)?;
        Ok(Self::build(&expanded))
    }

    /// Build the chain from filters that already have contiguous masks.
    pub fn build(expanded: &[Filter]) -> Self {
        let select_state = if expanded.is_empty() {
            SelectState::All
        } else {
            SelectState::Selected
        };

        let mut filters: Vec<SubFilter> = expanded
            .iter()
            .enumerate()
            .map(|(i, f)| SubFilter {
                action: FilterAction::for_position(i, f.matching),
                target: Session::Sl,
                bank: f.bank,
                address: f.bit_offset as u32,
                mask_bit_length: f.bit_length as u32,
                mask_data: f.data.clone(),
            })
            .collect();

        filters.push(SubFilter::inventoried_reset(FilterAction::AssertOnMatch));
        filters.push(SubFilter::inventoried_reset(FilterAction::AssertOnMismatch));

        Self {
            select_state,
            filters,
        }
    }

    /// Sub-filters derived from caller filters, without the reset trailer.
    pub fn caller_filters(&self) -> &[SubFilter] {
        let end = self.filters.len().saturating_sub(2);
        &self.filters[..end]
    }
}

impl std::fmt::Display for SubFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}@{:?}:{}+{} action={} data={}",
            self.target,
            self.bank,
            self.address,
            self.mask_bit_length,
            self.action.code(),
            Hex(&self.mask_data)
        )
    }
}
