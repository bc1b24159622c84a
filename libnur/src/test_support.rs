//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize mock radio and setup wiring so tests across the
//! crate and tests/ directory can keep a handle on the mocks after a Reader
//! owns them.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ExecuteConfig;
use crate::device::{Initialized, Reader};
use crate::protocol::{CustomExchange, FilterProgram};
use crate::radio::{DisconnectSignal, InventoryParams, MockRadio, Radio, ReaderInfo};
use crate::setup::{MockSetup, ReflectedPower, SetupBackend};
use crate::tag::{InventoriedTag, Singulation};
use crate::types::{AntennaId, AntennaMask, MemoryBank, Region, Session};
use crate::Result;

/// Radio that delegates into a shared [`MockRadio`].
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct SharedRadio {
    inner: Rc<RefCell<MockRadio>>,
}

impl SharedRadio {
    pub fn new(inner: Rc<RefCell<MockRadio>>) -> Self {
        Self { inner }
    }
}

impl Radio for SharedRadio {
    fn read(
        &mut self,
        sing: &Singulation,
        bank: MemoryBank,
        word_offset: u32,
        byte_len: usize,
        password: u32,
    ) -> Result<Vec<u8>> {
        self.inner
            .borrow_mut()
            .read(sing, bank, word_offset, byte_len, password)
    }

    fn write(
        &mut self,
        sing: &Singulation,
        bank: MemoryBank,
        word_offset: u32,
        data: &[u8],
        password: u32,
    ) -> Result<u16> {
        self.inner
            .borrow_mut()
            .write(sing, bank, word_offset, data, password)
    }

    fn lock(
        &mut self,
        sing: &Singulation,
        memory_code: u32,
        action_code: u32,
        password: u32,
    ) -> Result<()> {
        self.inner
            .borrow_mut()
            .lock(sing, memory_code, action_code, password)
    }

    fn kill(&mut self, sing: &Singulation, password: u32) -> Result<()> {
        self.inner.borrow_mut().kill(sing, password)
    }

    fn custom_exchange(&mut self, sing: &Singulation, exchange: &CustomExchange) -> Result<Vec<u8>> {
        self.inner.borrow_mut().custom_exchange(sing, exchange)
    }

    fn run_inventory(
        &mut self,
        params: &InventoryParams,
        program: &FilterProgram,
    ) -> Result<Vec<InventoriedTag>> {
        self.inner.borrow_mut().run_inventory(params, program)
    }

    fn reset_to_target(&mut self, session: Session, target_a: bool) -> Result<()> {
        self.inner.borrow_mut().reset_to_target(session, target_a)
    }

    fn reader_info(&mut self) -> Result<ReaderInfo> {
        self.inner.borrow_mut().reader_info()
    }

    fn disconnect(&mut self) -> Result<DisconnectSignal> {
        self.inner.borrow_mut().disconnect()
    }
}

/// Setup backend that delegates into a shared [`MockSetup`].
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct SharedSetup {
    inner: Rc<RefCell<MockSetup>>,
}

impl SharedSetup {
    pub fn new(inner: Rc<RefCell<MockSetup>>) -> Self {
        Self { inner }
    }
}

impl SetupBackend for SharedSetup {
    fn load(&mut self) -> Result<()> {
        self.inner.borrow_mut().load()
    }

    fn current_region(&self) -> Region {
        self.inner.borrow().current_region()
    }

    fn antenna_mask(&self) -> AntennaMask {
        self.inner.borrow().antenna_mask()
    }

    fn apply_antenna_mask(&mut self, mask: AntennaMask) -> Result<()> {
        self.inner.borrow_mut().apply_antenna_mask(mask)
    }

    fn connected_antennas(&self) -> AntennaMask {
        self.inner.borrow().connected_antennas()
    }

    fn set_antenna_connected(&mut self, antenna: AntennaId, connected: bool) {
        self.inner.borrow_mut().set_antenna_connected(antenna, connected)
    }

    fn reflected_power(&mut self, antenna: AntennaId) -> Result<ReflectedPower> {
        self.inner.borrow_mut().reflected_power(antenna)
    }
}

/// Mocks shared with an initialized reader.
#[doc(hidden)]
pub struct MockReader {
    pub radio: Rc<RefCell<MockRadio>>,
    pub setup: Rc<RefCell<MockSetup>>,
    pub reader: Reader<Initialized>,
}

/// Convenience: create and initialize a Reader<Initialized> backed by
/// shared mocks for `region` with the antennas of `mask` enabled and
/// connected.
#[doc(hidden)]
pub fn initialized_mock_reader(
    region: Region,
    mask: AntennaMask,
    config: ExecuteConfig,
) -> Result<MockReader> {
    let radio = Rc::new(RefCell::new(MockRadio::new()));
    let setup = Rc::new(RefCell::new(MockSetup::new(region, mask)));
    let reader = Reader::new(
        Box::new(SharedRadio::new(radio.clone())),
        Box::new(SharedSetup::new(setup.clone())),
        config,
    )
    .initialize()?;
    Ok(MockReader {
        radio,
        setup,
        reader,
    })
}

/// Tag seen on `antenna` whose PC announces exactly `epc`.
#[doc(hidden)]
pub fn sample_tag(antenna: u8, epc: &[u8]) -> InventoriedTag {
    let pc = ((epc.len() / 2) as u16) << 11;
    InventoriedTag::new(AntennaId::new(antenna), pc, epc.to_vec())
}
