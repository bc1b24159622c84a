#[path = "../common/mod.rs"]
mod common;

use libnur::operation::OperationResult;
use libnur::protocol::Filter;
use libnur::radio::RadioCall;
use libnur::test_support::{initialized_mock_reader, sample_tag};
use libnur::{AntennaId, AntennaMask, ExecuteConfig, MemoryBank, ReadResultKind, Region};

#[test]
fn zero_length_epc_read_returns_whole_bank() -> anyhow::Result<()> {
    common::init_logger();
    let mut m = initialized_mock_reader(Region::Eu, AntennaMask::new(0b0001), ExecuteConfig::default())?;
    m.radio.borrow_mut().push_inventory(vec![common::cafebabe_tag()]);

    let ops = vec![common::read("epc", MemoryBank::Epc, 0, 0)];
    let tags = m.reader.execute(&[AntennaId::new(1)], &[], &ops, None)?;

    assert_eq!(tags.len(), 1);
    let tag = &tags[0];
    assert_eq!(tag.tag_data_id, 0);
    assert_eq!(tag.antenna, Some(AntennaId::new(1)));
    assert_eq!(tag.epc, hex::decode("CAFEBABE")?);
    match tag.result("epc") {
        Some(OperationResult::Read(r)) => {
            assert_eq!(r.kind, ReadResultKind::Success);
            assert_eq!(r.data, hex::decode("00001000CAFEBABE")?);
        }
        other => panic!("unexpected {:?}", other),
    }
    // inventory only, the bank image is assembled locally
    assert_eq!(m.radio.borrow().calls.len(), 1);
    Ok(())
}

#[test]
fn empty_antenna_list_contacts_nothing() -> anyhow::Result<()> {
    let mut m = initialized_mock_reader(Region::Eu, AntennaMask::ALL, ExecuteConfig::default())?;
    m.radio.borrow_mut().push_inventory(vec![common::cafebabe_tag()]);

    let ops = vec![common::read("epc", MemoryBank::Epc, 0, 0)];
    let tags = m.reader.execute(&[], &[], &ops, None)?;
    assert!(tags.is_empty());
    assert!(m.radio.borrow().calls.is_empty());
    assert!(m.setup.borrow().mask_writes.is_empty());
    Ok(())
}

#[test]
fn unset_region_contacts_nothing() -> anyhow::Result<()> {
    let mut m = initialized_mock_reader(Region::Unspecified, AntennaMask::ALL, ExecuteConfig::default())?;
    m.radio.borrow_mut().push_inventory(vec![common::cafebabe_tag()]);

    let tags = m.reader.execute(
        &[AntennaId::new(1), AntennaId::new(2)],
        &[],
        &[common::read("r", MemoryBank::User, 0, 2)],
        None,
    )?;
    assert!(tags.is_empty());
    assert!(m.radio.borrow().calls.is_empty());
    Ok(())
}

#[test]
fn disconnected_antennas_are_dropped() -> anyhow::Result<()> {
    let mut m = initialized_mock_reader(Region::Fcc, AntennaMask::new(0b0101), ExecuteConfig::default())?;
    let tags = m.reader.execute(&[AntennaId::new(2)], &[], &[], None)?;
    assert!(tags.is_empty());
    assert!(m.radio.borrow().calls.is_empty());
    Ok(())
}

#[test]
fn filters_reach_the_inventory() -> anyhow::Result<()> {
    let mut m = initialized_mock_reader(Region::Eu, AntennaMask::ALL, ExecuteConfig::default())?;
    let filter = Filter::exact(MemoryBank::Epc, 0x20, hex::decode("CAFE")?, true);
    m.reader.execute(&[AntennaId::ALL], &[filter], &[], None)?;

    let radio = m.radio.borrow();
    let inventories = radio.inventory_calls();
    assert_eq!(inventories.len(), 1);
    let (_, program) = inventories[0];
    assert_eq!(program.caller_filters().len(), 1);
    assert_eq!(program.filters.len(), 3);
    Ok(())
}

#[test]
fn tid_singulation_addresses_every_tag_by_tid() -> anyhow::Result<()> {
    let mut m = initialized_mock_reader(Region::Eu, AntennaMask::ALL, ExecuteConfig::default())?;
    let tid = common::serialized_tid();
    m.radio
        .borrow_mut()
        .push_inventory(vec![sample_tag(2, &[0x11, 0x22]).with_tid(tid.clone())]);
    m.radio.borrow_mut().push_read(Ok(vec![0xAB, 0xCD]));

    let filter = Filter::exact(MemoryBank::Tid, 0, tid.clone(), true);
    let ops = vec![common::read("u", MemoryBank::User, 0, 1)];
    let tags = m.reader.execute(&[AntennaId::ALL], &[filter], &ops, None)?;

    assert_eq!(tags.len(), 1);
    let radio = m.radio.borrow();
    assert_eq!(radio.inventory_calls()[0].0.tid_words, Some(4));
    match radio.tag_calls()[0] {
        RadioCall::Read { sing, bank, .. } => {
            assert_eq!(sing, &tid);
            assert_eq!(*bank, MemoryBank::User);
        }
        other => panic!("unexpected {:?}", other),
    }
    Ok(())
}
