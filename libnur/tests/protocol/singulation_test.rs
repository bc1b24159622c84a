#[path = "../common/mod.rs"]
mod common;

use libnur::operation::WriteOperation;
use libnur::protocol::Filter;
use libnur::tag::{Singulation, SingulationStrategy};
use libnur::MemoryBank;

fn tid_filter(data: Vec<u8>) -> Filter {
    Filter::exact(MemoryBank::Tid, 0, data, true)
}

#[test]
fn serialized_tid_filter_selects_tid_strategy() {
    let tid = common::serialized_tid();
    let s = Singulation::optimal(&[
        Filter::exact(MemoryBank::Epc, 0x20, vec![0x30, 0x08], true),
        tid_filter(tid.clone()),
    ]);
    assert_eq!(s.strategy(), SingulationStrategy::Tid);
    assert_eq!(s.bank(), MemoryBank::Tid);
    assert_eq!(s.data(), &tid[..]);
    assert_eq!(s.bit_count(), 96);
}

#[test]
fn any_deviation_falls_back_to_epc() {
    let tid = common::serialized_tid();

    let mut offset = tid_filter(tid.clone());
    offset.bit_offset = 16;

    let mut negated = tid_filter(tid.clone());
    negated.matching = false;

    let mut unserialized = tid.clone();
    unserialized[4] = 0x00;

    let mut holey = tid_filter(tid.clone());
    holey.mask[11] = 0xFE;

    let short = tid_filter(tid[..8].to_vec());

    for filter in [offset, negated, tid_filter(unserialized), holey, short] {
        let s = Singulation::optimal(&[filter]);
        assert_eq!(s.strategy(), SingulationStrategy::Epc);
        assert!(!s.is_seeded());
    }
}

#[test]
fn epc_write_tracks_tag_record() {
    let mut tag = common::cafebabe_tag();
    let mut sing = Singulation::for_tag(SingulationStrategy::Epc, &tag);

    let op = |offset: u16, data: &str| WriteOperation {
        id: "w".into(),
        bank: MemoryBank::Epc,
        offset,
        data: hex::decode(data).unwrap(),
        password: 0,
    };

    assert_eq!(sing.apply_write(&mut tag, &op(2, "1234")), Some(hex::decode("1234BABE").unwrap()));
    assert_eq!(tag.epc(), &hex::decode("1234BABE").unwrap()[..]);
    assert_eq!(tag.inventoried_epc(), &hex::decode("CAFEBABE").unwrap()[..]);
    assert_eq!(sing.data(), tag.epc());

    // CRC/PC only, and past the EPC end: no change
    assert_eq!(sing.apply_write(&mut tag, &op(0, "00003000")), None);
    assert_eq!(sing.apply_write(&mut tag, &op(4, "FFFF")), None);

    // straddling PC and EPC overlays only the EPC part, length preserved
    assert_eq!(
        sing.apply_write(&mut tag, &op(1, "AAAA5555666677778888")),
        Some(hex::decode("55556666").unwrap())
    );
}

#[test]
fn tid_strategy_keeps_pattern_on_epc_write() {
    let tid = common::serialized_tid();
    let mut sing = Singulation::optimal(&[tid_filter(tid.clone())]);
    let mut tag = common::cafebabe_tag().with_tid(tid.clone());
    let write = WriteOperation {
        id: "w".into(),
        bank: MemoryBank::Epc,
        offset: 2,
        data: vec![0, 1],
        password: 0,
    };
    assert!(sing.apply_write(&mut tag, &write).is_some());
    assert_eq!(sing.data(), &tid[..]);
    assert_eq!(tag.shadow_epc(), Some(&[0x00, 0x01, 0xBA, 0xBE][..]));
}
