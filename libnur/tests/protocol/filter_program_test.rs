use libnur::protocol::{Filter, FilterAction, FilterProgram, SelectState};
use libnur::{Error, MemoryBank, Session};

const TRAILER: [FilterAction; 2] = [FilterAction::AssertOnMatch, FilterAction::AssertOnMismatch];

fn actions(program: &FilterProgram) -> Vec<FilterAction> {
    program.filters.iter().map(|f| f.action).collect()
}

#[test]
fn empty_list_still_has_trailer() {
    let p = FilterProgram::compile(&[]).unwrap();
    assert_eq!(p.select_state, SelectState::All);
    assert_eq!(actions(&p), TRAILER.to_vec());
    for f in &p.filters {
        assert_eq!(f.target, Session::S0);
        assert_eq!(f.bank, MemoryBank::Epc);
        assert_eq!(f.mask_bit_length, 0);
        assert!(f.mask_data.is_empty());
    }
}

#[test]
fn single_full_mask_filter() {
    let epc = hex::decode("300833B2DDD9014000000000").unwrap();
    let p = FilterProgram::compile(&[Filter::exact(MemoryBank::Epc, 0x20, epc.clone(), true)]).unwrap();
    assert_eq!(p.select_state, SelectState::Selected);
    assert_eq!(
        actions(&p),
        vec![FilterAction::AssertOrDeassert, TRAILER[0], TRAILER[1]]
    );
    let first = &p.filters[0];
    assert_eq!(first.target, Session::Sl);
    assert_eq!(first.address, 0x20);
    assert_eq!(first.mask_bit_length, 96);
    assert_eq!(first.mask_data, epc);
}

#[test]
fn gapped_mask_splits_into_runs() {
    // mask 9AC45F03 over 14 bits: 1001 1010 1100 01 -> five runs
    let f = Filter::new(
        MemoryBank::User,
        4,
        14,
        hex::decode("FFFFFFFF").unwrap(),
        hex::decode("9AC45F03").unwrap(),
        true,
    );
    let p = FilterProgram::compile(&[f]).unwrap();
    assert_eq!(p.caller_filters().len(), 5);
    assert_eq!(
        actions(&p),
        vec![
            FilterAction::AssertOrDeassert,
            FilterAction::DeassertOnMismatch,
            FilterAction::DeassertOnMismatch,
            FilterAction::DeassertOnMismatch,
            FilterAction::DeassertOnMismatch,
            TRAILER[0],
            TRAILER[1],
        ]
    );
    let spans: Vec<(u32, u32)> = p
        .caller_filters()
        .iter()
        .map(|s| (s.address, s.mask_bit_length))
        .collect();
    assert_eq!(spans, vec![(4, 1), (7, 2), (10, 1), (12, 2), (17, 1)]);
}

#[test]
fn non_matching_filters_use_negated_actions() {
    let a = Filter::exact(MemoryBank::Epc, 0x20, vec![0x30], false);
    let b = Filter::exact(MemoryBank::Tid, 0, vec![0xE2], false);
    let p = FilterProgram::compile(&[a, b]).unwrap();
    assert_eq!(
        &actions(&p)[..2],
        &[FilterAction::DeassertOrAssert, FilterAction::DeassertOnMatch]
    );
}

#[test]
fn zero_mask_is_still_emitted() {
    let f = Filter::new(MemoryBank::Epc, 0x20, 16, vec![0x12, 0x34], vec![0x00, 0x00], true);
    let p = FilterProgram::compile(&[f]).unwrap();
    assert_eq!(p.caller_filters().len(), 1);
    assert_eq!(p.caller_filters()[0].mask_bit_length, 0);
    assert_eq!(p.select_state, SelectState::Selected);
}

#[test]
fn short_mask_is_rejected() {
    let f = Filter::new(MemoryBank::Epc, 0, 24, vec![1, 2, 3], vec![0xFF], true);
    assert!(matches!(FilterProgram::compile(&[f]), Err(Error::Parameter(_))));
}
