#[path = "../common/mod.rs"]
mod common;

use libnur::operation::{
    CustomOperation, KillOperation, LockOperation, OperationResult, RequestOperation, TagOperation,
};
use libnur::protocol::{LockField, LockPrivilege};
use libnur::radio::RadioCall;
use libnur::tag::TagData;
use libnur::test_support::initialized_mock_reader;
use libnur::{
    AntennaId, AntennaMask, CustomResultKind, Error, ExecuteConfig, KillResultKind,
    LockResultKind, MemoryBank, ModuleErrorCode, Region, WriteResultKind,
};

#[test]
fn epc_rewrite_is_followed_by_later_operations() -> anyhow::Result<()> {
    common::init_logger();
    let mut m = initialized_mock_reader(Region::Eu, AntennaMask::ALL, ExecuteConfig::default())?;
    m.radio.borrow_mut().push_inventory(vec![common::cafebabe_tag()]);
    m.radio.borrow_mut().push_read(Ok(vec![0x00, 0x00]));

    let ops = vec![
        common::write("w", MemoryBank::Epc, 2, "1234"),
        common::read("u", MemoryBank::User, 0, 1),
        common::read("epc", MemoryBank::Epc, 2, 0),
    ];
    let tags = m.reader.execute(&[AntennaId::ALL], &[], &ops, None)?;
    let tag = &tags[0];

    match tag.result("w") {
        Some(OperationResult::Write(w)) => {
            assert_eq!(w.kind, WriteResultKind::Success);
            assert_eq!(w.words_written, 1);
        }
        other => panic!("unexpected {:?}", other),
    }
    match tag.result("epc") {
        Some(OperationResult::Read(r)) => assert_eq!(r.data, hex::decode("1234BABE")?),
        other => panic!("unexpected {:?}", other),
    }
    // the record keeps the EPC seen by the inventory
    assert_eq!(tag.epc, hex::decode("CAFEBABE")?);

    let radio = m.radio.borrow();
    match radio.tag_calls()[1] {
        RadioCall::Read { sing, .. } => assert_eq!(sing, &hex::decode("1234BABE")?),
        other => panic!("unexpected {:?}", other),
    }
    Ok(())
}

#[test]
fn epc_change_tracking_can_be_disabled() -> anyhow::Result<()> {
    let config = ExecuteConfig::builder().handle_epc_change(false).build();
    let mut m = initialized_mock_reader(Region::Eu, AntennaMask::ALL, config)?;
    m.radio.borrow_mut().push_inventory(vec![common::cafebabe_tag()]);

    let ops = vec![
        common::write("w", MemoryBank::Epc, 2, "1234"),
        common::read("epc", MemoryBank::Epc, 2, 0),
    ];
    let tags = m.reader.execute(&[AntennaId::ALL], &[], &ops, None)?;
    match tags[0].result("epc") {
        Some(OperationResult::Read(r)) => assert_eq!(r.data, hex::decode("CAFEBABE")?),
        other => panic!("unexpected {:?}", other),
    }
    Ok(())
}

#[test]
fn failure_short_circuits_rest_of_tag_only() -> anyhow::Result<()> {
    let mut m = initialized_mock_reader(Region::Eu, AntennaMask::ALL, ExecuteConfig::default())?;
    m.radio.borrow_mut().push_inventory(vec![
        common::cafebabe_tag(),
        libnur::test_support::sample_tag(1, &[0x01, 0x02]),
    ]);
    m.radio
        .borrow_mut()
        .locks
        .push_back(Err(Error::Module(ModuleErrorCode::G2_WRITE)));

    let ops = vec![
        TagOperation::Lock(LockOperation {
            id: "lock".into(),
            field: LockField::EpcMemory,
            privilege: LockPrivilege::Lock,
            password: 0x1234_5678,
        }),
        TagOperation::Kill(KillOperation {
            id: "kill".into(),
            kill_password: 0,
        }),
    ];
    let tags = m.reader.execute(&[AntennaId::ALL], &[], &ops, None)?;
    assert_eq!(tags.len(), 2);

    let kinds = |t: &TagData| -> (LockResultKind, KillResultKind) {
        let lock = match t.result("lock") {
            Some(OperationResult::Lock(l)) => l.kind,
            other => panic!("unexpected {:?}", other),
        };
        let kill = match t.result("kill") {
            Some(OperationResult::Kill(k)) => k.kind,
            other => panic!("unexpected {:?}", other),
        };
        (lock, kill)
    };
    assert_eq!(
        kinds(&tags[0]),
        (LockResultKind::IncorrectPasswordError, KillResultKind::NonSpecificTagError)
    );
    assert_eq!(
        kinds(&tags[1]),
        (LockResultKind::Success, KillResultKind::ZeroKillPasswordError)
    );

    // two locks, no kill ever sent
    let radio = m.radio.borrow();
    assert!(radio.calls.iter().all(|c| !matches!(c, RadioCall::Kill { .. })));
    assert_eq!(radio.tag_calls().len(), 2);
    Ok(())
}

#[test]
fn sensor_command_through_request() -> anyhow::Result<()> {
    let mut m = initialized_mock_reader(Region::Eu, AntennaMask::ALL, ExecuteConfig::default())?;
    let sensor = common::cafebabe_tag().with_tid(common::em4325_tid());
    m.radio.borrow_mut().push_inventory(vec![sensor]);
    m.radio.borrow_mut().push_custom(Ok(hex::decode("8123")?));

    let mut consumer = |_: &TagData| {
        vec![TagOperation::Custom(CustomOperation {
            id: "sensor".into(),
            data: hex::decode("000B0040E00248000000").unwrap(),
            bit_length: 76,
            password: 0,
        })]
    };
    let ops = vec![TagOperation::Request(RequestOperation { id: "more".into() })];
    let tags = m
        .reader
        .execute(&[AntennaId::ALL], &[], &ops, Some(&mut consumer))?;

    match tags[0].result("sensor") {
        Some(OperationResult::Custom(c)) => {
            assert_eq!(c.kind, CustomResultKind::Success);
            assert_eq!(c.data, hex::decode("8123")?);
        }
        other => panic!("unexpected {:?}", other),
    }

    let radio = m.radio.borrow();
    let resets = radio
        .calls
        .iter()
        .filter(|c| matches!(c, RadioCall::ResetToTarget { .. }))
        .count();
    assert_eq!(resets, 2);
    Ok(())
}
