use libnur::taxonomy::{
    CustomResultKind, KillResultKind, LockResultKind, ReadResultKind, WriteResultKind,
};
use libnur::RfcError;

#[test]
fn every_taxonomy_value_projects_somewhere() {
    for &err in RfcError::ALL {
        assert_ne!(ReadResultKind::from(err), ReadResultKind::Success);
        assert_ne!(WriteResultKind::from(err), WriteResultKind::Success);
        assert_ne!(LockResultKind::from(err), LockResultKind::Success);
        assert_ne!(KillResultKind::from(err), KillResultKind::Success);
        assert_ne!(CustomResultKind::from(err), CustomResultKind::Success);
    }
}

#[test]
fn zero_kill_password_only_exists_for_kill() {
    let err = RfcError::ZeroKillPasswordError;
    assert_eq!(KillResultKind::from(err), KillResultKind::ZeroKillPasswordError);
    assert_eq!(ReadResultKind::from(err), ReadResultKind::NonSpecificTagError);
    assert_eq!(WriteResultKind::from(err), WriteResultKind::NonSpecificTagError);
    assert_eq!(LockResultKind::from(err), LockResultKind::NonSpecificTagError);
    assert_eq!(CustomResultKind::from(err), CustomResultKind::NonSpecificTagError);
}

#[test]
fn insufficient_power_is_not_a_read_result() {
    let err = RfcError::InsufficientPowerError;
    assert_eq!(ReadResultKind::from(err), ReadResultKind::NonSpecificTagError);
    assert_eq!(WriteResultKind::from(err), WriteResultKind::InsufficientPower);
    assert_eq!(KillResultKind::from(err), KillResultKind::InsufficientPower);
}
