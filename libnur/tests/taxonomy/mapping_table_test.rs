use libnur::taxonomy::{classify, map_error, map_module_error, ErrorContext, ModuleErrorCode as C};
use libnur::{Error, RfcError};

fn expected(code: C) -> RfcError {
    match code {
        C::MISSING_SELDATA
        | C::G2_READ
        | C::G2_RD_PART
        | C::G2_WRITE
        | C::G2_WR_PART
        | C::G2_SPECIAL
        | C::G2_TAG_NON_SPECIFIC => RfcError::NonSpecificTagError,
        C::G2_SELECT | C::G2_ACCESS => RfcError::IncorrectPasswordError,
        C::G2_TAG_MEM_OVERRUN => RfcError::MemoryOverrunError,
        C::G2_TAG_MEM_LOCKED => RfcError::MemoryLockedError,
        C::G2_TAG_INSUF_POWER => RfcError::InsufficientPowerError,
        C::G2_TAG_RESP => RfcError::NoResponseFromTagError,
        _ => RfcError::NonSpecificReaderError,
    }
}

#[test]
fn every_known_code_maps_to_its_family() {
    for &code in C::KNOWN {
        assert_eq!(classify(code), expected(code), "code {}", code);
    }
}

#[test]
fn codes_outside_the_table_are_reader_errors() {
    for raw in [0x00u32, 0x11, 0x64, 0x2000, 0xFFFF_FFFF] {
        let code = C::new(raw);
        assert!(code.name().is_none());
        assert_eq!(
            map_module_error(code, ErrorContext::read(0)),
            RfcError::NonSpecificReaderError
        );
    }
}

#[test]
fn named_codes_without_a_family_are_reader_errors() {
    assert_eq!(classify(C::G2_TAG_OTHER_ERROR), RfcError::NonSpecificReaderError);
    for ctx in [ErrorContext::read(1), ErrorContext::lock(), ErrorContext::kill()] {
        assert_eq!(
            map_module_error(C::G2_TAG_OTHER_ERROR, ctx),
            RfcError::NonSpecificReaderError
        );
    }
}

#[test]
fn access_denied_needs_a_password() {
    for ctx in [ErrorContext::read(0), ErrorContext::write(0), ErrorContext::custom(0)] {
        assert_eq!(map_module_error(C::G2_ACCESS, ctx), RfcError::NonSpecificTagError);
    }
    for ctx in [
        ErrorContext::read(1),
        ErrorContext::write(0xFFFF_FFFF),
        ErrorContext::custom(42),
    ] {
        assert_eq!(map_module_error(C::G2_ACCESS, ctx), RfcError::IncorrectPasswordError);
    }
}

#[test]
fn operation_overrides_apply_before_family() {
    assert_eq!(map_module_error(C::G2_WRITE, ErrorContext::lock()), RfcError::IncorrectPasswordError);
    assert_eq!(map_module_error(C::G2_WRITE, ErrorContext::kill()), RfcError::IncorrectPasswordError);
    assert_eq!(map_module_error(C::G2_TAG_RESP, ErrorContext::kill()), RfcError::IncorrectPasswordError);
    assert_eq!(map_module_error(C::G2_TAG_RESP, ErrorContext::read(0)), RfcError::NoResponseFromTagError);
    assert_eq!(map_module_error(C::G2_TAG_MEM_LOCKED, ErrorContext::lock()), RfcError::MemoryLockedError);
}

#[test]
fn host_side_errors() {
    let ctx = ErrorContext::write(0);
    assert_eq!(map_error(&Error::Timeout, ctx), RfcError::NonSpecificReaderError);
    assert_eq!(map_error(&Error::NotConnected, ctx), RfcError::NonSpecificReaderError);
    assert_eq!(map_error(&Error::Transport("gone".into()), ctx), RfcError::NonSpecificReaderError);
    assert_eq!(
        map_error(&Error::InvalidLength { expected: 8, actual: 2 }, ctx),
        RfcError::NonSpecificTagError
    );
}
