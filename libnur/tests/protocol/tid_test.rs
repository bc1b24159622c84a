use libnur::protocol::tid;

#[test]
fn bank_length_follows_serial_code() {
    assert_eq!(tid::bank_bits(&hex::decode("E2003412").unwrap()), 32);
    assert_eq!(tid::bank_bits(&hex::decode("E2801105000000").unwrap()), 48);
    assert_eq!(tid::bank_bits(&hex::decode("E280110520").unwrap()), 96);
    assert_eq!(tid::bank_bits(&hex::decode("E2801105E0").unwrap()), 96 + 16 * 6);
}

#[test]
fn vendor_and_model_fields() {
    let em = hex::decode("E280B040").unwrap();
    assert_eq!(tid::mask_designer_id(&em), Some(0x00B));
    assert_eq!(tid::model_number(&em), Some(0x040));
    assert_eq!(tid::mask_designer_id(&[0xE2]), None);
}
