use libnur::protocol::ProtocolControl;

#[test]
fn pc_fields_roundtrip_exhaustively() {
    for words in 0u16..32 {
        for xi in 0u16..2 {
            for umi in 0u16..2 {
                let raw = (words << 11) | (xi << 9) | (umi << 10);
                let pc = ProtocolControl::new(raw);
                assert_eq!(pc.epc_words(), words);
                assert_eq!(pc.xi(), xi);
                assert_eq!(pc.umi(), umi);
                assert_eq!(pc.has_xpc(), xi == 1);
                assert_eq!(
                    ProtocolControl::from_fields(words as u8, umi == 1, xi == 1).raw(),
                    raw
                );
            }
        }
    }
}

#[test]
fn lower_bits_do_not_leak_into_fields() {
    let pc = ProtocolControl::new(0x30FF);
    assert_eq!(pc.epc_words(), 6);
    assert_eq!(pc.umi(), 0);
    assert_eq!(pc.xi(), 0);
}
