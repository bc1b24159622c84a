#[path = "../common/mod.rs"]
mod common;

use libnur::device::ReaderBuilder;
use libnur::radio::{MockRadio, ReaderInfo};
use libnur::setup::MockSetup;
use libnur::{AntennaMask, Region};

#[test]
fn initialize_then_close() -> anyhow::Result<()> {
    common::init_logger();
    let mut radio = MockRadio::new();
    radio.info = Some(ReaderInfo {
        name: "NUR-05WL2".into(),
        serial: "1234".into(),
        hw_version: "1.0".into(),
        sw_version: "5.16-A".into(),
    });

    let reader = ReaderBuilder::new()
        .with_radio(Box::new(radio))
        .with_setup(Box::new(MockSetup::new(Region::Japan, AntennaMask::ALL)))
        .build_uninitialized()?;

    let mut initialized = reader.initialize()?;
    assert_eq!(initialized.region(), Region::Japan);
    assert_eq!(initialized.firmware_version()?, "2.6");

    let closed = initialized.close()?;
    // reconnecting goes through initialization again
    let mut again = closed.initialize()?;
    assert_eq!(again.reader_info()?.name, "NUR-05WL2");
    Ok(())
}
