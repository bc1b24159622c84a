// libnur-rs/libnur/src/radio/mod.rs

pub mod lifecycle;
pub mod mock;
pub mod traits;

pub use lifecycle::{disconnect_channel, DisconnectNotifier, DisconnectSignal};
pub use mock::{MockRadio, RadioCall};
pub use traits::{InventoryParams, Radio, ReaderInfo};
