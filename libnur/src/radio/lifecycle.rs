// libnur-rs/libnur/src/radio/lifecycle.rs

//! One-shot disconnect notification for a single connection.
//!
//! The radio hands out a [`DisconnectSignal`] when a disconnect is
//! requested and fires the paired [`DisconnectNotifier`] once the module
//! reports that the link is down. A new pair is created for every
//! connection, so a late event from an old link cannot release a waiter of
//! a newer one.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use log::debug;

use crate::{Error, Result};

/// Create the notifier/signal pair for one connection.
pub fn disconnect_channel() -> (DisconnectNotifier, DisconnectSignal) {
    let (tx, rx) = mpsc::channel();
    (DisconnectNotifier(tx), DisconnectSignal(rx))
}

/// Sending half, owned by whatever observes module events.
#[derive(Debug)]
pub struct DisconnectNotifier(Sender<()>);

impl DisconnectNotifier {
    /// Report the disconnect. Consumes the notifier.
    pub fn notify(self) {
        // the waiter may already have given up
        let _ = self.0.send(());
    }
}

/// Receiving half, awaited by the code that closes the connection.
#[derive(Debug)]
pub struct DisconnectSignal(Receiver<()>);

impl DisconnectSignal {
    /// Signal that is already complete.
    pub fn completed() -> Self {
        let (notifier, signal) = disconnect_channel();
        notifier.notify();
        signal
    }

    /// Block until the disconnect is reported, at most `timeout`.
    pub fn wait(self, timeout: Duration) -> Result<()> {
        match self.0.recv_timeout(timeout) {
            Ok(()) => Ok(()),
            Err(RecvTimeoutError::Disconnected) => {
                debug!("disconnect notifier dropped without event");
                Ok(())
            }
            Err(RecvTimeoutError::Timeout) => Err(Error::Timeout),
        }
    }
}
