// libnur-rs/libnur/src/setup/antenna.rs

//! Transactional antenna mask changes.

use log::{debug, trace, warn};

use crate::constants::REFLECTED_POWER_FLOOR_DB;
use crate::setup::traits::{ReflectedPower, SetupBackend};
use crate::types::{AntennaId, AntennaMask};
use crate::Result;

/// Restores the previous antenna mask unless committed.
///
/// The previous mask is captured before the write. A failed write is rolled
/// back immediately; otherwise rollback happens when the guard is dropped.
pub struct MaskGuard<'a> {
    backend: &'a mut dyn SetupBackend,
    previous: AntennaMask,
    committed: bool,
}

impl<'a> MaskGuard<'a> {
    pub fn apply(backend: &'a mut dyn SetupBackend, mask: AntennaMask) -> Result<Self> {
        let previous = backend.antenna_mask();
        trace!("antenna mask {} -> {}", previous, mask);
        if let Err(e) = backend.apply_antenna_mask(mask) {
            debug!("antenna mask write failed: {}", e);
            restore(backend, previous);
            return Err(e);
        }
        Ok(Self {
            backend,
            previous,
            committed: false,
        })
    }

    pub fn previous(&self) -> AntennaMask {
        self.previous
    }

    /// Backend with the guarded mask in effect.
    pub fn backend(&mut self) -> &mut dyn SetupBackend {
        &mut *self.backend
    }

    /// Keep the new mask.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for MaskGuard<'_> {
    fn drop(&mut self) {
        if !self.committed {
            restore(&mut *self.backend, self.previous);
        }
    }
}

fn restore(backend: &mut dyn SetupBackend, previous: AntennaMask) {
    match backend.apply_antenna_mask(previous) {
        Ok(()) => debug!("antenna mask restored to {}", previous),
        Err(e) => warn!("failed to restore antenna mask {}: {}", previous, e),
    }
}

/// Antenna restriction requested by the last `execute` call.
#[derive(Debug, Default, Clone)]
pub struct AntennaSelection {
    requested: Option<AntennaMask>,
    /// Mask in effect before our restriction.
    saved: Option<AntennaMask>,
}

impl AntennaSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the enabled antennas to `antennas`.
    ///
    /// Returns the number of antennas left enabled; 0 means nothing would
    /// transmit and the mask was left alone.
    pub fn apply(&mut self, backend: &mut dyn SetupBackend, antennas: &[AntennaId]) -> Result<usize> {
        let requested = AntennaMask::for_antennas(antennas);
        if self.requested != Some(requested) {
            // kept until the revert lands so a failed write is retried next call
            if let Some(saved) = self.saved {
                trace!("reverting antenna restriction to {}", saved);
                backend.apply_antenna_mask(saved)?;
                self.saved = None;
            }
            self.requested = Some(requested);
        }

        let current = backend.antenna_mask();
        let wanted = current & requested;
        if wanted == current {
            return Ok(current.enabled_count());
        }
        if wanted.is_empty() {
            return Ok(0);
        }

        MaskGuard::apply(backend, wanted)?.commit();
        self.saved = Some(current);
        Ok(wanted.enabled_count())
    }

    pub fn requested(&self) -> Option<AntennaMask> {
        self.requested
    }
}

impl ReflectedPower {
    /// Reflected power in dB, floored for degenerate measurements.
    pub fn db(&self) -> f64 {
        let magnitude = ((self.i as f64).powi(2) + (self.q as f64).powi(2)).sqrt();
        let db = 20.0 * (magnitude / self.divider as f64).log10();
        if db.is_finite() {
            db
        } else {
            REFLECTED_POWER_FLOOR_DB
        }
    }
}

/// Probe whether something is attached to `antenna`.
///
/// Only that antenna is enabled during the measurement; the previous mask
/// comes back whatever the outcome. Without a region nothing is measured.
pub fn auto_detect(backend: &mut dyn SetupBackend, antenna: AntennaId) -> Result<bool> {
    if !backend.current_region().is_specified() {
        debug!("region not set, cannot probe {}", antenna);
        return Ok(false);
    }

    let power = {
        let mut guard = MaskGuard::apply(backend, antenna.mask())?;
        guard.backend().reflected_power(antenna)?
    };

    let db = power.db();
    trace!("{} reflected power {:.1} dB", antenna, db);
    Ok(db < 0.0)
}
