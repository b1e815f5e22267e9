//! Per-tick snapshot of the mouse state.
//!
//! [`MouseSnapshot`] is an **owned**, read-only view of the device at one
//! instant: relative motion accumulated since the previous poll, plus the
//! button bitset. It is `Copy` and cheap to hand out to every reader in a
//! tick.
//!
//! [`SnapshotCell`] is the lazy cache that makes those reads consistent.
//! Relative-motion counters reset on every hardware poll, so two naive polls
//! inside one script tick would hand the first caller the motion and the
//! second caller zeros. The cell polls at most once per tick: the first read
//! fetches and caches, later reads return the same copy, and the tick
//! boundary invalidates the cache for the next cycle.
//!
//! # Semantics
//! - A snapshot is **immutable**; script code never writes through it.
//! - "Not yet polled this tick" is a first-class state (`None` inside the
//!   cell), not a zeroed sentinel value.
//! - A failed poll caches nothing; the next read retries.

use crate::backends::MouseBackend;
use crate::error::DeviceError;

/// Fixed button indices in device bit order.
///
/// Bit 1 is **right** and bit 2 is **middle** — the HID boot-report order,
/// not the spoken left/middle/right order. Scripts and bindings rely on
/// these staying put.
pub mod buttons {
    pub const LEFT: u8 = 0;
    pub const RIGHT: u8 = 1;
    pub const MIDDLE: u8 = 2;
}

/// Owned snapshot of the mouse for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseSnapshot {
    /// Relative X motion since the previous poll (device counts).
    pub dx: i32,
    /// Relative Y motion since the previous poll (device counts).
    pub dy: i32,
    /// Button bitset; see [`buttons`] for the fixed indices.
    pub buttons: u8,
}

impl MouseSnapshot {
    /// Whether the button at `index` is held. Indices past the bitset width
    /// read as released.
    #[inline]
    pub fn is_pressed(&self, index: u8) -> bool {
        index < 8 && self.buttons & (1 << index) != 0
    }
}

/// Lazy per-tick cache over a device poll.
///
/// Owned by the plugin coordinator; readers go through
/// [`get_or_fetch`](SnapshotCell::get_or_fetch) and the tick boundary calls
/// [`invalidate`](SnapshotCell::invalidate) exactly once per cycle.
#[derive(Debug, Default)]
pub struct SnapshotCell {
    cached: Option<MouseSnapshot>,
}

impl SnapshotCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this tick's snapshot, polling the device on the first call.
    ///
    /// With no device installed (plugin not started, or stopped after a
    /// device loss) the tick observes a zeroed snapshot, cached like any
    /// other so repeated reads stay consistent.
    pub fn get_or_fetch(
        &mut self,
        device: Option<&mut (dyn MouseBackend + 'static)>,
    ) -> Result<MouseSnapshot, DeviceError> {
        if let Some(snapshot) = self.cached {
            return Ok(snapshot);
        }
        let snapshot = match device {
            Some(device) => device.poll()?,
            None => MouseSnapshot::default(),
        };
        self.cached = Some(snapshot);
        Ok(snapshot)
    }

    /// Clear the cache so the next read polls again.
    #[inline]
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// The cached snapshot, if this tick has polled already.
    #[inline]
    pub fn cached(&self) -> Option<MouseSnapshot> {
        self.cached
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scripted::ScriptedMouse;

    #[test]
    fn test_button_bit_reads() {
        let snap = MouseSnapshot {
            dx: 0,
            dy: 0,
            buttons: 0b0000_0101,
        };
        assert!(snap.is_pressed(buttons::LEFT));
        assert!(!snap.is_pressed(buttons::RIGHT));
        assert!(snap.is_pressed(buttons::MIDDLE));
        assert!(!snap.is_pressed(7));
        assert!(!snap.is_pressed(8));
        assert!(!snap.is_pressed(200));
    }

    #[test]
    fn test_fetches_once_per_tick() {
        let (mut dev, handle) = ScriptedMouse::new();
        handle.move_by(5, -3);

        let mut cell = SnapshotCell::new();
        let first = cell.get_or_fetch(Some(&mut dev)).unwrap();
        let second = cell.get_or_fetch(Some(&mut dev)).unwrap();
        let third = cell.get_or_fetch(Some(&mut dev)).unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(first.dx, 5);
        assert_eq!(first.dy, -3);
        assert_eq!(handle.poll_count(), 1);
    }

    #[test]
    fn test_invalidate_triggers_fresh_poll() {
        let (mut dev, handle) = ScriptedMouse::new();
        handle.move_by(2, 2);

        let mut cell = SnapshotCell::new();
        assert_eq!(cell.get_or_fetch(Some(&mut dev)).unwrap().dx, 2);
        cell.invalidate();
        assert!(cell.cached().is_none());

        // Motion drained by the first poll; a fresh tick sees zeros.
        assert_eq!(cell.get_or_fetch(Some(&mut dev)).unwrap().dx, 0);
        assert_eq!(handle.poll_count(), 2);
    }

    #[test]
    fn test_fetches_through_boxed_device_slot() {
        // Same shape as the plugin's device field: an owned slot of boxed
        // trait objects, borrowed per call via as_deref_mut.
        let (dev, handle) = ScriptedMouse::new();
        handle.move_by(4, 1);
        let mut slot: Option<Box<dyn MouseBackend>> = Some(Box::new(dev));

        let mut cell = SnapshotCell::new();
        let snap = cell.get_or_fetch(slot.as_deref_mut()).unwrap();
        assert_eq!((snap.dx, snap.dy), (4, 1));

        slot = None;
        cell.invalidate();
        assert_eq!(cell.get_or_fetch(slot.as_deref_mut()).unwrap().dx, 0);
    }

    #[test]
    fn test_no_device_reads_zeroed() {
        let mut cell = SnapshotCell::new();
        let snap = cell.get_or_fetch(None).unwrap();
        assert_eq!(snap, MouseSnapshot::default());
        assert!(cell.cached().is_some());
    }

    #[test]
    fn test_poll_error_caches_nothing() {
        let (mut dev, handle) = ScriptedMouse::new();
        handle.disconnect();

        let mut cell = SnapshotCell::new();
        assert!(cell.get_or_fetch(Some(&mut dev)).is_err());
        assert!(cell.cached().is_none());
    }
}
