//! Device backends for `mousetick`.
//!
//! A backend is the adapter that owns the physical (or simulated) device: it
//! fetches motion/button snapshots and performs the OS-level synthetic-input
//! call. Everything above this seam deals in [`MouseSnapshot`] and
//! [`MotionRequest`] only; flag words and bit-exact OS records stay inside
//! the platform modules.
//!
//! # Feature flags
//! - **`hid`** (default) — enables the Windows HID/SendInput backend.
//!
//! The [`scripted`] backend is always available and needs no hardware; it is
//! the deterministic stand-in for tests, demos, and non-Windows development.

use crate::config::MouseConfig;
use crate::error::{AcquireError, DeviceError, InjectError};
use crate::outbound::MotionRequest;
use crate::snapshot::MouseSnapshot;

pub mod report;
pub mod scripted;

#[cfg(all(feature = "hid", target_os = "windows"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "hid", target_os = "windows"))))]
pub mod windows;

/// Adapter over one mouse device.
///
/// `poll` must treat an empty read queue as a valid zero-motion snapshot —
/// a mouse that did not move is not a failed mouse — and reserve
/// [`DeviceError::Lost`] for actual disconnects. `inject` is fire-and-forget
/// at the OS level; implementations report only synchronous rejection, since
/// no delivery acknowledgment exists.
///
/// Implementations need not be `Send`: the plugin serializes all adapter
/// calls onto the host's single tick thread.
pub trait MouseBackend {
    /// Human-readable device name for logs.
    fn name(&self) -> &str;

    /// Fetch relative motion accumulated since the previous poll, plus the
    /// current button bitset.
    fn poll(&mut self) -> Result<MouseSnapshot, DeviceError>;

    /// Submit one synthetic motion event to the OS input queue.
    fn inject(&mut self, request: MotionRequest) -> Result<(), InjectError>;
}

/// Unified acquisition across compiled-in backends.
///
/// Returns the first mouse-class device the platform reports that passes the
/// config's vendor/product filter. Without a platform backend compiled in
/// this is [`AcquireError::NoBackend`]; hosts that want the scripted backend
/// construct it directly and hand it to
/// [`MousePlugin::with_backend`](crate::plugin::MousePlugin::with_backend).
pub fn acquire(config: &MouseConfig) -> Result<Box<dyn MouseBackend>, AcquireError> {
    #[cfg(all(feature = "hid", target_os = "windows"))]
    {
        let device = windows::WindowsMouse::open(config)?;
        return Ok(Box::new(device));
    }

    #[cfg(not(all(feature = "hid", target_os = "windows")))]
    {
        let _ = config;
        Err(AcquireError::NoBackend)
    }
}
