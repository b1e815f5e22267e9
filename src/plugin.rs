//! Plugin lifecycle and the tick boundary.
//!
//! [`MousePlugin`] is the coordinator that owns the tick-scoped context: the
//! lazy snapshot cache, the outbound buffer, and the device handle. The host
//! drives it through the [`Plugin`] trait — `start`/`stop` around a session,
//! [`before_next_execute`](Plugin::before_next_execute) once per execution
//! cycle, strictly after that cycle's script code ran and strictly before
//! the next cycle's begins.
//!
//! The boundary does two things, in this order: flush the outbound buffer
//! (at most one injection per tick) and invalidate the snapshot cache. Both
//! must finish before new reads or writes begin, or state leaks across the
//! tick in one direction or the other.
//!
//! # Failure policy
//! - `start` failure leaves the plugin stopped; the host decides whether to
//!   run the session without it. No automatic retry.
//! - A poll failure after a successful start means the device is gone: the
//!   handle is released on the spot, the error propagates to the caller, and
//!   subsequent reads observe zeroed snapshots until an explicit restart.
//! - An injection failure is logged and dropped for that tick. The buffer
//!   was already reset, so a failed injection is never retried next tick
//!   with stale deltas.

use log::{error, info, warn};

use crate::backends::{self, MouseBackend};
use crate::config::MouseConfig;
use crate::error::{AcquireError, DeviceError};
use crate::outbound::OutboundBuffer;
use crate::snapshot::{MouseSnapshot, SnapshotCell};

/// Host-facing lifecycle seam for an input/output plugin.
pub trait Plugin {
    /// Static descriptive name the host shows for this plugin.
    fn friendly_name(&self) -> &'static str;

    /// Acquire the device. Called once when the host enables the plugin;
    /// an `Err` means the plugin stays disabled for the session.
    fn start(&mut self) -> Result<(), AcquireError>;

    /// Release the device. Safe to call at any time, including when `start`
    /// never succeeded or was never called.
    fn stop(&mut self);

    /// Tick boundary hook; invoked exactly once per execution cycle.
    fn before_next_execute(&mut self);
}

/// The mouse plugin coordinator; see the module docs.
pub struct MousePlugin {
    config: MouseConfig,
    snapshot: SnapshotCell,
    outbound: OutboundBuffer,
    device: Option<Box<dyn MouseBackend>>,
}

impl MousePlugin {
    /// Plugin with default configuration; no device until [`Plugin::start`].
    pub fn new() -> Self {
        Self::with_config(MouseConfig::default())
    }

    /// Plugin with the given acquisition/polling config.
    pub fn with_config(config: MouseConfig) -> Self {
        Self {
            config,
            snapshot: SnapshotCell::new(),
            outbound: OutboundBuffer::new(),
            device: None,
        }
    }

    /// Plugin over a pre-acquired backend. [`Plugin::start`] becomes a no-op
    /// success; used by tests and by embedders with their own acquisition
    /// policy.
    pub fn with_backend(device: Box<dyn MouseBackend>) -> Self {
        Self {
            config: MouseConfig::default(),
            snapshot: SnapshotCell::new(),
            outbound: OutboundBuffer::new(),
            device: Some(device),
        }
    }

    /// Whether a device is currently installed.
    pub fn is_started(&self) -> bool {
        self.device.is_some()
    }

    /// This tick's snapshot, polling the device on the first call per tick.
    ///
    /// A poll failure releases the device (see the module docs) and
    /// propagates; with no device installed the snapshot reads zeroed.
    pub fn snapshot(&mut self) -> Result<MouseSnapshot, DeviceError> {
        match self.snapshot.get_or_fetch(self.device.as_deref_mut()) {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                error!("{}: {err}; releasing device", self.friendly_name());
                self.device = None;
                Err(err)
            }
        }
    }

    /// Relative X motion for this tick, in device counts.
    pub fn delta_x(&mut self) -> Result<i32, DeviceError> {
        Ok(self.snapshot()?.dx)
    }

    /// Relative Y motion for this tick, in device counts.
    pub fn delta_y(&mut self) -> Result<i32, DeviceError> {
        Ok(self.snapshot()?.dy)
    }

    /// Whether the button at `index` is held this tick.
    pub fn button(&mut self, index: u8) -> Result<bool, DeviceError> {
        Ok(self.snapshot()?.is_pressed(index))
    }

    /// Arm the relative X component, in device counts. Last write wins.
    pub fn set_delta_x(&mut self, dx: i32) {
        self.outbound.set_relative_x(dx);
    }

    /// Arm the relative Y component, in device counts. Last write wins.
    pub fn set_delta_y(&mut self, dy: i32) {
        self.outbound.set_relative_y(dy);
    }

    /// Arm both relative components at once. Last write wins.
    pub fn set_delta(&mut self, dx: i32, dy: i32) {
        self.outbound.set_relative(dx, dy);
    }

    /// Arm an absolute move, in the OS's normalized desktop space
    /// (0..=65535 per axis on Windows). Loses to a relative move armed in
    /// the same tick.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.outbound.set_absolute(x, y);
    }
}

impl Default for MousePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for MousePlugin {
    fn friendly_name(&self) -> &'static str {
        "Mouse"
    }

    fn start(&mut self) -> Result<(), AcquireError> {
        if self.device.is_some() {
            return Ok(());
        }
        let device = backends::acquire(&self.config)?;
        info!("{}: acquired {}", self.friendly_name(), device.name());
        self.device = Some(device);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(device) = self.device.take() {
            info!("{}: released {}", self.friendly_name(), device.name());
        }
        self.snapshot.invalidate();
        let _ = self.outbound.take();
    }

    fn before_next_execute(&mut self) {
        let name = self.friendly_name();
        // Flush first: the buffer still holds the finished tick's writes.
        if let Some(request) = self.outbound.take() {
            if let Some(device) = self.device.as_deref_mut() {
                if let Err(err) = device.inject(request) {
                    warn!("{name}: injection dropped this tick: {err}");
                }
            }
        }
        self.snapshot.invalidate();
    }
}
