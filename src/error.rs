//! Error taxonomy for acquisition, polling, injection, and configuration.
//!
//! The split matters more than the variants: acquisition failures belong to
//! [`Plugin::start`](crate::plugin::Plugin::start) and mean the plugin never
//! comes up; [`DeviceError`] means a device that *was* acquired went away and
//! the plugin drops back to the stopped state; [`InjectError`] is non-fatal
//! per tick (logged, dropped, never retried). Empty polls are not errors at
//! all — a mouse that did not move reports zero deltas.

use thiserror::Error;

/// The physical device could not be obtained at plugin start.
///
/// Not retried automatically: the host decides whether to surface the
/// failure or run the session without this plugin.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// The platform input subsystem could not be initialized.
    #[error("input context unavailable: {0}")]
    Context(String),

    /// No mouse-class device is present (or none matched the configured
    /// vendor/product filter).
    #[error("no mouse device found")]
    NoDevice,

    /// The OS refused to open the device (exclusive use elsewhere,
    /// insufficient permissions).
    #[error("device acquisition rejected: {0}")]
    Rejected(String),

    /// No device backend is compiled in for this platform/feature set.
    #[error("no mouse backend available on this platform")]
    NoBackend,
}

/// The device failed after a successful acquisition.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Device disconnected or its context was invalidated. The plugin
    /// releases the handle when this surfaces; reacquisition requires an
    /// explicit restart.
    #[error("mouse device lost: {0}")]
    Lost(String),
}

/// A synthetic-input call was refused.
///
/// Injection is fire-and-forget at the OS level, so this only covers
/// synchronous rejection; there is no delivery acknowledgment to report.
#[derive(Debug, Error)]
pub enum InjectError {
    /// The OS rejected the call (error code from the platform API).
    #[error("injection rejected by OS (error code {code})")]
    Rejected { code: u32 },

    /// The backend cannot inject in its current state.
    #[error("injection unavailable: {0}")]
    Unavailable(String),
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
}
