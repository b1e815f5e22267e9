//! Plugin configuration.
//!
//! [`MouseConfig`] narrows device acquisition and tunes the poll drain. All
//! fields have working defaults; an empty config (or no config file at all)
//! acquires the first mouse-class device the platform reports.
//!
//! Configs are plain TOML:
//!
//! ```toml
//! vendor_id = 0x046d
//! product_id = 0xc539
//! max_reports_per_poll = 64
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Default bound on HID reports drained per poll.
///
/// Keeps a flooding device from starving the tick it is polled on.
pub const DEFAULT_MAX_REPORTS_PER_POLL: usize = 32;

/// Acquisition and polling knobs for the mouse plugin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseConfig {
    /// Only match devices with this USB vendor ID.
    pub vendor_id: Option<u16>,

    /// Only match devices with this USB product ID.
    pub product_id: Option<u16>,

    /// Input-report ID this device prefixes its reports with.
    ///
    /// Most boot-protocol mice send bare reports; devices that multiplex
    /// report types prepend an ID byte. When set, reports whose first byte
    /// does not match are skipped.
    pub report_id: Option<u8>,

    /// Maximum queued reports drained per poll call.
    pub max_reports_per_poll: usize,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            vendor_id: None,
            product_id: None,
            report_id: None,
            max_reports_per_poll: DEFAULT_MAX_REPORTS_PER_POLL,
        }
    }
}

impl MouseConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Whether a device with the given IDs passes the configured filter.
    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id.map_or(true, |v| v == vendor_id)
            && self.product_id.map_or(true, |p| p == product_id)
    }
}
