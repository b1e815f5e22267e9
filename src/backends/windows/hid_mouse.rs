#![cfg(target_os = "windows")]

//! Windows HID mouse device wrapper.
//!
//! [`WindowsMouse`] wraps a `hidapi::HidDevice` and is responsible for:
//! - finding the first mouse-class HID entry that passes the config filter
//! - opening the handle in non-blocking mode
//! - draining a bounded number of boot-protocol reports per poll and
//!   accumulating their deltas into one snapshot
//! - delegating injection to the [`send_input`](super::send_input) module
//!
//! This module does **not** cache across ticks (that is the snapshot cell's
//! job) or coalesce outbound motion (that is the outbound buffer's job).

use hidapi::{HidApi, HidDevice};
use log::{debug, info, trace};

use crate::backends::report::parse_report;
use crate::backends::MouseBackend;
use crate::config::MouseConfig;
use crate::error::{AcquireError, DeviceError, InjectError};
use crate::outbound::MotionRequest;
use crate::snapshot::MouseSnapshot;

/// HID usage page / usage identifying a mouse-class device.
const USAGE_PAGE_GENERIC_DESKTOP: u16 = 0x01;
const USAGE_MOUSE: u16 = 0x02;

/// Read buffer size; boot-protocol reports are tiny, but some devices pad
/// input reports out to their descriptor length.
const REPORT_BUF_LEN: usize = 64;

/// Concrete HID-backed mouse implementing [`MouseBackend`].
pub struct WindowsMouse {
    name: String,
    raw: HidDevice,
    buf: [u8; REPORT_BUF_LEN],
    report_id: Option<u8>,
    max_reports_per_poll: usize,
    /// Button byte of the most recent report; level state, so it persists
    /// across empty drains.
    buttons: u8,
}

impl WindowsMouse {
    /// Find and open the first mouse-class device passing the config filter.
    pub fn open(config: &MouseConfig) -> Result<Self, AcquireError> {
        let api = HidApi::new().map_err(|e| AcquireError::Context(e.to_string()))?;

        let info = api
            .device_list()
            .find(|info| {
                info.usage_page() == USAGE_PAGE_GENERIC_DESKTOP
                    && info.usage() == USAGE_MOUSE
                    && config.matches(info.vendor_id(), info.product_id())
            })
            .ok_or(AcquireError::NoDevice)?;

        debug!(
            "opening mouse vid=0x{:04x} pid=0x{:04x} product={:?} path={}",
            info.vendor_id(),
            info.product_id(),
            info.product_string().unwrap_or(""),
            info.path().to_string_lossy(),
        );

        let device = info
            .open_device(&api)
            .map_err(|e| AcquireError::Rejected(e.to_string()))?;
        // The plugin polls in a host-controlled loop, so reads must not
        // block. If set_blocking_mode fails we continue anyway; hidapi will
        // still error or return data depending on backend behavior.
        let _ = device.set_blocking_mode(false);

        let name = info.product_string().unwrap_or("Unknown Mouse").to_string();
        info!("opened HID mouse: {name}");

        Ok(Self {
            name,
            raw: device,
            buf: [0u8; REPORT_BUF_LEN],
            report_id: config.report_id,
            max_reports_per_poll: config.max_reports_per_poll,
            buttons: 0,
        })
    }
}

impl MouseBackend for WindowsMouse {
    fn name(&self) -> &str {
        &self.name
    }

    /// Drain up to the configured number of queued reports and fold them
    /// into one snapshot: deltas sum across reports, the button byte of the
    /// last report wins. An empty drain is zero motion with the last-known
    /// buttons, not an error.
    fn poll(&mut self) -> Result<MouseSnapshot, DeviceError> {
        let mut dx: i32 = 0;
        let mut dy: i32 = 0;
        let mut drained = 0;

        while drained < self.max_reports_per_poll {
            match self.raw.read(&mut self.buf) {
                Ok(0) => break, // no data queued (non-blocking)
                Ok(n) => {
                    drained += 1;
                    let slice = &self.buf[..n];
                    trace!("mouse report n={n} bytes={slice:02x?}");

                    if let Some(report) = parse_report(slice, self.report_id) {
                        dx += report.dx;
                        dy += report.dy;
                        self.buttons = report.buttons;
                    }
                }
                Err(e) => return Err(DeviceError::Lost(e.to_string())),
            }
        }

        Ok(MouseSnapshot {
            dx,
            dy,
            buttons: self.buttons,
        })
    }

    fn inject(&mut self, request: MotionRequest) -> Result<(), InjectError> {
        super::send_input::inject(request)
    }
}
