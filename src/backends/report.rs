//! Boot-protocol mouse report parsing.
//!
//! This module is intentionally "dumb": it only turns raw input-report bytes
//! into [`MouseReport`] structs. Draining, accumulation across reports, and
//! device-loss handling live in the backend that calls it.
//!
//! ## Report layout
//! Boot-protocol mice send `[buttons][dx: i8][dy: i8]`, optionally followed
//! by wheel bytes this crate ignores. Some HID stacks (and some devices that
//! multiplex report types) prefix an extra report-ID byte; when the caller
//! configures an expected ID, the prefix is verified and stripped, and
//! reports carrying a different ID parse to `None`.
//!
//! ## Conventions
//! - Deltas are reported in **raw device counts**, sign-extended from the
//!   report's `i8` fields.
//! - The button byte is passed through untouched; bit order is the device
//!   order documented in [`buttons`](crate::snapshot::buttons).

/// One parsed boot-protocol input report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseReport {
    /// Button bitset, device bit order.
    pub buttons: u8,
    /// Relative X motion (device counts).
    pub dx: i32,
    /// Relative Y motion (device counts).
    pub dy: i32,
}

/// Minimum payload length after any report-ID byte is stripped.
const MIN_PAYLOAD_LEN: usize = 3;

/// Parse one raw report, verifying and stripping the report-ID prefix when
/// `expected_id` is set.
///
/// Returns `None` for short reports and for reports whose ID byte does not
/// match; callers skip those and keep draining.
pub fn parse_report(data: &[u8], expected_id: Option<u8>) -> Option<MouseReport> {
    let payload = match expected_id {
        Some(id) => {
            let (&first, rest) = data.split_first()?;
            if first != id {
                return None;
            }
            rest
        }
        None => data,
    };

    if payload.len() < MIN_PAYLOAD_LEN {
        return None;
    }

    Some(MouseReport {
        buttons: payload[0],
        dx: payload[1] as i8 as i32,
        dy: payload[2] as i8 as i32,
    })
}
