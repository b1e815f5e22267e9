#![cfg(target_os = "windows")]

//! Windows mouse backend.
//!
//! The real device path on Windows, split into:
//! - **HID** polling via `hidapi` ([`hid_mouse`]) — open the first
//!   mouse-class device and drain its boot-protocol reports per poll
//! - **SendInput** injection via `windows-sys` ([`send_input`]) — translate
//!   a [`MotionRequest`](crate::outbound::MotionRequest) into the bit-exact
//!   `INPUT` record the OS call wants
//!
//! Most users should not interact with these modules directly. Prefer the
//! high-level [`MousePlugin`](crate::plugin::MousePlugin) API, or
//! [`acquire`](crate::backends::acquire) when only the adapter is needed.

pub mod hid_mouse;
pub mod send_input;

pub use hid_mouse::WindowsMouse;
