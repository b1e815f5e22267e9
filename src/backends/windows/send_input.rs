#![cfg(target_os = "windows")]

//! Synthetic motion injection via Win32 `SendInput`.
//!
//! The one place where the tagged [`MotionRequest`] becomes the OS's
//! union-bearing `INPUT`/`MOUSEINPUT` record. The two addressing flag bits
//! are mutually exclusive by construction of the match: `Relative` maps to
//! `MOUSEEVENTF_MOVE` alone, `Absolute` to `MOUSEEVENTF_MOVE |
//! MOUSEEVENTF_ABSOLUTE` with coordinates in the normalized 0..=65535
//! desktop space (passed through untranslated; scaling pixel coordinates is
//! the host's business).
//!
//! `SendInput` is fire-and-forget — the OS gives no delivery acknowledgment
//! — so the only failure this module can see is a synchronous zero return,
//! reported with the `GetLastError` code.

use windows_sys::Win32::Foundation::GetLastError;
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_MOVE, MOUSEINPUT,
};

use crate::error::InjectError;
use crate::outbound::MotionRequest;

/// Submit one synthetic motion event to the OS input queue.
pub fn inject(request: MotionRequest) -> Result<(), InjectError> {
    let (dx, dy, flags) = match request {
        MotionRequest::Relative { dx, dy } => (dx, dy, MOUSEEVENTF_MOVE),
        MotionRequest::Absolute { x, y } => (x, y, MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE),
    };

    let input = INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx,
                dy,
                mouseData: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    };

    // SAFETY: Win32 call; one fully initialized INPUT record with the
    // correct size argument.
    let sent = unsafe { SendInput(1, &input, std::mem::size_of::<INPUT>() as i32) };
    if sent == 0 {
        let code = unsafe { GetLastError() };
        Err(InjectError::Rejected { code })
    } else {
        Ok(())
    }
}
