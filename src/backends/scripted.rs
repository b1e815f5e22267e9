//! Deterministic in-memory backend for tests, demos, and development off
//! Windows.
//!
//! [`ScriptedMouse`] plays the device role with no hardware behind it. It is
//! created as a pair: the backend itself (handed to the plugin) and a
//! [`ScriptedMouseHandle`] that stays with the test/host to feed motion,
//! flip buttons, observe what was polled and injected, and force the two
//! failure modes the real backend can exhibit.
//!
//! Poll semantics mirror the HID backend: motion accumulated since the last
//! poll is drained (a second poll with no new feeding reads zero deltas)
//! while the button bitset is level state that persists across polls.

use std::cell::RefCell;
use std::rc::Rc;

use crate::backends::MouseBackend;
use crate::error::{DeviceError, InjectError};
use crate::outbound::MotionRequest;
use crate::snapshot::MouseSnapshot;

#[derive(Debug, Default)]
struct ScriptedState {
    pending_dx: i32,
    pending_dy: i32,
    buttons: u8,
    poll_count: usize,
    injected: Vec<MotionRequest>,
    disconnected: bool,
    reject_injections: bool,
}

/// In-memory mouse backend; see the module docs.
#[derive(Debug)]
pub struct ScriptedMouse {
    state: Rc<RefCell<ScriptedState>>,
}

/// Control/observation handle paired with a [`ScriptedMouse`].
#[derive(Clone, Debug)]
pub struct ScriptedMouseHandle {
    state: Rc<RefCell<ScriptedState>>,
}

impl ScriptedMouse {
    /// Create a backend plus its control handle.
    pub fn new() -> (Self, ScriptedMouseHandle) {
        let state = Rc::new(RefCell::new(ScriptedState::default()));
        (
            Self {
                state: Rc::clone(&state),
            },
            ScriptedMouseHandle { state },
        )
    }
}

impl MouseBackend for ScriptedMouse {
    fn name(&self) -> &str {
        "Scripted Mouse"
    }

    fn poll(&mut self) -> Result<MouseSnapshot, DeviceError> {
        let mut state = self.state.borrow_mut();
        if state.disconnected {
            return Err(DeviceError::Lost("scripted disconnect".into()));
        }
        state.poll_count += 1;
        let snapshot = MouseSnapshot {
            dx: state.pending_dx,
            dy: state.pending_dy,
            buttons: state.buttons,
        };
        state.pending_dx = 0;
        state.pending_dy = 0;
        Ok(snapshot)
    }

    fn inject(&mut self, request: MotionRequest) -> Result<(), InjectError> {
        let mut state = self.state.borrow_mut();
        if state.reject_injections {
            return Err(InjectError::Unavailable(
                "scripted injection rejection".into(),
            ));
        }
        state.injected.push(request);
        Ok(())
    }
}

impl ScriptedMouseHandle {
    /// Accumulate motion to be drained by the next poll.
    pub fn move_by(&self, dx: i32, dy: i32) {
        let mut state = self.state.borrow_mut();
        state.pending_dx += dx;
        state.pending_dy += dy;
    }

    /// Hold the button at `index` down. Indices past the bitset width are
    /// ignored, matching how the snapshot reads them as released.
    pub fn press(&self, index: u8) {
        if index < 8 {
            self.state.borrow_mut().buttons |= 1 << index;
        }
    }

    /// Release the button at `index`. Out-of-range indices are ignored.
    pub fn release(&self, index: u8) {
        if index < 8 {
            self.state.borrow_mut().buttons &= !(1 << index);
        }
    }

    /// How many times the backend has been polled.
    pub fn poll_count(&self) -> usize {
        self.state.borrow().poll_count
    }

    /// Every request injected so far, oldest first.
    pub fn injected(&self) -> Vec<MotionRequest> {
        self.state.borrow().injected.clone()
    }

    /// Make subsequent polls fail with [`DeviceError::Lost`].
    pub fn disconnect(&self) {
        self.state.borrow_mut().disconnected = true;
    }

    /// Toggle injection rejection ([`InjectError::Unavailable`]).
    pub fn reject_injections(&self, reject: bool) {
        self.state.borrow_mut().reject_injections = reject;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_drains_motion_keeps_buttons() {
        let (mut dev, handle) = ScriptedMouse::new();
        handle.move_by(3, 4);
        handle.move_by(1, -1);
        handle.press(0);

        let first = dev.poll().unwrap();
        assert_eq!(first.dx, 4);
        assert_eq!(first.dy, 3);
        assert_eq!(first.buttons, 0b1);

        // Motion drained; button still held.
        let second = dev.poll().unwrap();
        assert_eq!(second.dx, 0);
        assert_eq!(second.dy, 0);
        assert_eq!(second.buttons, 0b1);

        handle.release(0);
        assert_eq!(dev.poll().unwrap().buttons, 0);
        assert_eq!(handle.poll_count(), 3);
    }

    #[test]
    fn test_out_of_range_button_indices_ignored() {
        let (mut dev, handle) = ScriptedMouse::new();
        handle.press(8);
        handle.press(200);
        assert_eq!(dev.poll().unwrap().buttons, 0);

        handle.press(1);
        handle.release(8);
        handle.release(200);
        assert_eq!(dev.poll().unwrap().buttons, 0b10);
    }

    #[test]
    fn test_injections_recorded() {
        let (mut dev, handle) = ScriptedMouse::new();
        dev.inject(MotionRequest::Relative { dx: 1, dy: 2 }).unwrap();
        dev.inject(MotionRequest::Absolute { x: 10, y: 20 }).unwrap();
        assert_eq!(
            handle.injected(),
            vec![
                MotionRequest::Relative { dx: 1, dy: 2 },
                MotionRequest::Absolute { x: 10, y: 20 },
            ]
        );
    }

    #[test]
    fn test_failure_toggles() {
        let (mut dev, handle) = ScriptedMouse::new();
        handle.reject_injections(true);
        assert!(dev
            .inject(MotionRequest::Relative { dx: 1, dy: 0 })
            .is_err());
        assert!(handle.injected().is_empty());

        handle.disconnect();
        assert!(matches!(dev.poll(), Err(DeviceError::Lost(_))));
    }
}
