//! Script-visible mouse global.
//!
//! [`MouseGlobal`] is the facade the host binds into script scope. It holds
//! the plugin behind `Rc<RefCell<…>>` — the same tick-scoped context the
//! host drives through the [`Plugin`](crate::plugin::Plugin) hooks — and
//! translates between script floats and integer device units at the
//! boundary. No state of its own; every method borrows the plugin for one
//! call and releases it, so the host is free to fire the tick boundary
//! between any two script calls.
//!
//! Accessor mapping, as hosts conventionally register it:
//!
//! | Script name       | Facade method      | Reads/writes                  |
//! |-------------------|--------------------|-------------------------------|
//! | `getDeltaX`       | [`delta_x`]        | snapshot dx (polls lazily)    |
//! | `getDeltaY`       | [`delta_y`]        | snapshot dy (polls lazily)    |
//! | `setDeltaX`       | [`set_delta_x`]    | outbound relative dx          |
//! | `setDeltaY`       | [`set_delta_y`]    | outbound relative dy          |
//! | `getLeftButton`   | [`left_button`]    | snapshot button bit 0         |
//! | `getRightButton`  | [`right_button`]   | snapshot button bit 1         |
//! | `getMiddleButton` | [`middle_button`]  | snapshot button bit 2         |
//!
//! [`delta_x`]: MouseGlobal::delta_x
//! [`delta_y`]: MouseGlobal::delta_y
//! [`set_delta_x`]: MouseGlobal::set_delta_x
//! [`set_delta_y`]: MouseGlobal::set_delta_y
//! [`left_button`]: MouseGlobal::left_button
//! [`right_button`]: MouseGlobal::right_button
//! [`middle_button`]: MouseGlobal::middle_button

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::DeviceError;
use crate::plugin::MousePlugin;
use crate::snapshot::buttons;

/// Converts a script float to device units: round half away from zero,
/// saturating at the `i32` range for out-of-range or non-finite inputs.
#[inline]
fn to_device_units(value: f64) -> i32 {
    value.round() as i32
}

/// Script facade over a shared [`MousePlugin`]; see the module docs.
#[derive(Clone)]
pub struct MouseGlobal {
    plugin: Rc<RefCell<MousePlugin>>,
}

impl MouseGlobal {
    pub fn new(plugin: Rc<RefCell<MousePlugin>>) -> Self {
        Self { plugin }
    }

    /// This tick's relative X motion, widened to a script float.
    pub fn delta_x(&self) -> Result<f64, DeviceError> {
        Ok(self.plugin.borrow_mut().delta_x()? as f64)
    }

    /// This tick's relative Y motion, widened to a script float.
    pub fn delta_y(&self) -> Result<f64, DeviceError> {
        Ok(self.plugin.borrow_mut().delta_y()? as f64)
    }

    /// Arm the outbound relative X component. Rounds half away from zero:
    /// `1.6 → 2`, `0.5 → 1`, `-0.5 → -1`, `2.5 → 3`.
    pub fn set_delta_x(&self, dx: f64) {
        self.plugin.borrow_mut().set_delta_x(to_device_units(dx));
    }

    /// Arm the outbound relative Y component. Same rounding as
    /// [`set_delta_x`](Self::set_delta_x).
    pub fn set_delta_y(&self, dy: f64) {
        self.plugin.borrow_mut().set_delta_y(to_device_units(dy));
    }

    /// Whether the left button (bit 0) is held this tick.
    pub fn left_button(&self) -> Result<bool, DeviceError> {
        self.plugin.borrow_mut().button(buttons::LEFT)
    }

    /// Whether the right button (bit 1) is held this tick.
    pub fn right_button(&self) -> Result<bool, DeviceError> {
        self.plugin.borrow_mut().button(buttons::RIGHT)
    }

    /// Whether the middle button (bit 2) is held this tick.
    pub fn middle_button(&self) -> Result<bool, DeviceError> {
        self.plugin.borrow_mut().button(buttons::MIDDLE)
    }
}
