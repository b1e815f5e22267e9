//! Outbound motion coalescing.
//!
//! Script code may write motion any number of times inside one tick;
//! [`OutboundBuffer`] keeps only the most recent value per slot and the tick
//! boundary turns the whole tick into **at most one** [`MotionRequest`].
//! That single-injection-per-tick discipline is deliberate backpressure: a
//! script spinning in a tight loop cannot flood the OS input queue.
//!
//! # Slot rules
//! - Two mutually exclusive slots: relative delta and absolute position.
//! - Last write wins within a tick; writes are never summed.
//! - Zero values disarm: `set_relative(0, 0)` / `set_absolute(0, 0)` clear a
//!   pending request rather than arming one. A slot is armed iff either of
//!   its components is non-zero, so the absolute origin is not reachable
//!   through the buffer.
//! - If both slots are armed when the tick is flushed, the relative request
//!   wins and the absolute one is dropped for that tick (logged at debug
//!   level). Long-standing host scripts depend on this precedence.

use log::debug;

/// One coalesced motion to hand to the OS, tagged by addressing mode.
///
/// The adapter translates this into whatever bit-exact record the platform
/// call wants; nothing above the adapter touches flag words or unions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionRequest {
    /// Move by a delta, in device counts.
    Relative { dx: i32, dy: i32 },
    /// Move to a position, in the OS's normalized desktop space
    /// (0..=65535 per axis on Windows).
    Absolute { x: i32, y: i32 },
}

/// Pending outbound motion for the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutboundBuffer {
    rel_dx: i32,
    rel_dy: i32,
    abs_x: i32,
    abs_y: i32,
}

impl OutboundBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or with zeros, disarm) the relative slot. Last write wins.
    pub fn set_relative(&mut self, dx: i32, dy: i32) {
        self.rel_dx = dx;
        self.rel_dy = dy;
    }

    /// Overwrite only the X component of the relative slot.
    pub fn set_relative_x(&mut self, dx: i32) {
        self.rel_dx = dx;
    }

    /// Overwrite only the Y component of the relative slot.
    pub fn set_relative_y(&mut self, dy: i32) {
        self.rel_dy = dy;
    }

    /// Arm (or with zeros, disarm) the absolute slot. Last write wins.
    pub fn set_absolute(&mut self, x: i32, y: i32) {
        self.abs_x = x;
        self.abs_y = y;
    }

    /// Whether either slot is armed.
    pub fn is_armed(&self) -> bool {
        self.relative_armed() || self.absolute_armed()
    }

    /// Drain the tick: return the coalesced request, if any, and reset both
    /// slots to zero regardless of which branch was taken.
    ///
    /// Resetting unconditionally is what keeps a failed injection from
    /// replaying stale deltas next tick.
    pub fn take(&mut self) -> Option<MotionRequest> {
        if self.relative_armed() && self.absolute_armed() {
            debug!(
                "relative and absolute motion both armed this tick; relative wins, dropping absolute ({}, {})",
                self.abs_x, self.abs_y
            );
        }

        let request = if self.relative_armed() {
            Some(MotionRequest::Relative {
                dx: self.rel_dx,
                dy: self.rel_dy,
            })
        } else if self.absolute_armed() {
            Some(MotionRequest::Absolute {
                x: self.abs_x,
                y: self.abs_y,
            })
        } else {
            None
        };

        *self = Self::default();
        request
    }

    #[inline]
    fn relative_armed(&self) -> bool {
        self.rel_dx != 0 || self.rel_dy != 0
    }

    #[inline]
    fn absolute_armed(&self) -> bool {
        self.abs_x != 0 || self.abs_y != 0
    }
}
