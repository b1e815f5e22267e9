//! mousetick — tick-synchronized mouse I/O for scripting hosts.
//!
//! Exposes one physical mouse to a tick-based scripting engine: relative
//! motion and button state are polled lazily at most once per execution
//! tick, and motion written by script code is coalesced into at most one
//! synthetic-input injection at the tick boundary.
//!
//! The host drives a [`MousePlugin`] through the [`Plugin`] lifecycle
//! (`start`/`stop` around a session, `before_next_execute` once per tick)
//! and binds a [`MouseGlobal`] into script scope for the accessor surface.

pub mod backends;
pub mod config;
pub mod error;
pub mod global;
pub mod outbound;
pub mod plugin;
pub mod snapshot;

pub use config::*;
pub use error::*;
pub use global::*;
pub use outbound::*;
pub use plugin::*;
pub use snapshot::*;
