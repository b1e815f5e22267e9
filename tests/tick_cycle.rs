//! Host-lifecycle integration tests for the mouse plugin.
//!
//! Drives a full session the way a scripting host would: start, script
//! ticks interleaved with tick boundaries, device failures mid-session,
//! stop. Runs entirely over the scripted backend, no hardware needed.

use std::cell::RefCell;
use std::rc::Rc;

use mousetick::backends::scripted::{ScriptedMouse, ScriptedMouseHandle};
use mousetick::{MotionRequest, MouseGlobal, MousePlugin, Plugin};

fn bound_session() -> (Rc<RefCell<MousePlugin>>, MouseGlobal, ScriptedMouseHandle) {
    let (device, handle) = ScriptedMouse::new();
    let plugin = Rc::new(RefCell::new(MousePlugin::with_backend(Box::new(device))));
    let global = MouseGlobal::new(Rc::clone(&plugin));
    (plugin, global, handle)
}

fn tick_boundary(plugin: &Rc<RefCell<MousePlugin>>) {
    plugin.borrow_mut().before_next_execute();
}

// ============================================================================
// End-to-end tick scenarios
// ============================================================================

#[test]
fn test_write_only_tick_then_fresh_read() {
    let (plugin, mouse, handle) = bound_session();

    // Tick 1: script writes, no reads.
    mouse.set_delta_x(3.0);
    mouse.set_delta_y(-2.0);
    tick_boundary(&plugin);

    assert_eq!(
        handle.injected(),
        vec![MotionRequest::Relative { dx: 3, dy: -2 }]
    );
    assert_eq!(handle.poll_count(), 0);

    // Tick 2: first read triggers exactly one poll and sees polled values,
    // not leftovers from the injection.
    handle.move_by(10, 20);
    assert_eq!(mouse.delta_x().unwrap(), 10.0);
    assert_eq!(mouse.delta_y().unwrap(), 20.0);
    assert_eq!(handle.poll_count(), 1);
}

#[test]
fn test_snapshot_stable_across_many_reads() {
    let (plugin, mouse, handle) = bound_session();
    handle.move_by(6, 6);
    handle.press(1);

    for _ in 0..10 {
        assert_eq!(mouse.delta_x().unwrap(), 6.0);
        assert_eq!(mouse.delta_y().unwrap(), 6.0);
        assert!(mouse.right_button().unwrap());
    }
    assert_eq!(handle.poll_count(), 1);

    // After the boundary, reads poll afresh.
    tick_boundary(&plugin);
    assert_eq!(mouse.delta_x().unwrap(), 0.0);
    assert_eq!(handle.poll_count(), 2);
}

#[test]
fn test_many_writes_one_injection_per_tick() {
    let (plugin, mouse, handle) = bound_session();

    for step in 1..=20 {
        mouse.set_delta_x(step as f64);
        mouse.set_delta_y(-(step as f64));
    }
    tick_boundary(&plugin);
    // Idle boundary right after: nothing left to flush.
    tick_boundary(&plugin);

    assert_eq!(
        handle.injected(),
        vec![MotionRequest::Relative { dx: 20, dy: -20 }]
    );
}

#[test]
fn test_relative_beats_absolute_within_a_tick() {
    let (plugin, mouse, handle) = bound_session();

    plugin.borrow_mut().set_position(500, 600);
    mouse.set_delta_x(1.0);
    tick_boundary(&plugin);

    // Next tick the other way around.
    mouse.set_delta_y(2.0);
    plugin.borrow_mut().set_position(500, 600);
    tick_boundary(&plugin);

    assert_eq!(
        handle.injected(),
        vec![
            MotionRequest::Relative { dx: 1, dy: 0 },
            MotionRequest::Relative { dx: 0, dy: 2 },
        ]
    );
}

#[test]
fn test_rounding_at_the_script_boundary() {
    let (plugin, mouse, handle) = bound_session();

    mouse.set_delta_x(1.6);
    tick_boundary(&plugin);
    mouse.set_delta_x(0.5);
    tick_boundary(&plugin);
    mouse.set_delta_x(-0.5);
    tick_boundary(&plugin);
    mouse.set_delta_x(2.5);
    tick_boundary(&plugin);
    // 0.4 rounds to zero, which disarms: no injection for that tick.
    mouse.set_delta_x(0.4);
    tick_boundary(&plugin);

    let dxs: Vec<i32> = handle
        .injected()
        .into_iter()
        .map(|r| match r {
            MotionRequest::Relative { dx, .. } => dx,
            other => panic!("unexpected request {other:?}"),
        })
        .collect();
    assert_eq!(dxs, vec![2, 1, -1, 3]);
}

// ============================================================================
// Failure-path sessions
// ============================================================================

#[test]
fn test_device_loss_mid_session() {
    let (plugin, mouse, handle) = bound_session();

    handle.move_by(1, 1);
    assert_eq!(mouse.delta_x().unwrap(), 1.0);
    tick_boundary(&plugin);

    // Device goes away between ticks: the next read surfaces the loss and
    // the plugin drops to the stopped state.
    handle.disconnect();
    assert!(mouse.delta_x().is_err());
    assert!(!plugin.borrow().is_started());

    // The session keeps running with zeroed reads and silent writes.
    assert_eq!(mouse.delta_x().unwrap(), 0.0);
    mouse.set_delta_x(5.0);
    tick_boundary(&plugin);
    assert!(handle.injected().is_empty());
}

#[test]
fn test_injection_failure_does_not_leak_into_next_tick() {
    let (plugin, mouse, handle) = bound_session();

    handle.reject_injections(true);
    mouse.set_delta_x(8.0);
    tick_boundary(&plugin);

    handle.reject_injections(false);
    mouse.set_delta_y(1.0);
    tick_boundary(&plugin);

    // Only the second tick's request made it out; the failed one was
    // dropped, not merged or retried.
    assert_eq!(
        handle.injected(),
        vec![MotionRequest::Relative { dx: 0, dy: 1 }]
    );
}

#[test]
fn test_stop_then_restart_with_new_backend() {
    let (plugin, mouse, handle) = bound_session();
    handle.move_by(2, 2);
    assert_eq!(mouse.delta_x().unwrap(), 2.0);

    plugin.borrow_mut().stop();
    assert!(!plugin.borrow().is_started());
    // Reads now observe zeroed state, per the disabled-plugin policy.
    assert_eq!(mouse.delta_x().unwrap(), 0.0);
    assert_eq!(handle.poll_count(), 1);
}
