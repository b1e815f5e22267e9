//! Simulated scripting host running the plugin over the scripted backend.
//!
//! No hardware needed: feeds motion into a `ScriptedMouse`, runs a few
//! "script" ticks against the global facade, fires the tick boundary, and
//! prints what would have been injected into the OS.

use std::cell::RefCell;
use std::rc::Rc;

use mousetick::backends::scripted::ScriptedMouse;
use mousetick::{MouseGlobal, MousePlugin, Plugin};

fn main() {
    env_logger::init();

    let (device, handle) = ScriptedMouse::new();
    let plugin = Rc::new(RefCell::new(MousePlugin::with_backend(Box::new(device))));
    let mouse = MouseGlobal::new(Rc::clone(&plugin));

    // Tick 1: the "user" moves the mouse and holds the left button; the
    // script echoes the motion back, doubled.
    handle.move_by(4, -2);
    handle.press(0);

    let dx = mouse.delta_x().unwrap();
    let dy = mouse.delta_y().unwrap();
    println!("tick 1: read dx={dx} dy={dy} left={}", mouse.left_button().unwrap());
    mouse.set_delta_x(dx * 2.0);
    mouse.set_delta_y(dy * 2.0);

    plugin.borrow_mut().before_next_execute();

    // Tick 2: script writes repeatedly; only the last value goes out.
    for step in 1..=5 {
        mouse.set_delta_x(step as f64 * 1.5);
    }
    plugin.borrow_mut().before_next_execute();

    // Tick 3: nothing written, nothing injected.
    plugin.borrow_mut().before_next_execute();

    println!("injected requests:");
    for request in handle.injected() {
        println!("  {request:?}");
    }
}
