//! Live loop against a real mouse (Windows only).
//!
//! Starts the plugin on the first HID mouse found, then runs a fixed number
//! of ticks: print deltas and buttons when something happened, echo the
//! motion back through injection, fire the boundary, sleep. Run with
//! `RUST_LOG=debug` for device bring-up detail.

#[cfg(target_os = "windows")]
fn main() {
    use std::time::Duration;

    use mousetick::{MousePlugin, Plugin};

    env_logger::init();

    let mut plugin = MousePlugin::new();
    if let Err(e) = plugin.start() {
        eprintln!("could not start mouse plugin: {e}");
        return;
    }

    println!("polling for 10 seconds; move the mouse...");
    for _ in 0..1000 {
        let dx = plugin.delta_x().unwrap_or(0);
        let dy = plugin.delta_y().unwrap_or(0);
        if dx != 0 || dy != 0 {
            println!(
                "dx={dx:5} dy={dy:5}  L={} R={} M={}",
                plugin.button(0).unwrap_or(false),
                plugin.button(1).unwrap_or(false),
                plugin.button(2).unwrap_or(false),
            );
            // Echo the motion back into the OS input stream.
            plugin.set_delta(dx, dy);
        }
        plugin.before_next_execute();
        std::thread::sleep(Duration::from_millis(10));
    }

    plugin.stop();
}

#[cfg(not(target_os = "windows"))]
fn main() {
    eprintln!("live_poll needs the Windows HID backend; try the tick_host demo instead");
}
