// Turns raw state and transitions into logical input events

use super::action::LogicalInput;
use super::config::BindingTable;
use super::edge::{transition, Edge, PreviousState};
use super::host::HostConfig;
use super::player::{ControllerState, InputSink, STICK_MAX};
use super::scancode::Scancode;
use super::snapshot::RawSnapshot;
use glam::{IVec2, Vec2};

/// Toggles fullscreen
pub const FULLSCREEN_KEY: Scancode = Scancode::F10;

/// Leaves fullscreen
pub const EXIT_FULLSCREEN_KEY: Scancode = Scancode::ESCAPE;

fn fire<S: InputSink>(sink: &mut S, input: LogicalInput, previous: bool, current: bool) {
    match transition(previous, current) {
        Some(Edge::Rising) => sink.down(input),
        Some(Edge::Falling) => sink.up(input),
        None => {}
    }
    if current {
        sink.held(input);
    }
}

/// Handle the fullscreen hotkeys, which bypass the binding table
pub fn apply_hotkeys<H: HostConfig + ?Sized>(
    current: &RawSnapshot,
    previous: &PreviousState,
    host: &mut H,
) {
    let rising = |key: Scancode| current.key(key) && !previous.keys[key.index()];

    if rising(FULLSCREEN_KEY) {
        let value = !host.fullscreen();
        log::info!("Fullscreen {}", if value { "on" } else { "off" });
        host.set_fullscreen(value);
    }

    if rising(EXIT_FULLSCREEN_KEY) && host.fullscreen() {
        log::info!("Leaving fullscreen");
        host.set_fullscreen(false);
    }
}

/// Fire held/down/up for every bound key
pub fn dispatch_keys<S: InputSink>(
    table: &BindingTable,
    current: &RawSnapshot,
    previous: &PreviousState,
    sink: &mut S,
) {
    for (key, input) in table.key_bindings() {
        let i = key.index();
        fire(sink, input, previous.keys[i], current.keys[i]);
    }
}

/// Fire held/down/up for every bound mouse button
pub fn dispatch_mouse<S: InputSink>(
    table: &BindingTable,
    current: &RawSnapshot,
    previous: &PreviousState,
    sink: &mut S,
) {
    for (button, input) in table.mouse_bindings() {
        let i = button.index();
        fire(sink, input, previous.mouse[i], current.mouse[i]);
    }
}

/// Feed relative mouse motion into the cursor and the camera stick
pub fn apply_mouse_motion(
    state: &mut ControllerState,
    delta: IVec2,
    sensitivity: i32,
    first_person: bool,
) {
    let mut delta = delta;
    if first_person {
        delta.y = delta.y.saturating_neg();
    }

    let scaled = delta.saturating_mul(IVec2::splat(sensitivity));
    state.cursor = state.cursor.saturating_add(scaled);

    // Screen y grows downwards, stick y grows upwards
    let camera = Vec2::new(
        state.camera_stick.x + scaled.x as f32,
        state.camera_stick.y - scaled.y as f32,
    );
    state.camera_stick = camera.clamp(Vec2::splat(-STICK_MAX), Vec2::splat(STICK_MAX));
}
