// Raw input collector fed by winit events
//
// Keeps the full keyboard array, the mouse button bitmask and accumulated
// relative motion, and hands out one `RawSnapshot` per frame.

use super::action::MouseButton;
use super::scancode::{Scancode, KEY_STATE_SIZE};
use super::snapshot::RawSnapshot;
use glam::{DVec2, IVec2};
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::keyboard::PhysicalKey;

/// Low-level collector that tracks physical key and button state
#[derive(Debug, Clone)]
pub struct RawInputPoller {
    keys: [bool; KEY_STATE_SIZE],
    mouse_bits: u32,
    motion: DVec2,
}

impl RawInputPoller {
    pub fn new() -> Self {
        Self {
            keys: [false; KEY_STATE_SIZE],
            mouse_bits: 0,
            motion: DVec2::ZERO,
        }
    }

    /// Process a window event, returning true if it was input we track
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => self.handle_key_event(event),
            WindowEvent::MouseInput { state, button, .. } => match MouseButton::from_winit(*button) {
                Some(button) => {
                    self.set_mouse(button, *state == ElementState::Pressed);
                    true
                }
                None => false,
            },
            WindowEvent::Focused(false) => {
                // Releases are not delivered while unfocused
                self.release_all();
                false
            }
            _ => false,
        }
    }

    /// Process a device event; only relative mouse motion is used
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.motion += DVec2::new(delta.0, delta.1);
        }
    }

    fn handle_key_event(&mut self, event: &KeyEvent) -> bool {
        let PhysicalKey::Code(code) = event.physical_key else {
            return false;
        };
        match Scancode::from_winit(code) {
            Some(key) => {
                self.set_key(key, event.state == ElementState::Pressed);
                true
            }
            None => false,
        }
    }

    pub fn set_key(&mut self, key: Scancode, down: bool) {
        self.keys[key.index()] = down;
    }

    pub fn set_mouse(&mut self, button: MouseButton, down: bool) {
        let bit = 1u32 << (button.index() - 1);
        if down {
            self.mouse_bits |= bit;
        } else {
            self.mouse_bits &= !bit;
        }
    }

    pub fn add_motion(&mut self, dx: f64, dy: f64) {
        self.motion += DVec2::new(dx, dy);
    }

    /// Drop every held key and button
    pub fn release_all(&mut self) {
        self.keys = [false; KEY_STATE_SIZE];
        self.mouse_bits = 0;
    }

    /// Capture this frame's state
    ///
    /// Whole pixels of motion are consumed; the fraction carries over.
    pub fn snapshot(&mut self) -> RawSnapshot {
        let whole = DVec2::new(self.motion.x.trunc(), self.motion.y.trunc());
        self.motion -= whole;
        let delta = IVec2::new(saturate(whole.x), saturate(whole.y));
        RawSnapshot::from_raw(self.keys, self.mouse_bits, delta)
    }
}

impl Default for RawInputPoller {
    fn default() -> Self {
        Self::new()
    }
}

fn saturate(value: f64) -> i32 {
    value.clamp(i32::MIN as f64, i32::MAX as f64) as i32
}
