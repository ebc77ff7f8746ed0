// One frame of raw keyboard and mouse state

use super::action::{MouseButton, MOUSE_BUTTON_SLOTS};
use super::scancode::{Scancode, KEY_STATE_SIZE};
use glam::IVec2;

/// Expand a mouse button bitmask into a slot array
///
/// Bit `i - 1` of `bits` drives slot `i`; slot 0 is never set.
pub fn expand_mouse_bits(bits: u32) -> [bool; MOUSE_BUTTON_SLOTS] {
    let mut slots = [false; MOUSE_BUTTON_SLOTS];
    for (i, slot) in slots.iter_mut().enumerate().skip(1) {
        *slot = bits & (1 << (i - 1)) != 0;
    }
    slots
}

/// Raw input captured once per frame
#[derive(Debug, Clone, PartialEq)]
pub struct RawSnapshot {
    /// Keyboard state indexed by scancode
    pub keys: [bool; KEY_STATE_SIZE],

    /// Mouse button state indexed by button id
    pub mouse: [bool; MOUSE_BUTTON_SLOTS],

    /// Relative mouse motion since the previous frame
    pub mouse_delta: IVec2,
}

impl RawSnapshot {
    /// A frame with nothing pressed and no motion
    pub fn new() -> Self {
        Self {
            keys: [false; KEY_STATE_SIZE],
            mouse: [false; MOUSE_BUTTON_SLOTS],
            mouse_delta: IVec2::ZERO,
        }
    }

    /// Build a snapshot from a key array and a mouse bitmask
    pub fn from_raw(keys: [bool; KEY_STATE_SIZE], mouse_bits: u32, mouse_delta: IVec2) -> Self {
        Self {
            keys,
            mouse: expand_mouse_bits(mouse_bits),
            mouse_delta,
        }
    }

    pub fn with_key(mut self, key: Scancode) -> Self {
        self.set_key(key, true);
        self
    }

    pub fn with_mouse(mut self, button: MouseButton) -> Self {
        self.set_mouse(button, true);
        self
    }

    pub fn with_motion(mut self, dx: i32, dy: i32) -> Self {
        self.mouse_delta = IVec2::new(dx, dy);
        self
    }

    pub fn set_key(&mut self, key: Scancode, down: bool) {
        self.keys[key.index()] = down;
    }

    pub fn set_mouse(&mut self, button: MouseButton, down: bool) {
        self.mouse[button.index()] = down;
    }

    pub fn key(&self, key: Scancode) -> bool {
        self.keys[key.index()]
    }

    pub fn mouse_button(&self, button: MouseButton) -> bool {
        self.mouse[button.index()]
    }
}

impl Default for RawSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
