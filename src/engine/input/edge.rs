// Per-frame transition detection over raw input channels

use super::action::MOUSE_BUTTON_SLOTS;
use super::scancode::KEY_STATE_SIZE;
use super::snapshot::RawSnapshot;

/// Direction of a state change between two frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

/// Classify the change of one channel between frames
pub fn transition(previous: bool, current: bool) -> Option<Edge> {
    match (previous, current) {
        (false, true) => Some(Edge::Rising),
        (true, false) => Some(Edge::Falling),
        _ => None,
    }
}

/// Channels that became active this frame: `(previous ^ current) & current`
pub fn rising_edges<const N: usize>(previous: &[bool; N], current: &[bool; N]) -> [bool; N] {
    let mut edges = [false; N];
    for (i, edge) in edges.iter_mut().enumerate() {
        *edge = (previous[i] ^ current[i]) & current[i];
    }
    edges
}

/// Raw state retained across frames, used only to find transitions
#[derive(Debug, Clone, PartialEq)]
pub struct PreviousState {
    pub keys: [bool; KEY_STATE_SIZE],
    pub mouse: [bool; MOUSE_BUTTON_SLOTS],
}

impl PreviousState {
    pub fn new() -> Self {
        Self {
            keys: [false; KEY_STATE_SIZE],
            mouse: [false; MOUSE_BUTTON_SLOTS],
        }
    }

    /// Keys that went down this frame
    pub fn key_rising_edges(&self, current: &RawSnapshot) -> [bool; KEY_STATE_SIZE] {
        rising_edges(&self.keys, &current.keys)
    }

    /// Mouse buttons that went down this frame
    pub fn mouse_rising_edges(&self, current: &RawSnapshot) -> [bool; MOUSE_BUTTON_SLOTS] {
        rising_edges(&self.mouse, &current.mouse)
    }

    /// Remember `current` as the previous frame
    pub fn commit(&mut self, current: &RawSnapshot) {
        self.keys = current.keys;
        self.mouse = current.mouse;
    }
}

impl Default for PreviousState {
    fn default() -> Self {
        Self::new()
    }
}
