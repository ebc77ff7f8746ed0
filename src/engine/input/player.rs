// Aggregated logical state of one controller

use super::action::LogicalInput;
use glam::{IVec2, Vec2};

/// Full deflection of an emulated stick axis
pub const STICK_MAX: f32 = 127.0;

/// Receives logical input notifications from the dispatcher
///
/// `down` and `up` fire at most once per transition; `held` fires every
/// frame the input is active.
pub trait InputSink {
    fn held(&mut self, input: LogicalInput);
    fn down(&mut self, input: LogicalInput);
    fn up(&mut self, input: LogicalInput);
}

/// Logical state produced by a controller, read by the player layer
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    /// Inputs active this frame
    held: u32,

    /// Inputs that went down this frame
    just_pressed: u32,

    /// Inputs that went up this frame
    just_released: u32,

    /// Movement stick, each axis in [-STICK_MAX, STICK_MAX]
    pub stick: Vec2,

    /// Camera stick emulated from mouse motion
    pub camera_stick: Vec2,

    /// Scaled mouse motion accumulated since creation
    pub cursor: IVec2,

    /// Walk modifier, asserted per frame
    pub walk: bool,

    /// Whether a mouse feeds this controller
    pub has_mouse: bool,
}

impl ControllerState {
    pub fn new() -> Self {
        Self {
            held: 0,
            just_pressed: 0,
            just_released: 0,
            stick: Vec2::ZERO,
            camera_stick: Vec2::ZERO,
            cursor: IVec2::ZERO,
            walk: false,
            has_mouse: false,
        }
    }

    /// Clear per-frame state before any input is processed
    pub fn begin_frame(&mut self) {
        self.held = 0;
        self.just_pressed = 0;
        self.just_released = 0;
        self.stick = Vec2::ZERO;
        self.camera_stick = Vec2::ZERO;
        self.walk = false;
    }

    pub fn is_held(&self, input: LogicalInput) -> bool {
        self.held & input.mask() != 0
    }

    pub fn just_pressed(&self, input: LogicalInput) -> bool {
        self.just_pressed & input.mask() != 0
    }

    pub fn just_released(&self, input: LogicalInput) -> bool {
        self.just_released & input.mask() != 0
    }

    /// Raw held mask, one bit per [`LogicalInput`]
    pub fn buttons(&self) -> u32 {
        self.held
    }

    pub fn just_pressed_inputs(&self) -> Vec<LogicalInput> {
        LogicalInput::ALL
            .iter()
            .copied()
            .filter(|input| self.just_pressed(*input))
            .collect()
    }

    /// Scale both sticks, used by the walk modifier
    pub fn scale_sticks(&mut self, factor: f32) {
        self.stick *= factor;
        self.camera_stick *= factor;
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSink for ControllerState {
    fn held(&mut self, input: LogicalInput) {
        self.held |= input.mask();
        match input {
            LogicalInput::StickUp => self.stick.y = STICK_MAX,
            LogicalInput::StickDown => self.stick.y = -STICK_MAX,
            LogicalInput::StickLeft => self.stick.x = -STICK_MAX,
            LogicalInput::StickRight => self.stick.x = STICK_MAX,
            LogicalInput::Walk => self.walk = true,
            _ => {}
        }
    }

    fn down(&mut self, input: LogicalInput) {
        self.just_pressed |= input.mask();
    }

    fn up(&mut self, input: LogicalInput) {
        self.just_released |= input.mask();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_creation() {
        let state = ControllerState::new();
        assert_eq!(state.buttons(), 0);
        assert_eq!(state.stick, Vec2::ZERO);
        assert!(!state.walk);
    }

    #[test]
    fn test_held_sets_bit() {
        let mut state = ControllerState::new();
        state.held(LogicalInput::A);
        assert!(state.is_held(LogicalInput::A));
        assert!(!state.is_held(LogicalInput::B));
        assert_eq!(state.buttons(), LogicalInput::A.mask());
    }

    #[test]
    fn test_directional_held_drives_stick() {
        let mut state = ControllerState::new();
        state.held(LogicalInput::StickUp);
        state.held(LogicalInput::StickLeft);
        assert_eq!(state.stick, Vec2::new(-STICK_MAX, STICK_MAX));
    }

    #[test]
    fn test_walk_is_asserted_by_held() {
        let mut state = ControllerState::new();
        state.held(LogicalInput::Walk);
        assert!(state.walk);

        state.begin_frame();
        assert!(!state.walk);
    }

    #[test]
    fn test_down_and_up() {
        let mut state = ControllerState::new();
        state.down(LogicalInput::Start);
        assert!(state.just_pressed(LogicalInput::Start));
        assert_eq!(state.just_pressed_inputs(), vec![LogicalInput::Start]);

        state.begin_frame();
        state.up(LogicalInput::Start);
        assert!(!state.just_pressed(LogicalInput::Start));
        assert!(state.just_released(LogicalInput::Start));
    }

    #[test]
    fn test_begin_frame_keeps_cursor() {
        let mut state = ControllerState::new();
        state.cursor = IVec2::new(10, -4);
        state.camera_stick = Vec2::new(20.0, 0.0);
        state.begin_frame();

        assert_eq!(state.cursor, IVec2::new(10, -4));
        assert_eq!(state.camera_stick, Vec2::ZERO);
    }

    #[test]
    fn test_scale_sticks() {
        let mut state = ControllerState::new();
        state.stick = Vec2::new(STICK_MAX, -STICK_MAX);
        state.camera_stick = Vec2::new(40.0, 8.0);
        state.scale_sticks(0.25);

        approx::assert_relative_eq!(state.stick.x, 31.75);
        approx::assert_relative_eq!(state.stick.y, -31.75);
        approx::assert_relative_eq!(state.camera_stick.x, 10.0);
        approx::assert_relative_eq!(state.camera_stick.y, 2.0);
    }
}
