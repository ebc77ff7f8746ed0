// Logical inputs and physical input sources

use super::scancode::Scancode;

/// Represents every game-facing input a controller can produce
///
/// The discriminant doubles as the bit index in [`LogicalInput::mask`],
/// so the enum must stay below 32 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalInput {
    // Movement stick (digital emulation)
    StickUp,
    StickLeft,
    StickDown,
    StickRight,

    // Face buttons and triggers
    A,
    B,
    Z,
    CUp,
    CLeft,
    CDown,
    CRight,
    R,
    L,
    Start,

    // D-pad
    DpadUp,
    DpadLeft,
    DpadDown,
    DpadRight,

    // PC-only extensions
    Walk,
    DebugMenu,
    FastForward,
    CenterCamera,

    // Item shortcuts
    Ocarina,
    Hookshot,
    BowArrow,
    LensOfTruth,

    // Equipment toggles
    BootsToggle,
    SwordToggle,
    ShieldToggle,
    TunicToggle,
}

impl LogicalInput {
    /// Every logical input, in declaration order
    pub const ALL: [LogicalInput; 30] = [
        Self::StickUp,
        Self::StickLeft,
        Self::StickDown,
        Self::StickRight,
        Self::A,
        Self::B,
        Self::Z,
        Self::CUp,
        Self::CLeft,
        Self::CDown,
        Self::CRight,
        Self::R,
        Self::L,
        Self::Start,
        Self::DpadUp,
        Self::DpadLeft,
        Self::DpadDown,
        Self::DpadRight,
        Self::Walk,
        Self::DebugMenu,
        Self::FastForward,
        Self::CenterCamera,
        Self::Ocarina,
        Self::Hookshot,
        Self::BowArrow,
        Self::LensOfTruth,
        Self::BootsToggle,
        Self::SwordToggle,
        Self::ShieldToggle,
        Self::TunicToggle,
    ];

    /// Canonical name used in binding files
    pub fn name(self) -> &'static str {
        match self {
            Self::StickUp => "STICK_X_UP",
            Self::StickLeft => "STICK_X_LEFT",
            Self::StickDown => "STICK_X_DOWN",
            Self::StickRight => "STICK_X_RIGHT",
            Self::A => "A_BUTTON",
            Self::B => "B_BUTTON",
            Self::Z => "Z_TRIG",
            Self::CUp => "U_CBUTTONS",
            Self::CLeft => "L_CBUTTONS",
            Self::CDown => "D_CBUTTONS",
            Self::CRight => "R_CBUTTONS",
            Self::R => "R_TRIG",
            Self::L => "L_TRIG",
            Self::Start => "START_BUTTON",
            Self::DpadUp => "U_JPAD",
            Self::DpadLeft => "L_JPAD",
            Self::DpadDown => "D_JPAD",
            Self::DpadRight => "R_JPAD",
            Self::Walk => "WALK_BUTTON",
            Self::DebugMenu => "DEBUG_MENU",
            Self::FastForward => "FAST_FORWARD",
            Self::CenterCamera => "CENTER_CAMERA",
            Self::Ocarina => "OCARINA",
            Self::Hookshot => "HOOKSHOT",
            Self::BowArrow => "BOW_ARROW",
            Self::LensOfTruth => "LENS_OF_TRUTH",
            Self::BootsToggle => "BOOTS_TOGGLE",
            Self::SwordToggle => "SWORD_TOGGLE",
            Self::ShieldToggle => "SHIELD_TOGGLE",
            Self::TunicToggle => "TUNIC_TOGGLE",
        }
    }

    /// Look up a logical input by its canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|input| input.name() == name)
    }

    /// Bit owned by this input in a held/pressed mask
    pub fn mask(self) -> u32 {
        1 << (self as u32)
    }
}

/// Number of slots in a mouse button array (slot 0 is unused)
pub const MOUSE_BUTTON_SLOTS: usize = 6;

/// Physical mouse buttons, numbered the way the windowing layer reports them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MouseButton {
    Left = 1,
    Middle = 2,
    Right = 3,
    X1 = 4,
    X2 = 5,
}

impl MouseButton {
    pub const ALL: [MouseButton; 5] = [
        Self::Left,
        Self::Middle,
        Self::Right,
        Self::X1,
        Self::X2,
    ];

    /// Slot index in a mouse button array
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical name used in binding files
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "BUTTON_LEFT",
            Self::Middle => "BUTTON_MIDDLE",
            Self::Right => "BUTTON_RIGHT",
            Self::X1 => "BUTTON_X1",
            Self::X2 => "BUTTON_X2",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|button| button.name() == name)
    }

    /// Convert a winit mouse button, if it is one we track
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        use winit::event::MouseButton as W;
        match button {
            W::Left => Some(Self::Left),
            W::Middle => Some(Self::Middle),
            W::Right => Some(Self::Right),
            W::Back => Some(Self::X1),
            W::Forward => Some(Self::X2),
            W::Other(_) => None,
        }
    }
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(Scancode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: Scancode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }

    /// Canonical name of the physical control
    pub fn name(self) -> &'static str {
        match self {
            Self::Keyboard(code) => code.name().unwrap_or("UNKNOWN"),
            Self::Mouse(button) => button.name(),
        }
    }
}

/// Default keyboard bindings for the first player
pub fn default_key_bindings() -> Vec<(Scancode, LogicalInput)> {
    vec![
        // Movement (WASD)
        (Scancode::W, LogicalInput::StickUp),
        (Scancode::A, LogicalInput::StickLeft),
        (Scancode::S, LogicalInput::StickDown),
        (Scancode::D, LogicalInput::StickRight),
        // Face buttons
        (Scancode::SPACE, LogicalInput::A),
        (Scancode::F, LogicalInput::B),
        (Scancode::O, LogicalInput::A),
        (Scancode::P, LogicalInput::B),
        (Scancode::LEFT_SHIFT, LogicalInput::Z),
        (Scancode::C, LogicalInput::Z),
        // D-pad
        (Scancode::I, LogicalInput::DpadUp),
        (Scancode::J, LogicalInput::DpadLeft),
        (Scancode::K, LogicalInput::DpadDown),
        (Scancode::L, LogicalInput::DpadRight),
        // Camera (C buttons)
        (Scancode::UP, LogicalInput::CUp),
        (Scancode::LEFT, LogicalInput::CLeft),
        (Scancode::DOWN, LogicalInput::CDown),
        (Scancode::RIGHT, LogicalInput::CRight),
        // Triggers
        (Scancode::X, LogicalInput::L),
        (Scancode::V, LogicalInput::R),
        (Scancode::RIGHT_SHIFT, LogicalInput::R),
        (Scancode::RETURN, LogicalInput::Start),
        // Feature toggles
        (Scancode::F1, LogicalInput::BootsToggle),
        (Scancode::F2, LogicalInput::SwordToggle),
        (Scancode::F3, LogicalInput::ShieldToggle),
        (Scancode::F4, LogicalInput::TunicToggle),
        (Scancode::F5, LogicalInput::DebugMenu),
        (Scancode::G, LogicalInput::FastForward),
    ]
}

/// Default mouse bindings for the first player
pub fn default_mouse_bindings() -> Vec<(MouseButton, LogicalInput)> {
    vec![
        (MouseButton::Left, LogicalInput::B),
        (MouseButton::Right, LogicalInput::CenterCamera),
        (MouseButton::Middle, LogicalInput::Walk),
    ]
}
