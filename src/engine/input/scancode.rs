// Physical keyboard scancodes (USB HID usage numbering)

use winit::keyboard::KeyCode;

/// Size of a full keyboard state array
pub const KEY_STATE_SIZE: usize = 512;

/// A physical key position, independent of keyboard layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scancode(u16);

impl Scancode {
    pub const A: Scancode = Scancode(4);
    pub const C: Scancode = Scancode(6);
    pub const D: Scancode = Scancode(7);
    pub const F: Scancode = Scancode(9);
    pub const G: Scancode = Scancode(10);
    pub const I: Scancode = Scancode(12);
    pub const J: Scancode = Scancode(13);
    pub const K: Scancode = Scancode(14);
    pub const L: Scancode = Scancode(15);
    pub const O: Scancode = Scancode(18);
    pub const P: Scancode = Scancode(19);
    pub const S: Scancode = Scancode(22);
    pub const V: Scancode = Scancode(25);
    pub const W: Scancode = Scancode(26);
    pub const X: Scancode = Scancode(27);
    pub const Z: Scancode = Scancode(29);
    pub const RETURN: Scancode = Scancode(40);
    pub const ESCAPE: Scancode = Scancode(41);
    pub const SPACE: Scancode = Scancode(44);
    pub const F1: Scancode = Scancode(58);
    pub const F2: Scancode = Scancode(59);
    pub const F3: Scancode = Scancode(60);
    pub const F4: Scancode = Scancode(61);
    pub const F5: Scancode = Scancode(62);
    pub const F9: Scancode = Scancode(66);
    pub const F10: Scancode = Scancode(67);
    pub const RIGHT: Scancode = Scancode(79);
    pub const LEFT: Scancode = Scancode(80);
    pub const DOWN: Scancode = Scancode(81);
    pub const UP: Scancode = Scancode(82);
    pub const LEFT_SHIFT: Scancode = Scancode(225);
    pub const RIGHT_SHIFT: Scancode = Scancode(229);

    /// Build a scancode from a raw index, rejecting values outside the key array
    pub fn new(code: u16) -> Option<Self> {
        ((code as usize) < KEY_STATE_SIZE).then_some(Self(code))
    }

    /// Index into a keyboard state array
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Canonical name, if this scancode has one
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }

    /// Look up a scancode by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(name))
            .map(|(code, _)| Self(*code))
    }

    /// Convert a winit physical key code
    pub fn from_winit(key: KeyCode) -> Option<Self> {
        let code = match key {
            KeyCode::KeyA => 4,
            KeyCode::KeyB => 5,
            KeyCode::KeyC => 6,
            KeyCode::KeyD => 7,
            KeyCode::KeyE => 8,
            KeyCode::KeyF => 9,
            KeyCode::KeyG => 10,
            KeyCode::KeyH => 11,
            KeyCode::KeyI => 12,
            KeyCode::KeyJ => 13,
            KeyCode::KeyK => 14,
            KeyCode::KeyL => 15,
            KeyCode::KeyM => 16,
            KeyCode::KeyN => 17,
            KeyCode::KeyO => 18,
            KeyCode::KeyP => 19,
            KeyCode::KeyQ => 20,
            KeyCode::KeyR => 21,
            KeyCode::KeyS => 22,
            KeyCode::KeyT => 23,
            KeyCode::KeyU => 24,
            KeyCode::KeyV => 25,
            KeyCode::KeyW => 26,
            KeyCode::KeyX => 27,
            KeyCode::KeyY => 28,
            KeyCode::KeyZ => 29,
            KeyCode::Digit1 => 30,
            KeyCode::Digit2 => 31,
            KeyCode::Digit3 => 32,
            KeyCode::Digit4 => 33,
            KeyCode::Digit5 => 34,
            KeyCode::Digit6 => 35,
            KeyCode::Digit7 => 36,
            KeyCode::Digit8 => 37,
            KeyCode::Digit9 => 38,
            KeyCode::Digit0 => 39,
            KeyCode::Enter => 40,
            KeyCode::Escape => 41,
            KeyCode::Backspace => 42,
            KeyCode::Tab => 43,
            KeyCode::Space => 44,
            KeyCode::Minus => 45,
            KeyCode::Equal => 46,
            KeyCode::BracketLeft => 47,
            KeyCode::BracketRight => 48,
            KeyCode::Backslash => 49,
            KeyCode::Semicolon => 51,
            KeyCode::Quote => 52,
            KeyCode::Backquote => 53,
            KeyCode::Comma => 54,
            KeyCode::Period => 55,
            KeyCode::Slash => 56,
            KeyCode::CapsLock => 57,
            KeyCode::F1 => 58,
            KeyCode::F2 => 59,
            KeyCode::F3 => 60,
            KeyCode::F4 => 61,
            KeyCode::F5 => 62,
            KeyCode::F6 => 63,
            KeyCode::F7 => 64,
            KeyCode::F8 => 65,
            KeyCode::F9 => 66,
            KeyCode::F10 => 67,
            KeyCode::F11 => 68,
            KeyCode::F12 => 69,
            KeyCode::PrintScreen => 70,
            KeyCode::ScrollLock => 71,
            KeyCode::Pause => 72,
            KeyCode::Insert => 73,
            KeyCode::Home => 74,
            KeyCode::PageUp => 75,
            KeyCode::Delete => 76,
            KeyCode::End => 77,
            KeyCode::PageDown => 78,
            KeyCode::ArrowRight => 79,
            KeyCode::ArrowLeft => 80,
            KeyCode::ArrowDown => 81,
            KeyCode::ArrowUp => 82,
            KeyCode::NumLock => 83,
            KeyCode::NumpadDivide => 84,
            KeyCode::NumpadMultiply => 85,
            KeyCode::NumpadSubtract => 86,
            KeyCode::NumpadAdd => 87,
            KeyCode::NumpadEnter => 88,
            KeyCode::Numpad1 => 89,
            KeyCode::Numpad2 => 90,
            KeyCode::Numpad3 => 91,
            KeyCode::Numpad4 => 92,
            KeyCode::Numpad5 => 93,
            KeyCode::Numpad6 => 94,
            KeyCode::Numpad7 => 95,
            KeyCode::Numpad8 => 96,
            KeyCode::Numpad9 => 97,
            KeyCode::Numpad0 => 98,
            KeyCode::NumpadDecimal => 99,
            KeyCode::ControlLeft => 224,
            KeyCode::ShiftLeft => 225,
            KeyCode::AltLeft => 226,
            KeyCode::SuperLeft => 227,
            KeyCode::ControlRight => 228,
            KeyCode::ShiftRight => 229,
            KeyCode::AltRight => 230,
            KeyCode::SuperRight => 231,
            _ => return None,
        };
        Some(Self(code))
    }
}

/// Canonical key names, spelled the way SDL spells them so existing
/// binding files stay readable
const NAMES: &[(u16, &str)] = &[
    (4, "A"),
    (5, "B"),
    (6, "C"),
    (7, "D"),
    (8, "E"),
    (9, "F"),
    (10, "G"),
    (11, "H"),
    (12, "I"),
    (13, "J"),
    (14, "K"),
    (15, "L"),
    (16, "M"),
    (17, "N"),
    (18, "O"),
    (19, "P"),
    (20, "Q"),
    (21, "R"),
    (22, "S"),
    (23, "T"),
    (24, "U"),
    (25, "V"),
    (26, "W"),
    (27, "X"),
    (28, "Y"),
    (29, "Z"),
    (30, "1"),
    (31, "2"),
    (32, "3"),
    (33, "4"),
    (34, "5"),
    (35, "6"),
    (36, "7"),
    (37, "8"),
    (38, "9"),
    (39, "0"),
    (40, "Return"),
    (41, "Escape"),
    (42, "Backspace"),
    (43, "Tab"),
    (44, "Space"),
    (45, "-"),
    (46, "="),
    (47, "["),
    (48, "]"),
    (49, "\\"),
    (51, ";"),
    (52, "'"),
    (53, "`"),
    (54, ","),
    (55, "."),
    (56, "/"),
    (57, "CapsLock"),
    (58, "F1"),
    (59, "F2"),
    (60, "F3"),
    (61, "F4"),
    (62, "F5"),
    (63, "F6"),
    (64, "F7"),
    (65, "F8"),
    (66, "F9"),
    (67, "F10"),
    (68, "F11"),
    (69, "F12"),
    (70, "PrintScreen"),
    (71, "ScrollLock"),
    (72, "Pause"),
    (73, "Insert"),
    (74, "Home"),
    (75, "PageUp"),
    (76, "Delete"),
    (77, "End"),
    (78, "PageDown"),
    (79, "Right"),
    (80, "Left"),
    (81, "Down"),
    (82, "Up"),
    (83, "Numlock"),
    (84, "Keypad /"),
    (85, "Keypad *"),
    (86, "Keypad -"),
    (87, "Keypad +"),
    (88, "Keypad Enter"),
    (89, "Keypad 1"),
    (90, "Keypad 2"),
    (91, "Keypad 3"),
    (92, "Keypad 4"),
    (93, "Keypad 5"),
    (94, "Keypad 6"),
    (95, "Keypad 7"),
    (96, "Keypad 8"),
    (97, "Keypad 9"),
    (98, "Keypad 0"),
    (99, "Keypad ."),
    (224, "Left Ctrl"),
    (225, "Left Shift"),
    (226, "Left Alt"),
    (227, "Left GUI"),
    (228, "Right Ctrl"),
    (229, "Right Shift"),
    (230, "Right Alt"),
    (231, "Right GUI"),
];
