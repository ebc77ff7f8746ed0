// Game-side collaborator queried and driven by the dispatcher

/// Window and game state the keyboard controller needs to see
pub trait HostConfig {
    /// Current fullscreen flag
    fn fullscreen(&self) -> bool;

    /// Store the fullscreen flag and apply it to the window
    fn set_fullscreen(&mut self, value: bool);

    /// Whether recorded input is being played back
    fn is_playback_active(&self) -> bool {
        false
    }

    /// Whether the camera is in a first-person view
    fn is_first_person(&self) -> bool {
        false
    }
}

/// Plain host state with no window attached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostState {
    pub fullscreen: bool,
    pub playback: bool,
    pub first_person: bool,
}

impl HostConfig for HostState {
    fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_fullscreen(&mut self, value: bool) {
        self.fullscreen = value;
    }

    fn is_playback_active(&self) -> bool {
        self.playback
    }

    fn is_first_person(&self) -> bool {
        self.first_person
    }
}
