// Controller settings

use std::path::PathBuf;

/// Multiplier applied to raw mouse motion
pub const DEFAULT_MOUSE_SENSITIVITY: i32 = 4;

/// Stick scale while the walk modifier is held
pub const DEFAULT_WALK_SCALE: f32 = 0.25;

/// Tunables for one keyboard controller
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    /// Directory holding the binding files
    pub bindings_dir: PathBuf,

    /// Player slot, also selects the binding file names
    pub slot: usize,

    /// Mouse motion multiplier
    pub mouse_sensitivity: i32,

    /// Stick scale applied by the walk modifier
    pub walk_scale: f32,

    /// Whether mouse buttons and motion are processed
    pub mouse_enabled: bool,

    /// Whether bindings are loaded from and saved to disk
    pub persist_bindings: bool,
}

impl ControllerSettings {
    /// Settings for a player slot with bindings stored in `dir`
    pub fn new(bindings_dir: impl Into<PathBuf>, slot: usize) -> Self {
        Self {
            bindings_dir: bindings_dir.into(),
            slot,
            ..Self::default()
        }
    }

    /// Settings that never touch the filesystem
    pub fn in_memory() -> Self {
        Self {
            persist_bindings: false,
            ..Self::default()
        }
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            bindings_dir: PathBuf::from("."),
            slot: 0,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            walk_scale: DEFAULT_WALK_SCALE,
            mouse_enabled: true,
            persist_bindings: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ControllerSettings::default();
        assert_eq!(settings.mouse_sensitivity, 4);
        assert_eq!(settings.walk_scale, 0.25);
        assert!(settings.mouse_enabled);
        assert!(settings.persist_bindings);
    }

    #[test]
    fn test_new_and_in_memory() {
        let settings = ControllerSettings::new("/tmp/bindings", 1);
        assert_eq!(settings.bindings_dir, PathBuf::from("/tmp/bindings"));
        assert_eq!(settings.slot, 1);

        assert!(!ControllerSettings::in_memory().persist_bindings);
    }
}
