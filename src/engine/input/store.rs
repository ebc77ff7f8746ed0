// Binding persistence
//
// Bindings live in two flat JSON objects per player, one for the keyboard
// and one for the mouse. Keys are control names, values are input names:
//
// ```json
// { "W": "STICK_X_UP", "Space": "A_BUTTON" }
// ```
//
// Loading is fail-soft: a missing file is empty, and entries with unknown
// names or non-string values are skipped.

use super::action::{LogicalInput, MouseButton};
use super::config::{BindingPatch, BindingTable};
use super::scancode::Scancode;
use super::settings::ControllerSettings;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Binding persistence errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed binding file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Binding file is not a JSON object: {0}")]
    NotAnObject(PathBuf),
}

/// Reads and writes the binding files of one player slot
#[derive(Debug, Clone)]
pub struct BindingStore {
    keyboard_path: PathBuf,
    mouse_path: PathBuf,
    enabled: bool,
}

impl BindingStore {
    /// Store for `slot` inside `dir`
    pub fn new(dir: impl AsRef<Path>, slot: usize) -> Self {
        let dir = dir.as_ref();
        Self {
            keyboard_path: dir.join(format!("keyboard{}.bindings.json", slot + 1)),
            mouse_path: dir.join(format!("mouse{}.bindings.json", slot + 1)),
            enabled: true,
        }
    }

    pub fn from_settings(settings: &ControllerSettings) -> Self {
        if settings.persist_bindings {
            Self::new(&settings.bindings_dir, settings.slot)
        } else {
            Self::disabled()
        }
    }

    /// A store that never reads or writes
    pub fn disabled() -> Self {
        Self {
            keyboard_path: PathBuf::new(),
            mouse_path: PathBuf::new(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn keyboard_path(&self) -> &Path {
        &self.keyboard_path
    }

    pub fn mouse_path(&self) -> &Path {
        &self.mouse_path
    }

    /// Load keyboard bindings
    pub fn load_keys(&self) -> Result<Vec<(Scancode, LogicalInput)>, StoreError> {
        if !self.enabled {
            return Ok(Vec::new());
        }
        let entries = read_entries(&self.keyboard_path)?;
        Ok(parse_entries(entries, Scancode::from_name))
    }

    /// Load mouse bindings
    pub fn load_mouse(&self) -> Result<Vec<(MouseButton, LogicalInput)>, StoreError> {
        if !self.enabled {
            return Ok(Vec::new());
        }
        let entries = read_entries(&self.mouse_path)?;
        Ok(parse_entries(entries, MouseButton::from_name))
    }

    /// Load both files, skipping any file that cannot be read
    pub fn load(&self) -> BindingPatch {
        let keys = self.load_keys().unwrap_or_else(|e| {
            log::warn!("Ignoring {}: {}", self.keyboard_path.display(), e);
            Vec::new()
        });
        let mouse = self.load_mouse().unwrap_or_else(|e| {
            log::warn!("Ignoring {}: {}", self.mouse_path.display(), e);
            Vec::new()
        });
        BindingPatch { keys, mouse }
    }

    /// Write both binding files
    pub fn save(&self, table: &BindingTable) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }

        let keys = table
            .key_bindings()
            .filter_map(|(key, input)| key.name().map(|name| (name, input)));
        write_entries(&self.keyboard_path, keys)?;

        let mouse = table
            .mouse_bindings()
            .map(|(button, input)| (button.name(), input));
        write_entries(&self.mouse_path, mouse)
    }

    /// Save, logging instead of returning failures
    ///
    /// Rebinding must keep working when the disk does not.
    pub fn save_quietly(&self, table: &BindingTable) {
        if let Err(e) = self.save(table) {
            log::warn!("Could not save bindings: {}", e);
        }
    }
}

fn read_entries(path: &Path) -> Result<Map<String, Value>, StoreError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_str::<Value>(&contents)? {
        Value::Object(entries) => Ok(entries),
        _ => Err(StoreError::NotAnObject(path.to_path_buf())),
    }
}

fn parse_entries<T>(
    entries: Map<String, Value>,
    control: impl Fn(&str) -> Option<T>,
) -> Vec<(T, LogicalInput)> {
    let mut bindings = Vec::with_capacity(entries.len());

    for (name, value) in entries {
        let parsed = value
            .as_str()
            .and_then(LogicalInput::from_name)
            .and_then(|input| control(name.as_str()).map(|c| (c, input)));

        match parsed {
            Some(binding) => bindings.push(binding),
            None => log::debug!("Could not bind {:?} -> {}", name, value),
        }
    }

    bindings
}

fn write_entries<'a>(
    path: &Path,
    bindings: impl Iterator<Item = (&'a str, LogicalInput)>,
) -> Result<(), StoreError> {
    let entries: Map<String, Value> = bindings
        .map(|(name, input)| (name.to_string(), Value::String(input.name().to_string())))
        .collect();

    let contents = serde_json::to_string_pretty(&Value::Object(entries))?;
    std::fs::write(path, contents)?;
    Ok(())
}
