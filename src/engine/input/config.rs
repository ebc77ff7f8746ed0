// Binding table: physical controls to logical inputs

use super::action::{self, InputSource, LogicalInput, MouseButton};
use super::scancode::Scancode;
use std::collections::BTreeMap;

/// Bindings loaded from storage, to be overlaid onto a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingPatch {
    pub keys: Vec<(Scancode, LogicalInput)>,
    pub mouse: Vec<(MouseButton, LogicalInput)>,
}

impl BindingPatch {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.mouse.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len() + self.mouse.len()
    }
}

/// Maps keyboard scancodes and mouse buttons to logical inputs
///
/// Each physical control is bound to at most one input; several controls
/// may share an input. Maps are ordered so dispatch and saved files are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTable {
    keys: BTreeMap<Scancode, LogicalInput>,
    mouse: BTreeMap<MouseButton, LogicalInput>,
}

impl BindingTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding the default bindings
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.reset_to_defaults();
        table
    }

    pub fn lookup_key(&self, key: Scancode) -> Option<LogicalInput> {
        self.keys.get(&key).copied()
    }

    pub fn lookup_mouse(&self, button: MouseButton) -> Option<LogicalInput> {
        self.mouse.get(&button).copied()
    }

    /// Get the input bound to any physical source
    pub fn lookup(&self, source: InputSource) -> Option<LogicalInput> {
        match source {
            InputSource::Keyboard(key) => self.lookup_key(key),
            InputSource::Mouse(button) => self.lookup_mouse(button),
        }
    }

    /// Bind a key, replacing whatever it was bound to
    pub fn bind_key(&mut self, key: Scancode, input: LogicalInput) {
        self.keys.insert(key, input);
    }

    /// Bind a mouse button, replacing whatever it was bound to
    pub fn bind_mouse(&mut self, button: MouseButton, input: LogicalInput) {
        self.mouse.insert(button, input);
    }

    pub fn unbind_key(&mut self, key: Scancode) -> Option<LogicalInput> {
        self.keys.remove(&key)
    }

    pub fn unbind_mouse(&mut self, button: MouseButton) -> Option<LogicalInput> {
        self.mouse.remove(&button)
    }

    /// Iterate key bindings in scancode order
    pub fn key_bindings(&self) -> impl Iterator<Item = (Scancode, LogicalInput)> + '_ {
        self.keys.iter().map(|(k, i)| (*k, *i))
    }

    /// Iterate mouse bindings in button order
    pub fn mouse_bindings(&self) -> impl Iterator<Item = (MouseButton, LogicalInput)> + '_ {
        self.mouse.iter().map(|(b, i)| (*b, *i))
    }

    /// All keys bound to an input
    pub fn keys_for(&self, input: LogicalInput) -> Vec<Scancode> {
        self.key_bindings()
            .filter(|(_, bound)| *bound == input)
            .map(|(key, _)| key)
            .collect()
    }

    /// Number of keys bound to an input
    pub fn key_binding_count(&self, input: LogicalInput) -> usize {
        self.keys.values().filter(|bound| **bound == input).count()
    }

    /// Whether an input is reachable from any physical control
    pub fn has_binding(&self, input: LogicalInput) -> bool {
        self.keys.values().any(|bound| *bound == input)
            || self.mouse.values().any(|bound| *bound == input)
    }

    /// Whether `key` may be taken over by a rebind
    ///
    /// A key is protected only when it is the last key bound to its input.
    pub fn can_rebind_key(&self, key: Scancode) -> bool {
        match self.lookup_key(key) {
            Some(current) => self.key_binding_count(current) != 1,
            None => true,
        }
    }

    /// Overlay loaded bindings onto this table
    pub fn apply(&mut self, patch: &BindingPatch) {
        for (key, input) in &patch.keys {
            self.bind_key(*key, *input);
        }
        for (button, input) in &patch.mouse {
            self.bind_mouse(*button, *input);
        }
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.keys.clear();
        self.mouse.clear();
    }

    /// Replace every binding with the default layout
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (key, input) in action::default_key_bindings() {
            self.bind_key(key, input);
        }
        for (button, input) in action::default_mouse_bindings() {
            self.bind_mouse(button, input);
        }
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}
