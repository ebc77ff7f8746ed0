//! Keyboard and mouse controller emulation with live rebinding.

pub mod engine;
