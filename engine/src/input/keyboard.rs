//! Keyboard Input Module
//!
//! Contains keyboard state tracking for the sandbox controls.
//! Decoupled from any windowing system - callers translate their
//! platform key events into the generic [`KeyCode`] values here.

use std::collections::HashSet;

/// Generic key codes, independent of windowing system.
///
/// Only the keys the sandbox actually binds are listed, plus a catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,

    // Action keys
    F,
    E,
    B,
    R,

    // Arrow keys (alternate movement)
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Escape,
    Enter,
    Tab,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which keys are currently held down.
///
/// Held state drives the continuous axes (movement); edge detection for
/// one-shot actions (fire, explode, boost) is reported by [`handle_key`]
/// so callers can latch presses per frame.
///
/// [`handle_key`]: KeyboardState::handle_key
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update key state from a press/release event.
    ///
    /// Returns `true` if this event was a fresh press (the key was not
    /// already held), which is what edge-triggered actions care about.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if pressed {
            self.pressed.insert(key)
        } else {
            self.pressed.remove(&key);
            false
        }
    }

    /// Check whether a key is currently held down.
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// The set of currently held keys (for binding lookups).
    pub fn pressed_keys(&self) -> &HashSet<KeyCode> {
        &self.pressed
    }

    /// Release all keys (e.g. on focus loss).
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}
