//! Input Module
//!
//! Provides platform-agnostic input handling for the sandbox.
//! This module is decoupled from any specific windowing system
//! to allow for flexible integration.
//!
//! The simulation core never looks at keys directly: each frame the glue
//! layer assembles an [`InputFrame`] snapshot from key state, bindings,
//! and mouse deltas, and hands it to `World::tick`. Whoever is currently
//! possessed (character or missile) is the only consumer of that frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use tv_missile_engine::input::{InputFrame, KeyBindings, KeyboardState, KeyCode};
//!
//! let mut keyboard = KeyboardState::new();
//! let bindings = KeyBindings::new();
//!
//! keyboard.handle_key(KeyCode::W, true);
//!
//! let frame = InputFrame {
//!     move_forward: 1.0,
//!     ..InputFrame::default()
//! };
//! ```

pub mod bindings;
pub mod keyboard;

// Re-export commonly used types at module level
pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{KeyCode, KeyboardState};

/// One frame's worth of player input, already resolved to logical axes
/// and actions.
///
/// Axes are normalized to [-1, 1]. The look axes come in two flavors,
/// matching the two kinds of devices:
/// - `turn` / `look_up` carry an absolute delta in degrees (mouse);
/// - `turn_rate` / `look_up_rate` carry a normalized rate (joystick),
///   where 1.0 means 100% of the configured turn rate for one second.
///
/// Action fields are edge-triggered: `true` only on the frame the key
/// was freshly pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Forward/backward movement axis, [-1, 1]
    pub move_forward: f32,
    /// Right/left strafe axis, [-1, 1]
    pub move_right: f32,

    /// Absolute yaw delta in degrees (mouse), positive = look right
    pub turn: f32,
    /// Absolute pitch delta in degrees (mouse), positive = look up
    pub look_up: f32,
    /// Normalized yaw rate (joystick), [-1, 1]
    pub turn_rate: f32,
    /// Normalized pitch rate (joystick), [-1, 1]
    pub look_up_rate: f32,

    /// Jump was pressed this frame (character only)
    pub jump: bool,
    /// Fire was pressed this frame (character only)
    pub fire: bool,
    /// Explode was pressed this frame (missile only)
    pub explode: bool,
    /// Boost was pressed this frame (missile only)
    pub boost: bool,
}

impl InputFrame {
    /// A frame with no input at all.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A frame that only presses Fire.
    pub fn fire() -> Self {
        Self {
            fire: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_frame_is_all_zero() {
        let frame = InputFrame::idle();
        assert_eq!(frame, InputFrame::default());
        assert!(!frame.fire && !frame.jump && !frame.explode && !frame.boost);
        assert_eq!(frame.move_forward, 0.0);
        assert_eq!(frame.turn, 0.0);
    }

    #[test]
    fn test_fire_frame() {
        let frame = InputFrame::fire();
        assert!(frame.fire);
        assert!(!frame.explode);
        assert_eq!(frame.move_forward, 0.0);
    }
}
