//! Game Session Module
//!
//! Owns the world plus the raw-input side of a play session: keyboard
//! state, key bindings, accumulated mouse deltas, and the per-frame
//! latches for edge-triggered actions. Each `step` collapses all of that
//! into one [`InputFrame`] and advances the world.

use crate::input::{InputAction, InputFrame, KeyBindings, KeyCode, KeyboardState};
use crate::world::{EffectSink, World, WorldConfig};

/// Mouse sensitivity: degrees of look per pixel of mouse travel
const DEGREES_PER_PIXEL: f32 = 0.08;

/// A running play session: world, bindings, and raw input assembly.
pub struct GameSession {
    world: World,
    keyboard: KeyboardState,
    bindings: KeyBindings,
    /// Mouse yaw degrees accumulated since the last step
    pending_turn: f32,
    /// Mouse pitch degrees accumulated since the last step
    pending_look_up: f32,
    /// Edge actions latched since the last step
    pending_jump: bool,
    pending_fire: bool,
    pending_explode: bool,
    pending_boost: bool,
}

impl GameSession {
    /// Start a session with default key bindings.
    pub fn new(config: WorldConfig) -> Self {
        Self::from_world(World::new(config))
    }

    /// Start a session over a world with a custom effect sink.
    pub fn with_effects(config: WorldConfig, effects: Box<dyn EffectSink>) -> Self {
        Self::from_world(World::with_effects(config, effects))
    }

    fn from_world(world: World) -> Self {
        Self {
            world,
            keyboard: KeyboardState::new(),
            bindings: KeyBindings::new(),
            pending_turn: 0.0,
            pending_look_up: 0.0,
            pending_jump: false,
            pending_fire: false,
            pending_explode: false,
            pending_boost: false,
        }
    }

    /// The simulation world.
    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The simulation world, mutably.
    #[inline]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The key bindings, for remapping.
    #[inline]
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Feed a platform key event into the session.
    ///
    /// Fresh presses of edge actions are latched until the next `step`,
    /// so a press-and-release between frames is not lost.
    pub fn key_event(&mut self, key: KeyCode, pressed: bool) {
        let fresh = self.keyboard.handle_key(key, pressed);
        if !fresh {
            return;
        }
        match self.bindings.get_action(key) {
            Some(InputAction::Jump) => self.pending_jump = true,
            Some(InputAction::Fire) => self.pending_fire = true,
            Some(InputAction::Explode) => self.pending_explode = true,
            Some(InputAction::Boost) => self.pending_boost = true,
            _ => {}
        }
    }

    /// Feed a mouse movement into the session.
    ///
    /// `dx` is rightward pixels, `dy` is downward pixels (the usual
    /// window convention), so `dy` is negated into look-up degrees.
    pub fn mouse_delta(&mut self, dx: f32, dy: f32) {
        self.pending_turn += dx * DEGREES_PER_PIXEL;
        self.pending_look_up -= dy * DEGREES_PER_PIXEL;
    }

    /// Drop all held keys and pending input (e.g. on focus loss).
    pub fn clear_input(&mut self) {
        self.keyboard.reset();
        self.pending_turn = 0.0;
        self.pending_look_up = 0.0;
        self.pending_jump = false;
        self.pending_fire = false;
        self.pending_explode = false;
        self.pending_boost = false;
    }

    /// Assemble this frame's input and advance the world by `dt` seconds.
    ///
    /// Returns the frame that was applied, mostly for logging and tests.
    pub fn step(&mut self, dt: f32) -> InputFrame {
        let pressed = self.keyboard.pressed_keys();
        let axis = |positive: InputAction, negative: InputAction| -> f32 {
            let mut value = 0.0;
            if self.bindings.is_action_pressed(positive, pressed) {
                value += 1.0;
            }
            if self.bindings.is_action_pressed(negative, pressed) {
                value -= 1.0;
            }
            value
        };

        let frame = InputFrame {
            move_forward: axis(InputAction::MoveForward, InputAction::MoveBack),
            move_right: axis(InputAction::MoveRight, InputAction::MoveLeft),
            turn: self.pending_turn,
            look_up: self.pending_look_up,
            turn_rate: 0.0,
            look_up_rate: 0.0,
            jump: self.pending_jump,
            fire: self.pending_fire,
            explode: self.pending_explode,
            boost: self.pending_boost,
        };

        self.pending_turn = 0.0;
        self.pending_look_up = 0.0;
        self.pending_jump = false;
        self.pending_fire = false;
        self.pending_explode = false;
        self.pending_boost = false;

        self.world.tick(dt, &frame);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_held_keys_drive_movement_axes() {
        let mut session = GameSession::new(WorldConfig::default());
        session.key_event(KeyCode::W, true);
        session.key_event(KeyCode::D, true);

        let frame = session.step(DT);
        assert_eq!(frame.move_forward, 1.0);
        assert_eq!(frame.move_right, 1.0);

        session.key_event(KeyCode::W, false);
        let frame = session.step(DT);
        assert_eq!(frame.move_forward, 0.0);
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let mut session = GameSession::new(WorldConfig::default());
        session.key_event(KeyCode::A, true);
        session.key_event(KeyCode::D, true);

        let frame = session.step(DT);
        assert_eq!(frame.move_right, 0.0);
    }

    #[test]
    fn test_fire_is_latched_once() {
        let mut session = GameSession::new(WorldConfig::default());
        session.key_event(KeyCode::F, true);
        session.key_event(KeyCode::F, false);

        // Press and release between frames still fires once
        let frame = session.step(DT);
        assert!(frame.fire);
        assert!(session.world().controller.controls_missile());

        // Held or repeated without release: no second latch
        let frame = session.step(DT);
        assert!(!frame.fire);
    }

    #[test]
    fn test_mouse_deltas_accumulate_and_clear() {
        let mut session = GameSession::new(WorldConfig::default());
        session.mouse_delta(10.0, 0.0);
        session.mouse_delta(5.0, -20.0);

        let frame = session.step(DT);
        assert!((frame.turn - 15.0 * 0.08).abs() < 1e-5);
        assert!((frame.look_up - 20.0 * 0.08).abs() < 1e-5);

        let frame = session.step(DT);
        assert_eq!(frame.turn, 0.0);
        assert_eq!(frame.look_up, 0.0);
    }

    #[test]
    fn test_clear_input_drops_everything() {
        let mut session = GameSession::new(WorldConfig::default());
        session.key_event(KeyCode::W, true);
        session.key_event(KeyCode::F, true);
        session.mouse_delta(100.0, 100.0);

        session.clear_input();
        let frame = session.step(DT);
        assert_eq!(frame, InputFrame::idle());
    }

    #[test]
    fn test_fire_then_explode_round_trip() {
        let mut session = GameSession::new(WorldConfig::default());
        session.key_event(KeyCode::F, true);
        session.step(DT);
        assert!(session.world().controller.controls_missile());

        session.key_event(KeyCode::E, true);
        session.step(DT);
        assert!(!session.world().controller.controls_missile());
        assert!(session.world().missiles.is_empty());
    }
}
