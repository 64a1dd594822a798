//! Character Module
//!
//! The player character: walks and jumps under player input while
//! possessed, persists (and keeps falling) while the missile has input
//! focus, and carries the one-slot active-missile reference that makes
//! "at most one missile per character" hold by construction.
//!
//! # Physics Model
//!
//! - Walk speed: 600 units/s
//! - Jump velocity: 600 units/s
//! - Gravity: 980 units/s^2
//! - Air control factor: 0.2

use glam::Vec3;

use crate::camera::ControlRotation;
use crate::physics::bodies::BodyHandle;
use crate::world::arena::Handle;

/// Handle to a missile entity in the world.
pub type MissileHandle = Handle;

/// Walk speed in units per second
pub const WALK_SPEED: f32 = 600.0;

/// Initial upward velocity when jumping, units per second
pub const JUMP_VELOCITY: f32 = 600.0;

/// Gravity acceleration in units per second squared
pub const GRAVITY: f32 = 980.0;

/// Fraction of movement control retained while airborne
pub const AIR_CONTROL: f32 = 0.2;

/// Base turn rate for rate-based look axes, in deg/sec
pub const BASE_TURN_RATE: f32 = 45.0;

/// Base look up/down rate for rate-based look axes, in deg/sec
pub const BASE_LOOK_UP_RATE: f32 = 45.0;

/// Distance from the eye to the missile spawn point, along the view
pub const MUZZLE_OFFSET: f32 = 100.0;

/// How quickly planar velocity converges on the wish velocity, per second
const GROUND_RESPONSIVENESS: f32 = 10.0;

/// Configuration for the player character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterConfig {
    /// Walk speed in units/s
    pub walk_speed: f32,
    /// Jump vertical velocity in units/s
    pub jump_velocity: f32,
    /// Gravity acceleration in units/s^2
    pub gravity: f32,
    /// Movement control fraction while airborne
    pub air_control: f32,
    /// Base turn rate for rate axes, deg/s
    pub base_turn_rate: f32,
    /// Base look up/down rate for rate axes, deg/s
    pub base_look_up_rate: f32,
    /// Eye height above the character origin (units)
    pub eye_height: f32,
    /// Muzzle distance in front of the eye (units)
    pub muzzle_offset: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            air_control: AIR_CONTROL,
            base_turn_rate: BASE_TURN_RATE,
            base_look_up_rate: BASE_LOOK_UP_RATE,
            eye_height: 64.0,
            muzzle_offset: MUZZLE_OFFSET,
        }
    }
}

/// The player character.
///
/// The character never owns the missile it fired - it holds a handle
/// whose liveness the world checks, and the detonation funnel clears the
/// slot when the missile is destroyed for any reason.
#[derive(Debug, Clone)]
pub struct Character {
    /// Position of the character origin (feet), world space
    pub position: Vec3,
    /// Current velocity (units/s)
    pub velocity: Vec3,
    /// Whether the character is standing on the ground
    pub grounded: bool,
    pub config: CharacterConfig,
    /// The currently flying missile, if any (back-reference, not ownership)
    pub active_missile: Option<MissileHandle>,
    /// Control rotation captured at fire time, restored on detonation
    pub saved_rotation: Option<ControlRotation>,
    /// This character's body in the physics body set
    pub body: BodyHandle,
}

impl Character {
    /// Create a character standing at `position`.
    pub fn new(position: Vec3, config: CharacterConfig, body: BodyHandle) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            grounded: true,
            config,
            active_missile: None,
            saved_rotation: None,
            body,
        }
    }

    /// A character can only have one missile in flight at a time.
    #[inline]
    pub fn can_fire(&self) -> bool {
        self.active_missile.is_none()
    }

    /// Eye position the view originates from.
    #[inline]
    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::Y * self.config.eye_height
    }

    /// Missile spawn point: slightly in front of the eye along the view.
    pub fn muzzle_position(&self, rotation: &ControlRotation) -> Vec3 {
        self.eye_position() + rotation.forward() * self.config.muzzle_offset
    }

    /// Advance the character one frame.
    ///
    /// `forward_axis`/`right_axis` are the movement axes in [-1, 1]
    /// (zero while the character is not possessed), `jump` is this
    /// frame's edge-triggered jump, and `control_yaw` orients the
    /// planar movement. Gravity applies every frame regardless of
    /// possession.
    pub fn tick(
        &mut self,
        dt: f32,
        forward_axis: f32,
        right_axis: f32,
        jump: bool,
        rotation: &ControlRotation,
    ) {
        // Camera-relative wish velocity in the horizontal plane
        let forward = rotation.planar_forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let wish_dir = forward * forward_axis + right * right_axis;
        let wish = wish_dir.normalize_or_zero()
            * self.config.walk_speed
            * wish_dir.length().min(1.0);

        // Reduced authority over planar velocity while airborne
        let control = if self.grounded {
            1.0
        } else {
            self.config.air_control
        };
        let blend = (GROUND_RESPONSIVENESS * control * dt).min(1.0);
        let planar = Vec3::new(self.velocity.x, 0.0, self.velocity.z);
        let planar = planar + (wish - planar) * blend;
        self.velocity.x = planar.x;
        self.velocity.z = planar.z;

        if jump && self.grounded {
            self.velocity.y = self.config.jump_velocity;
            self.grounded = false;
        }

        if !self.grounded {
            self.velocity.y -= self.config.gravity * dt;
        }

        self.position += self.velocity * dt;

        // Ground plane at y = 0
        if self.position.y <= 0.0 {
            self.position.y = 0.0;
            self.velocity.y = 0.0;
            self.grounded = true;
        }
    }
}
