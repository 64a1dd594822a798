//! Control Rotation Module
//!
//! Provides the yaw/pitch control rotation owned by the player controller.
//! Both the character camera and the missile guidance read their look
//! direction from this rotation, and look input (mouse deltas or
//! rate-derived deltas, in degrees) is applied to it.
//!
//! Key features:
//! - Degree-denominated input, radian-denominated internal state
//! - Pitch clamped to ±89 degrees to prevent gimbal lock
//! - NO smoothing - instant response for precise aiming

use glam::Vec3;

/// Pitch limit constant: -89 degrees in radians
const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// The player's control rotation.
///
/// Whoever is currently possessed steers by feeding yaw/pitch deltas into
/// this rotation; the forward vector derived from it drives aiming (for
/// the character) and guidance (for a rotation-tracking missile).
///
/// ## Usage
/// ```rust,ignore
/// let mut rotation = ControlRotation::new();
///
/// // Apply this frame's look deltas (degrees)
/// rotation.add_yaw_degrees(1.5);
/// rotation.add_pitch_degrees(-0.4);
///
/// // Read the look direction
/// let forward = rotation.forward();
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRotation {
    /// Horizontal angle (radians) - unrestricted, wraps around
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to ±89 degrees
    pub pitch: f32,
}

impl Default for ControlRotation {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl ControlRotation {
    /// Create a new control rotation looking toward -Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a control rotation with explicit yaw/pitch (radians).
    /// Pitch is clamped to the ±89 degree limits.
    pub fn from_angles(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX),
        }
    }

    /// Apply a yaw delta in degrees. Positive = look right.
    pub fn add_yaw_degrees(&mut self, delta: f32) {
        self.yaw += delta.to_radians();
    }

    /// Apply a pitch delta in degrees. Positive = look up.
    /// Pitch is clamped to ±89 degrees to prevent gimbal lock.
    pub fn add_pitch_degrees(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta.to_radians()).clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX);
    }

    /// Get the look direction derived from yaw and pitch.
    ///
    /// # Coordinate System
    /// - +X = right
    /// - +Y = up
    /// - -Z = forward
    ///
    /// When yaw=0 and pitch=0, the rotation looks toward -Z.
    /// The vector is normalized.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Get the right direction vector, perpendicular to forward in the
    /// horizontal plane. The vector is normalized.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Get the forward direction projected onto the horizontal plane
    /// (yaw only). Used for camera-relative character movement.
    #[inline]
    pub fn planar_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Reset the rotation to default (looking toward -Z).
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}
