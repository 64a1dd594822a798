//! Flight Controller Module
//!
//! Owns a missile's velocity vector across its lifetime: initialized at
//! launch, re-derived every frame by one of two guidance modes, and
//! rescaled by boost. No gravity, no drag - a guided missile flies
//! where it is pointed.
//!
//! # Guidance Modes
//!
//! - **Rotation tracking**: velocity is fully re-derived each frame from
//!   the possessing controller's look direction at max speed
//! - **Free steer**: yaw/pitch deltas rotate the existing velocity
//!   vector incrementally, preserving its magnitude
//!
//! A missile uses exactly one mode for its whole flight; the mode is
//! part of the flight configuration.

use glam::{Quat, Vec3};

use super::steering::{BoostConfig, BoostPolicy, SteeringConfig};

/// How the missile's velocity direction is updated each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidanceMode {
    /// Velocity = controller look direction * max speed, every frame
    RotationTracking,
    /// Steering input rotates the current velocity, magnitude preserved
    FreeSteer,
}

/// Configuration for a missile's flight controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightConfig {
    /// Speed at launch (units/s)
    pub initial_speed: f32,
    /// Speed ceiling; rotation tracking always flies at this speed
    pub max_speed: f32,
    /// Guidance mode for the whole flight
    pub guidance: GuidanceMode,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            initial_speed: 1500.0,
            max_speed: 1500.0,
            guidance: GuidanceMode::RotationTracking,
        }
    }
}

/// Owns and updates one missile's velocity.
#[derive(Debug, Clone, Copy)]
pub struct FlightController {
    /// Current velocity (units/s)
    velocity: Vec3,
    /// Current speed ceiling; grows with boost
    max_speed: f32,
    guidance: GuidanceMode,
    /// Whether a single-use boost has been consumed
    boosted: bool,
}

impl FlightController {
    /// Create a flight controller at rest, launched along `direction`.
    ///
    /// The direction is normalized defensively; a zero direction leaves
    /// the missile at rest.
    pub fn launch(config: &FlightConfig, direction: Vec3) -> Self {
        Self {
            velocity: direction.normalize_or_zero() * config.initial_speed,
            max_speed: config.max_speed,
            guidance: config.guidance,
            boosted: false,
        }
    }

    /// Current velocity.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Current speed ceiling.
    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Whether a boost has been applied.
    #[inline]
    pub fn is_boosted(&self) -> bool {
        self.boosted
    }

    /// Guidance mode in effect for this flight.
    #[inline]
    pub fn guidance(&self) -> GuidanceMode {
        self.guidance
    }

    /// Re-derive velocity for one frame.
    ///
    /// `look_direction` is the possessing controller's current look
    /// direction (already steered this frame); `yaw_delta`/`pitch_delta`
    /// are this frame's applied steering deltas in degrees. Rotation
    /// tracking uses the former, free steer the latter.
    pub fn tick(&mut self, look_direction: Vec3, yaw_delta_deg: f32, pitch_delta_deg: f32) {
        match self.guidance {
            GuidanceMode::RotationTracking => {
                self.velocity = look_direction.normalize_or_zero() * self.max_speed;
            }
            GuidanceMode::FreeSteer => {
                self.steer_velocity(yaw_delta_deg, pitch_delta_deg);
            }
        }
    }

    /// Rotate the velocity vector by this frame's steering deltas,
    /// preserving its magnitude.
    ///
    /// Positive yaw turns right (rotation about the world up axis);
    /// positive pitch tilts up (rotation about the local right axis).
    fn steer_velocity(&mut self, yaw_delta_deg: f32, pitch_delta_deg: f32) {
        if self.velocity == Vec3::ZERO {
            return;
        }

        let yaw = Quat::from_axis_angle(Vec3::Y, -yaw_delta_deg.to_radians());
        let mut velocity = yaw * self.velocity;

        let right = velocity.cross(Vec3::Y);
        if right != Vec3::ZERO {
            let pitch = Quat::from_axis_angle(right.normalize(), pitch_delta_deg.to_radians());
            velocity = pitch * velocity;
        }

        self.velocity = velocity;
    }

    /// Apply a boost: velocity and max speed scale up, handling scales
    /// down. Under the single-use policy only the first call has an
    /// effect; the repeatable policy stacks.
    ///
    /// Returns `true` if the boost was applied.
    pub fn boost(&mut self, config: &BoostConfig, steering: &mut SteeringConfig) -> bool {
        if config.policy == BoostPolicy::SingleUse && self.boosted {
            return false;
        }
        self.boosted = true;

        // Limit handling even more
        steering.apply_boost_handling(config.handling_multiplier);

        // Increase velocity and max speed by the boost factor
        self.velocity *= config.speed_multiplier;
        self.max_speed *= config.speed_multiplier;
        true
    }
}
