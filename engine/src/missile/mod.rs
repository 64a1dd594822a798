//! Missile Module
//!
//! The steerable missile: steering model, flight controller, and the
//! entity tying them to a position, a lifespan, the in-flight camera
//! feedback, and a back-reference to the character that fired it.
//!
//! # Submodules
//!
//! - [`steering`] - Turn-rate math, handling multipliers, boost config
//! - [`flight`] - Velocity ownership and the two guidance modes

pub mod flight;
pub mod steering;

// Re-export commonly used types at the missile module level
pub use flight::{FlightConfig, FlightController, GuidanceMode};
pub use steering::{BoostConfig, BoostPolicy, SteeringConfig, turn_at_rate};

use glam::Vec3;

use crate::camera::{CameraFeedback, FeedbackConfig};
use crate::physics::bodies::BodyHandle;
use crate::world::arena::Handle;

/// Handle to a character entity in the world.
pub type CharacterHandle = Handle;

/// Full configuration for spawning one missile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissileConfig {
    pub flight: FlightConfig,
    pub steering: SteeringConfig,
    pub boost: BoostConfig,
    pub feedback: FeedbackConfig,
    /// Seconds until the missile self-destructs
    pub lifespan: f32,
    /// Collision sphere radius (units)
    pub collision_radius: f32,
}

impl Default for MissileConfig {
    fn default() -> Self {
        Self {
            flight: FlightConfig::default(),
            steering: SteeringConfig::default(),
            boost: BoostConfig::default(),
            feedback: FeedbackConfig::default(),
            lifespan: 7.0,
            collision_radius: 15.0,
        }
    }
}

/// A live guided missile.
///
/// Owned by the world's missile arena for its lifetime; the owning
/// character only keeps a handle. Every destruction path funnels through
/// `World::detonate`, which removes the missile from the arena so a
/// second detonation finds nothing to do.
#[derive(Debug, Clone)]
pub struct Missile {
    /// Current position in world space (units)
    pub position: Vec3,
    /// Velocity ownership and guidance
    pub flight: FlightController,
    /// Handling state; multipliers shrink when boosted
    pub steering: SteeringConfig,
    /// Boost tuning and policy
    pub boost: BoostConfig,
    /// In-flight post-process interpolation
    pub feedback: CameraFeedback,
    /// Seconds left before self-destruct
    pub lifespan_remaining: f32,
    /// Collision sphere radius (units)
    pub collision_radius: f32,
    /// The character that fired this missile (back-reference, not ownership)
    pub owner: CharacterHandle,
    /// The owner's physics body, ignored in hit tests so the missile
    /// cannot collide with its shooter at launch
    pub owner_body: BodyHandle,
}

impl Missile {
    /// Spawn a missile at `position` launched along `direction`.
    ///
    /// Sets velocity to `direction * initial_speed` and arms the camera
    /// feedback window.
    pub fn launch(
        config: &MissileConfig,
        position: Vec3,
        direction: Vec3,
        owner: CharacterHandle,
        owner_body: BodyHandle,
    ) -> Self {
        let mut feedback = CameraFeedback::new(config.feedback);
        feedback.activate();

        Self {
            position,
            flight: FlightController::launch(&config.flight, direction),
            steering: config.steering,
            boost: config.boost,
            feedback,
            lifespan_remaining: config.lifespan,
            collision_radius: config.collision_radius,
            owner,
            owner_body,
        }
    }

    /// Trigger a boost. Returns `true` if it had an effect.
    pub fn apply_boost(&mut self) -> bool {
        let boost = self.boost;
        self.flight.boost(&boost, &mut self.steering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::arena::Arena;

    fn handles() -> (CharacterHandle, BodyHandle) {
        let mut arena = Arena::new();
        let a = arena.insert(());
        let b = arena.insert(());
        (a, b)
    }

    #[test]
    fn test_launch_arms_feedback_and_lifespan() {
        let (owner, owner_body) = handles();
        let config = MissileConfig::default();
        let missile = Missile::launch(
            &config,
            Vec3::new(0.0, 100.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            owner,
            owner_body,
        );

        assert!(missile.feedback.is_interpolating());
        assert_eq!(missile.lifespan_remaining, 7.0);
        assert!((missile.flight.velocity().length() - 1500.0).abs() < 0.01);
    }

    #[test]
    fn test_apply_boost_respects_policy() {
        let (owner, owner_body) = handles();
        let config = MissileConfig::default();
        let mut missile = Missile::launch(
            &config,
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            owner,
            owner_body,
        );

        assert!(missile.apply_boost());
        assert!(!missile.apply_boost());
        assert!((missile.flight.max_speed() - 3000.0).abs() < 0.001);
    }
}
