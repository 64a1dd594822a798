//! Tuning Module
//!
//! Designer-facing tuning values, loadable from a JSON file. Every field
//! defaults to the engine's built-in value, so a tuning file only has to
//! name what it changes. The structures mirror the engine configuration
//! but stay separate from it: the engine does not know about serde or
//! file formats, and the tuning layer does not know about simulation.

use serde::{Deserialize, Serialize};

use crate::camera::FeedbackConfig;
use crate::missile::{
    BoostConfig, BoostPolicy, FlightConfig, GuidanceMode, MissileConfig, SteeringConfig,
};
use crate::physics::DetonationConfig;
use crate::player::CharacterConfig;
use crate::world::WorldConfig;

/// Guidance mode as written in tuning files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceTuning {
    #[default]
    RotationTracking,
    FreeSteer,
}

impl From<GuidanceTuning> for GuidanceMode {
    fn from(value: GuidanceTuning) -> Self {
        match value {
            GuidanceTuning::RotationTracking => GuidanceMode::RotationTracking,
            GuidanceTuning::FreeSteer => GuidanceMode::FreeSteer,
        }
    }
}

/// Boost policy as written in tuning files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BoostPolicyTuning {
    #[default]
    SingleUse,
    Repeatable,
}

impl From<BoostPolicyTuning> for BoostPolicy {
    fn from(value: BoostPolicyTuning) -> Self {
        match value {
            BoostPolicyTuning::SingleUse => BoostPolicy::SingleUse,
            BoostPolicyTuning::Repeatable => BoostPolicy::Repeatable,
        }
    }
}

/// Missile tuning block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MissileTuning {
    pub initial_speed: f32,
    pub max_speed: f32,
    pub guidance: GuidanceTuning,
    pub handling_multiplier: f32,
    pub boost_speed_multiplier: f32,
    pub boost_handling_multiplier: f32,
    pub boost_policy: BoostPolicyTuning,
    pub lifespan: f32,
    pub collision_radius: f32,
}

impl Default for MissileTuning {
    fn default() -> Self {
        let missile = MissileConfig::default();
        Self {
            initial_speed: missile.flight.initial_speed,
            max_speed: missile.flight.max_speed,
            guidance: GuidanceTuning::default(),
            handling_multiplier: missile.steering.turn_rate_multiplier,
            boost_speed_multiplier: missile.boost.speed_multiplier,
            boost_handling_multiplier: missile.boost.handling_multiplier,
            boost_policy: BoostPolicyTuning::default(),
            lifespan: missile.lifespan,
            collision_radius: missile.collision_radius,
        }
    }
}

/// Character tuning block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterTuning {
    pub walk_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub air_control: f32,
    pub base_turn_rate: f32,
    pub base_look_up_rate: f32,
    pub eye_height: f32,
    pub muzzle_offset: f32,
}

impl Default for CharacterTuning {
    fn default() -> Self {
        let character = CharacterConfig::default();
        Self {
            walk_speed: character.walk_speed,
            jump_velocity: character.jump_velocity,
            gravity: character.gravity,
            air_control: character.air_control,
            base_turn_rate: character.base_turn_rate,
            base_look_up_rate: character.base_look_up_rate,
            eye_height: character.eye_height,
            muzzle_offset: character.muzzle_offset,
        }
    }
}

/// Detonation tuning block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DetonationTuning {
    pub radius: f32,
    pub magnitude: f32,
}

impl Default for DetonationTuning {
    fn default() -> Self {
        let detonation = DetonationConfig::default();
        Self {
            radius: detonation.radius,
            magnitude: detonation.magnitude,
        }
    }
}

/// Top-level tuning file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Tuning {
    pub missile: MissileTuning,
    pub character: CharacterTuning,
    pub detonation: DetonationTuning,
    pub max_missiles: Option<usize>,
}

impl Tuning {
    /// Parse a tuning file from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Lower the tuning values into engine configuration.
    pub fn to_world_config(&self) -> WorldConfig {
        let defaults = WorldConfig::default();
        WorldConfig {
            missile: MissileConfig {
                flight: FlightConfig {
                    initial_speed: self.missile.initial_speed,
                    max_speed: self.missile.max_speed,
                    guidance: self.missile.guidance.into(),
                },
                steering: SteeringConfig {
                    turn_rate_multiplier: self.missile.handling_multiplier,
                    look_up_rate_multiplier: self.missile.handling_multiplier,
                    ..SteeringConfig::default()
                },
                boost: BoostConfig {
                    speed_multiplier: self.missile.boost_speed_multiplier,
                    handling_multiplier: self.missile.boost_handling_multiplier,
                    policy: self.missile.boost_policy.into(),
                },
                feedback: FeedbackConfig::default(),
                lifespan: self.missile.lifespan,
                collision_radius: self.missile.collision_radius,
            },
            character: CharacterConfig {
                walk_speed: self.character.walk_speed,
                jump_velocity: self.character.jump_velocity,
                gravity: self.character.gravity,
                air_control: self.character.air_control,
                base_turn_rate: self.character.base_turn_rate,
                base_look_up_rate: self.character.base_look_up_rate,
                eye_height: self.character.eye_height,
                muzzle_offset: self.character.muzzle_offset,
            },
            detonation: DetonationConfig {
                radius: self.detonation.radius,
                magnitude: self.detonation.magnitude,
            },
            max_missiles: self.max_missiles.unwrap_or(defaults.max_missiles),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let tuning = Tuning::from_json_str("{}").unwrap();
        let config = tuning.to_world_config();

        assert_eq!(config.missile.flight.initial_speed, 1500.0);
        assert_eq!(config.missile.lifespan, 7.0);
        assert_eq!(config.detonation.radius, 300.0);
        assert_eq!(config.character.walk_speed, 600.0);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let text = r#"{ "missile": { "lifespan": 3.5, "guidance": "free_steer" } }"#;
        let tuning = Tuning::from_json_str(text).unwrap();
        let config = tuning.to_world_config();

        assert_eq!(config.missile.lifespan, 3.5);
        assert_eq!(config.missile.flight.guidance, GuidanceMode::FreeSteer);
        // Untouched fields stay at the engine defaults
        assert_eq!(config.missile.flight.max_speed, 1500.0);
        assert_eq!(config.missile.collision_radius, 15.0);
    }

    #[test]
    fn test_boost_policy_parses() {
        let text = r#"{ "missile": { "boost_policy": "repeatable" } }"#;
        let tuning = Tuning::from_json_str(text).unwrap();
        let config = tuning.to_world_config();
        assert_eq!(config.missile.boost.policy, BoostPolicy::Repeatable);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_round_trips_through_json() {
        let tuning = Tuning::default();
        let text = serde_json::to_string(&tuning).unwrap();
        let parsed = Tuning::from_json_str(&text).unwrap();
        assert_eq!(parsed.missile.lifespan, tuning.missile.lifespan);
        assert_eq!(parsed.detonation.magnitude, tuning.detonation.magnitude);
    }
}
