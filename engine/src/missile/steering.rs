//! Steering Model Module
//!
//! The turn-rate math shared by every controllable entity, plus the
//! missile's handling configuration. Rate-based look axes (joysticks)
//! are converted to per-frame angle deltas here; handling multipliers
//! then scale the applied delta independently of the nominal rate, which
//! is how boosting dampens handling without touching the base rates.

/// Missile base turn rate for rate-based axes, in deg/sec
pub const MISSILE_BASE_TURN_RATE: f32 = 1.0;
/// Missile base look up/down rate for rate-based axes, in deg/sec
pub const MISSILE_BASE_LOOK_UP_RATE: f32 = 1.0;
/// Handling multiplier applied to every missile look input
pub const MISSILE_HANDLING_MULTIPLIER: f32 = 0.06;

/// Convert a normalized rate input into this frame's angle delta.
///
/// `input` is a normalized rate where 1.0 means 100% of the desired turn
/// rate; `base_rate` is in deg/sec. The result is in degrees.
#[inline]
pub fn turn_at_rate(input: f32, base_rate: f32, dt: f32) -> f32 {
    input * base_rate * dt
}

/// Steering configuration for one missile.
///
/// Base rates feed [`turn_at_rate`] for the rate-based axes; the
/// multipliers scale every applied yaw/pitch delta (absolute-delta and
/// rate-based alike) before it reaches the control rotation. Boosting
/// shrinks the multipliers in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringConfig {
    /// Base turn rate for rate axes, in deg/sec
    pub base_turn_rate: f32,
    /// Base look up/down rate for rate axes, in deg/sec
    pub base_look_up_rate: f32,
    /// Multiplier limiting yaw handling
    pub turn_rate_multiplier: f32,
    /// Multiplier limiting pitch handling
    pub look_up_rate_multiplier: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            base_turn_rate: MISSILE_BASE_TURN_RATE,
            base_look_up_rate: MISSILE_BASE_LOOK_UP_RATE,
            turn_rate_multiplier: MISSILE_HANDLING_MULTIPLIER,
            look_up_rate_multiplier: MISSILE_HANDLING_MULTIPLIER,
        }
    }
}

impl SteeringConfig {
    /// This frame's yaw delta in degrees, from the two yaw input flavors.
    ///
    /// `turn` is an absolute delta (mouse); `turn_rate` is a normalized
    /// rate (joystick). Both pass through the handling multiplier.
    pub fn yaw_delta(&self, turn: f32, turn_rate: f32, dt: f32) -> f32 {
        (turn + turn_at_rate(turn_rate, self.base_turn_rate, dt)) * self.turn_rate_multiplier
    }

    /// This frame's pitch delta in degrees, from the two pitch input flavors.
    pub fn pitch_delta(&self, look_up: f32, look_up_rate: f32, dt: f32) -> f32 {
        (look_up + turn_at_rate(look_up_rate, self.base_look_up_rate, dt))
            * self.look_up_rate_multiplier
    }

    /// Dampen handling by the boost factor.
    pub fn apply_boost_handling(&mut self, handling_multiplier: f32) {
        self.turn_rate_multiplier *= handling_multiplier;
        self.look_up_rate_multiplier *= handling_multiplier;
    }
}

/// Whether boost may be triggered more than once per flight.
///
/// Both policies exist in the wild; which one a missile uses is a
/// configuration choice, never a merge of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostPolicy {
    /// Boost fires once; further presses are ignored
    SingleUse,
    /// Every press stacks another boost
    Repeatable,
}

/// Boost configuration: speed up, handle worse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostConfig {
    /// Velocity and max-speed factor per boost
    pub speed_multiplier: f32,
    /// Handling-multiplier factor per boost (< 1 dampens)
    pub handling_multiplier: f32,
    /// Single-use or repeatable
    pub policy: BoostPolicy,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: 2.0,
            handling_multiplier: 0.333,
            policy: BoostPolicy::SingleUse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_at_rate_formula() {
        // input * rate * dt
        let delta = turn_at_rate(0.5, 45.0, 1.0 / 60.0);
        assert!((delta - 0.375).abs() < 0.0001);
    }

    #[test]
    fn test_turn_at_rate_zero_input() {
        assert_eq!(turn_at_rate(0.0, 45.0, 0.016), 0.0);
    }

    #[test]
    fn test_yaw_delta_applies_handling_multiplier() {
        let config = SteeringConfig::default();

        // Pure absolute delta: 10 degrees in, 10 * 0.06 out
        let delta = config.yaw_delta(10.0, 0.0, 1.0 / 60.0);
        assert!((delta - 0.6).abs() < 0.0001);
    }

    #[test]
    fn test_yaw_delta_combines_both_flavors() {
        let config = SteeringConfig {
            base_turn_rate: 60.0,
            turn_rate_multiplier: 0.5,
            ..SteeringConfig::default()
        };

        // absolute 2.0 plus rate 1.0 * 60 deg/s * 0.1s = 6.0, then * 0.5
        let delta = config.yaw_delta(2.0, 1.0, 0.1);
        assert!((delta - 4.0).abs() < 0.0001);
    }

    #[test]
    fn test_pitch_delta_uses_look_up_multiplier() {
        let mut config = SteeringConfig::default();
        config.look_up_rate_multiplier = 0.5;

        let delta = config.pitch_delta(4.0, 0.0, 0.016);
        assert!((delta - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_apply_boost_handling_dampens_both_axes() {
        let mut config = SteeringConfig::default();
        config.apply_boost_handling(0.333);

        assert!((config.turn_rate_multiplier - 0.06 * 0.333).abs() < 1e-6);
        assert!((config.look_up_rate_multiplier - 0.06 * 0.333).abs() < 1e-6);
        // Nominal rates unchanged
        assert_eq!(config.base_turn_rate, MISSILE_BASE_TURN_RATE);
    }
}
