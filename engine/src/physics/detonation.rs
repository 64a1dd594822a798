//! Detonation Module
//!
//! Computes the shockwave of an exploding missile: every qualifying body
//! within the blast radius receives an impulse of the configured
//! magnitude, directed straight away from the explosion center. The
//! magnitude is uniform - there is no distance attenuation, only the
//! direction depends on where the body sits.

use glam::Vec3;
use tracing::debug;

use super::bodies::{BodyHandle, BodySet, ObjectCategory};

/// Body categories that qualify for the detonation impulse.
pub const DETONATION_CATEGORIES: [ObjectCategory; 2] =
    [ObjectCategory::WorldDynamic, ObjectCategory::PhysicsBody];

/// Configuration for the detonation shockwave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetonationConfig {
    /// Blast radius (units); bodies at or beyond it are unaffected
    pub radius: f32,
    /// Impulse magnitude applied to every body in range
    pub magnitude: f32,
}

impl Default for DetonationConfig {
    fn default() -> Self {
        Self {
            radius: 300.0,
            magnitude: 500_000.0,
        }
    }
}

/// Apply the radial explosion impulse around `center`.
///
/// Queries world-dynamic and physics-body categories within the blast
/// radius (excluding `ignore`, typically the exploding missile's own
/// body if it has one) and pushes each straight away from the center
/// with uniform magnitude. A body sitting exactly at the center has no
/// defined direction and receives no impulse.
///
/// Returns the number of bodies hit.
pub fn apply_radial_impulse(
    bodies: &mut BodySet,
    center: Vec3,
    config: &DetonationConfig,
    ignore: &[BodyHandle],
) -> usize {
    let hits = bodies.overlap_sphere(center, config.radius, &DETONATION_CATEGORIES, ignore);

    for &handle in &hits {
        let Some(body) = bodies.get(handle) else {
            continue;
        };
        // Direction-only falloff: normalize, zero-safe
        let direction = (body.position - center).normalize_or_zero();
        bodies.apply_impulse(handle, direction * config.magnitude);
    }

    debug!(
        bodies_hit = hits.len(),
        radius = config.radius,
        magnitude = config.magnitude,
        "radial impulse applied"
    );
    hits.len()
}
