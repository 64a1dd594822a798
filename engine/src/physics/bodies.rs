//! Body Set Module
//!
//! Stores the physics-enabled bodies the simulation knows about and
//! answers the two queries the core needs: "which bodies are inside this
//! sphere" (detonation) and "does this moving sphere touch anything"
//! (missile hit test). Impulses are applied instantaneously as a
//! velocity change.

use glam::Vec3;

use crate::world::arena::{Arena, Handle};

/// Handle to a body in a [`BodySet`].
pub type BodyHandle = Handle;

/// Collision category of a body, mirroring the two channel categories
/// the detonation query cares about plus static world geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectCategory {
    /// Static level geometry - blocks hits, never receives impulses
    WorldStatic,
    /// Movable gameplay objects (characters, props)
    WorldDynamic,
    /// Free-simulating physics bodies (debris, crates)
    PhysicsBody,
}

/// A physics-enabled body.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    /// Current position in world space (units)
    pub position: Vec3,
    /// Current velocity (units/s)
    pub velocity: Vec3,
    /// Mass in kilograms
    pub mass: f32,
    /// Collision radius (units) - used for hit tests, not overlap queries
    pub radius: f32,
    /// Collision category
    pub category: ObjectCategory,
}

impl Body {
    /// Create a dynamic body at rest.
    pub fn new(position: Vec3, mass: f32, radius: f32, category: ObjectCategory) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            mass: mass.max(0.001), // Prevent division by zero
            radius,
            category,
        }
    }
}

/// Storage and queries for all physics-enabled bodies.
#[derive(Debug, Clone, Default)]
pub struct BodySet {
    bodies: Arena<Body>,
}

impl BodySet {
    /// Create an empty body set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the set holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Add a body, returning its handle.
    pub fn insert(&mut self, body: Body) -> BodyHandle {
        self.bodies.insert(body)
    }

    /// Remove a body. Stale handles are a no-op.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        self.bodies.remove(handle)
    }

    /// Borrow a body, if the handle is live.
    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    /// Mutably borrow a body, if the handle is live.
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    /// Find all bodies whose position lies strictly within `radius` of
    /// `center`, restricted to the given categories and excluding the
    /// listed handles.
    ///
    /// This is a center-point query: a body counts when the distance of
    /// its position from `center` is less than `radius`, regardless of
    /// the body's own collision radius.
    pub fn overlap_sphere(
        &self,
        center: Vec3,
        radius: f32,
        categories: &[ObjectCategory],
        ignore: &[BodyHandle],
    ) -> Vec<BodyHandle> {
        let radius_sq = radius * radius;
        self.bodies
            .iter()
            .filter(|(handle, body)| {
                categories.contains(&body.category)
                    && !ignore.contains(handle)
                    && body.position.distance_squared(center) < radius_sq
            })
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Test a sphere (e.g. the missile's collision sphere) against all
    /// bodies, returning the first body it touches.
    ///
    /// Unlike [`overlap_sphere`] this accounts for the body's own
    /// collision radius. Bodies in `ignore` are skipped, which is how a
    /// freshly launched missile stays immune to its owner.
    ///
    /// [`overlap_sphere`]: BodySet::overlap_sphere
    pub fn hit_test(
        &self,
        center: Vec3,
        radius: f32,
        ignore: &[BodyHandle],
    ) -> Option<BodyHandle> {
        self.bodies
            .iter()
            .filter(|(handle, _)| !ignore.contains(handle))
            .find(|(_, body)| {
                let reach = radius + body.radius;
                body.position.distance_squared(center) <= reach * reach
            })
            .map(|(handle, _)| handle)
    }

    /// Apply an instantaneous impulse: `velocity += impulse / mass`.
    ///
    /// Static bodies ignore impulses. Stale handles are a no-op.
    pub fn apply_impulse(&mut self, handle: BodyHandle, impulse: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            if body.category != ObjectCategory::WorldStatic {
                body.velocity += impulse / body.mass;
            }
        }
    }

    /// Integrate body positions for one frame.
    ///
    /// Static bodies never move. There is no gravity or drag here - the
    /// set only carries the motion that impulses gave the bodies.
    pub fn step(&mut self, dt: f32) {
        for (_, body) in self.bodies.iter_mut() {
            if body.category != ObjectCategory::WorldStatic {
                body.position += body.velocity * dt;
            }
        }
    }

    /// Iterate over live bodies with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dynamic_body(position: Vec3) -> Body {
        Body::new(position, 10.0, 25.0, ObjectCategory::WorldDynamic)
    }

    #[test]
    fn test_overlap_sphere_inside_and_outside() {
        let mut bodies = BodySet::new();
        let near = bodies.insert(dynamic_body(Vec3::new(50.0, 0.0, 0.0)));
        let far = bodies.insert(dynamic_body(Vec3::new(400.0, 0.0, 0.0)));

        let hits = bodies.overlap_sphere(
            Vec3::ZERO,
            300.0,
            &[ObjectCategory::WorldDynamic, ObjectCategory::PhysicsBody],
            &[],
        );

        assert!(hits.contains(&near));
        assert!(!hits.contains(&far));
    }

    #[test]
    fn test_overlap_sphere_boundary_is_exclusive() {
        let mut bodies = BodySet::new();
        let on_boundary = bodies.insert(dynamic_body(Vec3::new(300.0, 0.0, 0.0)));

        let hits = bodies.overlap_sphere(
            Vec3::ZERO,
            300.0,
            &[ObjectCategory::WorldDynamic],
            &[],
        );

        // d == radius does not qualify
        assert!(!hits.contains(&on_boundary));
    }

    #[test]
    fn test_overlap_sphere_category_filter() {
        let mut bodies = BodySet::new();
        let wall = bodies.insert(Body::new(
            Vec3::new(10.0, 0.0, 0.0),
            1000.0,
            100.0,
            ObjectCategory::WorldStatic,
        ));

        let hits = bodies.overlap_sphere(
            Vec3::ZERO,
            300.0,
            &[ObjectCategory::WorldDynamic, ObjectCategory::PhysicsBody],
            &[],
        );
        assert!(!hits.contains(&wall));
    }

    #[test]
    fn test_overlap_sphere_ignores_excluded() {
        let mut bodies = BodySet::new();
        let excluded = bodies.insert(dynamic_body(Vec3::new(10.0, 0.0, 0.0)));

        let hits = bodies.overlap_sphere(
            Vec3::ZERO,
            300.0,
            &[ObjectCategory::WorldDynamic],
            &[excluded],
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_hit_test_accounts_for_body_radius() {
        let mut bodies = BodySet::new();
        // Body center at 35 with radius 25: a 15-radius sphere at origin
        // reaches to 15, gap is 35 - 25 = 10 < 15, so this touches.
        let body = bodies.insert(dynamic_body(Vec3::new(35.0, 0.0, 0.0)));

        assert_eq!(bodies.hit_test(Vec3::ZERO, 15.0, &[]), Some(body));
        // Same sphere well away touches nothing
        assert_eq!(bodies.hit_test(Vec3::new(0.0, 500.0, 0.0), 15.0, &[]), None);
    }

    #[test]
    fn test_hit_test_respects_ignore_list() {
        let mut bodies = BodySet::new();
        let owner = bodies.insert(dynamic_body(Vec3::ZERO));

        // Right on top of the owner, but the owner is ignored
        assert_eq!(bodies.hit_test(Vec3::ZERO, 15.0, &[owner]), None);
    }

    #[test]
    fn test_apply_impulse_scales_by_mass() {
        let mut bodies = BodySet::new();
        let handle = bodies.insert(Body::new(
            Vec3::ZERO,
            10.0,
            25.0,
            ObjectCategory::PhysicsBody,
        ));

        bodies.apply_impulse(handle, Vec3::new(500.0, 0.0, 0.0));
        assert!((bodies.get(handle).unwrap().velocity.x - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_static_bodies_never_move() {
        let mut bodies = BodySet::new();
        let wall = bodies.insert(Body::new(
            Vec3::ZERO,
            1.0,
            100.0,
            ObjectCategory::WorldStatic,
        ));

        bodies.apply_impulse(wall, Vec3::new(1e6, 0.0, 0.0));
        bodies.step(1.0);
        assert_eq!(bodies.get(wall).unwrap().position, Vec3::ZERO);
    }

    #[test]
    fn test_step_integrates_velocity() {
        let mut bodies = BodySet::new();
        let handle = bodies.insert(dynamic_body(Vec3::ZERO));
        bodies.get_mut(handle).unwrap().velocity = Vec3::new(100.0, 0.0, 0.0);

        bodies.step(0.5);
        assert!((bodies.get(handle).unwrap().position.x - 50.0).abs() < 0.001);
    }
}
