//! Detonation Tests - Impulse Field and Teardown
//!
//! Tests for the detonation shockwave applied through the world: uniform
//! impulse magnitude, category and radius filtering, proximity-triggered
//! detonation, and the cosmetic triggers firing exactly once.

use std::sync::{Arc, Mutex};

use glam::Vec3;
use tv_missile_engine::input::InputFrame;
use tv_missile_engine::physics::{Body, ObjectCategory};
use tv_missile_engine::world::{DetonationCause, EffectSink, World, WorldConfig};

const DT: f32 = 1.0 / 60.0;

/// Effect sink that records every trigger for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Effect {
    Launch(Vec3),
    Boost(Vec3),
    Explosion(Vec3),
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Effect>>>);

impl Recorder {
    fn events(&self) -> Vec<Effect> {
        self.0.lock().unwrap().clone()
    }

    fn explosions(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Effect::Explosion(_)))
            .count()
    }
}

impl EffectSink for Recorder {
    fn launch(&mut self, position: Vec3) {
        self.0.lock().unwrap().push(Effect::Launch(position));
    }

    fn boost(&mut self, position: Vec3) {
        self.0.lock().unwrap().push(Effect::Boost(position));
    }

    fn explosion(&mut self, position: Vec3) {
        self.0.lock().unwrap().push(Effect::Explosion(position));
    }
}

fn recorded_world(config: WorldConfig) -> (World, Recorder) {
    let recorder = Recorder::default();
    let world = World::with_effects(config, Box::new(recorder.clone()));
    (world, recorder)
}

// ============================================================================
// Impulse Field
// ============================================================================

#[test]
fn test_impulse_magnitude_is_uniform_in_radius() {
    let mut world = World::new(WorldConfig::default());

    // Two 10 kg crates at different distances from where the shot ends
    let near = world.bodies.insert(Body::new(
        Vec3::new(50.0, 64.0, -2000.0),
        10.0,
        20.0,
        ObjectCategory::PhysicsBody,
    ));
    let far = world.bodies.insert(Body::new(
        Vec3::new(250.0, 64.0, -2000.0),
        10.0,
        20.0,
        ObjectCategory::PhysicsBody,
    ));

    world.tick(DT, &InputFrame::fire());
    let handle = world.missiles.handles()[0];

    // Walk the missile to the blast site by hand, then trigger it
    world.missiles.get_mut(handle).unwrap().position = Vec3::new(0.0, 64.0, -2000.0);
    world.detonate(handle, DetonationCause::Manual);

    // 500_000 impulse over 10 kg: 50_000 units/s, regardless of distance
    let near_speed = world.bodies.get(near).map(|b| b.velocity.length());
    let far_speed = world.bodies.get(far).map(|b| b.velocity.length());
    assert!((near_speed.unwrap() - 50_000.0).abs() < 0.5);
    assert!((far_speed.unwrap() - 50_000.0).abs() < 0.5);

    // Direction is radial
    assert!(world.bodies.get(near).unwrap().velocity.x > 0.0);
}

#[test]
fn test_bodies_outside_radius_are_untouched() {
    let mut world = World::new(WorldConfig::default());
    let outside = world.bodies.insert(Body::new(
        Vec3::new(301.0, 64.0, -2000.0),
        10.0,
        20.0,
        ObjectCategory::PhysicsBody,
    ));

    world.tick(DT, &InputFrame::fire());
    let handle = world.missiles.handles()[0];
    world.missiles.get_mut(handle).unwrap().position = Vec3::new(0.0, 64.0, -2000.0);
    world.detonate(handle, DetonationCause::Manual);

    assert_eq!(world.bodies.get(outside).unwrap().velocity, Vec3::ZERO);
}

#[test]
fn test_static_geometry_ignores_the_blast() {
    let mut world = World::new(WorldConfig::default());
    let wall = world.bodies.insert(Body::new(
        Vec3::new(50.0, 64.0, -2000.0),
        1000.0,
        100.0,
        ObjectCategory::WorldStatic,
    ));

    world.tick(DT, &InputFrame::fire());
    let handle = world.missiles.handles()[0];
    world.missiles.get_mut(handle).unwrap().position = Vec3::new(0.0, 64.0, -2000.0);
    world.detonate(handle, DetonationCause::Manual);

    assert_eq!(world.bodies.get(wall).unwrap().velocity, Vec3::ZERO);
}

#[test]
fn test_owner_inside_blast_is_launched() {
    let mut world = World::new(WorldConfig::default());
    world.tick(DT, &InputFrame::fire());
    let handle = world.missiles.handles()[0];

    // Detonate just to the shooter's right
    world.missiles.get_mut(handle).unwrap().position = Vec3::new(150.0, 0.0, 0.0);
    world.detonate(handle, DetonationCause::Manual);

    // The character's body took the impulse; the next tick hands it to
    // the character as a velocity kick pointing away from the blast
    world.tick(DT, &InputFrame::idle());
    let character = world.characters.get(world.player()).unwrap();
    assert!(character.velocity.length() > 1000.0);
    assert!(character.velocity.x < 0.0);
}

// ============================================================================
// Proximity Detonation
// ============================================================================

#[test]
fn test_missile_detonates_on_contact() {
    let mut world = World::new(WorldConfig::default());

    // A target straight down the default aim line
    let target = world.bodies.insert(Body::new(
        Vec3::new(0.0, 64.0, -1000.0),
        10.0,
        50.0,
        ObjectCategory::PhysicsBody,
    ));

    world.tick(DT, &InputFrame::fire());
    for _ in 0..90 {
        world.tick(DT, &InputFrame::idle());
    }

    // Contact well before the 7s lifespan: missile gone, focus returned,
    // target sent flying away from the blast
    assert!(world.missiles.is_empty());
    assert!(!world.controller.controls_missile());
    let velocity = world.bodies.get(target).unwrap().velocity;
    assert!(velocity.length() > 0.0);
    assert!(velocity.z < 0.0);
}

#[test]
fn test_missile_ignores_its_shooter_at_launch() {
    // The muzzle is 100 units out but the shooter's body is wide; the
    // hit test must skip the owner or the shot would end instantly.
    let mut world = World::new(WorldConfig::default());
    world.tick(DT, &InputFrame::fire());
    world.tick(DT, &InputFrame::idle());

    assert_eq!(world.missiles.len(), 1);
    assert!(world.controller.controls_missile());
}

// ============================================================================
// Effect Triggers
// ============================================================================

#[test]
fn test_each_phase_fires_its_effect_once() {
    let (mut world, recorder) = recorded_world(WorldConfig::default());

    world.tick(DT, &InputFrame::fire());
    let boost = InputFrame {
        boost: true,
        ..InputFrame::default()
    };
    world.tick(DT, &boost);
    world.tick(DT, &boost); // single-use: no second boost effect
    let explode = InputFrame {
        explode: true,
        ..InputFrame::default()
    };
    world.tick(DT, &explode);

    let events = recorder.events();
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], Effect::Launch(_)));
    assert!(matches!(events[1], Effect::Boost(_)));
    assert!(matches!(events[2], Effect::Explosion(_)));
}

#[test]
fn test_double_detonation_fires_one_explosion() {
    let (mut world, recorder) = recorded_world(WorldConfig::default());

    world.tick(DT, &InputFrame::fire());
    let handle = world.missiles.handles()[0];
    world.detonate(handle, DetonationCause::Hit);
    world.detonate(handle, DetonationCause::Manual);

    assert_eq!(recorder.explosions(), 1);
}

#[test]
fn test_explosion_reported_at_missile_position() {
    let (mut world, recorder) = recorded_world(WorldConfig::default());

    world.tick(DT, &InputFrame::fire());
    let handle = world.missiles.handles()[0];
    let site = Vec3::new(10.0, 500.0, -3000.0);
    world.missiles.get_mut(handle).unwrap().position = site;
    world.detonate(handle, DetonationCause::Timeout);

    let events = recorder.events();
    assert!(events.contains(&Effect::Explosion(site)));
}
