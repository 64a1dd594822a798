//! World Module
//!
//! The simulation world: one player character, a missile arena, the
//! physics body set, and the player controller that decides who gets
//! this frame's input. `tick` advances everything in a fixed order, and
//! the Fire / Detonate possession transfers live here because they need
//! to see every participant at once.
//!
//! # Frame order
//!
//! 1. Steering input is applied to the control rotation of whoever is
//!    possessed (character rates or missile handling multipliers)
//! 2. Edge actions run: Fire (character), Boost / Explode (missile)
//! 3. The possessed missile flies (guidance, integration, feedback,
//!    lifespan countdown, hit test); every character ticks (the
//!    possessed one with movement input, the rest idle under gravity)
//! 4. Bodies integrate the motion their impulses gave them
//!
//! Every missile destruction path - hit, manual trigger, lifespan
//! timeout - funnels into [`World::detonate`]. Removing the missile from
//! the arena is the first thing it does, so a second detonation of the
//! same handle finds nothing and is a logged no-op.

pub mod arena;
pub mod effects;

pub use arena::{Arena, Handle};
pub use effects::{EffectSink, LogEffects};

use glam::Vec3;
use tracing::{debug, info, warn};

use crate::input::InputFrame;
use crate::missile::{CharacterHandle, Missile, MissileConfig, turn_at_rate};
use crate::physics::bodies::{Body, BodySet, ObjectCategory};
use crate::physics::detonation::{DetonationConfig, apply_radial_impulse};
use crate::player::character::{Character, CharacterConfig, MissileHandle};
use crate::possession::{PlayerController, Possessed};

/// Collision radius of the character's body (units)
const CHARACTER_BODY_RADIUS: f32 = 42.0;
/// Mass of the character's body (kg)
const CHARACTER_BODY_MASS: f32 = 100.0;

/// Configuration for the whole simulation world.
///
/// Taking the missile configuration by value here is what makes "no
/// projectile class configured" impossible: a world cannot exist
/// without one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    pub missile: MissileConfig,
    pub character: CharacterConfig,
    pub detonation: DetonationConfig,
    /// Hard cap on simultaneous missiles; a full arena rejects spawns
    pub max_missiles: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            missile: MissileConfig::default(),
            character: CharacterConfig::default(),
            detonation: DetonationConfig::default(),
            max_missiles: 4,
        }
    }
}

/// Why a missile detonated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetonationCause {
    /// The collision sphere touched a body
    Hit,
    /// The player pressed Explode
    Manual,
    /// The lifespan timer ran out
    Timeout,
}

/// The simulation world.
pub struct World {
    config: WorldConfig,
    pub characters: Arena<Character>,
    pub missiles: Arena<Missile>,
    pub bodies: BodySet,
    pub controller: PlayerController,
    effects: Box<dyn EffectSink>,
    player: CharacterHandle,
}

impl World {
    /// Create a world with one character at the origin, possessed, and
    /// the default logging effect sink.
    pub fn new(config: WorldConfig) -> Self {
        Self::with_effects(config, Box::new(LogEffects))
    }

    /// Create a world with a custom effect sink.
    pub fn with_effects(config: WorldConfig, effects: Box<dyn EffectSink>) -> Self {
        let mut bodies = BodySet::new();
        let body = bodies.insert(Body::new(
            Vec3::ZERO,
            CHARACTER_BODY_MASS,
            CHARACTER_BODY_RADIUS,
            ObjectCategory::WorldDynamic,
        ));

        let mut characters = Arena::new();
        let player = characters.insert(Character::new(Vec3::ZERO, config.character, body));

        Self {
            config,
            characters,
            missiles: Arena::new(),
            bodies,
            controller: PlayerController::new(player),
            effects,
            player,
        }
    }

    /// Handle of the player character.
    #[inline]
    pub fn player(&self) -> CharacterHandle {
        self.player
    }

    /// World configuration.
    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Advance the simulation one frame.
    pub fn tick(&mut self, dt: f32, frame: &InputFrame) {
        match self.controller.possessed() {
            Possessed::Character(handle) => {
                // Character look rates
                let config = self
                    .characters
                    .get(handle)
                    .map(|c| c.config)
                    .unwrap_or(self.config.character);
                let yaw = frame.turn + turn_at_rate(frame.turn_rate, config.base_turn_rate, dt);
                let pitch =
                    frame.look_up + turn_at_rate(frame.look_up_rate, config.base_look_up_rate, dt);
                self.controller.rotation.add_yaw_degrees(yaw);
                self.controller.rotation.add_pitch_degrees(pitch);

                if frame.fire {
                    self.fire(handle);
                }

                self.tick_characters(dt, frame);
            }
            Possessed::Missile(handle) => {
                // Missile look input passes through the handling multipliers
                let deltas = self.missiles.get(handle).map(|m| {
                    (
                        m.steering.yaw_delta(frame.turn, frame.turn_rate, dt),
                        m.steering.pitch_delta(frame.look_up, frame.look_up_rate, dt),
                    )
                });

                match deltas {
                    Some((yaw, pitch)) => {
                        self.controller.rotation.add_yaw_degrees(yaw);
                        self.controller.rotation.add_pitch_degrees(pitch);

                        if frame.boost {
                            self.boost(handle);
                        }
                        if frame.explode {
                            self.detonate(handle, DetonationCause::Manual);
                        } else {
                            self.tick_missile(handle, dt, yaw, pitch);
                        }
                    }
                    None => {
                        // Should be unreachable: every teardown path
                        // repossesses before removing the missile.
                        warn!("possessed missile is gone; returning focus to the player");
                        if self.characters.contains(self.player) {
                            self.controller.possess(Possessed::Character(self.player));
                        }
                    }
                }

                self.tick_characters(dt, frame);
            }
        }

        self.bodies.step(dt);
    }

    /// Fire transition: spawn a missile at the muzzle, transfer
    /// possession to it.
    ///
    /// Silently dropped (logged at debug) while a missile is already
    /// active; a full arena rejects the spawn and leaves all state
    /// unchanged.
    pub fn fire(&mut self, handle: CharacterHandle) {
        let Some(character) = self.characters.get(handle) else {
            warn!("fire request from a character that no longer exists");
            return;
        };
        if !character.can_fire() {
            // Can only shoot one missile at a time
            debug!("fire ignored: a missile is already in flight");
            return;
        }
        if self.missiles.len() >= self.config.max_missiles {
            warn!(
                max_missiles = self.config.max_missiles,
                "missile spawn rejected: arena is full"
            );
            return;
        }

        let rotation = self.controller.rotation;
        let position = character.muzzle_position(&rotation);
        let direction = rotation.forward();
        let owner_body = character.body;

        let missile_handle = self.missiles.insert(Missile::launch(
            &self.config.missile,
            position,
            direction,
            handle,
            owner_body,
        ));

        if let Some(character) = self.characters.get_mut(handle) {
            // Captured so detonation can restore the pre-flight aim
            character.saved_rotation = Some(rotation);
            character.active_missile = Some(missile_handle);
        }

        self.effects.launch(position);

        // The controller assumes control of the missile now
        self.controller.possess(Possessed::Missile(missile_handle));
        info!(
            speed = self.config.missile.flight.initial_speed,
            "missile fired; possession transferred"
        );
    }

    /// Boost the given missile, if the policy allows another boost.
    pub fn boost(&mut self, handle: MissileHandle) {
        let Some(missile) = self.missiles.get_mut(handle) else {
            warn!("boost ignored: missile no longer exists");
            return;
        };
        if missile.apply_boost() {
            let position = missile.position;
            self.effects.boost(position);
            info!("missile boosted");
        } else {
            debug!("boost ignored: already boosted");
        }
    }

    /// Detonate transition: the single teardown funnel for hit, manual
    /// trigger, and lifespan timeout.
    ///
    /// Applies the radial impulse, returns possession to the owning
    /// character (restoring its captured rotation), clears the owner's
    /// active-missile slot, and destroys the missile. Detonating an
    /// already-destroyed missile is a logged no-op.
    pub fn detonate(&mut self, handle: MissileHandle, cause: DetonationCause) {
        let Some(missile) = self.missiles.remove(handle) else {
            warn!("detonation ignored: missile already destroyed");
            return;
        };
        let position = missile.position;

        self.effects.explosion(position);

        // Shockwave: the missile has no body of its own, so nothing to
        // exclude; the owner is inside the blast like everything else.
        apply_radial_impulse(&mut self.bodies, position, &self.config.detonation, &[]);

        // Let the controller possess the original character again
        if self.controller.possessed() == Possessed::Missile(handle) {
            if let Some(owner) = self.characters.get_mut(missile.owner) {
                if let Some(saved) = owner.saved_rotation.take() {
                    self.controller.rotation = saved;
                }
                self.controller.possess(Possessed::Character(missile.owner));
            } else {
                warn!("missile owner no longer alive; returning focus to the player");
                if self.characters.contains(self.player) {
                    self.controller.possess(Possessed::Character(self.player));
                }
            }
        }

        // Destruction notification: the owner can fire again, whatever
        // the cause of destruction was.
        if let Some(owner) = self.characters.get_mut(missile.owner) {
            if owner.active_missile == Some(handle) {
                owner.active_missile = None;
            }
        }

        info!(?cause, "missile detonated");
    }

    /// Fly the possessed missile for one frame. May end in detonation.
    fn tick_missile(&mut self, handle: MissileHandle, dt: f32, yaw_delta: f32, pitch_delta: f32) {
        let look_direction = self.controller.look_direction();
        let mut cause = None;

        if let Some(missile) = self.missiles.get_mut(handle) {
            missile.flight.tick(look_direction, yaw_delta, pitch_delta);
            missile.position += missile.flight.velocity() * dt;
            missile.feedback.tick(dt);

            missile.lifespan_remaining -= dt;
            if missile.lifespan_remaining <= 0.0 {
                cause = Some(DetonationCause::Timeout);
            } else if self
                .bodies
                .hit_test(missile.position, missile.collision_radius, &[missile.owner_body])
                .is_some()
            {
                cause = Some(DetonationCause::Hit);
            }
        }

        if let Some(cause) = cause {
            self.detonate(handle, cause);
        }
    }

    /// Tick every character: the possessed one with movement input, the
    /// rest idle (gravity still applies). Also consumes any impulse the
    /// character's body picked up and syncs the body position.
    fn tick_characters(&mut self, dt: f32, frame: &InputFrame) {
        let possessed = match self.controller.possessed() {
            Possessed::Character(handle) => Some(handle),
            Possessed::Missile(_) => None,
        };
        let rotation = self.controller.rotation;

        for handle in self.characters.handles() {
            let Some(character) = self.characters.get_mut(handle) else {
                continue;
            };

            // A detonation impulse lands on the body; hand it to the
            // character as a velocity kick and clear it.
            if let Some(body) = self.bodies.get_mut(character.body) {
                if body.velocity != Vec3::ZERO {
                    character.velocity += body.velocity;
                    body.velocity = Vec3::ZERO;
                    if character.velocity.y > 0.0 {
                        character.grounded = false;
                    }
                }
            }

            if possessed == Some(handle) {
                character.tick(dt, frame.move_forward, frame.move_right, frame.jump, &rotation);
            } else {
                character.tick(dt, 0.0, 0.0, false, &rotation);
            }

            let position = character.position;
            let body = character.body;
            if let Some(body) = self.bodies.get_mut(body) {
                body.position = position;
            }
        }
    }
}
