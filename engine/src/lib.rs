//! TV Missile Engine Library
//!
//! A small frame-stepped simulation core for a guided-missile sandbox:
//! the player character fires a single steerable missile, input control
//! transfers to the missile for the duration of its flight, and control
//! returns to the character when the missile detonates or times out.
//!
//! # Modules
//!
//! - [`input`] - Platform-agnostic key state, action bindings, and the
//!   per-frame [`input::InputFrame`] snapshot consumed by the sim
//! - [`camera`] - Control rotation (yaw/pitch) and the time-bounded
//!   post-process feedback applied during missile flight
//! - [`missile`] - Steering model and flight controller for the missile
//! - [`physics`] - Body set with sphere-overlap queries and the radial
//!   detonation impulse
//! - [`player`] - The character: movement, jump, and the single
//!   active-missile slot
//! - [`possession`] - Which controllable entity currently receives input
//! - [`world`] - The simulation world tying everything together, ticked
//!   once per frame with a fixed ordering
//!
//! # Example
//!
//! ```ignore
//! use tv_missile_engine::world::{World, WorldConfig};
//! use tv_missile_engine::input::InputFrame;
//!
//! let mut world = World::new(WorldConfig::default());
//!
//! // Fire a missile and fly it for one frame
//! let fire = InputFrame { fire: true, ..InputFrame::default() };
//! world.tick(1.0 / 60.0, &fire);
//!
//! let steer = InputFrame { turn: 1.5, ..InputFrame::default() };
//! world.tick(1.0 / 60.0, &steer);
//! ```

pub mod camera;
pub mod input;
pub mod missile;
pub mod physics;
pub mod player;
pub mod possession;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used input types
pub use input::{InputAction, InputFrame, KeyBindings, KeyCode, KeyboardState};
// Re-export the core simulation types at crate level for convenience
pub use possession::Possessed;
pub use world::{World, WorldConfig};
