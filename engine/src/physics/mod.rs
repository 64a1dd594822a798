//! Physics module for the missile sandbox
//!
//! Custom, deliberately small physics layer: a body set with sphere
//! queries and instantaneous impulses, and the radial detonation impulse
//! built on top of it. No external physics library dependencies - the
//! broad-phase and rigid-body solving a full engine would provide are
//! out of scope here.
//!
//! # Unit System
//!
//! **1 unit = 1 centimeter** (the tuning constants are denominated in
//! centimeters)
//!
//! - Distances in units
//! - Velocities in units/s
//! - Impulses in units·kg/s
//!
//! # Submodules
//!
//! - [`bodies`] - Body storage, object categories, sphere-overlap queries
//! - [`detonation`] - Uniform-magnitude radial impulse for explosions

pub mod bodies;
pub mod detonation;

// Re-export commonly used types at the physics module level
pub use bodies::{Body, BodyHandle, BodySet, ObjectCategory};
pub use detonation::{DetonationConfig, apply_radial_impulse};
