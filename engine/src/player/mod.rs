//! Player Module
//!
//! Provides the player character: camera-relative movement with jump and
//! gravity, the eye/muzzle transform fire starts from, and the single
//! active-missile slot that enforces one missile per character.

pub mod character;

pub use character::{
    Character, CharacterConfig, AIR_CONTROL, BASE_LOOK_UP_RATE, BASE_TURN_RATE, GRAVITY,
    JUMP_VELOCITY, MUZZLE_OFFSET, WALK_SPEED,
};
