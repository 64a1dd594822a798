//! Possession Module
//!
//! Tracks which controllable entity currently receives player input.
//! Exactly one entity is possessed at any time; an entity that is not
//! possessed still exists (the character persists through the whole
//! missile flight) but receives no input. Transfers happen only at the
//! Fire and Detonate transitions, and the world guards both against
//! dead targets before calling in here.

use crate::camera::ControlRotation;
use crate::missile::CharacterHandle;
use crate::player::character::MissileHandle;

/// The entity currently holding input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Possessed {
    /// The character walks, jumps, aims, and may fire
    Character(CharacterHandle),
    /// The missile steers, boosts, and may self-detonate
    Missile(MissileHandle),
}

/// The player controller: input focus plus the control rotation the
/// possessed entity steers with.
///
/// The rotation belongs to the controller, not to any entity - when
/// possession transfers from character to missile the missile inherits
/// the aim the character fired with, and on detonation the character's
/// captured pre-flight rotation is written back here.
#[derive(Debug, Clone, Copy)]
pub struct PlayerController {
    possessed: Possessed,
    /// The look orientation steered by whoever is possessed
    pub rotation: ControlRotation,
}

impl PlayerController {
    /// Create a controller possessing `character`, looking forward.
    pub fn new(character: CharacterHandle) -> Self {
        Self {
            possessed: Possessed::Character(character),
            rotation: ControlRotation::new(),
        }
    }

    /// The entity currently receiving input.
    #[inline]
    pub fn possessed(&self) -> Possessed {
        self.possessed
    }

    /// Whether a missile currently has input focus.
    #[inline]
    pub fn controls_missile(&self) -> bool {
        matches!(self.possessed, Possessed::Missile(_))
    }

    /// Assign input focus to `target`.
    ///
    /// Callers must have verified the target is live; the world's
    /// transfer sites do this before calling.
    pub fn possess(&mut self, target: Possessed) {
        self.possessed = target;
    }

    /// The current look direction of whoever is possessed.
    #[inline]
    pub fn look_direction(&self) -> glam::Vec3 {
        self.rotation.forward()
    }
}
