//! Effect Sink Module
//!
//! Cosmetic triggers (particles, audio) are external collaborators: the
//! core fires them and forgets them, and nothing they do - including
//! doing nothing at all because an asset is missing - can abort core
//! logic. The default sink just logs the events.

use glam::Vec3;
use tracing::info;

/// Receiver for fire-and-forget cosmetic triggers.
pub trait EffectSink {
    /// A missile left the muzzle.
    fn launch(&mut self, position: Vec3);
    /// A possessed missile boosted.
    fn boost(&mut self, position: Vec3);
    /// A missile detonated here.
    fn explosion(&mut self, position: Vec3);
}

/// Default sink: structured log lines instead of particles and audio.
#[derive(Debug, Default)]
pub struct LogEffects;

impl EffectSink for LogEffects {
    fn launch(&mut self, position: Vec3) {
        info!(x = position.x, y = position.y, z = position.z, "fx: missile launch");
    }

    fn boost(&mut self, position: Vec3) {
        info!(x = position.x, y = position.y, z = position.z, "fx: missile boost");
    }

    fn explosion(&mut self, position: Vec3) {
        info!(x = position.x, y = position.y, z = position.z, "fx: explosion");
    }
}
