//! Game Module
//!
//! Game-level glue on top of the engine: tuning files that deserialize
//! into engine configuration, and the session that turns raw keyboard
//! and mouse state into per-frame input for the world.

pub mod session;
pub mod tuning;

pub use session::GameSession;
pub use tuning::Tuning;
