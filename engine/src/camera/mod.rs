//! Camera Module
//!
//! Provides the player control rotation and the in-flight post-process
//! feedback. This module is window-system agnostic - it only deals with
//! orientation state and scalar render parameters.

pub mod controller;
pub mod feedback;

pub use controller::ControlRotation;
pub use feedback::{CameraFeedback, FeedbackConfig, PostProcessParams};
