//! Camera Feedback Module
//!
//! Drives the "through the missile camera" look: a time-bounded linear
//! interpolation of four post-process parameters (color saturation, film
//! grain intensity, grain jitter, vignette) from their neutral baseline
//! to configured targets. Activated once at launch; once the window
//! elapses the parameters hold at their final values until teardown.
//!
//! The interpolation alpha is clamped to [0, 1], so a final tick that
//! overshoots the window still lands exactly on the targets.

/// Scalar post-process parameters written to the renderer each frame.
///
/// Saturation is neutral at 1.0; the other three are neutral at 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostProcessParams {
    /// Color saturation (1.0 = full color, 0.0 = grayscale)
    pub color_saturation: f32,
    /// Film grain intensity
    pub grain_intensity: f32,
    /// Film grain jitter
    pub grain_jitter: f32,
    /// Vignette intensity
    pub vignette_intensity: f32,
}

impl PostProcessParams {
    /// The neutral baseline: full color, no grain, no vignette.
    pub const NEUTRAL: Self = Self {
        color_saturation: 1.0,
        grain_intensity: 0.0,
        grain_jitter: 0.0,
        vignette_intensity: 0.0,
    };
}

impl Default for PostProcessParams {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Configuration for the in-flight camera feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackConfig {
    /// Parameter values reached at the end of the interpolation window
    pub targets: PostProcessParams,
    /// Length of the interpolation window in seconds
    pub duration: f32,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            // Grainy, desaturated, vignetted missile-camera look
            targets: PostProcessParams {
                color_saturation: 0.0,
                grain_intensity: 0.6,
                grain_jitter: 1.0,
                vignette_intensity: 0.8,
            },
            duration: 0.1,
        }
    }
}

/// Time-bounded interpolation of post-process parameters.
///
/// Created idle; [`activate`] arms the interpolation window once, at
/// launch. Each [`tick`] advances the window and recomputes the current
/// parameters; after the window elapses the last computed values hold
/// (there is no reset while the missile lives). Not retriggerable
/// mid-flight.
///
/// [`activate`]: CameraFeedback::activate
/// [`tick`]: CameraFeedback::tick
#[derive(Debug, Clone, Copy)]
pub struct CameraFeedback {
    config: FeedbackConfig,
    /// Seconds left in the interpolation window; idle when <= 0
    remaining: f32,
    /// Current parameter values, written as-if to the render settings
    params: PostProcessParams,
}

impl CameraFeedback {
    /// Create an idle feedback controller with the given configuration.
    pub fn new(config: FeedbackConfig) -> Self {
        Self {
            config,
            remaining: 0.0,
            params: PostProcessParams::NEUTRAL,
        }
    }

    /// Arm the interpolation window. Called once at launch.
    pub fn activate(&mut self) {
        self.remaining = self.config.duration;
        self.params = PostProcessParams::NEUTRAL;
    }

    /// Advance the interpolation by one frame.
    ///
    /// While the window is open, computes `alpha = 1 - remaining/duration`
    /// (clamped to [0, 1]) and lerps every parameter from its neutral
    /// baseline to its target. Once `remaining` reaches zero the
    /// parameters stay at their last computed value.
    pub fn tick(&mut self, dt: f32) {
        if self.remaining <= 0.0 {
            return;
        }
        self.remaining -= dt;

        let alpha = (1.0 - self.remaining / self.config.duration).clamp(0.0, 1.0);
        let targets = &self.config.targets;
        self.params = PostProcessParams {
            color_saturation: lerp(1.0, targets.color_saturation, alpha),
            grain_intensity: lerp(0.0, targets.grain_intensity, alpha),
            grain_jitter: lerp(0.0, targets.grain_jitter, alpha),
            vignette_intensity: lerp(0.0, targets.vignette_intensity, alpha),
        };
    }

    /// Current post-process parameter values.
    #[inline]
    pub fn params(&self) -> &PostProcessParams {
        &self.params
    }

    /// Whether the interpolation window is still open.
    #[inline]
    pub fn is_interpolating(&self) -> bool {
        self.remaining > 0.0
    }
}

impl Default for CameraFeedback {
    fn default() -> Self {
        Self::new(FeedbackConfig::default())
    }
}

/// Linear interpolation between two scalars.
#[inline]
fn lerp(from: f32, to: f32, alpha: f32) -> f32 {
    from + (to - from) * alpha
}
