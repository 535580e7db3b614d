use crate::foundation::error::{LoopforgeError, LoopforgeResult};

pub use kurbo::Vec2;

/// Frame rate expressed as an exact rational `num / den` in frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator of the frame rate, in frames.
    pub num: u32,
    /// Denominator of the frame rate, in seconds; must be `> 0`.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Construct an [`Fps`], rejecting a zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> LoopforgeResult<Self> {
        if den == 0 {
            return Err(LoopforgeError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(LoopforgeError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// The frame rate as a floating-point number of frames per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of a single frame, in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Number of frames spanning `secs` seconds, rounded to the nearest frame.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

/// Output raster dimensions, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Validate that both dimensions are non-zero.
    pub fn validate(self) -> LoopforgeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LoopforgeError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Position inside the animation loop, normalized to `[0, 1)`.
///
/// Derived from wall-clock time modulo the style's loop duration, so a held
/// style produces a seamless repeating animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoopPhase(pub f64);

impl LoopPhase {
    /// Compute the loop phase for `elapsed_secs` of wall-clock time against a
    /// loop of `duration_secs`. Non-positive durations yield phase 0.
    pub fn from_elapsed(elapsed_secs: f64, duration_secs: f64) -> Self {
        if duration_secs <= 0.0 || !duration_secs.is_finite() || !elapsed_secs.is_finite() {
            return Self(0.0);
        }
        Self((elapsed_secs / duration_secs).rem_euclid(1.0))
    }

    /// Rotation angle in radians for this phase (one loop = one full turn).
    pub fn angle(self) -> f64 {
        self.0 * std::f64::consts::TAU
    }
}
