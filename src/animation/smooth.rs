use crate::foundation::math::lerp;
use crate::style::model::StyleParams;

/// Per-frame smoothing factor for the eased style fields.
///
/// This is a first-order low-pass filter, not a time-scaled interpolation:
/// each rendered frame moves the eased fields 5% of the remaining distance,
/// so the effective morph speed tracks the display refresh rate.
pub const SMOOTHING: f64 = 0.05;

/// The per-frame view of a style record as the shader consumes it.
///
/// A subset of fields trails the target style (see [`StyleSmoother`]);
/// `saturation` and `brightness` are passed through un-eased.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EasedStyle {
    /// Eased gamma-style exponent control.
    pub contrast: f64,
    /// Eased specular highlight blend.
    pub metallic: f64,
    /// Eased rotational fold count (fractional while morphing).
    pub symmetry: f64,
    /// Eased inner hue.
    pub primary_hue: f64,
    /// Eased outer hue.
    pub secondary_hue: f64,
    /// Direct (un-eased) color intensity.
    pub saturation: f64,
    /// Direct (un-eased) value scale.
    pub brightness: f64,
}

impl EasedStyle {
    /// The fully-converged view of `style`, as if easing had run forever.
    ///
    /// Used for still exports, where no morph is in flight.
    pub fn converged(style: &StyleParams) -> Self {
        Self {
            contrast: style.contrast,
            metallic: style.metallic,
            symmetry: style.symmetry,
            primary_hue: style.primary_hue,
            secondary_hue: style.secondary_hue,
            saturation: style.saturation,
            brightness: style.brightness,
        }
    }
}

/// Transient per-frame easing state owned by a render loop.
///
/// `contrast`, `metallic`, `symmetry`, `primary_hue` and `secondary_hue`
/// approach the current target exponentially; the state is reset whenever the
/// owning loop is recreated.
#[derive(Clone, Copy, Debug)]
pub struct StyleSmoother {
    contrast: f64,
    metallic: f64,
    symmetry: f64,
    primary_hue: f64,
    secondary_hue: f64,
}

impl StyleSmoother {
    /// Start easing from `initial`.
    pub fn new(initial: &StyleParams) -> Self {
        Self {
            contrast: initial.contrast,
            metallic: initial.metallic,
            symmetry: initial.symmetry,
            primary_hue: initial.primary_hue,
            secondary_hue: initial.secondary_hue,
        }
    }

    /// Snap the eased fields to `style`, abandoning any morph in flight.
    pub fn reset(&mut self, style: &StyleParams) {
        *self = Self::new(style);
    }

    /// Advance one frame toward `target` and return the shader's view.
    pub fn step(&mut self, target: &StyleParams) -> EasedStyle {
        self.contrast = lerp(self.contrast, target.contrast, SMOOTHING);
        self.metallic = lerp(self.metallic, target.metallic, SMOOTHING);
        self.symmetry = lerp(self.symmetry, target.symmetry, SMOOTHING);
        self.primary_hue = lerp(self.primary_hue, target.primary_hue, SMOOTHING);
        self.secondary_hue = lerp(self.secondary_hue, target.secondary_hue, SMOOTHING);

        EasedStyle {
            contrast: self.contrast,
            metallic: self.metallic,
            symmetry: self.symmetry,
            primary_hue: self.primary_hue,
            secondary_hue: self.secondary_hue,
            saturation: target.saturation,
            brightness: target.brightness,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/smooth.rs"]
mod tests;
