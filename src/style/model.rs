use crate::foundation::error::{LoopforgeError, LoopforgeResult};
use crate::style::color::parse_css_hex;

/// Lowest accepted rotational fold count.
pub const SYMMETRY_MIN: f64 = 3.0;
/// Highest accepted rotational fold count.
pub const SYMMETRY_MAX: f64 = 20.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// The complete visual style of an emblem.
///
/// A style is a pure data record with value semantics: providers produce a
/// fresh record seeded from [`StyleParams::default`], and the render loop
/// only ever reads it (easing a subset of fields toward it each frame).
///
/// `noise_scale`, `distortion` and `flow_intensity` are carried for forward
/// compatibility with flow-field shading and are not read by the current
/// shader; `hue` is the legacy single-hue field superseded by
/// `primary_hue`/`secondary_hue`.
pub struct StyleParams {
    /// Reserved: spatial frequency for flow-field shading.
    pub noise_scale: f64,
    /// Reserved: domain warp strength.
    pub distortion: f64,
    /// Reserved: flow advection speed.
    pub flow_intensity: f64,
    /// Legacy single hue in `[0, 1)`; superseded by the primary/secondary pair.
    pub hue: f64,
    /// Length of one animation loop in seconds.
    pub duration: f64,
    /// Gamma-style exponent control; must stay positive.
    pub contrast: f64,
    /// Specular highlight blend in `[0, 1]`.
    pub metallic: f64,
    /// Rotational fold count, integer-valued in `[3, 20]`.
    pub symmetry: f64,
    /// Inner hue on the hue circle, `[0, 1)`.
    pub primary_hue: f64,
    /// Outer hue on the hue circle, `[0, 1)`.
    pub secondary_hue: f64,
    /// Color intensity scale.
    pub saturation: f64,
    /// Value (HSV "v") scale.
    pub brightness: f64,
    /// CSS-style hex color for the page backdrop behind the emblem surface.
    pub background: String,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            noise_scale: 4.0,
            distortion: 0.3,
            flow_intensity: 0.05,
            hue: 0.0,
            duration: 6.0,
            contrast: 1.0,
            metallic: 0.0,
            symmetry: 6.0,
            primary_hue: 0.6,
            secondary_hue: 0.8,
            saturation: 1.0,
            brightness: 1.0,
            background: "#0e0e11".to_owned(),
        }
    }
}

impl StyleParams {
    /// Validate static invariants for this style record.
    pub fn validate(&self) -> LoopforgeResult<()> {
        let numeric = [
            ("noise_scale", self.noise_scale),
            ("distortion", self.distortion),
            ("flow_intensity", self.flow_intensity),
            ("hue", self.hue),
            ("duration", self.duration),
            ("contrast", self.contrast),
            ("metallic", self.metallic),
            ("symmetry", self.symmetry),
            ("primary_hue", self.primary_hue),
            ("secondary_hue", self.secondary_hue),
            ("saturation", self.saturation),
            ("brightness", self.brightness),
        ];
        for (name, value) in numeric {
            if !value.is_finite() {
                return Err(LoopforgeError::validation(format!(
                    "style field '{name}' must be finite"
                )));
            }
        }
        if self.duration <= 0.0 {
            return Err(LoopforgeError::validation("style duration must be > 0"));
        }
        if self.contrast <= 0.0 {
            return Err(LoopforgeError::validation("style contrast must be > 0"));
        }
        if !(SYMMETRY_MIN..=SYMMETRY_MAX).contains(&self.symmetry) {
            return Err(LoopforgeError::validation(format!(
                "style symmetry must be in [{SYMMETRY_MIN}, {SYMMETRY_MAX}]"
            )));
        }
        self.background_rgb()?;
        Ok(())
    }

    /// Parse the backdrop color into opaque RGB8.
    pub fn background_rgb(&self) -> LoopforgeResult<[u8; 3]> {
        parse_css_hex(&self.background).map_err(|e| {
            LoopforgeError::validation(format!(
                "style background '{}' is not a hex color: {e}",
                self.background
            ))
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// A partial style record: every field optional.
///
/// This is the shape a generated-text provider parses out of a model
/// response; unset fields fall through to the defaults when overlaid.
pub struct StyleOverrides {
    /// Override for [`StyleParams::noise_scale`].
    pub noise_scale: Option<f64>,
    /// Override for [`StyleParams::distortion`].
    pub distortion: Option<f64>,
    /// Override for [`StyleParams::flow_intensity`].
    pub flow_intensity: Option<f64>,
    /// Override for [`StyleParams::hue`].
    pub hue: Option<f64>,
    /// Override for [`StyleParams::duration`].
    pub duration: Option<f64>,
    /// Override for [`StyleParams::contrast`].
    pub contrast: Option<f64>,
    /// Override for [`StyleParams::metallic`].
    pub metallic: Option<f64>,
    /// Override for [`StyleParams::symmetry`].
    pub symmetry: Option<f64>,
    /// Override for [`StyleParams::primary_hue`].
    pub primary_hue: Option<f64>,
    /// Override for [`StyleParams::secondary_hue`].
    pub secondary_hue: Option<f64>,
    /// Override for [`StyleParams::saturation`].
    pub saturation: Option<f64>,
    /// Override for [`StyleParams::brightness`].
    pub brightness: Option<f64>,
    /// Override for [`StyleParams::background`].
    pub background: Option<String>,
}

impl StyleOverrides {
    /// Overlay these overrides on `base`, producing a new record.
    pub fn apply_to(&self, base: &StyleParams) -> StyleParams {
        StyleParams {
            noise_scale: self.noise_scale.unwrap_or(base.noise_scale),
            distortion: self.distortion.unwrap_or(base.distortion),
            flow_intensity: self.flow_intensity.unwrap_or(base.flow_intensity),
            hue: self.hue.unwrap_or(base.hue),
            duration: self.duration.unwrap_or(base.duration),
            contrast: self.contrast.unwrap_or(base.contrast),
            metallic: self.metallic.unwrap_or(base.metallic),
            symmetry: self.symmetry.unwrap_or(base.symmetry),
            primary_hue: self.primary_hue.unwrap_or(base.primary_hue),
            secondary_hue: self.secondary_hue.unwrap_or(base.secondary_hue),
            saturation: self.saturation.unwrap_or(base.saturation),
            brightness: self.brightness.unwrap_or(base.brightness),
            background: self
                .background
                .clone()
                .unwrap_or_else(|| base.background.clone()),
        }
    }
}
