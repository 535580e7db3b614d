use std::f64::consts::TAU;

use crate::animation::smooth::EasedStyle;
use crate::foundation::core::{LoopPhase, Vec2};
use crate::foundation::math::{lerp, smoothstep};
use crate::style::color::hsv_to_rgb;

/// Evaluate the emblem shading function for one surface point.
///
/// * `uv`: point on the unit square, `[0, 1]²`, y up.
/// * `cursor`: normalized cursor position in `[-1, 1]²`.
/// * `phase`: position inside the animation loop.
///
/// Returns linear RGB in `[0, 1]`; the surface is opaque. The function is
/// stateless and has no cross-pixel dependency, which is what lets the CPU
/// renderer fan rows out across threads.
pub fn shade(style: &EasedStyle, uv: Vec2, cursor: Vec2, phase: LoopPhase) -> [f64; 3] {
    let p = uv - Vec2::new(0.5, 0.5);
    let r = p.hypot();
    let theta = p.y.atan2(p.x);

    // Fold the angle into one symmetry sector. Euclidean mod keeps negative
    // angles inside the sector, giving exact N-fold rotational symmetry for
    // integer-valued fold counts.
    let sector = TAU / style.symmetry;
    let theta = (theta.rem_euclid(sector) - sector * 0.5).abs();

    let angle = phase.angle();
    let cursor_influence = 1.0 + cursor.x * 0.5;

    let pattern = (r * (10.0 + style.contrast * 10.0) * cursor_influence
        - angle * (2.0 + style.metallic * 3.0))
        .sin()
        * (theta * (5.0 + style.symmetry + cursor.y * 5.0)).sin();

    // Shape mask: a smooth threshold around the pattern's zero set.
    let shape = smoothstep(0.2, 0.0, pattern.abs());

    // Blend the two hues radially.
    let color_mix = smoothstep(0.0, 0.6, r);
    let value = shape * style.brightness;
    let a = hsv_to_rgb(style.primary_hue, style.saturation, value);
    let b = hsv_to_rgb(style.secondary_hue, style.saturation, value);

    let inv_gamma = 1.0 / style.contrast;
    let highlight = style.metallic * shape.powi(8) * 1.2;

    let mut out = [0.0f64; 3];
    for (out_ch, (a_ch, b_ch)) in out.iter_mut().zip(a.into_iter().zip(b)) {
        let blended = lerp(a_ch, b_ch, color_mix);
        *out_ch = (blended.max(0.0).powf(inv_gamma) + highlight).clamp(0.0, 1.0);
    }
    out
}
