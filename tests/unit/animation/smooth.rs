use super::*;
use crate::style::model::StyleParams;

#[test]
fn eased_fields_converge_monotonically() {
    let start = StyleParams::default();
    let mut target = StyleParams::default();
    target.contrast = 1.8;
    target.symmetry = 12.0;

    let mut smoother = StyleSmoother::new(&start);
    let mut last_contrast = start.contrast;
    let mut last_symmetry = start.symmetry;
    for _ in 0..200 {
        let eased = smoother.step(&target);
        assert!(eased.contrast >= last_contrast);
        assert!(eased.contrast <= target.contrast);
        assert!(eased.symmetry >= last_symmetry);
        assert!(eased.symmetry <= target.symmetry);
        last_contrast = eased.contrast;
        last_symmetry = eased.symmetry;
    }
    assert!((last_contrast - target.contrast).abs() < 1e-3);
    assert!((last_symmetry - target.symmetry).abs() < 1e-2);
}

#[test]
fn residual_shrinks_by_the_smoothing_factor_each_frame() {
    let start = StyleParams::default();
    let mut target = StyleParams::default();
    target.metallic = 1.0;

    let mut smoother = StyleSmoother::new(&start);
    let mut residual = target.metallic - start.metallic;
    for _ in 0..50 {
        let eased = smoother.step(&target);
        let next_residual = target.metallic - eased.metallic;
        assert!((next_residual - residual * (1.0 - SMOOTHING)).abs() < 1e-12);
        residual = next_residual;
    }
}

#[test]
fn saturation_and_brightness_are_not_eased() {
    let mut target = StyleParams::default();
    target.saturation = 0.35;
    target.brightness = 1.4;

    let mut smoother = StyleSmoother::new(&StyleParams::default());
    let eased = smoother.step(&target);
    assert_eq!(eased.saturation, 0.35);
    assert_eq!(eased.brightness, 1.4);
}

#[test]
fn reset_snaps_to_the_given_style() {
    let mut hot = StyleParams::default();
    hot.contrast = 1.6;
    hot.primary_hue = 0.0;

    let mut smoother = StyleSmoother::new(&StyleParams::default());
    smoother.step(&hot);
    smoother.reset(&hot);

    let eased = smoother.step(&hot);
    // After a reset the first step has nothing left to close.
    assert_eq!(eased.contrast, 1.6);
    assert_eq!(eased.primary_hue, 0.0);
}

#[test]
fn converged_view_mirrors_the_style_record() {
    let mut style = StyleParams::default();
    style.metallic = 0.4;
    style.secondary_hue = 0.55;
    let eased = EasedStyle::converged(&style);
    assert_eq!(eased.metallic, 0.4);
    assert_eq!(eased.secondary_hue, 0.55);
    assert_eq!(eased.saturation, style.saturation);
}
