use super::*;

fn map(prompt: &str) -> StyleParams {
    PromptMapper::new().map(prompt)
}

#[test]
fn empty_and_unmatched_prompts_pass_defaults_through() {
    assert_eq!(map(""), StyleParams::default());
    assert_eq!(map("completely unrelated words"), StyleParams::default());
}

#[test]
fn mapping_is_idempotent() {
    let mapper = PromptMapper::new();
    let prompt = "Neon purple mandala with 12 fold symmetry";
    assert_eq!(mapper.map(prompt), mapper.map(prompt));
}

#[test]
fn digit_fold_counts_parse_and_clamp() {
    assert_eq!(map("10 fold").symmetry, 10.0);
    assert_eq!(map("50 fold").symmetry, 20.0);
    assert_eq!(map("1 fold").symmetry, 3.0);
    assert_eq!(map("14 symmetry").symmetry, 14.0);
    // A bare digit run counts too.
    assert_eq!(map("make it 9").symmetry, 9.0);
}

#[test]
fn literary_keywords_set_symmetry() {
    assert_eq!(map("a mandala").symmetry, 12.0);
    assert_eq!(map("a sigil").symmetry, 8.0);
    assert_eq!(map("an emblem").symmetry, 6.0);
}

#[test]
fn explicit_digits_beat_literary_keywords() {
    assert_eq!(map("mandala with 5 fold symmetry").symmetry, 5.0);
    assert_eq!(map("7 fold sigil").symmetry, 7.0);
}

#[test]
fn metallic_blue_cyber_sigil_reference_prompt() {
    let style = map("Metallic blue cyber sigil with 8 fold symmetry");
    assert_eq!(style.metallic, 1.0);
    assert_eq!(style.contrast, 1.6);
    assert_eq!(style.symmetry, 8.0);
    assert_eq!(style.primary_hue, 0.6);
    assert_eq!(style.secondary_hue, 0.65);
}

#[test]
fn dark_mechanical_emblem_reference_prompt() {
    let style = map("Dark mechanical emblem with 6 symmetry");
    assert_eq!(style.symmetry, 6.0);
    assert_eq!(style.saturation, 0.7);
    assert_eq!(style.brightness, 0.5);
    assert_eq!(style.contrast, 1.2);
    assert_eq!(style.metallic, 0.2);
    // No hue keyword: the hue pair stays at its defaults.
    assert_eq!(style.primary_hue, 0.6);
    assert_eq!(style.secondary_hue, 0.8);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(map("NEON Purple MANDALA"), map("neon purple mandala"));
}

#[test]
fn energy_keywords_set_pacing() {
    let fast = map("high energy symbol");
    assert_eq!(fast.duration, 4.0);
    assert_eq!(fast.contrast, 1.6);

    let slow = map("slow cinematic piece");
    assert_eq!(slow.duration, 10.0);
    assert_eq!(slow.contrast, 1.2);
}

#[test]
fn pastel_and_neon_set_their_field_groups() {
    let pastel = map("pastel green geometric emblem");
    assert_eq!(pastel.saturation, 0.35);
    assert_eq!(pastel.brightness, 1.1);
    assert_eq!(pastel.contrast, 0.8);
    assert_eq!(pastel.metallic, 0.0);
    assert_eq!(pastel.primary_hue, 0.33);

    let neon = map("neon sign");
    assert_eq!(neon.saturation, 1.2);
    assert_eq!(neon.brightness, 1.4);
    assert_eq!(neon.contrast, 1.6);
    assert_eq!(neon.metallic, 0.4);
}

#[test]
fn later_material_rules_override_earlier_contrast() {
    // "sharp" raises contrast to 1.8, then "dark" pulls it back to 1.2.
    let style = map("sharp dark glyph");
    assert_eq!(style.contrast, 1.2);
    assert_eq!(style.brightness, 0.5);
}

#[test]
fn background_phrases_only_touch_background() {
    let style = map("emblem on white background");
    assert_eq!(style.background, "#ffffff");
    assert_eq!(map("light background").background, "#f5f5f5");
    assert_eq!(map("black background").background, "#000000");
    assert_eq!(map("plain emblem").background, "#0e0e11");
}

#[test]
fn hue_keywords_assign_close_pairs() {
    let red = map("red mark");
    assert_eq!((red.primary_hue, red.secondary_hue), (0.0, 0.05));
    let cyan = map("cyan mark");
    assert_eq!((cyan.primary_hue, cyan.secondary_hue), (0.5, 0.55));
    let purple = map("purple mark");
    assert_eq!((purple.primary_hue, purple.secondary_hue), (0.8, 0.85));
}

#[test]
fn surprise_prompts_are_seed_deterministic_and_mappable() {
    for seed in [0u64, 1, 42, u64::MAX] {
        let prompt = surprise_prompt(seed);
        assert_eq!(prompt, surprise_prompt(seed));

        // Every generated prompt carries an explicit fold count in [5, 14].
        let style = PromptMapper::new().map(&prompt);
        assert!(style.symmetry >= 5.0 && style.symmetry <= 14.0);
        style.validate().unwrap();
    }
}
