use regex::Regex;

use crate::style::model::{StyleParams, SYMMETRY_MAX, SYMMETRY_MIN};

/// Rule-based style provider: maps a free-text prompt to a [`StyleParams`]
/// record through an ordered table of substring and regex checks.
///
/// The mapper is pure and total: matching is case-insensitive, unmatched or
/// empty prompts fall through to [`StyleParams::default`], and applying the
/// same prompt twice yields an identical record. Later rules override
/// earlier ones on overlapping fields; in particular an explicit fold count
/// ("8 fold", "12 symmetry") always beats the literary keywords.
pub struct PromptMapper {
    fold_count: Regex,
}

impl PromptMapper {
    /// Build a mapper with its compiled rule patterns.
    pub fn new() -> Self {
        Self {
            // First run of digits, optionally suffixed with "fold"/"symmetry".
            fold_count: Regex::new(r"(\d+)[-\s]*(?:fold|symmetry)?")
                .expect("fold count pattern is a valid literal"),
        }
    }

    /// Map `prompt` to a complete style record.
    pub fn map(&self, prompt: &str) -> StyleParams {
        let lower = prompt.to_lowercase();
        let mut style = StyleParams::default();

        // Symmetry: literary keywords first, then an explicit digit run so a
        // written-out fold count always wins.
        if lower.contains("mandala") {
            style.symmetry = 12.0;
        }
        if lower.contains("sigil") {
            style.symmetry = 8.0;
        }
        if lower.contains("emblem") {
            style.symmetry = 6.0;
        }
        if let Some(caps) = self.fold_count.captures(&lower)
            && let Ok(value) = caps[1].parse::<f64>()
        {
            style.symmetry = value.clamp(SYMMETRY_MIN, SYMMETRY_MAX);
        }

        // Energy / pacing.
        if lower.contains("high energy") || lower.contains("intense") {
            style.duration = 4.0;
            style.contrast = 1.6;
        }
        if lower.contains("slow") || lower.contains("cinematic") {
            style.duration = 10.0;
            style.contrast = 1.2;
        }

        // Material.
        if lower.contains("metallic") || lower.contains("chrome") {
            style.metallic = 1.0;
            style.contrast = 1.6;
        }
        if lower.contains("pastel") {
            style.saturation = 0.35;
            style.brightness = 1.1;
            style.contrast = 0.8;
            style.metallic = 0.0;
        }
        if lower.contains("sharp") {
            style.contrast = 1.8;
        }
        if lower.contains("dark") {
            style.saturation = 0.7;
            style.brightness = 0.5;
            style.contrast = 1.2;
            style.metallic = 0.2;
        }
        if lower.contains("neon") {
            style.saturation = 1.2;
            style.brightness = 1.4;
            style.contrast = 1.6;
            style.metallic = 0.4;
        }

        // Color hints: a close primary/secondary pair on the hue circle.
        if lower.contains("red") {
            style.primary_hue = 0.0;
            style.secondary_hue = 0.05;
        }
        if lower.contains("green") {
            style.primary_hue = 0.33;
            style.secondary_hue = 0.38;
        }
        if lower.contains("blue") {
            style.primary_hue = 0.6;
            style.secondary_hue = 0.65;
        }
        if lower.contains("purple") {
            style.primary_hue = 0.8;
            style.secondary_hue = 0.85;
        }
        if lower.contains("cyan") {
            style.primary_hue = 0.5;
            style.secondary_hue = 0.55;
        }

        // Backdrop phrases; nothing else touches this field.
        if lower.contains("white background") {
            style.background = "#ffffff".to_owned();
        }
        if lower.contains("light background") {
            style.background = "#f5f5f5".to_owned();
        }
        if lower.contains("black background") {
            style.background = "#000000".to_owned();
        }

        style
    }
}

impl Default for PromptMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose a deterministic "surprise" prompt from fixed word lists.
///
/// The same seed always yields the same prompt, so a surprising-but-
/// reproducible emblem can be recreated from its seed alone.
pub fn surprise_prompt(seed: u64) -> String {
    const MOODS: [&str; 4] = ["metallic", "dark", "neon", "sharp"];
    const COLORS: [&str; 5] = ["red", "blue", "green", "purple", "cyan"];

    fn mix64(mut z: u64) -> u64 {
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    let mood = MOODS[(mix64(seed) % MOODS.len() as u64) as usize];
    let color = COLORS[(mix64(seed.wrapping_add(1)) % COLORS.len() as u64) as usize];
    let folds = 5 + mix64(seed.wrapping_add(2)) % 10;

    format!("{mood} {color} emblem with {folds} fold symmetry")
}

#[cfg(test)]
#[path = "../../tests/unit/style/prompt.rs"]
mod tests;
