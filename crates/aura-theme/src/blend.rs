//! Affinity distance and two-preset blending.

use aura_analyze::TextAnalysis;
use aura_core::ValidationError;

use crate::preset::ThemePreset;
use crate::resolve::{Provenance, ResolvedTheme};

/// Extra distance when a preset's declared category differs from the text's.
pub const CATEGORY_MISMATCH_PENALTY: f64 = 0.5;

/// How far `preset` sits from `analysis` in signal space.
///
/// Euclidean over the four emotion axes plus one category axis, which is
/// [`CATEGORY_MISMATCH_PENALTY`] when the preset declares a different
/// category and 0 when it matches or declares none.
#[must_use]
pub fn distance(analysis: &TextAnalysis, preset: &ThemePreset) -> f64 {
    let emotional = analysis.emotion_scores().distance(&preset.affinity.emotion);
    let category = match preset.affinity.category {
        Some(c) if c != analysis.content_category() => CATEGORY_MISMATCH_PENALTY,
        _ => 0.0,
    };
    emotional.hypot(category)
}

/// Weight of the closer preset given both distances.
///
/// `1 - da / (da + db)`, or 0.5 when both distances are zero.
#[must_use]
pub fn blend_weight(da: f64, db: f64) -> f64 {
    let sum = da + db;
    if sum <= 0.0 { 0.5 } else { 1.0 - da / sum }
}

/// Blend two presets, keeping fraction `w` of `a`.
///
/// Colors interpolate per channel and effect floats linearly. Booleans and
/// typography come from `a` when `w >= 0.5`, else from `b`.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the blended effects are out of range,
/// which only happens when an input preset was itself invalid.
pub fn blend(a: &ThemePreset, b: &ThemePreset, w: f64) -> Result<ResolvedTheme, ValidationError> {
    let w = w.clamp(0.0, 1.0);
    let typography = if w >= 0.5 { &a.typography } else { &b.typography };
    ResolvedTheme::new(
        a.colors.blend(&b.colors, w),
        a.effects.blend(&b.effects, w),
        typography.clone(),
        Provenance::Blended {
            primary: a.name.clone(),
            secondary: b.name.clone(),
            weight: w,
        },
    )
}
