//! Builtin designer palettes.
//!
//! Three families: `learning_*` for instructional material,
//! `professional_*` for technical and business copy, `emotional_*` for
//! expressive prose. Each preset pairs a fixed color scheme with one of four
//! effect intensities and an affinity that places it in signal space.

use aura_analyze::{ContentCategory, EmotionVector};
use aura_core::HexColor;

use crate::preset::{Affinity, ColorScheme, EffectParameters, ThemePreset, TypographyHints};
use crate::template::TemplateId;

// ─── Effect intensities ──────────────────────────────────────────────────────

const SUBTLE: EffectParameters = effects(0.2, 1.0, 0.0, false, 45.0);
const MODERATE: EffectParameters = effects(0.4, 1.0, 0.5, true, 90.0);
const VIBRANT: EffectParameters = effects(0.6, 1.2, 1.0, true, 135.0);
const ENERGETIC: EffectParameters = effects(0.8, 1.5, 1.5, true, 180.0);

const fn effects(glow: f64, speed: f64, blur: f64, pulse: bool, angle: f64) -> EffectParameters {
    EffectParameters {
        glow_intensity: glow,
        animation_speed: speed,
        blur_radius: blur,
        pulse_enabled: pulse,
        gradient_angle: angle,
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn hex(v: u32) -> HexColor {
    HexColor::rgb8((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Colors in field order: primary start/end, background start/end, accent,
/// glow.
const fn scheme(c: [u32; 6]) -> ColorScheme {
    ColorScheme {
        primary_start: hex(c[0]),
        primary_end: hex(c[1]),
        background_start: hex(c[2]),
        background_end: hex(c[3]),
        accent_color: hex(c[4]),
        glow_color: hex(c[5]),
    }
}

const fn emotion(positive: f64, negative: f64, neutral: f64, excited: f64) -> EmotionVector {
    EmotionVector {
        positive,
        negative,
        neutral,
        excited,
    }
}

fn typography(weight: &str, spacing: &str, line_height: &str) -> TypographyHints {
    TypographyHints {
        font_weight: weight.into(),
        letter_spacing: spacing.into(),
        line_height: line_height.into(),
    }
}

struct Entry {
    name: &'static str,
    description: &'static str,
    colors: [u32; 6],
    effects: EffectParameters,
    typography: (&'static str, &'static str, &'static str),
    emotion: EmotionVector,
    category: Option<ContentCategory>,
    audience: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        name: "learning_focused",
        description: "Cool blues that keep attention on instructional text",
        colors: [0x004A_90E2, 0x007E_D321, 0x0000_0428, 0x0000_4E92, 0x0050_E3C2, 0x004A_90E2],
        effects: SUBTLE,
        typography: ("500", "0.01em", "1.7"),
        emotion: emotion(0.3, 0.0, 0.6, 0.1),
        category: Some(ContentCategory::Learning),
        audience: "students",
    },
    Entry {
        name: "learning_energetic",
        description: "Warm coral and teal for upbeat lessons",
        colors: [0x00FF_6B6B, 0x004E_CDC4, 0x0013_4E5E, 0x0071_B280, 0x0045_B7D1, 0x00FF_6B6B],
        effects: VIBRANT,
        typography: ("600", "0.02em", "1.6"),
        emotion: emotion(0.5, 0.0, 0.1, 0.5),
        category: Some(ContentCategory::Learning),
        audience: "students",
    },
    Entry {
        name: "learning_supportive",
        description: "Soft greens for material that may feel difficult",
        colors: [0x00A8_E6CF, 0x0088_D8A3, 0x002C_3E50, 0x004A_6741, 0x007F_B069, 0x00A8_E6CF],
        effects: SUBTLE,
        typography: ("400", "0.02em", "1.8"),
        emotion: emotion(0.4, 0.2, 0.5, 0.0),
        category: Some(ContentCategory::Learning),
        audience: "students",
    },
    Entry {
        name: "professional_minimal",
        description: "Slate on paper with a single blue accent",
        colors: [0x002F_3542, 0x0057_606F, 0x00F8_F9FA, 0x00E9_ECEF, 0x0037_42FA, 0x002F_3542],
        effects: SUBTLE,
        typography: ("400", "normal", "1.5"),
        emotion: emotion(0.1, 0.0, 0.8, 0.0),
        category: Some(ContentCategory::Technology),
        audience: "professionals",
    },
    Entry {
        name: "professional_positive",
        description: "Mint and cyan over lavender for confident updates",
        colors: [0x0000_B894, 0x0000_CEC9, 0x00DD_D6FE, 0x00E0_E7FF, 0x0009_84E3, 0x0000_B894],
        effects: MODERATE,
        typography: ("500", "normal", "1.5"),
        emotion: emotion(0.6, 0.0, 0.4, 0.1),
        category: Some(ContentCategory::Technology),
        audience: "professionals",
    },
    Entry {
        name: "emotional_vibrant",
        description: "Saturated coral, gold and violet for high-energy prose",
        colors: [0x00FF_7675, 0x00FD_CB6E, 0x006C_5CE7, 0x00A2_9BFE, 0x00FD_79A8, 0x00FF_7675],
        effects: ENERGETIC,
        typography: ("700", "0.03em", "1.5"),
        emotion: emotion(0.5, 0.0, 0.0, 0.7),
        category: None,
        audience: "general",
    },
    Entry {
        name: "emotional_serene",
        description: "Aqua and sky blue over charcoal for calm passages",
        colors: [0x0081_ECEC, 0x0074_B9FF, 0x002D_3436, 0x0063_6E72, 0x0000_B894, 0x0081_ECEC],
        effects: SUBTLE,
        typography: ("300", "0.01em", "1.8"),
        emotion: emotion(0.3, 0.0, 0.6, 0.0),
        category: Some(ContentCategory::Nature),
        audience: "general",
    },
    Entry {
        name: "emotional_contemplative",
        description: "Muted violets for reflective or somber writing",
        colors: [0x00A2_9BFE, 0x006C_5CE7, 0x002D_3436, 0x0063_6E72, 0x0074_B9FF, 0x00A2_9BFE],
        effects: MODERATE,
        typography: ("400", "0.01em", "1.8"),
        emotion: emotion(0.0, 0.6, 0.4, 0.0),
        category: Some(ContentCategory::Narrative),
        audience: "general",
    },
];

/// Every builtin preset, in registry order.
#[must_use]
pub fn builtin_presets() -> Vec<ThemePreset> {
    ENTRIES
        .iter()
        .map(|e| {
            let (weight, spacing, line_height) = e.typography;
            ThemePreset {
                name: e.name.to_string(),
                description: e.description.to_string(),
                colors: scheme(e.colors),
                effects: e.effects,
                typography: typography(weight, spacing, line_height),
                compatibility: TemplateId::all(),
                affinity: Affinity {
                    emotion: e.emotion,
                    category: e.category,
                },
                audience: Some(e.audience.to_string()),
            }
        })
        .collect()
}

/// Names of the builtin presets, in registry order.
#[must_use]
pub fn builtin_names() -> Vec<&'static str> {
    ENTRIES.iter().map(|e| e.name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
