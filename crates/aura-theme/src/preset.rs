//! Preset parameter sets and their serde-facing spec form.
//!
//! | Field             | Default    |
//! |-------------------|------------|
//! | `glow_intensity`  | 0.3        |
//! | `animation_speed` | 1.0        |
//! | `blur_radius`     | 0.0        |
//! | `pulse_enabled`   | false      |
//! | `gradient_angle`  | 45         |
//! | `font_weight`     | `normal`   |
//! | `letter_spacing`  | `normal`   |
//! | `line_height`     | `1.6`      |
//! | `compatibility`   | every template |
//!
//! The table is the only place defaults live; [`PresetSpec`] fields that are
//! left out of a configuration document fall back to it.

use aura_analyze::{ContentCategory, EmotionVector};
use aura_core::{HexColor, ValidationError};
use serde::{Deserialize, Serialize};

use crate::template::{TemplateId, TemplateSet};

// ---------------------------------------------------------------------------
// ColorScheme
// ---------------------------------------------------------------------------

/// The six colors every decoration is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary_start: HexColor,
    pub primary_end: HexColor,
    pub background_start: HexColor,
    pub background_end: HexColor,
    pub accent_color: HexColor,
    pub glow_color: HexColor,
}

impl ColorScheme {
    /// Foreground candidates for a solid high-contrast text color.
    #[must_use]
    pub const fn text_candidates(&self) -> [HexColor; 4] {
        [
            self.primary_start,
            self.primary_end,
            self.accent_color,
            self.glow_color,
        ]
    }

    /// Per-channel blend keeping fraction `w` of `self`.
    #[must_use]
    pub fn blend(&self, other: &Self, w: f64) -> Self {
        Self {
            primary_start: self.primary_start.blend(other.primary_start, w),
            primary_end: self.primary_end.blend(other.primary_end, w),
            background_start: self.background_start.blend(other.background_start, w),
            background_end: self.background_end.blend(other.background_end, w),
            accent_color: self.accent_color.blend(other.accent_color, w),
            glow_color: self.glow_color.blend(other.glow_color, w),
        }
    }
}

// ---------------------------------------------------------------------------
// EffectParameters
// ---------------------------------------------------------------------------

/// Glow, animation and gradient settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectParameters {
    pub glow_intensity: f64,
    /// Animation cycles per second; 0 disables motion.
    pub animation_speed: f64,
    /// Pixels.
    pub blur_radius: f64,
    pub pulse_enabled: bool,
    /// Degrees, 0..=360.
    pub gradient_angle: f64,
}

impl Default for EffectParameters {
    fn default() -> Self {
        Self {
            glow_intensity: 0.3,
            animation_speed: 1.0,
            blur_radius: 0.0,
            pulse_enabled: false,
            gradient_angle: 45.0,
        }
    }
}

impl EffectParameters {
    /// Check every float is finite, non-negative and the angle is in range.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NegativeEffect`] or
    /// [`ValidationError::AngleOutOfRange`] for the first bad field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("glow_intensity", self.glow_intensity),
            ("animation_speed", self.animation_speed),
            ("blur_radius", self.blur_radius),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::NegativeEffect {
                    field,
                    value: value.to_string(),
                });
            }
        }
        if !(0.0..=360.0).contains(&self.gradient_angle) {
            return Err(ValidationError::AngleOutOfRange {
                value: self.gradient_angle.to_string(),
            });
        }
        Ok(())
    }

    /// Linear blend of the float fields keeping fraction `w` of `self`.
    ///
    /// Each result stays within the closed range of its two inputs, so
    /// blending two valid parameter sets always validates. `pulse_enabled`
    /// is not interpolated: it comes from `self` when `w >= 0.5` and from
    /// `other` otherwise.
    #[must_use]
    pub fn blend(&self, other: &Self, w: f64) -> Self {
        // max/min rather than clamp: clamp panics on NaN bounds.
        let lerp = |a: f64, b: f64| a.mul_add(w, b * (1.0 - w)).max(a.min(b)).min(a.max(b));
        Self {
            glow_intensity: lerp(self.glow_intensity, other.glow_intensity),
            animation_speed: lerp(self.animation_speed, other.animation_speed),
            blur_radius: lerp(self.blur_radius, other.blur_radius),
            pulse_enabled: if w >= 0.5 { self.pulse_enabled } else { other.pulse_enabled },
            gradient_angle: lerp(self.gradient_angle, other.gradient_angle),
        }
    }
}

// ---------------------------------------------------------------------------
// TypographyHints
// ---------------------------------------------------------------------------

/// Advisory typography values, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyHints {
    pub font_weight: String,
    pub letter_spacing: String,
    pub line_height: String,
}

impl Default for TypographyHints {
    fn default() -> Self {
        Self {
            font_weight: "normal".into(),
            letter_spacing: "normal".into(),
            line_height: "1.6".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Affinity
// ---------------------------------------------------------------------------

/// Where in signal space a preset fits best.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Affinity {
    pub emotion: EmotionVector,
    /// `None` means the preset suits any category.
    pub category: Option<ContentCategory>,
}

// ---------------------------------------------------------------------------
// ThemePreset
// ---------------------------------------------------------------------------

/// A named, validated parameter set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemePreset {
    pub name: String,
    pub description: String,
    pub colors: ColorScheme,
    pub effects: EffectParameters,
    pub typography: TypographyHints,
    pub compatibility: TemplateSet,
    pub affinity: Affinity,
    /// Carried through for collaborators; resolution ignores it.
    pub audience: Option<String>,
}

impl ThemePreset {
    /// Check effect ranges and affinity scores.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.effects.validate()?;
        self.affinity.emotion.validate()
    }

    #[must_use]
    pub fn is_compatible_with(&self, targets: &TemplateSet) -> bool {
        targets.is_subset(&self.compatibility)
    }
}

impl TryFrom<PresetSpec> for ThemePreset {
    type Error = ValidationError;

    fn try_from(spec: PresetSpec) -> Result<Self, Self::Error> {
        let preset = Self {
            name: spec.name,
            description: spec.description,
            colors: spec.colors,
            effects: spec.effects,
            typography: spec.typography,
            compatibility: spec.compatibility.unwrap_or_else(TemplateId::all),
            affinity: spec.affinity,
            audience: spec.audience,
        };
        preset.validate()?;
        Ok(preset)
    }
}

// ---------------------------------------------------------------------------
// PresetSpec
// ---------------------------------------------------------------------------

/// A preset as authored in structured configuration.
///
/// Colors and the name are required; everything else defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PresetSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub colors: ColorScheme,
    #[serde(default)]
    pub effects: EffectParameters,
    #[serde(default)]
    pub typography: TypographyHints,
    #[serde(default)]
    pub compatibility: Option<TemplateSet>,
    #[serde(default)]
    pub affinity: Affinity,
    #[serde(default)]
    pub audience: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
