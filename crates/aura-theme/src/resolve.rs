//! Theme resolution: analysis + registry + query → one parameter set.

use aura_analyze::TextAnalysis;
use aura_core::ValidationError;
use serde::Serialize;
use tracing::{debug, warn};

use crate::blend::{blend, blend_weight, distance};
use crate::error::ThemeError;
use crate::preset::{ColorScheme, EffectParameters, ThemePreset, TypographyHints};
use crate::registry::PresetRegistry;
use crate::template::TemplateSet;

// ---------------------------------------------------------------------------
// Provenance
// ---------------------------------------------------------------------------

/// Where a resolved theme's values came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Provenance {
    /// The caller named the preset.
    ExplicitOverride { name: String },
    /// Only one compatible preset existed.
    Single { name: String },
    /// The two closest presets, `weight` being the share of `primary`.
    Blended {
        primary: String,
        secondary: String,
        weight: f64,
    },
}

// ---------------------------------------------------------------------------
// ResolvedTheme
// ---------------------------------------------------------------------------

/// The concrete parameters handed to CSS generation. Validated on
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTheme {
    colors: ColorScheme,
    effects: EffectParameters,
    typography: TypographyHints,
    provenance: Provenance,
}

impl ResolvedTheme {
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in `effects`.
    pub fn new(
        colors: ColorScheme,
        effects: EffectParameters,
        typography: TypographyHints,
        provenance: Provenance,
    ) -> Result<Self, ValidationError> {
        effects.validate()?;
        Ok(Self {
            colors,
            effects,
            typography,
            provenance,
        })
    }

    fn from_preset(preset: &ThemePreset, provenance: Provenance) -> Result<Self, ValidationError> {
        Self::new(
            preset.colors,
            preset.effects,
            preset.typography.clone(),
            provenance,
        )
    }

    #[must_use]
    pub const fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    #[must_use]
    pub const fn effects(&self) -> &EffectParameters {
        &self.effects
    }

    #[must_use]
    pub const fn typography(&self) -> &TypographyHints {
        &self.typography
    }

    #[must_use]
    pub const fn provenance(&self) -> &Provenance {
        &self.provenance
    }
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

/// Caller choices that steer resolution.
#[derive(Debug, Clone, Copy)]
pub struct ThemeQuery<'a> {
    pub explicit_theme: Option<&'a str>,
    pub targets: &'a TemplateSet,
}

impl<'a> ThemeQuery<'a> {
    #[must_use]
    pub const fn new(targets: &'a TemplateSet) -> Self {
        Self {
            explicit_theme: None,
            targets,
        }
    }

    #[must_use]
    pub const fn with_explicit(mut self, name: &'a str) -> Self {
        self.explicit_theme = Some(name);
        self
    }
}

/// Pick or blend the preset that best fits `analysis`.
///
/// An explicit theme wins outright, with no blending and no fallback.
/// Otherwise the two presets nearest in signal space among those
/// compatible with every target are blended; ties keep registry order.
///
/// # Errors
///
/// - [`ThemeError::UnknownTheme`] if the explicit theme is not registered.
/// - [`ThemeError::EmptyRegistry`] if no preset covers every target.
/// - [`ThemeError::Validation`] if the result fails validation.
pub fn resolve(
    analysis: &TextAnalysis,
    registry: &PresetRegistry,
    query: &ThemeQuery<'_>,
) -> Result<ResolvedTheme, ThemeError> {
    if let Some(name) = query.explicit_theme {
        let preset = registry.get(name).ok_or_else(|| ThemeError::UnknownTheme {
            name: name.to_string(),
        })?;
        for target in query.targets.difference(&preset.compatibility) {
            warn!(
                theme = name,
                template = target.name(),
                "explicit theme does not declare template compatibility"
            );
        }
        debug!(theme = name, "using explicit theme");
        let provenance = Provenance::ExplicitOverride {
            name: preset.name.clone(),
        };
        return Ok(ResolvedTheme::from_preset(preset, provenance)?);
    }

    let mut ranked: Vec<(&ThemePreset, f64)> = registry
        .iter()
        .filter(|p| p.is_compatible_with(query.targets))
        .map(|p| (p, distance(analysis, p)))
        .collect();
    // Stable sort: equal distances keep registry order.
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let theme = match ranked.as_slice() {
        [] => return Err(ThemeError::EmptyRegistry),
        [(only, d)] => {
            debug!(theme = %only.name, distance = d, "single compatible preset");
            ResolvedTheme::from_preset(
                only,
                Provenance::Single {
                    name: only.name.clone(),
                },
            )?
        }
        [(a, da), (b, db), ..] => {
            let w = blend_weight(*da, *db);
            debug!(primary = %a.name, secondary = %b.name, weight = w, "blending presets");
            blend(a, b, w)?
        }
    };
    Ok(theme)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::PresetSpec;
    use crate::template::TemplateId;
    use aura_analyze::{ContentCategory, EmotionVector, analyze};
    use pretty_assertions::assert_eq;

    fn typewriter() -> TemplateSet {
        [TemplateId::Typewriter].into_iter().collect()
    }

    fn spec(name: &str, compat: &str, affinity: &str) -> PresetSpec {
        let doc = format!(
            r##"
            name = "{name}"
            compatibility = [{compat}]
            [colors]
            primary_start = "#111111"
            primary_end = "#222222"
            background_start = "#000000"
            background_end = "#333333"
            accent_color = "#444444"
            glow_color = "#555555"
            [affinity.emotion]
            {affinity}
            "##
        );
        toml::from_str(&doc).unwrap()
    }

    #[test]
    fn explicit_theme_is_used_verbatim() {
        let reg = PresetRegistry::builtin();
        let targets = typewriter();
        let query = ThemeQuery::new(&targets).with_explicit("emotional_serene");
        let theme = resolve(&analyze("I am thrilled!"), &reg, &query).unwrap();
        let serene = reg.get("emotional_serene").unwrap();
        assert_eq!(*theme.colors(), serene.colors);
        assert_eq!(*theme.effects(), serene.effects);
        assert_eq!(
            *theme.provenance(),
            Provenance::ExplicitOverride { name: "emotional_serene".into() }
        );
    }

    #[test]
    fn unknown_explicit_theme_fails() {
        let reg = PresetRegistry::builtin();
        let targets = typewriter();
        let query = ThemeQuery::new(&targets).with_explicit("neon");
        assert_eq!(
            resolve(&analyze("text"), &reg, &query),
            Err(ThemeError::UnknownTheme { name: "neon".into() })
        );
    }

    #[test]
    fn explicit_theme_ignores_compatibility() {
        let reg = PresetRegistry::from_specs([spec("solo", "\"scroll\"", "")]).unwrap();
        let targets = typewriter();
        let query = ThemeQuery::new(&targets).with_explicit("solo");
        assert!(resolve(&analyze("text"), &reg, &query).is_ok());
    }

    #[test]
    fn no_compatible_preset_is_empty_registry() {
        let reg = PresetRegistry::from_specs([spec("solo", "\"scroll\"", "")]).unwrap();
        let targets = typewriter();
        assert_eq!(
            resolve(&analyze("text"), &reg, &ThemeQuery::new(&targets)),
            Err(ThemeError::EmptyRegistry)
        );
        let empty = PresetRegistry::new(Vec::new()).unwrap();
        assert_eq!(
            resolve(&analyze("text"), &empty, &ThemeQuery::new(&targets)),
            Err(ThemeError::EmptyRegistry)
        );
    }

    #[test]
    fn single_compatible_preset_is_used_directly() {
        let reg = PresetRegistry::from_specs([
            spec("rail", "\"railway\"", ""),
            spec("type", "\"typewriter\", \"railway\"", ""),
        ])
        .unwrap();
        let targets = typewriter();
        let theme = resolve(&analyze("text"), &reg, &ThemeQuery::new(&targets)).unwrap();
        assert_eq!(*theme.provenance(), Provenance::Single { name: "type".into() });
    }

    #[test]
    fn closest_preset_is_primary() {
        let reg = PresetRegistry::from_specs([
            spec("calm", "\"typewriter\"", "neutral = 1.0"),
            spec("joy", "\"typewriter\"", "positive = 1.0"),
            spec("gloom", "\"typewriter\"", "negative = 1.0"),
        ])
        .unwrap();
        let targets = typewriter();
        let joyful = EmotionVector { positive: 0.9, ..EmotionVector::default() };
        let analysis = TextAnalysis::new(joyful, ContentCategory::Generic, 0.0).unwrap();
        let theme = resolve(&analysis, &reg, &ThemeQuery::new(&targets)).unwrap();
        let Provenance::Blended { primary, weight, .. } = theme.provenance() else {
            panic!("expected a blend, got {:?}", theme.provenance());
        };
        assert_eq!(primary, "joy");
        assert!(*weight > 0.5);
    }

    #[test]
    fn equal_distances_keep_registry_order() {
        let reg = PresetRegistry::from_specs([
            spec("first", "\"typewriter\"", "positive = 1.0"),
            spec("second", "\"typewriter\"", "negative = 1.0"),
        ])
        .unwrap();
        let targets = typewriter();
        let analysis = TextAnalysis::new(EmotionVector::default(), ContentCategory::Generic, 0.0).unwrap();
        let theme = resolve(&analysis, &reg, &ThemeQuery::new(&targets)).unwrap();
        assert_eq!(
            *theme.provenance(),
            Provenance::Blended {
                primary: "first".into(),
                secondary: "second".into(),
                weight: 0.5,
            }
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let reg = PresetRegistry::builtin();
        let targets = TemplateId::all();
        let analysis = analyze("A gentle rain falls over the quiet forest.");
        let a = resolve(&analysis, &reg, &ThemeQuery::new(&targets)).unwrap();
        let b = resolve(&analysis, &reg, &ThemeQuery::new(&targets)).unwrap();
        assert_eq!(a, b);
    }
}
