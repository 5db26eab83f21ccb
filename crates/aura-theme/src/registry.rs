//! Ordered, immutable collection of presets.

use std::collections::HashSet;

use aura_core::ValidationError;

use crate::builtin::builtin_presets;
use crate::preset::{PresetSpec, ThemePreset};

/// Name-addressable presets in declaration order.
///
/// The order matters: it breaks distance ties during resolution. A registry
/// is built once by the caller and only ever borrowed by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetRegistry {
    presets: Vec<ThemePreset>,
}

impl PresetRegistry {
    /// Build a registry, validating every preset.
    ///
    /// # Errors
    ///
    /// [`ValidationError::DuplicatePreset`] when two presets share a name,
    /// or the first validation failure of any preset.
    pub fn new(presets: Vec<ThemePreset>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(presets.len());
        for preset in &presets {
            preset.validate()?;
            if !seen.insert(preset.name.as_str()) {
                return Err(ValidationError::DuplicatePreset(preset.name.clone()));
            }
        }
        Ok(Self { presets })
    }

    /// Build a registry from configuration-level specs.
    ///
    /// # Errors
    ///
    /// Same as [`PresetRegistry::new`].
    pub fn from_specs<I>(specs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = PresetSpec>,
    {
        let presets = specs
            .into_iter()
            .map(ThemePreset::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(presets)
    }

    /// The shipped designer palettes.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ThemePreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Presets in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ThemePreset> {
        self.presets.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl<'a> IntoIterator for &'a PresetRegistry {
    type Item = &'a ThemePreset;
    type IntoIter = std::slice::Iter<'a, ThemePreset>;

    fn into_iter(self) -> Self::IntoIter {
        self.presets.iter()
    }
}
