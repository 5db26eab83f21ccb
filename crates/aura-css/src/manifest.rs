//! Summary of what a generation run emitted.

use aura_theme::{TemplateId, TemplateSet};
use serde::Serialize;

use crate::stylesheet::Stylesheet;

/// What was emitted, for collaborators that inject or cache the CSS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecorationManifest {
    /// `--decoration-*` names, in emission order.
    pub custom_properties: Vec<String>,
    /// Selectors in emission order, without duplicates or keyframe stops.
    pub selectors: Vec<String>,
    pub targets: Vec<TemplateId>,
    pub full_bytes: usize,
    pub minified_bytes: usize,
}

impl DecorationManifest {
    #[must_use]
    pub fn new(sheet: &Stylesheet, targets: &TemplateSet, full_bytes: usize, minified_bytes: usize) -> Self {
        Self {
            custom_properties: sheet
                .custom_properties()
                .into_iter()
                .map(|(name, _)| name)
                .collect(),
            selectors: sheet.selectors(),
            targets: targets.iter().copied().collect(),
            full_bytes,
            minified_bytes,
        }
    }
}
