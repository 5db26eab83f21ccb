//! Per-run decoration settings.

use serde::{Deserialize, Serialize};

/// What the caller wants decorated, and how.
///
/// Deserializes from any serde format; omitted fields take the defaults
/// below.
///
/// | Field              | Default          |
/// |--------------------|------------------|
/// | `explicit_theme`   | none (automatic) |
/// | `target_templates` | `["typewriter"]` |
/// | `minify`           | `false`          |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationConfig {
    /// Skip analysis-driven selection and use this preset verbatim.
    pub explicit_theme: Option<String>,
    /// Template identifiers to emit blocks for.
    pub target_templates: Vec<String>,
    /// Also return the minified stylesheet.
    pub minify: bool,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            explicit_theme: None,
            target_templates: vec!["typewriter".to_string()],
            minify: false,
        }
    }
}

impl DecorationConfig {
    #[must_use]
    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.explicit_theme = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_templates = targets.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn minified(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }
}
