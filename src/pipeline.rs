//! The end-to-end decoration run.

use aura_analyze::{ContentAnalyzer, TextAnalysis};
use aura_css::{DecorationManifest, generate};
use aura_theme::{PresetRegistry, ResolvedTheme, ThemeQuery, parse_targets, resolve};
use serde::Serialize;
use tracing::debug;

use crate::config::DecorationConfig;
use crate::error::DecorateError;

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decoration {
    pub analysis: TextAnalysis,
    pub theme: ResolvedTheme,
    /// Readable stylesheet.
    pub css: String,
    /// Present when the config asked for it.
    pub minified_css: Option<String>,
    pub manifest: DecorationManifest,
}

/// Analyze `text`, resolve a theme from `registry` and emit its CSS.
///
/// Target templates are checked before any analysis runs, so a bad config
/// fails without doing work.
///
/// # Errors
///
/// - [`DecorateError::UnsupportedTemplate`] for an unknown target.
/// - [`DecorateError::Theme`] for an unknown explicit theme or when no
///   preset covers the targets.
/// - [`DecorateError::Css`] if CSS generation rejects the theme.
pub fn decorate(
    text: &str,
    config: &DecorationConfig,
    registry: &PresetRegistry,
) -> Result<Decoration, DecorateError> {
    decorate_with(&ContentAnalyzer::default(), text, config, registry)
}

/// [`decorate`] with a caller-chosen set of signal sources.
///
/// # Errors
///
/// Same as [`decorate`].
pub fn decorate_with(
    analyzer: &ContentAnalyzer,
    text: &str,
    config: &DecorationConfig,
    registry: &PresetRegistry,
) -> Result<Decoration, DecorateError> {
    let targets = parse_targets(&config.target_templates)?;

    let analysis = analyzer.analyze(text);

    let mut query = ThemeQuery::new(&targets);
    if let Some(name) = config.explicit_theme.as_deref() {
        query = query.with_explicit(name);
    }
    let theme = resolve(&analysis, registry, &query)?;
    debug!(provenance = ?theme.provenance(), "resolved theme");

    let generated = generate(&theme, targets.iter().map(|t| t.name()))?;

    Ok(Decoration {
        analysis,
        theme,
        css: generated.css,
        minified_css: config.minify.then_some(generated.minified),
        manifest: generated.manifest,
    })
}
