//! Theme-stage errors.

use aura_core::ValidationError;
use thiserror::Error;

/// A template identifier outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported template {0:?}: expected one of typewriter, railway, scroll")]
pub struct UnsupportedTemplateError(pub String);

/// Failure to resolve a theme for an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The explicitly requested theme is not in the registry.
    #[error("unknown theme {name:?}")]
    UnknownTheme { name: String },

    /// No preset is compatible with every requested template.
    #[error("no preset is compatible with the requested templates")]
    EmptyRegistry,

    /// The resolved parameters failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
