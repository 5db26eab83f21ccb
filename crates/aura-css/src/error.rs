//! CSS-stage errors.

use aura_core::ValidationError;
use aura_theme::UnsupportedTemplateError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssError {
    /// A requested target is not a known template.
    #[error(transparent)]
    UnsupportedTemplate(#[from] UnsupportedTemplateError),

    /// The theme handed in failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A pass-through value is empty or would break out of its declaration.
    #[error("value {value:?} for `{property}` is not a plain CSS value")]
    InvalidValue { property: String, value: String },

    /// Malformed stylesheet text. `offset` is a byte index into the input.
    #[error("css parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: &'static str },
}
