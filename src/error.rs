//! Pipeline-level error.

use aura_css::CssError;
use aura_theme::{ThemeError, UnsupportedTemplateError};
use thiserror::Error;

/// Anything that stops [`decorate`](crate::decorate) from producing output.
///
/// No partial result is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecorateError {
    #[error(transparent)]
    UnsupportedTemplate(#[from] UnsupportedTemplateError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Css(#[from] CssError),
}
