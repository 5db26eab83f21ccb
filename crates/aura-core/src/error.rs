//! Validation errors raised while constructing pipeline values.

use thiserror::Error;

/// A value failed a structural check.
///
/// Always surfaced to the caller; nothing in the pipeline substitutes a
/// default once construction of a theme has been attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A color field is not a `#RRGGBB` string.
    #[error("invalid hex color {value:?}: expected #RRGGBB")]
    InvalidHex { value: String },

    /// An effect parameter is negative, NaN or infinite.
    #[error("effect parameter `{field}` must be a finite value >= 0, got {value}")]
    NegativeEffect { field: &'static str, value: String },

    /// Gradient angle outside 0..=360 degrees.
    #[error("gradient angle must be within 0..=360 degrees, got {value}")]
    AngleOutOfRange { value: String },

    /// Emotion name outside the fixed emotion set.
    #[error("unknown emotion category {0:?}")]
    UnknownEmotion(String),

    /// Content category name outside the fixed category set.
    #[error("unknown content category {0:?}")]
    UnknownCategory(String),

    /// Two presets in one registry share a name.
    #[error("duplicate preset name {0:?}")]
    DuplicatePreset(String),

    /// An emotion affinity score outside [0, 1].
    #[error("affinity score for `{emotion}` must be within [0, 1], got {value}")]
    AffinityOutOfRange { emotion: &'static str, value: String },
}
