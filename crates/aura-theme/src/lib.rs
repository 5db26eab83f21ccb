//! # aura-theme: from content signals to a concrete decoration theme
//!
//! A [`PresetRegistry`] holds named parameter sets (colors, effects,
//! typography) together with an affinity: the point in signal space each
//! preset suits best. [`resolve`] picks the explicit theme when one is
//! named, otherwise blends the two compatible presets nearest to the
//! analysis.
//!
//! # Architecture
//!
//! ```text
//! TextAnalysis + ThemeQuery { explicit_theme, targets }
//!     │
//!     ▼
//! registry.rs:  filter presets compatible with every target
//!     │
//!     ▼
//! blend.rs:     distance = emotion Euclidean ⊕ category penalty
//!     │         two nearest → per-channel / linear blend
//!     ▼
//! resolve.rs:   ResolvedTheme { colors, effects, typography, provenance }
//! ```

pub mod blend;
pub mod builtin;
pub mod error;
pub mod preset;
pub mod registry;
pub mod resolve;
pub mod template;

pub use error::{ThemeError, UnsupportedTemplateError};
pub use preset::{Affinity, ColorScheme, EffectParameters, PresetSpec, ThemePreset, TypographyHints};
pub use registry::PresetRegistry;
pub use resolve::{Provenance, ResolvedTheme, ThemeQuery, resolve};
pub use template::{TemplateId, TemplateSet, parse_targets};
