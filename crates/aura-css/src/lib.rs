//! # aura-css: decoration stylesheets from resolved themes
//!
//! ```text
//! ResolvedTheme + ["railway", ...]
//!     │
//!     ▼
//! emit.rs:        rule tree (:root, templates, emotion layers, pulse, a11y)
//!     │
//!     ├── stylesheet.rs   to_pretty()          → css
//!     │
//!     ▼
//! minify.rs:      parse.rs → merge adjacent → to_minified() → minified
//!     │
//!     ▼
//! manifest.rs:    custom properties, selectors, targets, byte counts
//! ```
//!
//! The emitted CSS only layers color, glow and animation onto the host
//! document's existing elements; it never touches layout.

pub mod emit;
pub mod error;
pub mod manifest;
pub mod minify;
pub mod parse;
pub mod stylesheet;

pub use emit::{GeneratedCss, PROPERTY_PREFIX, build_stylesheet, generate};
pub use error::CssError;
pub use manifest::DecorationManifest;
pub use minify::minify;
pub use parse::parse_stylesheet;
pub use stylesheet::Stylesheet;
