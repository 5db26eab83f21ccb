//! # aura-core: color primitives shared by every pipeline stage
//!
//! The decoration pipeline only ever exchanges colors as 6-digit sRGB hex
//! values, so this crate keeps the color model deliberately small:
//!
//! ```text
//! "#4A90E2" ──parse──▶ HexColor { r, g, b }
//!                         │
//!                         ├── blend(other, w)   per-channel interpolation
//!                         ├── to_hex()          "#4a90e2"
//!                         └── contrast.rs       WCAG luminance / ratio
//! ```
//!
//! Anything that fails a structural check (bad hex, negative effect
//! parameter, unknown category name) is reported as a [`ValidationError`].

pub mod color;
pub mod contrast;
pub mod error;

pub use color::HexColor;
pub use error::ValidationError;
