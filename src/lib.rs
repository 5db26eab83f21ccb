// SPDX-License-Identifier: MIT
//
// aura: text-driven CSS decoration for animated-text documents.
//
// This crate wires the pipeline stages together:
//
//   aura-analyze → emotion, content category, reading difficulty
//   aura-theme   → preset registry, distance, blending, resolution
//   aura-css     → stylesheet emission, minifier, manifest
//
// One run flows strictly left to right:
//
//   text ──analyze──▶ TextAnalysis ──resolve──▶ ResolvedTheme ──generate──▶ CSS
//                                      ▲
//                          PresetRegistry (borrowed)
//
// Nothing here touches the filesystem: reading theme files, writing the
// generated CSS and injecting it into HTML belong to the caller.

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod pipeline;

pub use config::DecorationConfig;
pub use error::DecorateError;
pub use fingerprint::fingerprint;
pub use pipeline::{Decoration, decorate, decorate_with};

pub use aura_analyze::{ContentAnalyzer, TextAnalysis, analyze};
pub use aura_css::{DecorationManifest, GeneratedCss, minify, parse_stylesheet};
pub use aura_theme::{PresetRegistry, PresetSpec, ResolvedTheme, TemplateId};
