//! # aura-analyze: deterministic content signals from raw text
//!
//! Turns a piece of text into the three signals the theme stage consumes:
//! an emotion vector, a content category and a reading-difficulty score.
//! Everything is lexicon and rule based, so the same text always produces
//! the same [`TextAnalysis`].
//!
//! # Architecture
//!
//! ```text
//! text
//!   │
//!   ▼
//! document.rs:  unicode word tokens (lower-cased) + sentence count
//!   │
//!   ▼
//! signal.rs:    fold each active SignalSource into a PartialAnalysis
//!   │             EmotionLexicon     → emotion_scores   (lexicon.rs)
//!   │             CategoryKeywords   → content_category (lexicon.rs)
//!   │             ReadingDifficulty  → difficulty_score
//!   ▼
//! analyzer.rs:  freeze into TextAnalysis
//! ```

pub mod analyzer;
pub mod document;
pub mod emotion;
pub mod lexicon;
pub mod signal;

pub use analyzer::{ContentAnalyzer, DifficultyLevel, TextAnalysis, analyze};
pub use emotion::{ContentCategory, Emotion, EmotionVector};
pub use signal::SignalSource;
