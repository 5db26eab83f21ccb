//! Signal sources: the closed set of analyzers the pipeline folds over.
//!
//! Each source reads the shared [`Document`] and writes its contribution
//! into a [`PartialAnalysis`]. Sources are independent: a source that is not
//! in the active list simply leaves the neutral defaults in place.
//!
//! | Source               | Writes                                  |
//! |----------------------|-----------------------------------------|
//! | `EmotionLexicon`     | `emotion_scores`, emotion keyword hits  |
//! | `CategoryKeywords`   | `content_category`, category hits       |
//! | `ReadingDifficulty`  | `difficulty_score`                      |

use std::collections::BTreeSet;

use crate::document::Document;
use crate::emotion::{ContentCategory, Emotion, EmotionVector};
use crate::lexicon::{category_keywords, emotion_terms, keyword_matches};

/// Words-per-sentence at which the sentence component starts to rise.
const SENTENCE_LEN_FLOOR: f64 = 5.0;
/// Words-per-sentence range mapped onto [0, 1].
const SENTENCE_LEN_SPAN: f64 = 25.0;
/// Characters-per-word at which the word component starts to rise.
const WORD_LEN_FLOOR: f64 = 3.0;
/// Characters-per-word range mapped onto [0, 1].
const WORD_LEN_SPAN: f64 = 5.0;

// ---------------------------------------------------------------------------
// PartialAnalysis
// ---------------------------------------------------------------------------

/// Accumulator the sources write into. Starts at the neutral defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialAnalysis {
    pub emotion_scores: EmotionVector,
    pub content_category: ContentCategory,
    pub difficulty_score: f64,
    pub keyword_hits: BTreeSet<String>,
}

impl Default for PartialAnalysis {
    fn default() -> Self {
        Self {
            emotion_scores: EmotionVector::NEUTRAL,
            content_category: ContentCategory::Generic,
            difficulty_score: 0.0,
            keyword_hits: BTreeSet::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// SignalSource
// ---------------------------------------------------------------------------

/// One content signal the analyzer can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalSource {
    /// Lexicon hits per emotion, normalized by token count.
    EmotionLexicon,
    /// Keyword hits per content category; most hits wins.
    CategoryKeywords,
    /// Sentence and word length mapped onto [0, 1].
    ReadingDifficulty,
}

impl SignalSource {
    /// The default active list, in fold order.
    pub const DEFAULT_ORDER: [Self; 3] = [
        Self::EmotionLexicon,
        Self::CategoryKeywords,
        Self::ReadingDifficulty,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EmotionLexicon => "emotion-lexicon",
            Self::CategoryKeywords => "category-keywords",
            Self::ReadingDifficulty => "reading-difficulty",
        }
    }

    /// Add this source's contribution for `doc` into `partial`.
    ///
    /// Empty documents contribute nothing, which keeps the defaults.
    pub fn contribute(self, doc: &Document, partial: &mut PartialAnalysis) {
        if doc.is_empty() {
            return;
        }
        match self {
            Self::EmotionLexicon => score_emotions(doc, partial),
            Self::CategoryKeywords => classify(doc, partial),
            Self::ReadingDifficulty => {
                partial.difficulty_score = difficulty(doc);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Emotion lexicon
// ---------------------------------------------------------------------------

#[allow(clippy::cast_precision_loss)]
fn score_emotions(doc: &Document, partial: &mut PartialAnalysis) {
    let total = doc.word_count() as f64;
    let mut scores = EmotionVector::default();
    let mut any_hit = false;

    for emotion in Emotion::ALL {
        let terms = emotion_terms(emotion);
        let mut hits = 0usize;
        for token in doc.tokens() {
            if terms.contains(&token.as_str()) {
                hits += 1;
                partial.keyword_hits.insert(token.clone());
            }
        }
        any_hit |= hits > 0;
        scores.set(emotion, (hits as f64 / total).clamp(0.0, 1.0));
    }

    partial.emotion_scores = if any_hit { scores } else { EmotionVector::NEUTRAL };
}

// ---------------------------------------------------------------------------
// Category keywords
// ---------------------------------------------------------------------------

fn classify(doc: &Document, partial: &mut PartialAnalysis) {
    let mut best = ContentCategory::Generic;
    let mut best_hits = 0usize;

    for category in ContentCategory::PRIORITY {
        let keywords = category_keywords(category);
        let mut hits = 0usize;
        for token in doc.tokens() {
            if let Some(kw) = keywords.iter().find(|kw| keyword_matches(token, kw)) {
                hits += 1;
                partial.keyword_hits.insert((*kw).to_string());
            }
        }
        // Strictly greater: earlier categories win ties.
        if hits > best_hits {
            best = category;
            best_hits = hits;
        }
    }

    partial.content_category = best;
}

// ---------------------------------------------------------------------------
// Reading difficulty
// ---------------------------------------------------------------------------

fn difficulty(doc: &Document) -> f64 {
    let sentence = ((doc.avg_sentence_len() - SENTENCE_LEN_FLOOR) / SENTENCE_LEN_SPAN).clamp(0.0, 1.0);
    let word = ((doc.avg_word_len() - WORD_LEN_FLOOR) / WORD_LEN_SPAN).clamp(0.0, 1.0);
    0.5f64.mul_add(sentence, 0.5 * word).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
