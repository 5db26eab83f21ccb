//! The content analyzer and its immutable result.

use std::collections::BTreeSet;

use aura_core::ValidationError;
use serde::Serialize;
use tracing::debug;

use crate::document::Document;
use crate::emotion::{ContentCategory, Emotion, EmotionVector};
use crate::signal::{PartialAnalysis, SignalSource};

/// Baseline adult reading pace for plain prose, in words per minute.
pub const BASE_READING_WPM: f64 = 250.0;

// ---------------------------------------------------------------------------
// DifficultyLevel
// ---------------------------------------------------------------------------

/// Coarse band over `difficulty_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl DifficultyLevel {
    /// Band a score in [0, 1] into quarters.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 0.25 {
            Self::Easy
        } else if score < 0.5 {
            Self::Medium
        } else if score < 0.75 {
            Self::Hard
        } else {
            Self::Expert
        }
    }
}

// ---------------------------------------------------------------------------
// TextAnalysis
// ---------------------------------------------------------------------------

/// Everything the analyzer derived from one input text.
///
/// Produced once per text and never mutated; fields are read through
/// accessors so the range invariants hold for every instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    emotion_scores: EmotionVector,
    content_category: ContentCategory,
    difficulty_score: f64,
    keyword_hits: BTreeSet<String>,
    word_count: usize,
    sentence_count: usize,
}

impl TextAnalysis {
    /// Build an analysis from signals computed elsewhere.
    ///
    /// Word and sentence counts are zero and no keyword hits are recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AffinityOutOfRange`] if an emotion score or
    /// the difficulty score is outside [0, 1].
    pub fn new(
        emotion_scores: EmotionVector,
        content_category: ContentCategory,
        difficulty_score: f64,
    ) -> Result<Self, ValidationError> {
        emotion_scores.validate()?;
        if !(0.0..=1.0).contains(&difficulty_score) {
            return Err(ValidationError::AffinityOutOfRange {
                emotion: "difficulty",
                value: difficulty_score.to_string(),
            });
        }
        Ok(Self {
            emotion_scores,
            content_category,
            difficulty_score,
            keyword_hits: BTreeSet::new(),
            word_count: 0,
            sentence_count: 0,
        })
    }

    #[must_use]
    pub const fn emotion_scores(&self) -> &EmotionVector {
        &self.emotion_scores
    }

    #[must_use]
    pub const fn content_category(&self) -> ContentCategory {
        self.content_category
    }

    #[must_use]
    pub const fn difficulty_score(&self) -> f64 {
        self.difficulty_score
    }

    /// Matched trigger terms, sorted.
    #[must_use]
    pub const fn keyword_hits(&self) -> &BTreeSet<String> {
        &self.keyword_hits
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub const fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    #[must_use]
    pub fn dominant_emotion(&self) -> Emotion {
        self.emotion_scores.dominant()
    }

    #[must_use]
    pub fn difficulty_level(&self) -> DifficultyLevel {
        DifficultyLevel::from_score(self.difficulty_score)
    }

    /// Estimated reading pace: slower for dense or technical material.
    #[must_use]
    pub fn reading_speed_wpm(&self) -> f64 {
        let difficulty_factor = (-0.3f64).mul_add(self.difficulty_score, 1.0);
        BASE_READING_WPM * self.content_category.reading_speed_factor() * difficulty_factor
    }
}

// ---------------------------------------------------------------------------
// ContentAnalyzer
// ---------------------------------------------------------------------------

/// Folds an explicit, ordered list of signal sources over a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentAnalyzer {
    sources: Vec<SignalSource>,
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self {
            sources: SignalSource::DEFAULT_ORDER.to_vec(),
        }
    }
}

impl ContentAnalyzer {
    /// An analyzer running exactly `sources`, in order.
    #[must_use]
    pub const fn with_sources(sources: Vec<SignalSource>) -> Self {
        Self { sources }
    }

    #[must_use]
    pub fn sources(&self) -> &[SignalSource] {
        &self.sources
    }

    /// Analyze `text`. Never fails; empty text yields the neutral defaults.
    #[must_use]
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let doc = Document::parse(text);
        let mut partial = PartialAnalysis::default();
        for source in &self.sources {
            source.contribute(&doc, &mut partial);
        }

        let analysis = TextAnalysis {
            emotion_scores: partial.emotion_scores,
            content_category: partial.content_category,
            difficulty_score: partial.difficulty_score,
            keyword_hits: partial.keyword_hits,
            word_count: doc.word_count(),
            sentence_count: doc.sentence_count(),
        };

        debug!(
            words = analysis.word_count,
            sentences = analysis.sentence_count,
            category = analysis.content_category.name(),
            dominant = analysis.dominant_emotion().name(),
            difficulty = analysis.difficulty_score,
            "analyzed text"
        );

        analysis
    }
}

/// Analyze `text` with every signal source active.
#[must_use]
pub fn analyze(text: &str) -> TextAnalysis {
    ContentAnalyzer::default().analyze(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn empty_text_yields_neutral_defaults() {
        let a = analyze("");
        assert_eq!(a.content_category(), ContentCategory::Generic);
        assert!(a.difficulty_score().abs() < f64::EPSILON);
        assert_eq!(*a.emotion_scores(), EmotionVector::NEUTRAL);
        assert_eq!(a.dominant_emotion(), Emotion::Neutral);
        assert_eq!(a.word_count(), 0);
        assert!(a.keyword_hits().is_empty());
    }

    #[test]
    fn excited_breakthrough_is_generic_and_excited() {
        let a = analyze("I am so excited about this amazing breakthrough!");
        assert_eq!(a.content_category(), ContentCategory::Generic);
        assert_eq!(a.dominant_emotion(), Emotion::Excited);
        let scores = a.emotion_scores();
        for (_, v) in scores.iter() {
            assert!(scores.excited >= v);
        }
    }

    #[test]
    fn jazz_is_music() {
        let a = analyze("Late night jazz drifts through the city.");
        assert_eq!(a.content_category(), ContentCategory::Music);
        assert!(a.keyword_hits().contains("jazz"));
    }

    #[test]
    fn inactive_source_leaves_default() {
        let analyzer = ContentAnalyzer::with_sources(vec![SignalSource::CategoryKeywords]);
        let a = analyzer.analyze("I love this happy song");
        assert_eq!(a.content_category(), ContentCategory::Music);
        assert_eq!(*a.emotion_scores(), EmotionVector::NEUTRAL);
        assert!(a.difficulty_score().abs() < f64::EPSILON);
    }

    #[test]
    fn difficulty_bands() {
        assert_eq!(DifficultyLevel::from_score(0.0), DifficultyLevel::Easy);
        assert_eq!(DifficultyLevel::from_score(0.3), DifficultyLevel::Medium);
        assert_eq!(DifficultyLevel::from_score(0.5), DifficultyLevel::Hard);
        assert_eq!(DifficultyLevel::from_score(1.0), DifficultyLevel::Expert);
    }

    #[test]
    fn technology_reads_slower_than_music() {
        let tech = analyze("The server runs the database software.");
        let music = analyze("The singer hums a song.");
        assert!(tech.reading_speed_wpm() < music.reading_speed_wpm());
    }

    #[test]
    fn lookalike_words_stay_generic() {
        let a = analyze("Her technique hid the heroin.");
        assert_eq!(a.content_category(), ContentCategory::Generic);
        let b = analyze("Our heroes study technology.");
        assert_ne!(b.content_category(), ContentCategory::Generic);
    }

    #[test]
    fn new_validates_ranges() {
        assert!(TextAnalysis::new(EmotionVector::NEUTRAL, ContentCategory::Music, 0.4).is_ok());
        assert!(TextAnalysis::new(EmotionVector::NEUTRAL, ContentCategory::Music, 1.4).is_err());
        let bad = EmotionVector { negative: -0.1, ..EmotionVector::default() };
        assert!(TextAnalysis::new(bad, ContentCategory::Generic, 0.0).is_err());
    }

    proptest! {
        #[test]
        fn analysis_is_deterministic(text in ".{0,200}") {
            prop_assert_eq!(analyze(&text), analyze(&text));
        }

        #[test]
        fn scores_stay_in_unit_range(text in "[a-zA-Z .!?]{0,200}") {
            let a = analyze(&text);
            for (_, v) in a.emotion_scores().iter() {
                prop_assert!((0.0..=1.0).contains(&v));
            }
            prop_assert!((0.0..=1.0).contains(&a.difficulty_score()));
        }
    }
}
