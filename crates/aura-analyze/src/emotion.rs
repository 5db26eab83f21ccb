//! Fixed signal vocabularies: emotions, content categories, emotion vectors.

use std::fmt;
use std::str::FromStr;

use aura_core::ValidationError;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Emotion
// ---------------------------------------------------------------------------

/// One axis of the emotion vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Positive,
    Negative,
    Neutral,
    Excited,
}

impl Emotion {
    /// All emotions in field order.
    pub const ALL: [Self; 4] = [Self::Positive, Self::Negative, Self::Neutral, Self::Excited];

    /// Tie-break order for the dominant emotion, strongest claim first.
    pub const PRIORITY: [Self; 4] = [Self::Excited, Self::Positive, Self::Negative, Self::Neutral];

    /// Lowercase identifier, as used in CSS attribute selectors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Excited => "excited",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Emotion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| ValidationError::UnknownEmotion(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ContentCategory
// ---------------------------------------------------------------------------

/// What the text is about, as far as keyword matching can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Technology,
    Music,
    Nature,
    Learning,
    Narrative,
    /// No category keyword matched.
    Generic,
}

impl ContentCategory {
    /// Every category, `Generic` last.
    pub const ALL: [Self; 6] = [
        Self::Technology,
        Self::Music,
        Self::Nature,
        Self::Learning,
        Self::Narrative,
        Self::Generic,
    ];

    /// Keyword-bearing categories in tie-break order.
    pub const PRIORITY: [Self; 5] = [
        Self::Technology,
        Self::Music,
        Self::Nature,
        Self::Learning,
        Self::Narrative,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Music => "music",
            Self::Nature => "nature",
            Self::Learning => "learning",
            Self::Narrative => "narrative",
            Self::Generic => "generic",
        }
    }

    /// Reading-pace multiplier relative to plain prose.
    #[must_use]
    pub const fn reading_speed_factor(self) -> f64 {
        match self {
            Self::Technology => 0.7,
            Self::Learning => 0.8,
            Self::Narrative | Self::Generic => 1.0,
            Self::Nature => 1.1,
            Self::Music => 1.2,
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// EmotionVector
// ---------------------------------------------------------------------------

/// Scores on the four emotion axes, each in [0, 1].
///
/// Scores are independent: they are not required to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionVector {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub excited: f64,
}

impl EmotionVector {
    /// The vector reported for text with nothing to score.
    pub const NEUTRAL: Self = Self {
        positive: 0.0,
        negative: 0.0,
        neutral: 1.0,
        excited: 0.0,
    };

    #[must_use]
    pub const fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Positive => self.positive,
            Emotion::Negative => self.negative,
            Emotion::Neutral => self.neutral,
            Emotion::Excited => self.excited,
        }
    }

    pub(crate) fn set(&mut self, emotion: Emotion, value: f64) {
        match emotion {
            Emotion::Positive => self.positive = value,
            Emotion::Negative => self.negative = value,
            Emotion::Neutral => self.neutral = value,
            Emotion::Excited => self.excited = value,
        }
    }

    /// `(emotion, score)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.into_iter().map(|e| (e, self.get(e)))
    }

    /// Euclidean distance over the four axes.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        self.iter()
            .map(|(e, v)| {
                let d = v - other.get(e);
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Highest-scoring emotion; ties resolved by [`Emotion::PRIORITY`].
    #[must_use]
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::PRIORITY[0];
        for e in Emotion::PRIORITY {
            if self.get(e) > self.get(best) {
                best = e;
            }
        }
        best
    }

    /// Check every score is finite and within [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AffinityOutOfRange`] for the first bad axis.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (e, v) in self.iter() {
            if !(0.0..=1.0).contains(&v) {
                return Err(ValidationError::AffinityOutOfRange {
                    emotion: e.name(),
                    value: v.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
