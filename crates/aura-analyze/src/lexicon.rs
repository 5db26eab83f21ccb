//! Trigger-term tables for emotion scoring and content classification.
//!
//! Every list is lowercase. Emotion terms must match a token exactly.
//! Category keywords of at least [`INFLECTION_MIN_LEN`] characters also
//! match when followed by one of [`INFLECTIONS`], so `jazz` catches `jazzy`
//! and `hero` catches `heroes`, but `tech` never catches `technique` and
//! `ai` never catches `aim`.

use crate::emotion::{ContentCategory, Emotion};

/// Shortest category keyword that may carry an inflection.
pub const INFLECTION_MIN_LEN: usize = 4;

/// Endings a category keyword may carry and still match.
pub const INFLECTIONS: &[&str] = &["s", "es", "y", "al", "ed", "er", "ers", "ing"];

const POSITIVE: &[&str] = &[
    "achievement", "amazing", "awesome", "beautiful", "brilliant", "celebrate",
    "cheerful", "delighted", "excellent", "fantastic", "glad", "good",
    "grateful", "great", "happy", "hope", "joy", "joyful", "laugh", "love",
    "lovely", "proud", "smile", "success", "victory", "wonderful",
];

const NEGATIVE: &[&str] = &[
    "afraid", "angry", "anxious", "awful", "bad", "cry", "despair",
    "disappointed", "fear", "furious", "grief", "hate", "heartbroken", "hurt",
    "lonely", "loss", "melancholy", "misery", "pain", "rage", "sad", "scared",
    "sorrow", "tears", "terrible", "terrified", "tragedy", "unhappy", "worried",
];

const EXCITED: &[&str] = &[
    "adrenaline", "breakthrough", "breathtaking", "dynamic", "eager",
    "ecstatic", "electric", "energetic", "enthusiastic", "excited", "exciting",
    "exhilarated", "incredible", "intense", "passionate", "pumped", "rush",
    "thrilled", "unbelievable", "vibrant", "wow",
];

const NEUTRAL: &[&str] = &[
    "average", "balanced", "calm", "fine", "moderate", "normal", "ok", "okay",
    "ordinary", "plain", "quiet", "regular", "serene", "simple", "standard",
    "steady", "tranquil", "typical", "usual",
];

const TECHNOLOGY: &[&str] = &[
    "ai", "algorithm", "api", "app", "code", "computer", "data", "database",
    "device", "digital", "internet", "network", "processor", "program",
    "programming", "robot", "server", "software", "tech", "technology",
];

const MUSIC: &[&str] = &[
    "album", "chord", "concert", "drum", "guitar", "jazz", "lyric", "melody",
    "music", "orchestra", "piano", "rhythm", "singer", "singing", "song",
    "symphony",
];

const NATURE: &[&str] = &[
    "animal", "bird", "earth", "flower", "forest", "garden", "lake", "leaf",
    "leaves", "meadow", "mountain", "nature", "ocean", "rain", "river", "sea",
    "sky", "sunset", "tree", "wildlife",
];

const LEARNING: &[&str] = &[
    "concept", "course", "education", "exercise", "explain", "homework",
    "knowledge", "learn", "lecture", "lesson", "school", "student", "studies",
    "study", "teach", "tutorial", "understand", "university",
];

const NARRATIVE: &[&str] = &[
    "adventure", "chapter", "character", "dragon", "hero", "journey",
    "kingdom", "legend", "once", "plot", "princess", "quest", "stories",
    "story", "tale", "village",
];

/// Exact-match terms for one emotion axis.
#[must_use]
pub const fn emotion_terms(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Positive => POSITIVE,
        Emotion::Negative => NEGATIVE,
        Emotion::Excited => EXCITED,
        Emotion::Neutral => NEUTRAL,
    }
}

/// Keywords for one content category (`Generic` has none).
#[must_use]
pub const fn category_keywords(category: ContentCategory) -> &'static [&'static str] {
    match category {
        ContentCategory::Technology => TECHNOLOGY,
        ContentCategory::Music => MUSIC,
        ContentCategory::Nature => NATURE,
        ContentCategory::Learning => LEARNING,
        ContentCategory::Narrative => NARRATIVE,
        ContentCategory::Generic => &[],
    }
}

/// Whether `token` triggers the category `keyword`.
#[must_use]
pub fn keyword_matches(token: &str, keyword: &str) -> bool {
    if token == keyword {
        return true;
    }
    if keyword.len() < INFLECTION_MIN_LEN {
        return false;
    }
    token
        .strip_prefix(keyword)
        .is_some_and(|rest| INFLECTIONS.contains(&rest))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
