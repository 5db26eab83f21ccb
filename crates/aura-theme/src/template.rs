//! Animated-text templates a decoration can target.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedTemplateError;

/// A set of target templates, iterated in emission order.
pub type TemplateSet = BTreeSet<TemplateId>;

/// One of the externally-generated animated-text document layouts.
///
/// Variant order is the CSS emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Typewriter,
    Railway,
    Scroll,
}

impl TemplateId {
    pub const ALL: [Self; 3] = [Self::Typewriter, Self::Railway, Self::Scroll];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Typewriter => "typewriter",
            Self::Railway => "railway",
            Self::Scroll => "scroll",
        }
    }

    /// Class selector of the element the template animates.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Typewriter => ".typewriter-char",
            Self::Railway => ".railway-line",
            Self::Scroll => ".scroll-line",
        }
    }

    /// Every template, as a set.
    #[must_use]
    pub fn all() -> TemplateSet {
        Self::ALL.into_iter().collect()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateId {
    type Err = UnsupportedTemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnsupportedTemplateError(s.to_string()))
    }
}

/// Parse template identifiers, failing on the first unknown one.
///
/// Duplicates collapse; the result iterates in emission order.
///
/// # Errors
///
/// Returns [`UnsupportedTemplateError`] naming the first unrecognized
/// identifier.
pub fn parse_targets<I, S>(targets: I) -> Result<TemplateSet, UnsupportedTemplateError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    targets.into_iter().map(|t| t.as_ref().parse()).collect()
}
