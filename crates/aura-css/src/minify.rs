//! Cascade-preserving minification.

use crate::error::CssError;
use crate::parse::parse_stylesheet;
use crate::stylesheet::{AtBody, AtRule, Rule};

/// Minify stylesheet text.
///
/// Comments and optional whitespace go, the last semicolon of each block
/// goes, adjacent rules with identical selector lists merge, and adjacent
/// `@media` blocks with identical preludes merge. Merged declarations keep
/// their source order, so the cascade is unchanged.
///
/// # Errors
///
/// [`CssError::Parse`] if `css` is malformed.
pub fn minify(css: &str) -> Result<String, CssError> {
    let mut sheet = parse_stylesheet(css)?;
    merge_adjacent(&mut sheet.rules);
    Ok(sheet.to_minified())
}

fn merge_adjacent(rules: &mut Vec<Rule>) {
    let mut merged: Vec<Rule> = Vec::with_capacity(rules.len());
    for rule in std::mem::take(rules) {
        let leftover = match merged.last_mut() {
            Some(prev) => absorb(prev, rule),
            None => Some(rule),
        };
        if let Some(rule) = leftover {
            merged.push(rule);
        }
    }
    for rule in &mut merged {
        if let Rule::At(AtRule {
            body: AtBody::Rules(inner),
            ..
        }) = rule
        {
            merge_adjacent(inner);
        }
    }
    *rules = merged;
}

/// Fold `next` into `prev` if they can merge; otherwise hand it back.
fn absorb(prev: &mut Rule, next: Rule) -> Option<Rule> {
    match (prev, next) {
        (Rule::Style(a), Rule::Style(b)) if a.selectors == b.selectors => {
            a.declarations.extend(b.declarations);
            None
        }
        (Rule::At(a), Rule::At(b)) if mergeable_media(a, &b) => {
            if let (AtBody::Rules(into), AtBody::Rules(from)) = (&mut a.body, b.body) {
                into.extend(from);
            }
            None
        }
        (_, next) => Some(next),
    }
}

fn mergeable_media(a: &AtRule, b: &AtRule) -> bool {
    a.name == "media"
        && b.name == "media"
        && a.prelude == b.prelude
        && matches!((&a.body, &b.body), (AtBody::Rules(_), AtBody::Rules(_)))
}
