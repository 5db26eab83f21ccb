//! Stylesheet model and its two serializations.
//!
//! The generator builds this tree directly; the parser rebuilds it from
//! text. Both directions meet in [`Stylesheet::to_minified`], which always
//! writes the canonical compact form of selectors and values, so a parsed
//! pretty sheet and a parsed minified sheet compare equal.

use std::collections::BTreeMap;
use std::fmt::Write as _;

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// `property: value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// `selector, selector { declarations }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    pub fn new<S: Into<String>>(
        selectors: impl IntoIterator<Item = S>,
        declarations: Vec<Declaration>,
    ) -> Self {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
            declarations,
        }
    }
}

/// What follows an at-rule prelude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtBody {
    /// `@import url(x);`
    Statement,
    /// `@media ... { rules }`, `@keyframes ... { frames }`
    Rules(Vec<Rule>),
    /// `@font-face { declarations }`
    Declarations(Vec<Declaration>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    /// Lowercase name without the `@`.
    pub name: String,
    pub prelude: String,
    pub body: AtBody,
}

impl AtRule {
    pub fn block(name: impl Into<String>, prelude: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            prelude: prelude.into(),
            body: AtBody::Rules(rules),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Emitted in pretty output only; never produced by the parser.
    Comment(String),
    Style(StyleRule),
    At(AtRule),
}

/// An ordered list of top-level rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl Stylesheet {
    /// Custom properties declared on top-level `:root` rules, in order.
    #[must_use]
    pub fn custom_properties(&self) -> Vec<(String, String)> {
        self.rules
            .iter()
            .filter_map(|rule| match rule {
                Rule::Style(style) if style.selectors.iter().any(|s| s == ":root") => {
                    Some(&style.declarations)
                }
                _ => None,
            })
            .flatten()
            .filter(|d| d.property.starts_with("--"))
            .map(|d| (d.property.clone(), d.value.clone()))
            .collect()
    }

    /// Every style selector in first-appearance order, excluding keyframe
    /// selectors.
    #[must_use]
    pub fn selectors(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_selectors(&self.rules, &mut out);
        out
    }

    /// Declarations per selector, keyed by the enclosing at-rule chain.
    ///
    /// Keys look like `.scroll-line` or `@media print > .scroll-line`.
    /// Declarations of repeated selectors concatenate in source order.
    #[must_use]
    pub fn declaration_map(&self) -> BTreeMap<String, Vec<Declaration>> {
        let mut map = BTreeMap::new();
        collect_declarations(&self.rules, "", &mut map);
        map
    }
}

fn collect_selectors(rules: &[Rule], out: &mut Vec<String>) {
    for rule in rules {
        match rule {
            Rule::Style(style) => {
                for sel in &style.selectors {
                    if !out.contains(sel) {
                        out.push(sel.clone());
                    }
                }
            }
            Rule::At(AtRule {
                name,
                body: AtBody::Rules(inner),
                ..
            }) if name != "keyframes" => collect_selectors(inner, out),
            Rule::At(_) | Rule::Comment(_) => {}
        }
    }
}

fn collect_declarations(rules: &[Rule], scope: &str, map: &mut BTreeMap<String, Vec<Declaration>>) {
    for rule in rules {
        match rule {
            Rule::Style(style) => {
                for sel in &style.selectors {
                    map.entry(format!("{scope}{sel}"))
                        .or_default()
                        .extend(style.declarations.iter().cloned());
                }
            }
            Rule::At(at) => {
                let head = at_head(at, false);
                match &at.body {
                    AtBody::Rules(inner) => {
                        collect_declarations(inner, &format!("{scope}{head} > "), map);
                    }
                    AtBody::Declarations(decls) => {
                        map.entry(format!("{scope}{head}"))
                            .or_default()
                            .extend(decls.iter().cloned());
                    }
                    AtBody::Statement => {
                        map.entry(format!("{scope}{head}")).or_default();
                    }
                }
            }
            Rule::Comment(_) => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

const INDENT: &str = "  ";

impl Stylesheet {
    /// Human-readable output: two-space indent, one declaration per line,
    /// a blank line between top-level rules.
    #[must_use]
    pub fn to_pretty(&self) -> String {
        let mut out = String::new();
        let mut after_comment = true;
        for rule in &self.rules {
            if !after_comment {
                out.push('\n');
            }
            write_pretty(&mut out, rule, 0);
            after_comment = matches!(rule, Rule::Comment(_));
        }
        out
    }

    /// Canonical compact output without comments or optional whitespace.
    #[must_use]
    pub fn to_minified(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            write_minified(&mut out, rule);
        }
        out
    }
}

fn write_pretty(out: &mut String, rule: &Rule, depth: usize) {
    let pad = INDENT.repeat(depth);
    match rule {
        Rule::Comment(text) => {
            let _ = writeln!(out, "{pad}/* {} */", text.replace("*/", "* /"));
        }
        Rule::Style(style) => {
            let _ = writeln!(out, "{pad}{} {{", style.selectors.join(&format!(",\n{pad}")));
            write_pretty_declarations(out, &style.declarations, depth + 1);
            let _ = writeln!(out, "{pad}}}");
        }
        Rule::At(at) => {
            let head = at_head(at, false);
            match &at.body {
                AtBody::Statement => {
                    let _ = writeln!(out, "{pad}{head};");
                }
                AtBody::Rules(inner) => {
                    let _ = writeln!(out, "{pad}{head} {{");
                    for r in inner {
                        write_pretty(out, r, depth + 1);
                    }
                    let _ = writeln!(out, "{pad}}}");
                }
                AtBody::Declarations(decls) => {
                    let _ = writeln!(out, "{pad}{head} {{");
                    write_pretty_declarations(out, decls, depth + 1);
                    let _ = writeln!(out, "{pad}}}");
                }
            }
        }
    }
}

fn write_pretty_declarations(out: &mut String, decls: &[Declaration], depth: usize) {
    let pad = INDENT.repeat(depth);
    for d in decls {
        let _ = writeln!(out, "{pad}{}: {};", d.property, d.value);
    }
}

fn write_minified(out: &mut String, rule: &Rule) {
    match rule {
        Rule::Comment(_) => {}
        Rule::Style(style) => {
            let selectors: Vec<String> = style.selectors.iter().map(|s| compact(s)).collect();
            out.push_str(&selectors.join(","));
            write_minified_declarations(out, &style.declarations);
        }
        Rule::At(at) => {
            out.push_str(&at_head(at, true));
            match &at.body {
                AtBody::Statement => out.push(';'),
                AtBody::Rules(inner) => {
                    out.push('{');
                    for r in inner {
                        write_minified(out, r);
                    }
                    out.push('}');
                }
                AtBody::Declarations(decls) => write_minified_declarations(out, decls),
            }
        }
    }
}

fn write_minified_declarations(out: &mut String, decls: &[Declaration]) {
    out.push('{');
    for (i, d) in decls.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(d.property.trim());
        out.push(':');
        out.push_str(&compact(&d.value));
    }
    out.push('}');
}

fn at_head(at: &AtRule, minified: bool) -> String {
    let prelude = if minified {
        compact(&at.prelude)
    } else {
        at.prelude.trim().to_string()
    };
    if prelude.is_empty() {
        format!("@{}", at.name)
    } else {
        format!("@{} {prelude}", at.name)
    }
}

/// Collapse insignificant whitespace outside quoted strings.
///
/// Whitespace runs become one space, whitespace around commas disappears,
/// and the ends are trimmed.
#[must_use]
pub fn compact(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut quote: Option<char> = None;
    let mut pending_space = false;
    let mut chars = s.trim().chars();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && c != ',' && !out.ends_with(',') {
            out.push(' ');
        }
        pending_space = false;
        if c == '"' || c == '\'' {
            quote = Some(c);
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
