//! Stylesheet parser.
//!
//! A small recursive-descent reader for the subset of CSS the generator
//! emits, plus what commonly surrounds it: comments, quoted strings,
//! statement at-rules and declaration-bodied at-rules. Selectors and values
//! are stored in [`compact`] form; comments are dropped.

use crate::error::CssError;
use crate::stylesheet::{AtBody, AtRule, Declaration, Rule, StyleRule, Stylesheet, compact};

/// At-rules whose block holds declarations rather than rules.
const DECLARATION_AT_RULES: &[&str] = &["font-face", "page", "property", "counter-style"];

/// Parse stylesheet text into its rule tree.
///
/// # Errors
///
/// Returns [`CssError::Parse`] with the byte offset of the first problem:
/// unterminated comments, strings or blocks, selectors without a block,
/// declarations without a colon or value.
pub fn parse_stylesheet(src: &str) -> Result<Stylesheet, CssError> {
    let clean = blank_comments(src)?;
    let mut parser = Parser {
        src: &clean,
        pos: 0,
    };
    let rules = parser.rule_list(false)?;
    Ok(Stylesheet { rules })
}

/// Replace every comment with spaces of the same byte length, so offsets
/// into the result are offsets into `src`.
fn blank_comments(src: &str) -> Result<String, CssError> {
    let bytes = src.as_bytes();
    let mut out = String::with_capacity(src.len());
    let mut copied = 0;
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 1;
            } else if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        match b {
            b'"' | b'\'' => quote = Some(b),
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = src[i + 2..]
                    .find("*/")
                    .map(|rel| i + 2 + rel + 2)
                    .ok_or(CssError::Parse {
                        offset: i,
                        message: "unterminated comment",
                    })?;
                out.push_str(&src[copied..i]);
                out.extend(std::iter::repeat_n(' ', end - i));
                copied = end;
                i = end;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    out.push_str(&src[copied..]);
    Ok(out)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    const fn error(&self, message: &'static str) -> CssError {
        CssError::Parse {
            offset: self.pos,
            message,
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Advance to the first byte in `stops` that sits outside strings,
    /// parentheses and brackets. Returns the skipped text and the stop byte
    /// (`None` at end of input). The stop byte is not consumed.
    fn scan_until(&mut self, stops: &[u8]) -> Result<(&'a str, Option<u8>), CssError> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        let mut depth = 0usize;

        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b'"' | b'\'' => {
                    let open = self.pos;
                    self.pos += 1;
                    loop {
                        match bytes.get(self.pos) {
                            None => {
                                return Err(CssError::Parse {
                                    offset: open,
                                    message: "unterminated string",
                                });
                            }
                            Some(b'\\') => self.pos += 2,
                            Some(&c) if c == b => break,
                            Some(_) => self.pos += 1,
                        }
                    }
                }
                b'(' | b'[' => depth += 1,
                b')' | b']' => depth = depth.saturating_sub(1),
                _ if depth == 0 && stops.contains(&b) => {
                    return Ok((&self.src[start..self.pos], Some(b)));
                }
                _ => {}
            }
            self.pos += 1;
        }
        Ok((&self.src[start..], None))
    }

    /// Rules until end of input, or until the closing `}` when `nested`.
    fn rule_list(&mut self, nested: bool) -> Result<Vec<Rule>, CssError> {
        let mut rules = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                None if nested => return Err(self.error("unclosed block")),
                None => break,
                Some(b'}') if nested => {
                    self.pos += 1;
                    break;
                }
                Some(b'}') => return Err(self.error("unexpected `}`")),
                Some(b'@') => rules.push(Rule::At(self.at_rule()?)),
                Some(_) => rules.push(Rule::Style(self.style_rule()?)),
            }
        }
        Ok(rules)
    }

    fn at_rule(&mut self) -> Result<AtRule, CssError> {
        self.pos += 1;
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error("missing at-rule name"));
        }
        let name = self.src[start..self.pos].to_ascii_lowercase();

        let (prelude, stop) = self.scan_until(b";{}")?;
        let prelude = compact(prelude);
        let body = match stop {
            Some(b';') => {
                self.pos += 1;
                AtBody::Statement
            }
            Some(b'{') => {
                self.pos += 1;
                if DECLARATION_AT_RULES.contains(&name.as_str()) {
                    AtBody::Declarations(self.declaration_block()?)
                } else {
                    AtBody::Rules(self.rule_list(true)?)
                }
            }
            _ => return Err(self.error("expected `;` or `{` after at-rule prelude")),
        };
        Ok(AtRule {
            name,
            prelude,
            body,
        })
    }

    fn style_rule(&mut self) -> Result<StyleRule, CssError> {
        let start = self.pos;
        let (prelude, stop) = self.scan_until(b"{};")?;
        if stop != Some(b'{') {
            return Err(self.error("expected `{` after selector"));
        }
        let selectors: Vec<String> = split_top_level(prelude, b',')
            .into_iter()
            .map(compact)
            .collect();
        if selectors.iter().any(String::is_empty) {
            return Err(CssError::Parse {
                offset: start,
                message: "empty selector",
            });
        }
        self.pos += 1;
        let declarations = self.declaration_block()?;
        Ok(StyleRule {
            selectors,
            declarations,
        })
    }

    /// Declarations up to and including the closing `}`.
    fn declaration_block(&mut self) -> Result<Vec<Declaration>, CssError> {
        let mut declarations = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(b'}') {
                self.pos += 1;
                return Ok(declarations);
            }
            let start = self.pos;
            let (text, stop) = self.scan_until(b";{}")?;
            match stop {
                Some(b';') => self.pos += 1,
                Some(b'}') => {}
                Some(_) => return Err(self.error("nested block inside declarations")),
                None => return Err(self.error("unclosed declaration block")),
            }
            if !text.trim().is_empty() {
                declarations.push(parse_declaration(text, start)?);
            }
        }
    }
}

fn parse_declaration(text: &str, offset: usize) -> Result<Declaration, CssError> {
    let malformed = |message| CssError::Parse { offset, message };
    let (property, value) = text
        .split_once(':')
        .ok_or_else(|| malformed("expected `property: value`"))?;
    let property = property.trim();
    if property.is_empty() || property.contains(char::is_whitespace) {
        return Err(malformed("invalid property name"));
    }
    let value = compact(value);
    if value.is_empty() {
        return Err(malformed("empty value"));
    }
    Ok(Declaration::new(property, value))
}

/// Split on `sep` outside strings, parentheses and brackets.
fn split_top_level(s: &str, sep: u8) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 1;
            } else if b == q {
                quote = None;
            }
        } else {
            match b {
                b'"' | b'\'' => quote = Some(b),
                b'(' | b'[' => depth += 1,
                b')' | b']' => depth = depth.saturating_sub(1),
                _ if b == sep && depth == 0 => {
                    parts.push(&s[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        i += 1;
    }
    parts.push(&s[start..]);
    parts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn style(rule: &Rule) -> &StyleRule {
        match rule {
            Rule::Style(s) => s,
            other => panic!("expected style rule, got {other:?}"),
        }
    }

    #[test]
    fn parse_simple_rules() {
        let sheet = parse_stylesheet(
            "
            :root { --a: 1; --b: #fff }
            .x, .y { color: red; }
            ",
        )
        .unwrap();
        assert_eq!(sheet.rules.len(), 2);
        let root = style(&sheet.rules[0]);
        assert_eq!(root.selectors, vec![":root"]);
        assert_eq!(
            root.declarations,
            vec![Declaration::new("--a", "1"), Declaration::new("--b", "#fff")]
        );
        assert_eq!(style(&sheet.rules[1]).selectors, vec![".x", ".y"]);
    }

    #[test]
    fn comments_are_dropped_and_offsets_kept() {
        let sheet = parse_stylesheet("/* head */ a { /* inner */ color: red; }").unwrap();
        assert_eq!(style(&sheet.rules[0]).declarations, vec![Declaration::new("color", "red")]);

        let err = parse_stylesheet("/* é */ a { color }").unwrap_err();
        assert!(matches!(err, CssError::Parse { offset: 13, .. }), "{err:?}");
    }

    #[test]
    fn comment_markers_inside_strings_are_text() {
        let sheet = parse_stylesheet(r#"a { content: "/* not a comment */"; }"#).unwrap();
        assert_eq!(style(&sheet.rules[0]).declarations[0].value, "\"/* not a comment */\"");
    }

    #[test]
    fn separators_inside_strings_and_parens_do_not_split() {
        let sheet = parse_stylesheet(
            r#"[data-x="a,b"], .c { background: url("x;y.png"); shadow: f(1, 2) }"#,
        )
        .unwrap();
        let rule = style(&sheet.rules[0]);
        assert_eq!(rule.selectors, vec![r#"[data-x="a,b"]"#, ".c"]);
        assert_eq!(rule.declarations[0].value, r#"url("x;y.png")"#);
        assert_eq!(rule.declarations[1].value, "f(1,2)");
    }

    #[test]
    fn nested_at_rules() {
        let sheet = parse_stylesheet(
            "@media print { a { color: #000 } } @keyframes k { 0%, 100% { opacity: 1 } }",
        )
        .unwrap();
        let Rule::At(media) = &sheet.rules[0] else {
            panic!("expected at-rule");
        };
        assert_eq!(media.name, "media");
        assert_eq!(media.prelude, "print");
        let AtBody::Rules(inner) = &media.body else {
            panic!("expected rule body");
        };
        assert_eq!(style(&inner[0]).selectors, vec!["a"]);

        let Rule::At(frames) = &sheet.rules[1] else {
            panic!("expected at-rule");
        };
        let AtBody::Rules(inner) = &frames.body else {
            panic!("expected rule body");
        };
        assert_eq!(style(&inner[0]).selectors, vec!["0%", "100%"]);
    }

    #[test]
    fn statement_and_declaration_at_rules() {
        let sheet = parse_stylesheet(
            "@import url(base.css); @font-face { font-family: x; src: url(x.woff) }",
        )
        .unwrap();
        assert!(matches!(&sheet.rules[0], Rule::At(AtRule { body: AtBody::Statement, .. })));
        let Rule::At(face) = &sheet.rules[1] else {
            panic!("expected at-rule");
        };
        assert_eq!(
            face.body,
            AtBody::Declarations(vec![
                Declaration::new("font-family", "x"),
                Declaration::new("src", "url(x.woff)"),
            ])
        );
    }

    #[test]
    fn malformed_input_is_reported() {
        for bad in [
            "a { color: red",
            "a { color red }",
            "a { color: }",
            "a color: red; }",
            "}",
            "/* open",
            "a { content: \"open }",
            "@media print { a { color: red }",
            "@ { }",
            ", a { color: red }",
            "a { b { color: red } }",
        ] {
            assert!(
                matches!(parse_stylesheet(bad), Err(CssError::Parse { .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn empty_input_is_empty_sheet() {
        assert_eq!(parse_stylesheet("  \n /* only */ ").unwrap(), Stylesheet::default());
    }
}
