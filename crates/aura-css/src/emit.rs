//! Decoration stylesheet generation.
//!
//! Output order is fixed so identical inputs give byte-identical CSS:
//!
//! 1. `:root` custom properties (colors, effects, typography, gradients)
//! 2. one block per requested template, in template order
//! 3. `[data-emotion]` layers
//! 4. pulse keyframes and the opt-in `.decoration-pulse` class, if enabled
//! 5. viewport-dependent `--decoration-glow-radius` overrides
//! 6. accessibility overrides, always
//!
//! Only color, text-shadow, animation and the custom properties are ever
//! written; layout belongs to the host document. `animation` only ever lands
//! on `.decoration-pulse`, so the host's own reveal animations keep running
//! under every media condition.

use aura_core::HexColor;
use aura_core::contrast::{MIN_TEXT_CONTRAST, most_readable};
use aura_theme::{Provenance, ResolvedTheme, TemplateId, TemplateSet, TypographyHints, parse_targets};
use tracing::debug;

use crate::error::CssError;
use crate::manifest::DecorationManifest;
use crate::minify::minify;
use crate::stylesheet::{AtRule, Declaration, Rule, StyleRule, Stylesheet};

/// Prefix of every emitted custom property.
pub const PROPERTY_PREFIX: &str = "--decoration-";

/// Class that opts an element into the pulse animation.
pub const PULSE_CLASS: &str = ".decoration-pulse";

const PULSE_KEYFRAMES: &str = "decoration-pulse";

/// Emotion layer names, in emission order.
const EMOTION_LAYERS: [&str; 4] = ["positive", "negative", "neutral", "excited"];

/// Pixels of glow radius per unit of glow intensity.
const GLOW_RADIUS_PER_INTENSITY: f64 = 8.0;

/// Degrees the background gradient turns past the primary gradient.
const BG_ANGLE_OFFSET: f64 = 45.0;

/// `(media prelude, glow radius scale)` pairs, in emission order.
const RESPONSIVE_GLOW: [(&str, f64); 3] = [
    ("(max-width: 768px)", 0.8),
    ("(max-width: 480px)", 0.6),
    ("(min-width: 1200px)", 1.2),
];

/// The three CSS artifacts of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCss {
    /// Readable stylesheet with section comments.
    pub css: String,
    /// The same rules, minified.
    pub minified: String,
    pub manifest: DecorationManifest,
}

/// Render `theme` as CSS for the named templates.
///
/// # Errors
///
/// - [`CssError::UnsupportedTemplate`] for the first unknown target name.
/// - [`CssError::Validation`] if the theme's effects are out of range.
/// - [`CssError::InvalidValue`] if a typography hint is not a plain value.
pub fn generate<I, S>(theme: &ResolvedTheme, targets: I) -> Result<GeneratedCss, CssError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let targets = parse_targets(targets)?;
    let sheet = build_stylesheet(theme, &targets)?;
    let css = sheet.to_pretty();
    let minified = minify(&css)?;
    let manifest = DecorationManifest::new(&sheet, &targets, css.len(), minified.len());

    debug!(
        templates = targets.len(),
        full_bytes = manifest.full_bytes,
        minified_bytes = manifest.minified_bytes,
        "generated decoration css"
    );

    Ok(GeneratedCss {
        css,
        minified,
        manifest,
    })
}

/// Build the rule tree for `theme` and `targets` without serializing it.
///
/// # Errors
///
/// Same as [`generate`], minus unknown targets.
pub fn build_stylesheet(theme: &ResolvedTheme, targets: &TemplateSet) -> Result<Stylesheet, CssError> {
    theme.effects().validate()?;
    check_typography(theme.typography())?;

    let mut rules = vec![
        Rule::Comment(format!("aura decoration: {}", describe(theme.provenance()))),
        Rule::Style(root_rule(theme)),
    ];

    if !targets.is_empty() {
        rules.push(Rule::Comment("templates".into()));
        for template in targets {
            rules.push(Rule::Style(StyleRule::new(
                [template.selector()],
                vec![
                    Declaration::new("color", var("primary-start")),
                    Declaration::new("text-shadow", glow_shadow(1.0)),
                ],
            )));
        }
    }

    rules.push(Rule::Comment("emotion layers".into()));
    rules.extend(EMOTION_LAYERS.iter().map(|e| Rule::Style(emotion_layer(e))));

    if theme.effects().pulse_enabled {
        rules.push(Rule::Comment("pulse".into()));
        rules.push(Rule::At(pulse_keyframes()));
        rules.push(Rule::Style(StyleRule::new(
            [PULSE_CLASS],
            vec![
                Declaration::new(
                    "animation",
                    format!("{PULSE_KEYFRAMES} {} ease-in-out infinite", var("animation-duration")),
                ),
                Declaration::new("animation-play-state", var("pulse-state")),
            ],
        )));
    }

    rules.push(Rule::Comment("responsive".into()));
    rules.extend(responsive(theme).into_iter().map(Rule::At));

    rules.push(Rule::Comment("accessibility".into()));
    rules.extend(accessibility(theme).into_iter().map(Rule::At));

    Ok(Stylesheet { rules })
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn root_rule(theme: &ResolvedTheme) -> StyleRule {
    let c = theme.colors();
    let e = theme.effects();
    let t = theme.typography();
    // A speed too small to invert is as good as stopped.
    let period = 1.0 / e.animation_speed;
    let motion = e.animation_speed > 0.0 && period.is_finite();

    let duration = if motion {
        format!("{}s", fmt_num(period))
    } else {
        "0s".to_string()
    };
    let pulse_state = if e.pulse_enabled && motion { "running" } else { "paused" };

    let props: [(&str, String); 18] = [
        ("primary-start", c.primary_start.to_hex()),
        ("primary-end", c.primary_end.to_hex()),
        ("bg-start", c.background_start.to_hex()),
        ("bg-end", c.background_end.to_hex()),
        ("accent-color", c.accent_color.to_hex()),
        ("glow-color", c.glow_color.to_hex()),
        ("glow-intensity", fmt_num(e.glow_intensity)),
        ("glow-radius", px(glow_radius(e.glow_intensity, 1.0))),
        ("animation-duration", duration),
        ("blur-radius", px(e.blur_radius)),
        ("pulse-state", pulse_state.to_string()),
        ("gradient-angle", format!("{}deg", fmt_num(e.gradient_angle))),
        ("bg-angle", format!("{}deg", fmt_num(e.gradient_angle + BG_ANGLE_OFFSET))),
        ("font-weight", t.font_weight.clone()),
        ("letter-spacing", t.letter_spacing.clone()),
        ("line-height", t.line_height.clone()),
        ("primary-gradient", gradient("gradient-angle", "primary-start", "primary-end")),
        ("bg-gradient", gradient("bg-angle", "bg-start", "bg-end")),
    ];

    StyleRule::new(
        [":root"],
        props
            .into_iter()
            .map(|(name, value)| Declaration::new(format!("{PROPERTY_PREFIX}{name}"), value))
            .collect(),
    )
}

fn emotion_layer(emotion: &str) -> StyleRule {
    let (color, shadow) = match emotion {
        "positive" => (var("primary-start"), glow_shadow(1.0)),
        "negative" => (var("primary-end"), glow_shadow(0.5)),
        "excited" => (var("accent-color"), glow_shadow(1.5)),
        _ => (var("primary-end"), "none".to_string()),
    };
    StyleRule::new(
        [emotion_selector(emotion)],
        vec![
            Declaration::new("color", color),
            Declaration::new("text-shadow", shadow),
        ],
    )
}

fn pulse_keyframes() -> AtRule {
    AtRule::block(
        "keyframes",
        PULSE_KEYFRAMES,
        vec![
            Rule::Style(StyleRule::new(
                ["0%", "100%"],
                vec![Declaration::new("text-shadow", glow_shadow(1.0))],
            )),
            Rule::Style(StyleRule::new(
                ["50%"],
                vec![Declaration::new("text-shadow", glow_shadow(2.0))],
            )),
        ],
    )
}

/// Rescaled glow radius per viewport class. Only the custom property
/// changes; every glow reads it through `var()`.
fn responsive(theme: &ResolvedTheme) -> Vec<AtRule> {
    let intensity = theme.effects().glow_intensity;
    RESPONSIVE_GLOW
        .iter()
        .map(|&(prelude, scale)| {
            AtRule::block(
                "media",
                prelude,
                vec![Rule::Style(StyleRule::new(
                    [":root"],
                    vec![Declaration::new(
                        format!("{PROPERTY_PREFIX}glow-radius"),
                        px(glow_radius(intensity, scale)),
                    )],
                ))],
            )
        })
        .collect()
}

/// High-contrast and print overrides for every decorated selector,
/// requested or not, plus a reduced-motion block that stops the pulse.
fn accessibility(theme: &ResolvedTheme) -> [AtRule; 3] {
    let colors = theme.colors();
    let readable = most_readable(&colors.text_candidates(), colors.background_start, MIN_TEXT_CONTRAST);

    let colored: Vec<String> = TemplateId::ALL
        .iter()
        .map(|t| t.selector().to_string())
        .chain(EMOTION_LAYERS.iter().map(|e| emotion_selector(e)))
        .chain(std::iter::once(PULSE_CLASS.to_string()))
        .collect();
    let block = |prelude: &str, selectors: Vec<String>, declarations: Vec<Declaration>| {
        AtRule::block(
            "media",
            prelude,
            vec![Rule::Style(StyleRule::new(selectors, declarations))],
        )
    };

    [
        block(
            "(prefers-contrast: more)",
            colored.clone(),
            vec![
                Declaration::new("color", readable.to_hex()),
                Declaration::new("text-shadow", "none"),
            ],
        ),
        block(
            "(prefers-reduced-motion: reduce)",
            vec![PULSE_CLASS.to_string()],
            vec![Declaration::new("animation", "none")],
        ),
        block(
            "print",
            colored,
            vec![
                Declaration::new("color", HexColor::BLACK.to_hex()),
                Declaration::new("text-shadow", "none"),
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn var(name: &str) -> String {
    format!("var({PROPERTY_PREFIX}{name})")
}

/// Text shadow sized from `--decoration-glow-radius` times `scale`.
fn glow_shadow(scale: f64) -> String {
    let radius = if (scale - 1.0).abs() < f64::EPSILON {
        var("glow-radius")
    } else {
        format!("{} * {}", var("glow-radius"), fmt_num(scale))
    };
    format!("0 0 calc({} + {radius}) {}", var("blur-radius"), var("glow-color"))
}

fn gradient(angle: &str, from: &str, to: &str) -> String {
    format!("linear-gradient({}, {}, {})", var(angle), var(from), var(to))
}

/// Saturates instead of overflowing for extreme intensities.
fn glow_radius(intensity: f64, scale: f64) -> f64 {
    (intensity * GLOW_RADIUS_PER_INTENSITY * scale).min(f64::MAX)
}

fn px(v: f64) -> String {
    format!("{}px", fmt_num(v))
}

fn emotion_selector(emotion: &str) -> String {
    format!("[data-emotion=\"{emotion}\"]")
}

fn describe(provenance: &Provenance) -> String {
    match provenance {
        Provenance::ExplicitOverride { name } => format!("{name} (explicit)"),
        Provenance::Single { name } => name.clone(),
        Provenance::Blended {
            primary,
            secondary,
            weight,
        } => format!("{primary} {}% + {secondary}", fmt_num(weight * 100.0)),
    }
}

/// At most three decimals, trailing zeros trimmed.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn check_typography(t: &TypographyHints) -> Result<(), CssError> {
    for (property, value) in [
        ("font-weight", &t.font_weight),
        ("letter-spacing", &t.letter_spacing),
        ("line-height", &t.line_height),
    ] {
        let plain = !value.trim().is_empty()
            && !value.contains([';', '{', '}', '\n', '\r', '"', '\'', '\\'])
            && !value.contains("/*")
            && !value.contains("*/")
            && balanced(value);
        if !plain {
            return Err(CssError::InvalidValue {
                property: property.to_string(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Every `(` and `[` closes, in order.
fn balanced(value: &str) -> bool {
    let mut open = Vec::new();
    for c in value.chars() {
        match c {
            '(' | '[' => open.push(c),
            ')' | ']' => {
                let expected = if c == ')' { '(' } else { '[' };
                if open.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }
    open.is_empty()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
