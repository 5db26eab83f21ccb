//! End-to-end runs through `aura::decorate`.

use std::io;
use std::sync::{Arc, Mutex};

use aura::{
    DecorateError, DecorationConfig, PresetRegistry, PresetSpec, decorate, fingerprint,
    parse_stylesheet,
};
use aura_analyze::{ContentCategory, Emotion};
use aura_css::stylesheet::Rule;
use aura_theme::{Provenance, ThemeError};
use pretty_assertions::assert_eq;
use serde::Deserialize;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Deserialize)]
struct PresetFile {
    presets: Vec<PresetSpec>,
}

fn registry_from_toml(doc: &str) -> PresetRegistry {
    let file: PresetFile = toml::from_str(doc).unwrap();
    PresetRegistry::from_specs(file.presets).unwrap()
}

const TWO_PRESETS: &str = r##"
[[presets]]
name = "ember"
description = "Warm glow for lively text"
compatibility = ["typewriter"]
colors = { primary_start = "#FF7675", primary_end = "#FDCB6E", background_start = "#2D3436", background_end = "#636E72", accent_color = "#FD79A8", glow_color = "#FF7675" }
effects = { glow_intensity = 0.6, pulse_enabled = true }
affinity = { emotion = { excited = 0.8, positive = 0.4 } }

[[presets]]
name = "frost"
colors = { primary_start = "#81ECEC", primary_end = "#74B9FF", background_start = "#2D3436", background_end = "#636E72", accent_color = "#00B894", glow_color = "#81ECEC" }
affinity = { emotion = { neutral = 0.9 }, category = "nature" }
"##;

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn excited_generic_text() {
    init_tracing();
    let out = decorate(
        "I am so excited about this amazing breakthrough!",
        &DecorationConfig::default(),
        &PresetRegistry::builtin(),
    )
    .unwrap();
    assert_eq!(out.analysis.content_category(), ContentCategory::Generic);
    assert_eq!(out.analysis.dominant_emotion(), Emotion::Excited);
    let scores = out.analysis.emotion_scores();
    assert!(scores.excited > scores.positive);
    assert!(scores.excited > scores.negative);
    assert!(scores.excited > scores.neutral);
}

#[test]
fn jazz_text_is_music() {
    let out = decorate(
        "The jazz trio played until dawn.",
        &DecorationConfig::default(),
        &PresetRegistry::builtin(),
    )
    .unwrap();
    assert_eq!(out.analysis.content_category(), ContentCategory::Music);
}

#[test]
fn railway_only_output() {
    let config = DecorationConfig::default().with_targets(["railway"]);
    let out = decorate("A quiet train crosses the valley.", &config, &PresetRegistry::builtin()).unwrap();

    let sheet = parse_stylesheet(&out.css).unwrap();
    let top_level: Vec<String> = sheet
        .rules
        .iter()
        .filter_map(|rule| match rule {
            Rule::Style(style) => Some(style.selectors.clone()),
            _ => None,
        })
        .flatten()
        .collect();
    assert!(top_level.iter().any(|s| s == ".railway-line"));
    assert!(!top_level.iter().any(|s| s == ".typewriter-char" || s == ".scroll-line"));

    let (before_a11y, _) = out.css.split_once("/* accessibility */").unwrap();
    assert!(!before_a11y.contains(".typewriter-char"));
    assert!(!before_a11y.contains(".scroll-line"));

    for block in [
        "@media (prefers-contrast: more) {",
        "@media (prefers-reduced-motion: reduce) {",
        "@media print {",
    ] {
        assert!(out.css.contains(block), "missing {block}");
    }
}

#[test]
fn identical_inputs_give_identical_bytes() {
    let registry = PresetRegistry::builtin();
    let config = DecorationConfig::default()
        .with_targets(["scroll", "typewriter"])
        .minified(true);
    let text = "Students learn the concept in a short lesson. It is simple.";
    let a = decorate(text, &config, &registry).unwrap();
    let b = decorate(text, &config, &registry).unwrap();
    assert_eq!(a.css, b.css);
    assert_eq!(a.minified_css, b.minified_css);
    assert_eq!(a, b);
    assert_eq!(fingerprint(text, &config), fingerprint(text, &config));
}

#[test]
fn empty_text_still_decorates() {
    let out = decorate("", &DecorationConfig::default(), &PresetRegistry::builtin()).unwrap();
    assert_eq!(out.analysis.content_category(), ContentCategory::Generic);
    assert_eq!(out.analysis.dominant_emotion(), Emotion::Neutral);
    assert!(out.css.contains(".typewriter-char {"));
}

// ─── Laws ────────────────────────────────────────────────────────────────────

#[test]
fn minified_output_parses_to_the_same_rules() {
    let config = DecorationConfig::default()
        .with_targets(["typewriter", "railway", "scroll"])
        .minified(true);
    for text in [
        "Wow, this is thrilling and incredible!",
        "The melancholy river carried our grief away.",
        "The algorithm processes data on the server.",
    ] {
        let out = decorate(text, &config, &PresetRegistry::builtin()).unwrap();
        let full = parse_stylesheet(&out.css).unwrap();
        let min = parse_stylesheet(out.minified_css.as_deref().unwrap()).unwrap();
        assert_eq!(full.custom_properties(), min.custom_properties());
        assert_eq!(full.declaration_map(), min.declaration_map());
    }
}

#[test]
fn blend_endpoints_reproduce_presets() {
    let registry = PresetRegistry::builtin();
    let a = registry.get("learning_energetic").unwrap();
    let b = registry.get("emotional_contemplative").unwrap();

    let all_a = aura_theme::blend::blend(a, b, 1.0).unwrap();
    assert_eq!(*all_a.colors(), a.colors);
    assert_eq!(*all_a.effects(), a.effects);

    let all_b = aura_theme::blend::blend(a, b, 0.0).unwrap();
    assert_eq!(*all_b.colors(), b.colors);
    assert_eq!(*all_b.effects(), b.effects);
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn unknown_explicit_theme() {
    let config = DecorationConfig::default().with_theme("aurora");
    let err = decorate("text", &config, &PresetRegistry::builtin()).unwrap_err();
    assert_eq!(
        err,
        DecorateError::Theme(ThemeError::UnknownTheme { name: "aurora".into() })
    );
    assert_eq!(err.to_string(), "unknown theme \"aurora\"");
}

#[test]
fn unknown_template() {
    let config = DecorationConfig::default().with_targets(["typewriter", "marquee"]);
    let err = decorate("text", &config, &PresetRegistry::builtin()).unwrap_err();
    assert!(matches!(err, DecorateError::UnsupportedTemplate(ref e) if e.0 == "marquee"));
}

#[test]
fn no_compatible_preset() {
    let registry = registry_from_toml(
        r##"
        [[presets]]
        name = "only-scroll"
        compatibility = ["scroll"]
        colors = { primary_start = "#111111", primary_end = "#222222", background_start = "#000000", background_end = "#333333", accent_color = "#444444", glow_color = "#555555" }
        "##,
    );
    let err = decorate("text", &DecorationConfig::default(), &registry).unwrap_err();
    assert_eq!(err, DecorateError::Theme(ThemeError::EmptyRegistry));
}

#[test]
fn invalid_presets_never_reach_the_pipeline() {
    let file: PresetFile = toml::from_str(
        r##"
        [[presets]]
        name = "dim"
        colors = { primary_start = "#111111", primary_end = "#222222", background_start = "#000000", background_end = "#333333", accent_color = "#444444", glow_color = "#555555" }
        effects = { glow_intensity = -1.0 }
        "##,
    )
    .unwrap();
    let err = PresetRegistry::from_specs(file.presets).unwrap_err();
    assert!(err.to_string().contains("glow_intensity"), "{err}");
}

// ─── Custom registries ───────────────────────────────────────────────────────

#[test]
fn toml_registry_resolves() {
    let registry = registry_from_toml(TWO_PRESETS);

    // Both cover typewriter; ember sits closer to excited text.
    let out = decorate("Wow!", &DecorationConfig::default(), &registry).unwrap();
    let Provenance::Blended { primary, secondary, weight } = out.theme.provenance() else {
        panic!("expected a blend, got {:?}", out.theme.provenance());
    };
    assert_eq!((primary.as_str(), secondary.as_str()), ("ember", "frost"));
    assert!(*weight > 0.5);
    assert!(out.css.contains("@keyframes decoration-pulse"));

    // ember is typewriter-only.
    let config = DecorationConfig::default().with_targets(["railway"]);
    let out = decorate("Wow!", &config, &registry).unwrap();
    assert_eq!(*out.theme.provenance(), Provenance::Single { name: "frost".into() });
    assert!(!out.css.contains("@keyframes"));
}

#[test]
fn explicit_incompatible_theme_logs_a_warning() {
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let registry = registry_from_toml(TWO_PRESETS);
    let config = DecorationConfig::default()
        .with_theme("ember")
        .with_targets(["scroll"]);
    let out = tracing::subscriber::with_default(subscriber, || decorate("text", &config, &registry)).unwrap();

    assert_eq!(*out.theme.provenance(), Provenance::ExplicitOverride { name: "ember".into() });
    let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("WARN"), "{logged}");
    assert!(logged.contains("explicit theme does not declare template compatibility"), "{logged}");
    assert!(logged.contains("scroll"), "{logged}");
}
