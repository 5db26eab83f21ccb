//! WCAG contrast helpers for accessibility fallbacks.
//!
//! The high-contrast CSS override needs one solid text color that stays
//! readable on the theme background. Luminance and ratio follow the WCAG
//! 2.1 definitions exactly; the picker only chooses among candidates and
//! never invents a new hue.

use crate::color::{HexColor, srgb_to_linear};

/// WCAG AA threshold for normal text.
pub const MIN_TEXT_CONTRAST: f64 = 4.5;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: HexColor) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = f64::from(srgb_to_linear(r));
    let g_lin = f64::from(srgb_to_linear(g));
    let b_lin = f64::from(srgb_to_linear(b));
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0], independent of argument order.
#[must_use]
pub fn contrast_ratio(a: HexColor, b: HexColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick the candidate with the highest contrast against `bg`.
///
/// If no candidate reaches `min_ratio`, falls back to black or white,
/// whichever contrasts more with `bg`. Ties keep the earlier candidate.
#[must_use]
pub fn most_readable(candidates: &[HexColor], bg: HexColor, min_ratio: f64) -> HexColor {
    let mut best: Option<(HexColor, f64)> = None;
    for &candidate in candidates {
        let ratio = contrast_ratio(candidate, bg);
        if best.is_none_or(|(_, r)| ratio > r) {
            best = Some((candidate, ratio));
        }
    }

    match best {
        Some((color, ratio)) if ratio >= min_ratio => color,
        _ => {
            if contrast_ratio(HexColor::BLACK, bg) >= contrast_ratio(HexColor::WHITE, bg) {
                HexColor::BLACK
            } else {
                HexColor::WHITE
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_white_extremes() {
        assert!((relative_luminance(HexColor::BLACK)).abs() < 1e-9);
        assert!((relative_luminance(HexColor::WHITE) - 1.0).abs() < 1e-6);
        assert!((contrast_ratio(HexColor::BLACK, HexColor::WHITE) - 21.0).abs() < 1e-3);
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = HexColor::rgb8(0x4a, 0x90, 0xe2);
        let b = HexColor::rgb8(0x00, 0x04, 0x28);
        assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < 1e-12);
    }

    #[test]
    fn picks_highest_contrast_candidate() {
        let bg = HexColor::rgb8(0x00, 0x04, 0x28);
        let dim = HexColor::rgb8(0x20, 0x20, 0x40);
        let bright = HexColor::rgb8(0xa8, 0xe6, 0xcf);
        assert_eq!(most_readable(&[dim, bright], bg, MIN_TEXT_CONTRAST), bright);
    }

    #[test]
    fn falls_back_to_black_on_light_background() {
        let bg = HexColor::rgb8(0xf8, 0xf9, 0xfa);
        let pale = HexColor::rgb8(0xe9, 0xec, 0xef);
        assert_eq!(most_readable(&[pale], bg, MIN_TEXT_CONTRAST), HexColor::BLACK);
    }

    #[test]
    fn falls_back_to_white_on_dark_background() {
        let bg = HexColor::rgb8(0x1a, 0x1a, 0x1a);
        assert_eq!(most_readable(&[], bg, MIN_TEXT_CONTRAST), HexColor::WHITE);
    }
}
