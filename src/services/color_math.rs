//! Color validation and contrast arithmetic.
//!
//! Everything color-specific sits behind the [`ColorMath`] trait so the
//! parsing and grid code can run against a stub in tests.

/// Color capability used by the parser and the grid model
pub trait ColorMath: Send + Sync {
    /// Whether the string is a color this implementation understands
    fn is_valid(&self, input: &str) -> bool;

    /// Canonical `#rrggbb` form, or `None` for an invalid color
    fn to_hex_string(&self, input: &str) -> Option<String>;

    /// Contrast ratio between two colors, from 1.0 up to 21.0
    fn readability(&self, a: &str, b: &str) -> f64;

    /// The candidate with the highest contrast against `color`.
    ///
    /// Ties go to the earlier candidate. Returns `None` for an empty list.
    fn most_readable<'a>(&self, color: &str, candidates: &'a [String]) -> Option<&'a str> {
        let mut best: Option<(&'a str, f64)> = None;
        for candidate in candidates {
            let ratio = self.readability(color, candidate);
            if best.map_or(true, |(_, r)| ratio > r) {
                best = Some((candidate.as_str(), ratio));
            }
        }
        best.map(|(c, _)| c)
    }
}

/// [`ColorMath`] over CSS color syntax (hex, named colors, `rgb()`, `hsl()`, ...)
///
/// Contrast follows the WCAG 2.x relative luminance formula. Alpha is
/// ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorMath;

impl CssColorMath {
    pub fn new() -> Self {
        Self
    }

    fn parse(input: &str) -> Option<csscolorparser::Color> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        csscolorparser::parse(trimmed).ok()
    }

    fn channels(color: &csscolorparser::Color) -> [u8; 3] {
        [color.r, color.g, color.b].map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
    }

    /// Relative luminance. Unparseable input counts as black.
    fn luminance(input: &str) -> f64 {
        let Some(color) = Self::parse(input) else {
            return 0.0;
        };
        let [r, g, b] = Self::channels(&color).map(srgb_to_linear);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl ColorMath for CssColorMath {
    fn is_valid(&self, input: &str) -> bool {
        Self::parse(input).is_some()
    }

    fn to_hex_string(&self, input: &str) -> Option<String> {
        Self::parse(input).map(|color| {
            let [r, g, b] = Self::channels(&color);
            format!("#{r:02x}{g:02x}{b:02x}")
        })
    }

    fn readability(&self, a: &str, b: &str) -> f64 {
        let l1 = Self::luminance(a);
        let l2 = Self::luminance(b);
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }
}
