//! Font loading + measurement utilities for chart layout.
//!
//! Chart layout needs two things from a font: vertical metrics (to place
//! titles and value labels relative to a baseline) and approximate advance
//! widths (to size the y-axis gutter for the widest tick label).
//!
//! Strategy
//! --------
//! 1. With the Cargo feature `embed_inter` we embed the Inter variable font
//!    and measure with `fontdue`. The same bytes are handed to the export
//!    rasterizer so on-screen layout and PNG output agree.
//! 2. Without the feature we fall back to heuristic metrics tuned against
//!    Inter, which keep the layout stable across platforms.
//!
//! Expected font file location (relative to this file):
//! - ../../assets/Inter-Variable.ttf

#[cfg(feature = "embed_inter")]
use fontdue::Font;
use once_cell::sync::Lazy;

#[cfg(feature = "embed_inter")]
const INTER_VARIABLE: &[u8] = include_bytes!("../../assets/Inter-Variable.ttf");

/// Lightweight weight indicator so callers avoid stringly-typed lookups.
#[derive(Clone, Copy, Debug)]
pub enum FontWeight {
    Regular,
    SemiBold,
}

impl FontWeight {
    /// SVG `font-weight` value.
    pub fn css(self) -> &'static str {
        match self {
            FontWeight::Regular => "400",
            FontWeight::SemiBold => "600",
        }
    }
}

/// Vertical metrics used by chart layout.
#[derive(Clone, Copy, Debug)]
pub struct TextMetrics {
    /// Chosen vertical line height for layout rhythm.
    pub line_h: f64,
    /// Estimated ascender distance above baseline.
    pub asc: f64,
    /// Estimated descender distance below baseline (positive number).
    pub desc: f64,
}

/// Container for embedded fonts (when feature enabled).
#[cfg(feature = "embed_inter")]
pub struct Fonts {
    variable: Font,
}

/// Placeholder container when fonts are not embedded.
#[cfg(not(feature = "embed_inter"))]
pub struct Fonts;

impl Fonts {
    /// Load fonts (embedded or fallback).
    pub fn load() -> Self {
        #[cfg(feature = "embed_inter")]
        {
            // Weight differences do not move the ascender/descender we care
            // about, so every weight shares the upright variable font.
            match Font::from_bytes(INTER_VARIABLE, Default::default()) {
                Ok(variable) => Fonts { variable },
                Err(err) => panic!("embedded Inter font failed to parse: {err}"),
            }
        }
        #[cfg(not(feature = "embed_inter"))]
        {
            Fonts
        }
    }

    /// Obtain text metrics for the given weight + size (px).
    pub fn metrics(&self, weight: FontWeight, size_px: f64) -> TextMetrics {
        let _ = weight;
        #[cfg(feature = "embed_inter")]
        {
            let m = self.variable.metrics('M', size_px as f32);
            let line_h = (m.height as f64).max(size_px * 1.24).ceil();
            let asc = (size_px * 0.90).round();
            let desc = (line_h - asc).max(size_px * 0.08).round();
            TextMetrics { line_h, asc, desc }
        }

        #[cfg(not(feature = "embed_inter"))]
        {
            let line_h = (size_px * 1.28).round();
            let asc = (size_px * 0.92).round();
            let desc = (line_h - asc).max(size_px * 0.08).round();
            TextMetrics { line_h, asc, desc }
        }
    }

    /// Advance width of `text` in px.
    pub fn width(&self, weight: FontWeight, size_px: f64, text: &str) -> f64 {
        #[cfg(feature = "embed_inter")]
        {
            let _ = weight;
            text.chars()
                .map(|c| self.variable.metrics(c, size_px as f32).advance_width as f64)
                .sum()
        }

        #[cfg(not(feature = "embed_inter"))]
        {
            let bold = match weight {
                FontWeight::Regular => 1.0,
                FontWeight::SemiBold => 1.05,
            };
            text.chars().map(heuristic_advance).sum::<f64>() * size_px * bold
        }
    }
}

#[cfg(not(feature = "embed_inter"))]
fn heuristic_advance(c: char) -> f64 {
    match c {
        ',' | '.' | ' ' | 'i' | 'l' | 'í' | '/' => 0.30,
        '0'..='9' => 0.60,
        'M' | 'W' | 'm' | 'w' => 0.85,
        c if c.is_uppercase() => 0.68,
        _ => 0.56,
    }
}

static FONTS: Lazy<Fonts> = Lazy::new(Fonts::load);

/// Metrics through the shared font cache.
pub fn measure(weight: FontWeight, size_px: f64) -> TextMetrics {
    FONTS.metrics(weight, size_px)
}

/// Width through the shared font cache.
pub fn text_width(weight: FontWeight, size_px: f64, text: &str) -> f64 {
    FONTS.width(weight, size_px, text)
}

/// Raw bytes of the embedded font, for loading into the rasterizer's font database.
pub fn embedded_font_data() -> Option<&'static [u8]> {
    #[cfg(feature = "embed_inter")]
    {
        Some(INTER_VARIABLE)
    }
    #[cfg(not(feature = "embed_inter"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_increase_with_size() {
        let small = measure(FontWeight::Regular, 12.0);
        let large = measure(FontWeight::Regular, 48.0);
        assert!(large.line_h > small.line_h);
        assert!(large.asc > small.asc);
    }

    #[test]
    fn baseline_consistency_ratio() {
        let m = measure(FontWeight::SemiBold, 32.0);
        let baseline_ratio = m.asc / 32.0;
        assert!(baseline_ratio > 0.80 && baseline_ratio < 1.05);
    }

    #[test]
    fn wider_labels_measure_wider() {
        let short = text_width(FontWeight::Regular, 13.0, "0");
        let long = text_width(FontWeight::Regular, 13.0, "10,000,000");
        assert!(long > short * 5.0);
        assert_eq!(text_width(FontWeight::Regular, 13.0, ""), 0.0);
    }
}
