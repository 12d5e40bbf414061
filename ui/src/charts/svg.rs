//! SVG markup for the comparison bar charts.
//!
//! A panel is laid out in its own 800×600 coordinate space (8×6 in at 100
//! units per inch). Standalone images contain exactly one panel; the combined
//! view places the same panel markup side by side with a translate, so both
//! paths draw identical bars, ticks and labels.

use std::fmt::Write as _;

use super::fonts::{self, FontWeight};
use super::model::{BarChart, ChartFamily, ChartStyle};

pub const PANEL_WIDTH: u32 = 800;
pub const PANEL_HEIGHT: u32 = 600;

const PLOT_TOP: f64 = 90.0;
const PLOT_BOTTOM: f64 = 500.0;
const PLOT_RIGHT: f64 = 770.0;
const OUTER_MARGIN: f64 = 24.0;
const TITLE_PAD: f64 = 20.0;
const TICK_LEN: f64 = 6.0;
const TICK_GAP: f64 = 4.0;
/// Category axis range: bars span [-0.3, 1.3] plus a 5 % data margin each side.
const X_LO: f64 = -0.38;
const X_HI: f64 = 1.38;

/// Rendered SVG document with its canvas size in user units.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgImage {
    pub markup: String,
    pub width: u32,
    pub height: u32,
}

/// Standalone single-family chart image.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartImage {
    pub family: ChartFamily,
    pub image: SvgImage,
}

/// One family's panel as its own image, the unit of PNG export.
pub fn render_standalone(chart: &BarChart, style: &ChartStyle) -> ChartImage {
    let mut markup = document_open(PANEL_WIDTH, PANEL_HEIGHT, style);
    markup.push_str(&render_panel(chart, style));
    markup.push_str("</svg>");

    ChartImage {
        family: chart.family,
        image: SvgImage {
            markup,
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
        },
    }
}

/// All panels side by side in one document.
pub fn render_combined(charts: &[BarChart], style: &ChartStyle) -> SvgImage {
    let width = PANEL_WIDTH * charts.len().max(1) as u32;
    let mut markup = document_open(width, PANEL_HEIGHT, style);
    for (idx, chart) in charts.iter().enumerate() {
        let offset = idx as u32 * PANEL_WIDTH;
        let _ = write!(markup, r#"<g transform="translate({offset} 0)">"#);
        markup.push_str(&render_panel(chart, style));
        markup.push_str("</g>");
    }
    markup.push_str("</svg>");

    SvgImage {
        markup,
        width,
        height: PANEL_HEIGHT,
    }
}

/// One chart panel as an SVG `<g>` in panel-local coordinates.
pub fn render_panel(chart: &BarChart, style: &ChartStyle) -> String {
    let ink = style.ink.hex();
    let tick_labels: Vec<String> = chart.ticks.iter().map(|t| chart.tick_label(*t)).collect();
    let widest_tick = tick_labels
        .iter()
        .map(|label| fonts::text_width(FontWeight::Regular, style.tick_size, label))
        .fold(0.0, f64::max);

    let axis_m = fonts::measure(FontWeight::Regular, style.axis_label_size);
    let plot_left = OUTER_MARGIN + axis_m.line_h + 12.0 + widest_tick + TICK_GAP + TICK_LEN;
    let frame = Frame {
        left: plot_left,
        right: PLOT_RIGHT,
        top: PLOT_TOP,
        bottom: PLOT_BOTTOM,
        y_max: chart.y_max,
    };

    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        r#"<g class="chart-panel" data-family="{}" data-y-max="{}">"#,
        chart.family.slug(),
        chart.y_max
    );

    // Title, centred over the plot area.
    let title_m = fonts::measure(FontWeight::SemiBold, style.title_size);
    let _ = write!(
        out,
        r#"<text class="chart-title" x="{:.2}" y="{:.2}" text-anchor="middle" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
        (frame.left + frame.right) / 2.0,
        frame.top - TITLE_PAD - title_m.desc,
        style.title_size,
        FontWeight::SemiBold.css(),
        style.title.hex(),
        escape(chart.family.title())
    );

    // Y-axis label, rotated to read bottom-up.
    let axis_x = OUTER_MARGIN + axis_m.asc;
    let axis_y = (frame.top + frame.bottom) / 2.0;
    let _ = write!(
        out,
        r#"<text class="chart-axis-label" x="{axis_x:.2}" y="{axis_y:.2}" transform="rotate(-90 {axis_x:.2} {axis_y:.2})" text-anchor="middle" font-size="{}" fill="{}">{}</text>"#,
        style.axis_label_size,
        chart.family.axis_label_color().hex(),
        escape(chart.family.axis_label())
    );

    // Y ticks.
    let tick_m = fonts::measure(FontWeight::Regular, style.tick_size);
    out.push_str(r#"<g class="chart-ticks">"#);
    for (tick, label) in chart.ticks.iter().zip(&tick_labels) {
        let y = frame.y(*tick);
        let _ = write!(
            out,
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{ink}" stroke-width="1"/>"#,
            frame.left - TICK_LEN,
            frame.left
        );
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end" font-size="{}" fill="{ink}">{}</text>"#,
            frame.left - TICK_LEN - TICK_GAP,
            y + (tick_m.asc - tick_m.desc) / 2.0,
            style.tick_size,
            escape(label)
        );
    }
    out.push_str("</g>");

    // Bars.
    out.push_str(r#"<g class="chart-bars">"#);
    for (idx, bar) in chart.bars.iter().enumerate() {
        let center = idx as f64;
        let x0 = frame.x(center - style.bar_width / 2.0);
        let x1 = frame.x(center + style.bar_width / 2.0);
        let top = frame.y(bar.value.max(0.0));
        let _ = write!(
            out,
            r#"<rect class="chart-bar" data-category="{}" data-value="{}" x="{x0:.2}" y="{top:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            category_slug(idx),
            bar.value,
            x1 - x0,
            frame.bottom - top,
            bar.color.hex()
        );
    }
    out.push_str("</g>");

    // Value annotations, bottom-aligned just above each bar.
    let value_m = fonts::measure(FontWeight::Regular, style.value_size);
    out.push_str(r#"<g class="chart-values">"#);
    for (idx, bar) in chart.bars.iter().enumerate() {
        let _ = write!(
            out,
            r#"<text data-category="{}" x="{:.2}" y="{:.2}" text-anchor="middle" font-size="{}" fill="{ink}">{}</text>"#,
            category_slug(idx),
            frame.x(idx as f64),
            frame.y(bar.label_anchor().max(0.0)) - value_m.desc,
            style.value_size,
            escape(&bar.label)
        );
    }
    out.push_str("</g>");

    // Category labels, rotated; no tick marks on the category axis.
    out.push_str(r#"<g class="chart-categories">"#);
    for (idx, bar) in chart.bars.iter().enumerate() {
        let x = frame.x(idx as f64);
        let y = frame.bottom + 8.0 + tick_m.asc;
        let _ = write!(
            out,
            r#"<text x="{x:.2}" y="{y:.2}" transform="rotate({:.1} {x:.2} {y:.2})" text-anchor="middle" font-size="{}" fill="{ink}">{}</text>"#,
            -style.category_rotation,
            style.tick_size,
            escape(bar.category.label())
        );
    }
    out.push_str("</g>");

    // Left and bottom spines only.
    let _ = write!(
        out,
        r#"<line class="chart-spine" x1="{l:.2}" y1="{t:.2}" x2="{l:.2}" y2="{b:.2}" stroke="{ink}" stroke-width="1.2"/><line class="chart-spine" x1="{l:.2}" y1="{b:.2}" x2="{r:.2}" y2="{b:.2}" stroke="{ink}" stroke-width="1.2"/>"#,
        l = frame.left,
        t = frame.top,
        b = frame.bottom,
        r = frame.right
    );

    out.push_str("</g>");
    out
}

struct Frame {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    y_max: f64,
}

impl Frame {
    fn x(&self, category_pos: f64) -> f64 {
        self.left + (category_pos - X_LO) / (X_HI - X_LO) * (self.right - self.left)
    }

    fn y(&self, value: f64) -> f64 {
        self.bottom - value / self.y_max * (self.bottom - self.top)
    }
}

fn category_slug(idx: usize) -> &'static str {
    if idx == 0 {
        "baseline"
    } else {
        "projected"
    }
}

fn document_open(width: u32, height: u32, style: &ChartStyle) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{}"><rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
        style.font_family,
        style.background.hex()
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standalone(family: ChartFamily, baseline: f64, projected: f64) -> ChartImage {
        render_standalone(&BarChart::new(family, baseline, projected), &ChartStyle::default())
    }

    fn attr_values<'a>(markup: &'a str, attr: &str) -> Vec<&'a str> {
        let needle = format!("{attr}=\"");
        markup
            .match_indices(&needle)
            .filter_map(|(pos, _)| {
                let rest = &markup[pos + needle.len()..];
                rest.find('"').map(|end| &rest[..end])
            })
            .collect()
    }

    #[test]
    fn standalone_panel_has_two_bars_in_order() {
        let image = standalone(ChartFamily::WasteValorized, 90.0, 81.0);
        assert_eq!(attr_values(&image.image.markup, "data-value"), vec!["90", "81"]);
        let categories = attr_values(&image.image.markup, "data-category");
        assert_eq!(&categories[..2], &["baseline", "projected"]);
        assert!(image.image.markup.contains(">90.00<"));
        assert!(image.image.markup.contains(">81.00<"));
    }

    #[test]
    fn combined_embeds_identical_panels() {
        let style = ChartStyle::default();
        let charts = [
            BarChart::new(ChartFamily::WasteValorized, 90.0, 81.0),
            BarChart::new(ChartFamily::EnergyGenerated, 20_000.0, 20_000.0),
            BarChart::new(ChartFamily::TotalRevenue, 9_000_000.0, 10_000_000.0),
        ];
        let combined = render_combined(&charts, &style);
        assert_eq!(combined.width, 3 * PANEL_WIDTH);
        for chart in &charts {
            let standalone = render_standalone(chart, &style);
            assert!(combined.markup.contains(&render_panel(chart, &style)));
            assert!(standalone.image.markup.contains(&render_panel(chart, &style)));
        }
    }

    #[test]
    fn taller_value_gets_taller_bar() {
        let chart = standalone(ChartFamily::EnergyGenerated, 20_000.0, 40_000.0);
        let heights: Vec<f64> = attr_values(&chart.image.markup, "height")
            .into_iter()
            .skip(2) // svg root + background rect
            .filter_map(|h| h.parse().ok())
            .collect();
        assert_eq!(heights.len(), 2);
        assert!((heights[1] / heights[0] - 2.0).abs() < 1e-3);
    }

    #[test]
    fn zero_values_render_flat_bars() {
        let chart = standalone(ChartFamily::TotalRevenue, 0.0, 0.0);
        assert!(chart.image.markup.contains(r#"data-y-max="1000000""#));
        assert!(chart.image.markup.contains(r#"height="0.00""#));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }
}
