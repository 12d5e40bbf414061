//! Numeric model behind each comparison chart: bar values, axis bounds, ticks and labels.
//!
//! Everything the SVG layer draws is decided here so the combined view and the
//! standalone exports cannot drift apart.

use std::fmt;

use crate::core::{
    format::{format_grouped, CURRENCY},
    formula::{Baseline, DerivedMetrics},
};

/// Headroom above the tallest bar.
pub const HEADROOM: f64 = 1.15;
/// Value labels sit this fraction of the bar height above the bar top.
pub const LABEL_LIFT: f64 = 0.05;

/// sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Project palette (P13 brand plus Sustrend complements).
pub mod palette {
    use super::Rgb;

    pub const TEAL_DARK: Rgb = Rgb(0x0E, 0x45, 0x4A);
    pub const GREEN: Rgb = Rgb(0x1F, 0xFF, 0x5F);
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    pub const BLUE_LIGHT: Rgb = Rgb(0x00, 0x9B, 0xD3);
    pub const BLUE_DARK: Rgb = Rgb(0x00, 0x36, 0x6E);
}

/// Shared styling for every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub background: Rgb,
    /// Tick labels, category labels, value annotations.
    pub ink: Rgb,
    pub title: Rgb,
    /// Bar width in category units (categories sit one unit apart).
    pub bar_width: f64,
    pub font_family: &'static str,
    pub title_size: f64,
    pub axis_label_size: f64,
    pub tick_size: f64,
    pub value_size: f64,
    /// Counter-clockwise rotation of the category labels, degrees.
    pub category_rotation: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: palette::WHITE,
            ink: palette::TEAL_DARK,
            title: palette::BLUE_DARK,
            bar_width: 0.6,
            font_family: "Inter, 'DejaVu Sans', Arial, sans-serif",
            title_size: 19.0,
            axis_label_size: 16.0,
            tick_size: 13.0,
            value_size: 13.0,
            category_rotation: 15.0,
        }
    }
}

/// The two bar categories, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Baseline,
    Projected,
}

impl Category {
    pub const ORDER: [Category; 2] = [Category::Baseline, Category::Projected];

    pub fn label(self) -> &'static str {
        match self {
            Category::Baseline => "Línea Base",
            Category::Projected => "Proyección",
        }
    }
}

/// One of the three compared metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartFamily {
    WasteValorized,
    EnergyGenerated,
    TotalRevenue,
}

impl ChartFamily {
    pub const ALL: [ChartFamily; 3] = [
        ChartFamily::WasteValorized,
        ChartFamily::EnergyGenerated,
        ChartFamily::TotalRevenue,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartFamily::WasteValorized => "Residuos Valorizados",
            ChartFamily::EnergyGenerated => "Energía Generada",
            ChartFamily::TotalRevenue => "Ingresos Totales",
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            ChartFamily::WasteValorized => "Toneladas/año",
            ChartFamily::EnergyGenerated => "kWh/año",
            ChartFamily::TotalRevenue => "CLP/año",
        }
    }

    /// Smallest permitted axis top, so near-zero data still gets a readable axis.
    pub fn axis_floor(self) -> f64 {
        match self {
            ChartFamily::WasteValorized => 1.0,
            ChartFamily::EnergyGenerated => 1_000.0,
            ChartFamily::TotalRevenue => 1_000_000.0,
        }
    }

    /// Download name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            ChartFamily::WasteValorized => "Residuos_Valorizados",
            ChartFamily::EnergyGenerated => "Energia_Generada",
            ChartFamily::TotalRevenue => "Ingresos_Totales",
        }
    }

    pub fn filename(self) -> String {
        format!("{}.png", self.file_stem())
    }

    /// DOM / SVG id fragment.
    pub fn slug(self) -> &'static str {
        match self {
            ChartFamily::WasteValorized => "waste",
            ChartFamily::EnergyGenerated => "energy",
            ChartFamily::TotalRevenue => "revenue",
        }
    }

    /// `[baseline, projected]` bar fills.
    pub fn bar_colors(self) -> [Rgb; 2] {
        match self {
            ChartFamily::WasteValorized => [palette::TEAL_DARK, palette::GREEN],
            ChartFamily::EnergyGenerated => [palette::BLUE_LIGHT, palette::BLUE_DARK],
            ChartFamily::TotalRevenue => [palette::GREEN, palette::TEAL_DARK],
        }
    }

    pub fn axis_label_color(self) -> Rgb {
        match self {
            ChartFamily::EnergyGenerated => palette::TEAL_DARK,
            _ => palette::BLUE_DARK,
        }
    }

    /// Annotation text drawn above a bar.
    pub fn format_value(self, value: f64) -> String {
        match self {
            ChartFamily::WasteValorized => format_grouped(value, 2),
            ChartFamily::EnergyGenerated => format_grouped(value, 0),
            ChartFamily::TotalRevenue => format!("{CURRENCY} {}", format_grouped(value, 0)),
        }
    }

    /// `(baseline, projected)` pair for this family.
    pub fn values(self, baseline: &Baseline, metrics: &DerivedMetrics) -> (f64, f64) {
        match self {
            ChartFamily::WasteValorized => (baseline.waste_valorized, metrics.waste_valorized),
            ChartFamily::EnergyGenerated => (baseline.energy_generated, metrics.energy_generated),
            ChartFamily::TotalRevenue => (baseline.total_revenue, metrics.total_revenue),
        }
    }
}

impl fmt::Display for ChartFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: Category,
    pub value: f64,
    pub label: String,
    pub color: Rgb,
}

impl Bar {
    /// Data-space y of the annotation anchor (bottom of the text).
    pub fn label_anchor(&self) -> f64 {
        self.value + LABEL_LIFT * self.value
    }
}

/// A fully resolved two-bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub family: ChartFamily,
    pub bars: [Bar; 2],
    /// Axis runs from 0 to this value.
    pub y_max: f64,
    pub ticks: Vec<f64>,
}

impl BarChart {
    pub fn new(family: ChartFamily, baseline: f64, projected: f64) -> Self {
        let y_max = axis_upper_bound(family, baseline, projected);
        let [base_color, proj_color] = family.bar_colors();
        let bar = |category, value: f64, color| Bar {
            category,
            value,
            label: family.format_value(value),
            color,
        };

        Self {
            family,
            bars: [
                bar(Category::Baseline, baseline, base_color),
                bar(Category::Projected, projected, proj_color),
            ],
            y_max,
            ticks: nice_ticks(y_max),
        }
    }

    pub fn from_metrics(family: ChartFamily, baseline: &Baseline, metrics: &DerivedMetrics) -> Self {
        let (base, projected) = family.values(baseline, metrics);
        Self::new(family, base, projected)
    }

    pub fn bar(&self, category: Category) -> &Bar {
        match category {
            Category::Baseline => &self.bars[0],
            Category::Projected => &self.bars[1],
        }
    }

    pub fn tick_label(&self, tick: f64) -> String {
        let step = match self.ticks.as_slice() {
            [_, second, ..] => *second,
            _ => self.y_max,
        };
        format_grouped(tick, tick_decimals(step))
    }
}

/// `max(max(baseline, projected) * 1.15, floor)`.
pub fn axis_upper_bound(family: ChartFamily, baseline: f64, projected: f64) -> f64 {
    (baseline.max(projected) * HEADROOM).max(family.axis_floor())
}

/// Evenly spaced 1-2-2.5-5 ticks from 0 up to `y_max`, roughly five intervals.
pub fn nice_ticks(y_max: f64) -> Vec<f64> {
    if !(y_max.is_finite() && y_max > 0.0) {
        return vec![0.0];
    }
    let step = nice_step(y_max / 5.0);
    let count = (y_max / step + 1e-9).floor() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|f| *f >= normalized - 1e-12)
        .unwrap_or(10.0);
    factor * magnitude
}

fn tick_decimals(step: f64) -> usize {
    if step >= 1.0 {
        return 0;
    }
    let mut places = 0;
    let mut scaled = step;
    while (scaled - scaled.round()).abs() > 1e-9 && places < 6 {
        scaled *= 10.0;
        places += 1;
    }
    places
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_bound_has_headroom() {
        let chart = BarChart::new(ChartFamily::WasteValorized, 90.0, 81.0);
        assert!((chart.y_max - 103.5).abs() < 1e-9);
    }

    #[test]
    fn axis_bound_respects_family_floor_at_zero() {
        for family in ChartFamily::ALL {
            let chart = BarChart::new(family, 0.0, 0.0);
            assert_eq!(chart.y_max, family.axis_floor());
            assert!(chart.ticks.len() >= 2);
        }
    }

    #[test]
    fn axis_bound_never_below_headroom_or_floor() {
        let samples = [0.0, 0.3, 1.0, 870.0, 20_000.0, 9_000_000.0, 4.1e7];
        for family in ChartFamily::ALL {
            for &a in &samples {
                for &b in &samples {
                    let top = axis_upper_bound(family, a, b);
                    assert!(top >= a.max(b) * HEADROOM);
                    assert!(top >= family.axis_floor());
                }
            }
        }
    }

    #[test]
    fn bars_keep_fixed_order() {
        let chart = BarChart::new(ChartFamily::EnergyGenerated, 20_000.0, 35_000.0);
        assert_eq!(chart.bars[0].category, Category::Baseline);
        assert_eq!(chart.bars[1].category, Category::Projected);
        assert_eq!(chart.bar(Category::Projected).value, 35_000.0);
    }

    #[test]
    fn labels_follow_family_format() {
        assert_eq!(ChartFamily::WasteValorized.format_value(81.0), "81.00");
        assert_eq!(ChartFamily::EnergyGenerated.format_value(20_000.0), "20,000");
        assert_eq!(
            ChartFamily::TotalRevenue.format_value(10_000_000.0),
            "CLP 10,000,000"
        );
    }

    #[test]
    fn label_anchor_sits_above_bar_and_below_axis_top() {
        let chart = BarChart::new(ChartFamily::TotalRevenue, 9_000_000.0, 10_000_000.0);
        for bar in &chart.bars {
            assert!(bar.label_anchor() >= bar.value);
            assert!(bar.label_anchor() <= chart.y_max);
        }
    }

    #[test]
    fn ticks_start_at_zero_and_stay_under_bound() {
        for y_max in [1.0, 103.5, 1_150.0, 23_000.0, 11_500_000.0] {
            let ticks = nice_ticks(y_max);
            assert_eq!(ticks[0], 0.0);
            assert!(ticks.iter().all(|t| *t <= y_max + 1e-9));
            assert!((3..=11).contains(&ticks.len()), "{y_max}: {ticks:?}");
        }
    }

    #[test]
    fn fractional_ticks_keep_decimals() {
        let chart = BarChart::new(ChartFamily::WasteValorized, 0.0, 0.0);
        assert_eq!(chart.tick_label(chart.ticks[1]), "0.2");
        let big = BarChart::new(ChartFamily::TotalRevenue, 9_000_000.0, 10_000_000.0);
        assert_eq!(big.tick_label(2_000_000.0), "2,000,000");
    }

    #[test]
    fn filenames_are_fixed() {
        assert_eq!(ChartFamily::WasteValorized.filename(), "Residuos_Valorizados.png");
        assert_eq!(ChartFamily::EnergyGenerated.filename(), "Energia_Generada.png");
        assert_eq!(ChartFamily::TotalRevenue.filename(), "Ingresos_Totales.png");
    }
}
