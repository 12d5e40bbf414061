//! Baseline vs. projection bar charts: numeric model, SVG rendering and the Dioxus panel.

mod fonts;
pub mod model;
pub mod svg;

mod view;
pub use view::ChartsPanel;

pub(crate) use fonts::embedded_font_data;
pub use model::{BarChart, Category, ChartFamily, ChartStyle};
pub use svg::{ChartImage, SvgImage};

use crate::core::formula::{Baseline, DerivedMetrics};

/// Every chart image for one snapshot: the combined view plus one standalone image per family.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub charts: [BarChart; 3],
    pub combined: SvgImage,
    pub standalone: [ChartImage; 3],
}

impl ChartSet {
    pub fn render(baseline: &Baseline, metrics: &DerivedMetrics, style: &ChartStyle) -> Self {
        let charts = ChartFamily::ALL.map(|family| BarChart::from_metrics(family, baseline, metrics));
        let combined = svg::render_combined(&charts, style);
        let standalone = [
            svg::render_standalone(&charts[0], style),
            svg::render_standalone(&charts[1], style),
            svg::render_standalone(&charts[2], style),
        ];

        Self {
            charts,
            combined,
            standalone,
        }
    }

    pub fn chart(&self, family: ChartFamily) -> &BarChart {
        &self.charts[Self::index(family)]
    }

    pub fn standalone(&self, family: ChartFamily) -> &ChartImage {
        &self.standalone[Self::index(family)]
    }

    fn index(family: ChartFamily) -> usize {
        match family {
            ChartFamily::WasteValorized => 0,
            ChartFamily::EnergyGenerated => 1,
            ChartFamily::TotalRevenue => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{formula, formula::BASELINE, params::ParameterSet};

    #[test]
    fn charts_follow_family_order() {
        let metrics = formula::compute(&ParameterSet::defaults());
        let set = ChartSet::render(&BASELINE, &metrics, &ChartStyle::default());
        for family in ChartFamily::ALL {
            assert_eq!(set.chart(family).family, family);
            assert_eq!(set.standalone(family).family, family);
        }
    }

    #[test]
    fn default_projection_values() {
        let metrics = formula::compute(&ParameterSet::defaults());
        let set = ChartSet::render(&BASELINE, &metrics, &ChartStyle::default());
        let revenue = set.chart(ChartFamily::TotalRevenue);
        assert_eq!(revenue.bar(Category::Baseline).label, "CLP 9,000,000");
        assert_eq!(revenue.bar(Category::Projected).label, "CLP 10,000,000");
        assert_eq!(
            set.chart(ChartFamily::WasteValorized).bar(Category::Projected).label,
            "81.00"
        );
    }
}
