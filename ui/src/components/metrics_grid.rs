use dioxus::prelude::*;

use crate::core::{format, formula::DerivedMetrics};
use crate::t;

#[derive(Clone)]
struct MetricCard {
    icon: &'static str,
    label: String,
    value: String,
    caption: String,
}

/// Projected annual results, one card per metric.
#[component]
pub fn MetricsGrid(metrics: DerivedMetrics) -> Element {
    let cards = [
        MetricCard {
            icon: "♻️",
            label: t!("metric-waste-valorized"),
            value: format::format_tonnes(metrics.waste_valorized),
            caption: t!("metric-waste-valorized-caption"),
        },
        MetricCard {
            icon: "🌾",
            label: t!("metric-agrochemicals"),
            value: format::format_tonnes(metrics.avoided_agrochemicals),
            caption: t!("metric-agrochemicals-caption"),
        },
        MetricCard {
            icon: "⚡",
            label: t!("metric-energy-revenue"),
            value: format::format_currency(metrics.energy_revenue),
            caption: t!("metric-energy-revenue-caption"),
        },
        MetricCard {
            icon: "💰",
            label: t!("metric-biofertilizer-revenue"),
            value: format::format_currency(metrics.biofertilizer_revenue),
            caption: t!("metric-biofertilizer-revenue-caption"),
        },
        MetricCard {
            icon: "📈",
            label: t!("metric-total-revenue"),
            value: format::format_currency(metrics.total_revenue),
            caption: t!("metric-total-revenue-caption"),
        },
        MetricCard {
            icon: "🧑‍🏫",
            label: t!("metric-trained-people"),
            value: t!("metric-trained-people-value", count = metrics.trained_people),
            caption: t!("metric-trained-people-caption"),
        },
        MetricCard {
            icon: "🤝",
            label: t!("metric-alliances"),
            value: t!("metric-alliances-value", count = metrics.collaborative_alliances),
            caption: t!("metric-alliances-caption"),
        },
    ];

    rsx! {
        section { class: "sim-card sim-metrics",
            div { class: "sim-card__header",
                h2 { {t!("results-header")} }
            }
            div { class: "sim-metrics__grid",
                for card in cards.into_iter() {
                    div { class: "sim-metric",
                        span { class: "sim-metric__label",
                            span { class: "sim-metric__icon", aria_hidden: "true", "{card.icon}" }
                            "{card.label}"
                        }
                        strong { class: "sim-metric__value", "{card.value}" }
                        span { class: "sim-metric__caption", "{card.caption}" }
                    }
                }
            }
        }
    }
}
