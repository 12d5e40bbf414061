use dioxus::prelude::*;

use super::{ChartFamily, SvgImage};
use crate::t;

/// Combined three-panel chart for the current snapshot.
#[component]
pub fn ChartsPanel(combined: SvgImage) -> Element {
    let description = ChartFamily::ALL
        .iter()
        .map(|family| family.title())
        .collect::<Vec<_>>()
        .join(" · ");

    rsx! {
        section { class: "sim-card sim-charts",
            div { class: "sim-card__header",
                h2 { {t!("charts-header")} }
                span { class: "sim-card__meta", {t!("charts-legend")} }
            }
            div {
                class: "sim-charts__figure",
                role: "img",
                aria_label: "{description}",
                dangerous_inner_html: "{combined.markup}",
            }
        }
    }
}
