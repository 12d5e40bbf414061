use dioxus::prelude::*;

use crate::core::{
    format,
    formula::{BASELINE, COLLABORATIVE_ALLIANCES, TRAINED_PEOPLE},
};
use crate::t;

/// Reference values and the formulas behind the projections.
#[component]
pub fn About() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let baseline_rows = [
        (t!("about-baseline-waste"), format::format_tonnes(BASELINE.waste_valorized)),
        (
            t!("about-baseline-energy"),
            format!("{} kWh/año", format::format_grouped(BASELINE.energy_generated, 0)),
        ),
        (
            t!("about-baseline-biofertilizer"),
            format::format_tonnes(BASELINE.biofertilizer_produced),
        ),
        (
            t!("about-baseline-agrochemicals"),
            format::format_tonnes(BASELINE.avoided_agrochemicals()),
        ),
        (t!("about-baseline-revenue"), format::format_currency(BASELINE.total_revenue)),
    ];

    rsx! {
        section { class: "page page-about",
            div { style: "display:none", "{_lang_current}" }
            h1 { {t!("about-title")} }
            p { {t!("about-intro")} }

            section { class: "sim-card",
                div { class: "sim-card__header",
                    h2 { {t!("about-baseline-header")} }
                }
                dl { class: "about-baseline",
                    for (label, value) in baseline_rows.into_iter() {
                        div { class: "about-baseline__row",
                            dt { "{label}" }
                            dd { "{value}" }
                        }
                    }
                }
            }

            section { class: "sim-card",
                div { class: "sim-card__header",
                    h2 { {t!("about-formulas-header")} }
                }
                ul { class: "about-formulas",
                    li { {t!("about-formula-waste")} }
                    li { {t!("about-formula-agrochemicals")} }
                    li { {t!("about-formula-energy")} }
                    li { {t!("about-formula-biofertilizer")} }
                    li { {t!("about-formula-total")} }
                    li { {t!("about-formula-constants", people = TRAINED_PEOPLE, alliances = COLLABORATIVE_ALLIANCES)} }
                }
            }

            p { class: "sim-footer__credit", {t!("footer-credit")} }
        }
    }
}
