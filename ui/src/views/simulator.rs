use dioxus::prelude::*;
use tracing::debug;

use crate::charts::ChartsPanel;
use crate::components::{LogoStrip, MetricsGrid, ParameterPanel};
use crate::core::{format, scenario::Scenario};
use crate::export::ExportPanel;
use crate::t;

/// Scenario state for the whole session.
///
/// Owned by the app shell above the router, so switching language or route
/// remounts the views without resetting any slider.
#[derive(Clone, Copy)]
pub struct ScenarioSession {
    pub scenario: Signal<Scenario>,
    /// Screen-reader summary of the latest edit.
    pub announcement: Signal<String>,
}

/// Create the session scenario and provide it to every descendant.
///
/// Call once from the root `App`, outside any keyed wrapper.
pub fn use_scenario_session() -> ScenarioSession {
    let mut announcement = use_signal(String::new);
    // The observer is attached before the signal exists, so no signal is written during render.
    let scenario = use_signal(move || {
        let mut scenario = Scenario::new();
        let id = scenario.subscribe(move |snapshot| {
            announcement.set(t!(
                "sim-updated",
                total = format::format_currency(snapshot.metrics.total_revenue)
            ));
        });
        debug!(?id, "session subscribed to scenario updates");
        scenario
    });
    use_context_provider(|| ScenarioSession {
        scenario,
        announcement,
    })
}

/// The scenario calculator: sliders, projected metrics, charts and exports.
#[component]
pub fn Simulator() -> Element {
    // Re-render on global language change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let ScenarioSession {
        scenario,
        announcement,
    } = use_context::<ScenarioSession>();

    let (metrics, combined) = {
        let current = scenario.read();
        let snapshot = current.snapshot();
        (snapshot.metrics, snapshot.combined().clone())
    };

    rsx! {
        section { class: "page page-simulator",
            div { style: "display:none", "{_lang_current}" }

            header { class: "sim-hero",
                h1 { {t!("sim-title")} }
                p { class: "sim-hero__subtitle", {t!("sim-subtitle")} }
                p { class: "sim-hero__intro", {t!("sim-intro")} }
            }

            div { class: "sim-layout",
                ParameterPanel { scenario }

                div { class: "sim-main",
                    MetricsGrid { metrics }
                    ChartsPanel { combined }
                    ExportPanel { scenario }
                    p { class: "visually-hidden", aria_live: "polite", "{announcement}" }
                }
            }

            section { class: "sim-card sim-info",
                h2 { {t!("info-header")} }
                p {
                    strong { {t!("info-status-label")} }
                    " "
                    {t!("info-status-body")}
                }
            }

            footer { class: "sim-footer",
                p { class: "sim-footer__credit", {t!("footer-credit")} }
                LogoStrip {}
                p { class: "sim-footer__location", {t!("footer-location")} }
            }
        }
    }
}
