use dioxus::prelude::*;

use crate::core::{
    format,
    params::{ParamId, ParameterSet},
    scenario::Scenario,
};
use crate::t;

/// Sidebar with one slider per scenario parameter.
///
/// Range inputs already keep values inside `[min, max]` on their step grid;
/// `ParamSpec::parse_input` snaps again so a hand-edited DOM value cannot slip
/// through.
#[component]
pub fn ParameterPanel(mut scenario: Signal<Scenario>) -> Element {
    let params: ParameterSet = *scenario.read().params();

    rsx! {
        aside { class: "sim-sidebar",
            h2 { class: "sim-sidebar__title", {t!("params-header")} }

            for id in ParamId::ALL {
                {render_slider(id, params.get(id), scenario)}
            }

            button {
                r#type: "button",
                class: "button button--ghost sim-sidebar__reset",
                onclick: move |_| {
                    scenario.write().reset();
                },
                {t!("params-reset")}
            }

            p { class: "sim-sidebar__version",
                {t!("footer-version", version = env!("CARGO_PKG_VERSION"))}
            }
        }
    }
}

fn render_slider(id: ParamId, value: f64, mut scenario: Signal<Scenario>) -> Element {
    let spec = id.spec();
    let input_id = format!("param-{}", spec.key);
    let readout = format::format_param(spec, value);

    rsx! {
        div { class: "sim-param",
            label { class: "sim-param__label", r#for: "{input_id}",
                span { class: "sim-param__name", {param_label(id)} }
                span { class: "sim-param__value", "{readout}" }
            }
            input {
                id: "{input_id}",
                class: "sim-param__slider",
                r#type: "range",
                min: "{spec.min}",
                max: "{spec.max}",
                step: "{spec.step}",
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    if let Some(next) = spec.parse_input(&evt.value()) {
                        scenario.write().set(id, next);
                    }
                },
            }
            p { class: "sim-param__help", {param_help(id)} }
        }
    }
}

fn param_label(id: ParamId) -> String {
    match id {
        ParamId::WasteTreated => t!("param-waste-treated"),
        ParamId::ValorizationRate => t!("param-valorization-rate"),
        ParamId::EnergyGenerated => t!("param-energy-generated"),
        ParamId::BiofertilizerProduced => t!("param-biofertilizer-produced"),
        ParamId::RecycledMaterialsPct => t!("param-recycled-materials"),
        ParamId::EnergyPrice => t!("param-energy-price"),
        ParamId::BiofertilizerPrice => t!("param-biofertilizer-price"),
    }
}

fn param_help(id: ParamId) -> String {
    match id {
        ParamId::WasteTreated => t!("param-waste-treated-help"),
        ParamId::ValorizationRate => t!("param-valorization-rate-help"),
        ParamId::EnergyGenerated => t!("param-energy-generated-help"),
        ParamId::BiofertilizerProduced => t!("param-biofertilizer-produced-help"),
        ParamId::RecycledMaterialsPct => t!("param-recycled-materials-help"),
        ParamId::EnergyPrice => t!("param-energy-price-help"),
        ParamId::BiofertilizerPrice => t!("param-biofertilizer-price-help"),
    }
}
