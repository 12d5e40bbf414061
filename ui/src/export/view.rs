use dioxus::prelude::*;
use tracing::warn;

use super::{download_bytes, export_current, ExportArtifact, ExportSettings};
use crate::charts::ChartFamily;
use crate::core::{platform, scenario::Scenario};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(ChartFamily),
    Done(String),
    Error(String),
}

/// One download button per standalone chart.
#[component]
pub fn ExportPanel(scenario: Signal<Scenario>) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(family) => Some((
            "sim-card__meta".to_string(),
            t!("export-working", filename = family.filename()),
        )),
        ExportStatus::Done(message) => Some((
            "sim-card__meta sim-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "sim-card__meta sim-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    rsx! {
        section { class: "sim-card sim-export",
            div { class: "sim-card__header",
                h2 { {t!("export-header")} }
            }
            p { class: "sim-export__hint", {t!("export-hint")} }

            div { class: "sim-export__actions",
                for family in ChartFamily::ALL {
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        "data-family": family.slug(),
                        disabled: busy(),
                        onclick: export_handler(family, scenario, status, busy),
                        {t!("export-button", filename = family.filename())}
                    }
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", role: "status", "{message}" }
            }
        }
    }
}

fn export_handler(
    family: ChartFamily,
    scenario: Signal<Scenario>,
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
) -> impl FnMut(MouseEvent) {
    move |_| {
        if busy() {
            return;
        }
        // Rasterized at click time so the file matches what is on screen.
        let artifact = match export_current(&scenario.read(), family, &ExportSettings::default()) {
            Ok(artifact) => artifact,
            Err(err) => {
                report_failure(family, err.to_string(), status);
                return;
            }
        };
        busy.set(true);
        status.set(ExportStatus::Working(family));

        platform::spawn_future(async move {
            match deliver(artifact).await {
                Ok(message) => status.set(ExportStatus::Done(message)),
                Err(err) => report_failure(family, err, status),
            }
            busy.set(false);
        });
    }
}

fn report_failure(family: ChartFamily, err: String, mut status: Signal<ExportStatus>) {
    warn!(family = family.slug(), %err, "chart export failed");
    status.set(ExportStatus::Error(t!("export-failed", reason = err)));
}

async fn deliver(artifact: ExportArtifact) -> Result<String, String> {
    let ExportArtifact {
        filename,
        mime,
        bytes,
        ..
    } = artifact;
    Ok(match download_bytes(&filename, mime, bytes).await? {
        Some(path) => t!("export-done-saved", path = path),
        None => t!("export-done-download", filename = filename),
    })
}
