use dioxus::prelude::*;

use crate::core::branding::{LogoBoard, LOGOS, LOGO_WIDTH};
use crate::t;

/// Partner logos with an inline notice for any that fail to load.
///
/// Owns its own state; nothing here reaches the scenario.
#[component]
pub fn LogoStrip() -> Element {
    let board = use_signal(LogoBoard::new);
    render_strip(board)
}

fn render_strip(board: Signal<LogoBoard>) -> Element {
    let summary = board.read().error_summary();

    rsx! {
        div { class: "sim-logos",
            div { class: "sim-logos__row",
                for (idx, logo) in LOGOS.iter().enumerate() {
                    {render_logo(idx, logo.name, logo.url, board)}
                }
            }
            if let Some(details) = summary {
                p { class: "sim-logos__error", role: "alert",
                    {t!("logos-error", details = details)}
                }
            }
        }
    }
}

fn render_logo(
    idx: usize,
    name: &'static str,
    url: &'static str,
    mut board: Signal<LogoBoard>,
) -> Element {
    let failed = board.read().is_failed(idx);

    rsx! {
        if failed {
            span { class: "sim-logos__fallback", "{name}" }
        } else {
            img {
                class: "sim-logos__image",
                src: url,
                alt: name,
                width: "{LOGO_WIDTH}",
                onload: move |_| board.write().mark_loaded(idx),
                onerror: move |_| board.write().mark_failed(idx, t!("logos-error-reason")),
            }
        }
    }
}
