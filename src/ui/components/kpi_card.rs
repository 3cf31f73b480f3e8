use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    tone: Option<&'static str>,
) -> Element {
    let tone = tone.unwrap_or("tone-neutral");
    rsx! {
        div {
            class: "{theme::PANEL} kpi-card",
            h3 { class: "{theme::LABEL}", "{title}" }
            p { class: "kpi-value {tone}", "{value}" }
            if let Some(desc) = description {
                p { class: "{theme::TEXT_MUTED} kpi-description", "{desc}" }
            }
        }
    }
}
