use dioxus::prelude::*;

use estimate_builder::domain::{
    markup_preview, parse_markup_rate, pricing::MARKUP_PREVIEW_COST, EstimateNotice,
};
use estimate_builder::util::format::{format_amount, format_currency};

use crate::ui::theme;

#[component]
pub fn MarkupSettings(
    markup_rate: f64,
    currency: String,
    on_change: EventHandler<f64>,
    on_notice: EventHandler<EstimateNotice>,
) -> Element {
    let mut rate_input = use_signal(|| markup_rate.to_string());

    // Invalid input snaps back to the rate that is actually applied.
    let on_apply = move |_| match parse_markup_rate(&rate_input()) {
        Ok(rate) => on_change.call(rate),
        Err(reason) => {
            rate_input.set(markup_rate.to_string());
            on_notice.call(EstimateNotice::MarkupRejected {
                reason,
                kept_rate: markup_rate,
            });
        }
    };

    let rate_label = format_amount(markup_rate);
    let factor = format_amount(1.0 + markup_rate / 100.0);
    let example_cost = format_amount(MARKUP_PREVIEW_COST);
    let example_price = format_currency(markup_preview(markup_rate), &currency);

    rsx! {
        div {
            class: "{theme::PANEL}",
            h2 { class: "{theme::PANEL_TITLE}", "Markup" }
            p { class: "{theme::PANEL_DESCRIPTION}", "Markup applied on top of cost to get the sell price." }
            div {
                class: "stack",
                label { class: "{theme::LABEL}", r#for: "markup-rate", "Markup rate (%)" }
                div {
                    class: "inline-row",
                    input {
                        id: "markup-rate",
                        class: "{theme::INPUT}",
                        r#type: "number",
                        min: "0",
                        step: "1",
                        value: rate_input(),
                        oninput: move |evt| rate_input.set(evt.value()),
                    }
                    button { class: "{theme::BTN_PRIMARY}", onclick: on_apply, "Apply" }
                }
                div {
                    class: "markup-notes",
                    p { "Current markup: {rate_label}%" }
                    p { class: "{theme::TEXT_MUTED}", "A {rate_label}% markup adds {rate_label}% of the cost to the price." }
                    p { class: "{theme::TEXT_MUTED}", "e.g. cost {example_cost} × {factor} = {example_price}" }
                }
            }
        }
    }
}
