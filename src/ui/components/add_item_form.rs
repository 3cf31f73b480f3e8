use dioxus::prelude::*;

use estimate_builder::domain::{parse_quantity, price_unit, CostItem, EstimateNotice};
use estimate_builder::util::format::{format_amount, format_currency};

use crate::ui::theme;

/// Catalog selector plus quantity. Emits `(cost_item_id, quantity)` once both
/// inputs validate; the caller owns the session.
#[component]
pub fn AddItemForm(
    items: Vec<CostItem>,
    markup_rate: f64,
    currency: String,
    on_add: EventHandler<(String, u32)>,
    on_notice: EventHandler<EstimateNotice>,
) -> Element {
    let mut selected_id = use_signal(String::new);
    let mut quantity_input = use_signal(|| "1".to_string());

    let options: Vec<(String, String)> = items
        .iter()
        .map(|item| {
            let label = format!(
                "{} ({}) - {}/{}",
                item.name,
                item.category,
                format_currency(item.unit_cost, &currency),
                item.unit
            );
            (item.id.clone(), label)
        })
        .collect();

    let preview = items
        .iter()
        .find(|item| item.id == selected_id())
        .map(|item| SelectionPreview {
            name: item.name.clone(),
            unit: item.unit.clone(),
            cost: format_currency(item.unit_cost, &currency),
            price: format_currency(price_unit(item.unit_cost, markup_rate), &currency),
        });
    let rate_label = format_amount(markup_rate);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let cost_item_id = selected_id();
        if cost_item_id.is_empty() {
            on_notice.call(EstimateNotice::NoSelection);
            return;
        }

        match parse_quantity(&quantity_input()) {
            Ok(quantity) => {
                on_add.call((cost_item_id, quantity));
                selected_id.set(String::new());
                quantity_input.set("1".to_string());
            }
            Err(err) => on_notice.call(EstimateNotice::Rejected(err)),
        }
    };

    rsx! {
        div {
            class: "{theme::PANEL}",
            h2 { class: "{theme::PANEL_TITLE}", "Add estimate item" }
            p { class: "{theme::PANEL_DESCRIPTION}", "Pick an item and enter a quantity." }
            form {
                class: "stack",
                onsubmit: on_submit,
                div {
                    label { class: "{theme::LABEL}", r#for: "cost-item", "Item" }
                    select {
                        id: "cost-item",
                        class: "{theme::INPUT}",
                        value: selected_id(),
                        onchange: move |evt| selected_id.set(evt.value()),
                        option { value: "", disabled: true, "Select an item" }
                        for (id, label) in options {
                            option { key: "{id}", value: "{id}", "{label}" }
                        }
                    }
                }
                div {
                    label { class: "{theme::LABEL}", r#for: "quantity", "Quantity" }
                    input {
                        id: "quantity",
                        class: "{theme::INPUT}",
                        r#type: "number",
                        min: "1",
                        step: "1",
                        value: quantity_input(),
                        oninput: move |evt| quantity_input.set(evt.value()),
                        placeholder: "Quantity",
                    }
                }
                if let Some(preview) = preview {
                    div {
                        class: "preview",
                        p { "Selected: {preview.name}" }
                        p { "Unit: {preview.unit}" }
                        p { "Cost: {preview.cost}" }
                        p {
                            "Sell price: {preview.price} "
                            span { class: "{theme::TEXT_MUTED}", "(markup {rate_label}% applied)" }
                        }
                    }
                }
                button {
                    class: "{theme::BTN_PRIMARY} full-width",
                    r#type: "submit",
                    "Add item"
                }
            }
        }
    }
}

struct SelectionPreview {
    name: String,
    unit: String,
    cost: String,
    price: String,
}
