use dioxus::prelude::*;

use estimate_builder::domain::{EstimateLineItem, EstimateSummary};
use estimate_builder::util::format::{format_amount, format_currency, format_percent};

use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct EstimateRow {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

impl From<&EstimateLineItem> for EstimateRow {
    fn from(line: &EstimateLineItem) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            unit: line.unit.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            total_price: line.total_price,
        }
    }
}

#[component]
pub fn EstimateTable(
    rows: Vec<EstimateRow>,
    summary: EstimateSummary,
    currency: String,
    on_remove: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    let total_price = format_currency(summary.total_price, &currency);
    let total_cost = format_currency(summary.total_cost, &currency);
    let total_profit = format_currency(summary.total_profit, &currency);
    let profit_rate = format_percent(summary.profit_rate);
    let profit_tone = theme::profit_tone(summary.total_profit);

    rsx! {
        div {
            class: "{theme::PANEL}",
            h2 { class: "{theme::PANEL_TITLE}", "Estimate" }
            p {
                class: "{theme::PANEL_DESCRIPTION}",
                "Total {total_price} (cost {total_cost}, profit {total_profit})"
            }

            if rows.is_empty() {
                p { class: "{theme::TEXT_MUTED} empty-state", "No items added yet." }
            } else {
                table {
                    class: "estimate-table",
                    thead {
                        tr {
                            th { "Item" }
                            th { "Unit" }
                            th { class: "{theme::NUMERIC}", "Qty" }
                            th { class: "{theme::NUMERIC}", "Unit price ({currency})" }
                            th { class: "{theme::NUMERIC}", "Amount ({currency})" }
                            th { class: "centered", "Remove" }
                        }
                    }
                    tbody {
                        for row in rows {
                            EstimateTableRow { row, on_remove }
                        }
                    }
                }
            }

            div {
                class: "estimate-footer",
                dl {
                    class: "summary-list",
                    div { dt { "Total cost" } dd { "{total_cost}" } }
                    div { dt { "Total profit" } dd { class: "{profit_tone}", "{total_profit}" } }
                    div { dt { "Profit rate" } dd { "{profit_rate}" } }
                    div { class: "summary-total", dt { "Estimate total" } dd { "{total_price}" } }
                }
                button {
                    class: "{theme::BTN_OUTLINE} full-width",
                    onclick: move |_| on_clear.call(()),
                    "Clear all"
                }
            }
        }
    }
}

#[component]
fn EstimateTableRow(row: EstimateRow, on_remove: EventHandler<String>) -> Element {
    let unit_price = format_amount(row.unit_price);
    let total_price = format_amount(row.total_price);
    let id = row.id.clone();

    rsx! {
        tr {
            td { "{row.name}" }
            td { "{row.unit}" }
            td { class: "{theme::NUMERIC}", "{row.quantity}" }
            td { class: "{theme::NUMERIC}", "{unit_price}" }
            td { class: "{theme::NUMERIC}", "{total_price}" }
            td {
                class: "centered",
                button {
                    class: "{theme::BTN_DANGER_SMALL}",
                    onclick: move |_| on_remove.call(id.clone()),
                    "Remove"
                }
            }
        }
    }
}
