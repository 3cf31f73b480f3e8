//! Read-only catalog browser, grouped by category.

use dioxus::prelude::*;

use estimate_builder::domain::{price_unit, EstimateSession};
use estimate_builder::util::format::{format_amount, format_currency};
use estimate_builder::util::settings;

use crate::ui::theme;

#[derive(Clone, PartialEq)]
struct CatalogGroup {
    category: String,
    rows: Vec<CatalogRow>,
}

#[derive(Clone, PartialEq)]
struct CatalogRow {
    id: String,
    name: String,
    unit: String,
    unit_cost: String,
    unit_price: String,
}

#[component]
pub fn CatalogPage() -> Element {
    let session = use_context::<Signal<EstimateSession>>();
    let currency = settings::current().currency_suffix.clone();

    let (markup_rate, groups) = session.with(|st| {
        let rate = st.markup_rate();
        let catalog = st.catalog();
        let groups = catalog
            .categories()
            .into_iter()
            .map(|category| CatalogGroup {
                category: category.to_string(),
                rows: catalog
                    .in_category(category)
                    .map(|item| CatalogRow {
                        id: item.id.clone(),
                        name: item.name.clone(),
                        unit: item.unit.clone(),
                        unit_cost: format_currency(item.unit_cost, &currency),
                        unit_price: format_currency(price_unit(item.unit_cost, rate), &currency),
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();
        (rate, groups)
    });
    let rate_label = format_amount(markup_rate);

    rsx! {
        div { class: "page",
            div {
                class: "{theme::PANEL}",
                h2 { class: "{theme::PANEL_TITLE}", "Catalog" }
                p {
                    class: "{theme::PANEL_DESCRIPTION}",
                    "Sell prices shown at the current markup of {rate_label}%."
                }
                if groups.is_empty() {
                    p { class: "{theme::TEXT_MUTED} empty-state", "The catalog is empty." }
                }
                for group in groups {
                    div {
                        key: "{group.category}",
                        class: "catalog-group",
                        h3 { class: "{theme::LABEL}", "{group.category}" }
                        table {
                            class: "estimate-table",
                            thead {
                                tr {
                                    th { "Item" }
                                    th { "Unit" }
                                    th { class: "{theme::NUMERIC}", "Cost" }
                                    th { class: "{theme::NUMERIC}", "Sell price" }
                                }
                            }
                            tbody {
                                for row in group.rows {
                                    tr {
                                        key: "{row.id}",
                                        td { "{row.name}" }
                                        td { "{row.unit}" }
                                        td { class: "{theme::NUMERIC}", "{row.unit_cost}" }
                                        td { class: "{theme::NUMERIC}", "{row.unit_price}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
