use dioxus::prelude::*;

use estimate_builder::domain::{EstimateNotice, EstimateSession, NoticeFeed};
use estimate_builder::util::format::{format_currency, format_percent};
use estimate_builder::util::settings;

use crate::ui::{
    components::{
        add_item_form::AddItemForm,
        estimate_table::{EstimateRow, EstimateTable},
        kpi_card::KpiCard,
        markup_settings::MarkupSettings,
        notices::post_notice,
    },
    theme,
};

#[component]
pub fn EstimatePage() -> Element {
    let mut session = use_context::<Signal<EstimateSession>>();
    let notices = use_context::<Signal<NoticeFeed>>();
    let currency = settings::current().currency_suffix.clone();

    let (catalog_items, markup_rate, summary, rows) = session.with(|st| {
        (
            st.catalog().items().to_vec(),
            st.markup_rate(),
            st.summary().clone(),
            st.items().iter().map(EstimateRow::from).collect::<Vec<_>>(),
        )
    });

    let line_count = rows.len();
    let total_price = format_currency(summary.total_price, &currency);
    let total_cost = format_currency(summary.total_cost, &currency);
    let total_profit = format_currency(summary.total_profit, &currency);
    let profit_tone = theme::profit_tone(summary.total_profit);
    let profit_rate = format_percent(summary.profit_rate);

    let on_add = move |(cost_item_id, quantity): (String, u32)| {
        let notice = session.with_mut(|st| {
            EstimateNotice::from_add(&cost_item_id, st.add_item(&cost_item_id, quantity))
        });
        post_notice(notices, notice);
    };

    let on_remove = move |line_id: String| {
        let removed = session.with_mut(|st| {
            let name = st.find_item(&line_id).map(|line| line.name.clone());
            st.remove_item(&line_id);
            name
        });
        if let Some(name) = removed {
            post_notice(notices, EstimateNotice::LineRemoved { name });
        }
    };

    let on_clear = move |_| {
        let lines = session.with_mut(|st| {
            let lines = st.len();
            st.clear();
            lines
        });
        if lines > 0 {
            post_notice(notices, EstimateNotice::Cleared { lines });
        }
    };

    let on_markup_change = move |rate: f64| {
        let notice = session.with_mut(|st| {
            let outcome = st.set_markup_rate(rate);
            EstimateNotice::from_markup(outcome, st.markup_rate(), st.len())
        });
        post_notice(notices, notice);
    };

    let on_notice = move |notice: EstimateNotice| post_notice(notices, notice);

    rsx! {
        div { class: "page",
            section {
                class: "kpi-grid",
                KpiCard {
                    title: "Estimate total".to_string(),
                    value: total_price,
                    description: Some(format!("{line_count} line items")),
                }
                KpiCard {
                    title: "Total cost".to_string(),
                    value: total_cost,
                }
                KpiCard {
                    title: "Total profit".to_string(),
                    value: total_profit,
                    tone: Some(profit_tone),
                }
                KpiCard {
                    title: "Profit rate".to_string(),
                    value: profit_rate,
                    description: Some("Profit relative to cost".to_string()),
                }
            }

            section {
                class: "estimate-layout",
                div {
                    class: "stack",
                    AddItemForm {
                        items: catalog_items,
                        markup_rate,
                        currency: currency.clone(),
                        on_add,
                        on_notice,
                    }
                    MarkupSettings {
                        markup_rate,
                        currency: currency.clone(),
                        on_change: on_markup_change,
                        on_notice,
                    }
                }
                EstimateTable {
                    rows,
                    summary,
                    currency,
                    on_remove,
                    on_clear,
                }
            }
        }
    }
}
