//! Markup pricing and estimate aggregation. Everything here is pure.

use uuid::Uuid;

use super::entities::{CostItem, EstimateLineItem, EstimateSummary};

/// Reference cost used for the worked example on the markup card.
pub const MARKUP_PREVIEW_COST: f64 = 100_000.0;

/// Sell price of one unit at the given markup percentage.
pub fn price_unit(unit_cost: f64, markup_rate: f64) -> f64 {
    unit_cost * (1.0 + markup_rate / 100.0)
}

pub fn price_line(cost_item: &CostItem, quantity: u32, markup_rate: f64) -> EstimateLineItem {
    let unit_price = price_unit(cost_item.unit_cost, markup_rate);
    let quantity_f = quantity as f64;

    EstimateLineItem {
        id: Uuid::new_v4().to_string(),
        cost_item_id: cost_item.id.clone(),
        name: cost_item.name.clone(),
        unit: cost_item.unit.clone(),
        quantity,
        unit_cost: cost_item.unit_cost,
        unit_price,
        total_cost: cost_item.unit_cost * quantity_f,
        total_price: unit_price * quantity_f,
    }
}

/// Recomputes the sell side of a line from its stored cost snapshot.
/// Markup never touches `total_cost`.
pub fn reprice_line(line: &EstimateLineItem, markup_rate: f64) -> EstimateLineItem {
    let unit_price = price_unit(line.unit_cost, markup_rate);

    EstimateLineItem {
        unit_price,
        total_price: unit_price * line.quantity as f64,
        ..line.clone()
    }
}

pub fn summarize(lines: &[EstimateLineItem], markup_rate: f64) -> EstimateSummary {
    let (total_cost, total_price) = lines.iter().fold((0.0, 0.0), |(cost, price), line| {
        (cost + line.total_cost, price + line.total_price)
    });
    let total_profit = total_price - total_cost;

    let profit_rate = if total_cost > 0.0 {
        total_profit / total_cost * 100.0
    } else {
        0.0
    };

    EstimateSummary {
        total_cost,
        total_price,
        total_profit,
        profit_rate,
        markup_rate,
    }
}

/// Sell price of [`MARKUP_PREVIEW_COST`] at the given rate.
pub fn markup_preview(markup_rate: f64) -> f64 {
    price_unit(MARKUP_PREVIEW_COST, markup_rate)
}
