use serde::{Deserialize, Serialize};

/// Identifier for catalog cost items.
pub type CostItemId = String;

/// Identifier for estimate lines, unique within a session.
pub type LineItemId = String;

/// A purchasable cost item from the catalog. Never mutated after load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    pub id: CostItemId,
    pub name: String,
    pub category: String,
    /// Base cost per unit, non-negative.
    pub unit_cost: f64,
    /// Display label for one unit ("m", "license", ...).
    pub unit: String,
}

/// One priced entry in an estimate.
///
/// `name`, `unit` and `unit_cost` are snapshots taken from the catalog when
/// the line was added; the derived fields are recomputed from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateLineItem {
    pub id: LineItemId,
    pub cost_item_id: CostItemId,
    pub name: String,
    pub unit: String,
    pub quantity: u32,
    pub unit_cost: f64,
    pub unit_price: f64,
    pub total_cost: f64,
    pub total_price: f64,
}

impl EstimateLineItem {
    /// Sell-side profit on this line alone.
    pub fn profit(&self) -> f64 {
        self.total_price - self.total_cost
    }
}

/// Aggregate figures over every line of an estimate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateSummary {
    pub total_cost: f64,
    pub total_price: f64,
    pub total_profit: f64,
    /// Profit as a percentage of total cost; `0` when there is no cost.
    pub profit_rate: f64,
    pub markup_rate: f64,
}

impl EstimateSummary {
    /// The summary of an estimate without lines.
    pub fn empty(markup_rate: f64) -> Self {
        Self {
            markup_rate,
            ..Default::default()
        }
    }
}
