//! The estimate being built in the current interactive session.

use std::sync::Arc;

use super::catalog::Catalog;
use super::entities::{CostItem, EstimateLineItem, EstimateSummary};
use super::error::EstimateError;
use super::pricing::{price_line, price_unit, reprice_line, summarize};
use crate::util::settings::{Settings, DEFAULT_MARKUP_RATE};

/// Line items plus the markup rate they are priced at.
///
/// Every mutating method rebuilds the derived values before returning, so
/// `summary()` always agrees with `items()`.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimateSession {
    catalog: Arc<Catalog>,
    items: Vec<EstimateLineItem>,
    markup_rate: f64,
    summary: EstimateSummary,
}

impl EstimateSession {
    pub fn new(catalog: Arc<Catalog>, markup_rate: f64) -> Result<Self, EstimateError> {
        let markup_rate = checked_markup_rate(markup_rate)?;
        Ok(Self::empty(catalog, markup_rate))
    }

    /// Starts a session at the configured default markup rate. An unusable
    /// configured rate falls back to [`DEFAULT_MARKUP_RATE`].
    pub fn with_settings(catalog: Arc<Catalog>, settings: &Settings) -> Self {
        match checked_markup_rate(settings.default_markup_rate) {
            Ok(rate) => Self::empty(catalog, rate),
            Err(err) => {
                tracing::warn!("{err}; starting at {DEFAULT_MARKUP_RATE}%");
                Self::empty(catalog, DEFAULT_MARKUP_RATE)
            }
        }
    }

    fn empty(catalog: Arc<Catalog>, markup_rate: f64) -> Self {
        Self {
            catalog,
            items: Vec::new(),
            markup_rate,
            summary: EstimateSummary::empty(markup_rate),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn items(&self) -> &[EstimateLineItem] {
        &self.items
    }

    pub fn summary(&self) -> &EstimateSummary {
        &self.summary
    }

    pub fn markup_rate(&self) -> f64 {
        self.markup_rate
    }

    pub fn find_item(&self, line_item_id: &str) -> Option<&EstimateLineItem> {
        self.items.iter().find(|line| line.id == line_item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prices `quantity` units of a catalog item and appends the line.
    ///
    /// An unknown `cost_item_id` is not an error: nothing changes and
    /// `Ok(None)` is returned.
    pub fn add_item(
        &mut self,
        cost_item_id: &str,
        quantity: u32,
    ) -> Result<Option<&EstimateLineItem>, EstimateError> {
        if quantity < 1 {
            return Err(EstimateError::InvalidQuantity(quantity.to_string()));
        }

        let Some(cost_item) = self.catalog.find_by_id(cost_item_id) else {
            tracing::debug!(cost_item_id, "add skipped: cost item not in catalog");
            return Ok(None);
        };

        let line = price_line(cost_item, quantity, self.markup_rate);
        tracing::debug!(
            line_id = %line.id,
            cost_item_id,
            quantity,
            total_price = line.total_price,
            "line item added"
        );
        self.items.push(line);
        self.recompute();

        Ok(self.items.last())
    }

    /// Removes a line by id. Returns whether anything was removed; a stale id
    /// is harmless.
    pub fn remove_item(&mut self, line_item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.id != line_item_id);
        let removed = self.items.len() != before;
        if removed {
            tracing::debug!(line_id = line_item_id, "line item removed");
        }
        self.recompute();
        removed
    }

    pub fn clear(&mut self) {
        tracing::debug!(lines = self.items.len(), "estimate cleared");
        self.items.clear();
        self.recompute();
    }

    /// Switches to a new markup rate and reprices every existing line.
    pub fn set_markup_rate(&mut self, rate: f64) -> Result<(), EstimateError> {
        let rate = checked_markup_rate(rate).inspect_err(|_| {
            tracing::warn!(rate, current = self.markup_rate, "markup rate rejected");
        })?;

        self.markup_rate = rate;
        self.items = self
            .items
            .iter()
            .map(|line| reprice_line(line, rate))
            .collect();
        self.recompute();
        tracing::debug!(
            rate,
            lines = self.items.len(),
            total_price = self.summary.total_price,
            "markup rate applied"
        );
        Ok(())
    }

    /// Sell price of one unit of `cost_item` at the session's markup.
    pub fn preview_unit_price(&self, cost_item: &CostItem) -> f64 {
        price_unit(cost_item.unit_cost, self.markup_rate)
    }

    fn recompute(&mut self) {
        self.summary = summarize(&self.items, self.markup_rate);
    }
}

/// Accepts finite, non-negative rates. `-0.0` comes back as `0.0` so the sign
/// never reaches the summary or the rate field.
fn checked_markup_rate(rate: f64) -> Result<f64, EstimateError> {
    if rate == 0.0 {
        Ok(0.0)
    } else if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(EstimateError::InvalidMarkupRate(rate.to_string()))
    }
}

/// Parses a quantity typed into the add-item form.
pub fn parse_quantity(input: &str) -> Result<u32, EstimateError> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(EstimateError::InvalidQuantity(trimmed.to_string())),
    }
}

/// Parses a markup percentage typed into the markup settings card.
pub fn parse_markup_rate(input: &str) -> Result<f64, EstimateError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(|rate| checked_markup_rate(rate).ok())
        .ok_or_else(|| EstimateError::InvalidMarkupRate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(rate: f64) -> EstimateSession {
        let catalog = Catalog::builtin().expect("builtin catalog");
        EstimateSession::new(Arc::new(catalog), rate).expect("valid rate")
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn assert_lines_consistent(session: &EstimateSession) {
        for line in session.items() {
            assert!(close(line.total_cost, line.unit_cost * line.quantity as f64));
            assert!(close(line.total_price, line.unit_price * line.quantity as f64));
            assert!(close(
                line.unit_price,
                line.unit_cost * (1.0 + session.markup_rate() / 100.0)
            ));
        }
        assert_eq!(
            *session.summary(),
            summarize(session.items(), session.markup_rate())
        );
    }

    #[test]
    fn new_session_is_empty() {
        let session = session(30.0);
        assert!(session.is_empty());
        assert_eq!(*session.summary(), EstimateSummary::empty(30.0));
    }

    #[test]
    fn rejects_invalid_initial_rate() {
        let catalog = Arc::new(Catalog::default());
        assert!(EstimateSession::new(catalog.clone(), -1.0).is_err());
        assert!(EstimateSession::new(catalog, f64::INFINITY).is_err());
    }

    #[test]
    fn add_prices_and_updates_summary() {
        let mut session = session(30.0);
        let line = session.add_item("item1", 2).unwrap().cloned().expect("added");

        assert!(close(line.unit_price, 45500.0));
        assert_eq!(session.len(), 1);
        assert!(close(session.summary().total_price, 91000.0));
        assert_lines_consistent(&session);
    }

    #[test]
    fn add_unknown_item_is_noop() {
        let mut session = session(30.0);
        session.add_item("item1", 1).unwrap();
        let before = session.clone();

        assert_eq!(session.add_item("nope", 3), Ok(None));
        assert_eq!(session, before);
    }

    #[test]
    fn add_zero_quantity_is_rejected() {
        let mut session = session(30.0);
        let err = session.add_item("item1", 0).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidQuantity(_)));
        assert!(session.is_empty());
    }

    #[test]
    fn same_item_twice_makes_two_lines() {
        let mut session = session(30.0);
        session.add_item("item3", 5).unwrap();
        session.add_item("item3", 5).unwrap();

        assert_eq!(session.len(), 2);
        assert_ne!(session.items()[0].id, session.items()[1].id);
        assert!(close(session.summary().total_cost, 20000.0));
    }

    #[test]
    fn remove_by_id() {
        let mut session = session(30.0);
        let first = session.add_item("item1", 2).unwrap().unwrap().id.clone();
        session.add_item("item2", 10).unwrap();

        assert!(session.remove_item(&first));
        assert_eq!(session.len(), 1);
        assert!(session.find_item(&first).is_none());
        assert!(close(session.summary().total_cost, 15000.0));
        assert_lines_consistent(&session);
    }

    #[test]
    fn removing_missing_id_changes_nothing() {
        let mut session = session(30.0);
        session.add_item("item4", 1).unwrap();
        let before = session.clone();

        assert!(!session.remove_item("missing"));
        assert!(!session.remove_item("missing"));
        assert_eq!(session, before);
    }

    #[test]
    fn clear_zeroes_summary() {
        let mut session = session(45.0);
        session.add_item("item5", 2).unwrap();
        session.add_item("item6", 1).unwrap();
        session.clear();

        assert!(session.is_empty());
        assert_eq!(*session.summary(), EstimateSummary::empty(45.0));
    }

    #[test]
    fn markup_change_reprices_existing_lines() {
        let mut session = session(30.0);
        session.add_item("item1", 2).unwrap();
        session.add_item("item2", 10).unwrap();
        let costs: Vec<f64> = session.items().iter().map(|l| l.total_cost).collect();

        session.set_markup_rate(50.0).unwrap();

        assert_eq!(session.markup_rate(), 50.0);
        let after: Vec<f64> = session.items().iter().map(|l| l.total_cost).collect();
        assert_eq!(costs, after);
        assert!(close(session.items()[0].unit_price, 52500.0));
        assert!(close(session.summary().profit_rate, 50.0));
        assert_eq!(session.summary().markup_rate, 50.0);
        assert_lines_consistent(&session);
    }

    #[test]
    fn invalid_markup_keeps_state() {
        let mut session = session(30.0);
        session.add_item("item1", 2).unwrap();
        let before = session.clone();

        for rate in [-5.0, -0.0001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(session.set_markup_rate(rate).is_err());
            assert_eq!(session, before);
        }
    }

    #[test]
    fn negative_zero_markup_is_stored_as_zero() {
        let mut session = session(30.0);
        session.add_item("item2", 4).unwrap();

        session.set_markup_rate(-0.0).unwrap();
        assert!(session.markup_rate().is_sign_positive());
        assert!(session.summary().markup_rate.is_sign_positive());
        assert_eq!(session.markup_rate().to_string(), "0");
        assert_eq!(session.items()[0].unit_price, session.items()[0].unit_cost);

        let fresh = EstimateSession::new(Arc::new(Catalog::default()), -0.0).unwrap();
        assert!(fresh.markup_rate().is_sign_positive());

        let parsed = parse_markup_rate("-0").unwrap();
        assert!(parsed.is_sign_positive());
    }

    #[test]
    fn zero_markup_prices_at_cost() {
        let mut session = session(30.0);
        session.add_item("item8", 3).unwrap();
        session.set_markup_rate(0.0).unwrap();

        let line = &session.items()[0];
        assert_eq!(line.unit_price, line.unit_cost);
        assert_eq!(session.summary().total_profit, 0.0);
        assert_eq!(session.summary().profit_rate, 0.0);
    }

    #[test]
    fn lines_added_after_markup_change_use_new_rate() {
        let mut session = session(30.0);
        session.set_markup_rate(10.0).unwrap();
        let line = session.add_item("item7", 1).unwrap().cloned().unwrap();
        assert!(close(line.unit_price, 13200.0));
    }

    #[test]
    fn with_settings_uses_default_rate() {
        let settings = Settings {
            default_markup_rate: 15.0,
            ..Settings::default()
        };
        let session = EstimateSession::with_settings(Arc::new(Catalog::default()), &settings);
        assert_eq!(session.markup_rate(), 15.0);

        let broken = Settings {
            default_markup_rate: -10.0,
            ..Settings::default()
        };
        let session = EstimateSession::with_settings(Arc::new(Catalog::default()), &broken);
        assert_eq!(session.markup_rate(), DEFAULT_MARKUP_RATE);
    }

    #[test]
    fn preview_matches_line_price() {
        let mut session = session(30.0);
        let cost_item = session.catalog().find_by_id("item4").cloned().unwrap();
        let preview = session.preview_unit_price(&cost_item);
        let line = session.add_item("item4", 1).unwrap().cloned().unwrap();
        assert_eq!(preview, line.unit_price);
    }

    #[test]
    fn parses_quantity_input() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-2").is_err());
        assert!(parse_quantity("1.5").is_err());
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("abc").is_err());
    }

    #[test]
    fn parses_markup_input() {
        assert_eq!(parse_markup_rate("30"), Ok(30.0));
        assert_eq!(parse_markup_rate("12.5"), Ok(12.5));
        assert_eq!(parse_markup_rate("0"), Ok(0.0));
        assert!(parse_markup_rate("-5").is_err());
        assert!(parse_markup_rate("abc").is_err());
        assert!(parse_markup_rate("").is_err());
        assert!(parse_markup_rate("NaN").is_err());
        assert!(parse_markup_rate("inf").is_err());
    }
}
