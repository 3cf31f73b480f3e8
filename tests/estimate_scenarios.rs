use std::sync::Arc;

use estimate_builder::domain::{price_unit, summarize, Catalog, EstimateError, EstimateSession};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn session_at(rate: f64) -> EstimateSession {
    let catalog = Catalog::builtin().expect("builtin catalog");
    EstimateSession::new(Arc::new(catalog), rate).expect("valid markup rate")
}

/// LED lighting (35,000) x 2 and network cable (1,500) x 10 at 30%.
fn scenario_b() -> EstimateSession {
    let mut session = session_at(30.0);
    session.add_item("item1", 2).unwrap();
    session.add_item("item2", 10).unwrap();
    session
}

#[test]
fn scenario_a_single_line() {
    let mut session = session_at(30.0);
    let line = session
        .add_item("item1", 2)
        .unwrap()
        .cloned()
        .expect("item1 is in the catalog");

    assert_eq!(line.unit_cost, 35000.0);
    assert!(close(line.unit_price, 45500.0));
    assert!(close(line.total_cost, 70000.0));
    assert!(close(line.total_price, 91000.0));
}

#[test]
fn scenario_b_summary() {
    let session = scenario_b();
    let items = session.items();
    assert!(close(items[1].total_cost, 15000.0));
    assert!(close(items[1].total_price, 19500.0));

    let summary = session.summary();
    assert!(close(summary.total_cost, 85000.0));
    assert!(close(summary.total_price, 110500.0));
    assert!(close(summary.total_profit, 25500.0));
    assert!(close(summary.profit_rate, 30.0));
    assert_eq!(summary.markup_rate, 30.0);
}

#[test]
fn scenario_c_markup_change_reprices_everything() {
    let mut session = scenario_b();
    let costs_before: Vec<f64> = session.items().iter().map(|l| l.total_cost).collect();

    session.set_markup_rate(50.0).unwrap();

    for (line, cost_before) in session.items().iter().zip(costs_before) {
        assert_eq!(line.total_cost, cost_before);
        assert!(close(line.unit_price, price_unit(line.unit_cost, 50.0)));
        assert!(close(line.total_price, line.unit_price * line.quantity as f64));
    }

    let summary = session.summary();
    assert!(close(summary.total_cost, 85000.0));
    assert!(close(summary.total_price, 127500.0));
    assert!(close(summary.total_profit, 42500.0));
    assert_eq!(summary.profit_rate, 50.0);
}

#[test]
fn scenario_d_negative_markup_is_rejected() {
    let mut session = scenario_b();
    let before = session.clone();

    let err = session.set_markup_rate(-5.0).unwrap_err();
    assert!(matches!(err, EstimateError::InvalidMarkupRate(_)));
    assert_eq!(session.markup_rate(), 30.0);
    assert_eq!(session, before);
}

#[test]
fn summary_tracks_lines_through_a_full_edit_sequence() {
    let mut session = session_at(20.0);
    let check = |session: &EstimateSession| {
        assert_eq!(
            *session.summary(),
            summarize(session.items(), session.markup_rate())
        );
        for line in session.items() {
            assert!(close(line.total_cost, line.unit_cost * line.quantity as f64));
            assert!(close(line.total_price, line.unit_price * line.quantity as f64));
        }
    };

    let cctv = session.add_item("item4", 3).unwrap().unwrap().id.clone();
    check(&session);
    session.add_item("item9", 2).unwrap();
    check(&session);
    session.set_markup_rate(35.5).unwrap();
    check(&session);
    assert!(session.remove_item(&cctv));
    check(&session);
    assert!(!session.remove_item(&cctv));
    check(&session);
    session.add_item("item10", 1).unwrap();
    session.set_markup_rate(0.0).unwrap();
    check(&session);
    assert_eq!(session.summary().total_profit, 0.0);
    session.clear();
    check(&session);
    assert_eq!(session.summary().total_price, 0.0);
    assert_eq!(session.summary().profit_rate, 0.0);
}

#[test]
fn unknown_catalog_item_leaves_estimate_untouched() {
    let mut session = scenario_b();
    let before = session.clone();

    assert_eq!(session.add_item("item404", 1), Ok(None));
    assert_eq!(session, before);
}
