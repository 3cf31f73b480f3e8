//! Shared class names so pages and components stay visually consistent.
//! The matching rules live in `assets/main.css`.

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_OUTLINE: &str = "btn btn-outline";
pub const BTN_DANGER_SMALL: &str = "btn btn-danger btn-sm";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn nav-btn-active"
    } else {
        "nav-btn"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub const INPUT: &str = "input";
pub const LABEL: &str = "field-label";

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub const PANEL: &str = "panel";
pub const PANEL_TITLE: &str = "panel-title";
pub const PANEL_DESCRIPTION: &str = "panel-description";

// ============================================
// TEXT STYLES
// ============================================

pub const TEXT_MUTED: &str = "text-muted";
pub const NUMERIC: &str = "numeric";

/// Colour for a profit figure: positive, zero or negative.
pub fn profit_tone(value: f64) -> &'static str {
    if value > 0.0 {
        "tone-positive"
    } else if value < 0.0 {
        "tone-negative"
    } else {
        "tone-neutral"
    }
}
