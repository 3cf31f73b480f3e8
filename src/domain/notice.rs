//! Outcomes of estimate edits as the user sees them, kept in a short feed.

use std::collections::VecDeque;

use super::entities::EstimateLineItem;
use super::error::EstimateError;
use crate::util::format::{format_amount, format_currency};

/// Older notices are dropped once the feed holds this many.
pub const NOTICE_CAPACITY: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EstimateNotice {
    LineAdded {
        name: String,
        quantity: u32,
        total_price: f64,
    },
    NotInCatalog {
        cost_item_id: String,
    },
    NoSelection,
    LineRemoved {
        name: String,
    },
    Cleared {
        lines: usize,
    },
    MarkupApplied {
        rate: f64,
        lines: usize,
    },
    MarkupRejected {
        reason: EstimateError,
        kept_rate: f64,
    },
    Rejected(EstimateError),
}

impl EstimateNotice {
    /// Describes the result of `EstimateSession::add_item`.
    pub fn from_add(
        cost_item_id: &str,
        outcome: Result<Option<&EstimateLineItem>, EstimateError>,
    ) -> Self {
        match outcome {
            Ok(Some(line)) => Self::LineAdded {
                name: line.name.clone(),
                quantity: line.quantity,
                total_price: line.total_price,
            },
            Ok(None) => Self::NotInCatalog {
                cost_item_id: cost_item_id.to_string(),
            },
            Err(err) => Self::Rejected(err),
        }
    }

    /// Describes the result of `EstimateSession::set_markup_rate`. `current`
    /// is the rate in force after the call.
    pub fn from_markup(outcome: Result<(), EstimateError>, current: f64, lines: usize) -> Self {
        match outcome {
            Ok(()) => Self::MarkupApplied {
                rate: current,
                lines,
            },
            Err(reason) => Self::MarkupRejected {
                reason,
                kept_rate: current,
            },
        }
    }

    pub fn level(&self) -> NoticeLevel {
        match self {
            Self::LineAdded { .. } | Self::MarkupApplied { .. } => NoticeLevel::Success,
            Self::LineRemoved { .. } | Self::Cleared { .. } => NoticeLevel::Info,
            Self::NotInCatalog { .. } | Self::NoSelection => NoticeLevel::Warning,
            Self::MarkupRejected { .. } | Self::Rejected(_) => NoticeLevel::Error,
        }
    }

    pub fn message(&self, currency: &str) -> String {
        match self {
            Self::LineAdded {
                name,
                quantity,
                total_price,
            } => format!(
                "Added {name} × {quantity} ({}).",
                format_currency(*total_price, currency)
            ),
            Self::NotInCatalog { cost_item_id } => {
                format!("Item {cost_item_id} is not in the catalog; nothing was added.")
            }
            Self::NoSelection => "Pick an item first.".to_string(),
            Self::LineRemoved { name } => format!("Removed {name}."),
            Self::Cleared { lines } => format!("Cleared {}.", line_items(*lines)),
            Self::MarkupApplied { rate, lines } => format!(
                "Markup set to {}%; {} repriced.",
                format_amount(*rate),
                line_items(*lines)
            ),
            Self::MarkupRejected { reason, kept_rate } => format!(
                "Markup not changed: {reason}. Still {}%.",
                format_amount(*kept_rate)
            ),
            Self::Rejected(reason) => format!("Not added: {reason}."),
        }
    }
}

fn line_items(count: usize) -> String {
    match count {
        1 => "1 line item".to_string(),
        n => format!("{n} line items"),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostedNotice {
    pub seq: u64,
    pub notice: EstimateNotice,
}

/// Most recent notices, oldest first. Sequence numbers are never reused, so a
/// late dismissal cannot hit a newer notice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeFeed {
    entries: VecDeque<PostedNotice>,
    next_seq: u64,
}

impl NoticeFeed {
    pub fn post(&mut self, notice: EstimateNotice) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        while self.entries.len() >= NOTICE_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(PostedNotice { seq, notice });
        seq
    }

    pub fn dismiss(&mut self, seq: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|posted| posted.seq != seq);
        self.entries.len() != before
    }

    pub fn entries(&self) -> impl Iterator<Item = &PostedNotice> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
