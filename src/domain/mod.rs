//! Catalog, pricing and estimate session logic lives here.

pub mod catalog;
pub mod entities;
pub mod error;
pub mod notice;
pub mod pricing;
pub mod session;

pub use catalog::Catalog;
pub use entities::{CostItem, CostItemId, EstimateLineItem, EstimateSummary, LineItemId};
pub use error::{CatalogError, EstimateError};
pub use notice::{EstimateNotice, NoticeFeed, NoticeLevel, PostedNotice};
pub use pricing::{markup_preview, price_line, price_unit, reprice_line, summarize};
pub use session::{parse_markup_rate, parse_quantity, EstimateSession};
