//! Estimate builder core: a read-only cost catalog, markup pricing and the
//! per-session estimate that ties them together.

pub mod domain;
pub mod util;

pub use domain::{
    Catalog, CatalogError, CostItem, EstimateError, EstimateLineItem, EstimateSession,
    EstimateSummary,
};
