use thiserror::Error;

/// Rejections raised by estimate operations. Always recoverable: the session
/// is left exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EstimateError {
    #[error("quantity must be a whole number of at least 1 (got {0})")]
    InvalidQuantity(String),
    #[error("markup rate must be a number of at least 0 (got {0})")]
    InvalidMarkupRate(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate cost item id: {0}")]
    DuplicateId(String),
    #[error("cost item {id} has an invalid unit cost ({value})")]
    InvalidUnitCost { id: String, value: f64 },
    #[error("embedded asset missing: {0}")]
    MissingAsset(String),
}
