//! Read-only catalog of cost items.

use std::collections::HashSet;

use super::entities::CostItem;
use super::error::CatalogError;
use crate::util::assets;

const BUILTIN_CATALOG: &str = "catalog.json";

/// Immutable list of cost items in load order. Ids are unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CostItem>,
}

impl Catalog {
    pub fn new(items: Vec<CostItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if !item.unit_cost.is_finite() || item.unit_cost < 0.0 {
                return Err(CatalogError::InvalidUnitCost {
                    id: item.id.clone(),
                    value: item.unit_cost,
                });
            }
        }

        Ok(Self { items })
    }

    /// Parses a JSON array of cost items and validates it.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let items: Vec<CostItem> = serde_json::from_str(data)?;
        Self::new(items)
    }

    /// The catalog shipped inside the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let data = assets::load_text(BUILTIN_CATALOG)
            .ok_or_else(|| CatalogError::MissingAsset(BUILTIN_CATALOG.to_string()))?;
        let catalog = Self::from_json(&data)?;
        tracing::debug!(items = catalog.len(), "loaded builtin catalog");
        Ok(catalog)
    }

    pub fn items(&self) -> &[CostItem] {
        &self.items
    }

    pub fn find_by_id(&self, id: &str) -> Option<&CostItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CostItem> {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
