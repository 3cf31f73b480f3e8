pub mod catalog;
pub mod estimate;

pub use catalog::CatalogPage;
pub use estimate::EstimatePage;
