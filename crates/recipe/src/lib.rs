//! Recipe reference data for wastenot: meal types, ingredients, the built-in
//! catalog, and the async provider seam the planner loads catalogs through.

pub mod catalog;
pub mod error;
pub mod provider;
pub mod types;

pub use catalog::builtin_catalog;
pub use error::CatalogError;
pub use provider::{CatalogProvider, JsonFileCatalog, StaticCatalog};
pub use types::{Ingredient, MealType, Recipe};
