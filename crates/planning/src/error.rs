use thiserror::Error;
use wastenot_inventory::InventoryLoadError;
use wastenot_recipe::CatalogError;

/// Planning never starts against partially loaded data: either upstream
/// fetch failing aborts the whole run. Scoring and selection themselves are
/// infallible (sentinel values, never errors).
#[derive(Error, Debug)]
pub enum PlanningError {
    #[error("Recipe catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),

    #[error("Inventory snapshot unavailable: {0}")]
    InventoryUnavailable(#[from] InventoryLoadError),
}
