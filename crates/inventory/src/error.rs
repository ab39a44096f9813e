use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Item name must not be empty")]
    EmptyName,

    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(f64),

    #[error("Expiry date {0} is in the past")]
    ExpiryInPast(NaiveDate),

    #[error("No inventory item with id {0}")]
    ItemNotFound(u64),

    #[error("Select at least one item to donate")]
    NoItemsSelected,

    #[error("Pickup date {0} is in the past")]
    PickupDateInPast(NaiveDate),

    #[error("No donation center with id {0}")]
    UnknownCenter(u32),
}
