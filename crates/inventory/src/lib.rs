//! Household inventory for wastenot: the ordered item store with expiry
//! tracking, donation scheduling against local centers, and the async
//! provider seam the planner reads snapshots through.

pub mod donation;
pub mod error;
pub mod item;
pub mod provider;
pub mod store;

pub use donation::{
    builtin_centers, find_center, Donation, DonationCenter, DonationLog, DonationStatus,
    KARMA_PER_ITEM_DONATED,
};
pub use error::InventoryError;
pub use item::{InventoryItem, ItemPatch, NewItem};
pub use provider::{InMemoryInventory, InventoryLoadError, InventoryProvider, JsonFileInventory};
pub use store::{InventoryStore, KARMA_PER_ITEM_ADDED};
