use crate::error::InventoryError;
use crate::item::{InventoryItem, ItemPatch, NewItem};
use chrono::NaiveDate;
use wastenot_shared::{Clock, EventSink, KarmaEvent};

/// Karma awarded for logging a new item instead of letting food go untracked.
pub const KARMA_PER_ITEM_ADDED: i64 = 10;

/// Ordered collection of perishable items. Insertion order is preserved and
/// is the order every snapshot (and therefore every planner tie-break) sees.
#[derive(Debug, Default)]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
    next_id: u64,
}

impl InventoryStore {
    pub fn new() -> Self {
        InventoryStore {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from previously persisted items, keeping their ids.
    pub fn from_items(items: Vec<InventoryItem>) -> Self {
        let next_id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        InventoryStore { items, next_id }
    }

    /// Validate and append a new item, awarding karma for the entry.
    ///
    /// The expiry date must not be strictly before today. That is a
    /// creation-time check only; stored items age into expiry naturally.
    pub fn add(
        &mut self,
        new: NewItem,
        clock: &dyn Clock,
        sink: &dyn EventSink,
    ) -> Result<&InventoryItem, InventoryError> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(InventoryError::EmptyName);
        }
        if !(new.quantity > 0.0) {
            return Err(InventoryError::InvalidQuantity(new.quantity));
        }
        let today = clock.today();
        if new.expiry_date < today {
            return Err(InventoryError::ExpiryInPast(new.expiry_date));
        }

        let item = InventoryItem {
            id: self.next_id,
            name,
            quantity: new.quantity,
            unit: new.unit,
            expiry_date: new.expiry_date,
            added_date: today,
        };
        self.next_id += 1;
        tracing::debug!(id = item.id, name = %item.name, "Added inventory item");
        sink.emit(KarmaEvent::new(
            KARMA_PER_ITEM_ADDED,
            "Added item to inventory",
            clock.now(),
        ));
        self.items.push(item);
        Ok(self.items.last().expect("just pushed"))
    }

    /// Remove an item (consumed or donated), returning it.
    pub fn remove(&mut self, id: u64) -> Result<InventoryItem, InventoryError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(InventoryError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// Explicit edit. Name and quantity are re-validated; the expiry date is
    /// not, since the not-in-the-past invariant holds at creation time only.
    pub fn update(&mut self, id: u64, patch: ItemPatch) -> Result<&InventoryItem, InventoryError> {
        if let Some(ref name) = patch.name {
            if name.trim().is_empty() {
                return Err(InventoryError::EmptyName);
            }
        }
        if let Some(quantity) = patch.quantity {
            if !(quantity > 0.0) {
                return Err(InventoryError::InvalidQuantity(quantity));
            }
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(InventoryError::ItemNotFound(id))?;
        if let Some(name) = patch.name {
            item.name = name.trim().to_string();
        }
        if let Some(quantity) = patch.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = patch.unit {
            item.unit = unit;
        }
        if let Some(expiry_date) = patch.expiry_date {
            item.expiry_date = expiry_date;
        }
        Ok(item)
    }

    pub fn get(&self, id: u64) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Ordered snapshot of the current items.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items expiring within the next 1..=3 days, in insertion order.
    pub fn expiring_soon(&self, today: NaiveDate) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|i| i.is_expiring_soon(today))
            .collect()
    }

    /// Items already past their expiry date.
    pub fn expired(&self, today: NaiveDate) -> Vec<&InventoryItem> {
        self.items.iter().filter(|i| i.is_expired(today)).collect()
    }

    /// Case-insensitive substring search over item names.
    pub fn search(&self, query: &str) -> Vec<&InventoryItem> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&query))
            .collect()
    }
}
