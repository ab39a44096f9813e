use crate::error::InventoryError;
use crate::item::InventoryItem;
use crate::store::InventoryStore;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use wastenot_shared::{Clock, EventSink, KarmaEvent};

/// Karma awarded per item in a scheduled donation pickup.
pub const KARMA_PER_ITEM_DONATED: i64 = 50;

/// A local center accepting food donations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationCenter {
    pub id: u32,
    pub name: String,
    pub distance_miles: f64,
    pub accepts: String,
    pub rating: f64,
    #[serde(default)]
    pub priority: Option<String>,
}

/// The built-in center directory.
pub fn builtin_centers() -> Vec<DonationCenter> {
    vec![
        DonationCenter {
            id: 1,
            name: "Community Food Bank".into(),
            distance_miles: 0.8,
            accepts: "All foods".into(),
            rating: 4.8,
            priority: None,
        },
        DonationCenter {
            id: 2,
            name: "Local Shelter".into(),
            distance_miles: 1.2,
            accepts: "Non-perishables".into(),
            rating: 4.6,
            priority: None,
        },
        DonationCenter {
            id: 3,
            name: "Food Rescue Hub".into(),
            distance_miles: 2.5,
            accepts: "All foods".into(),
            rating: 4.9,
            priority: Some("Fresh produce".into()),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DonationStatus {
    Scheduled,
    Completed,
}

/// A scheduled pickup. Donated items are removed from the inventory at
/// scheduling time and carried here for the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: u64,
    pub center_id: u32,
    pub center_name: String,
    pub items: Vec<InventoryItem>,
    pub pickup_date: NaiveDate,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
}

/// Append-only history of scheduled donations.
#[derive(Debug, Default)]
pub struct DonationLog {
    donations: Vec<Donation>,
    next_id: u64,
}

impl DonationLog {
    pub fn new() -> Self {
        DonationLog {
            donations: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a log from persisted donations, continuing the id sequence.
    pub fn from_donations(donations: Vec<Donation>) -> Self {
        let next_id = donations.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        DonationLog { donations, next_id }
    }

    /// Schedule a pickup of the selected items.
    ///
    /// The selection must be non-empty, every id must exist in the store, and
    /// the pickup date must not be in the past. On success the items move out
    /// of the inventory into the donation record and karma is awarded per
    /// item donated.
    pub fn schedule(
        &mut self,
        store: &mut InventoryStore,
        center: &DonationCenter,
        item_ids: &[u64],
        pickup_date: NaiveDate,
        clock: &dyn Clock,
        sink: &dyn EventSink,
    ) -> Result<&Donation, InventoryError> {
        if item_ids.is_empty() {
            return Err(InventoryError::NoItemsSelected);
        }
        if pickup_date < clock.today() {
            return Err(InventoryError::PickupDateInPast(pickup_date));
        }
        // Check every id up front so a bad selection removes nothing.
        for &id in item_ids {
            if store.get(id).is_none() {
                return Err(InventoryError::ItemNotFound(id));
            }
        }

        let mut items = Vec::with_capacity(item_ids.len());
        for &id in item_ids {
            items.push(store.remove(id)?);
        }

        let donation = Donation {
            id: self.next_id,
            center_id: center.id,
            center_name: center.name.clone(),
            items,
            pickup_date,
            status: DonationStatus::Scheduled,
            created_at: clock.now(),
        };
        self.next_id += 1;
        tracing::info!(
            donation = donation.id,
            center = %donation.center_name,
            items = donation.items.len(),
            "Scheduled donation pickup"
        );
        sink.emit(KarmaEvent::new(
            KARMA_PER_ITEM_DONATED * donation.items.len() as i64,
            format!("Donated {} items", donation.items.len()),
            clock.now(),
        ));
        self.donations.push(donation);
        Ok(self.donations.last().expect("just pushed"))
    }

    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }

    /// Total individual items donated across every scheduled pickup.
    pub fn items_donated(&self) -> usize {
        self.donations.iter().map(|d| d.items.len()).sum()
    }
}

/// Look up a center by id in a directory slice.
pub fn find_center(centers: &[DonationCenter], id: u32) -> Result<&DonationCenter, InventoryError> {
    centers
        .iter()
        .find(|c| c.id == id)
        .ok_or(InventoryError::UnknownCenter(id))
}
