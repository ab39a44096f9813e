use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A perishable item in the household inventory.
///
/// Owned exclusively by the [`crate::InventoryStore`]: created on submission,
/// removed on consumption or donation, otherwise only changed through an
/// explicit edit. An item may drift past its expiry date while stored; that
/// is observed through [`InventoryItem::is_expired`], never re-validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u64,
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
    pub expiry_date: NaiveDate,
    pub added_date: NaiveDate,
}

impl InventoryItem {
    /// Whole days between `today` and the expiry date. Negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    /// Expiry date is today or earlier. Day-of expiry counts as expired,
    /// matching the midnight cutoff the expiry date represents.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.days_until_expiry(today) <= 0
    }

    /// Expires within the next 1..=3 days. Already-expired items are never
    /// "expiring soon".
    pub fn is_expiring_soon(&self, today: NaiveDate) -> bool {
        (1..=3).contains(&self.days_until_expiry(today))
    }
}

/// User-submitted fields for a new item; the store assigns `id` and
/// `added_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
    pub expiry_date: NaiveDate,
}

/// Partial update applied by an explicit edit. `None` fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<Option<String>>,
    pub expiry_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_expiring_on(expiry: NaiveDate) -> InventoryItem {
        InventoryItem {
            id: 1,
            name: "milk".into(),
            quantity: 1.0,
            unit: Some("litre".into()),
            expiry_date: expiry,
            added_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    #[test]
    fn expiring_soon_window_is_one_to_three_days() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

        for (days_out, expiring, expired) in [
            (-1, false, true),
            (0, false, true),
            (1, true, false),
            (3, true, false),
            (4, false, false),
        ] {
            let item = item_expiring_on(today + chrono::Duration::days(days_out));
            assert_eq!(item.is_expiring_soon(today), expiring, "{days_out} days out");
            assert_eq!(item.is_expired(today), expired, "{days_out} days out");
        }
    }
}
