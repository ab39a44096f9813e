use crate::item::InventoryItem;
use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryLoadError {
    #[error("Failed to read inventory from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Inventory at {path} is not valid JSON: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of inventory snapshots for the planner.
///
/// The planner never writes through this seam; it consumes one immutable
/// snapshot per invocation. Like the catalog load, this is an all-or-nothing
/// fetch with no partial results.
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    async fn load(&self) -> Result<Vec<InventoryItem>, InventoryLoadError>;
}

/// Fixed in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    items: Vec<InventoryItem>,
}

impl InMemoryInventory {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        InMemoryInventory { items }
    }
}

#[async_trait]
impl InventoryProvider for InMemoryInventory {
    async fn load(&self) -> Result<Vec<InventoryItem>, InventoryLoadError> {
        Ok(self.items.clone())
    }
}

/// Inventory stored as a JSON array of items on disk, the CLI's substitute
/// for the browser's local storage.
#[derive(Debug, Clone)]
pub struct JsonFileInventory {
    path: PathBuf,
}

impl JsonFileInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileInventory { path: path.into() }
    }
}

#[async_trait]
impl InventoryProvider for JsonFileInventory {
    async fn load(&self) -> Result<Vec<InventoryItem>, InventoryLoadError> {
        let path = self.path.display().to_string();
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| InventoryLoadError::Io {
                path: path.clone(),
                source,
            })?;
        let items: Vec<InventoryItem> =
            serde_json::from_slice(&bytes).map_err(|source| InventoryLoadError::Malformed {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(count = items.len(), path = %path, "Loaded inventory snapshot");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_item() -> InventoryItem {
        InventoryItem {
            id: 1,
            name: "banana".into(),
            quantity: 2.0,
            unit: None,
            expiry_date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            added_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
        }
    }

    #[tokio::test]
    async fn in_memory_inventory_returns_snapshot() {
        let provider = InMemoryInventory::new(vec![sample_item()]);
        let items = provider.load().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "banana");
    }

    #[tokio::test]
    async fn json_file_inventory_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let items = vec![sample_item()];
        std::fs::write(&path, serde_json::to_vec(&items).unwrap()).unwrap();

        let provider = JsonFileInventory::new(&path);
        assert_eq!(provider.load().await.unwrap(), items);
    }

    #[tokio::test]
    async fn json_file_inventory_surfaces_load_failure() {
        let provider = JsonFileInventory::new("/nonexistent/inventory.json");
        assert!(matches!(
            provider.load().await,
            Err(InventoryLoadError::Io { .. })
        ));
    }
}
