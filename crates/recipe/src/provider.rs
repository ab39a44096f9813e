use crate::catalog::builtin_catalog;
use crate::error::CatalogError;
use crate::types::Recipe;
use async_trait::async_trait;
use std::path::PathBuf;

/// Source of the recipe catalog.
///
/// The load is the planner's only asynchronous boundary: it must complete
/// (or fail) in full before any scoring starts. There are no partial or
/// streaming results.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn load(&self) -> Result<Vec<Recipe>, CatalogError>;
}

/// In-memory catalog; defaults to the built-in seed recipes.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    recipes: Vec<Recipe>,
}

impl StaticCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        StaticCatalog { recipes }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        StaticCatalog {
            recipes: builtin_catalog(),
        }
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn load(&self) -> Result<Vec<Recipe>, CatalogError> {
        Ok(self.recipes.clone())
    }
}

/// Catalog stored as a JSON array of recipes on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileCatalog { path: path.into() }
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<Recipe>, CatalogError> {
        let path = self.path.display().to_string();
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
        let recipes: Vec<Recipe> =
            serde_json::from_slice(&bytes).map_err(|source| CatalogError::Malformed {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(count = recipes.len(), path = %path, "Loaded recipe catalog");
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_catalog_serves_builtin_recipes() {
        let catalog = StaticCatalog::default();
        let recipes = catalog.load().await.unwrap();
        assert!(!recipes.is_empty());
    }

    #[tokio::test]
    async fn json_file_catalog_surfaces_missing_file() {
        let catalog = JsonFileCatalog::new("/nonexistent/recipes.json");
        let err = catalog.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn json_file_catalog_surfaces_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        std::fs::write(&path, "{not json").unwrap();

        let catalog = JsonFileCatalog::new(&path);
        let err = catalog.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[tokio::test]
    async fn json_file_catalog_round_trips_recipes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let recipes = builtin_catalog();
        std::fs::write(&path, serde_json::to_vec(&recipes).unwrap()).unwrap();

        let catalog = JsonFileCatalog::new(&path);
        let loaded = catalog.load().await.unwrap();
        assert_eq!(loaded, recipes);
    }
}
