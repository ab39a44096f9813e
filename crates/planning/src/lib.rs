//! The wastenot planning core: recipe scoring against the current inventory,
//! per-slot meal suggestion, weekly plan assembly, and the daily meal
//! forecast.
//!
//! Everything in here is pure and synchronous over immutable snapshots; the
//! only `await` points are the two provider loads in
//! [`generate_weekly_plan`], which must complete before planning begins.

pub mod error;
pub mod matching;
pub mod plan;
pub mod prediction;
pub mod scoring;
pub mod selector;

pub use error::PlanningError;
pub use matching::{ExactMatcher, IngredientMatcher, SubstringMatcher};
pub use plan::{DayOfWeek, DayPlan, WeeklyPlan, WeeklyPlanner};
pub use prediction::{
    accept_suggestion, analyze_history, expiring_within_window, forecast_meals, HistoricalPatterns,
    MealForecast, MealSuggestion, SuggestionPriority, KARMA_PER_SUGGESTION_USED,
};
pub use scoring::{ScoreBreakdown, ScoreWeights, ScoringEngine};
pub use selector::{Filters, MealSelector, MealTypeFilter, Suggestion};

use wastenot_inventory::InventoryProvider;
use wastenot_recipe::{CatalogProvider, MealType};
use wastenot_shared::Clock;

/// Load catalog and inventory, then assemble the week.
///
/// Both loads are awaited up front; a failure in either surfaces as a
/// [`PlanningError`] before any scoring happens. Planning against partially
/// loaded data is not allowed.
pub async fn generate_weekly_plan(
    catalog: &dyn CatalogProvider,
    inventory: &dyn InventoryProvider,
    filters: &Filters,
    clock: &dyn Clock,
) -> Result<WeeklyPlan, PlanningError> {
    let recipes = catalog.load().await?;
    let items = inventory.load().await?;
    let planner = WeeklyPlanner::new();
    Ok(planner.build_week(&recipes, &items, filters, clock.today()))
}

/// Load catalog and inventory, then pick a single suggestion for `slot`.
pub async fn suggest_meal(
    slot: MealType,
    catalog: &dyn CatalogProvider,
    inventory: &dyn InventoryProvider,
    filters: &Filters,
    clock: &dyn Clock,
) -> Result<Option<Suggestion>, PlanningError> {
    let recipes = catalog.load().await?;
    let items = inventory.load().await?;
    let selector = MealSelector::new();
    Ok(selector.suggest(slot, &recipes, &items, filters, clock.today()))
}
