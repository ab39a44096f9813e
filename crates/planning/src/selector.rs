use crate::matching::{IngredientMatcher, SubstringMatcher};
use crate::scoring::{ScoreBreakdown, ScoringEngine};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wastenot_inventory::InventoryItem;
use wastenot_recipe::{MealType, Recipe};

/// User-facing meal-type filter. `All` lets any recipe into any slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTypeFilter {
    #[default]
    All,
    Only(MealType),
}

impl MealTypeFilter {
    pub fn allows(&self, meal_type: MealType) -> bool {
        match self {
            MealTypeFilter::All => true,
            MealTypeFilter::Only(only) => *only == meal_type,
        }
    }
}

/// Transient, user-set filters applied before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    pub meal_type: MealTypeFilter,
    /// Upper bound on prep + cook minutes; `None` means unbounded.
    pub max_total_time_min: Option<u32>,
    /// Carried from the original filter surface; the expiring-ingredient
    /// scoring term applies unconditionally, so this flag is currently inert.
    pub use_expiring_first: bool,
}

impl Default for Filters {
    fn default() -> Self {
        Filters {
            meal_type: MealTypeFilter::All,
            max_total_time_min: None,
            use_expiring_first: true,
        }
    }
}

/// A selected recipe together with the slot it was chosen for and the score
/// that won it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub recipe: Recipe,
    pub slot: MealType,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Picks the best-scoring candidate recipe for a meal slot.
#[derive(Debug, Clone, Default)]
pub struct MealSelector<M: IngredientMatcher = SubstringMatcher> {
    engine: ScoringEngine<M>,
}

impl MealSelector<SubstringMatcher> {
    pub fn new() -> Self {
        MealSelector::default()
    }
}

impl<M: IngredientMatcher> MealSelector<M> {
    pub fn with_engine(engine: ScoringEngine<M>) -> Self {
        MealSelector { engine }
    }

    pub fn engine(&self) -> &ScoringEngine<M> {
        &self.engine
    }

    /// Best suggestion for `slot`, or `None` when no candidate survives the
    /// filters - a normal planning outcome, not an error.
    ///
    /// Candidates are constrained by the user-set [`Filters`] only; the slot
    /// itself does not restrict eligibility (so with the default `All` filter
    /// a dinner recipe can be suggested for breakfast, as the original app
    /// did). Ties keep catalog order: the sort is stable and descending.
    pub fn suggest(
        &self,
        slot: MealType,
        recipes: &[Recipe],
        inventory: &[InventoryItem],
        filters: &Filters,
        today: NaiveDate,
    ) -> Option<Suggestion> {
        let mut candidates: Vec<(&Recipe, ScoreBreakdown)> = recipes
            .iter()
            .filter(|recipe| filters.meal_type.allows(recipe.meal_type))
            .filter(|recipe| {
                filters
                    .max_total_time_min
                    .map_or(true, |max| recipe.total_time_min() <= max)
            })
            .map(|recipe| (recipe, self.engine.breakdown(recipe, inventory, today)))
            .collect();

        candidates.sort_by(|(_, a), (_, b)| {
            b.total()
                .partial_cmp(&a.total())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let (recipe, breakdown) = candidates.into_iter().next()?;
        tracing::trace!(slot = %slot, recipe = %recipe.id, score = breakdown.total(), "Selected meal suggestion");
        Some(Suggestion {
            recipe: recipe.clone(),
            slot,
            score: breakdown.total(),
            breakdown,
        })
    }
}
