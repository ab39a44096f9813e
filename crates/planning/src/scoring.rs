use crate::matching::{IngredientMatcher, SubstringMatcher};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use wastenot_inventory::InventoryItem;
use wastenot_recipe::Recipe;

/// Total prep + cook minutes at or under which a recipe earns the full
/// quick-prep bonus.
pub const QUICK_PREP_FULL_BONUS_MIN: u32 = 30;

/// Reference time for the decaying partial quick-prep credit.
pub const QUICK_PREP_REFERENCE_MIN: f64 = 60.0;

/// Assumed ceiling on distinct ingredient categories for the variety bonus.
pub const VARIETY_CATEGORY_CEILING: f64 = 5.0;

/// Weights of the four scoring terms, in points.
///
/// The defaults are the canonical weekly-planner weights. A sibling scorer in
/// the source app weighted availability at 60 with a different shape; the
/// discrepancy was never reconciled upstream, so the weights stay adjustable
/// here rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub availability: f64,
    pub expiring: f64,
    pub quick_prep: f64,
    pub variety: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            availability: 40.0,
            expiring: 30.0,
            quick_prep: 20.0,
            variety: 10.0,
        }
    }
}

/// The four scoring terms plus the ingredient counts behind them, kept for
/// the presentation layer ("3/5 on hand, 2 expiring").
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub availability: f64,
    pub expiring: f64,
    pub quick_prep: f64,
    pub variety: f64,
    pub matched_ingredients: usize,
    pub expiring_ingredients: usize,
    pub total_ingredients: usize,
}

impl ScoreBreakdown {
    /// Sum of the four terms. Nominally in [0, 100]; the quick-prep and
    /// variety terms are deliberately uncapped, so a small overshoot is
    /// possible and accepted.
    pub fn total(&self) -> f64 {
        self.availability + self.expiring + self.quick_prep + self.variety
    }
}

/// Scores a recipe's suitability against the current inventory.
///
/// Pure and infallible: malformed input (a recipe with no ingredients)
/// degrades to a zero score rather than an error.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine<M: IngredientMatcher = SubstringMatcher> {
    matcher: M,
    weights: ScoreWeights,
}

impl ScoringEngine<SubstringMatcher> {
    /// Canonical engine: substring matching, default weights.
    pub fn new() -> Self {
        ScoringEngine::default()
    }
}

impl<M: IngredientMatcher> ScoringEngine<M> {
    pub fn with_matcher(matcher: M) -> Self {
        ScoringEngine {
            matcher,
            weights: ScoreWeights::default(),
        }
    }

    pub fn with_weights(matcher: M, weights: ScoreWeights) -> Self {
        ScoringEngine { matcher, weights }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Suitability of `recipe` given what is on hand today.
    pub fn score(&self, recipe: &Recipe, inventory: &[InventoryItem], today: NaiveDate) -> f64 {
        self.breakdown(recipe, inventory, today).total()
    }

    /// Per-term breakdown of the score, in the order the terms are summed:
    /// availability, expiring-ingredient use, quick-prep bonus, variety.
    pub fn breakdown(
        &self,
        recipe: &Recipe,
        inventory: &[InventoryItem],
        today: NaiveDate,
    ) -> ScoreBreakdown {
        let total_ingredients = recipe.ingredients.len();
        // Zero-ingredient recipes score 0 by definition; guards the division.
        if total_ingredients == 0 {
            return ScoreBreakdown::default();
        }
        let total = total_ingredients as f64;

        let matched_ingredients = recipe
            .ingredients
            .iter()
            .filter(|ing| {
                inventory
                    .iter()
                    .any(|item| self.matcher.matches(&item.name, &ing.name) && item.quantity >= ing.amount)
            })
            .count();
        let availability = matched_ingredients as f64 / total * self.weights.availability;

        // Expiring counts need a matching item in the 1..=3 day window but,
        // unlike availability, not a sufficient quantity.
        let expiring_ingredients = recipe
            .ingredients
            .iter()
            .filter(|ing| {
                inventory
                    .iter()
                    .any(|item| self.matcher.matches(&item.name, &ing.name) && item.is_expiring_soon(today))
            })
            .count();
        let expiring = expiring_ingredients as f64 / total * self.weights.expiring;

        let total_time = recipe.total_time_min();
        let quick_prep = if total_time <= QUICK_PREP_FULL_BONUS_MIN {
            self.weights.quick_prep
        } else {
            // Decaying partial credit; exceeds the full bonus only when the
            // total time is under the reference hour. Accepted quirk.
            self.weights.quick_prep * (QUICK_PREP_REFERENCE_MIN / total_time as f64)
        };

        let categories: HashSet<&str> = recipe
            .ingredients
            .iter()
            .map(|ing| ing.category.as_str())
            .collect();
        let variety =
            categories.len() as f64 / VARIETY_CATEGORY_CEILING * self.weights.variety;

        ScoreBreakdown {
            availability,
            expiring,
            quick_prep,
            variety,
            matched_ingredients,
            expiring_ingredients,
            total_ingredients,
        }
    }
}
