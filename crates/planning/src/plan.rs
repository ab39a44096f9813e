use crate::matching::{IngredientMatcher, SubstringMatcher};
use crate::selector::{Filters, MealSelector, Suggestion};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;
use wastenot_inventory::InventoryItem;
use wastenot_recipe::{MealType, Recipe};

/// Calendar day of a weekly plan. Plans always run Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const WEEK: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];
}

/// One day's three meal slots. A `None` slot means "no suggestion available".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: DayOfWeek,
    pub breakfast: Option<Suggestion>,
    pub lunch: Option<Suggestion>,
    pub dinner: Option<Suggestion>,
}

impl DayPlan {
    pub fn meal(&self, meal_type: MealType) -> Option<&Suggestion> {
        match meal_type {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
        }
    }
}

/// A full week of suggestions: exactly seven days, Monday first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    /// Look up one day's plan. Planner-built plans always carry all seven
    /// days, but `days` is public, so a partial plan simply yields `None`.
    pub fn day(&self, day: DayOfWeek) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day == day)
    }
}

/// Assembles weekly plans by running the selector once per slot.
#[derive(Debug, Clone, Default)]
pub struct WeeklyPlanner<M: IngredientMatcher = SubstringMatcher> {
    selector: MealSelector<M>,
}

impl WeeklyPlanner<SubstringMatcher> {
    pub fn new() -> Self {
        WeeklyPlanner::default()
    }
}

impl<M: IngredientMatcher> WeeklyPlanner<M> {
    pub fn with_selector(selector: MealSelector<M>) -> Self {
        WeeklyPlanner { selector }
    }

    /// Build the week's plan from an immutable snapshot of catalog and
    /// inventory.
    ///
    /// Each of the 21 slots is filled independently; the same recipe may
    /// appear in several slots, which is accepted behavior rather than an
    /// oversight. The function is pure: identical inputs always produce a
    /// structurally identical plan.
    pub fn build_week(
        &self,
        recipes: &[Recipe],
        inventory: &[InventoryItem],
        filters: &Filters,
        today: NaiveDate,
    ) -> WeeklyPlan {
        let days = DayOfWeek::WEEK
            .iter()
            .map(|&day| DayPlan {
                day,
                breakfast: self.suggest(MealType::Breakfast, recipes, inventory, filters, today),
                lunch: self.suggest(MealType::Lunch, recipes, inventory, filters, today),
                dinner: self.suggest(MealType::Dinner, recipes, inventory, filters, today),
            })
            .collect();
        tracing::debug!(recipes = recipes.len(), items = inventory.len(), "Assembled weekly plan");
        WeeklyPlan { days }
    }

    fn suggest(
        &self,
        slot: MealType,
        recipes: &[Recipe],
        inventory: &[InventoryItem],
        filters: &Filters,
        today: NaiveDate,
    ) -> Option<Suggestion> {
        self.selector.suggest(slot, recipes, inventory, filters, today)
    }
}
