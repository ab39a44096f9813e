use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The three meal slots a recipe can be planned into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

/// One line of a recipe's ingredient list.
///
/// `name` is matched against inventory item names by the planner's matching
/// strategy (substring containment by default), so it should be a plain
/// lowercase food word rather than a display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Ingredient {
            name: name.into(),
            amount,
            unit: unit.into(),
            category: category.into(),
        }
    }
}

/// Immutable reference data describing a dish. Never user-owned or mutated;
/// the catalog hands out clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub meal_type: MealType,
    pub cuisine: String,
    pub prep_time_min: u32,
    pub cook_time_min: u32,
    pub servings: u32,
    pub difficulty: String,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Prep plus cook time, the quantity all time filters and the quick-prep
    /// bonus are measured against.
    pub fn total_time_min(&self) -> u32 {
        self.prep_time_min + self.cook_time_min
    }
}
