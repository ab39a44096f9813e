//! Meal forecasting: how many meals the current inventory can produce today
//! versus what the household historically needs, with per-item suggestions
//! that prioritize whatever is closest to expiring.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;
use wastenot_inventory::InventoryItem;
use wastenot_shared::{Clock, EventSink, KarmaEvent};

/// Karma awarded when a forecast suggestion is accepted into the plan.
pub const KARMA_PER_SUGGESTION_USED: i64 = 15;

/// Forecasting looks further out than the 3-day "expiring soon" window used
/// by the scorer: anything due within a week feeds the suggestions.
pub const FORECAST_WINDOW_DAYS: i64 = 7;

/// Fallback daily meal count when no history is supplied.
const DEFAULT_AVERAGE_MEALS: u32 = 50;
/// How many supporting items a suggestion pulls in beside its main one.
const COMPLEMENT_LIMIT: usize = 2;
/// Servings assumed per whole unit of an ingredient.
const SERVINGS_PER_UNIT: u32 = 2;

/// Urgency of a suggestion: `High` means its main item is in the forecast
/// window and should be cooked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SuggestionPriority {
    High,
    Low,
}

/// Patterns extracted from free-form consumption history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPatterns {
    /// Rounded mean of every "N meals" figure in the history text.
    pub average_meals: u32,
    /// Lines mentioning a special event, kept verbatim for display.
    pub special_events: Vec<String>,
}

impl Default for HistoricalPatterns {
    fn default() -> Self {
        HistoricalPatterns {
            average_meals: DEFAULT_AVERAGE_MEALS,
            special_events: Vec::new(),
        }
    }
}

/// One ad-hoc meal built around a single inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSuggestion {
    pub name: String,
    /// Names of the inventory items the meal draws on, main item first.
    pub ingredients: Vec<String>,
    pub servings: u32,
    pub priority: SuggestionPriority,
}

/// The full forecast: suggestions plus the possible-versus-needed summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealForecast {
    pub suggestions: Vec<MealSuggestion>,
    /// Total servings the suggestions can produce today.
    pub possible_servings: u32,
    /// The historical daily average to measure against.
    pub recommended_servings: u32,
}

impl MealForecast {
    pub fn is_sufficient(&self) -> bool {
        self.possible_servings >= self.recommended_servings
    }

    /// Meals short of the historical need; zero when sufficient.
    pub fn shortfall(&self) -> u32 {
        self.recommended_servings
            .saturating_sub(self.possible_servings)
    }
}

/// Items due within [`FORECAST_WINDOW_DAYS`], soonest first. Already-expired
/// items are included: they are the most urgent of all.
pub fn expiring_within_window(
    inventory: &[InventoryItem],
    today: NaiveDate,
) -> Vec<&InventoryItem> {
    let mut items: Vec<&InventoryItem> = inventory
        .iter()
        .filter(|item| item.days_until_expiry(today) <= FORECAST_WINDOW_DAYS)
        .collect();
    items.sort_by_key(|item| item.expiry_date);
    items
}

/// Extract consumption patterns from free-form history text, one entry per
/// line. A line like "Monday: 3 meals" contributes its count to the average;
/// lines mentioning "special event" are collected as-is. With no counts at
/// all the average falls back to [`DEFAULT_AVERAGE_MEALS`].
pub fn analyze_history(text: &str) -> HistoricalPatterns {
    let mut total: u64 = 0;
    let mut counted: u32 = 0;
    let mut special_events = Vec::new();

    for line in text.lines() {
        if let Some(count) = meal_count(line) {
            total += u64::from(count);
            counted += 1;
        }
        if line.to_lowercase().contains("special event") {
            special_events.push(line.to_string());
        }
    }

    let average_meals = if counted > 0 {
        (total as f64 / f64::from(counted)).round() as u32
    } else {
        DEFAULT_AVERAGE_MEALS
    };
    HistoricalPatterns {
        average_meals,
        special_events,
    }
}

/// First number directly preceding the word "meals" on the line, if any.
fn meal_count(line: &str) -> Option<u32> {
    let bytes = line.as_bytes();
    for (idx, _) in line.match_indices("meals") {
        let mut end = idx;
        while end > 0 && bytes[end - 1].is_ascii_whitespace() {
            end -= 1;
        }
        let mut start = end;
        while start > 0 && bytes[start - 1].is_ascii_digit() {
            start -= 1;
        }
        if start < end {
            if let Ok(count) = line[start..end].parse() {
                return Some(count);
            }
        }
    }
    None
}

/// Build the forecast for `today` from the inventory and history text.
///
/// Every item yields one suggestion: items inside the forecast window come
/// first at high priority, the rest follow at low priority. An empty
/// inventory forecasts zero possible servings.
pub fn forecast_meals(
    inventory: &[InventoryItem],
    history: &str,
    today: NaiveDate,
) -> MealForecast {
    let patterns = analyze_history(history);
    let expiring = expiring_within_window(inventory, today);

    let mut suggestions: Vec<MealSuggestion> = expiring
        .iter()
        .map(|item| suggest_around(item, inventory, &patterns, SuggestionPriority::High))
        .collect();
    suggestions.extend(
        inventory
            .iter()
            .filter(|item| !expiring.iter().any(|e| e.id == item.id))
            .map(|item| suggest_around(item, inventory, &patterns, SuggestionPriority::Low)),
    );

    let possible_servings = suggestions.iter().map(|s| s.servings).sum();
    tracing::debug!(
        suggestions = suggestions.len(),
        possible = possible_servings,
        recommended = patterns.average_meals,
        "Built meal forecast"
    );
    MealForecast {
        suggestions,
        possible_servings,
        recommended_servings: patterns.average_meals,
    }
}

/// Record the karma for cooking one of the forecast's suggestions.
pub fn accept_suggestion(
    suggestion: &MealSuggestion,
    clock: &dyn Clock,
    sink: &dyn EventSink,
) {
    tracing::info!(meal = %suggestion.name, "Meal suggestion accepted");
    sink.emit(KarmaEvent::new(
        KARMA_PER_SUGGESTION_USED,
        "Used meal prediction",
        clock.now(),
    ));
}

fn suggest_around(
    main: &InventoryItem,
    inventory: &[InventoryItem],
    patterns: &HistoricalPatterns,
    priority: SuggestionPriority,
) -> MealSuggestion {
    let complements: Vec<&InventoryItem> = inventory
        .iter()
        .filter(|item| item.id != main.id)
        .take(COMPLEMENT_LIMIT)
        .collect();

    let name = if complements.is_empty() {
        format!("{} Special", main.name)
    } else {
        let names: Vec<&str> = complements.iter().map(|i| i.name.as_str()).collect();
        format!("{} with {}", main.name, names.join(" & "))
    };

    // Servings are limited by the scarcest ingredient, two per whole unit,
    // but never beyond what the household actually eats in a day.
    let scarcest = std::iter::once(main)
        .chain(complements.iter().copied())
        .map(|item| item.quantity.max(0.0).trunc() as u32)
        .min()
        .unwrap_or(0);
    let servings = (scarcest * SERVINGS_PER_UNIT).min(patterns.average_meals);

    let mut ingredients = vec![main.name.clone()];
    ingredients.extend(complements.iter().map(|i| i.name.clone()));
    MealSuggestion {
        name,
        ingredients,
        servings,
        priority,
    }
}
