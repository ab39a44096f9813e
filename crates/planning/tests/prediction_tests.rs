use chrono::{Duration, NaiveDate};
use wastenot_inventory::InventoryItem;
use wastenot_planning::{
    accept_suggestion, analyze_history, expiring_within_window, forecast_meals,
    SuggestionPriority, KARMA_PER_SUGGESTION_USED,
};
use wastenot_shared::{CollectingSink, FixedClock};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
}

fn item(id: u64, name: &str, quantity: f64, days_out: i64) -> InventoryItem {
    InventoryItem {
        id,
        name: name.to_string(),
        quantity,
        unit: None,
        expiry_date: today() + Duration::days(days_out),
        added_date: today() - Duration::days(1),
    }
}

#[test]
fn window_spans_seven_days_and_sorts_soonest_first() {
    let inventory = vec![
        item(1, "potatoes", 5.0, 20),
        item(2, "milk", 1.0, 7),
        item(3, "yogurt", 2.0, -1), // already expired, most urgent
        item(4, "bread", 1.0, 2),
        item(5, "rice", 3.0, 8), // just outside
    ];

    let expiring = expiring_within_window(&inventory, today());
    let names: Vec<&str> = expiring.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["yogurt", "bread", "milk"]);
}

#[test]
fn history_average_is_the_rounded_mean_of_meal_counts() {
    let history = "Monday: 3 meals\nTuesday: 4 meals, busy day\nnothing notable\n";
    let patterns = analyze_history(history);
    // (3 + 4) / 2 rounds to 4.
    assert_eq!(patterns.average_meals, 4);
    assert!(patterns.special_events.is_empty());
}

#[test]
fn history_without_counts_falls_back_to_fifty() {
    let patterns = analyze_history("we ate out all week");
    assert_eq!(patterns.average_meals, 50);

    let patterns = analyze_history("");
    assert_eq!(patterns.average_meals, 50);
}

#[test]
fn special_event_lines_are_collected_verbatim() {
    let history = "Saturday: 8 meals, Special Event: birthday party\n";
    let patterns = analyze_history(history);
    assert_eq!(patterns.special_events.len(), 1);
    assert!(patterns.special_events[0].contains("birthday party"));
}

#[test]
fn suggestions_name_the_main_item_and_two_complements() {
    let inventory = vec![
        item(1, "banana", 3.0, 2),
        item(2, "oats", 5.0, 30),
        item(3, "milk", 2.0, 30),
        item(4, "honey", 1.0, 60),
    ];

    let forecast = forecast_meals(&inventory, "2 meals", today());
    // Banana is the only expiring item, so it leads the list at high priority.
    let lead = &forecast.suggestions[0];
    assert_eq!(lead.name, "banana with oats & milk");
    assert_eq!(lead.priority, SuggestionPriority::High);
    assert_eq!(lead.ingredients, vec!["banana", "oats", "milk"]);

    // The rest of the inventory follows at low priority.
    assert_eq!(forecast.suggestions.len(), 4);
    assert!(forecast.suggestions[1..]
        .iter()
        .all(|s| s.priority == SuggestionPriority::Low));
}

#[test]
fn a_lone_item_becomes_a_special() {
    let inventory = vec![item(1, "banana", 2.0, 2)];
    let forecast = forecast_meals(&inventory, "", today());
    assert_eq!(forecast.suggestions[0].name, "banana Special");
}

#[test]
fn servings_follow_the_scarcest_ingredient_capped_by_history() {
    let inventory = vec![
        item(1, "banana", 6.0, 2),
        item(2, "oats", 1.0, 30), // scarcest: 1 unit serves 2
    ];

    let forecast = forecast_meals(&inventory, "10 meals", today());
    assert_eq!(forecast.suggestions[0].servings, 2);

    // A tiny historical need caps even abundant ingredients.
    let forecast = forecast_meals(&inventory, "1 meals", today());
    assert_eq!(forecast.suggestions[0].servings, 1);
}

#[test]
fn forecast_summarizes_possible_against_recommended() {
    let inventory = vec![item(1, "banana", 2.0, 2), item(2, "oats", 2.0, 30)];
    let forecast = forecast_meals(&inventory, "3 meals", today());

    // Each of the two suggestions could serve 4 but is capped at the
    // historical average of 3.
    assert_eq!(forecast.possible_servings, 6);
    assert_eq!(forecast.recommended_servings, 3);
    assert!(forecast.is_sufficient());
    assert_eq!(forecast.shortfall(), 0);
}

#[test]
fn empty_inventory_forecasts_a_shortfall() {
    let forecast = forecast_meals(&[], "4 meals", today());
    assert!(forecast.suggestions.is_empty());
    assert_eq!(forecast.possible_servings, 0);
    assert!(!forecast.is_sufficient());
    assert_eq!(forecast.shortfall(), 4);
}

#[test]
fn accepting_a_suggestion_awards_fifteen_karma() {
    let inventory = vec![item(1, "banana", 2.0, 2)];
    let forecast = forecast_meals(&inventory, "", today());
    let clock = FixedClock::on(today());
    let sink = CollectingSink::new();

    accept_suggestion(&forecast.suggestions[0], &clock, &sink);
    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].points, KARMA_PER_SUGGESTION_USED);
    assert_eq!(events[0].reason, "Used meal prediction");
}
