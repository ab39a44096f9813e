use chrono::{Duration, NaiveDate};
use wastenot_inventory::{InMemoryInventory, InventoryItem, JsonFileInventory};
use wastenot_planning::{
    generate_weekly_plan, DayOfWeek, Filters, MealTypeFilter, PlanningError, WeeklyPlan,
    WeeklyPlanner,
};
use wastenot_recipe::{builtin_catalog, Ingredient, JsonFileCatalog, MealType, Recipe, StaticCatalog};
use wastenot_shared::FixedClock;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
}

fn recipe(id: &str, meal_type: MealType, ingredient: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: format!("Recipe {}", id),
        meal_type,
        cuisine: "International".into(),
        prep_time_min: 5,
        cook_time_min: 0,
        servings: 1,
        difficulty: "Easy".into(),
        dietary_tags: vec![],
        ingredients: vec![Ingredient::new(ingredient, 1.0, "unit", "misc")],
        instructions: vec![],
    }
}

fn item(name: &str, days_out: i64) -> InventoryItem {
    InventoryItem {
        id: 1,
        name: name.to_string(),
        quantity: 5.0,
        unit: None,
        expiry_date: today() + Duration::days(days_out),
        added_date: today(),
    }
}

#[test]
fn week_has_seven_days_in_fixed_order_with_three_slots() {
    let planner = WeeklyPlanner::new();
    let plan = planner.build_week(&builtin_catalog(), &[], &Filters::default(), today());

    assert_eq!(plan.days.len(), 7);
    let days: Vec<DayOfWeek> = plan.days.iter().map(|d| d.day).collect();
    assert_eq!(days, DayOfWeek::WEEK.to_vec());

    for day in &plan.days {
        // Non-empty catalog with no filters: every slot gets a suggestion.
        for meal_type in MealType::ALL {
            assert!(day.meal(meal_type).is_some(), "{} {} empty", day.day, meal_type);
        }
    }
}

#[test]
fn build_week_is_idempotent() {
    let planner = WeeklyPlanner::new();
    let inventory = vec![item("banana", 2), item("carrots", 5)];

    let first = planner.build_week(&builtin_catalog(), &inventory, &Filters::default(), today());
    let second = planner.build_week(&builtin_catalog(), &inventory, &Filters::default(), today());
    assert_eq!(first, second);
}

#[test]
fn same_recipe_may_fill_multiple_slots() {
    let planner = WeeklyPlanner::new();
    let recipes = vec![recipe("only", MealType::Dinner, "banana")];
    let plan = planner.build_week(&recipes, &[], &Filters::default(), today());

    // One candidate, no cross-slot deduplication: all 21 slots get it.
    for day in &plan.days {
        for meal_type in MealType::ALL {
            assert_eq!(day.meal(meal_type).unwrap().recipe.id, "only");
        }
    }
}

#[test]
fn filtered_out_slots_propagate_none_not_errors() {
    let planner = WeeklyPlanner::new();
    let recipes = vec![recipe("toast", MealType::Breakfast, "bread")];
    let filters = Filters {
        meal_type: MealTypeFilter::Only(MealType::Lunch),
        ..Filters::default()
    };

    let plan = planner.build_week(&recipes, &[], &filters, today());
    assert_eq!(plan.days.len(), 7);
    for day in &plan.days {
        for meal_type in MealType::ALL {
            assert!(day.meal(meal_type).is_none());
        }
    }
}

#[test]
fn expiring_inventory_steers_the_week() {
    let planner = WeeklyPlanner::new();
    let recipes = vec![
        recipe("fresh", MealType::Dinner, "potatoes"),
        recipe("rescue", MealType::Dinner, "carrots"),
    ];
    // Carrots expire in 2 days; potatoes are fine for weeks.
    let inventory = vec![item("carrots", 2), item("potatoes", 20)];

    let plan = planner.build_week(&recipes, &inventory, &Filters::default(), today());
    let monday = plan.day(DayOfWeek::Monday).unwrap();
    assert_eq!(monday.dinner.as_ref().unwrap().recipe.id, "rescue");
}

#[test]
fn day_lookup_on_a_partial_plan_returns_none() {
    let planner = WeeklyPlanner::new();
    let full = planner.build_week(&builtin_catalog(), &[], &Filters::default(), today());

    let partial = WeeklyPlan {
        days: full.days[..2].to_vec(),
    };
    assert!(partial.day(DayOfWeek::Tuesday).is_some());
    assert!(partial.day(DayOfWeek::Sunday).is_none());
    assert!(WeeklyPlan { days: vec![] }.day(DayOfWeek::Monday).is_none());
}

#[tokio::test]
async fn generate_weekly_plan_loads_then_plans() {
    let clock = FixedClock::on(today());
    let catalog = StaticCatalog::default();
    let inventory = InMemoryInventory::new(vec![item("banana", 2)]);

    let plan = generate_weekly_plan(&catalog, &inventory, &Filters::default(), &clock)
        .await
        .unwrap();
    assert_eq!(plan.days.len(), 7);
}

#[tokio::test]
async fn catalog_failure_aborts_before_planning() {
    let clock = FixedClock::on(today());
    let catalog = JsonFileCatalog::new("/nonexistent/recipes.json");
    let inventory = InMemoryInventory::new(vec![]);

    let err = generate_weekly_plan(&catalog, &inventory, &Filters::default(), &clock)
        .await
        .unwrap_err();
    assert!(matches!(err, PlanningError::CatalogUnavailable(_)));
}

#[tokio::test]
async fn inventory_failure_aborts_before_planning() {
    let clock = FixedClock::on(today());
    let catalog = StaticCatalog::default();
    let inventory = JsonFileInventory::new("/nonexistent/inventory.json");

    let err = generate_weekly_plan(&catalog, &inventory, &Filters::default(), &clock)
        .await
        .unwrap_err();
    assert!(matches!(err, PlanningError::InventoryUnavailable(_)));
}
