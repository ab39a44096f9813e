use crate::types::{Ingredient, MealType, Recipe};

/// The built-in recipe catalog.
///
/// Small, vegetarian-leaning seed data so the planner works out of the box;
/// a real deployment swaps this for a [`crate::CatalogProvider`] backed by a
/// remote catalog.
pub fn builtin_catalog() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "cereal-breakfast".into(),
            name: "Cereal with Milk and Fruit".into(),
            meal_type: MealType::Breakfast,
            cuisine: "International".into(),
            prep_time_min: 5,
            cook_time_min: 0,
            servings: 1,
            difficulty: "Easy".into(),
            dietary_tags: vec!["vegetarian".into()],
            ingredients: vec![
                Ingredient::new("cereal", 1.0, "cup", "grains"),
                Ingredient::new("milk", 1.0, "cup", "dairy"),
                Ingredient::new("banana", 1.0, "medium", "fruits"),
                Ingredient::new("strawberries", 4.0, "medium", "fruits"),
            ],
            instructions: vec![
                "Pour cereal into a bowl".into(),
                "Add cold milk".into(),
                "Slice banana and strawberries".into(),
                "Top with fresh fruit".into(),
            ],
        },
        Recipe {
            id: "fruit-smoothie".into(),
            name: "Fruit Smoothie".into(),
            meal_type: MealType::Breakfast,
            cuisine: "International".into(),
            prep_time_min: 5,
            cook_time_min: 0,
            servings: 2,
            difficulty: "Easy".into(),
            dietary_tags: vec!["vegetarian".into()],
            ingredients: vec![
                Ingredient::new("banana", 1.0, "large", "fruits"),
                Ingredient::new("strawberries", 1.0, "cup", "fruits"),
                Ingredient::new("yogurt", 1.0, "cup", "dairy"),
                Ingredient::new("honey", 1.0, "tbsp", "condiments"),
                Ingredient::new("milk", 0.5, "cup", "dairy"),
            ],
            instructions: vec![
                "Add all ingredients to blender".into(),
                "Blend until smooth".into(),
                "Add more milk if needed for desired consistency".into(),
                "Pour into glasses and serve immediately".into(),
            ],
        },
        Recipe {
            id: "apple-spinach-skewers".into(),
            name: "Apple and Spinach Skewers".into(),
            meal_type: MealType::Breakfast,
            cuisine: "Modern".into(),
            prep_time_min: 10,
            cook_time_min: 0,
            servings: 2,
            difficulty: "Easy".into(),
            dietary_tags: vec!["vegetarian".into(), "vegan".into()],
            ingredients: vec![
                Ingredient::new("apples", 2.0, "medium", "fruits"),
                Ingredient::new("spinach", 2.0, "cups", "vegetables"),
                Ingredient::new("lemon juice", 1.0, "tbsp", "condiments"),
                Ingredient::new("honey", 1.0, "tbsp", "condiments"),
            ],
            instructions: vec![
                "Cut apples into bite-sized chunks".into(),
                "Toss apple chunks with lemon juice to prevent browning".into(),
                "Thread apple chunks and spinach leaves onto skewers".into(),
                "Drizzle with honey before serving".into(),
            ],
        },
        Recipe {
            id: "yogurt-parfait".into(),
            name: "Fruit and Yogurt Parfait".into(),
            meal_type: MealType::Breakfast,
            cuisine: "International".into(),
            prep_time_min: 10,
            cook_time_min: 0,
            servings: 2,
            difficulty: "Easy".into(),
            dietary_tags: vec!["vegetarian".into()],
            ingredients: vec![
                Ingredient::new("yogurt", 2.0, "cups", "dairy"),
                Ingredient::new("granola", 1.0, "cup", "grains"),
                Ingredient::new("honey", 2.0, "tbsp", "condiments"),
                Ingredient::new("strawberries", 1.0, "cup", "fruits"),
                Ingredient::new("blueberries", 1.0, "cup", "fruits"),
            ],
            instructions: vec![
                "Layer yogurt in serving glasses".into(),
                "Add a layer of mixed berries".into(),
                "Sprinkle granola on top".into(),
                "Drizzle with honey".into(),
                "Repeat layers until glass is full".into(),
            ],
        },
        Recipe {
            id: "veggie-fried-rice".into(),
            name: "Veggie Fried Rice".into(),
            meal_type: MealType::Lunch,
            cuisine: "Asian".into(),
            prep_time_min: 15,
            cook_time_min: 20,
            servings: 4,
            difficulty: "Medium".into(),
            dietary_tags: vec!["vegetarian".into()],
            ingredients: vec![
                Ingredient::new("cooked rice", 2.0, "cups", "grains"),
                Ingredient::new("eggs", 4.0, "whole", "proteins"),
                Ingredient::new("spinach", 2.0, "cups", "vegetables"),
                Ingredient::new("cheese", 0.5, "cup", "dairy"),
                Ingredient::new("onion", 1.0, "whole", "vegetables"),
            ],
            instructions: vec![
                "Scramble eggs and set aside".into(),
                "Saute onion until translucent".into(),
                "Add rice and spinach, stir until wilted".into(),
                "Fold in eggs and top with cheese".into(),
            ],
        },
        Recipe {
            id: "hearty-vegetable-soup".into(),
            name: "Hearty Vegetable Soup".into(),
            meal_type: MealType::Lunch,
            cuisine: "International".into(),
            prep_time_min: 15,
            cook_time_min: 25,
            servings: 6,
            difficulty: "Easy".into(),
            dietary_tags: vec!["vegetarian".into(), "vegan".into()],
            ingredients: vec![
                Ingredient::new("mixed vegetables", 4.0, "cups", "vegetables"),
                Ingredient::new("vegetable broth", 6.0, "cups", "condiments"),
                Ingredient::new("garlic", 3.0, "cloves", "vegetables"),
                Ingredient::new("herbs", 1.0, "tbsp", "condiments"),
            ],
            instructions: vec![
                "Saute garlic in a large pot".into(),
                "Add vegetables and broth".into(),
                "Simmer until vegetables are tender".into(),
                "Season with herbs and serve".into(),
            ],
        },
        Recipe {
            id: "stir-fry".into(),
            name: "Vegetable Stir Fry".into(),
            meal_type: MealType::Dinner,
            cuisine: "Asian".into(),
            prep_time_min: 15,
            cook_time_min: 15,
            servings: 4,
            difficulty: "Easy".into(),
            dietary_tags: vec!["vegetarian".into()],
            ingredients: vec![
                Ingredient::new("carrots", 2.0, "medium", "vegetables"),
                Ingredient::new("broccoli", 1.0, "head", "vegetables"),
                Ingredient::new("bell peppers", 2.0, "medium", "vegetables"),
                Ingredient::new("garlic", 3.0, "cloves", "vegetables"),
                Ingredient::new("soy sauce", 3.0, "tbsp", "condiments"),
            ],
            instructions: vec![
                "Wash and chop all vegetables".into(),
                "Heat oil in wok".into(),
                "Add garlic and stir-fry".into(),
                "Add vegetables in order of cooking time".into(),
                "Season with soy sauce".into(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_every_meal_type() {
        let catalog = builtin_catalog();
        for meal_type in MealType::ALL {
            assert!(
                catalog.iter().any(|r| r.meal_type == meal_type),
                "no {} recipe in built-in catalog",
                meal_type
            );
        }
    }

    #[test]
    fn builtin_catalog_ids_are_unique() {
        let catalog = builtin_catalog();
        for (i, recipe) in catalog.iter().enumerate() {
            assert!(
                catalog[i + 1..].iter().all(|r| r.id != recipe.id),
                "duplicate recipe id {}",
                recipe.id
            );
        }
    }
}
