/// Strategy for deciding whether an inventory item satisfies a recipe
/// ingredient by name.
///
/// Kept behind a trait so the fuzzy default can later be swapped for exact or
/// normalized matching without touching the scoring engine.
pub trait IngredientMatcher: Send + Sync {
    fn matches(&self, inventory_name: &str, ingredient_name: &str) -> bool;
}

/// Case-insensitive substring containment: an inventory item named
/// "Ripe Bananas" satisfies the ingredient "banana".
///
/// This is a deliberate tolerance for naming variance, not an approximation
/// of exact lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl IngredientMatcher for SubstringMatcher {
    fn matches(&self, inventory_name: &str, ingredient_name: &str) -> bool {
        inventory_name
            .to_lowercase()
            .contains(&ingredient_name.to_lowercase())
    }
}

/// Case-insensitive exact match on trimmed names.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl IngredientMatcher for ExactMatcher {
    fn matches(&self, inventory_name: &str, ingredient_name: &str) -> bool {
        inventory_name.trim().to_lowercase() == ingredient_name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_matcher_ignores_case_and_allows_containment() {
        let matcher = SubstringMatcher;
        assert!(matcher.matches("Ripe Bananas", "banana"));
        assert!(matcher.matches("banana", "BANANA"));
        assert!(!matcher.matches("banana", "bananas")); // containment is one-way
    }

    #[test]
    fn exact_matcher_requires_equality() {
        let matcher = ExactMatcher;
        assert!(matcher.matches(" Banana ", "banana"));
        assert!(!matcher.matches("Ripe Bananas", "banana"));
    }
}
