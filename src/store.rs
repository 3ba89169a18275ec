use log::debug;

use crate::model::Recipe;

/// Append-only, insertion-ordered collection of committed recipes
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in sample recipes
    pub fn with_samples() -> Self {
        RecipeStore {
            recipes: Recipe::samples(),
        }
    }

    /// Recipes in the order they were added
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Append a recipe. Validation is the caller's job.
    pub fn add(&mut self, recipe: Recipe) {
        debug!("Adding recipe '{}' ({})", recipe.title(), recipe.id());
        self.recipes.push(recipe);
    }

    /// Recipe at a display position
    pub fn get(&self, position: usize) -> Option<&Recipe> {
        self.recipes.get(position)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::parse;

    #[test]
    fn test_new_store_is_empty() {
        let store = RecipeStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_add_appends_and_keeps_order() {
        let mut store = RecipeStore::with_samples();
        let before: Vec<Recipe> = store.list().to_vec();

        let recipe = parse("Tacos", "Tortillas", "Assemble").unwrap();
        store.add(recipe.clone());

        assert_eq!(store.len(), before.len() + 1);
        assert_eq!(store.list().last(), Some(&recipe));
        assert_eq!(&store.list()[..before.len()], &before[..]);
    }

    #[test]
    fn test_add_accepts_duplicates() {
        let mut store = RecipeStore::new();
        let recipe = parse("Soup", "Water", "Boil").unwrap();
        store.add(recipe.clone());
        store.add(recipe);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_by_position() {
        let store = RecipeStore::with_samples();
        assert_eq!(store.get(1).map(Recipe::title), Some("Chocolate Chip Cookies"));
        assert!(store.get(2).is_none());
    }
}
