use serde::Serialize;
use uuid::Uuid;

/// A committed recipe.
///
/// Fields are private: a recipe is immutable once created and is only built
/// through [`crate::draft`] or the built-in samples, which guarantees that
/// `ingredients` and `instructions` are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    id: Uuid,
    title: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
}

impl Recipe {
    /// Callers are responsible for validating the parts.
    pub(crate) fn new(title: String, ingredients: Vec<String>, instructions: Vec<String>) -> Self {
        debug_assert!(!ingredients.is_empty() && !instructions.is_empty());
        Recipe {
            id: Uuid::new_v4(),
            title,
            ingredients,
            instructions,
        }
    }

    /// Opaque identity, only meaningful for telling list rows apart
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// The recipes the catalog ships with
    pub fn samples() -> Vec<Recipe> {
        vec![
            Recipe::new(
                "Pasta Carbonara".to_string(),
                lines(&[
                    "1 lb. Spaghetti",
                    "4 oz. Bacon",
                    "2 Eggs",
                    "2 oz. Parmesan cheese",
                    "Black pepper",
                ]),
                lines(&[
                    "Cook spaghetti al dente in large pot",
                    "Fry bacon until crispy",
                    "Mix eggs and parmesan cheese",
                    "Combine spaghetti, bacon, and egg mixture in pot",
                    "Season with black pepper and enjoy!",
                ]),
            ),
            Recipe::new(
                "Chocolate Chip Cookies".to_string(),
                lines(&[
                    "1 c. Butter",
                    "1 c. Brown sugar",
                    "1 c. White sugar",
                    "2 Eggs",
                    "2 tsp. Vanilla extract",
                    "3 c. Flour",
                    "1 tsp. Baking soda",
                    "1 tsp. Salt",
                    "2 c. Chocolate chips",
                ]),
                lines(&[
                    "Cream together butter and sugars",
                    "Add eggs and vanilla extract",
                    "Mix in flour, baking soda, and salt",
                    "Fold in chocolate chips",
                    "Scoop onto baking sheet",
                    "Bake at 350°F for 10-12 minutes and enjoy!",
                ]),
            ),
        ]
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
