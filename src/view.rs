//! Plain-text renderings of the catalog screens.

use crate::model::Recipe;
use crate::shopping::ShoppingList;

/// Catalog grid card: the title and a one-line ingredient summary
pub fn recipe_card(recipe: &Recipe) -> String {
    format!(
        "{}\nIngredients: {}",
        recipe.title(),
        recipe.ingredients().join(", ")
    )
}

/// Full recipe with bulleted ingredients and numbered steps
pub fn recipe_detail(recipe: &Recipe) -> String {
    let mut lines = vec![
        recipe.title().to_string(),
        String::new(),
        "Ingredients:".to_string(),
    ];
    lines.extend(recipe.ingredients().iter().map(|i| format!("- {}", i)));
    lines.push("---".to_string());
    lines.push("Instructions:".to_string());
    lines.extend(
        recipe
            .instructions()
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Shopping list rows prefixed with the index `remove_at` expects
pub fn shopping_list(list: &ShoppingList) -> String {
    list.items()
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}: {}\n", i, item))
        .collect()
}
