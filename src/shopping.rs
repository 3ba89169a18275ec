use std::collections::BTreeSet;

use log::{debug, warn};

use crate::error::ShoppingListError;

/// Ordered list of ingredient entries. Duplicates and empty entries are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    ingredients: Vec<String>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn add(&mut self, ingredient: impl Into<String>) {
        let ingredient = ingredient.into();
        debug!("Adding '{}' to shopping list", ingredient);
        self.ingredients.push(ingredient);
    }

    /// Remove and return the entry at `index`, shifting later entries left.
    ///
    /// # Errors
    /// `OutOfRange` if `index` does not address an entry; the list is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<String, ShoppingListError> {
        self.check_index(index)?;
        let removed = self.ingredients.remove(index);
        debug!("Removed '{}' at {} from shopping list", removed, index);
        Ok(removed)
    }

    /// Remove several entries at once.
    ///
    /// Every index refers to a position in the list as it is before the call,
    /// so `{1, 3}` removes the second and fourth entries. Nothing is removed
    /// unless all indices are valid. Removed entries are returned in position
    /// order.
    pub fn remove_many(
        &mut self,
        indices: &BTreeSet<usize>,
    ) -> Result<Vec<String>, ShoppingListError> {
        indices.iter().try_for_each(|&i| self.check_index(i))?;

        let mut removed = Vec::with_capacity(indices.len());
        let mut kept = Vec::with_capacity(self.ingredients.len() - indices.len());
        for (position, item) in self.ingredients.drain(..).enumerate() {
            if indices.contains(&position) {
                removed.push(item);
            } else {
                kept.push(item);
            }
        }
        self.ingredients = kept;

        debug!("Removed {} item(s) from shopping list", removed.len());
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> Result<(), ShoppingListError> {
        let len = self.ingredients.len();
        if index >= len {
            warn!("Shopping list index {} out of range (len {})", index, len);
            return Err(ShoppingListError::OutOfRange { index, len });
        }
        Ok(())
    }
}

impl FromIterator<String> for ShoppingList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        ShoppingList {
            ingredients: iter.into_iter().collect(),
        }
    }
}
