use std::fmt;

use thiserror::Error;

/// The three text inputs of the add-recipe form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Ingredients,
    Instructions,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftField::Title => write!(f, "title"),
            DraftField::Ingredients => write!(f, "ingredients"),
            DraftField::Instructions => write!(f, "instructions"),
        }
    }
}

/// Errors raised while turning a draft into a recipe
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required draft field was left empty
    #[error("Recipe {field} cannot be empty")]
    Empty { field: DraftField },
}

/// Errors raised by shopping list mutation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShoppingListError {
    /// The index does not address an item of the current list
    #[error("Index {index} is out of range for a shopping list of {len} item(s)")]
    OutOfRange { index: usize, len: usize },
}

/// Errors raised by the add-recipe workflow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// Submit or edit was requested while no form is open
    #[error("No recipe is being edited")]
    NotEditing,

    /// The draft was rejected; the form stays open
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Errors that can occur anywhere in the recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    ShoppingList(#[from] ShoppingListError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_draft_surfaces_as_workflow_error() {
        let invalid = WorkflowError::from(ValidationError::Empty {
            field: DraftField::Instructions,
        });
        let err = CatalogError::from(invalid);
        assert!(matches!(
            err,
            CatalogError::Workflow(WorkflowError::Invalid(ValidationError::Empty {
                field: DraftField::Instructions
            }))
        ));
        assert_eq!(err.to_string(), "Recipe instructions cannot be empty");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = CatalogError::from(ShoppingListError::OutOfRange { index: 3, len: 1 });
        assert_eq!(
            err.to_string(),
            "Index 3 is out of range for a shopping list of 1 item(s)"
        );
    }
}
