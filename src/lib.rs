//! In-memory recipe catalog and shopping list.
//!
//! A [`Session`] owns the [`RecipeStore`] and the [`ShoppingList`]. New recipes
//! come from the add-recipe form through [`DraftParser`], which rejects empty
//! fields and splits the ingredient and instruction blocks into lines.

// UniFFI scaffolding must live at the crate root: the derives and exports
// in `uniffi_bindings` resolve `crate::UniFfiTag`
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub mod config;
pub mod draft;
pub mod error;
pub mod model;
pub mod session;
pub mod shopping;
pub mod store;
pub mod uniffi_bindings;
pub mod view;

pub use config::{load_config, AppConfig, LinePolicy};
pub use draft::{parse, AddRecipeWorkflow, Draft, DraftParser, WorkflowState};
pub use error::{
    CatalogError, DraftField, ShoppingListError, ValidationError, WorkflowError,
};
pub use model::Recipe;
pub use session::{Session, Tab};
pub use shopping::ShoppingList;
pub use store::RecipeStore;
pub use uniffi_bindings::{
    get_version, parse_recipe_draft, FfiCatalogError, FfiRecipe, FfiSessionConfig, RecipeSession,
};
