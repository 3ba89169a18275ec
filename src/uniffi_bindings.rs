//! UniFFI bindings for recipe-box
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! The mobile view layer holds one [`RecipeSession`] and calls into it on every user action.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::config::{AppConfig, LinePolicy};
use crate::error::{ShoppingListError, ValidationError, WorkflowError};
use crate::{Recipe, Session};

/// FFI-compatible recipe structure
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    /// Opaque row identity (UUID string)
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl From<&Recipe> for FfiRecipe {
    fn from(recipe: &Recipe) -> Self {
        FfiRecipe {
            id: recipe.id().to_string(),
            title: recipe.title().to_string(),
            ingredients: recipe.ingredients().to_vec(),
            instructions: recipe.instructions().to_vec(),
        }
    }
}

/// Options for a new session
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSessionConfig {
    /// Start with the built-in sample recipes
    pub seed_samples: bool,
    /// Drop blank lines from ingredient and instruction blocks
    pub skip_blank_lines: bool,
    /// Entries the shopping list starts with
    pub initial_shopping_items: Vec<String>,
}

impl Default for FfiSessionConfig {
    fn default() -> Self {
        FfiSessionConfig {
            seed_samples: true,
            skip_blank_lines: false,
            initial_shopping_items: Vec::new(),
        }
    }
}

impl From<FfiSessionConfig> for AppConfig {
    fn from(ffi: FfiSessionConfig) -> Self {
        let mut config = AppConfig::default();
        config.catalog.seed_samples = ffi.seed_samples;
        config.draft.line_policy = if ffi.skip_blank_lines {
            LinePolicy::SkipBlank
        } else {
            LinePolicy::Literal
        };
        config.shopping_list.initial_items = ffi.initial_shopping_items;
        config
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiCatalogError {
    /// A draft field was empty; the form should stay open
    InvalidDraft { message: String },
    /// A shopping list index did not match the current list
    OutOfRange { message: String },
    /// No add-recipe form is open
    NotEditing { message: String },
    /// The session lock was poisoned by a panic in another call
    SessionUnavailable { message: String },
}

impl fmt::Display for FfiCatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiCatalogError::InvalidDraft { message } => write!(f, "Invalid draft: {}", message),
            FfiCatalogError::OutOfRange { message } => write!(f, "Out of range: {}", message),
            FfiCatalogError::NotEditing { message } => write!(f, "Not editing: {}", message),
            FfiCatalogError::SessionUnavailable { message } => {
                write!(f, "Session unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for FfiCatalogError {}

impl From<ValidationError> for FfiCatalogError {
    fn from(err: ValidationError) -> Self {
        FfiCatalogError::InvalidDraft {
            message: err.to_string(),
        }
    }
}

impl From<ShoppingListError> for FfiCatalogError {
    fn from(err: ShoppingListError) -> Self {
        FfiCatalogError::OutOfRange {
            message: err.to_string(),
        }
    }
}

impl From<WorkflowError> for FfiCatalogError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::NotEditing => FfiCatalogError::NotEditing {
                message: err.to_string(),
            },
            WorkflowError::Invalid(e) => e.into(),
        }
    }
}

/// A catalog session shared with the mobile view layer
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct RecipeSession {
    inner: Mutex<Session>,
}

impl RecipeSession {
    fn with_session<T>(
        &self,
        f: impl FnOnce(&mut Session) -> Result<T, FfiCatalogError>,
    ) -> Result<T, FfiCatalogError> {
        let mut session = self
            .inner
            .lock()
            .map_err(|e| FfiCatalogError::SessionUnavailable {
                message: e.to_string(),
            })?;
        f(&mut *session)
    }
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl RecipeSession {
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new(config: Option<FfiSessionConfig>) -> Arc<Self> {
        let config: AppConfig = config.unwrap_or_default().into();
        Arc::new(RecipeSession {
            inner: Mutex::new(Session::new(&config)),
        })
    }

    /// Recipes in catalog order
    pub fn recipes(&self) -> Result<Vec<FfiRecipe>, FfiCatalogError> {
        self.with_session(|s| Ok(s.recipes().list().iter().map(FfiRecipe::from).collect()))
    }

    pub fn start_adding_recipe(&self) -> Result<(), FfiCatalogError> {
        self.with_session(|s| {
            s.start_adding_recipe();
            Ok(())
        })
    }

    pub fn is_adding_recipe(&self) -> Result<bool, FfiCatalogError> {
        self.with_session(|s| Ok(s.draft().is_some()))
    }

    /// Replace the open draft's text with the form's current contents
    pub fn update_draft(
        &self,
        title: String,
        ingredients: String,
        instructions: String,
    ) -> Result<(), FfiCatalogError> {
        self.with_session(|s| {
            let draft = s.draft_mut().ok_or(WorkflowError::NotEditing)?;
            draft.title = title;
            draft.ingredients = ingredients;
            draft.instructions = instructions;
            Ok(())
        })
    }

    /// Save the open draft; on error the form stays open
    pub fn save_recipe(&self) -> Result<FfiRecipe, FfiCatalogError> {
        self.with_session(|s| Ok((&s.save_recipe()?).into()))
    }

    pub fn cancel_adding_recipe(&self) -> Result<(), FfiCatalogError> {
        self.with_session(|s| {
            s.cancel_adding_recipe();
            Ok(())
        })
    }

    pub fn shopping_items(&self) -> Result<Vec<String>, FfiCatalogError> {
        self.with_session(|s| Ok(s.shopping_list().items().to_vec()))
    }

    pub fn add_shopping_item(&self, item: String) -> Result<(), FfiCatalogError> {
        self.with_session(|s| {
            s.shopping_list_mut().add(item);
            Ok(())
        })
    }

    /// Remove one row; returns the removed entry
    pub fn remove_shopping_item(&self, index: u32) -> Result<String, FfiCatalogError> {
        self.with_session(|s| Ok(s.shopping_list_mut().remove_at(index as usize)?))
    }

    /// Remove several rows selected against the list currently shown
    pub fn remove_shopping_items(
        &self,
        indices: Vec<u32>,
    ) -> Result<Vec<String>, FfiCatalogError> {
        let indices: BTreeSet<usize> = indices.into_iter().map(|i| i as usize).collect();
        self.with_session(|s| Ok(s.shopping_list_mut().remove_many(&indices)?))
    }
}

/// Validate and split a draft without touching any session
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recipe_draft(
    title: String,
    ingredients: String,
    instructions: String,
) -> Result<FfiRecipe, FfiCatalogError> {
    let recipe = crate::parse(&title, &ingredients, &instructions)?;
    Ok((&recipe).into())
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_session() -> Arc<RecipeSession> {
        RecipeSession::new(Some(FfiSessionConfig {
            seed_samples: false,
            ..Default::default()
        }))
    }

    #[test]
    fn test_ffi_recipe_conversion() {
        let recipe = crate::parse("Tacos", "Tortillas\nBeef", "Assemble").unwrap();
        let ffi: FfiRecipe = (&recipe).into();
        assert_eq!(ffi.id, recipe.id().to_string());
        assert_eq!(ffi.title, "Tacos");
        assert_eq!(ffi.ingredients, ["Tortillas", "Beef"]);
        assert_eq!(ffi.instructions, ["Assemble"]);
    }

    #[test]
    fn test_default_session_has_samples() {
        let session = RecipeSession::new(None);
        assert_eq!(session.recipes().unwrap().len(), 2);
    }

    #[test]
    fn test_add_recipe_flow() {
        let session = empty_session();
        session.start_adding_recipe().unwrap();
        assert!(session.is_adding_recipe().unwrap());

        session
            .update_draft("Tacos".into(), "Tortillas".into(), String::new())
            .unwrap();
        assert!(matches!(
            session.save_recipe(),
            Err(FfiCatalogError::InvalidDraft { .. })
        ));
        assert!(session.is_adding_recipe().unwrap());

        session
            .update_draft("Tacos".into(), "Tortillas".into(), "Assemble".into())
            .unwrap();
        let saved = session.save_recipe().unwrap();
        assert_eq!(saved.title, "Tacos");
        assert!(!session.is_adding_recipe().unwrap());
        assert_eq!(session.recipes().unwrap(), vec![saved]);
    }

    #[test]
    fn test_update_draft_without_form() {
        let session = empty_session();
        assert!(matches!(
            session.update_draft("a".into(), "b".into(), "c".into()),
            Err(FfiCatalogError::NotEditing { .. })
        ));
    }

    #[test]
    fn test_shopping_list() {
        let session = empty_session();
        session.add_shopping_item("Eggs".into()).unwrap();
        session.add_shopping_item("Flour".into()).unwrap();
        session.add_shopping_item("Milk".into()).unwrap();

        assert_eq!(session.remove_shopping_item(0).unwrap(), "Eggs");
        assert!(matches!(
            session.remove_shopping_item(5),
            Err(FfiCatalogError::OutOfRange { .. })
        ));
        assert_eq!(
            session.remove_shopping_items(vec![1, 0]).unwrap(),
            ["Flour", "Milk"]
        );
        assert!(session.shopping_items().unwrap().is_empty());
    }

    #[test]
    fn test_parse_recipe_draft() {
        assert!(parse_recipe_draft("t".into(), "a".into(), "b".into()).is_ok());
        assert!(matches!(
            parse_recipe_draft(String::new(), "a".into(), "b".into()),
            Err(FfiCatalogError::InvalidDraft { .. })
        ));
    }

    #[cfg(feature = "uniffi")]
    #[test]
    fn test_scaffolding_tag_at_crate_root() {
        let _tag = crate::UniFfiTag;
        let session = RecipeSession::new(None);
        assert_eq!(session.recipes().unwrap().len(), 2);
    }

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
