use log::{debug, info};

use crate::config::AppConfig;
use crate::draft::{AddRecipeWorkflow, Draft, DraftParser, WorkflowState};
use crate::error::WorkflowError;
use crate::model::Recipe;
use crate::shopping::ShoppingList;
use crate::store::RecipeStore;

/// The two top-level screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Recipes,
    ShoppingList,
}

/// All mutable state of one running catalog.
///
/// The presentation layer owns a `Session` and drives it; nothing else holds
/// the recipe store or shopping list.
#[derive(Debug, Clone)]
pub struct Session {
    recipes: RecipeStore,
    shopping_list: ShoppingList,
    workflow: AddRecipeWorkflow,
    parser: DraftParser,
    tab: Tab,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(&AppConfig::default())
    }
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        let recipes = if config.catalog.seed_samples {
            RecipeStore::with_samples()
        } else {
            RecipeStore::new()
        };
        let shopping_list: ShoppingList =
            config.shopping_list.initial_items.iter().cloned().collect();

        info!(
            "Session started with {} recipe(s) and {} shopping item(s)",
            recipes.len(),
            shopping_list.len()
        );

        Session {
            recipes,
            shopping_list,
            workflow: AddRecipeWorkflow::new(),
            parser: DraftParser::new(config.draft.line_policy),
            tab: Tab::default(),
        }
    }

    pub fn recipes(&self) -> &RecipeStore {
        &self.recipes
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping_list
    }

    pub fn shopping_list_mut(&mut self) -> &mut ShoppingList {
        &mut self.shopping_list
    }

    pub fn selected_tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!("Selected tab {:?}", tab);
        self.tab = tab;
    }

    pub fn add_recipe_state(&self) -> WorkflowState {
        self.workflow.state()
    }

    /// Show the add-recipe form
    pub fn start_adding_recipe(&mut self) {
        self.workflow.begin();
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.workflow.draft()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.workflow.draft_mut()
    }

    pub fn cancel_adding_recipe(&mut self) {
        self.workflow.cancel();
    }

    /// Save the open draft into the catalog.
    ///
    /// On success the new recipe is appended and the form is dismissed. On
    /// failure nothing is stored and the form stays open with its text.
    pub fn save_recipe(&mut self) -> Result<Recipe, WorkflowError> {
        let recipe = self.workflow.submit(&self.parser)?;
        info!("Saved recipe '{}'", recipe.title());
        self.recipes.add(recipe.clone());
        Ok(recipe)
    }
}
