//! Turning the add-recipe form into a [`Recipe`].
//!
//! [`DraftParser`] is the pure text-to-recipe step. [`AddRecipeWorkflow`] is
//! the form around it: it opens, holds the three draft strings while the user
//! edits them, and only closes with a recipe when the parser accepts the draft.

use log::{debug, warn};

use crate::config::LinePolicy;
use crate::error::{DraftField, ValidationError, WorkflowError};
use crate::model::Recipe;

/// Parse a draft with the default (literal) line policy
///
/// # Example
/// ```
/// let recipe = recipe_box::parse("Tacos", "Tortillas\nBeef", "Cook beef\nAssemble").unwrap();
/// assert_eq!(recipe.ingredients(), ["Tortillas", "Beef"]);
/// ```
pub fn parse(
    title: &str,
    ingredients: &str,
    instructions: &str,
) -> Result<Recipe, ValidationError> {
    DraftParser::default().parse(title, ingredients, instructions)
}

/// Validates draft text and splits it into recipe lines
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftParser {
    policy: LinePolicy,
}

impl DraftParser {
    pub fn new(policy: LinePolicy) -> Self {
        DraftParser { policy }
    }

    pub fn policy(&self) -> LinePolicy {
        self.policy
    }

    /// Build a recipe from the three form fields.
    ///
    /// Each block is split on `'\n'`. With [`LinePolicy::Literal`] lines are
    /// kept verbatim, blank ones included, and only a completely empty field is
    /// rejected. With [`LinePolicy::SkipBlank`] whitespace-only lines are
    /// dropped and a block left with no lines is rejected as empty.
    ///
    /// # Errors
    /// `ValidationError::Empty` naming the first empty field in form order.
    pub fn parse(
        &self,
        title: &str,
        ingredients: &str,
        instructions: &str,
    ) -> Result<Recipe, ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::Empty {
                field: DraftField::Title,
            });
        }
        let ingredient_lines = self.split(DraftField::Ingredients, ingredients)?;
        let instruction_lines = self.split(DraftField::Instructions, instructions)?;

        let recipe = Recipe::new(title.to_string(), ingredient_lines, instruction_lines);
        debug!(
            "Parsed draft '{}': {} ingredient(s), {} step(s)",
            recipe.title(),
            recipe.ingredients().len(),
            recipe.instructions().len()
        );
        Ok(recipe)
    }

    fn split(&self, field: DraftField, block: &str) -> Result<Vec<String>, ValidationError> {
        if block.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        let lines: Vec<String> = match self.policy {
            LinePolicy::Literal => block.split('\n').map(str::to_string).collect(),
            LinePolicy::SkipBlank => block
                .split('\n')
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        };

        if lines.is_empty() {
            return Err(ValidationError::Empty { field });
        }
        Ok(lines)
    }
}

/// The text a user is typing into the add-recipe form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
}

impl Draft {
    pub fn parse_with(&self, parser: &DraftParser) -> Result<Recipe, ValidationError> {
        parser.parse(&self.title, &self.ingredients, &self.instructions)
    }
}

/// Observable state of the add-recipe form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Editing,
    Committed,
}

#[derive(Debug, Clone, Default)]
enum Stage {
    #[default]
    Idle,
    Editing(Draft),
    Committed,
}

/// `Idle -> Editing -> {Idle (cancelled), Committed (saved)}`
#[derive(Debug, Clone, Default)]
pub struct AddRecipeWorkflow {
    stage: Stage,
}

impl AddRecipeWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WorkflowState {
        match self.stage {
            Stage::Idle => WorkflowState::Idle,
            Stage::Editing(_) => WorkflowState::Editing,
            Stage::Committed => WorkflowState::Committed,
        }
    }

    /// True while the form is shown
    pub fn is_presented(&self) -> bool {
        matches!(self.stage, Stage::Editing(_))
    }

    /// Open the form with an empty draft. An open form keeps its draft.
    pub fn begin(&mut self) {
        if !self.is_presented() {
            self.stage = Stage::Editing(Draft::default());
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.stage {
            Stage::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match &mut self.stage {
            Stage::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// Close the form, discarding the draft
    pub fn cancel(&mut self) {
        if self.is_presented() {
            debug!("Add recipe cancelled");
            self.stage = Stage::Idle;
        }
    }

    /// Try to save the draft.
    ///
    /// On success the form closes (`Committed`) and the recipe is handed back
    /// for the caller to store. On a validation failure the form stays open
    /// with the draft untouched.
    pub fn submit(&mut self, parser: &DraftParser) -> Result<Recipe, WorkflowError> {
        let draft = self.draft().ok_or(WorkflowError::NotEditing)?;
        match draft.parse_with(parser) {
            Ok(recipe) => {
                self.stage = Stage::Committed;
                Ok(recipe)
            }
            Err(e) => {
                warn!("Draft rejected: {}", e);
                Err(e.into())
            }
        }
    }
}
