use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use log::{debug, error};
use recipe_box::{view, CatalogError, DraftField, Session, Tab};
use thiserror::Error;

const HELP: &str = "\
Commands:
  list                 show all recipes
  show <n>             show recipe number <n>
  add                  add a recipe (end each block with a line containing only '.')
  draft                show the recipe being added
  edit <field>         re-enter title, ingredients or instructions of that recipe
  save                 save the recipe being added
  cancel               discard an unsaved recipe
  shop                 show the shopping list
  shop add <item>      add an item to the shopping list
  shop rm <i> [<j>..]  remove items by position
  tab <recipes|shopping>
  help
  quit";

/// Marks the end of a multi-line block in `add`
const END_OF_BLOCK: &str = ".";

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    List,
    Show(usize),
    Add,
    ShowDraft,
    Edit(DraftField),
    Save,
    Cancel,
    Shop,
    ShopAdd(String),
    ShopRemove(BTreeSet<usize>),
    Tab(Tab),
    Help,
    Quit,
}

fn parse_index(word: &str) -> Result<usize, CliError> {
    word.parse()
        .map_err(|_| CliError::Usage(format!("'{}' is not a position", word)))
}

fn parse_command(line: &str) -> Result<Option<Command>, CliError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "" => return Ok(None),
        "list" | "ls" => Command::List,
        "show" => Command::Show(parse_index(rest)?),
        "add" => Command::Add,
        "draft" => Command::ShowDraft,
        "save" => Command::Save,
        "edit" => match rest {
            "title" => Command::Edit(DraftField::Title),
            "ingredients" => Command::Edit(DraftField::Ingredients),
            "instructions" => Command::Edit(DraftField::Instructions),
            _ => {
                return Err(CliError::Usage(
                    "usage: edit <title|ingredients|instructions>".to_string(),
                ))
            }
        },
        "cancel" => Command::Cancel,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "tab" => match rest {
            "recipes" => Command::Tab(Tab::Recipes),
            "shopping" => Command::Tab(Tab::ShoppingList),
            _ => return Err(CliError::Usage("usage: tab <recipes|shopping>".to_string())),
        },
        "shop" => {
            let (sub, args) = match rest.split_once(char::is_whitespace) {
                Some((sub, args)) => (sub, args.trim()),
                None => (rest, ""),
            };
            match sub {
                "" => Command::Shop,
                // Surrounding whitespace is trimmed; an empty item is still accepted
                "add" => Command::ShopAdd(args.to_string()),
                "rm" => {
                    let indices = args
                        .split_whitespace()
                        .map(parse_index)
                        .collect::<Result<BTreeSet<_>, _>>()?;
                    if indices.is_empty() {
                        return Err(CliError::Usage("usage: shop rm <i> [<j> ...]".to_string()));
                    }
                    Command::ShopRemove(indices)
                }
                other => {
                    return Err(CliError::Usage(format!("unknown shop command '{}'", other)))
                }
            }
        }
        other => return Err(CliError::Usage(format!("unknown command '{}'", other))),
    };
    Ok(Some(command))
}

/// Line-oriented front end over a [`Session`]
pub struct Repl<R, W> {
    session: Session,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(session: Session, input: R, output: W, json: bool) -> Self {
        Repl {
            session,
            input,
            output,
            json,
        }
    }

    /// Read commands until `quit` or end of input
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            match parse_command(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => {
                    debug!("Running {:?}", command);
                    match self.execute(command) {
                        Ok(()) => {}
                        Err(CliError::Io(e)) => return Err(CliError::Io(e)),
                        Err(e) => self.report(&e)?,
                    }
                }
                Ok(None) => {}
                Err(e) => self.report(&e)?,
            }
        }
        Ok(())
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    fn report(&mut self, e: &CliError) -> Result<(), CliError> {
        error!("{}", e);
        writeln!(self.output, "error: {}", e)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Lines up to the end-of-block marker, joined with '\n'
    fn read_block(&mut self, prompt: &str) -> Result<String, CliError> {
        writeln!(self.output, "{} (end with '{}'):", prompt, END_OF_BLOCK)?;
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line == END_OF_BLOCK {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    fn execute(&mut self, command: Command) -> Result<(), CliError> {
        match command {
            Command::List => self.list(),
            Command::Show(position) => self.show(position),
            Command::Add => self.add(),
            Command::ShowDraft => self.show_draft(),
            Command::Edit(field) => self.edit(field),
            Command::Save => self.save(),
            Command::Cancel => {
                self.session.cancel_adding_recipe();
                Ok(())
            }
            Command::Shop => self.shop(),
            Command::ShopAdd(item) => {
                self.session.shopping_list_mut().add(item);
                self.shop()
            }
            Command::ShopRemove(indices) => {
                let removed = self
                    .session
                    .shopping_list_mut()
                    .remove_many(&indices)
                    .map_err(CatalogError::from)?;
                for item in removed {
                    writeln!(self.output, "removed: {}", item)?;
                }
                Ok(())
            }
            Command::Tab(tab) => {
                self.session.select_tab(tab);
                match tab {
                    Tab::Recipes => self.list(),
                    Tab::ShoppingList => self.shop(),
                }
            }
            Command::Help => {
                writeln!(self.output, "{}", HELP)?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn list(&mut self) -> Result<(), CliError> {
        let recipes = self.session.recipes().list();
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string_pretty(recipes)?)?;
            return Ok(());
        }
        for (i, recipe) in recipes.iter().enumerate() {
            writeln!(self.output, "[{}] {}\n", i, view::recipe_card(recipe))?;
        }
        Ok(())
    }

    fn show(&mut self, position: usize) -> Result<(), CliError> {
        let recipe = self
            .session
            .recipes()
            .get(position)
            .ok_or_else(|| CliError::Usage(format!("no recipe number {}", position)))?;
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string_pretty(recipe)?)?;
        } else {
            write!(self.output, "{}", view::recipe_detail(recipe))?;
        }
        Ok(())
    }

    fn shop(&mut self) -> Result<(), CliError> {
        let list = self.session.shopping_list();
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string_pretty(list.items())?)?;
        } else {
            write!(self.output, "{}", view::shopping_list(list))?;
        }
        Ok(())
    }

    fn add(&mut self) -> Result<(), CliError> {
        // A rejected recipe keeps its text; show it instead of prompting over it
        if self.session.draft().is_some() {
            writeln!(self.output, "a recipe is already being added:")?;
            self.show_draft()?;
            writeln!(
                self.output,
                "use 'edit <field>' and 'save' to finish it, or 'cancel' to discard it"
            )?;
            return Ok(());
        }

        self.session.start_adding_recipe();
        let title = self.read_field(DraftField::Title)?;
        let ingredients = self.read_field(DraftField::Ingredients)?;
        let instructions = self.read_field(DraftField::Instructions)?;

        if let Some(draft) = self.session.draft_mut() {
            draft.title = title;
            draft.ingredients = ingredients;
            draft.instructions = instructions;
        }
        self.save()
    }

    fn read_field(&mut self, field: DraftField) -> Result<String, CliError> {
        match field {
            DraftField::Title => {
                writeln!(self.output, "Recipe title:")?;
                Ok(self.read_line()?.unwrap_or_default())
            }
            DraftField::Ingredients => self.read_block("Ingredients"),
            DraftField::Instructions => self.read_block("Instructions"),
        }
    }

    fn no_draft() -> CliError {
        CliError::Usage("no recipe is being added; run 'add' first".to_string())
    }

    fn show_draft(&mut self) -> Result<(), CliError> {
        let draft = self.session.draft().ok_or_else(Self::no_draft)?;
        writeln!(
            self.output,
            "Title: {}\nIngredients:\n{}\nInstructions:\n{}",
            draft.title, draft.ingredients, draft.instructions
        )?;
        Ok(())
    }

    fn edit(&mut self, field: DraftField) -> Result<(), CliError> {
        if self.session.draft().is_none() {
            return Err(Self::no_draft());
        }
        let text = self.read_field(field)?;
        if let Some(draft) = self.session.draft_mut() {
            match field {
                DraftField::Title => draft.title = text,
                DraftField::Ingredients => draft.ingredients = text,
                DraftField::Instructions => draft.instructions = text,
            }
        }
        Ok(())
    }

    fn save(&mut self) -> Result<(), CliError> {
        if self.session.draft().is_none() {
            return Err(Self::no_draft());
        }
        match self.session.save_recipe() {
            Ok(recipe) => {
                writeln!(self.output, "saved: {}", recipe.title())?;
                Ok(())
            }
            Err(e) => {
                writeln!(
                    self.output,
                    "recipe not saved; use 'draft' to review it, 'edit <field>' and 'save' \
                     to fix it, or 'cancel' to discard it"
                )?;
                Err(CatalogError::from(e).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_box::{AppConfig, WorkflowState};

    fn empty_session() -> Session {
        let mut config = AppConfig::default();
        config.catalog.seed_samples = false;
        Session::new(&config)
    }

    fn run(session: Session, input: &str) -> (Session, String) {
        let mut output = Vec::new();
        let mut repl = Repl::new(session, input.as_bytes(), &mut output, false);
        repl.run().unwrap();
        let session = repl.into_session();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("  ").unwrap(), None);
        assert_eq!(parse_command("list").unwrap(), Some(Command::List));
        assert_eq!(parse_command("show 2").unwrap(), Some(Command::Show(2)));
        assert_eq!(
            parse_command("shop add 2 Eggs").unwrap(),
            Some(Command::ShopAdd("2 Eggs".to_string()))
        );
        assert_eq!(
            parse_command("shop rm 3 1 3").unwrap(),
            Some(Command::ShopRemove([1, 3].into_iter().collect()))
        );
        assert_eq!(
            parse_command("tab shopping").unwrap(),
            Some(Command::Tab(Tab::ShoppingList))
        );
        assert_eq!(
            parse_command("shop add   Eggs  ").unwrap(),
            Some(Command::ShopAdd("Eggs".to_string()))
        );
        assert_eq!(
            parse_command("shop add").unwrap(),
            Some(Command::ShopAdd(String::new()))
        );
        assert_eq!(
            parse_command("edit ingredients").unwrap(),
            Some(Command::Edit(DraftField::Ingredients))
        );
        assert_eq!(parse_command("save").unwrap(), Some(Command::Save));
        assert!(parse_command("edit notes").is_err());
        assert!(parse_command("show x").is_err());
        assert!(parse_command("shop rm").is_err());
        assert!(parse_command("bake").is_err());
    }

    #[test]
    fn test_add_recipe() {
        let input = "add\nTacos\nTortillas\nBeef\n.\nCook beef\nAssemble\n.\nshow 0\nquit\n";
        let (session, output) = run(empty_session(), input);

        assert_eq!(session.recipes().len(), 1);
        let recipe = &session.recipes().list()[0];
        assert_eq!(recipe.ingredients(), ["Tortillas", "Beef"]);
        assert_eq!(recipe.instructions(), ["Cook beef", "Assemble"]);
        assert!(output.contains("saved: Tacos"));
        assert!(output.contains("2. Assemble"));
    }

    #[test]
    fn test_rejected_recipe_keeps_form_open() {
        let input = "add\nTacos\n.\nAssemble\n.\n";
        let (session, output) = run(empty_session(), input);

        assert!(session.recipes().is_empty());
        assert_eq!(session.add_recipe_state(), WorkflowState::Editing);
        assert!(output.contains("error: Recipe ingredients cannot be empty"));
    }

    #[test]
    fn test_rejected_recipe_can_be_fixed_and_saved() {
        let input = "add\nTacos\n.\nAssemble\n.\ndraft\nedit ingredients\nTortillas\n.\nsave\n";
        let (session, output) = run(empty_session(), input);

        assert!(output.contains("Title: Tacos\nIngredients:\n\nInstructions:\nAssemble"));
        assert!(output.contains("saved: Tacos"));
        assert_eq!(session.recipes().len(), 1);
        let recipe = &session.recipes().list()[0];
        assert_eq!(recipe.ingredients(), ["Tortillas"]);
        assert_eq!(recipe.instructions(), ["Assemble"]);
        assert_eq!(session.add_recipe_state(), WorkflowState::Committed);
    }

    #[test]
    fn test_add_with_open_draft_keeps_its_text() {
        let input = "add\nTacos\n.\nAssemble\n.\nadd\n";
        let (session, output) = run(empty_session(), input);

        assert!(output.contains("a recipe is already being added:"));
        let draft = session.draft().unwrap();
        assert_eq!(draft.title, "Tacos");
        assert_eq!(draft.instructions, "Assemble");
    }

    #[test]
    fn test_draft_commands_without_form() {
        let (session, output) = run(empty_session(), "draft\nedit title\nsave\n");

        assert_eq!(output.matches("error: no recipe is being added").count(), 3);
        assert!(!output.contains("recipe not saved"));
        assert!(session.recipes().is_empty());
    }

    #[test]
    fn test_shopping_commands() {
        let input = "shop add Eggs\nshop add Flour\nshop rm 0\nshop rm 9\nshop\n";
        let (session, output) = run(empty_session(), input);

        assert_eq!(session.shopping_list().items(), ["Flour"]);
        assert!(output.contains("removed: Eggs"));
        assert!(output.contains("error: Index 9 is out of range"));
        assert!(output.ends_with("0: Flour\n> "));
    }

    #[test]
    fn test_list_samples() {
        let (_, output) = run(Session::default(), "list\n");
        assert!(output.contains("[0] Pasta Carbonara"));
        assert!(output.contains("[1] Chocolate Chip Cookies"));
    }

    #[test]
    fn test_json_list() {
        let mut output = Vec::new();
        let mut repl = Repl::new(Session::default(), "list\n".as_bytes(), &mut output, true);
        repl.run().unwrap();
        drop(repl);

        let text = String::from_utf8(output).unwrap();
        let start = text.find('[').unwrap();
        let end = text.rfind(']').unwrap();
        let json: serde_json::Value = serde_json::from_str(&text[start..=end]).unwrap();
        assert_eq!(json[0]["title"], "Pasta Carbonara");
    }
}
