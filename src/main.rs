use std::io;

use clap::Parser;
use log::info;
use recipe_box::{AppConfig, CatalogError, LinePolicy, Session};

mod cli;

use cli::Repl;

/// Browse recipes, add your own and keep a shopping list
#[derive(Parser, Debug)]
#[command(name = "recipe-box", version, about)]
struct Args {
    /// Start with an empty catalog instead of the sample recipes
    #[arg(long)]
    no_samples: bool,

    /// Drop blank lines when splitting ingredients and instructions
    #[arg(long)]
    skip_blank_lines: bool,

    /// Print recipes and the shopping list as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if self.no_samples {
            config.catalog.seed_samples = false;
        }
        if self.skip_blank_lines {
            config.draft.line_policy = LinePolicy::SkipBlank;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = AppConfig::load().map_err(CatalogError::from)?;
    args.apply(&mut config);
    info!("Loaded configuration: {:?}", config);

    let session = Session::new(&config);
    let mut repl = Repl::new(session, io::stdin().lock(), io::stdout().lock(), args.json);
    repl.run()?;
    Ok(())
}
