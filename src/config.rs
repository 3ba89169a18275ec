use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level catalog configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Add-recipe form configuration
    #[serde(default)]
    pub draft: DraftConfig,
    /// Shopping list configuration
    #[serde(default)]
    pub shopping_list: ShoppingListConfig,
}

/// Configuration for the recipe catalog
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Start the catalog with the built-in sample recipes
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_samples: default_seed_samples(),
        }
    }
}

/// How ingredient and instruction blocks are split into lines
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinePolicy {
    /// Split on every newline and keep blank lines
    #[default]
    Literal,
    /// Drop lines that are blank after trimming
    SkipBlank,
}

/// Configuration for the add-recipe form
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DraftConfig {
    #[serde(default)]
    pub line_policy: LinePolicy,
}

/// Configuration for the shopping list
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ShoppingListConfig {
    /// Entries the shopping list starts with
    #[serde(default)]
    pub initial_items: Vec<String>,
}

fn default_seed_samples() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BOX__ prefix
    /// 2. recipe-box.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BOX__CATALOG__SEED_SAMPLES.
    /// `RECIPE_BOX__SHOPPING_LIST__INITIAL_ITEMS` takes a comma-separated list.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration, see [`AppConfig::load`]
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_with_environment(Environment::with_prefix("RECIPE_BOX"))
}

fn load_with_environment(environment: Environment) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-box").required(false))
        // Use double underscore for nested: RECIPE_BOX__DRAFT__LINE_POLICY
        .add_source(
            environment
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("shopping_list.initial_items")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
