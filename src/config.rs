use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Top-level settings structure
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Parsing pipeline behaviour
    #[serde(default)]
    pub parser: ParserSettings,
    /// How the command-line front end prints recipes
    #[serde(default)]
    pub output: OutputSettings,
}

/// Knobs for the parsing pipeline. The defaults give the full two-tier behaviour.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ParserSettings {
    /// Fall back to field-by-field recovery when strict decoding fails
    #[serde(default = "default_true")]
    pub lenient_fallback: bool,
    /// Treat `snake_case` keys as their `camelCase` equivalents
    #[serde(default = "default_true")]
    pub fold_snake_case_keys: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            lenient_fallback: true,
            fold_snake_case_keys: true,
        }
    }
}

/// Output format for parsed recipes
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with RECIPE_DRAFT__ prefix
    /// 2. recipe-draft.toml in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_DRAFT__PARSER__LENIENT_FALLBACK
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load settings from file and environment variables, see [`Settings::load`]
pub fn load_config() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("recipe-draft").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_DRAFT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Parse settings from a TOML document
pub fn load_config_from_str(toml: &str) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}
