//! Recover structured recipes from free-form language-model output.
//!
//! The pipeline locates the JSON object inside the surrounding prose, tries a
//! strict schema decode and, when that fails, falls back to recovering
//! whichever fields are usable.
//!
//! ```
//! let raw = "Here you go: {\"recipeName\":\"Tea\",\"ingredients\":[],\"instructions\":[\"Boil water\"]} Enjoy!";
//! let recipe = recipe_draft::parse_recipe(raw).unwrap();
//! assert_eq!(recipe.recipe_name, "Tea");
//! ```

pub mod config;
pub mod decoders;
pub mod error;
pub mod extractor;
pub mod model;
pub mod parser;
pub mod render;
pub mod uniffi_bindings;

pub use crate::config::{OutputFormat, ParserSettings, Settings};
pub use error::{DecodeError, ExtractionError, ParseError};
pub use extractor::extract_json_object;
pub use model::{Ingredient, Recipe, TimeValue};
pub use parser::{ParseReport, ParseStage, RecipeParser};

/// Parse a recipe out of raw model output, or `None` if nothing usable was found.
pub fn parse_recipe(raw_text: &str) -> Option<Recipe> {
    RecipeParser::default().parse(raw_text)
}

/// Like [`parse_recipe`], returning the diagnostics alongside the result.
pub fn parse_recipe_with_report(raw_text: &str) -> ParseReport {
    RecipeParser::default().parse_with_report(raw_text)
}

/// Like [`parse_recipe`], with the failure as an error value.
pub fn try_parse_recipe(raw_text: &str) -> Result<Recipe, ParseError> {
    RecipeParser::default().try_parse(raw_text)
}
