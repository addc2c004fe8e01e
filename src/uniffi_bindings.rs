//! UniFFI bindings for recipe-draft
//!
//! FFI-compatible mirrors of the recipe model so iOS and Android hosts can
//! hand raw model output to the parser and render the result natively.
//! Everything here is synchronous; callers own any threading.

use crate::{Ingredient, ParseStage, Recipe, TimeValue};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub recipe_name: String,
    pub introduction: Option<String>,
    pub ingredients: Vec<FfiIngredient>,
    pub preparation_time: Option<FfiTimeValue>,
    pub cooking_time: Option<FfiTimeValue>,
    pub total_time: Option<FfiTimeValue>,
    /// Steps in order
    pub instructions: Vec<String>,
    pub optional: Option<Vec<String>>,
    pub nutritional_highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub item: String,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

/// Time as written by the model, plus its lossy digit-only integer form
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiTimeValue {
    pub value: String,
    pub unit: String,
    pub int_value: Option<i64>,
}

/// FFI-compatible parse stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiParseStage {
    Strict,
    Lenient,
    Failed,
}

/// Result plus diagnostics, flattened to strings for the host
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiParseReport {
    pub recipe: Option<FfiRecipe>,
    pub stage: FfiParseStage,
    pub extraction_error: Option<String>,
    pub strict_error: Option<String>,
}

impl From<Ingredient> for FfiIngredient {
    fn from(ingredient: Ingredient) -> Self {
        FfiIngredient {
            item: ingredient.item,
            quantity: ingredient.quantity,
            unit: ingredient.unit,
        }
    }
}

impl From<FfiIngredient> for Ingredient {
    fn from(ffi: FfiIngredient) -> Self {
        Ingredient {
            item: ffi.item,
            quantity: ffi.quantity,
            unit: ffi.unit,
        }
    }
}

impl From<TimeValue> for FfiTimeValue {
    fn from(time: TimeValue) -> Self {
        let int_value = time.int_value();
        FfiTimeValue {
            value: time.value,
            unit: time.unit,
            int_value,
        }
    }
}

impl From<FfiTimeValue> for TimeValue {
    fn from(ffi: FfiTimeValue) -> Self {
        TimeValue {
            value: ffi.value,
            unit: ffi.unit,
        }
    }
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            recipe_name: recipe.recipe_name,
            introduction: recipe.introduction,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            preparation_time: recipe.preparation_time.map(Into::into),
            cooking_time: recipe.cooking_time.map(Into::into),
            total_time: recipe.total_time.map(Into::into),
            instructions: recipe.instructions,
            optional: recipe.optional,
            nutritional_highlights: recipe.nutritional_highlights,
        }
    }
}

impl From<FfiRecipe> for Recipe {
    fn from(ffi: FfiRecipe) -> Self {
        Recipe {
            recipe_name: ffi.recipe_name,
            introduction: ffi.introduction,
            ingredients: ffi.ingredients.into_iter().map(Into::into).collect(),
            preparation_time: ffi.preparation_time.map(Into::into),
            cooking_time: ffi.cooking_time.map(Into::into),
            total_time: ffi.total_time.map(Into::into),
            instructions: ffi.instructions,
            optional: ffi.optional,
            nutritional_highlights: ffi.nutritional_highlights,
        }
    }
}

impl From<ParseStage> for FfiParseStage {
    fn from(stage: ParseStage) -> Self {
        match stage {
            ParseStage::Strict => FfiParseStage::Strict,
            ParseStage::Lenient => FfiParseStage::Lenient,
            ParseStage::Failed => FfiParseStage::Failed,
        }
    }
}

/// Parse a recipe from raw model output
///
/// # Returns
/// The recipe, or `None` when no usable recipe could be recovered
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recipe(text: String) -> Option<FfiRecipe> {
    crate::parse_recipe(&text).map(Into::into)
}

/// Parse a recipe and report which stage produced it and why earlier stages failed
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recipe_report(text: String) -> FfiParseReport {
    let report = crate::parse_recipe_with_report(&text);
    FfiParseReport {
        recipe: report.recipe.map(Into::into),
        stage: report.stage.into(),
        extraction_error: report.extraction_error.map(|e| e.to_string()),
        strict_error: report.strict_error.map(|e| e.to_string()),
    }
}

/// Digit-only integer form of a time value string, e.g. "10 minutes" -> 10
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn time_value_int(value: String) -> Option<i64> {
    TimeValue {
        value,
        unit: String::new(),
    }
    .int_value()
}

/// Render a recipe as display text
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn render_recipe_text(recipe: FfiRecipe) -> String {
    crate::render::to_text(&recipe.into())
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
