use crate::decoders::{fold_keys, parse_tree};
use crate::error::DecodeError;
use crate::model::Recipe;
use log::debug;
use serde_json::Value;

/// Decodes candidate text against the recipe schema, failing on the first
/// structural mismatch.
pub fn decode(candidate: &str, fold_snake_case: bool) -> Result<Recipe, DecodeError> {
    decode_value(parse_tree(candidate)?, fold_snake_case)
}

/// Decodes an already parsed tree. With `fold_snake_case`, `snake_case` keys
/// match their `camelCase` fields.
pub fn decode_value(tree: Value, fold_snake_case: bool) -> Result<Recipe, DecodeError> {
    let tree = if fold_snake_case { fold_keys(tree) } else { tree };
    let recipe: Recipe = serde_json::from_value(tree)?;
    validate(&recipe)?;

    debug!("Strictly decoded recipe: {}", recipe.recipe_name);
    if let Some(time) = &recipe.preparation_time {
        debug!("Prep Time: {time}");
    }
    if let Some(time) = &recipe.cooking_time {
        debug!("Cook Time: {time}");
    }
    if let Some(time) = &recipe.total_time {
        debug!("Total Time: {time}");
    }

    Ok(recipe)
}

// Serde accepts empty strings; the model requires non-empty names.
fn validate(recipe: &Recipe) -> Result<(), DecodeError> {
    if recipe.recipe_name.is_empty() {
        return Err(DecodeError::ValueNotFound(
            "a non-empty string for `recipeName`".to_string(),
        ));
    }
    if recipe.ingredients.iter().any(|ingredient| ingredient.item.is_empty()) {
        return Err(DecodeError::ValueNotFound(
            "a non-empty string for ingredient `item`".to_string(),
        ));
    }
    Ok(())
}
