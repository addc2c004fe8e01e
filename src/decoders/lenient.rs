use crate::decoders::parse_tree;
use crate::model::{Ingredient, Recipe, TimeValue};
use log::debug;
use serde_json::{Map, Value};

/// Best-effort recovery after strict decoding failed.
///
/// Returns `None` when the text is not a JSON object or has no non-empty
/// string `recipeName`. Every other field is read independently; a field
/// that does not have the expected shape is left empty or absent. Keys are
/// matched exactly as written; `snake_case` folding belongs to the strict tier.
pub fn recover(candidate: &str) -> Option<Recipe> {
    let tree = parse_tree(candidate).ok()?;
    recover_value(&tree)
}

/// Recovers from an already parsed tree.
pub fn recover_value(tree: &Value) -> Option<Recipe> {
    let object = tree.as_object()?;
    let recipe_name = string_field(object, "recipeName").filter(|name| !name.is_empty())?;
    debug!("Recovering partial recipe: {recipe_name}");

    let recipe = Recipe {
        recipe_name,
        introduction: string_field(object, "introduction"),
        ingredients: ingredients(object.get("ingredients")),
        preparation_time: time_value(object.get("preparationTime")),
        cooking_time: time_value(object.get("cookingTime")),
        total_time: time_value(object.get("totalTime")),
        instructions: string_list(object.get("instructions")).unwrap_or_default(),
        optional: string_list(object.get("optional")),
        nutritional_highlights: string_list(object.get("nutritionalHighlights")),
    };
    debug!("{:#?}", recipe);

    Some(recipe)
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key)?.as_str().map(String::from)
}

/// Keeps every element that is an object with a non-empty string `item`.
fn ingredients(value: Option<&Value>) -> Vec<Ingredient> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    let recovered: Vec<Ingredient> = items
        .iter()
        .filter_map(|element| {
            let object = element.as_object()?;
            let item = string_field(object, "item").filter(|item| !item.is_empty())?;
            Some(Ingredient {
                item,
                quantity: string_field(object, "quantity"),
                unit: string_field(object, "unit"),
            })
        })
        .collect();

    if recovered.len() < items.len() {
        debug!(
            "Dropped {} ingredient(s) without an item",
            items.len() - recovered.len()
        );
    }
    recovered
}

/// Both `value` and `unit` must be strings, otherwise the time is absent.
fn time_value(value: Option<&Value>) -> Option<TimeValue> {
    let object = value?.as_object()?;
    Some(TimeValue {
        value: string_field(object, "value")?,
        unit: string_field(object, "unit")?,
    })
}

/// All-or-nothing: one non-string element discards the whole list.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    value?
        .as_array()?
        .iter()
        .map(|element| element.as_str().map(String::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_requires_recipe_name() {
        assert_eq!(recover_value(&json!({"ingredients": [{"item": "salt"}]})), None);
        assert_eq!(recover_value(&json!({"recipeName": ""})), None);
        assert_eq!(recover_value(&json!({"recipeName": 42})), None);
        assert_eq!(recover_value(&json!(["recipeName"])), None);
    }

    #[test]
    fn test_name_only() {
        let recipe = recover_value(&json!({"recipeName": "Tea"})).unwrap();
        assert_eq!(recipe, Recipe::named("Tea"));
    }

    #[test]
    fn test_drops_ingredients_without_item() {
        let recipe = recover_value(&json!({
            "recipeName": "Salad",
            "ingredients": [
                {"item": "lettuce", "quantity": "1 head", "unit": 3},
                {"quantity": "2"},
                {"item": 7},
                {"item": ""},
                "tomato"
            ]
        }))
        .unwrap();
        assert_eq!(
            recipe.ingredients,
            vec![Ingredient {
                item: "lettuce".to_string(),
                quantity: Some("1 head".to_string()),
                unit: None,
            }]
        );
    }

    #[test]
    fn test_ingredients_not_an_array() {
        let recipe =
            recover_value(&json!({"recipeName": "Soup", "ingredients": "water, salt"})).unwrap();
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_partial_time_is_absent() {
        let recipe = recover_value(&json!({
            "recipeName": "Rice",
            "preparationTime": {"value": "5 minutes"},
            "cookingTime": {"value": 20, "unit": "minutes"},
            "totalTime": {"value": "25 minutes", "unit": "minutes"}
        }))
        .unwrap();
        assert_eq!(recipe.preparation_time, None);
        assert_eq!(recipe.cooking_time, None);
        assert_eq!(recipe.total_time.and_then(|t| t.int_value()), Some(25));
    }

    #[test]
    fn test_string_lists_are_all_or_nothing() {
        let recipe = recover_value(&json!({
            "recipeName": "Rice",
            "instructions": ["Rinse", 2, "Boil"],
            "optional": ["Butter", null],
            "nutritionalHighlights": ["Fibre"]
        }))
        .unwrap();
        assert!(recipe.instructions.is_empty());
        assert_eq!(recipe.optional, None);
        assert_eq!(recipe.nutritional_highlights, Some(vec!["Fibre".to_string()]));
    }

    #[test]
    fn test_present_but_empty_lists() {
        let recipe = recover_value(&json!({
            "recipeName": "Rice",
            "optional": []
        }))
        .unwrap();
        assert_eq!(recipe.optional, Some(Vec::new()));
        assert_eq!(recipe.nutritional_highlights, None);
    }

    #[test]
    fn test_recover_from_text_with_wrong_types() {
        let text = r#"{"recipeName": "Chili", "introduction": 5, "instructions": ["Simmer"]}"#;
        let recipe = recover(text).unwrap();
        assert_eq!(recipe.recipe_name, "Chili");
        assert_eq!(recipe.introduction, None);
        assert_eq!(recipe.instructions, vec!["Simmer"]);
    }

    #[test]
    fn test_recover_from_invalid_json() {
        assert_eq!(recover(r#"{"recipeName": "Chili""#), None);
    }

    #[test]
    fn test_snake_case_name_is_not_recovered() {
        assert_eq!(
            recover(r#"{"recipe_name": "Chili", "instructions": ["Simmer"]}"#),
            None
        );
        assert_eq!(
            recover_value(&json!({"recipeName": "Chili", "nutritional_highlights": ["Fibre"]}))
                .and_then(|recipe| recipe.nutritional_highlights),
            None
        );
    }
}
