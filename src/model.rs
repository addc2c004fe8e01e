use serde::{Deserialize, Serialize};
use std::fmt;

/// A recipe recovered from model output.
///
/// `recipe_name` is never empty. `ingredients` and `instructions` are always
/// present (possibly empty); every other field is `None` when the model did
/// not provide it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<TimeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<TimeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<TimeValue>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_highlights: Option<Vec<String>>,
}

impl Recipe {
    /// Minimal recipe with only a name; every list empty and every option absent.
    pub fn named(recipe_name: impl Into<String>) -> Self {
        Recipe {
            recipe_name: recipe_name.into(),
            introduction: None,
            ingredients: Vec::new(),
            preparation_time: None,
            cooking_time: None,
            total_time: None,
            instructions: Vec::new(),
            optional: None,
            nutritional_highlights: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [self.quantity.as_deref(), self.unit.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .chain(std::iter::once(self.item.as_str()))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// A duration as the model wrote it, e.g. `{"value": "10 minutes", "unit": "minutes"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    pub value: String,
    pub unit: String,
}

impl TimeValue {
    /// Concatenates every ASCII digit in `value` and parses the result.
    ///
    /// Lossy: "10-15 minutes" yields `1015`. Returns `None` when `value`
    /// holds no digits or the digit run does not fit in an `i64`.
    pub fn int_value(&self) -> Option<i64> {
        let digits: String = self.value.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
