use serde_json::{Map, Value};

/// Converts a `snake_case` key to `camelCase`.
///
/// Keys without an inner underscore pass through untouched, so keys that are
/// already camelCase are stable. Leading and trailing underscores are kept.
pub fn fold_key(key: &str) -> String {
    let core = key.trim_matches('_');
    if core.is_empty() {
        return key.to_string();
    }

    let leading = &key[..key.len() - key.trim_start_matches('_').len()];
    let trailing = &key[key.trim_end_matches('_').len()..];

    let mut words = core.split('_').filter(|word| !word.is_empty());
    let Some(first) = words.next() else {
        return key.to_string();
    };
    let rest: Vec<&str> = words.collect();
    if rest.is_empty() {
        return key.to_string();
    }

    let mut folded = String::with_capacity(key.len());
    folded.push_str(leading);
    folded.push_str(&first.to_lowercase());
    for word in rest {
        folded.push_str(&capitalize(word));
    }
    folded.push_str(trailing);
    folded
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Applies [`fold_key`] to every object key in the tree.
///
/// When two keys fold to the same name the later one in the source wins.
pub fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (fold_key(&key), fold_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}
