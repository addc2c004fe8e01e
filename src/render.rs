use crate::model::{Recipe, TimeValue};
use std::fmt::Write;

/// Renders a recipe as plain text for display.
///
/// Sections for optional suggestions and nutritional highlights only appear
/// when they hold at least one entry.
pub fn to_text(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&recipe.recipe_name);
    out.push('\n');

    if let Some(introduction) = &recipe.introduction {
        out.push('\n');
        out.push_str(introduction);
        out.push('\n');
    }

    let times: [(&str, &Option<TimeValue>); 3] = [
        ("Prep Time", &recipe.preparation_time),
        ("Cook Time", &recipe.cooking_time),
        ("Total Time", &recipe.total_time),
    ];
    let mut wrote_time = false;
    for (label, time) in times {
        if let Some(time) = time {
            if !wrote_time {
                out.push('\n');
                wrote_time = true;
            }
            let _ = writeln!(out, "{label}: {time}");
        }
    }

    out.push_str("\nIngredients\n");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "• {ingredient}");
    }

    if !recipe.instructions.is_empty() {
        out.push_str("\nInstructions\n");
        for (index, step) in recipe.instructions.iter().enumerate() {
            let _ = writeln!(out, "{}. {step}", index + 1);
        }
    }

    bullet_section(&mut out, "Optional", recipe.optional.as_deref());
    bullet_section(
        &mut out,
        "Nutritional Highlights",
        recipe.nutritional_highlights.as_deref(),
    );

    out
}

fn bullet_section(out: &mut String, title: &str, entries: Option<&[String]>) {
    let Some(entries) = entries.filter(|entries| !entries.is_empty()) else {
        return;
    };
    let _ = writeln!(out, "\n{title}");
    for entry in entries {
        let _ = writeln!(out, "• {entry}");
    }
}
