use crate::error::ExtractionError;

/// Returns the span from the first `{` to the last `}`, both inclusive.
///
/// This is a delimiter scan, not a brace matcher: prose and code fences
/// around the object fall outside the span, and anything odd inside it is
/// left for the decoders to reject.
pub fn extract_json_object(text: &str) -> Result<&str, ExtractionError> {
    let start = text.find('{').ok_or(ExtractionError::NoJsonFound)?;
    let end = text.rfind('}').ok_or(ExtractionError::NoJsonFound)?;

    if end < start {
        return Err(ExtractionError::NoJsonFound);
    }

    Ok(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_prose_and_fences() {
        let text = "Here is the recipe:\n```json\n{\"recipeName\": \"Tea\"}\n```\nEnjoy!";
        assert_eq!(
            extract_json_object(text),
            Ok("{\"recipeName\": \"Tea\"}")
        );
    }

    #[test]
    fn test_spans_first_open_to_last_close() {
        let text = "a {\"x\": {\"y\": 1}} b } c";
        assert_eq!(extract_json_object(text), Ok("{\"x\": {\"y\": 1}} b }"));
    }

    #[test]
    fn test_missing_delimiters() {
        assert_eq!(extract_json_object(""), Err(ExtractionError::NoJsonFound));
        assert_eq!(
            extract_json_object("no braces here"),
            Err(ExtractionError::NoJsonFound)
        );
        assert_eq!(
            extract_json_object("only { open"),
            Err(ExtractionError::NoJsonFound)
        );
        assert_eq!(
            extract_json_object("only } close"),
            Err(ExtractionError::NoJsonFound)
        );
    }

    #[test]
    fn test_close_before_open() {
        assert_eq!(
            extract_json_object("} backwards {"),
            Err(ExtractionError::NoJsonFound)
        );
    }

    #[test]
    fn test_multibyte_text_around_object() {
        let text = "Voilà la recette 🍝 {\"recipeName\": \"Pâtes\"} ✓";
        assert_eq!(
            extract_json_object(text),
            Ok("{\"recipeName\": \"Pâtes\"}")
        );
    }
}
