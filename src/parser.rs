use crate::config::ParserSettings;
use crate::decoders::{lenient, parse_tree, strict};
use crate::error::{DecodeError, ExtractionError, ParseError};
use crate::extractor::extract_json_object;
use crate::model::Recipe;
use log::{info, warn};

/// Which tier of the pipeline produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    /// Schema-conforming decode
    Strict,
    /// Field-by-field recovery after the strict decode failed
    Lenient,
    /// No recipe was produced
    Failed,
}

/// Outcome of one pipeline run together with its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    pub recipe: Option<Recipe>,
    pub stage: ParseStage,
    /// Set when no JSON object could be located
    pub extraction_error: Option<ExtractionError>,
    /// The strict decoder's classified failure, if it ran and failed
    pub strict_error: Option<DecodeError>,
}

impl ParseReport {
    fn extraction_failed(err: ExtractionError) -> Self {
        ParseReport {
            recipe: None,
            stage: ParseStage::Failed,
            extraction_error: Some(err),
            strict_error: None,
        }
    }

    fn decoded(
        recipe: Option<Recipe>,
        stage: ParseStage,
        strict_error: Option<DecodeError>,
    ) -> Self {
        let stage = if recipe.is_some() { stage } else { ParseStage::Failed };
        ParseReport {
            recipe,
            stage,
            extraction_error: None,
            strict_error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.recipe.is_some()
    }

    /// Turns a no-result report into an error carrying its diagnostics.
    pub fn into_result(self) -> Result<Recipe, ParseError> {
        if let Some(err) = self.extraction_error {
            return Err(err.into());
        }
        self.recipe.ok_or(ParseError::NoResult {
            strict: self.strict_error,
        })
    }
}

/// Extracts and decodes recipes from raw model output.
///
/// Stateless apart from its settings, so one parser can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeParser {
    settings: ParserSettings,
}

impl RecipeParser {
    pub fn new(settings: ParserSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    pub fn parse(&self, raw: &str) -> Option<Recipe> {
        self.parse_with_report(raw).recipe
    }

    pub fn try_parse(&self, raw: &str) -> Result<Recipe, ParseError> {
        self.parse_with_report(raw).into_result()
    }

    pub fn parse_with_report(&self, raw: &str) -> ParseReport {
        let candidate = match extract_json_object(raw) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!("{err}");
                return ParseReport::extraction_failed(err);
            }
        };

        // The lenient tier reads the same unfolded tree, so a syntax error ends both tiers here.
        let tree = match parse_tree(candidate) {
            Ok(tree) => tree,
            Err(err) => {
                warn!("Error decoding JSON: {err}");
                return ParseReport::decoded(None, ParseStage::Failed, Some(err));
            }
        };

        let fold = self.settings.fold_snake_case_keys;
        let err = match strict::decode_value(tree.clone(), fold) {
            Ok(recipe) => return ParseReport::decoded(Some(recipe), ParseStage::Strict, None),
            Err(err) => err,
        };
        warn!("Error decoding JSON: {err}");

        if !self.settings.lenient_fallback {
            return ParseReport::decoded(None, ParseStage::Failed, Some(err));
        }

        let recipe = lenient::recover_value(&tree);
        match &recipe {
            Some(recipe) => info!("Partially recovered recipe: {}", recipe.recipe_name),
            None => warn!("Failed to parse recipe"),
        }
        ParseReport::decoded(recipe, ParseStage::Lenient, Some(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_stage() {
        let report = RecipeParser::default().parse_with_report(
            r#"Sure! {"recipeName": "Tea", "ingredients": [], "instructions": []} Enjoy"#,
        );
        assert_eq!(report.stage, ParseStage::Strict);
        assert_eq!(report.strict_error, None);
        assert_eq!(report.recipe, Some(Recipe::named("Tea")));
    }

    #[test]
    fn test_lenient_stage_keeps_strict_error() {
        let report = RecipeParser::default().parse_with_report(r#"{"recipeName": "Tea"}"#);
        assert_eq!(report.stage, ParseStage::Lenient);
        assert_eq!(
            report.strict_error,
            Some(DecodeError::KeyNotFound("ingredients".to_string()))
        );
        assert_eq!(report.recipe, Some(Recipe::named("Tea")));
    }

    #[test]
    fn test_extraction_failure() {
        let report = RecipeParser::default().parse_with_report("no json here");
        assert_eq!(report.stage, ParseStage::Failed);
        assert_eq!(report.extraction_error, Some(ExtractionError::NoJsonFound));
        assert!(matches!(
            report.into_result(),
            Err(ParseError::Extraction(ExtractionError::NoJsonFound))
        ));
    }

    #[test]
    fn test_corrupted_json_reports_no_result() {
        let report = RecipeParser::default().parse_with_report(r#"{"recipeName": "Tea",,}"#);
        assert_eq!(report.stage, ParseStage::Failed);
        assert!(matches!(
            report.strict_error,
            Some(DecodeError::DataCorrupted(_))
        ));
        assert!(matches!(
            report.into_result(),
            Err(ParseError::NoResult {
                strict: Some(DecodeError::DataCorrupted(_))
            })
        ));
    }

    #[test]
    fn test_lenient_failure_reports_none() {
        let report = RecipeParser::default().parse_with_report(r#"{"ingredients": []}"#);
        assert_eq!(report.stage, ParseStage::Failed);
        assert!(!report.is_success());
        assert_eq!(
            report.strict_error,
            Some(DecodeError::KeyNotFound("recipeName".to_string()))
        );
    }

    #[test]
    fn test_fallback_disabled() {
        let parser = RecipeParser::new(ParserSettings {
            lenient_fallback: false,
            fold_snake_case_keys: true,
        });
        assert_eq!(parser.parse(r#"{"recipeName": "Tea"}"#), None);
    }

    #[test]
    fn test_folding_disabled() {
        let parser = RecipeParser::new(ParserSettings {
            lenient_fallback: true,
            fold_snake_case_keys: false,
        });
        let snake = r#"{"recipe_name": "Tea", "ingredients": [], "instructions": []}"#;
        assert_eq!(parser.parse(snake), None);
        assert_eq!(
            RecipeParser::default().parse_with_report(snake).stage,
            ParseStage::Strict
        );
    }

    #[test]
    fn test_lenient_tier_ignores_snake_case_name() {
        let report = RecipeParser::default()
            .parse_with_report(r#"{"recipe_name": "Oats", "ingredients": [{"item": "oats"}]}"#);
        assert_eq!(report.stage, ParseStage::Failed);
        assert_eq!(
            report.strict_error,
            Some(DecodeError::KeyNotFound("instructions".to_string()))
        );
        assert_eq!(report.recipe, None);
    }
}
