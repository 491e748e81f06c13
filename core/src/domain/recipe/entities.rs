use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, taste_profile::entities::TasteProfile,
};

/// Structured recipe returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FusionRecipe {
    pub name: String,
    pub description: String,
    pub fusion_of: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub difficulty: String,
    pub flavor_profile: Vec<String>,
    pub why_youll_love_it: String,
}

impl FusionRecipe {
    /// Parses raw model output, tolerating a surrounding Markdown code fence.
    pub fn from_llm_output(raw: &str) -> Result<Self, CoreError> {
        let payload = strip_code_fence(raw);

        let recipe: FusionRecipe = serde_json::from_str(payload)
            .map_err(|e| CoreError::InvalidLlmOutput(e.to_string()))?;
        recipe.validate()?;

        Ok(recipe)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let blank = |value: &str| value.trim().is_empty();

        if blank(&self.name) {
            return Err(CoreError::InvalidLlmOutput("name is empty".to_string()));
        }
        if blank(&self.description) {
            return Err(CoreError::InvalidLlmOutput(
                "description is empty".to_string(),
            ));
        }
        if self.ingredients.is_empty() {
            return Err(CoreError::InvalidLlmOutput(
                "ingredients list is empty".to_string(),
            ));
        }
        if self.instructions.is_empty() {
            return Err(CoreError::InvalidLlmOutput(
                "instructions list is empty".to_string(),
            ));
        }
        if blank(&self.why_youll_love_it) {
            return Err(CoreError::InvalidLlmOutput(
                "why_youll_love_it is empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // drop the optional language tag on the opening fence line
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedRecipe {
    pub recipe: FusionRecipe,
    pub taste_profile_used: TasteProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyMenuDay {
    pub day: String,
    pub recipe: FusionRecipe,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::recipe_json;

    #[test]
    fn parses_plain_json() {
        let recipe = FusionRecipe::from_llm_output(&recipe_json("Masala Carbonara")).unwrap();
        assert_eq!(recipe.name, "Masala Carbonara");
        assert_eq!(recipe.fusion_of, vec!["Indian", "Italian"]);
        assert_eq!(recipe.prep_time, 15);
    }

    #[test]
    fn parses_fenced_json() {
        let raw = format!("```json\n{}\n```", recipe_json("Kimchi Quesadilla"));
        let recipe = FusionRecipe::from_llm_output(&raw).unwrap();
        assert_eq!(recipe.name, "Kimchi Quesadilla");

        let bare = format!("```\n{}\n```", recipe_json("Miso Risotto"));
        assert_eq!(
            FusionRecipe::from_llm_output(&bare).unwrap().name,
            "Miso Risotto"
        );
    }

    #[test]
    fn missing_field_is_schema_violation() {
        let raw = r#"{"name": "Half a recipe", "description": "oops"}"#;
        assert!(matches!(
            FusionRecipe::from_llm_output(raw),
            Err(CoreError::InvalidLlmOutput(_))
        ));
    }

    #[test]
    fn wrong_type_is_schema_violation() {
        let mut value: serde_json::Value = serde_json::from_str(&recipe_json("Taco Ramen")).unwrap();
        value["prep_time"] = serde_json::json!("ten minutes");
        assert!(matches!(
            FusionRecipe::from_llm_output(&value.to_string()),
            Err(CoreError::InvalidLlmOutput(_))
        ));
    }

    #[test]
    fn empty_instructions_are_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(&recipe_json("Air")).unwrap();
        value["instructions"] = serde_json::json!([]);
        assert_eq!(
            FusionRecipe::from_llm_output(&value.to_string()),
            Err(CoreError::InvalidLlmOutput(
                "instructions list is empty".to_string()
            ))
        );
    }

    #[test]
    fn prose_is_rejected() {
        assert!(FusionRecipe::from_llm_output("Sure! Here is a recipe...").is_err());
    }
}
