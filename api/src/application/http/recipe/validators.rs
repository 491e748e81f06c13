use serde::{Deserialize, Serialize};
use tastefusion_core::domain::recipe::value_objects::{Difficulty, FusionRequest};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    /// e.g. "Italian-Indian"
    #[validate(length(max = 100, message = "fusion_style must be at most 100 characters"))]
    #[serde(default)]
    pub fusion_style: Option<String>,

    #[serde(default)]
    pub dietary_restrictions: Vec<String>,

    #[serde(default)]
    pub difficulty: Difficulty,

    /// Maximum total time in minutes.
    #[serde(default)]
    pub cooking_time: Option<u32>,
}

impl From<GenerateRecipeValidator> for FusionRequest {
    fn from(payload: GenerateRecipeValidator) -> Self {
        FusionRequest {
            fusion_style: payload.fusion_style,
            dietary_restrictions: payload.dietary_restrictions,
            difficulty: payload.difficulty,
            cooking_time: payload.cooking_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_takes_defaults() {
        let payload: GenerateRecipeValidator = serde_json::from_str("{}").unwrap();
        let request = FusionRequest::from(payload);

        assert_eq!(request, FusionRequest::default());
        assert_eq!(request.difficulty, Difficulty::Medium);
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let result = serde_json::from_str::<GenerateRecipeValidator>(r#"{"difficulty": "extreme"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn long_fusion_style_fails_validation() {
        let payload = GenerateRecipeValidator {
            fusion_style: Some("x".repeat(101)),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }
}
