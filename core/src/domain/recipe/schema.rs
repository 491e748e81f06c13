use serde_json::json;

pub const FUSION_RECIPE_SCHEMA_NAME: &str = "fusion_recipe";

/// Returns the JSON schema for fusion recipe LLM responses
pub fn get_fusion_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "description": { "type": "string" },
            "fusion_of": {
                "type": "array",
                "items": { "type": "string" }
            },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" }
            },
            "prep_time": { "type": "integer", "minimum": 0 },
            "cook_time": { "type": "integer", "minimum": 0 },
            "difficulty": { "type": "string" },
            "flavor_profile": {
                "type": "array",
                "items": { "type": "string" }
            },
            "why_youll_love_it": { "type": "string" }
        },
        "required": [
            "name", "description", "fusion_of", "ingredients", "instructions",
            "prep_time", "cook_time", "difficulty", "flavor_profile", "why_youll_love_it"
        ],
        "additionalProperties": false
    })
}
