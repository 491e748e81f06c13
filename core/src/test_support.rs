use std::{collections::VecDeque, sync::Mutex};

use serde_json::json;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal::{entities::Meal, value_objects::CreateMealInput},
    recipe::ports::LLMClient,
};

pub fn meal_input(name: &str, cuisine: &str, meal_type: &str) -> CreateMealInput {
    CreateMealInput {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        ingredients: vec!["rice".to_string()],
        flavors: vec!["savory".to_string()],
        meal_type: meal_type.to_string(),
        restaurant_name: None,
        notes: None,
    }
}

pub fn meal(name: &str, cuisine: &str, meal_type: &str) -> Meal {
    Meal::new(meal_input(name, cuisine, meal_type)).expect("valid test meal")
}

pub fn recipe_json(name: &str) -> String {
    json!({
        "name": name,
        "description": "A bold mash-up",
        "fusion_of": ["Indian", "Italian"],
        "ingredients": ["spaghetti", "garam masala", "eggs"],
        "instructions": ["Boil pasta", "Toast spices", "Combine"],
        "prep_time": 15,
        "cook_time": 20,
        "difficulty": "medium",
        "flavor_profile": ["spicy", "creamy"],
        "why_youll_love_it": "You cook Indian at home and love creamy dishes"
    })
    .to_string()
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system_prompt: String,
    pub prompt: String,
    pub response_schema: serde_json::Value,
}

/// Replays canned answers in order and records every call.
#[derive(Debug, Default)]
pub struct ScriptedLLMClient {
    responses: Mutex<VecDeque<Result<String, CoreError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedLLMClient {
    pub fn with_responses(responses: Vec<Result<String, CoreError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl LLMClient for ScriptedLLMClient {
    async fn generate_with_text(
        &self,
        system_prompt: String,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_prompt,
            prompt,
            response_schema,
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(CoreError::ExternalServiceError(
                    "no scripted response left".to_string(),
                ))
            })
    }
}
