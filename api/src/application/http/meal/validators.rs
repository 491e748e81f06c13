use serde::{Deserialize, Serialize};
use tastefusion_core::domain::meal::value_objects::CreateMealInput;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMealValidator {
    #[validate(length(
        min = 1,
        max = 200,
        message = "name must be between 1 and 200 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "cuisine must be between 1 and 100 characters"
    ))]
    pub cuisine: String,

    #[serde(default)]
    pub ingredients: Vec<String>,

    /// spicy, sweet, savory, ...
    #[serde(default)]
    pub flavors: Vec<String>,

    /// `home` or `outside`
    #[schema(example = "home")]
    pub meal_type: String,

    #[serde(default)]
    pub restaurant_name: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CreateMealValidator> for CreateMealInput {
    fn from(payload: CreateMealValidator) -> Self {
        CreateMealInput {
            name: payload.name,
            cuisine: payload.cuisine,
            ingredients: payload.ingredients,
            flavors: payload.flavors,
            meal_type: payload.meal_type,
            restaurant_name: payload.restaurant_name,
            notes: payload.notes,
        }
    }
}
