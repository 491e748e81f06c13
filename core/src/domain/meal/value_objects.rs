use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::meal::entities::Meal;

pub const MAX_MEAL_NAME_LENGTH: usize = 200;
pub const MAX_CUISINE_LENGTH: usize = 100;

#[derive(Debug, Clone)]
pub struct CreateMealInput {
    pub name: String,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    pub flavors: Vec<String>,
    pub meal_type: String,
    pub restaurant_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealAdded {
    pub meal: Meal,
    pub meal_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SampleDataLoaded {
    pub loaded: usize,
    pub total_meals: usize,
}
