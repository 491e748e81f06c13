use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    meal::value_objects::{CreateMealInput, MAX_CUISINE_LENGTH, MAX_MEAL_NAME_LENGTH},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub name: String,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    pub flavors: Vec<String>,
    pub meal_type: MealType,
    pub restaurant_name: Option<String>,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Home,
    Outside,
}

impl MealType {
    pub fn as_str(&self) -> &str {
        match self {
            MealType::Home => "home",
            MealType::Outside => "outside",
        }
    }
}

impl FromStr for MealType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(MealType::Home),
            "outside" => Ok(MealType::Outside),
            other => Err(CoreError::Validation(format!(
                "meal_type must be 'home' or 'outside', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Meal {
    /// Validates the input and stamps the creation time.
    pub fn new(input: CreateMealInput) -> Result<Self, CoreError> {
        check_text("name", &input.name, MAX_MEAL_NAME_LENGTH)?;
        check_text("cuisine", &input.cuisine, MAX_CUISINE_LENGTH)?;
        let meal_type = input.meal_type.parse::<MealType>()?;

        Ok(Self {
            name: input.name,
            cuisine: input.cuisine,
            ingredients: input.ingredients,
            flavors: input.flavors,
            meal_type,
            restaurant_name: input.restaurant_name,
            notes: input.notes,
            timestamp: generate_timestamp(),
        })
    }

    pub fn is_home(&self) -> bool {
        self.meal_type == MealType::Home
    }
}

fn check_text(field: &str, value: &str, max_length: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{} is required", field)));
    }

    if value.chars().count() > max_length {
        return Err(CoreError::Validation(format!(
            "{} must be at most {} characters",
            field, max_length
        )));
    }

    Ok(())
}
