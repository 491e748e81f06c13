use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MAX_FAVORITE_CUISINES: usize = 5;
pub const MAX_PREFERRED_FLAVORS: usize = 5;
pub const MAX_COMMON_INGREDIENTS: usize = 10;

/// Aggregate statistics over a meal history. Recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TasteProfile {
    pub favorite_cuisines: Vec<String>,
    pub preferred_flavors: Vec<String>,
    pub common_ingredients: Vec<String>,
    /// Share of home-cooked meals, 0.5 when nothing is logged.
    pub home_vs_outside_ratio: f64,
    pub meal_count: usize,
}

impl Default for TasteProfile {
    fn default() -> Self {
        Self {
            favorite_cuisines: Vec::new(),
            preferred_flavors: Vec::new(),
            common_ingredients: Vec::new(),
            home_vs_outside_ratio: 0.5,
            meal_count: 0,
        }
    }
}
