//! Natural-language instructions sent to the model.

use crate::domain::{
    meal::entities::{Meal, MealType},
    recipe::value_objects::FusionRequest,
    taste_profile::entities::TasteProfile,
};

const RECENT_MEALS_LIMIT: usize = 5;
const NOT_ENOUGH_DATA: &str = "Not enough data";
const NONE_LOGGED: &str = "None logged";

pub const SYSTEM_PROMPT: &str = "You are TasteFusion Chef, an expert culinary AI that creates personalized fusion recipes.

Your role:
1. Analyze the user's taste profile from their meal history
2. Understand their preferences (home cooking vs restaurant, flavor profiles, favorite cuisines)
3. Create innovative fusion recipes that combine elements from their favorite cuisines
4. Ensure recipes are practical and match their skill level

Guidelines:
- Be creative but practical: recipes should be actually cookable
- Respect dietary restrictions strictly
- Explain WHY the user will love this recipe based on their preferences
- Provide clear, step-by-step instructions
- Include prep and cooking times in minutes
- Balance familiar flavors with exciting new combinations

Always return a complete, detailed recipe with all required fields as a single JSON object.";

pub const NEW_USER_CONTEXT: &str = "Note: This user is new and hasn't logged any meals yet.
Create a universally appealing fusion recipe that showcases interesting flavor combinations.
Suggest they log some meals to get more personalized recommendations.";

const BASE_REQUEST: &str = "Create a unique fusion recipe for me.";

/// Summarizes the meal history and profile for the model.
pub fn build_context(meals: &[Meal], profile: &TasteProfile) -> String {
    if meals.is_empty() {
        return NEW_USER_CONTEXT.to_string();
    }

    let home_meals = recent_meals(meals, MealType::Home)
        .map(|m| format!("- {} ({}): {}", m.name, m.cuisine, m.flavors.join(", ")))
        .collect::<Vec<_>>();
    let outside_meals = recent_meals(meals, MealType::Outside)
        .map(|m| {
            format!(
                "- {} ({}) at {}: {}",
                m.name,
                m.cuisine,
                m.restaurant_name.as_deref().unwrap_or("unknown"),
                m.flavors.join(", ")
            )
        })
        .collect::<Vec<_>>();

    let lines = [
        "User's Taste Profile Analysis:".to_string(),
        format!("- Total meals logged: {}", profile.meal_count),
        format!(
            "- Favorite cuisines: {}",
            join_or_placeholder(&profile.favorite_cuisines)
        ),
        format!(
            "- Preferred flavors: {}",
            join_or_placeholder(&profile.preferred_flavors)
        ),
        format!(
            "- Common ingredients: {}",
            join_or_placeholder(&profile.common_ingredients)
        ),
        format!(
            "- Home cooking ratio: {}%",
            home_percentage(profile.home_vs_outside_ratio)
        ),
        String::new(),
        "Recent Home Meals:".to_string(),
        lines_or_placeholder(home_meals),
        String::new(),
        "Recent Restaurant/Outside Meals:".to_string(),
        lines_or_placeholder(outside_meals),
        String::new(),
        "Create a fusion recipe that combines elements from their favorite cuisines and matches their flavor preferences.".to_string(),
    ];

    lines.join("\n")
}

/// Turns the caller's options into the user message.
pub fn build_request_prompt(request: &FusionRequest) -> String {
    let mut parts = vec![BASE_REQUEST.to_string()];

    if let Some(style) = request
        .fusion_style
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        parts.push(format!("Fusion style: {}", style));
    }

    if !request.dietary_restrictions.is_empty() {
        parts.push(format!(
            "Dietary restrictions: {}",
            request.dietary_restrictions.join(", ")
        ));
    }

    parts.push(format!("Difficulty level: {}", request.difficulty));

    if let Some(minutes) = request.cooking_time.filter(|m| *m > 0) {
        parts.push(format!("Maximum cooking time: {} minutes", minutes));
    }

    parts.join(" ")
}

pub fn build_weekly_prompt(day: &str) -> String {
    format!(
        "Create a unique fusion recipe for {}. Make it different from typical weekday meals if it's a weekend.",
        day
    )
}

/// Last meals of one kind, oldest first.
fn recent_meals(meals: &[Meal], meal_type: MealType) -> impl Iterator<Item = &Meal> {
    let matching = meals
        .iter()
        .filter(|m| m.meal_type == meal_type)
        .collect::<Vec<_>>();
    let skip = matching.len().saturating_sub(RECENT_MEALS_LIMIT);

    matching.into_iter().skip(skip)
}

/// Whole percent, ties to even: 0.125 renders as 12, 0.375 as 38.
fn home_percentage(ratio: f64) -> f64 {
    (ratio * 100.0).round_ties_even()
}

fn join_or_placeholder(values: &[String]) -> String {
    if values.is_empty() {
        NOT_ENOUGH_DATA.to_string()
    } else {
        values.join(", ")
    }
}

fn lines_or_placeholder(lines: Vec<String>) -> String {
    if lines.is_empty() {
        NONE_LOGGED.to_string()
    } else {
        lines.join("\n")
    }
}
