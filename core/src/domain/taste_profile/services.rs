use std::collections::HashMap;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    meal::{entities::Meal, ports::MealRepository},
    recipe::ports::LLMClient,
    session::SessionId,
    taste_profile::{
        entities::{
            MAX_COMMON_INGREDIENTS, MAX_FAVORITE_CUISINES, MAX_PREFERRED_FLAVORS, TasteProfile,
        },
        ports::TasteProfileService,
    },
};

/// Counts occurrences while remembering the order keys were first seen.
#[derive(Default)]
struct FrequencyCounter<'a> {
    positions: HashMap<&'a str, usize>,
    entries: Vec<(&'a str, usize)>,
}

impl<'a> FrequencyCounter<'a> {
    fn record(&mut self, key: &'a str) {
        match self.positions.get(key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Most frequent keys first; equal counts keep first-seen order.
    fn top(mut self, limit: usize) -> Vec<String> {
        // sort_by is stable, entries are already in first-seen order
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
            .into_iter()
            .take(limit)
            .map(|(key, _)| key.to_string())
            .collect()
    }
}

/// Reduces a meal history into a [`TasteProfile`].
pub fn compute_taste_profile(meals: &[Meal]) -> TasteProfile {
    if meals.is_empty() {
        return TasteProfile::default();
    }

    let mut cuisines = FrequencyCounter::default();
    let mut flavors = FrequencyCounter::default();
    let mut ingredients = FrequencyCounter::default();
    let mut home_count = 0usize;

    for meal in meals {
        cuisines.record(&meal.cuisine);
        meal.flavors.iter().for_each(|f| flavors.record(f));
        meal.ingredients.iter().for_each(|i| ingredients.record(i));

        if meal.is_home() {
            home_count += 1;
        }
    }

    TasteProfile {
        favorite_cuisines: cuisines.top(MAX_FAVORITE_CUISINES),
        preferred_flavors: flavors.top(MAX_PREFERRED_FLAVORS),
        common_ingredients: ingredients.top(MAX_COMMON_INGREDIENTS),
        home_vs_outside_ratio: home_count as f64 / meals.len() as f64,
        meal_count: meals.len(),
    }
}

impl<M, LLM> TasteProfileService for Service<M, LLM>
where
    M: MealRepository,
    LLM: LLMClient,
{
    async fn get_taste_profile(&self, session_id: SessionId) -> Result<TasteProfile, CoreError> {
        let meals = self.meal_repository.list(session_id).await?;

        Ok(compute_taste_profile(&meals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::meal::sample_data::sample_meals,
        test_support::{meal, meal_input},
    };

    #[test]
    fn empty_history_yields_default_profile() {
        let profile = compute_taste_profile(&[]);

        assert_eq!(profile.meal_count, 0);
        assert_eq!(profile.home_vs_outside_ratio, 0.5);
        assert!(profile.favorite_cuisines.is_empty());
        assert!(profile.preferred_flavors.is_empty());
        assert!(profile.common_ingredients.is_empty());
    }

    #[test]
    fn ratio_is_one_for_home_only_and_zero_for_outside_only() {
        let home = vec![meal("Curry", "Indian", "home"), meal("Soup", "French", "home")];
        assert_eq!(compute_taste_profile(&home).home_vs_outside_ratio, 1.0);

        let outside = vec![meal("Burger", "American", "outside")];
        assert_eq!(compute_taste_profile(&outside).home_vs_outside_ratio, 0.0);
    }

    #[test]
    fn most_frequent_cuisine_ranks_first() {
        let meals = vec![
            meal("Biryani", "Indian", "home"),
            meal("Korma", "Indian", "outside"),
            meal("Risotto", "Italian", "home"),
        ];

        let profile = compute_taste_profile(&meals);
        assert_eq!(profile.favorite_cuisines, vec!["Indian", "Italian"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let meals = vec![
            meal("Gyoza", "Japanese", "home"),
            meal("Pierogi", "Polish", "home"),
            meal("Empanada", "Argentinian", "home"),
            meal("Bigos", "Polish", "home"),
            meal("Asado", "Argentinian", "home"),
        ];

        let profile = compute_taste_profile(&meals);
        assert_eq!(
            profile.favorite_cuisines,
            vec!["Polish", "Argentinian", "Japanese"]
        );
    }

    #[test]
    fn every_flavor_and_ingredient_occurrence_is_counted() {
        let mut first = meal("Chili", "Mexican", "home");
        first.flavors = vec!["spicy".into(), "smoky".into()];
        first.ingredients = vec!["beans".into(), "chili".into()];
        let mut second = meal("Salsa", "Mexican", "home");
        second.flavors = vec!["fresh".into(), "spicy".into()];
        second.ingredients = vec!["chili".into(), "tomato".into()];

        let profile = compute_taste_profile(&[first, second]);
        assert_eq!(profile.preferred_flavors, vec!["spicy", "smoky", "fresh"]);
        assert_eq!(profile.common_ingredients, vec!["chili", "beans", "tomato"]);
    }

    #[test]
    fn lists_are_truncated_to_their_limits() {
        let meals: Vec<Meal> = (0..12)
            .map(|i| {
                let mut m = meal(&format!("Dish {i}"), &format!("Cuisine {i}"), "home");
                m.flavors = vec![format!("flavor {i}")];
                m.ingredients = vec![format!("ingredient {i}")];
                m
            })
            .collect();

        let profile = compute_taste_profile(&meals);
        assert_eq!(profile.favorite_cuisines.len(), MAX_FAVORITE_CUISINES);
        assert_eq!(profile.preferred_flavors.len(), MAX_PREFERRED_FLAVORS);
        assert_eq!(profile.common_ingredients.len(), MAX_COMMON_INGREDIENTS);
        assert_eq!(profile.favorite_cuisines[0], "Cuisine 0");
        assert_eq!(profile.meal_count, 12);
    }

    #[test]
    fn sample_history_profile() {
        let meals: Vec<Meal> = sample_meals()
            .into_iter()
            .map(|input| Meal::new(input).unwrap())
            .collect();

        let profile = compute_taste_profile(&meals);
        assert_eq!(profile.meal_count, 8);
        assert_eq!(profile.home_vs_outside_ratio, 0.375);
        assert_eq!(profile.favorite_cuisines[0], "Indian");
        assert_eq!(profile.favorite_cuisines.len(), 5);
        assert_eq!(profile.preferred_flavors[..2], ["creamy", "spicy"]);
        assert_eq!(profile.common_ingredients[0], "tomatoes");
    }

    #[test]
    fn counting_is_case_sensitive() {
        let meals = vec![
            meal_input_meal("Thai"),
            meal_input_meal("thai"),
            meal_input_meal("thai"),
        ];
        assert_eq!(
            compute_taste_profile(&meals).favorite_cuisines,
            vec!["thai", "Thai"]
        );
    }

    fn meal_input_meal(cuisine: &str) -> Meal {
        Meal::new(meal_input("Noodles", cuisine, "outside")).unwrap()
    }
}
