use crate::domain::meal::value_objects::CreateMealInput;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn sample(
    name: &str,
    cuisine: &str,
    ingredients: &[&str],
    flavors: &[&str],
    meal_type: &str,
    restaurant_name: Option<&str>,
    notes: Option<&str>,
) -> CreateMealInput {
    CreateMealInput {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        ingredients: strings(ingredients),
        flavors: strings(flavors),
        meal_type: meal_type.to_string(),
        restaurant_name: restaurant_name.map(str::to_string),
        notes: notes.map(str::to_string),
    }
}

/// Demo history: 3 home meals, 5 outside, Indian three times.
pub fn sample_meals() -> Vec<CreateMealInput> {
    vec![
        sample(
            "Butter Chicken",
            "Indian",
            &["chicken", "butter", "tomatoes", "cream", "garam masala"],
            &["creamy", "spicy", "rich"],
            "home",
            None,
            Some("Mom's recipe"),
        ),
        sample(
            "Margherita Pizza",
            "Italian",
            &["dough", "tomatoes", "mozzarella", "basil"],
            &["savory", "cheesy", "herby"],
            "outside",
            Some("Domino's"),
            None,
        ),
        sample(
            "Pad Thai",
            "Thai",
            &["rice noodles", "shrimp", "peanuts", "tamarind", "bean sprouts"],
            &["sweet", "sour", "savory", "nutty"],
            "outside",
            Some("Thai Express"),
            None,
        ),
        sample(
            "Dal Makhani",
            "Indian",
            &["black lentils", "butter", "cream", "tomatoes", "spices"],
            &["creamy", "smoky", "rich"],
            "home",
            None,
            None,
        ),
        sample(
            "Sushi Roll",
            "Japanese",
            &["rice", "nori", "salmon", "avocado", "cucumber"],
            &["fresh", "umami", "light"],
            "outside",
            Some("Sushi House"),
            None,
        ),
        sample(
            "Tacos Al Pastor",
            "Mexican",
            &["pork", "pineapple", "onions", "cilantro", "tortillas"],
            &["spicy", "sweet", "tangy"],
            "outside",
            Some("Taco Bell"),
            None,
        ),
        sample(
            "Palak Paneer",
            "Indian",
            &["spinach", "paneer", "onions", "garlic", "cream"],
            &["creamy", "mild", "healthy"],
            "home",
            None,
            None,
        ),
        sample(
            "Kung Pao Chicken",
            "Chinese",
            &["chicken", "peanuts", "dried chilies", "soy sauce", "vegetables"],
            &["spicy", "sweet", "crunchy"],
            "outside",
            Some("Wok Express"),
            None,
        ),
    ]
}
