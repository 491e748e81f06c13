pub mod generate_recipe;
pub mod generate_weekly_menu;
