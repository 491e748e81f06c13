pub mod common;
pub mod health;
pub mod meal;
pub mod recipe;
pub mod session;
pub mod taste_profile;
