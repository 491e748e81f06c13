pub mod repository;

pub use repository::InMemoryMealRepository;
