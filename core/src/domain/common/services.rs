use std::sync::Arc;

use crate::domain::{meal::ports::MealRepository, recipe::ports::LLMClient};

/// Aggregate that every domain service trait is implemented on.
pub struct Service<M, LLM>
where
    M: MealRepository,
    LLM: LLMClient,
{
    pub(crate) meal_repository: Arc<M>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) max_attempts: u32,
}

impl<M, LLM> Service<M, LLM>
where
    M: MealRepository,
    LLM: LLMClient,
{
    pub fn new(meal_repository: M, llm_client: LLM, max_attempts: u32) -> Self {
        Self {
            meal_repository: Arc::new(meal_repository),
            llm_client: Arc::new(llm_client),
            max_attempts: max_attempts.max(1),
        }
    }
}

impl<M, LLM> Clone for Service<M, LLM>
where
    M: MealRepository,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            meal_repository: Arc::clone(&self.meal_repository),
            llm_client: Arc::clone(&self.llm_client),
            max_attempts: self.max_attempts,
        }
    }
}
