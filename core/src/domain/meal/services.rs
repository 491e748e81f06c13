use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    meal::{
        entities::Meal,
        ports::{MealRepository, MealService},
        sample_data::sample_meals,
        value_objects::{CreateMealInput, MealAdded, SampleDataLoaded},
    },
    recipe::ports::LLMClient,
    session::SessionId,
};

impl<M, LLM> MealService for Service<M, LLM>
where
    M: MealRepository,
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(session_id = %session_id))]
    async fn add_meal(
        &self,
        session_id: SessionId,
        input: CreateMealInput,
    ) -> Result<MealAdded, CoreError> {
        let meal = Meal::new(input)?;

        let meal_count = self
            .meal_repository
            .add(session_id, meal.clone())
            .await?;

        tracing::info!("Added meal: {} ({})", meal.name, meal.cuisine);

        Ok(MealAdded { meal, meal_count })
    }

    async fn get_meals(&self, session_id: SessionId) -> Result<Vec<Meal>, CoreError> {
        self.meal_repository.list(session_id).await
    }

    #[instrument(skip_all, fields(session_id = %session_id))]
    async fn remove_meal(&self, session_id: SessionId, index: usize) -> Result<Meal, CoreError> {
        let removed = self.meal_repository.remove(session_id, index).await?;

        tracing::info!("Removed meal: {}", removed.name);

        Ok(removed)
    }

    #[instrument(skip_all, fields(session_id = %session_id))]
    async fn clear_meals(&self, session_id: SessionId) -> Result<usize, CoreError> {
        let removed = self.meal_repository.clear(session_id).await?;

        tracing::info!("Cleared {} meals", removed);

        Ok(removed)
    }

    #[instrument(skip_all, fields(session_id = %session_id))]
    async fn load_sample_meals(&self, session_id: SessionId) -> Result<SampleDataLoaded, CoreError> {
        let meals = sample_meals()
            .into_iter()
            .map(Meal::new)
            .collect::<Result<Vec<_>, _>>()?;
        let loaded = meals.len();

        let total_meals = self.meal_repository.add_many(session_id, meals).await?;

        tracing::info!("Loaded {} sample meals", loaded);

        Ok(SampleDataLoaded {
            loaded,
            total_meals,
        })
    }
}
