use crate::{
    domain::common::{TasteFusionConfig, services::Service},
    infrastructure::{llm::OpenRouterLLMClient, meal::InMemoryMealRepository},
};

pub type TasteFusionService = Service<InMemoryMealRepository, OpenRouterLLMClient>;

pub async fn create_service(config: TasteFusionConfig) -> Result<TasteFusionService, anyhow::Error> {
    let meal_repository = InMemoryMealRepository::new();
    let llm_client = OpenRouterLLMClient::new(&config.llm)?;

    tracing::info!(
        model = %config.llm.model,
        max_attempts = config.llm.max_attempts,
        "TasteFusion service initialised"
    );

    Ok(Service::new(
        meal_repository,
        llm_client,
        config.llm.max_attempts,
    ))
}
