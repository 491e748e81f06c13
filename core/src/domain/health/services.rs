use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::HealthStatus, ports::HealthCheckService},
    meal::ports::MealRepository,
    recipe::ports::LLMClient,
};

impl<M, LLM> HealthCheckService for Service<M, LLM>
where
    M: MealRepository,
    LLM: LLMClient,
{
    async fn health(&self) -> Result<HealthStatus, CoreError> {
        Ok(HealthStatus::healthy())
    }
}
