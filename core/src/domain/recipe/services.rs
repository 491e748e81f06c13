use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    meal::ports::MealRepository,
    recipe::{
        entities::{FusionRecipe, GeneratedRecipe, WeeklyMenuDay},
        ports::{LLMClient, RecipeService},
        prompts::{SYSTEM_PROMPT, build_context, build_request_prompt, build_weekly_prompt},
        schema::get_fusion_recipe_schema,
        value_objects::{FusionRequest, WEEK_DAYS},
    },
    session::SessionId,
    taste_profile::{entities::TasteProfile, services::compute_taste_profile},
};

impl<M, LLM> Service<M, LLM>
where
    M: MealRepository,
    LLM: LLMClient,
{
    /// Snapshot of the history plus the system message derived from it.
    /// The repository lock is released before any model call.
    async fn prepare_context(
        &self,
        session_id: SessionId,
    ) -> Result<(TasteProfile, String), CoreError> {
        let meals = self.meal_repository.list(session_id).await?;
        let profile = compute_taste_profile(&meals);
        let context = build_context(&meals, &profile);

        Ok((profile, format!("{}\n\n{}", SYSTEM_PROMPT, context)))
    }

    /// Calls the model until it returns a valid recipe or attempts run out.
    /// Provider errors are returned straight away.
    async fn request_recipe(
        &self,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<FusionRecipe, CoreError> {
        let mut last_violation = String::new();

        for attempt in 1..=self.max_attempts {
            let raw = self
                .llm_client
                .generate_with_text(
                    system_prompt.to_string(),
                    prompt.to_string(),
                    get_fusion_recipe_schema(),
                )
                .await
                .map_err(|e| {
                    tracing::error!("LLM call failed: {}", e);
                    CoreError::Generation(e.to_string())
                })?;

            match FusionRecipe::from_llm_output(&raw) {
                Ok(recipe) => return Ok(recipe),
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        "Discarding LLM output: {}",
                        e
                    );
                    last_violation = e.to_string();
                }
            }
        }

        Err(CoreError::Generation(format!(
            "no valid recipe after {} attempts: {}",
            self.max_attempts, last_violation
        )))
    }
}

impl<M, LLM> RecipeService for Service<M, LLM>
where
    M: MealRepository,
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(session_id = %session_id))]
    async fn generate_recipe(
        &self,
        session_id: SessionId,
        request: FusionRequest,
    ) -> Result<GeneratedRecipe, CoreError> {
        tracing::info!("Generating fusion recipe with params: {:?}", request);

        let (taste_profile, system_prompt) = self.prepare_context(session_id).await?;
        let prompt = build_request_prompt(&request);

        let recipe = self.request_recipe(&system_prompt, &prompt).await?;

        tracing::info!("Generated recipe: {}", recipe.name);

        Ok(GeneratedRecipe {
            recipe,
            taste_profile_used: taste_profile,
        })
    }

    #[instrument(skip_all, fields(session_id = %session_id))]
    async fn generate_weekly_menu(
        &self,
        session_id: SessionId,
    ) -> Result<Vec<WeeklyMenuDay>, CoreError> {
        // one profile for the whole week
        let (_, system_prompt) = self.prepare_context(session_id).await?;

        let mut menu = Vec::with_capacity(WEEK_DAYS.len());
        for day in WEEK_DAYS {
            let recipe = self
                .request_recipe(&system_prompt, &build_weekly_prompt(day))
                .await?;

            tracing::info!("Generated {} recipe: {}", day, recipe.name);

            menu.push(WeeklyMenuDay {
                day: day.to_string(),
                recipe,
            });
        }

        Ok(menu)
    }
}
