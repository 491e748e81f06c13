use crate::application::http::{
    health::router::HealthApiDoc, meal::router::MealApiDoc, profile::router::ProfileApiDoc,
    recipe::router::RecipeApiDoc, sample_data::router::SampleDataApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "TasteFusion API",
    description = "Learns your taste preferences from your meal history and creates personalized fusion recipes"
))]
pub struct ApiDoc;

impl ApiDoc {
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(HealthApiDoc::openapi());
        openapi.merge(MealApiDoc::openapi());
        openapi.merge(ProfileApiDoc::openapi());
        openapi.merge(RecipeApiDoc::openapi());
        openapi.merge(SampleDataApiDoc::openapi());
        openapi
    }
}
