use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal::{
        entities::Meal,
        value_objects::{CreateMealInput, MealAdded, SampleDataLoaded},
    },
    session::SessionId,
};

/// Ordered meal history per session. Meals are never updated in place.
#[cfg_attr(test, mockall::automock)]
pub trait MealRepository: Send + Sync {
    /// Appends a meal and returns the history length including it.
    fn add(
        &self,
        session_id: SessionId,
        meal: Meal,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;

    /// Appends several meals in order and returns the new total.
    fn add_many(
        &self,
        session_id: SessionId,
        meals: Vec<Meal>,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;

    /// Snapshot of the history in insertion order.
    fn list(&self, session_id: SessionId)
    -> impl Future<Output = Result<Vec<Meal>, CoreError>> + Send;

    fn count(&self, session_id: SessionId) -> impl Future<Output = Result<usize, CoreError>> + Send;

    /// Removes the meal at a zero-based position.
    fn remove(
        &self,
        session_id: SessionId,
        index: usize,
    ) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    /// Removes every meal and returns how many were dropped.
    fn clear(&self, session_id: SessionId) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealService: Send + Sync {
    fn add_meal(
        &self,
        session_id: SessionId,
        input: CreateMealInput,
    ) -> impl Future<Output = Result<MealAdded, CoreError>> + Send;

    fn get_meals(
        &self,
        session_id: SessionId,
    ) -> impl Future<Output = Result<Vec<Meal>, CoreError>> + Send;

    fn remove_meal(
        &self,
        session_id: SessionId,
        index: usize,
    ) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn clear_meals(
        &self,
        session_id: SessionId,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;

    fn load_sample_meals(
        &self,
        session_id: SessionId,
    ) -> impl Future<Output = Result<SampleDataLoaded, CoreError>> + Send;
}
