use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError, meal::entities::Meal, meal::ports::MealRepository,
    session::SessionId,
};

/// Process-local meal history. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryMealRepository {
    meals: RwLock<HashMap<SessionId, Vec<Meal>>>,
}

impl InMemoryMealRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MealRepository for InMemoryMealRepository {
    async fn add(&self, session_id: SessionId, meal: Meal) -> Result<usize, CoreError> {
        let mut meals = self.meals.write().await;
        let history = meals.entry(session_id).or_default();
        history.push(meal);

        Ok(history.len())
    }

    async fn add_many(&self, session_id: SessionId, new_meals: Vec<Meal>) -> Result<usize, CoreError> {
        let mut meals = self.meals.write().await;
        let history = meals.entry(session_id).or_default();
        history.extend(new_meals);

        Ok(history.len())
    }

    async fn list(&self, session_id: SessionId) -> Result<Vec<Meal>, CoreError> {
        let meals = self.meals.read().await;

        Ok(meals.get(&session_id).cloned().unwrap_or_default())
    }

    async fn count(&self, session_id: SessionId) -> Result<usize, CoreError> {
        let meals = self.meals.read().await;

        Ok(meals.get(&session_id).map_or(0, Vec::len))
    }

    async fn remove(&self, session_id: SessionId, index: usize) -> Result<Meal, CoreError> {
        let mut meals = self.meals.write().await;

        match meals.get_mut(&session_id) {
            Some(history) if index < history.len() => Ok(history.remove(index)),
            _ => Err(CoreError::MealNotFound(index)),
        }
    }

    async fn clear(&self, session_id: SessionId) -> Result<usize, CoreError> {
        let mut meals = self.meals.write().await;

        Ok(meals.remove(&session_id).map_or(0, |history| history.len()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::meal;

    #[tokio::test]
    async fn sessions_are_isolated() {
        let repository = InMemoryMealRepository::new();
        let alice = SessionId::parse("alice").unwrap();
        let bob = SessionId::parse("bob").unwrap();

        repository
            .add(alice.clone(), meal("Laksa", "Malaysian", "outside"))
            .await
            .unwrap();

        assert_eq!(repository.count(alice).await.unwrap(), 1);
        assert!(repository.list(bob.clone()).await.unwrap().is_empty());
        assert_eq!(
            repository.remove(bob, 0).await.unwrap_err(),
            CoreError::MealNotFound(0)
        );
    }

    #[tokio::test]
    async fn list_returns_a_snapshot() {
        let repository = InMemoryMealRepository::new();
        let session = SessionId::default();
        repository
            .add(session.clone(), meal("Bao", "Chinese", "home"))
            .await
            .unwrap();

        let snapshot = repository.list(session.clone()).await.unwrap();
        repository.clear(session.clone()).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repository.count(session).await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_report_distinct_totals() {
        let repository = Arc::new(InMemoryMealRepository::new());
        let session = SessionId::default();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repository = Arc::clone(&repository);
                let session = session.clone();
                tokio::spawn(async move {
                    repository
                        .add(session, meal(&format!("Dish {i}"), "Any", "home"))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut totals = Vec::new();
        for handle in handles {
            totals.push(handle.await.unwrap());
        }
        totals.sort_unstable();

        // each insert sees the length right after its own push
        assert_eq!(totals, (1..=32).collect::<Vec<usize>>());
        assert_eq!(repository.count(session).await.unwrap(), 32);
    }

    #[tokio::test]
    async fn add_many_returns_new_total() {
        let repository = InMemoryMealRepository::new();
        let session = SessionId::default();
        repository
            .add(session.clone(), meal("Soup", "Russian", "home"))
            .await
            .unwrap();

        let total = repository
            .add_many(
                session.clone(),
                vec![meal("Kebab", "Turkish", "outside"), meal("Pilaf", "Uzbek", "home")],
            )
            .await
            .unwrap();

        assert_eq!(total, 3);
        let names: Vec<_> = repository
            .list(session)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Soup", "Kebab", "Pilaf"]);
    }
}
