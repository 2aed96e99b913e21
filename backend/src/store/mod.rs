//! In-memory per-user stores
//!
//! The tracker keeps meal/exercise logs and advisor sessions in process
//! memory: persistence is out of scope for this service, and a single
//! client talks to a single instance. The async locks exist so concurrent
//! handlers stay correct, not for cross-instance sharing.

use calorie_coach_shared::models::{ExerciseLog, MealLog};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct UserLogs {
    meals: Vec<MealLog>,
    exercises: Vec<ExerciseLog>,
}

/// Per-user meal and exercise log store
#[derive(Debug, Clone, Default)]
pub struct TrackingStore {
    inner: Arc<RwLock<HashMap<String, UserLogs>>>,
}

impl TrackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_meal(&self, log: MealLog) {
        let mut inner = self.inner.write().await;
        inner.entry(log.user_id.clone()).or_default().meals.push(log);
    }

    pub async fn add_exercise(&self, log: ExerciseLog) {
        let mut inner = self.inner.write().await;
        inner
            .entry(log.user_id.clone())
            .or_default()
            .exercises
            .push(log);
    }

    /// Meals a user logged on a given date (UTC)
    pub async fn meals_for_date(&self, user_id: &str, date: NaiveDate) -> Vec<MealLog> {
        let inner = self.inner.read().await;
        inner
            .get(user_id)
            .map(|logs| {
                logs.meals
                    .iter()
                    .filter(|m| m.logged_at.date_naive() == date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Exercises a user logged on a given date (UTC)
    pub async fn exercises_for_date(&self, user_id: &str, date: NaiveDate) -> Vec<ExerciseLog> {
        let inner = self.inner.read().await;
        inner
            .get(user_id)
            .map(|logs| {
                logs.exercises
                    .iter()
                    .filter(|e| e.logged_at.date_naive() == date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Remove a meal log; returns false when no such entry exists
    pub async fn delete_meal(&self, user_id: &str, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        if let Some(logs) = inner.get_mut(user_id) {
            let before = logs.meals.len();
            logs.meals.retain(|m| m.id != id);
            return logs.meals.len() < before;
        }
        false
    }

    /// Remove an exercise log; returns false when no such entry exists
    pub async fn delete_exercise(&self, user_id: &str, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        if let Some(logs) = inner.get_mut(user_id) {
            let before = logs.exercises.len();
            logs.exercises.retain(|e| e.id != id);
            return logs.exercises.len() < before;
        }
        false
    }
}

/// One question/answer exchange remembered for a user
#[derive(Debug, Clone)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

/// Number of exchanges kept per user
const SESSION_CAPACITY: usize = 10;

/// Per-user advisor conversation memory, bounded per user
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Vec<Exchange>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn history(&self, user_id: &str) -> Vec<Exchange> {
        let inner = self.inner.read().await;
        inner.get(user_id).cloned().unwrap_or_default()
    }

    /// Append an exchange, evicting the oldest past capacity
    pub async fn record(&self, user_id: &str, question: String, answer: String) {
        let mut inner = self.inner.write().await;
        let history = inner.entry(user_id.to_string()).or_default();
        history.push(Exchange { question, answer });
        if history.len() > SESSION_CAPACITY {
            let excess = history.len() - SESSION_CAPACITY;
            history.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_coach_shared::models::{FoodCategory, MealType};
    use chrono::{TimeZone, Utc};

    fn meal(user: &str, day: u32, name: &str) -> MealLog {
        MealLog {
            id: Uuid::new_v4(),
            user_id: user.to_string(),
            food_id: None,
            name: name.to_string(),
            category: Some(FoodCategory::Staple),
            meal_type: MealType::Lunch,
            servings: 1.0,
            calories: 300.0,
            protein_g: 10.0,
            carbs_g: 50.0,
            fat_g: 5.0,
            logged_at: Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_meals_filtered_by_date_and_user() {
        let store = TrackingStore::new();
        store.add_meal(meal("alice", 1, "rice")).await;
        store.add_meal(meal("alice", 2, "noodles")).await;
        store.add_meal(meal("bob", 1, "congee")).await;

        let day1 = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let alice_day1 = store.meals_for_date("alice", day1).await;
        assert_eq!(alice_day1.len(), 1);
        assert_eq!(alice_day1[0].name, "rice");

        assert!(store.meals_for_date("carol", day1).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_meal() {
        let store = TrackingStore::new();
        let entry = meal("alice", 1, "rice");
        let id = entry.id;
        store.add_meal(entry).await;

        assert!(store.delete_meal("alice", id).await);
        // Second delete is a miss
        assert!(!store.delete_meal("alice", id).await);
        // Wrong user is a miss
        assert!(!store.delete_meal("bob", id).await);
    }

    #[tokio::test]
    async fn test_session_store_caps_history() {
        let store = SessionStore::new();
        for i in 0..15 {
            store
                .record("alice", format!("q{i}"), format!("a{i}"))
                .await;
        }

        let history = store.history("alice").await;
        assert_eq!(history.len(), 10);
        // Oldest evicted first
        assert_eq!(history[0].question, "q5");
        assert_eq!(history[9].question, "q14");
    }
}
