//! Meal recommendation engine
//!
//! Ranks catalog foods for the user's next meal with a weighted sum of
//! three components: how well the food fits the remaining calorie budget
//! for the meal slot, how well its protein share matches the goal's ideal
//! split, and whether it adds variety over what was eaten recently.
//! One pass over the catalog per request, fully deterministic.

use crate::catalog::Catalog;
use crate::error::ApiError;
use calorie_coach_shared::energy::{energy_breakdown, KCAL_PER_G_PROTEIN};
use calorie_coach_shared::models::FoodItem;
use calorie_coach_shared::types::{RecommendRequest, RecommendResponse, RecommendationItem};
use calorie_coach_shared::validation::validate_profile;
use validator::Validate;

// Component weights
const W_CALORIE_FIT: f64 = 0.5;
const W_MACRO_FIT: f64 = 0.3;
const W_VARIETY: f64 = 0.2;

// Variety score for a category already eaten recently
const REPEAT_CATEGORY_SCORE: f64 = 20.0;

const DEFAULT_LIMIT: usize = 5;
const MAX_LIMIT: usize = 20;

/// Meal recommendation service
pub struct RecommendService;

impl RecommendService {
    /// Rank catalog foods for the request's meal slot
    pub fn recommend(
        catalog: &Catalog,
        request: RecommendRequest,
    ) -> Result<RecommendResponse, ApiError> {
        request
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        validate_profile(&request.profile).map_err(ApiError::Validation)?;

        let limit = request.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

        let breakdown = energy_breakdown(&request.profile);
        // Budget left for today, then the share belonging to this meal slot
        let remaining =
            breakdown.daily_target + request.exercise_calories - request.consumed_calories;
        let slot_kcal = (remaining * request.meal_type.budget_share()).max(0.0);

        let ideal_protein_pct = request.profile.goal.ideal_split().protein_pct;

        let mut items: Vec<RecommendationItem> = catalog
            .foods()
            .iter()
            .map(|food| {
                let calorie_fit = calorie_fit(food, slot_kcal);
                let macro_fit = macro_fit(food, ideal_protein_pct);
                let variety = if request.recent_categories.contains(&food.category) {
                    REPEAT_CATEGORY_SCORE
                } else {
                    100.0
                };
                let score = round1(
                    calorie_fit * W_CALORIE_FIT + macro_fit * W_MACRO_FIT + variety * W_VARIETY,
                );
                RecommendationItem {
                    food: food.clone(),
                    score,
                    calorie_fit: round1(calorie_fit),
                    macro_fit: round1(macro_fit),
                    variety,
                }
            })
            .collect();

        // Descending by score, ties broken by name for a stable ranking
        items.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.food.name.cmp(&b.food.name))
        });
        items.truncate(limit);

        Ok(RecommendResponse {
            slot_kcal: round1(slot_kcal),
            items,
        })
    }
}

/// Closeness of the food's calories to the meal-slot budget
///
/// A spent budget (slot of zero) pins every candidate to 0.
fn calorie_fit(food: &FoodItem, slot_kcal: f64) -> f64 {
    if slot_kcal <= 0.0 {
        return 0.0;
    }
    (100.0 - (food.calories - slot_kcal).abs() / slot_kcal * 100.0).clamp(0.0, 100.0)
}

/// Protein density of the food relative to the goal's ideal protein share
///
/// Saturates at the ideal share: a single food richer in protein than the
/// whole-day target still counts as a full fit, since meals combine foods.
fn macro_fit(food: &FoodItem, ideal_protein_pct: f64) -> f64 {
    if food.calories <= 0.0 || ideal_protein_pct <= 0.0 {
        return 0.0;
    }
    let protein_pct = (food.protein_g * KCAL_PER_G_PROTEIN / food.calories * 100.0).min(100.0);
    (protein_pct.min(ideal_protein_pct) / ideal_protein_pct * 100.0).clamp(0.0, 100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_coach_shared::energy::{ActivityLevel, Goal, Sex, UserProfile};
    use calorie_coach_shared::models::{FoodCategory, MealType};
    use proptest::prelude::*;

    fn profile() -> UserProfile {
        UserProfile {
            weight_kg: 80.0,
            height_cm: 180.0,
            age_years: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::ModeratelyActive,
            goal: Goal::Lose,
        }
    }

    fn request(consumed: f64, recent: Vec<FoodCategory>) -> RecommendRequest {
        RecommendRequest {
            profile: profile(),
            consumed_calories: consumed,
            exercise_calories: 0.0,
            recent_categories: recent,
            meal_type: MealType::Lunch,
            limit: None,
        }
    }

    #[test]
    fn test_recommend_returns_ranked_items() {
        let catalog = Catalog::load().unwrap();
        let response = RecommendService::recommend(&catalog, request(800.0, vec![])).unwrap();

        assert_eq!(response.items.len(), 5);
        assert!(response.slot_kcal > 0.0);
        // Scores are non-increasing
        for pair in response.items.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let catalog = Catalog::load().unwrap();
        let a = RecommendService::recommend(&catalog, request(800.0, vec![])).unwrap();
        let b = RecommendService::recommend(&catalog, request(800.0, vec![])).unwrap();
        let names_a: Vec<_> = a.items.iter().map(|i| i.food.name.clone()).collect();
        let names_b: Vec<_> = b.items.iter().map(|i| i.food.name.clone()).collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn test_recent_categories_are_demoted() {
        let catalog = Catalog::load().unwrap();

        let fresh = RecommendService::recommend(&catalog, request(800.0, vec![])).unwrap();
        let all_recent = RecommendService::recommend(
            &catalog,
            request(800.0, FoodCategory::ALL.to_vec()),
        )
        .unwrap();

        // With every category recently eaten, variety collapses for all
        // candidates and every item's score drops
        for item in &all_recent.items {
            assert_eq!(item.variety, REPEAT_CATEGORY_SCORE);
        }
        assert!(fresh.items[0].score > all_recent.items[0].score);
    }

    #[test]
    fn test_spent_budget_pins_calorie_fit_to_zero() {
        let catalog = Catalog::load().unwrap();
        let response = RecommendService::recommend(&catalog, request(10000.0, vec![])).unwrap();

        assert_eq!(response.slot_kcal, 0.0);
        for item in &response.items {
            assert_eq!(item.calorie_fit, 0.0);
        }
    }

    #[test]
    fn test_limit_is_honored_and_capped() {
        let catalog = Catalog::load().unwrap();

        let mut req = request(800.0, vec![]);
        req.limit = Some(3);
        assert_eq!(
            RecommendService::recommend(&catalog, req).unwrap().items.len(),
            3
        );

        let mut req = request(800.0, vec![]);
        req.limit = Some(10000);
        assert!(
            RecommendService::recommend(&catalog, req).unwrap().items.len() <= MAX_LIMIT
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Property: every component and the total stay within 0-100
        #[test]
        fn prop_scores_bounded(
            consumed in 0.0f64..6000.0,
            exercise in 0.0f64..2000.0
        ) {
            let catalog = Catalog::load().unwrap();
            let mut req = request(consumed, vec![]);
            req.exercise_calories = exercise;

            let response = RecommendService::recommend(&catalog, req).unwrap();
            for item in response.items {
                prop_assert!((0.0..=100.0).contains(&item.score));
                prop_assert!((0.0..=100.0).contains(&item.calorie_fit));
                prop_assert!((0.0..=100.0).contains(&item.macro_fit));
            }
        }
    }

    #[test]
    fn test_macro_fit_favors_protein_for_weight_loss() {
        // Chicken breast (high protein share) vs cola (zero protein)
        let catalog = Catalog::load().unwrap();
        let chicken = catalog.food_by_id(11).unwrap();
        let cola = catalog.food_by_id(58).unwrap();

        let ideal = Goal::Lose.ideal_split().protein_pct;
        assert!(macro_fit(chicken, ideal) > macro_fit(cola, ideal));
    }
}
