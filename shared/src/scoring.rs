//! Daily diet scoring engine
//!
//! Weighted-sum heuristics that grade a day of eating and exercising
//! against the user's goal: a calorie component (distance from the target
//! balance), a nutrition component (macro split deviation), a diversity
//! component (distinct food categories), and a consistency component
//! (how many recent days landed in the green zone). All functions are
//! pure and evaluated once per request.

use crate::energy::{
    daily_balance, energy_breakdown, traffic_light, Goal, MacroSplit, TrafficLight, UserProfile,
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use crate::models::FoodCategory;
use serde::{Deserialize, Serialize};

// Component weights for the final score
const W_CALORIE: f64 = 0.40;
const W_NUTRITION: f64 = 0.30;
const W_DIVERSITY: f64 = 0.20;
const W_CONSISTENCY: f64 = 0.10;

// Calorie score loses 12.5 points per 100 kcal off target (0 at 800 kcal)
const CALORIE_PENALTY_PER_KCAL: f64 = 0.125;
// Nutrition score loses 1.5 points per percentage-point of macro deviation
const MACRO_PENALTY_PER_PP: f64 = 1.5;
// Diversity saturates at this many distinct categories
const DIVERSITY_TARGET: usize = 5;

/// A food the user selected for the day, as reported by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedFood {
    pub name: String,
    pub category: FoodCategory,
}

/// Input to the daily score computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreInput {
    pub profile: UserProfile,
    /// Calories burned through logged exercise today
    pub exercise_calories: f64,
    /// Calories consumed today
    pub diet_calories: f64,
    /// Grams of protein consumed today
    pub protein: f64,
    /// Grams of carbohydrates consumed today
    pub carbs: f64,
    /// Grams of fat consumed today
    pub fat: f64,
    /// Foods selected today, for the diversity component
    #[serde(default)]
    pub selected_foods: Vec<SelectedFood>,
    /// Signed daily balances for recent days, for the consistency component
    #[serde(default)]
    pub weekly_deficits: Vec<f64>,
}

/// Complete score report for a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub calorie_score: f64,
    pub nutrition_score: f64,
    pub diversity_score: f64,
    pub consistency_score: f64,
    pub final_score: f64,
    /// Achieved daily balance (intake minus expenditure)
    pub balance: f64,
    pub traffic_light: TrafficLight,
    pub suggestions: Vec<String>,
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Calorie component: distance between the achieved balance and the
/// goal's target balance
pub fn calorie_score(balance: f64, goal: Goal) -> f64 {
    let deviation = (balance - goal.target_balance()).abs();
    clamp_score(100.0 - deviation * CALORIE_PENALTY_PER_KCAL)
}

/// Nutrition component: absolute deviation of the macro energy split
/// from the goal's ideal split
///
/// All-zero macros score 0 (nothing was logged).
pub fn nutrition_score(protein_g: f64, carbs_g: f64, fat_g: f64, ideal: MacroSplit) -> f64 {
    let protein_kcal = protein_g.max(0.0) * KCAL_PER_G_PROTEIN;
    let carbs_kcal = carbs_g.max(0.0) * KCAL_PER_G_CARBS;
    let fat_kcal = fat_g.max(0.0) * KCAL_PER_G_FAT;
    let total = protein_kcal + carbs_kcal + fat_kcal;

    if total <= 0.0 {
        return 0.0;
    }

    let deviation_pp = (protein_kcal / total * 100.0 - ideal.protein_pct).abs()
        + (carbs_kcal / total * 100.0 - ideal.carbs_pct).abs()
        + (fat_kcal / total * 100.0 - ideal.fat_pct).abs();

    clamp_score(100.0 - deviation_pp * MACRO_PENALTY_PER_PP)
}

/// Diversity component: distinct food categories among the selection
pub fn diversity_score(foods: &[SelectedFood]) -> f64 {
    let mut seen: Vec<FoodCategory> = Vec::new();
    for food in foods {
        if !seen.contains(&food.category) {
            seen.push(food.category);
        }
    }
    let distinct = seen.len().min(DIVERSITY_TARGET);
    distinct as f64 / DIVERSITY_TARGET as f64 * 100.0
}

/// Consistency component: fraction of recent daily balances in the
/// green zone
///
/// An empty history scores a neutral 50.
pub fn consistency_score(weekly_balances: &[f64]) -> f64 {
    if weekly_balances.is_empty() {
        return 50.0;
    }
    let green = weekly_balances
        .iter()
        .filter(|b| traffic_light(**b) == TrafficLight::Green)
        .count();
    green as f64 / weekly_balances.len() as f64 * 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the full daily score report
pub fn compute_score(input: &ScoreInput) -> ScoreReport {
    let breakdown = energy_breakdown(&input.profile);
    let balance = daily_balance(input.diet_calories, breakdown.tdee, input.exercise_calories);

    let calorie = calorie_score(balance, input.profile.goal);
    let nutrition = nutrition_score(
        input.protein,
        input.carbs,
        input.fat,
        input.profile.goal.ideal_split(),
    );
    let diversity = diversity_score(&input.selected_foods);
    let consistency = consistency_score(&input.weekly_deficits);

    let final_score = round1(
        calorie * W_CALORIE
            + nutrition * W_NUTRITION
            + diversity * W_DIVERSITY
            + consistency * W_CONSISTENCY,
    );

    let suggestions = build_suggestions(calorie, nutrition, diversity, consistency);

    ScoreReport {
        calorie_score: round1(calorie),
        nutrition_score: round1(nutrition),
        diversity_score: round1(diversity),
        consistency_score: round1(consistency),
        final_score,
        balance: round1(balance),
        traffic_light: traffic_light(balance),
        suggestions,
    }
}

// Suggestion thresholds per component
const CALORIE_SUGGEST_BELOW: f64 = 60.0;
const NUTRITION_SUGGEST_BELOW: f64 = 60.0;
const DIVERSITY_SUGGEST_BELOW: f64 = 60.0;
const CONSISTENCY_SUGGEST_BELOW: f64 = 50.0;

/// Deterministic suggestions, worst component first
fn build_suggestions(calorie: f64, nutrition: f64, diversity: f64, consistency: f64) -> Vec<String> {
    let mut flagged: Vec<(f64, &str)> = Vec::new();

    if calorie < CALORIE_SUGGEST_BELOW {
        flagged.push((
            calorie,
            "Your calorie balance is far from your goal target. Adjust portion sizes or add a workout to close the gap.",
        ));
    }
    if nutrition < NUTRITION_SUGGEST_BELOW {
        flagged.push((
            nutrition,
            "Your macro split drifted from the recommended range. Rebalance protein, carbs, and fat across your meals.",
        ));
    }
    if diversity < DIVERSITY_SUGGEST_BELOW {
        flagged.push((
            diversity,
            "Few food groups today. Mix in vegetables, fruit, or a protein source you haven't had yet.",
        ));
    }
    if consistency < CONSISTENCY_SUGGEST_BELOW {
        flagged.push((
            consistency,
            "Recent days were off track. Aim for a steady, moderate daily deficit rather than swings.",
        ));
    }

    if flagged.is_empty() {
        return vec!["Great day! Keep your current eating and exercise rhythm going.".to_string()];
    }

    flagged.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    flagged.into_iter().map(|(_, text)| text.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::{ActivityLevel, Sex};
    use proptest::prelude::*;

    fn test_profile(goal: Goal) -> UserProfile {
        UserProfile {
            weight_kg: 80.0,
            height_cm: 180.0,
            age_years: 30,
            sex: Sex::Male,
            activity_level: ActivityLevel::ModeratelyActive,
            goal,
        }
    }

    fn food(name: &str, category: FoodCategory) -> SelectedFood {
        SelectedFood {
            name: name.to_string(),
            category,
        }
    }

    // =========================================================================
    // Calorie Score Tests
    // =========================================================================

    #[test]
    fn test_calorie_score_on_target_is_perfect() {
        assert_eq!(calorie_score(-500.0, Goal::Lose), 100.0);
        assert_eq!(calorie_score(0.0, Goal::Maintain), 100.0);
        assert_eq!(calorie_score(300.0, Goal::Gain), 100.0);
    }

    #[test]
    fn test_calorie_score_penalty_slope() {
        // 100 kcal off target -> 12.5 points lost
        assert_eq!(calorie_score(-400.0, Goal::Lose), 87.5);
        // 800 kcal off target -> floor
        assert_eq!(calorie_score(300.0, Goal::Lose), 0.0);
        // Beyond the floor stays clamped
        assert_eq!(calorie_score(2000.0, Goal::Lose), 0.0);
    }

    // =========================================================================
    // Nutrition Score Tests
    // =========================================================================

    #[test]
    fn test_nutrition_score_ideal_split_is_perfect() {
        // Maintain ideal: 25/50/25 of energy. 2000 kcal day:
        // 125g protein (500), 250g carbs (1000), ~55.6g fat (500)
        let score = nutrition_score(125.0, 250.0, 500.0 / 9.0, Goal::Maintain.ideal_split());
        assert!((score - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_nutrition_score_zero_macros() {
        assert_eq!(
            nutrition_score(0.0, 0.0, 0.0, Goal::Maintain.ideal_split()),
            0.0
        );
    }

    #[test]
    fn test_nutrition_score_all_fat_is_poor() {
        let score = nutrition_score(0.0, 0.0, 100.0, Goal::Maintain.ideal_split());
        // Deviation: 25 + 50 + 75 = 150pp -> clamped to 0
        assert_eq!(score, 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: nutrition score is always within 0-100
        #[test]
        fn prop_nutrition_score_bounded(
            p in 0.0f64..500.0,
            c in 0.0f64..800.0,
            f in 0.0f64..300.0
        ) {
            for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
                let score = nutrition_score(p, c, f, goal.ideal_split());
                prop_assert!((0.0..=100.0).contains(&score));
            }
        }

        /// Property: calorie score is always within 0-100
        #[test]
        fn prop_calorie_score_bounded(balance in -5000.0f64..5000.0) {
            for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
                let score = calorie_score(balance, goal);
                prop_assert!((0.0..=100.0).contains(&score));
            }
        }
    }

    // =========================================================================
    // Diversity Score Tests
    // =========================================================================

    #[test]
    fn test_diversity_score_counts_distinct_categories() {
        let foods = vec![
            food("rice", FoodCategory::Staple),
            food("noodles", FoodCategory::Staple),
            food("chicken breast", FoodCategory::Protein),
            food("broccoli", FoodCategory::Vegetable),
        ];
        // 3 distinct of 5 -> 60
        assert_eq!(diversity_score(&foods), 60.0);
    }

    #[test]
    fn test_diversity_score_empty_and_saturated() {
        assert_eq!(diversity_score(&[]), 0.0);

        let foods = vec![
            food("rice", FoodCategory::Staple),
            food("chicken", FoodCategory::Protein),
            food("broccoli", FoodCategory::Vegetable),
            food("apple", FoodCategory::Fruit),
            food("milk", FoodCategory::Dairy),
            food("walnuts", FoodCategory::Nuts),
        ];
        // 6 distinct categories saturate at 5
        assert_eq!(diversity_score(&foods), 100.0);
    }

    // =========================================================================
    // Consistency Score Tests
    // =========================================================================

    #[test]
    fn test_consistency_score_neutral_when_empty() {
        assert_eq!(consistency_score(&[]), 50.0);
    }

    #[test]
    fn test_consistency_score_fraction_of_green_days() {
        // Green: -400, -200, 0. Not green: 500 (red), -1500 (yellow)
        let balances = [-400.0, -200.0, 0.0, 500.0, -1500.0];
        assert_eq!(consistency_score(&balances), 60.0);
    }

    // =========================================================================
    // Full Report Tests
    // =========================================================================

    #[test]
    fn test_compute_score_good_day() {
        let profile = test_profile(Goal::Lose);
        // TDEE ~2759; aim intake to land near the -500 target
        let input = ScoreInput {
            profile,
            exercise_calories: 300.0,
            diet_calories: 2550.0,
            protein: 160.0,
            carbs: 250.0,
            fat: 62.0,
            selected_foods: vec![
                food("oats", FoodCategory::Staple),
                food("chicken", FoodCategory::Protein),
                food("spinach", FoodCategory::Vegetable),
                food("banana", FoodCategory::Fruit),
                food("yogurt", FoodCategory::Dairy),
            ],
            weekly_deficits: vec![-400.0, -500.0, -300.0, -450.0],
        };

        let report = compute_score(&input);

        assert!(report.final_score > 75.0, "got {}", report.final_score);
        assert_eq!(report.traffic_light, TrafficLight::Green);
        assert_eq!(report.diversity_score, 100.0);
        assert_eq!(report.consistency_score, 100.0);
        assert_eq!(
            report.suggestions,
            vec!["Great day! Keep your current eating and exercise rhythm going.".to_string()]
        );
    }

    #[test]
    fn test_compute_score_bad_day_orders_suggestions_worst_first() {
        let profile = test_profile(Goal::Lose);
        let input = ScoreInput {
            profile,
            exercise_calories: 0.0,
            diet_calories: 4200.0,
            protein: 20.0,
            carbs: 100.0,
            fat: 300.0,
            selected_foods: vec![food("chips", FoodCategory::Snack)],
            weekly_deficits: vec![800.0, 900.0, 700.0],
        };

        let report = compute_score(&input);

        assert_eq!(report.traffic_light, TrafficLight::Red);
        assert!(report.final_score < 30.0, "got {}", report.final_score);
        // Every component is flagged
        assert_eq!(report.suggestions.len(), 4);
        // Worst first: calorie and consistency are both 0 here, nutrition 0,
        // diversity 20 must come last
        assert!(report.suggestions[3].contains("Few food groups"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: final score is a convex combination, so it stays in 0-100
        #[test]
        fn prop_final_score_bounded(
            diet in 0.0f64..6000.0,
            exercise in 0.0f64..2000.0,
            p in 0.0f64..400.0,
            c in 0.0f64..700.0,
            f in 0.0f64..250.0,
            balances in prop::collection::vec(-2000.0f64..2000.0, 0..14)
        ) {
            let input = ScoreInput {
                profile: test_profile(Goal::Maintain),
                exercise_calories: exercise,
                diet_calories: diet,
                protein: p,
                carbs: c,
                fat: f,
                selected_foods: vec![],
                weekly_deficits: balances,
            };
            let report = compute_score(&input);
            prop_assert!((0.0..=100.0).contains(&report.final_score));
            prop_assert!(!report.suggestions.is_empty());
        }
    }
}
