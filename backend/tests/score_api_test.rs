//! Integration tests for the scoring and energy endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

fn score_body() -> Value {
    json!({
        "profile": {
            "weight_kg": 80.0,
            "height_cm": 180.0,
            "age_years": 30,
            "sex": "male",
            "activity_level": "moderately_active",
            "goal": "lose"
        },
        "exercise_calories": 300.0,
        "diet_calories": 2550.0,
        "protein": 160.0,
        "carbs": 250.0,
        "fat": 62.0,
        "selected_foods": [
            {"name": "oats", "category": "staple"},
            {"name": "chicken breast", "category": "protein"},
            {"name": "spinach", "category": "vegetable"}
        ],
        "weekly_deficits": [-400.0, -500.0, -300.0]
    })
}

#[tokio::test]
async fn test_score_endpoint_returns_component_scores() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/score", &score_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&body).unwrap();

    for field in [
        "calorie_score",
        "nutrition_score",
        "diversity_score",
        "consistency_score",
        "final_score",
        "bmr",
        "tdee",
    ] {
        let value = parsed[field].as_f64().unwrap();
        assert!(value >= 0.0, "{field} = {value}");
    }
    assert_eq!(parsed["traffic_light"], "green");
    assert!(!parsed["suggestions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_score_endpoint_rejects_invalid_profile() {
    let app = common::TestApp::new();

    let mut body = score_body();
    body["profile"]["weight_kg"] = json!(5.0);

    let (status, response) = app.post("/api/score", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.contains("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_score_endpoint_rejects_negative_macros() {
    let app = common::TestApp::new();

    let mut body = score_body();
    body["protein"] = json!(-10.0);

    let (status, _) = app.post("/api/score", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_score_endpoint_flags_overeating_red() {
    let app = common::TestApp::new();

    let mut body = score_body();
    body["diet_calories"] = json!(4500.0);
    body["exercise_calories"] = json!(0.0);

    let (status, response) = app.post("/api/score", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["traffic_light"], "red");
}

#[tokio::test]
async fn test_energy_endpoint() {
    let app = common::TestApp::new();

    let body = json!({
        "profile": {
            "weight_kg": 60.0,
            "height_cm": 165.0,
            "age_years": 28,
            "sex": "female",
            "activity_level": "lightly_active",
            "goal": "maintain"
        }
    });

    let (status, response) = app.post("/api/v1/energy", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    let bmr = parsed["bmr"].as_f64().unwrap();
    let tdee = parsed["tdee"].as_f64().unwrap();
    assert!(bmr > 1200.0 && bmr < 1500.0);
    assert!(tdee > bmr);
    assert_eq!(parsed["unit"], "kcal");
}

#[tokio::test]
async fn test_recommendations_endpoint_ranks_foods() {
    let app = common::TestApp::new();

    let body = json!({
        "profile": {
            "weight_kg": 80.0,
            "height_cm": 180.0,
            "age_years": 30,
            "sex": "male",
            "activity_level": "moderately_active",
            "goal": "lose"
        },
        "consumed_calories": 800.0,
        "exercise_calories": 0.0,
        "recent_categories": ["staple"],
        "meal_type": "lunch",
        "limit": 5
    });

    let (status, response) = app.post("/api/v1/recommendations", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    let items = parsed["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert!(parsed["slot_kcal"].as_f64().unwrap() > 0.0);

    // Ranking is descending
    let scores: Vec<f64> = items
        .iter()
        .map(|i| i["score"].as_f64().unwrap())
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }

    // Recently eaten staples carry the repeat-category variety score
    for item in items {
        if item["food"]["category"] == "staple" {
            assert_eq!(item["variety"].as_f64().unwrap(), 20.0);
        }
    }
}
