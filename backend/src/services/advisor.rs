//! Advice service - knowledge-base selection with LLM enrichment
//!
//! The knowledge base is a static in-memory array of diet and exercise
//! guidance. Selection is a deterministic keyword/tag overlap score; the
//! selected entries both seed the LLM prompt and form the fallback answer
//! when the call fails. Failures are logged and swallowed: the user
//! always gets an answer.

use crate::error::ApiError;
use crate::llm::{ChatMessage, LlmClient};
use crate::store::SessionStore;
use calorie_coach_shared::energy::{Goal, UserProfile};
use calorie_coach_shared::models::AdviceEntry;
use calorie_coach_shared::types::{AdviceRequest, AdviceResponse, AdviceSource};
use tracing::warn;
use validator::Validate;

/// Number of knowledge-base entries behind each answer
const SELECTION_SIZE: usize = 3;

/// Advice service: knowledge base, session memory, LLM client
pub struct Advisor {
    entries: Vec<AdviceEntry>,
    llm: LlmClient,
    sessions: SessionStore,
}

impl Advisor {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            entries: builtin_knowledge_base(),
            llm,
            sessions: SessionStore::new(),
        }
    }

    /// Answer a question, preferring the LLM but always falling back to
    /// the selected knowledge-base entries
    pub async fn answer(&self, request: AdviceRequest) -> Result<AdviceResponse, ApiError> {
        request
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        if request.user_id.trim().is_empty() {
            return Err(ApiError::Validation("user_id cannot be empty".to_string()));
        }

        let goal = request.profile.as_ref().map(|p| p.goal).unwrap_or_default();
        let selected = self.select(&request.question, goal);
        let references: Vec<String> = selected.iter().map(|e| e.topic.clone()).collect();
        let fallback = selected
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let history = self.sessions.history(&request.user_id).await;
        let messages = build_messages(&request, &selected, &history);

        let (answer, source) = match self.llm.chat(messages).await {
            Ok(text) => (text, AdviceSource::Llm),
            Err(err) => {
                warn!(error = %err, "LLM call failed, serving knowledge-base answer");
                (fallback, AdviceSource::KnowledgeBase)
            }
        };

        self.sessions
            .record(&request.user_id, request.question, answer.clone())
            .await;

        Ok(AdviceResponse {
            answer,
            source,
            references,
        })
    }

    /// Deterministic knowledge-base selection
    ///
    /// Score = 2 x tag hits + 1 x topic-word hits + 1 if the entry's
    /// goals contain the user's goal. Zero-scoring entries are excluded;
    /// ties break by entry id. An empty selection falls back to the
    /// goal-matched general entries.
    fn select(&self, question: &str, goal: Goal) -> Vec<&AdviceEntry> {
        let tokens = tokenize(question);

        let mut scored: Vec<(i32, &AdviceEntry)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = score_entry(entry, &tokens, goal);
                (score > 0).then_some((score, entry))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.id.cmp(&b.1.id)));

        let selected: Vec<&AdviceEntry> = scored
            .into_iter()
            .take(SELECTION_SIZE)
            .map(|(_, e)| e)
            .collect();

        if !selected.is_empty() {
            return selected;
        }

        // Nothing matched the question; serve general guidance for the goal
        self.entries
            .iter()
            .filter(|e| e.tags.iter().any(|t| t == "general"))
            .filter(|e| e.goals.is_empty() || e.goals.contains(&goal))
            .take(SELECTION_SIZE)
            .collect()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 1)
        .map(|t| t.to_string())
        .collect()
}

fn score_entry(entry: &AdviceEntry, tokens: &[String], goal: Goal) -> i32 {
    let tag_hits = entry
        .tags
        .iter()
        .filter(|tag| tokens.iter().any(|t| t == *tag))
        .count() as i32;

    let topic_words = tokenize(&entry.topic);
    let topic_hits = topic_words
        .iter()
        .filter(|word| tokens.contains(word))
        .count() as i32;

    // The goal bonus boosts keyword-matched entries; it never qualifies
    // an entry on its own
    if tag_hits + topic_hits == 0 {
        return 0;
    }

    let goal_bonus = i32::from(entry.goals.contains(&goal));
    2 * tag_hits + topic_hits + goal_bonus
}

fn build_messages(
    request: &AdviceRequest,
    selected: &[&AdviceEntry],
    history: &[crate::store::Exchange],
) -> Vec<ChatMessage> {
    let mut context = String::from(
        "You are a diet and exercise coach. Answer briefly and practically, \
         in the user's language. Ground your answer in this guidance:\n",
    );
    for entry in selected {
        context.push_str("- ");
        context.push_str(&entry.text);
        context.push('\n');
    }
    if let Some(profile) = &request.profile {
        context.push_str(&profile_summary(profile));
    }

    let mut messages = vec![ChatMessage::system(context)];
    for exchange in history {
        messages.push(ChatMessage::user(exchange.question.clone()));
        messages.push(ChatMessage {
            role: "assistant".to_string(),
            content: exchange.answer.clone(),
        });
    }
    messages.push(ChatMessage::user(request.question.clone()));
    messages
}

fn profile_summary(profile: &UserProfile) -> String {
    format!(
        "User: {:.0} kg, {:.0} cm, {} years old, goal: {:?}, activity: {}.\n",
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.goal,
        profile.activity_level.description()
    )
}

/// The built-in advice knowledge base
fn builtin_knowledge_base() -> Vec<AdviceEntry> {
    fn entry(id: u32, topic: &str, tags: &[&str], goals: &[Goal], text: &str) -> AdviceEntry {
        AdviceEntry {
            id,
            topic: topic.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            goals: goals.to_vec(),
            text: text.to_string(),
        }
    }

    vec![
        entry(
            1,
            "Calorie deficit basics",
            &["deficit", "calories", "weight", "lose", "general"],
            &[Goal::Lose],
            "A moderate deficit of 300-500 kcal per day supports steady fat loss of roughly 0.25-0.5 kg per week without draining energy.",
        ),
        entry(
            2,
            "Protein intake",
            &["protein", "muscle", "satiety"],
            &[Goal::Lose, Goal::Gain],
            "Aim for 1.2-1.6 g of protein per kg of body weight daily; it preserves muscle in a deficit and supports growth in a surplus.",
        ),
        entry(
            3,
            "Breakfast habits",
            &["breakfast", "morning", "skip"],
            &[],
            "A protein-rich breakfast such as eggs, yogurt, or soy milk reduces mid-morning snacking and steadies blood sugar.",
        ),
        entry(
            4,
            "Late night eating",
            &["night", "late", "evening", "snacking"],
            &[Goal::Lose],
            "Keep evening meals light and finish eating 2-3 hours before bed; late heavy meals make the next day's hunger harder to manage.",
        ),
        entry(
            5,
            "Hydration",
            &["water", "drink", "hydration", "thirst"],
            &[],
            "Drink roughly 30-35 ml of water per kg of body weight daily, more on training days; thirst is often misread as hunger.",
        ),
        entry(
            6,
            "Cardio training",
            &["cardio", "running", "jogging", "aerobic"],
            &[Goal::Lose, Goal::Maintain],
            "150 minutes of moderate cardio per week, split into 3-5 sessions, is the baseline for heart health and steady energy expenditure.",
        ),
        entry(
            7,
            "Strength training",
            &["strength", "weights", "muscle", "resistance"],
            &[Goal::Gain, Goal::Maintain],
            "Train each major muscle group twice a week; progressive overload with good form beats occasional exhausting sessions.",
        ),
        entry(
            8,
            "Vegetable variety",
            &["vegetables", "fiber", "variety", "diversity", "general"],
            &[],
            "Fill half the plate with vegetables across several colors each day; fiber improves satiety and digestion at very low calorie cost.",
        ),
        entry(
            9,
            "Sugary drinks",
            &["sugar", "drinks", "cola", "beverage", "bubble"],
            &[Goal::Lose],
            "Liquid calories add up fastest: swapping one sugary drink a day for tea or water saves 1000+ kcal a week.",
        ),
        entry(
            10,
            "Eating out",
            &["restaurant", "takeout", "eating", "out"],
            &[],
            "When eating out, order a vegetable dish first, prefer steamed or braised over fried, and stop at 80% fullness.",
        ),
        entry(
            11,
            "Weight gain quality",
            &["gain", "bulk", "surplus", "general"],
            &[Goal::Gain],
            "Gain on a 200-300 kcal surplus from whole foods: extra rice, eggs, dairy, and nuts beat pastries for building lean mass.",
        ),
        entry(
            12,
            "Plateau handling",
            &["plateau", "stuck", "stall"],
            &[Goal::Lose],
            "Weight plateaus after a few weeks are normal: re-measure portions, add 10 minutes to workouts, and give changes two weeks before judging.",
        ),
        entry(
            13,
            "Sleep and recovery",
            &["sleep", "recovery", "rest", "general"],
            &[],
            "Seven to nine hours of sleep regulates the hunger hormones; short nights reliably increase next-day snack cravings.",
        ),
        entry(
            14,
            "Exercise recovery meals",
            &["recovery", "post", "workout", "after"],
            &[Goal::Gain, Goal::Maintain],
            "Within two hours after training, pair protein with carbs, such as milk and a banana, to refill glycogen and repair muscle.",
        ),
    ]
}
