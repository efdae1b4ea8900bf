//! Wire types for the readiness service.
//!
//! The service is tolerant about shapes: plan items and report list entries
//! arrive either as plain strings or as structured objects. The untagged
//! enums here absorb both so the rest of the crate only ever sees the
//! normalized domain types.

use serde::{Deserialize, Serialize};

/// POST `/interview-ready/plan` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub user_type: String,
    pub experience_years: u32,
    pub primary_skill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// POST `/interview-ready/plan` response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(default)]
    pub evaluation_plan: Vec<PlanItem>,
}

/// A single plan entry as sent by the service — plain question text or a
/// structured item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanItem {
    Text(String),
    Structured {
        #[serde(default)]
        question: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        correct_answer: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        study_topic: Option<String>,
    },
}

/// POST `/interview-ready/evaluate` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    pub correct_answers: Vec<String>,
    pub study_topics: Vec<String>,
}

/// POST `/interview-ready/evaluate` response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluateResponse {
    #[serde(default)]
    pub readiness_percentage: f64,
    #[serde(default)]
    pub readiness_label: Option<String>,
    #[serde(default)]
    pub strengths: Vec<TopicItem>,
    #[serde(default)]
    pub gaps: Vec<TopicItem>,
    #[serde(default)]
    pub learning_recommendations: Vec<RecommendationItem>,
}

/// Strength/gap entry — plain text or `{ topic }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TopicItem {
    Text(String),
    Structured {
        #[serde(default)]
        topic: String,
    },
}

impl TopicItem {
    /// The display text for this entry.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Structured { topic } => topic,
        }
    }
}

/// Recommendation entry — plain topic text or a structured card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendationItem {
    Text(String),
    Structured {
        #[serde(default)]
        topic: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        why: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        priority: Option<String>,
    },
}

/// GET `/interview-ready/stats` response body.
///
/// The service has shipped both keys over time; `total_checks` wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub total_checks: Option<u64>,
    #[serde(default)]
    pub total_views: Option<u64>,
}

impl StatsResponse {
    /// The usage counter to display, preferring `total_checks`.
    pub fn count(&self) -> u64 {
        self.total_checks.or(self.total_views).unwrap_or(0)
    }
}

/// POST `/contact/submit` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// POST `/contact/submit` response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body shape shared by all endpoints: FastAPI-style `detail`
/// (string, or array of strings / `{ msg }` objects) with a `message`
/// fallback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Flatten the body into a single user-readable message, if any.
    pub fn into_message(self) -> Option<String> {
        if let Some(detail) = self.detail {
            let msg = match detail {
                serde_json::Value::Array(items) => items
                    .into_iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s,
                        other => other
                            .get("msg")
                            .and_then(|m| m.as_str())
                            .map(str::to_string)
                            .unwrap_or_else(|| other.to_string()),
                    })
                    .collect::<Vec<_>>()
                    .join(". "),
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            if !msg.is_empty() {
                return Some(msg);
            }
        }
        self.message
    }
}
