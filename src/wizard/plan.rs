//! Question plan normalization.
//!
//! The service returns `evaluation_plan` as a mix of plain strings and
//! structured items; this module flattens both into [`PlanEntry`] rows the
//! wizard can render, with the study-topic derivation and empty-plan
//! fallback the report depends on.

use serde::{Deserialize, Serialize};

use crate::api::types::{EvaluateRequest, PlanItem};

use super::answers::AnswerSet;

/// Topic used when the service gives us nothing to derive one from.
pub const FALLBACK_TOPIC: &str = "Interview fundamentals";

/// Questions longer than this derive a truncated study topic.
const TOPIC_DERIVE_LIMIT: usize = 60;

/// One normalized question in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub question: String,
    pub correct_answer: String,
    pub study_topic: String,
}

/// The ordered question plan, read-only after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPlan {
    entries: Vec<PlanEntry>,
}

impl QuestionPlan {
    /// Normalize raw plan items into a plan.
    ///
    /// An empty input produces a single fallback entry so the wizard never
    /// presents zero questions.
    pub fn normalize(items: Vec<PlanItem>) -> Self {
        let mut entries: Vec<PlanEntry> = items
            .into_iter()
            .map(|item| match item {
                PlanItem::Text(question) => {
                    let study_topic = derive_topic(&question);
                    PlanEntry {
                        question,
                        correct_answer: "Yes".to_string(),
                        study_topic,
                    }
                }
                PlanItem::Structured {
                    question,
                    correct_answer,
                    study_topic,
                } => {
                    let study_topic = study_topic
                        .as_deref()
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .unwrap_or_else(|| derive_topic(&question));
                    PlanEntry {
                        question,
                        correct_answer: correct_answer
                            .filter(|a| !a.is_empty())
                            .unwrap_or_else(|| "Yes".to_string()),
                        study_topic,
                    }
                }
            })
            .collect();

        if entries.is_empty() {
            entries.push(PlanEntry {
                question: FALLBACK_TOPIC.to_string(),
                correct_answer: "Yes".to_string(),
                study_topic: FALLBACK_TOPIC.to_string(),
            });
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn question(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.question.as_str())
    }

    /// Build the evaluate wire payload. Unanswered questions default to
    /// "No" here and only here.
    pub fn to_evaluate_request(&self, answers: &AnswerSet) -> EvaluateRequest {
        EvaluateRequest {
            questions: self.entries.iter().map(|e| e.question.clone()).collect(),
            answers: (0..self.entries.len())
                .map(|i| answers.wire_answer(i).to_string())
                .collect(),
            correct_answers: self
                .entries
                .iter()
                .map(|e| e.correct_answer.clone())
                .collect(),
            study_topics: self.entries.iter().map(|e| e.study_topic.clone()).collect(),
        }
    }
}

/// Derive a study topic from question text: truncate long questions to 57
/// chars + ellipsis, fall back when there is no text at all.
fn derive_topic(question: &str) -> String {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return FALLBACK_TOPIC.to_string();
    }
    if trimmed.chars().count() > TOPIC_DERIVE_LIMIT {
        let mut topic: String = trimmed.chars().take(57).collect();
        topic.push_str("...");
        topic
    } else {
        trimmed.to_string()
    }
}
