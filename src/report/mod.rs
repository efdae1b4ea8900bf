//! Readiness report — the scored result and its presentation contract.

pub mod scorecard;
pub mod share;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::{EvaluateResponse, RecommendationItem};

/// Radius of the circular score indicator.
pub const SCORE_RING_RADIUS: f64 = 54.0;

/// Score at or above which the badge/confetti treatment triggers.
pub const BADGE_THRESHOLD: f64 = 80.0;

/// One prioritized learning recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// The evaluated readiness report. Read-only; produced once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Score in 0–100.
    pub readiness_percentage: f64,
    pub readiness_label: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub completed_at: DateTime<Utc>,
}

impl Report {
    /// Build a report from the evaluate response, clamping the score into
    /// 0–100 and flattening the tolerant wire shapes.
    pub fn from_response(resp: EvaluateResponse) -> Self {
        Self {
            readiness_percentage: resp.readiness_percentage.clamp(0.0, 100.0),
            readiness_label: resp.readiness_label.unwrap_or_else(|| "—".to_string()),
            strengths: resp.strengths.iter().map(|s| s.text().to_string()).collect(),
            gaps: resp.gaps.iter().map(|g| g.text().to_string()).collect(),
            recommendations: resp
                .learning_recommendations
                .into_iter()
                .map(|item| match item {
                    RecommendationItem::Text(topic) => Recommendation {
                        topic,
                        why: None,
                        priority: None,
                    },
                    RecommendationItem::Structured {
                        topic,
                        why,
                        priority,
                    } => Recommendation {
                        topic,
                        why,
                        priority,
                    },
                })
                .collect(),
            completed_at: Utc::now(),
        }
    }

    /// "82%" — integer scores drop the fraction, others keep one decimal.
    pub fn percent_text(&self) -> String {
        if self.readiness_percentage.fract() == 0.0 {
            format!("{}%", self.readiness_percentage as i64)
        } else {
            format!("{:.1}%", self.readiness_percentage)
        }
    }

    /// Whether the high-score badge treatment applies.
    pub fn has_badge(&self) -> bool {
        self.readiness_percentage >= BADGE_THRESHOLD
    }

    /// Circumference of the score ring.
    pub fn ring_circumference() -> f64 {
        2.0 * std::f64::consts::PI * SCORE_RING_RADIUS
    }

    /// Stroke dash offset for the ring: circumference × (1 − pct/100).
    pub fn ring_dash_offset(&self) -> f64 {
        let circumference = Self::ring_circumference();
        circumference - (self.readiness_percentage / 100.0) * circumference
    }

    /// Render the report as plain text for terminal display.
    pub fn render_text(&self) -> String {
        let mut parts = vec![
            format!("Readiness: {} — {}", self.percent_text(), self.readiness_label),
        ];
        if self.has_badge() {
            parts.push("🏅 Great score!".to_string());
        }

        parts.push(String::new());
        parts.push("Strengths:".to_string());
        if self.strengths.is_empty() {
            parts.push("  - None recorded".to_string());
        } else {
            for s in &self.strengths {
                parts.push(format!("  - {s}"));
            }
        }

        parts.push(String::new());
        parts.push("Gaps:".to_string());
        if self.gaps.is_empty() {
            parts.push("  - None — great job!".to_string());
        } else {
            for g in &self.gaps {
                parts.push(format!("  - {g}"));
            }
        }

        parts.push(String::new());
        parts.push("Roadmap:".to_string());
        if self.recommendations.is_empty() {
            parts.push("  Complete the check to see your personalized roadmap.".to_string());
        } else {
            for rec in &self.recommendations {
                let mut line = format!("  - {}", rec.topic);
                if let Some(ref priority) = rec.priority {
                    line.push_str(&format!(" [{priority}]"));
                }
                parts.push(line);
                if let Some(ref why) = rec.why {
                    parts.push(format!("      {why}"));
                }
            }
        }

        parts.join("\n")
    }
}
