//! Answer tracking and progress.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A yes/no answer to one plan question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// Parse user input, case-insensitively ("y"/"yes"/"n"/"no").
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(Self::Yes),
            "n" | "no" => Some(Self::No),
            _ => None,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Explicit answers keyed by question index.
///
/// Selecting an answer for an already-answered index overwrites it. An
/// unanswered index stays absent until the evaluate payload is built, where
/// it defaults to "No" — see [`AnswerSet::wire_answer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<usize, Answer>,
}

impl AnswerSet {
    pub fn set(&mut self, index: usize, answer: Answer) {
        self.answers.insert(index, answer);
    }

    pub fn get(&self, index: usize) -> Option<Answer> {
        self.answers.get(&index).copied()
    }

    /// Number of explicitly answered questions.
    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// The wire value for an index: the explicit answer, or "No".
    pub fn wire_answer(&self, index: usize) -> &'static str {
        self.get(index).unwrap_or(Answer::No).as_str()
    }
}

/// Progress through the question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(answered: usize, total: usize) -> Self {
        Self { answered, total }
    }

    /// Fraction answered, 0 when there are no questions.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.answered as f64 / self.total as f64
        }
    }

    /// Proportional fill, in percent.
    pub fn fill_percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    /// Whether every question has an explicit answer — the submit guard.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} answered", self.answered, self.total)
    }
}
