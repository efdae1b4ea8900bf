//! Wizard step machine — tracks which step of the readiness check the user
//! is on.

use serde::{Deserialize, Serialize};

/// The steps of the readiness wizard.
///
/// Progresses linearly: Intro → Profile → PlanLoading → Questions →
/// EvalLoading → Results. There is no terminal step; a retake from Results
/// returns to Intro. Failed remote calls fall back from a loading step to
/// the form that triggered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Intro,
    Profile,
    PlanLoading,
    Questions,
    EvalLoading,
    Results,
}

impl WizardStep {
    /// Zero-based position in the linear flow.
    pub fn index(&self) -> usize {
        match self {
            Self::Intro => 0,
            Self::Profile => 1,
            Self::PlanLoading => 2,
            Self::Questions => 3,
            Self::EvalLoading => 4,
            Self::Results => 5,
        }
    }

    /// Whether a remote call is in flight on this step.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::PlanLoading | Self::EvalLoading)
    }

    /// Check if a forward transition from `self` to `target` is valid.
    ///
    /// Includes the failure fallbacks (loading step back to its form) and
    /// the retake transition (Results to Intro). Back navigation is a
    /// separate rule — see [`WizardStep::can_go_back_to`].
    pub fn can_transition_to(&self, target: WizardStep) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Intro, Profile)
                | (Profile, PlanLoading)
                | (PlanLoading, Questions)
                | (PlanLoading, Profile)
                | (Questions, EvalLoading)
                | (EvalLoading, Results)
                | (EvalLoading, Questions)
                | (Results, Intro)
        )
    }

    /// Check if explicit back navigation from `self` to `target` is valid:
    /// both steps interactive and `target` strictly earlier. Loading steps
    /// lock navigation until the in-flight request settles.
    pub fn can_go_back_to(&self, target: WizardStep) -> bool {
        !self.is_loading() && !target.is_loading() && target.index() < self.index()
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Intro
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Intro => "intro",
            Self::Profile => "profile",
            Self::PlanLoading => "plan_loading",
            Self::Questions => "questions",
            Self::EvalLoading => "eval_loading",
            Self::Results => "results",
        };
        write!(f, "{s}")
    }
}
