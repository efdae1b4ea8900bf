//! WizardSession — owns the wizard state and coordinates validation, the
//! remote plan/evaluate calls, and step transitions.

use std::sync::Arc;

use crate::api::ReadinessApi;
use crate::error::WizardError;
use crate::report::Report;

use super::answers::{Answer, AnswerSet, Progress};
use super::plan::QuestionPlan;
use super::profile::{FieldErrors, Profile, ProfileDraft};
use super::step::WizardStep;

/// Which remote call a banner belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerContext {
    Plan,
    Evaluate,
}

/// A dismissible error banner shown on the step the wizard fell back to.
#[derive(Debug, Clone)]
pub struct Banner {
    pub context: BannerContext,
    pub message: String,
    /// Whether re-submitting unchanged input may succeed.
    pub retryable: bool,
}

/// Outcome of a submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The wizard advanced to the next step.
    Advanced,
    /// Local validation failed; no transition, no network call.
    Invalid(FieldErrors),
    /// The remote call failed; the wizard fell back and set a banner.
    RemoteFailed,
}

/// The wizard state machine instance, one per check.
///
/// All collected data lives here — nothing is persisted. Transitions take
/// `&mut self`, so at most one plan or evaluate call can be in flight: the
/// exclusive borrow is the "disable the submit button" rule.
pub struct WizardSession {
    api: Arc<dyn ReadinessApi>,
    step: WizardStep,
    profile: Option<Profile>,
    plan: Option<QuestionPlan>,
    answers: AnswerSet,
    report: Option<Report>,
    banner: Option<Banner>,
}

impl WizardSession {
    pub fn new(api: Arc<dyn ReadinessApi>) -> Self {
        Self {
            api,
            step: WizardStep::default(),
            profile: None,
            plan: None,
            answers: AnswerSet::default(),
            report: None,
            banner: None,
        }
    }

    // ── Read accessors ───────────────────────────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn plan(&self) -> Option<&QuestionPlan> {
        self.plan.as_ref()
    }

    pub fn answer(&self, index: usize) -> Option<Answer> {
        self.answers.get(index)
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Progress through the question list ("A of T answered").
    pub fn progress(&self) -> Progress {
        let total = self.plan.as_ref().map(QuestionPlan::len).unwrap_or(0);
        Progress::new(self.answers.answered(), total)
    }

    /// Whether the evaluation submit control is enabled.
    pub fn can_submit_answers(&self) -> bool {
        self.step == WizardStep::Questions && self.progress().is_complete()
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Start the check: Intro → Profile.
    pub fn start(&mut self) -> Result<(), WizardError> {
        self.guard("start", WizardStep::Intro)?;
        self.set_step(WizardStep::Profile);
        Ok(())
    }

    /// Submit the profile form: validate, then fetch the question plan.
    ///
    /// Field errors keep the wizard in Profile without touching the
    /// network. A failed fetch falls back to Profile with a banner.
    pub async fn submit_profile(
        &mut self,
        draft: ProfileDraft,
    ) -> Result<SubmitOutcome, WizardError> {
        self.guard("submit profile", WizardStep::Profile)?;
        self.banner = None;

        let profile = match draft.validate() {
            Ok(profile) => profile,
            Err(errors) => return Ok(SubmitOutcome::Invalid(errors)),
        };
        let request = profile.to_plan_request();
        self.profile = Some(profile);
        self.set_step(WizardStep::PlanLoading);

        let result = self.api.fetch_plan(request).await;
        match result {
            Ok(resp) => {
                let plan = QuestionPlan::normalize(resp.evaluation_plan);
                tracing::info!(questions = plan.len(), "Evaluation plan received");
                self.plan = Some(plan);
                self.answers.clear();
                self.set_step(WizardStep::Questions);
                Ok(SubmitOutcome::Advanced)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Plan request failed");
                self.banner = Some(Banner {
                    context: BannerContext::Plan,
                    message: e.user_message(),
                    retryable: e.is_retryable(),
                });
                self.set_step(WizardStep::Profile);
                Ok(SubmitOutcome::RemoteFailed)
            }
        }
    }

    /// Record an answer for one question. Overwrites any previous answer
    /// at that index.
    pub fn select_answer(&mut self, index: usize, answer: Answer) -> Result<Progress, WizardError> {
        self.guard("answer", WizardStep::Questions)?;
        let total = self.plan.as_ref().map(QuestionPlan::len).unwrap_or(0);
        if index >= total {
            return Err(WizardError::QuestionOutOfRange { index, total });
        }
        self.answers.set(index, answer);
        Ok(self.progress())
    }

    /// Submit the answers for evaluation: Questions → EvalLoading →
    /// Results, falling back to Questions with a banner on failure.
    ///
    /// Rejected while any question lacks an explicit answer; the "No"
    /// default applies only inside the wire payload.
    pub async fn submit_answers(&mut self) -> Result<SubmitOutcome, WizardError> {
        self.guard("submit answers", WizardStep::Questions)?;
        let progress = self.progress();
        if !progress.is_complete() {
            return Err(WizardError::Unanswered {
                answered: progress.answered,
                total: progress.total,
            });
        }
        let Some(plan) = self.plan.as_ref() else {
            return Err(WizardError::WrongStep {
                action: "submit answers",
                step: self.step.to_string(),
            });
        };
        let request = plan.to_evaluate_request(&self.answers);

        self.banner = None;
        self.set_step(WizardStep::EvalLoading);

        let result = self.api.evaluate(request).await;
        match result {
            Ok(resp) => {
                let report = Report::from_response(resp);
                tracing::info!(
                    score = report.readiness_percentage,
                    label = %report.readiness_label,
                    "Evaluation complete"
                );
                self.report = Some(report);
                self.set_step(WizardStep::Results);
                Ok(SubmitOutcome::Advanced)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Evaluate request failed");
                self.banner = Some(Banner {
                    context: BannerContext::Evaluate,
                    message: e.user_message(),
                    retryable: e.is_retryable(),
                });
                self.set_step(WizardStep::Questions);
                Ok(SubmitOutcome::RemoteFailed)
            }
        }
    }

    /// Navigate back to an earlier step. All collected data is preserved;
    /// re-entering a step never refetches remote data.
    pub fn back(&mut self, target: WizardStep) -> Result<(), WizardError> {
        if !self.step.can_go_back_to(target) {
            return Err(WizardError::InvalidBack {
                from: self.step.to_string(),
                to: target.to_string(),
            });
        }
        self.set_step(target);
        Ok(())
    }

    /// Retake: Results → Intro, discarding everything collected.
    pub fn retake(&mut self) -> Result<(), WizardError> {
        self.guard("retake", WizardStep::Results)?;
        self.profile = None;
        self.plan = None;
        self.answers.clear();
        self.report = None;
        self.banner = None;
        self.set_step(WizardStep::Intro);
        Ok(())
    }

    fn guard(&self, action: &'static str, expected: WizardStep) -> Result<(), WizardError> {
        if self.step != expected {
            return Err(WizardError::WrongStep {
                action,
                step: self.step.to_string(),
            });
        }
        Ok(())
    }

    fn set_step(&mut self, target: WizardStep) {
        tracing::debug!(from = %self.step, to = %target, "Wizard transition");
        self.step = target;
    }
}
