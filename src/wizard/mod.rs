//! Readiness wizard — the multi-step check flow.
//!
//! The wizard walks a user through profile collection, a remotely
//! generated yes/no question plan, and evaluation into a scored report.
//! [`session::WizardSession`] owns all state for one check; the other
//! modules are its pure building blocks.

pub mod answers;
pub mod plan;
pub mod profile;
pub mod session;
pub mod step;

pub use answers::{Answer, AnswerSet, Progress};
pub use plan::{PlanEntry, QuestionPlan};
pub use profile::{FieldErrors, Profile, ProfileDraft, ProfileField, Status};
pub use session::{Banner, BannerContext, SubmitOutcome, WizardSession};
pub use step::WizardStep;
