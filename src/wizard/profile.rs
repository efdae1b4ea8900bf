//! Profile model and validation rules.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::api::types::PlanRequest;

/// Basic `local@domain.tld` shape; anything stricter belongs server-side.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[A-Za-z]{2,}$").expect("valid email regex"));

/// Shared email shape check (the contact form applies the same rule).
pub(crate) fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Where the user is in their career, as the profile form asks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "3rd_year")]
    ThirdYear,
    #[serde(rename = "4th_year")]
    FourthYear,
    #[serde(rename = "professional")]
    Professional,
}

impl Status {
    pub fn is_student(&self) -> bool {
        matches!(self, Self::ThirdYear | Self::FourthYear)
    }

    /// The coarse `user_type` string the service expects.
    pub fn user_type(&self) -> &'static str {
        if self.is_student() {
            "student"
        } else {
            "working professional"
        }
    }

    /// Parse a form value ("3rd_year", "4th_year", "professional").
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "3rd_year" => Some(Self::ThirdYear),
            "4th_year" => Some(Self::FourthYear),
            "professional" => Some(Self::Professional),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ThirdYear => "3rd_year",
            Self::FourthYear => "4th_year",
            Self::Professional => "professional",
        };
        write!(f, "{s}")
    }
}

/// Fields of the profile form, used as keys for validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Status,
    PrimarySkill,
    Email,
    Phone,
    /// Placement type (students).
    Placement,
    /// Target role (professionals).
    TargetRole,
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Status => "status",
            Self::PrimarySkill => "primary skill",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Placement => "placement type",
            Self::TargetRole => "target role",
        };
        write!(f, "{s}")
    }
}

/// Field-level validation errors from one submit attempt.
///
/// Errors are derived fresh on every attempt; the form clears them on any
/// field edit, so nothing here is ever stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<ProfileField, String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn message(&self, field: ProfileField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: ProfileField, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

/// What the user has typed into the profile form, before validation.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub status: Option<Status>,
    /// Years of experience (professionals; ignored for students).
    pub experience_years: u32,
    pub primary_skill: String,
    /// Target role (professionals).
    pub target_role: String,
    /// Placement type (students).
    pub placement_type: String,
    pub email: String,
    pub phone: String,
}

impl ProfileDraft {
    /// Validate the draft, reporting every violation at once.
    ///
    /// On success returns the canonical [`Profile`]: fields trimmed, the
    /// role picked by status, experience zeroed for students.
    pub fn validate(&self) -> Result<Profile, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.status.is_none() {
            errors.insert(ProfileField::Status, "Required");
        }
        if self.primary_skill.trim().is_empty() {
            errors.insert(ProfileField::PrimarySkill, "Required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(ProfileField::Email, "Required");
        } else if !EMAIL_RE.is_match(email) {
            errors.insert(ProfileField::Email, "Enter a valid email address");
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.insert(ProfileField::Phone, "Required");
        } else if phone.chars().filter(char::is_ascii_digit).count() != 10 {
            errors.insert(ProfileField::Phone, "Enter a 10-digit phone number");
        }

        // Role requirement depends on which form variant the status shows.
        if let Some(status) = self.status {
            if status.is_student() {
                if self.placement_type.trim().is_empty() {
                    errors.insert(ProfileField::Placement, "Required");
                }
            } else if self.target_role.trim().is_empty() {
                errors.insert(ProfileField::TargetRole, "Required");
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let Some(status) = self.status else {
            return Err(errors);
        };
        let target_role = if status.is_student() {
            self.placement_type.trim().to_string()
        } else {
            self.target_role.trim().to_string()
        };
        Ok(Profile {
            status,
            experience_years: if status.is_student() {
                0
            } else {
                self.experience_years
            },
            primary_skill: self.primary_skill.trim().to_string(),
            target_role,
            email: email.to_string(),
            phone: phone.to_string(),
        })
    }
}

/// A validated profile — immutable once created, discarded on retake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub status: Status,
    pub experience_years: u32,
    pub primary_skill: String,
    pub target_role: String,
    pub email: String,
    pub phone: String,
}

impl Profile {
    /// Build the plan request wire payload for this profile.
    pub fn to_plan_request(&self) -> PlanRequest {
        PlanRequest {
            user_type: self.status.user_type().to_string(),
            experience_years: self.experience_years,
            primary_skill: self.primary_skill.clone(),
            target_role: if self.target_role.is_empty() {
                None
            } else {
                Some(self.target_role.clone())
            },
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_student_draft() -> ProfileDraft {
        ProfileDraft {
            status: Some(Status::ThirdYear),
            experience_years: 0,
            primary_skill: "Python".to_string(),
            target_role: String::new(),
            placement_type: "SDE".to_string(),
            email: "a@b.com".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    #[test]
    fn valid_student_draft_produces_profile() {
        let profile = valid_student_draft().validate().unwrap();
        assert_eq!(profile.status, Status::ThirdYear);
        assert_eq!(profile.experience_years, 0);
        assert_eq!(profile.primary_skill, "Python");
        assert_eq!(profile.target_role, "SDE");
        assert_eq!(profile.status.user_type(), "student");
    }

    #[test]
    fn professional_uses_target_role_and_keeps_experience() {
        let draft = ProfileDraft {
            status: Some(Status::Professional),
            experience_years: 4,
            primary_skill: "Go".to_string(),
            target_role: "Backend Engineer".to_string(),
            placement_type: String::new(),
            email: "dev@example.org".to_string(),
            phone: "91-98765-43210".to_string(), // 10 digits after stripping
        };
        let profile = draft.validate().unwrap();
        assert_eq!(profile.experience_years, 4);
        assert_eq!(profile.target_role, "Backend Engineer");
        assert_eq!(profile.status.user_type(), "working professional");
    }

    #[test]
    fn student_experience_is_zeroed() {
        let mut draft = valid_student_draft();
        draft.experience_years = 7;
        assert_eq!(draft.validate().unwrap().experience_years, 0);
    }

    #[test]
    fn missing_single_field_reports_exactly_that_field() {
        let mut draft = valid_student_draft();
        draft.primary_skill = "   ".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(ProfileField::PrimarySkill), Some("Required"));
    }

    #[test]
    fn all_violations_reported_together() {
        let errors = ProfileDraft::default().validate().unwrap_err();
        assert!(errors.message(ProfileField::Status).is_some());
        assert!(errors.message(ProfileField::PrimarySkill).is_some());
        assert!(errors.message(ProfileField::Email).is_some());
        assert!(errors.message(ProfileField::Phone).is_some());
        // Role variant unknown without a status, so no role error yet.
        assert!(errors.message(ProfileField::Placement).is_none());
        assert!(errors.message(ProfileField::TargetRole).is_none());
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["plainaddress", "a@b", "a@b.c", "two@@at.com", "a@b.c0m"] {
            let mut draft = valid_student_draft();
            draft.email = bad.to_string();
            let errors = draft.validate().unwrap_err();
            assert!(
                errors.message(ProfileField::Email).is_some(),
                "{bad} should fail"
            );
        }
        let mut draft = valid_student_draft();
        draft.email = "first.last@sub.domain.io".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn phone_requires_ten_digits_after_stripping() {
        let mut draft = valid_student_draft();
        draft.phone = "(987) 654-3210".to_string();
        assert!(draft.validate().is_ok());

        draft.phone = "12345".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.message(ProfileField::Phone),
            Some("Enter a 10-digit phone number")
        );

        draft.phone = "98765432109".to_string(); // 11 digits
        assert!(draft.validate().is_err());
    }

    #[test]
    fn student_requires_placement_professional_requires_role() {
        let mut student = valid_student_draft();
        student.placement_type = String::new();
        let errors = student.validate().unwrap_err();
        assert_eq!(errors.message(ProfileField::Placement), Some("Required"));
        assert!(errors.message(ProfileField::TargetRole).is_none());

        let professional = ProfileDraft {
            status: Some(Status::Professional),
            target_role: String::new(),
            ..valid_student_draft()
        };
        let errors = professional.validate().unwrap_err();
        assert_eq!(errors.message(ProfileField::TargetRole), Some("Required"));
        assert!(errors.message(ProfileField::Placement).is_none());
    }

    #[test]
    fn plan_request_payload() {
        let profile = valid_student_draft().validate().unwrap();
        let request = profile.to_plan_request();
        assert_eq!(request.user_type, "student");
        assert_eq!(request.experience_years, 0);
        assert_eq!(request.target_role.as_deref(), Some("SDE"));
        assert_eq!(request.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn status_parse_and_display_round_trip() {
        for (text, status) in [
            ("3rd_year", Status::ThirdYear),
            ("4th_year", Status::FourthYear),
            ("professional", Status::Professional),
        ] {
            assert_eq!(Status::parse(text), Some(status));
            assert_eq!(format!("{status}"), text);
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{text}\""));
        }
        assert_eq!(Status::parse("junior"), None);
    }
}
