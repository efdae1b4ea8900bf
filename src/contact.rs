//! Contact form — a simple submission outside the wizard flow.

use crate::api::types::ContactRequest;
use crate::wizard::profile::is_valid_email;

/// Draft contact form input.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Validate the form, reporting all problems at once. Local validation
    /// failures never reach the network.
    pub fn validate(&self) -> Result<ContactRequest, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("name: Required".to_string());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("email: Required".to_string());
        } else if !is_valid_email(email) {
            errors.push("email: Enter a valid email address".to_string());
        }

        // Phone is optional here, but must be a real number when given.
        let phone = self.phone.trim();
        if !phone.is_empty() && phone.chars().filter(char::is_ascii_digit).count() != 10 {
            errors.push("phone: Enter a 10-digit phone number".to_string());
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push("message: Required".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        })
    }
}
