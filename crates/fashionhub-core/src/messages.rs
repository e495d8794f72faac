//! Outbound messages handed to the notification collaborator.

use serde::{Deserialize, Serialize};

use crate::CoreError;

labeled_enum! {
    pub enum DigestFrequency ("digest frequency") {
        Daily => "daily",
        Weekly => "weekly",
    }
}

/// A direct message to the owner of a brief or a responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub recipient_email: String,
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Blank message addressed to `recipient_email` with the subject
    /// pre-filled as `Re: <brief title>`.
    #[must_use]
    pub fn for_brief(recipient_email: &str, brief_title: &str) -> Self {
        Self {
            recipient_email: recipient_email.to_string(),
            sender_name: String::new(),
            sender_email: String::new(),
            subject: format!("Re: {brief_title}"),
            message: String::new(),
        }
    }

    /// Plain-text body with the sender line the mailer prepends.
    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "From: {} ({})\n\n{}",
            self.sender_name, self.sender_email, self.message
        )
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when any field is blank or an address
    /// has no `@`.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("recipient email", &self.recipient_email),
            ("your name", &self.sender_name),
            ("your email", &self.sender_email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{name} is required")));
            }
        }
        for (name, value) in [
            ("recipient email", &self.recipient_email),
            ("your email", &self.sender_email),
        ] {
            if !value.contains('@') {
                return Err(CoreError::Validation(format!(
                    "{name} is not an email address: {value}"
                )));
            }
        }
        Ok(())
    }
}
