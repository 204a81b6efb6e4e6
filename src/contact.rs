mod form;
#[cfg(feature = "ssr")]
pub mod relay;
mod validate;

pub use form::{
    run_submission, ContactForm, FormSlot, SubmissionStatus, CONFIRMATION_DISPLAY, SUBMIT_TIMEOUT,
};
pub use validate::*;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub static FALLBACK_FAILURE: &str =
    "Failed to send message. Please try again or email me directly.";
pub static TIMEOUT_FAILURE: &str = "The request timed out. Please try again.";

/// Options offered by the project type select. Any other value is accepted too.
pub static PROJECT_TYPES: [&str; 5] = [
    "Web Application",
    "Mobile App",
    "UI/UX Design",
    "Consulting",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Message,
    ProjectType,
}

impl Field {
    /// Fields with validation rules, in the order the user should fix them.
    pub const VALIDATED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
            Field::ProjectType => "projectType",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
            Field::ProjectType => "Project type",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contact field: {0}")]
pub struct UnknownField(String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "message" => Ok(Field::Message),
            "projectType" => Ok(Field::ProjectType),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// The values sent to the forms service for one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}

impl ContactSubmission {
    /// First failing field in [`Field::VALIDATED`] order, with its message.
    pub fn first_error(&self) -> Option<(Field, &'static str)> {
        Field::VALIDATED.into_iter().find_map(|field| {
            let value = match field {
                Field::Name => &self.name,
                Field::Email => &self.email,
                Field::Message => &self.message,
                Field::ProjectType => return None,
            };
            validate(field, value).map(|e| (field, e))
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(String),
    #[error("forms service rejected the message with status {0}")]
    RejectedWithoutReason(u16),
    #[error("couldn't reach the forms service: {0}")]
    Transport(String),
    #[error("forms service didn't answer in time")]
    TimedOut,
}

impl SubmitError {
    /// The text shown to the user: the service's own reason when it gave one.
    pub fn user_reason(&self) -> String {
        match self {
            SubmitError::Rejected(reason) if !reason.trim().is_empty() => reason.clone(),
            SubmitError::TimedOut => TIMEOUT_FAILURE.to_string(),
            _ => FALLBACK_FAILURE.to_string(),
        }
    }
}

/// Why a submit attempt never reached the forms service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("{0} needs attention")]
    Invalid(Field),
    #[error("a message is already being sent")]
    InFlight,
    #[error("the confirmation is still showing")]
    ConfirmationShowing,
}

/// Delivers a contact submission to whoever relays it to the site owner.
#[allow(async_fn_in_trait)]
pub trait Submitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in [Field::Name, Field::Email, Field::Message, Field::ProjectType] {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn test_user_reason() {
        assert_eq!(
            SubmitError::Rejected("rate limited".to_string()).user_reason(),
            "rate limited"
        );
        assert_eq!(
            SubmitError::Rejected("  ".to_string()).user_reason(),
            FALLBACK_FAILURE
        );
        assert_eq!(
            SubmitError::RejectedWithoutReason(500).user_reason(),
            FALLBACK_FAILURE
        );
        assert_eq!(
            SubmitError::Transport("connection reset".to_string()).user_reason(),
            FALLBACK_FAILURE
        );
        assert!(SubmitError::TimedOut.user_reason().contains("try again"));
    }

    #[test]
    fn test_submission_first_error() {
        let mut submission = ContactSubmission {
            name: "J".to_string(),
            email: "nope".to_string(),
            message: String::new(),
            project_type: None,
        };
        assert_eq!(submission.first_error(), Some((Field::Name, NAME_TOO_SHORT)));
        submission.name = "Jane".to_string();
        assert_eq!(submission.first_error(), Some((Field::Email, EMAIL_INVALID)));
        submission.email = "jane@example.com".to_string();
        assert_eq!(
            submission.first_error(),
            Some((Field::Message, MESSAGE_REQUIRED))
        );
        submission.message = "Long enough message".to_string();
        assert_eq!(submission.first_error(), None);
    }

    #[test]
    fn test_submission_serializes_camel_case() {
        let submission = ContactSubmission {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello there, friend".to_string(),
            project_type: Some("Consulting".to_string()),
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["projectType"], "Consulting");

        let without = ContactSubmission {
            project_type: None,
            ..submission
        };
        let json = serde_json::to_value(&without).unwrap();
        assert!(json.get("projectType").is_none());
    }
}
