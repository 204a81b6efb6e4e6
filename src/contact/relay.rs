use http::{header::ACCEPT, StatusCode};
use serde::{Deserialize, Serialize};

use super::{ContactSubmission, SubmitError, Submitter};
use crate::config::RelayConfig;

/// Forwards contact submissions to the third-party forms service.
#[derive(Debug, Clone)]
pub struct FormRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

#[derive(Serialize, Debug, PartialEq)]
struct RelayPayload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    #[serde(rename = "projectType", skip_serializing_if = "Option::is_none")]
    project_type: Option<&'a str>,
    #[serde(rename = "_subject")]
    subject: String,
    #[serde(rename = "_replyto")]
    reply_to: &'a str,
    #[serde(rename = "_next", skip_serializing_if = "Option::is_none")]
    next: Option<&'a str>,
}

#[derive(Deserialize, Debug, Default)]
struct RelayErrorBody {
    error: Option<String>,
    #[serde(default)]
    errors: Vec<RelayFieldError>,
}

#[derive(Deserialize, Debug)]
struct RelayFieldError {
    message: String,
}

impl FormRelay {
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn payload<'a>(&'a self, submission: &'a ContactSubmission) -> RelayPayload<'a> {
        RelayPayload {
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
            project_type: submission.project_type.as_deref(),
            subject: format!("New portfolio enquiry from {}", submission.name),
            reply_to: &submission.email,
            next: self.config.redirect.as_deref(),
        }
    }

    pub async fn forward(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let res = self
            .client
            .post(&self.config.endpoint)
            .header(ACCEPT, "application/json")
            .json(&self.payload(submission))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmitError::TimedOut
                } else {
                    SubmitError::Transport(e.to_string())
                }
            })?;
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        tracing::info!(status = status.as_u16(), "forms service answered");
        classify_response(status, &body)
    }
}

impl Submitter for FormRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        self.forward(submission).await
    }
}

/// Maps the forms service's answer onto the submission outcome.
pub fn classify_response(status: StatusCode, body: &str) -> Result<(), SubmitError> {
    if status.is_success() {
        return Ok(());
    }
    match failure_reason(body) {
        Some(reason) => Err(SubmitError::Rejected(reason)),
        None => Err(SubmitError::RejectedWithoutReason(status.as_u16())),
    }
}

fn failure_reason(body: &str) -> Option<String> {
    let parsed: RelayErrorBody = serde_json::from_str(body).ok()?;
    if let Some(error) = parsed.error.filter(|e| !e.trim().is_empty()) {
        return Some(error);
    }
    let messages = parsed
        .errors
        .into_iter()
        .map(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .collect::<Vec<_>>();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(project_type: Option<&str>) -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Hello, I'd like to discuss a project with you.".to_string(),
            project_type: project_type.map(str::to_string),
        }
    }

    #[test]
    fn test_success_statuses() {
        assert_eq!(classify_response(StatusCode::OK, ""), Ok(()));
        assert_eq!(classify_response(StatusCode::ACCEPTED, "{}"), Ok(()));
    }

    #[test]
    fn test_error_field_is_surfaced() {
        assert_eq!(
            classify_response(StatusCode::TOO_MANY_REQUESTS, r#"{"error": "rate limited"}"#),
            Err(SubmitError::Rejected("rate limited".to_string()))
        );
    }

    #[test]
    fn test_formspree_error_list_is_joined() {
        let body = r#"{"errors": [{"code": "TYPE_EMAIL", "message": "should be an email"}, {"message": "form not found"}]}"#;
        assert_eq!(
            classify_response(StatusCode::UNPROCESSABLE_ENTITY, body),
            Err(SubmitError::Rejected(
                "should be an email; form not found".to_string()
            ))
        );
    }

    #[test]
    fn test_unstructured_failure() {
        assert_eq!(
            classify_response(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>"),
            Err(SubmitError::RejectedWithoutReason(502))
        );
        assert_eq!(
            classify_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": ""}"#),
            Err(SubmitError::RejectedWithoutReason(500))
        );
    }

    #[test]
    fn test_payload_metadata() {
        let relay = FormRelay::new(RelayConfig {
            redirect: Some("https://example.com/thanks".to_string()),
            ..RelayConfig::default()
        })
        .unwrap();
        let sub = submission(Some("Consulting"));
        let json = serde_json::to_value(relay.payload(&sub)).unwrap();
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["projectType"], "Consulting");
        assert_eq!(json["_subject"], "New portfolio enquiry from Jane Doe");
        assert_eq!(json["_replyto"], "jane@example.com");
        assert_eq!(json["_next"], "https://example.com/thanks");
    }

    #[test]
    fn test_payload_omits_absent_fields() {
        let relay = FormRelay::new(RelayConfig::default()).unwrap();
        let sub = submission(None);
        let json = serde_json::to_value(relay.payload(&sub)).unwrap();
        assert!(json.get("projectType").is_none());
        assert!(json.get("_next").is_none());
    }
}
