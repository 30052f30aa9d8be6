use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use super::{SignupKind, SignupRecord};

pub const FAILURE_ALERT: &str = "There was an error submitting your form. Please try again.";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("webhook responded with status {0}")]
    Rejected(u16),
}

/// JSON body posted to the webhook: the record's fields plus `type` and
/// `timestamp`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WebhookPayload<R: SignupRecord> {
    #[serde(flatten)]
    pub record: R,
    #[serde(rename = "type")]
    pub kind: SignupKind,
    pub timestamp: String,
}

impl<R: SignupRecord> WebhookPayload<R> {
    pub fn new(record: R, at: DateTime<Utc>) -> Self {
        Self {
            record,
            kind: R::KIND,
            // Same shape as JS toISOString(): 2025-01-31T09:15:00.000Z
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Posts `payload` once. Any non-2xx answer counts as failure; nothing is
/// retried.
pub async fn deliver<R: SignupRecord>(
    url: &str,
    payload: &WebhookPayload<R>,
) -> Result<(), SubmitError> {
    debug!("Posting {} signup to webhook", payload.kind.as_str());
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .json(payload)?
        .send()
        .await?;

    if !response.ok() {
        return Err(SubmitError::Rejected(response.status()));
    }
    info!("Webhook accepted {} signup", payload.kind.as_str());
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::signup::student::StudentSignup;
    use crate::signup::vendor::VendorSignup;

    #[test]
    fn student_payload_shape() {
        let at = Utc.with_ymd_and_hms(2025, 1, 31, 9, 15, 0).unwrap();
        let record = StudentSignup {
            first_name: "Ada".into(),
            last_name: "Okoye".into(),
            email: "ada@example.com".into(),
            hall: "Zik Hall".into(),
        };
        let json = serde_json::to_value(WebhookPayload::new(record, at)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Ada",
                "lastName": "Okoye",
                "email": "ada@example.com",
                "hall": "Zik Hall",
                "type": "student",
                "timestamp": "2025-01-31T09:15:00.000Z",
            })
        );
    }

    #[test]
    fn vendor_payload_is_tagged_vendor() {
        let payload = WebhookPayload::new(VendorSignup::default(), Utc::now());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "vendor");
        assert_eq!(json["businessType"], "");
        assert!(payload.timestamp.ends_with('Z'));
    }

    #[test]
    fn rejection_mentions_status() {
        assert_eq!(
            SubmitError::Rejected(502).to_string(),
            "webhook responded with status 502"
        );
    }
}
