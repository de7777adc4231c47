// Booking-validation endpoint client
//
// The member record travels twice in one request: base64-encoded inside the
// URL path and as the JSON body. The endpoint decodes the path blob and
// echoes the record it saw, which is what the scenarios diff against.

use crate::blob;
use crate::error::{Error, Result};
use crate::fixtures::MemberPayload;
use serde_json::Value;

/// Client for the membership-agreement validation endpoint.
pub struct ValidationClient {
    http: reqwest::Client,
    base_url: String,
}

impl ValidationClient {
    /// `base_url` is the full validation prefix; the percent-encoded blob
    /// is appended to it verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Encodes `payload` into the deep link and posts the same record as
    /// the JSON body. A non-2xx answer is a hard failure.
    pub async fn post_member(&self, payload: &MemberPayload) -> Result<Value> {
        let url = blob::deep_link_encoded(&self.base_url, &payload.to_value())?;
        tracing::info!("posting the member record to the validation endpoint");
        let response = self.http.post(&url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!("validation endpoint answered {status}");
            return Err(Error::Http {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.json::<Value>().await?)
    }
}

/// Field mismatches between a validation response and the posted record.
///
/// An absent email on the posted record passes whatever the response holds;
/// a present one must be echoed equal. First name and street address must
/// always match.
pub fn diff_response(expected: &MemberPayload, response: &Value) -> Vec<String> {
    let mut mismatches = Vec::new();

    if let Some(email) = expected.member_email.as_deref() {
        if response.get("member_email").and_then(Value::as_str) != Some(email) {
            mismatches.push(format!(
                "member_email: expected '{email}', response had {:?}",
                response.get("member_email")
            ));
        }
    }

    for (field, expected_value) in [
        ("member_first_name", expected.member_first_name.as_str()),
        ("member_street_address", expected.member_street_address.as_str()),
    ] {
        if response.get(field).and_then(Value::as_str) != Some(expected_value) {
            mismatches.push(format!(
                "{field}: expected '{expected_value}', response had {:?}",
                response.get(field)
            ));
        }
    }

    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> MemberPayload {
        serde_json::from_value(json!({
            "member_email": "jane.doe@example.com",
            "member_first_name": "Jane",
            "member_street_address": "1120 Glades Rd",
            "member_zip": "33431",
        }))
        .unwrap()
    }

    #[test]
    fn matching_response_has_no_mismatches() {
        let payload = sample();
        let response = payload.to_value();
        assert!(diff_response(&payload, &response).is_empty());
    }

    #[test]
    fn wrong_first_name_is_reported() {
        let payload = sample();
        let mut response = payload.to_value();
        response["member_first_name"] = json!("Janet");

        let mismatches = diff_response(&payload, &response);

        assert_eq!(mismatches.len(), 1);
        assert!(mismatches[0].starts_with("member_first_name"), "{mismatches:?}");
    }

    #[test]
    fn wrong_street_address_is_reported() {
        let payload = sample();
        let mut response = payload.to_value();
        response["member_street_address"] = json!("elsewhere");

        assert_eq!(diff_response(&payload, &response).len(), 1);
    }

    #[test]
    fn missing_echoed_email_is_reported_when_expected() {
        let payload = sample();
        let mut response = payload.to_value();
        response.as_object_mut().unwrap().remove("member_email");

        let mismatches = diff_response(&payload, &response);

        assert_eq!(mismatches.len(), 1);
        assert!(mismatches[0].starts_with("member_email"), "{mismatches:?}");
    }

    #[test]
    fn absent_expected_email_passes_any_response() {
        let payload = MemberPayload {
            member_email: None,
            ..sample()
        };
        let mut response = payload.to_value();
        response["member_email"] = json!("whatever@example.com");

        assert!(diff_response(&payload, &response).is_empty());
    }

    #[test]
    fn every_mismatch_is_collected() {
        let payload = sample();
        let response = json!({});

        let mismatches = diff_response(&payload, &response);

        assert_eq!(mismatches.len(), 3);
    }
}
