// Fixture models
//
// Fixtures are the oracle side of every assertion: read-only JSON under
// data/ holding the search city, the expected form-alert strings, and the
// member records the validation scenarios post. Key names follow the files
// as checked in, which predate this suite.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Search city plus the three expected booking-form alert strings.
#[derive(Debug, Clone, Deserialize)]
pub struct CityFixture {
    #[serde(rename = "city name")]
    pub city_name: String,
    #[serde(rename = "firstNameAlert")]
    pub first_name_alert: String,
    #[serde(rename = "lastNameAlert")]
    pub last_name_alert: String,
    #[serde(rename = "emailAlert")]
    pub email_alert: String,
}

impl CityFixture {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Validation-endpoint fixture: the deep-link base URL plus sample member
/// records.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFixture {
    pub membership_agreement_url: String,
    #[serde(rename = "testData")]
    pub test_data: MemberPayload,
    #[serde(rename = "anotherTestData")]
    pub another_test_data: MemberPayload,
    #[serde(rename = "blankEmailTestData")]
    pub blank_email_test_data: MemberPayload,
}

impl ApiFixture {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// One member record posted to the validation endpoint.
///
/// The comparison fields are typed; whatever else a fixture carries rides
/// along in `extra` and round-trips untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_email: Option<String>,
    pub member_first_name: String,
    pub member_street_address: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MemberPayload {
    /// Drops a blank `member_email` so neither the blob nor the POST body
    /// carries the field at all.
    pub fn without_blank_email(mut self) -> Self {
        if self.member_email.as_deref() == Some("") {
            self.member_email = None;
        }
        self
    }

    /// The record as a JSON object, the shape the blob encoder takes.
    pub fn to_value(&self) -> Value {
        // Strings and maps only; this serialization cannot fail.
        serde_json::to_value(self).expect("member payload serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITY_JSON: &str = r#"{
        "city name": "Boca Raton",
        "firstNameAlert": "First Name is required",
        "lastNameAlert": "Last Name is required",
        "emailAlert": "Email is required"
    }"#;

    const MEMBER_JSON: &str = r#"{
        "member_email": "jane.doe@example.com",
        "member_first_name": "Jane",
        "member_last_name": "Doe",
        "member_street_address": "1120 Glades Rd",
        "member_zip": "33431"
    }"#;

    #[test]
    fn city_fixture_maps_the_checked_in_key_names() {
        let fixture: CityFixture = serde_json::from_str(CITY_JSON).unwrap();
        assert_eq!(fixture.city_name, "Boca Raton");
        assert_eq!(fixture.first_name_alert, "First Name is required");
        assert_eq!(fixture.last_name_alert, "Last Name is required");
        assert_eq!(fixture.email_alert, "Email is required");
    }

    #[test]
    fn member_payload_keeps_unknown_fields() {
        let payload: MemberPayload = serde_json::from_str(MEMBER_JSON).unwrap();
        assert_eq!(payload.member_email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(payload.member_first_name, "Jane");
        assert_eq!(payload.member_street_address, "1120 Glades Rd");
        assert_eq!(payload.extra["member_last_name"], "Doe");
        assert_eq!(payload.extra["member_zip"], "33431");

        let round_tripped = payload.to_value();
        assert_eq!(round_tripped["member_zip"], "33431");
    }

    #[test]
    fn blank_email_is_removed() {
        let mut payload: MemberPayload = serde_json::from_str(MEMBER_JSON).unwrap();
        payload.member_email = Some(String::new());

        let cleaned = payload.without_blank_email();

        assert!(cleaned.member_email.is_none());
        let json = serde_json::to_string(&cleaned).unwrap();
        assert!(!json.contains("member_email"), "serialized form still carries the key: {json}");
    }

    #[test]
    fn present_email_survives_the_blank_filter() {
        let payload: MemberPayload = serde_json::from_str(MEMBER_JSON).unwrap();
        let cleaned = payload.without_blank_email();
        assert_eq!(cleaned.member_email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn absent_email_stays_absent() {
        let payload: MemberPayload =
            serde_json::from_str(r#"{"member_first_name": "A", "member_street_address": "B"}"#).unwrap();
        assert!(payload.member_email.is_none());
        assert!(payload.without_blank_email().member_email.is_none());
    }
}
