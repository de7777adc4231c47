// Booking deep-link blob encoding
//
// A "blob" is the base64 of a JSON record, appended to a booking URL to
// deep-link into a pre-filled form. Only JSON objects are valid sources;
// the validation endpoint rejects anything else, so we do too, before any
// request goes out.

use crate::error::{Error, Result};
use base64::Engine as _;
use base64::prelude::BASE64_STANDARD;
use serde_json::Value;

/// Serializes `data` to JSON and returns the base64 of those bytes.
///
/// Null and non-record values are rejected with `InvalidInput`.
pub fn encode(data: &Value) -> Result<String> {
    if !data.is_object() {
        return Err(Error::InvalidInput(format!(
            "blob source must be a JSON object, got {}",
            json_kind(data)
        )));
    }
    let json = serde_json::to_string(data)?;
    Ok(BASE64_STANDARD.encode(json))
}

/// Builds the deep link with the blob appended to `base` verbatim.
pub fn deep_link(base: &str, data: &Value) -> Result<String> {
    Ok(format!("{base}{}", encode(data)?))
}

/// Builds the deep link with the blob percent-encoded for URL embedding.
/// This is the form the validation endpoint receives; base64 padding and
/// the `+`/`/` alphabet characters are not path-safe raw.
pub fn deep_link_encoded(base: &str, data: &Value) -> Result<String> {
    Ok(format!("{base}{}", urlencoding::encode(&encode(data)?)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encoded_blob_decodes_back_to_the_record() {
        let record = json!({
            "member_email": "jane.doe@example.com",
            "member_first_name": "Jane",
            "member_zip": "33431",
        });

        let blob = encode(&record).unwrap();
        let decoded = BASE64_STANDARD.decode(&blob).unwrap();

        assert_eq!(
            serde_json::from_slice::<Value>(&decoded).unwrap(),
            record,
            "decoding the blob must reproduce the record"
        );
    }

    #[test]
    fn null_is_rejected() {
        let err = encode(&Value::Null).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)), "got {err:?}");
        assert!(err.to_string().contains("null"));
    }

    #[test]
    fn non_record_values_are_rejected() {
        for value in [json!([1, 2, 3]), json!("text"), json!(42), json!(true)] {
            let err = encode(&value).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "value {value} got {err:?}");
        }
    }

    #[test]
    fn empty_record_is_a_valid_source() {
        let blob = encode(&json!({})).unwrap();
        assert_eq!(BASE64_STANDARD.decode(&blob).unwrap(), b"{}");
    }

    #[test]
    fn deep_link_appends_the_raw_blob() {
        let base = "https://api.example.com/membership-agreement/validate/";
        let record = json!({"ab": 1});

        let link = deep_link(base, &record).unwrap();

        let tail = link.strip_prefix(base).expect("link keeps the base prefix");
        assert_eq!(tail, BASE64_STANDARD.encode(r#"{"ab":1}"#));
    }

    #[test]
    fn encoded_deep_link_percent_encodes_padding() {
        let base = "https://api.example.com/membership-agreement/validate/";
        // 8 bytes of JSON, so the base64 carries one '=' of padding.
        let record = json!({"ab": 1});

        let link = deep_link_encoded(base, &record).unwrap();

        assert!(link.ends_with("%3D"), "padding must be percent-encoded: {link}");
        assert!(!link[base.len()..].contains('='), "no raw '=' in the path: {link}");
    }

    #[test]
    fn rejection_happens_before_any_encoding() {
        let err = deep_link("https://api.example.com/", &json!("not a record")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
