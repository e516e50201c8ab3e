//! Server response model for `POST /upload`.
//!
//! The server answers with a small JSON object:
//!
//! ```json
//! { "success": true, "output_file": "Gandalf_sheet.html", "character_name": "Gandalf" }
//! { "error": "File must be a JSON file" }
//! ```
//!
//! Fields are read leniently, the way a browser script would read them:
//! `success` is a truthiness test and string fields accept any JSON value.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Banner text used when a failed response carries no usable `error`.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to generate character sheet";

/// Parsed body of an upload response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UploadResult {
    /// Whether the sheet was generated.
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    /// Server-assigned identifier of the generated sheet.
    #[serde(default, deserialize_with = "truthy_string")]
    pub output_file: Option<String>,
    /// Name read from the uploaded character data.
    #[serde(default, deserialize_with = "lenient_string")]
    pub character_name: Option<String>,
    /// Failure description, `None` when falsy.
    #[serde(default, deserialize_with = "truthy_string")]
    pub error: Option<String>,
}

impl UploadResult {
    /// Parse a response body.
    ///
    /// Fails on invalid JSON and on `null`. Any other non-object value
    /// (array, number, string, boolean) has none of the fields and parses
    /// as an unsuccessful result.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        match value {
            Value::Null => Err(<serde_json::Error as serde::de::Error>::custom(
                "cannot read fields of null",
            )),
            Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }

    /// Message describing a failed upload.
    pub fn failure_message(&self) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string())
    }
}

/// A completed HTTP exchange, whatever its status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// Like [`lenient_string`], but falsy values read as absent.
fn truthy_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !is_truthy(&value) {
        return Ok(None);
    }
    Ok(Some(match value {
        Value::String(s) => s,
        other => other.to_string(),
    }))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        let result = UploadResult::parse(
            r#"{"success": true, "output_file": "abc.pdf", "character_name": "Gandalf"}"#,
        )
        .unwrap();
        assert!(result.success);
        assert_eq!(result.output_file.as_deref(), Some("abc.pdf"));
        assert_eq!(result.character_name.as_deref(), Some("Gandalf"));
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_error_only_body_is_not_success() {
        let result = UploadResult::parse(r#"{"error": "No file provided"}"#).unwrap();
        assert!(!result.success);
        assert_eq!(result.failure_message(), "No file provided");
    }

    #[test]
    fn test_success_truthiness() {
        let cases = [
            (r#"{"success": 1}"#, true),
            (r#"{"success": "yes"}"#, true),
            (r#"{"success": {}}"#, true),
            (r#"{"success": 0}"#, false),
            (r#"{"success": ""}"#, false),
            (r#"{"success": null}"#, false),
            (r#"{}"#, false),
        ];
        for (body, expected) in cases {
            assert_eq!(UploadResult::parse(body).unwrap().success, expected, "{}", body);
        }
    }

    #[test]
    fn test_failure_message_fallback() {
        let empty = UploadResult::parse(r#"{"success": false, "error": ""}"#).unwrap();
        assert_eq!(empty.failure_message(), FALLBACK_FAILURE_MESSAGE);

        let missing = UploadResult::parse(r#"{"success": false}"#).unwrap();
        assert_eq!(missing.failure_message(), FALLBACK_FAILURE_MESSAGE);
    }

    #[test]
    fn test_non_string_fields_are_stringified() {
        let result = UploadResult::parse(r#"{"success": true, "character_name": 42}"#).unwrap();
        assert_eq!(result.character_name.as_deref(), Some("42"));
    }

    #[test]
    fn test_falsy_error_values_use_fallback() {
        for body in [
            r#"{"success": false, "error": 0}"#,
            r#"{"success": false, "error": false}"#,
            r#"{"success": false, "error": null}"#,
        ] {
            let result = UploadResult::parse(body).unwrap();
            assert_eq!(result.failure_message(), FALLBACK_FAILURE_MESSAGE, "{}", body);
        }
    }

    #[test]
    fn test_truthy_non_string_error_is_stringified() {
        let result = UploadResult::parse(r#"{"error": 404}"#).unwrap();
        assert_eq!(result.failure_message(), "404");
    }

    #[test]
    fn test_non_object_bodies_are_unsuccessful() {
        for body in ["[]", "[true]", "42", r#""ok""#, "true"] {
            let result = UploadResult::parse(body).unwrap();
            assert_eq!(result, UploadResult::default(), "{}", body);
            assert_eq!(result.failure_message(), FALLBACK_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_null_and_invalid_bodies_are_parse_errors() {
        assert!(UploadResult::parse("null").is_err());
        assert!(UploadResult::parse("Internal Server Error").is_err());
        assert!(UploadResult::parse("").is_err());
    }

    #[test]
    fn test_falsy_output_file_is_absent() {
        let result = UploadResult::parse(r#"{"success": true, "output_file": ""}"#).unwrap();
        assert_eq!(result.output_file, None);
    }

    #[test]
    fn test_reply_status() {
        assert!(HttpReply::new(200, "{}").is_ok());
        assert!(HttpReply::new(204, "").is_ok());
        assert!(!HttpReply::new(400, "{}").is_ok());
        assert!(!HttpReply::new(500, "oops").is_ok());
    }
}
