//! Structural validation of raw configuration documents.
//!
//! Validation runs against an untyped JSON value rather than the typed
//! [`Config`](crate::Config) so that every problem in a document is reported
//! at once instead of failing on the first decoding error. Checks cover
//! structure and URL syntax only; reachability and transport policy are out
//! of scope.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::Platform;

/// Outcome of validating a candidate configuration document.
///
/// Errors accumulate in check order; a candidate is valid exactly when the
/// list is empty.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether the candidate passed every check.
    pub valid:  bool,
    /// Accumulated error messages, in check order.
    pub errors: Vec<String>
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.errors.join("; "))
    }
}

/// Validates a candidate configuration document.
///
/// A candidate that is not a JSON object short-circuits with a single error.
/// Otherwise checks accumulate: `name` must be a string, `installers` must be
/// a non-empty object, and every installer entry must use a canonical
/// platform key and a syntactically valid absolute URL (`file://` URLs are
/// accepted). A single entry can contribute both a platform error and a URL
/// error.
///
/// # Examples
///
/// ```
/// use install_bridge::validate_config;
///
/// let candidate = serde_json::json!({
///     "name": "Umbrella",
///     "installers": { "linux": "https://example.com/umbrella.AppImage" }
/// });
/// assert!(validate_config(&candidate).valid);
/// ```
pub fn validate_config(candidate: &Value) -> ValidationReport {
    let Value::Object(fields) = candidate else {
        return ValidationReport::from_errors(vec!["Config must be an object".to_owned()]);
    };

    let mut errors = Vec::new();

    if !matches!(fields.get("name"), Some(Value::String(_))) {
        errors.push("name is required and must be a string".to_owned());
    }

    match fields.get("installers") {
        Some(Value::Object(installers)) => {
            if installers.is_empty() {
                errors.push("at least one installer platform must be specified".to_owned());
            }
            for (key, value) in installers {
                if Platform::from_key(key).is_none() {
                    errors.push(format!(
                        "invalid platform '{key}': valid platforms are darwin, win32, linux"
                    ));
                }
                if !is_valid_url(value) {
                    errors.push(format!("installer URL for '{key}' is not a valid URL"));
                }
            }
        }
        _ => {
            errors.push("installers is required and must be an object".to_owned());
        }
    }

    ValidationReport::from_errors(errors)
}

fn is_valid_url(value: &Value) -> bool {
    match value {
        Value::String(text) => Url::parse(text).is_ok(),
        _ => false
    }
}
