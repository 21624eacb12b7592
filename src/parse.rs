//! Parsing and loading of configuration documents.
//!
//! Parsing composes deserialization with validation: the raw text is decoded
//! into an untyped JSON value, validated as a whole, and only then converted
//! into the typed [`Config`]. Callers therefore either receive a
//! configuration that passed every check or the full ordered error list.

use std::{fs, path::Path};

use serde_json::Value;

use crate::{
    config::Config,
    error::{self, Error},
    validate::validate_config
};

/// Loads a configuration from the provided JSON file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the JSON cannot be
/// decoded, or the document fails validation.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_config(&contents)
}

/// Parses a configuration from raw JSON text.
///
/// This function is suitable for unit tests and higher-level callers that
/// already obtained the document contents.
///
/// # Errors
///
/// Returns [`Error::Parse`](Error::Parse) when the text is not well-formed
/// JSON (rendered as `Invalid JSON: <underlying message>`) and
/// [`Error::Invalid`](Error::Invalid) carrying the ordered validation errors
/// when the document violates configuration invariants.
pub fn parse_config(contents: &str) -> Result<Config, Error> {
    let value: Value = serde_json::from_str(contents).map_err(|source| Error::Parse {
        message: source.to_string()
    })?;

    let report = validate_config(&value);
    if !report.valid {
        return Err(Error::invalid(report));
    }

    // Validation pins down name and installers; a mismatch on the remaining
    // optional fields is a contract violation by the caller, not user error.
    serde_json::from_value(value).map_err(|source| {
        Error::validation(format!("configuration does not match the expected shape: {source}"))
    })
}
