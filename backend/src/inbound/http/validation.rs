//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper returns an `invalid_request` [`Error`] whose `details` name
//! the offending `field`, a machine-readable `code` and, where useful, the
//! rejected `value`.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use chrono::NaiveDate;
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, PersonId};
use crate::inbound::http::cpf;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidLength,
    InvalidDate,
    InvalidId,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidLength => "invalid_length",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: &str) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code,
        }))
    }

    fn with_value(self, code: &str, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code,
        }))
    }
}

/// Bounds on person name length, in characters, after trimming.
pub(crate) const NAME_MIN_CHARS: usize = 2;
pub(crate) const NAME_MAX_CHARS: usize = 100;

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField.as_str())
}

/// Unwrap a required payload field, treating blank strings as missing.
pub(crate) fn require_field(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
        .ok_or_else(|| missing_field_error(field))
}

/// Validate a required person name and return it trimmed.
pub(crate) fn parse_name(value: Option<String>, field: FieldName) -> Result<String, Error> {
    let name = require_field(value, field)?;
    let length = name.chars().count();
    if (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&length) {
        return Ok(name);
    }
    let field = field.as_str();
    Err(ValidationError::new(
        field,
        format!("{field} must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"),
    )
    .with_value(ErrorCode::InvalidLength.as_str(), name))
}

/// Validate a required CPF and return it trimmed, punctuation preserved.
pub(crate) fn parse_cpf(value: Option<String>, field: FieldName) -> Result<String, Error> {
    let raw = require_field(value, field)?;
    match cpf::validate(&raw) {
        Ok(()) => Ok(raw),
        Err(error) => Err(ValidationError::new(field.as_str(), error.to_string())
            .with_value(error.code(), raw)),
    }
}

/// Parse a required ISO-8601 calendar date (`YYYY-MM-DD`).
pub(crate) fn parse_date(value: Option<String>, field: FieldName) -> Result<NaiveDate, Error> {
    let raw = require_field(value, field)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
        let field = field.as_str();
        ValidationError::new(field, format!("{field} must be a date formatted as YYYY-MM-DD"))
            .with_value(ErrorCode::InvalidDate.as_str(), raw.as_str())
    })
}

/// Parse a person identifier taken from the request path.
pub(crate) fn parse_person_id(value: &str) -> Result<PersonId, Error> {
    match value.parse::<i64>() {
        Ok(raw) if raw > 0 => Ok(PersonId::new(raw)),
        _ => Err(ValidationError::new("id", "id must be a positive integer")
            .with_value(ErrorCode::InvalidId.as_str(), value)),
    }
}

/// `JsonConfig` error handler turning body extraction failures into
/// structured `invalid_request` errors.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    let message = match &err {
        JsonPayloadError::ContentType => "request body must be JSON".to_owned(),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "request body is too large".to_owned()
        }
        other => format!("malformed JSON body: {other}"),
    };
    ValidationError::new("body", message)
        .with_code(ErrorCode::InvalidBody.as_str())
        .into()
}
