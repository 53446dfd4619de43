//! Payload Validation
//!
//! Turns an untyped JSON payload into a [`BookDraft`] or the first problem
//! found. Checks run in a fixed order:
//!
//! 1. presence of `title`, `author`, `published_date` (absent or falsy = missing)
//! 2. each field is a string
//! 3. `published_date` parses as `YYYY-MM-DD`
//! 4. length limits of `title` and `author`
//!
//! Pure: no I/O, no store access.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::entity::BookDraft;
use crate::domain::value_object::{AuthorName, BookTitle};

/// Wire names of the book fields
pub mod fields {
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const PUBLISHED_DATE: &str = "published_date";

    /// Presence check order
    pub const REQUIRED: [&str; 3] = [TITLE, AUTHOR, PUBLISHED_DATE];
}

/// Date pattern accepted for `published_date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for field: {0}")]
    InvalidType(&'static str),

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDateFormat,

    #[error("Field too long: {field} (max {max} characters)")]
    FieldTooLong { field: &'static str, max: usize },
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Validate a payload and build the draft it describes.
///
/// A value that is not a JSON object has no fields, so it fails on `title`.
pub fn validate_book_payload(payload: &Value) -> Result<BookDraft, ValidationError> {
    let empty = Map::new();
    let data = payload.as_object().unwrap_or(&empty);

    for field in fields::REQUIRED {
        if data.get(field).is_none_or(is_falsy) {
            return Err(ValidationError::MissingField(field));
        }
    }

    let title = string_field(data, fields::TITLE)?;
    let author = string_field(data, fields::AUTHOR)?;
    let published_date = string_field(data, fields::PUBLISHED_DATE)?;

    let published_date = parse_published_date(published_date)?;

    Ok(BookDraft {
        title: BookTitle::new(title)?,
        author: AuthorName::new(author)?,
        published_date,
    })
}

/// Parse a `YYYY-MM-DD` date
///
/// The year must be exactly four digits; chrono's `%Y` alone would take
/// `65`, `-500` or `+12345`. Month and day may drop their leading zero.
pub fn parse_published_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let year = value.split('-').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidDateFormat);
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidDateFormat)
}

fn string_field<'a>(
    data: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    data.get(field)
        .and_then(Value::as_str)
        .ok_or(ValidationError::InvalidType(field))
}
