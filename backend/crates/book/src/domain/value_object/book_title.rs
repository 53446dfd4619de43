//! Book Title Value Object
//!
//! Non-empty, at most [`BOOK_TITLE_MAX_LENGTH`] characters (the column width).
//! Whitespace is kept as given; a title of spaces is still a title.

use derive_more::Display;

use crate::domain::validation::{ValidationError, fields};

/// Maximum title length in characters
pub const BOOK_TITLE_MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValidationError::MissingField(fields::TITLE));
        }

        if value.chars().count() > BOOK_TITLE_MAX_LENGTH {
            return Err(ValidationError::FieldTooLong {
                field: fields::TITLE,
                max: BOOK_TITLE_MAX_LENGTH,
            });
        }

        Ok(Self(value))
    }

    /// Rebuild from a stored row without re-validating
    #[inline]
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for BookTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
