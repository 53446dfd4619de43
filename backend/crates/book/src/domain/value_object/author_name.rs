//! Author Name Value Object

use derive_more::Display;

use crate::domain::validation::{ValidationError, fields};

/// Maximum author length in characters
pub const AUTHOR_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValidationError::MissingField(fields::AUTHOR));
        }

        if value.chars().count() > AUTHOR_NAME_MAX_LENGTH {
            return Err(ValidationError::FieldTooLong {
                field: fields::AUTHOR,
                max: AUTHOR_NAME_MAX_LENGTH,
            });
        }

        Ok(Self(value))
    }

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

impl AsRef<str> for AuthorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
