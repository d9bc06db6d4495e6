//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use super::error::ValueObjectError;

/// Maximum length accepted for identifiers coming from the backend.
const MAX_ID_LENGTH: usize = 100;

/// Room identifier value object.
///
/// The backend owns the identifier format; the client only requires it to be
/// a non-empty string of reasonable length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId.
    ///
    /// # Arguments
    ///
    /// * `id` - The room identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the RoomId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::RoomIdEmpty);
        }
        let len = id.len();
        if len > MAX_ID_LENGTH {
            return Err(ValueObjectError::RoomIdTooLong {
                max: MAX_ID_LENGTH,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User identifier attached to study session records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId. Surrounding whitespace is dropped.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::UserIdEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Password typed into the private room prompt.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Create a new Password.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::PasswordEmpty` for an empty input
    pub fn new(password: String) -> Result<Self, ValueObjectError> {
        if password.is_empty() {
            return Err(ValueObjectError::PasswordEmpty);
        }
        Ok(Self(password))
    }

    /// Get the inner string value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
