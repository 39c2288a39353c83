//! Tracking number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`TrackingNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackingNumberError {
    /// The input string is empty after trimming.
    #[error("tracking number cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("tracking number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside the allowed alphabet.
    #[error("tracking number may only contain letters, digits, and '-' (found {found:?})")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
}

/// A parcel tracking number.
///
/// The demo accepts any well-formed number and simulates a journey for it,
/// so validation is purely structural: trimmed, non-empty, at most 32
/// characters, ASCII letters/digits/dashes. Stored uppercased so lookups
/// are case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Maximum length of a tracking number.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `TrackingNumber` from user input.
    ///
    /// Leading/trailing whitespace is trimmed and the result is uppercased.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, longer than 32
    /// characters, or contains characters outside `[A-Za-z0-9-]`.
    pub fn parse(s: &str) -> Result<Self, TrackingNumberError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(TrackingNumberError::Empty);
        }

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(TrackingNumberError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(found) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
        {
            return Err(TrackingNumberError::InvalidCharacter { found });
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the tracking number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the tracking number as a byte slice.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TrackingNumber {
    type Err = TrackingNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
