//! Store display name type.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::slug::Slug;

/// Errors that can occur when parsing a [`StoreName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreNameError {
    /// The name is shorter than the minimum length.
    #[error("store name must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The name is longer than the maximum length.
    #[error("store name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A store name.
///
/// Leading and trailing whitespace is trimmed before the length check, and the
/// trimmed form is what gets stored. Uniqueness is enforced by the database,
/// not by this type.
///
/// ## Constraints
///
/// - Length: 3-50 characters (counted in `char`s, after trimming)
///
/// ## Examples
///
/// ```
/// use skateshop_core::StoreName;
///
/// assert!(StoreName::parse("Acme").is_ok());
/// assert_eq!(StoreName::parse("  Acme  ").unwrap().as_str(), "Acme");
///
/// assert!(StoreName::parse("ab").is_err());
/// assert!(StoreName::parse(&"x".repeat(51)).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct StoreName(String);

impl StoreName {
    /// Minimum length of a store name.
    pub const MIN_LENGTH: usize = 3;

    /// Maximum length of a store name.
    pub const MAX_LENGTH: usize = 50;

    /// Parse a `StoreName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is shorter than 3 or longer than
    /// 50 characters.
    pub fn parse(s: &str) -> Result<Self, StoreNameError> {
        let trimmed = s.trim();
        let len = trimmed.chars().count();

        if len < Self::MIN_LENGTH {
            return Err(StoreNameError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        if len > Self::MAX_LENGTH {
            return Err(StoreNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Wrap a name read back from storage.
    ///
    /// Length rules apply to new input only, so stored names are kept as is.
    #[must_use]
    pub const fn from_stored(name: String) -> Self {
        Self(name)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `StoreName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Derive the URL slug for this name.
    #[must_use]
    pub fn slug(&self) -> Slug {
        Slug::from_name(&self.0)
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for StoreName {
    type Err = StoreNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for StoreName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
