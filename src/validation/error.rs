//! Validation error types for publish and user requests.
//!
//! Every variant carries enough context to build a message naming the
//! offending value and the limit it broke.

use std::fmt;

/// Errors that can occur while validating interests and user ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A publish to interests was attempted with an empty interest list.
    NoInterestsSupplied,

    /// More interests were supplied than a single publish accepts.
    TooManyInterests {
        /// Number of interests supplied.
        count: usize,
        /// Maximum number of interests per publish.
        limit: usize,
    },

    /// An interest name was the empty string.
    EmptyInterestName,

    /// An interest name exceeded the maximum length.
    InterestNameTooLong {
        /// The interest that was too long.
        interest: String,
        /// Its length in bytes.
        length: usize,
        /// Maximum interest length.
        limit: usize,
    },

    /// An interest name contained a character outside the allowed set.
    InterestInvalidCharacter {
        /// The offending interest.
        interest: String,
    },

    /// A publish to users was attempted with an empty user id list.
    NoUsersSupplied,

    /// More user ids were supplied than a single publish accepts.
    TooManyUsers {
        /// Number of user ids supplied.
        count: usize,
        /// Maximum number of user ids per publish.
        limit: usize,
    },

    /// A user id was empty.
    EmptyUserId {
        /// Position in the supplied list, if validating a list.
        index: Option<usize>,
    },

    /// A user id exceeded the maximum length.
    UserIdTooLong {
        /// The user id (lossily decoded for display).
        user_id: String,
        /// Its length in bytes.
        length: usize,
        /// Maximum user id length.
        limit: usize,
    },

    /// A user id was not valid UTF-8.
    InvalidUserIdEncoding {
        /// Position in the supplied list, if validating a list.
        index: Option<usize>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoInterestsSupplied => write!(f, "No interests were supplied"),
            ValidationError::TooManyInterests { count, limit } => write!(
                f,
                "Too many interests supplied ({}): API only supports up to {}",
                count, limit
            ),
            ValidationError::EmptyInterestName => {
                write!(f, "An empty interest name is not valid")
            }
            ValidationError::InterestNameTooLong {
                interest,
                length,
                limit,
            } => write!(
                f,
                "Interest '{}' length is {} which is over {} characters",
                interest, length, limit
            ),
            ValidationError::InterestInvalidCharacter { interest } => write!(
                f,
                "Interest '{}' contains a forbidden character: allowed characters are \
                 ASCII upper/lower-case letters, numbers or one of _-=@,.;",
                interest
            ),
            ValidationError::NoUsersSupplied => write!(f, "Must supply at least one user id"),
            ValidationError::TooManyUsers { count, limit } => write!(
                f,
                "Too many user ids supplied: API supports up to {}, got {}",
                limit, count
            ),
            ValidationError::EmptyUserId { index: Some(index) } => {
                write!(f, "User id at index {} is empty", index)
            }
            ValidationError::EmptyUserId { index: None } => write!(f, "User id cannot be empty"),
            ValidationError::UserIdTooLong {
                user_id,
                length,
                limit,
            } => write!(
                f,
                "User id ('{}') length too long (expected at most {} characters, got {})",
                user_id, limit, length
            ),
            ValidationError::InvalidUserIdEncoding { index: Some(index) } => {
                write!(f, "User id at index {} is not valid UTF-8", index)
            }
            ValidationError::InvalidUserIdEncoding { index: None } => {
                write!(f, "User id must be encoded using UTF-8")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_interests_display() {
        let error = ValidationError::TooManyInterests {
            count: 101,
            limit: 100,
        };
        let message = error.to_string();
        assert!(message.contains("101"));
        assert!(message.contains("100"));
    }

    #[test]
    fn test_interest_invalid_character_display() {
        let error = ValidationError::InterestInvalidCharacter {
            interest: "#not<>|ok".to_string(),
        };
        assert!(error.to_string().contains("#not<>|ok"));
    }

    #[test]
    fn test_user_id_too_long_display() {
        let error = ValidationError::UserIdTooLong {
            user_id: "abc".to_string(),
            length: 165,
            limit: 164,
        };
        let message = error.to_string();
        assert!(message.contains("abc"));
        assert!(message.contains("164"));
        assert!(message.contains("165"));
    }

    #[test]
    fn test_encoding_error_display_with_and_without_index() {
        let listed = ValidationError::InvalidUserIdEncoding { index: Some(3) };
        assert!(listed.to_string().contains("index 3"));

        let single = ValidationError::InvalidUserIdEncoding { index: None };
        assert!(single.to_string().contains("UTF-8"));
    }
}
