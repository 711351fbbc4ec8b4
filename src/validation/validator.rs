//! Core validation rules for interests and user ids.
//!
//! All checks are fail-fast: the first violated rule is returned and the
//! remaining input is not inspected.

use crate::validation::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of interests in a single publish
pub const MAX_INTERESTS_PER_PUBLISH: usize = 100;

/// Maximum length of an interest name, in bytes
pub const MAX_INTEREST_LENGTH: usize = 164;

/// Maximum number of user ids in a single publish
pub const MAX_USERS_PER_PUBLISH: usize = 1000;

/// Maximum length of a user id, in bytes
pub const MAX_USER_ID_LENGTH: usize = 164;

static INTEREST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-=@,.;]+$").expect("interest pattern is a valid regex")
});

/// Check an interest list before publishing.
pub fn validate_interests<S: AsRef<str>>(interests: &[S]) -> Result<(), ValidationError> {
    if interests.is_empty() {
        return Err(ValidationError::NoInterestsSupplied);
    }

    if interests.len() > MAX_INTERESTS_PER_PUBLISH {
        return Err(ValidationError::TooManyInterests {
            count: interests.len(),
            limit: MAX_INTERESTS_PER_PUBLISH,
        });
    }

    for interest in interests {
        validate_interest(interest.as_ref())?;
    }

    Ok(())
}

fn validate_interest(interest: &str) -> Result<(), ValidationError> {
    if interest.is_empty() {
        return Err(ValidationError::EmptyInterestName);
    }

    if interest.len() > MAX_INTEREST_LENGTH {
        return Err(ValidationError::InterestNameTooLong {
            interest: interest.to_string(),
            length: interest.len(),
            limit: MAX_INTEREST_LENGTH,
        });
    }

    if !INTEREST_PATTERN.is_match(interest) {
        return Err(ValidationError::InterestInvalidCharacter {
            interest: interest.to_string(),
        });
    }

    Ok(())
}

/// Check a user id list before publishing, returning the ids as UTF-8 strings.
pub fn validate_users<U: AsRef<[u8]>>(users: &[U]) -> Result<Vec<&str>, ValidationError> {
    if users.is_empty() {
        return Err(ValidationError::NoUsersSupplied);
    }

    if users.len() > MAX_USERS_PER_PUBLISH {
        return Err(ValidationError::TooManyUsers {
            count: users.len(),
            limit: MAX_USERS_PER_PUBLISH,
        });
    }

    users
        .iter()
        .enumerate()
        .map(|(index, user_id)| check_user_id(user_id.as_ref(), Some(index)))
        .collect()
}

/// Check a single user id, as used by user deletion and token generation.
pub fn validate_user_id<U: AsRef<[u8]> + ?Sized>(user_id: &U) -> Result<&str, ValidationError> {
    check_user_id(user_id.as_ref(), None)
}

fn check_user_id(bytes: &[u8], index: Option<usize>) -> Result<&str, ValidationError> {
    if bytes.is_empty() {
        return Err(ValidationError::EmptyUserId { index });
    }

    if bytes.len() > MAX_USER_ID_LENGTH {
        return Err(ValidationError::UserIdTooLong {
            user_id: String::from_utf8_lossy(bytes).into_owned(),
            length: bytes.len(),
            limit: MAX_USER_ID_LENGTH,
        });
    }

    std::str::from_utf8(bytes).map_err(|_| ValidationError::InvalidUserIdEncoding { index })
}
