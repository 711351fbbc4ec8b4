//! Request validation for publishes, user deletion and token generation.
//!
//! These checks run before any network call so a malformed request never
//! reaches the Beams service.
//!
//! # Examples
//!
//! ## Validating interests
//!
//! ```
//! use beams_sdk::validation::{validate_interests, ValidationError};
//!
//! assert!(validate_interests(&["donuts", "hell-o"]).is_ok());
//!
//! let empty: [&str; 0] = [];
//! assert_eq!(
//!     validate_interests(&empty),
//!     Err(ValidationError::NoInterestsSupplied)
//! );
//! ```
//!
//! ## Validating user ids
//!
//! User ids are accepted as raw bytes so that invalid UTF-8 can be reported
//! with the index of the offending id.
//!
//! ```
//! use beams_sdk::validation::{validate_users, ValidationError};
//!
//! let users = vec![b"user-1".to_vec(), vec![0xC0]];
//! assert_eq!(
//!     validate_users(&users),
//!     Err(ValidationError::InvalidUserIdEncoding { index: Some(1) })
//! );
//! ```

pub mod error;
pub mod validator;

pub use error::ValidationError;
pub use validator::{
    validate_interests, validate_user_id, validate_users, MAX_INTERESTS_PER_PUBLISH,
    MAX_INTEREST_LENGTH, MAX_USERS_PER_PUBLISH, MAX_USER_ID_LENGTH,
};
