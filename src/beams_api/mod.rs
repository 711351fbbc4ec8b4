/// Beams push notification API integration module
///
/// This module provides the server-side client for the Beams service:
/// publishing to interests and users, deleting users, and signing user
/// tokens for device registration.
///
/// ## Request Flow
///
/// 1. Caller invokes an operation on `BeamsClient`
/// 2. Interests or user ids are validated locally; nothing is sent on failure
/// 3. The identifiers are merged into a copy of the caller's payload
/// 4. One HTTP request is issued with the instance secret as bearer credential
/// 5. The response is classified into a publish id, a remote rejection, or a
///    transport/body error
pub mod client;
pub mod options;
pub mod payload;
pub mod response;
pub mod token;
pub mod types;

pub use client::BeamsClient;
pub use options::ClientOptions;
pub use payload::build_publish_body;
pub use token::{token_issuer, BeamsTokenClaims};
pub use types::{ApiError, BeamsError, BeamsToken, ErrorResponse, PublishResponse};
