//! Beams SDK
//!
//! A Rust library for publishing push notifications through the Pusher Beams
//! service from a backend.
//!
//! This SDK provides:
//! - Publishing to interests (topics) and to authenticated users
//! - Deleting a user and all of their registered devices
//! - Signed user tokens (HS256 JWT) for device registration
//! - Local validation of interests and user ids before any network call
//! - Type definitions for API responses and error handling
//!
//! # Example
//!
//! ```no_run
//! use beams_sdk::{BeamsClient, ClientOptions};
//! use serde_json::json;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BeamsClient::with_options(
//!     "8a070eaa-033f-46d6-bb90-f4c15acc47e1",
//!     "A84891378A575A220BEB53352E84385",
//!     ClientOptions::new().with_request_timeout(Duration::from_secs(30)),
//! )?;
//!
//! // Publish to everyone subscribed to "hello"
//! let payload = json!({
//!     "fcm": {"notification": {"title": "Hello", "body": "Hello, world"}}
//! });
//! let publish_id = client.publish_to_interests(&["hello"], &payload).await?;
//! println!("Publish id: {}", publish_id);
//!
//! // Authorize a device to register as a user
//! let beams_token = client.generate_token("user-001")?;
//! println!("{}", serde_json::to_string(&beams_token)?);
//! # Ok(())
//! # }
//! ```

pub mod beams_api;
pub mod validation;

// Re-export commonly used types and functions
pub use beams_api::{
    build_publish_body,
    client::{BeamsClient, LIBRARY_HEADER_VALUE},
    options::{ClientOptions, DEFAULT_REQUEST_TIMEOUT},
    token::{token_issuer, BeamsTokenClaims, TOKEN_TTL_HOURS},
    types::{ApiError, BeamsError, BeamsToken, ErrorResponse, PublishResponse},
};
pub use validation::ValidationError;
