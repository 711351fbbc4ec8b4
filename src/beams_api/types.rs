use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Beams SDK error type
///
/// Represents all possible errors that can occur when validating a request,
/// talking to the Beams service, or signing a user token.
#[derive(Debug)]
pub enum BeamsError {
    /// Client construction failed (empty credentials, bad endpoint, bad timeout)
    InvalidConfiguration(String),
    /// Request input broke an interest or user id rule; nothing was sent
    Validation(ValidationError),
    /// The publish payload could not be turned into a JSON request body
    Serialization(String),
    /// API request failed (network, response body, or remote rejection)
    Api(ApiError),
    /// Signing the user token failed
    Signing(jsonwebtoken::errors::Error),
}

impl fmt::Display for BeamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeamsError::InvalidConfiguration(msg) => write!(f, "Configuration error: {}", msg),
            BeamsError::Validation(err) => write!(f, "Validation error: {}", err),
            BeamsError::Serialization(msg) => {
                write!(f, "Failed to serialize the publish request body: {}", msg)
            }
            BeamsError::Api(err) => write!(f, "API error: {}", err),
            BeamsError::Signing(err) => write!(
                f,
                "Failed to sign the JWT used for user authentication: {}",
                err
            ),
        }
    }
}

impl std::error::Error for BeamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BeamsError::Validation(err) => Some(err),
            BeamsError::Api(err) => Some(err),
            BeamsError::Signing(err) => Some(err),
            BeamsError::InvalidConfiguration(_) | BeamsError::Serialization(_) => None,
        }
    }
}

impl From<ValidationError> for BeamsError {
    fn from(err: ValidationError) -> Self {
        BeamsError::Validation(err)
    }
}

impl From<ApiError> for BeamsError {
    fn from(err: ApiError) -> Self {
        BeamsError::Api(err)
    }
}

impl From<jsonwebtoken::errors::Error> for BeamsError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        BeamsError::Signing(err)
    }
}

/// API-specific errors
#[derive(Debug)]
pub enum ApiError {
    /// Network error (connection, timeout, reading the response body)
    Network(reqwest::Error),
    /// The response body was not the JSON shape expected for its status
    InvalidResponseBody {
        status: u16,
        source: serde_json::Error,
    },
    /// The service answered with a well-formed error response
    RemoteRejected {
        status: u16,
        error: String,
        description: String,
    },
}

impl ApiError {
    /// HTTP status of the response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network(err) => err.status().map(|s| s.as_u16()),
            ApiError::InvalidResponseBody { status, .. } => Some(*status),
            ApiError::RemoteRejected { status, .. } => Some(*status),
        }
    }

    /// Whether the request hit the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Network(err) if err.is_timeout())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(err) if err.is_timeout() => {
                write!(f, "Network error: request timeout")
            }
            ApiError::Network(err) if err.is_connect() => {
                write!(f, "Network error: connection failed: {}", err)
            }
            ApiError::Network(err) => write!(f, "Network error: {}", err),
            ApiError::InvalidResponseBody { status, source } => write!(
                f,
                "Invalid response body (HTTP {}): {}",
                status, source
            ),
            ApiError::RemoteRejected {
                error, description, ..
            } => write!(f, "{}: {}", error, description),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(err) => Some(err),
            ApiError::InvalidResponseBody { source, .. } => Some(source),
            ApiError::RemoteRejected { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err)
    }
}

/// Successful publish response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponse {
    #[serde(rename = "publishId")]
    pub publish_id: String,
}

/// Error response returned by the Beams service for any non-200 status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub description: String,
}

/// Signed user token, serialized as `{"token": "..."}`
///
/// This is the shape a device SDK expects from an application's Beams auth
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeamsToken {
    pub token: String,
}
