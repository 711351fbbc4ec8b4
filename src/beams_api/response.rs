//! Classification of Beams API responses.
//!
//! A 200 carries `{"publishId": ...}` for publishes and no required body for
//! deletes. Any other status carries `{"error": ..., "description": ...}`.

use crate::beams_api::types::{ApiError, ErrorResponse, PublishResponse};

/// Turn a publish response into its publish id
pub fn classify_publish(status: u16, body: &[u8]) -> Result<String, ApiError> {
    if status != 200 {
        return Err(classify_error(status, body));
    }

    let response: PublishResponse = serde_json::from_slice(body)
        .map_err(|source| ApiError::InvalidResponseBody { status, source })?;

    Ok(response.publish_id)
}

/// Turn a delete-user response into success or an error; the success body is ignored
pub fn classify_delete(status: u16, body: &[u8]) -> Result<(), ApiError> {
    if status != 200 {
        return Err(classify_error(status, body));
    }
    Ok(())
}

/// Interpret a non-200 response body
pub fn classify_error(status: u16, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(ErrorResponse { error, description }) => ApiError::RemoteRejected {
            status,
            error,
            description,
        },
        Err(source) => ApiError::InvalidResponseBody { status, source },
    }
}
