use crate::beams_api::types::{BeamsError, BeamsToken};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// How long a user token stays valid after it is issued
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims carried by a Beams user token
///
/// The device SDK hands the token back to Beams, which checks the signature
/// against the instance secret key and the expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeamsTokenClaims {
    /// Subject - the user id the device may register as
    pub sub: String,
    /// Issuer - `https://{instance_id}.pushnotifications.pusher.com`
    pub iss: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl BeamsTokenClaims {
    /// Build claims for `user_id`, expiring [`TOKEN_TTL_HOURS`] from now
    pub fn new(instance_id: &str, user_id: &str) -> Self {
        let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp();
        Self {
            sub: user_id.to_string(),
            iss: token_issuer(instance_id),
            exp,
        }
    }
}

/// Issuer claim for an instance's user tokens
pub fn token_issuer(instance_id: &str) -> String {
    format!("https://{}.pushnotifications.pusher.com", instance_id)
}

/// Sign claims with HS256 using the instance secret key
pub(crate) fn sign_token(
    claims: &BeamsTokenClaims,
    secret_key: &SecretString,
) -> Result<BeamsToken, BeamsError> {
    let key = EncodingKey::from_secret(secret_key.expose_secret().as_bytes());

    let token = encode(&Header::new(Algorithm::HS256), claims, &key).map_err(|e| {
        tracing::error!("Failed to sign user token: {}", e);
        BeamsError::Signing(e)
    })?;

    Ok(BeamsToken { token })
}
