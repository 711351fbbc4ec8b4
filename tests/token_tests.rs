//! User Token Tests
//!
//! Verifies the signed JWTs produced for device registration: claims,
//! signature, expiry and input validation.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use beams_sdk::{BeamsClient, BeamsError, BeamsTokenClaims, ValidationError, TOKEN_TTL_HOURS};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::Value;

fn client() -> BeamsClient {
    BeamsClient::new("i-123", "k-456").unwrap()
}

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

#[test]
fn test_generate_token_verifies_with_same_secret() {
    let issued_at = now();
    let beams_token = client().generate_token("u-123").unwrap();

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&["https://i-123.pushnotifications.pusher.com"]);

    let token_data = decode::<BeamsTokenClaims>(
        &beams_token.token,
        &DecodingKey::from_secret(b"k-456"),
        &validation,
    )
    .unwrap();

    assert_eq!(token_data.claims.sub, "u-123");
    assert_eq!(
        token_data.claims.iss,
        "https://i-123.pushnotifications.pusher.com"
    );
    assert!(token_data.claims.exp > issued_at);
    assert!(token_data.claims.exp >= issued_at + TOKEN_TTL_HOURS * 3600);
}

#[test]
fn test_generate_token_rejected_with_wrong_secret() {
    let beams_token = client().generate_token("u-123").unwrap();

    let result = decode::<BeamsTokenClaims>(
        &beams_token.token,
        &DecodingKey::from_secret(b"not-the-secret"),
        &Validation::new(Algorithm::HS256),
    );

    assert!(result.is_err());
}

#[test]
fn test_token_header_and_claim_set() {
    let beams_token = client().generate_token("u-123").unwrap();

    let parts: Vec<&str> = beams_token.token.split('.').collect();
    assert_eq!(parts.len(), 3);

    let header: Value = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[0]).unwrap()).unwrap();
    assert_eq!(header["alg"], "HS256");

    let claims: Value = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[1]).unwrap()).unwrap();
    let mut keys: Vec<&String> = claims.as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["exp", "iss", "sub"]);
}

#[test]
fn test_token_serializes_under_token_key() {
    let beams_token = client().generate_token("u-123").unwrap();

    let json = serde_json::to_value(&beams_token).unwrap();
    assert_eq!(json["token"], beams_token.token.as_str());
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[test]
fn test_generate_token_empty_user_id() {
    let result = client().generate_token("");
    assert!(matches!(
        result,
        Err(BeamsError::Validation(ValidationError::EmptyUserId { index: None }))
    ));
}

#[test]
fn test_generate_token_user_id_length_boundary() {
    assert!(client().generate_token(&"u".repeat(164)).is_ok());

    let result = client().generate_token(&"u".repeat(165));
    assert!(matches!(
        result,
        Err(BeamsError::Validation(ValidationError::UserIdTooLong { length: 165, .. }))
    ));
}

#[test]
fn test_each_call_signs_a_fresh_token() {
    let client = client();
    let first = client.generate_token("user-a").unwrap();
    let second = client.generate_token("user-b").unwrap();
    assert_ne!(first.token, second.token);
}
