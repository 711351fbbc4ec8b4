use crate::beams_api::types::BeamsError;
use serde::Serialize;
use serde_json::Value;

/// Reserved payload key carrying the interest list
pub const INTERESTS_KEY: &str = "interests";

/// Reserved payload key carrying the user id list
pub const USERS_KEY: &str = "users";

/// Build an outgoing publish body from a caller payload and a target list.
///
/// The payload is converted into a fresh JSON object and `ids` is inserted
/// under `key`, replacing any value the payload already had there. The
/// caller's payload is never modified.
///
/// # Errors
///
/// Returns `BeamsError::Serialization` if the payload cannot be serialized or
/// does not serialize to a JSON object.
///
/// # Example
///
/// ```
/// use beams_sdk::build_publish_body;
/// use serde_json::json;
///
/// let payload = json!({"fcm": {"notification": {"title": "Hello"}}});
/// let body = build_publish_body(&payload, "interests", &["hell-o"]).unwrap();
///
/// assert_eq!(body["interests"], json!(["hell-o"]));
/// assert!(payload.get("interests").is_none());
/// ```
pub fn build_publish_body<P, S>(payload: &P, key: &str, ids: &[S]) -> Result<Value, BeamsError>
where
    P: Serialize + ?Sized,
    S: AsRef<str>,
{
    let value = serde_json::to_value(payload)
        .map_err(|e| BeamsError::Serialization(e.to_string()))?;

    let mut body = match value {
        Value::Object(body) => body,
        other => {
            return Err(BeamsError::Serialization(format!(
                "publish request must be a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    let ids = ids
        .iter()
        .map(|id| Value::String(id.as_ref().to_string()))
        .collect();
    body.insert(key.to_string(), Value::Array(ids));

    Ok(Value::Object(body))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_reference_body_bytes() {
        let payload = json!({"fcm": {"notification": {"title": "Hello", "body": "Hello, world"}}});
        let body = build_publish_body(&payload, INTERESTS_KEY, &["hell-o"]).unwrap();

        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"fcm":{"notification":{"body":"Hello, world","title":"Hello"}},"interests":["hell-o"]}"#
        );
    }

    #[test]
    fn test_caller_payload_is_untouched() {
        let payload = json!({"apns": {"aps": {"alert": "hi"}}});
        let before = payload.clone();

        let _ = build_publish_body(&payload, USERS_KEY, &["u-1"]).unwrap();
        assert_eq!(payload, before);
    }

    #[test]
    fn test_reserved_key_is_replaced() {
        let payload = json!({"users": ["someone-else"], "web": {}});
        let body = build_publish_body(&payload, USERS_KEY, &["u-1", "u-2"]).unwrap();
        assert_eq!(body["users"], json!(["u-1", "u-2"]));
        assert_eq!(body["web"], json!({}));
    }

    #[test]
    fn test_typed_payload() {
        let mut payload: HashMap<&str, HashMap<&str, &str>> = HashMap::new();
        payload.insert("web", HashMap::from([("notification", "x")]));

        let body = build_publish_body(&payload, INTERESTS_KEY, &["a"]).unwrap();
        assert_eq!(body["web"]["notification"], "x");
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let err = build_publish_body(&json!(["fcm"]), INTERESTS_KEY, &["a"]).unwrap_err();
        match err {
            BeamsError::Serialization(msg) => assert!(msg.contains("an array")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unserializable_payload_is_rejected() {
        // JSON object keys must be strings
        let payload: HashMap<(u8, u8), &str> = HashMap::from([((1, 2), "x")]);
        let err = build_publish_body(&payload, INTERESTS_KEY, &["a"]).unwrap_err();
        assert!(matches!(err, BeamsError::Serialization(_)));
    }
}
