use crate::beams_api::types::BeamsError;
use std::time::Duration;

/// Default timeout applied to every request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Placeholder replaced with the instance id in a base endpoint template
pub const INSTANCE_ID_PLACEHOLDER: &str = "{instance_id}";

/// Default base endpoint template
pub const DEFAULT_BASE_ENDPOINT: &str = "https://{instance_id}.pushnotifications.pusher.com";

/// Environment variable overriding the request timeout, in seconds
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "BEAMS_REQUEST_TIMEOUT_SECS";

/// Environment variable overriding the base endpoint
pub const ENV_BASE_ENDPOINT: &str = "BEAMS_BASE_ENDPOINT";

/// Optional overrides applied when constructing a [`BeamsClient`](crate::BeamsClient)
///
/// Each field independently replaces one default; unset fields keep it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Timeout for a single HTTP request. Default: 60 seconds
    pub request_timeout: Option<Duration>,

    /// Base endpoint URL. May contain `{instance_id}`, which is replaced with
    /// the client's instance id. Default:
    /// `https://{instance_id}.pushnotifications.pusher.com`
    pub base_endpoint: Option<String>,
}

impl ClientOptions {
    /// Create options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout (builder pattern)
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the base endpoint (builder pattern)
    pub fn with_base_endpoint(mut self, base_endpoint: impl Into<String>) -> Self {
        self.base_endpoint = Some(base_endpoint.into());
        self
    }

    /// Read overrides from `BEAMS_REQUEST_TIMEOUT_SECS` and `BEAMS_BASE_ENDPOINT`
    pub fn from_env() -> Result<Self, BeamsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BeamsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::new();

        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|e| {
                BeamsError::InvalidConfiguration(format!(
                    "{} must be a whole number of seconds, got '{}': {}",
                    ENV_REQUEST_TIMEOUT_SECS, raw, e
                ))
            })?;
            options = options.with_request_timeout(Duration::from_secs(secs));
        }

        if let Some(endpoint) = lookup(ENV_BASE_ENDPOINT) {
            if !endpoint.trim().is_empty() {
                options = options.with_base_endpoint(endpoint.trim());
            }
        }

        Ok(options)
    }

    pub(crate) fn resolve_request_timeout(&self) -> Result<Duration, BeamsError> {
        let timeout = self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        if timeout.is_zero() {
            return Err(BeamsError::InvalidConfiguration(
                "Request timeout must be greater than zero".to_string(),
            ));
        }
        Ok(timeout)
    }

    pub(crate) fn resolve_base_endpoint(&self, instance_id: &str) -> Result<String, BeamsError> {
        let template = self
            .base_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_BASE_ENDPOINT);

        let endpoint = template
            .replace(INSTANCE_ID_PLACEHOLDER, instance_id)
            .trim_end_matches('/')
            .to_string();

        let parsed = url::Url::parse(&endpoint).map_err(|e| {
            BeamsError::InvalidConfiguration(format!(
                "Base endpoint '{}' is not a valid URL: {}",
                endpoint, e
            ))
        })?;

        if parsed.cannot_be_a_base() {
            return Err(BeamsError::InvalidConfiguration(format!(
                "Base endpoint '{}' cannot be used as a base URL",
                endpoint
            )));
        }

        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::new();
        assert_eq!(options.resolve_request_timeout().unwrap(), Duration::from_secs(60));
        assert_eq!(
            options.resolve_base_endpoint("abc").unwrap(),
            "https://abc.pushnotifications.pusher.com"
        );
    }

    #[test]
    fn test_overrides_win() {
        let options = ClientOptions::new()
            .with_request_timeout(Duration::from_secs(5))
            .with_base_endpoint("http://localhost:8080/");
        assert_eq!(options.resolve_request_timeout().unwrap(), Duration::from_secs(5));
        assert_eq!(
            options.resolve_base_endpoint("abc").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_base_endpoint_template() {
        let options = ClientOptions::new().with_base_endpoint("https://{instance_id}.eu.example.com");
        assert_eq!(
            options.resolve_base_endpoint("abc").unwrap(),
            "https://abc.eu.example.com"
        );
    }

    #[test]
    fn test_invalid_base_endpoint() {
        let options = ClientOptions::new().with_base_endpoint("not a url");
        assert!(matches!(
            options.resolve_base_endpoint("abc"),
            Err(BeamsError::InvalidConfiguration(_))
        ));

        let options = ClientOptions::new().with_base_endpoint("mailto:someone@example.com");
        assert!(matches!(
            options.resolve_base_endpoint("abc"),
            Err(BeamsError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let options = ClientOptions::new().with_request_timeout(Duration::ZERO);
        assert!(matches!(
            options.resolve_request_timeout(),
            Err(BeamsError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_from_lookup() {
        let vars = HashMap::from([
            (ENV_REQUEST_TIMEOUT_SECS, "15".to_string()),
            (ENV_BASE_ENDPOINT, "http://127.0.0.1:9000".to_string()),
        ]);
        let options = ClientOptions::from_lookup(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(options.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(options.base_endpoint.as_deref(), Some("http://127.0.0.1:9000"));
    }

    #[test]
    fn test_from_lookup_empty() {
        let options = ClientOptions::from_lookup(|_| None).unwrap();
        assert_eq!(options, ClientOptions::default());
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let result = ClientOptions::from_lookup(|key| {
            (key == ENV_REQUEST_TIMEOUT_SECS).then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(BeamsError::InvalidConfiguration(_))));
    }
}
