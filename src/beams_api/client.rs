use crate::beams_api::options::ClientOptions;
use crate::beams_api::payload::{build_publish_body, INTERESTS_KEY, USERS_KEY};
use crate::beams_api::response::{classify_delete, classify_publish};
use crate::beams_api::token::{sign_token, BeamsTokenClaims};
use crate::beams_api::types::{ApiError, BeamsError, BeamsToken};
use crate::validation::{validate_interests, validate_user_id, validate_users};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;

/// Value of the `X-Pusher-Library` header sent with every request
pub const LIBRARY_HEADER_VALUE: &str =
    concat!("pusher-push-notifications-rust ", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the instance id for [`BeamsClient::from_env`]
pub const ENV_INSTANCE_ID: &str = "BEAMS_INSTANCE_ID";

/// Environment variable holding the secret key for [`BeamsClient::from_env`]
pub const ENV_SECRET_KEY: &str = "BEAMS_SECRET_KEY";

/// HTTP client for the Beams push notification service
///
/// Holds the instance credentials and a pooled `reqwest::Client`. Cloning is
/// cheap and clones share the connection pool, so one client can serve many
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct BeamsClient {
    /// Beams instance id
    instance_id: String,
    /// Instance secret key, used as bearer credential and token signing key
    secret_key: SecretString,
    /// Resolved base endpoint, without trailing slash
    base_endpoint: String,
    /// Timeout applied to each request
    request_timeout: Duration,
    /// HTTP client for making requests
    client: reqwest::Client,
}

impl BeamsClient {
    /// Create a client with the default endpoint and timeout
    ///
    /// # Errors
    ///
    /// Returns `BeamsError::InvalidConfiguration` if `instance_id` or
    /// `secret_key` is empty. No network call is made.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use beams_sdk::BeamsClient;
    ///
    /// let client = BeamsClient::new("8a070eaa-033f-46d6-bb90-f4c15acc47e1", "SECRET")?;
    /// # Ok::<(), beams_sdk::BeamsError>(())
    /// ```
    pub fn new(
        instance_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, BeamsError> {
        Self::with_options(instance_id, secret_key, ClientOptions::default())
    }

    /// Create a client, applying the given overrides
    ///
    /// # Example
    ///
    /// ```no_run
    /// use beams_sdk::{BeamsClient, ClientOptions};
    /// use std::time::Duration;
    ///
    /// let options = ClientOptions::new()
    ///     .with_request_timeout(Duration::from_secs(10))
    ///     .with_base_endpoint("https://{instance_id}.pushnotifications.pusher.com");
    ///
    /// let client = BeamsClient::with_options("instance-id", "SECRET", options)?;
    /// # Ok::<(), beams_sdk::BeamsError>(())
    /// ```
    pub fn with_options(
        instance_id: impl Into<String>,
        secret_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, BeamsError> {
        let instance_id = instance_id.into();
        let secret_key = secret_key.into();

        if instance_id.is_empty() {
            return Err(BeamsError::InvalidConfiguration(
                "Instance id cannot be an empty string".to_string(),
            ));
        }
        if secret_key.is_empty() {
            return Err(BeamsError::InvalidConfiguration(
                "Secret key cannot be an empty string".to_string(),
            ));
        }

        let base_endpoint = options.resolve_base_endpoint(&instance_id)?;
        let request_timeout = options.resolve_request_timeout()?;

        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| {
                BeamsError::InvalidConfiguration(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::debug!(
            "Creating BeamsClient for instance {} with base endpoint {} and timeout {:?}",
            instance_id,
            base_endpoint,
            request_timeout
        );

        Ok(Self {
            instance_id,
            secret_key: SecretString::from(secret_key),
            base_endpoint,
            request_timeout,
            client,
        })
    }

    /// Create a client from `BEAMS_INSTANCE_ID` and `BEAMS_SECRET_KEY`
    ///
    /// `BEAMS_REQUEST_TIMEOUT_SECS` and `BEAMS_BASE_ENDPOINT` are honoured as
    /// overrides, see [`ClientOptions::from_env`].
    pub fn from_env() -> Result<Self, BeamsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a client reading every setting through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BeamsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let instance_id = lookup(ENV_INSTANCE_ID).ok_or_else(|| {
            BeamsError::InvalidConfiguration(format!("{} is not set", ENV_INSTANCE_ID))
        })?;
        let secret_key = lookup(ENV_SECRET_KEY).ok_or_else(|| {
            BeamsError::InvalidConfiguration(format!("{} is not set", ENV_SECRET_KEY))
        })?;
        let options = ClientOptions::from_lookup(&lookup)?;

        Self::with_options(instance_id, secret_key, options)
    }

    /// Get the instance id for this client
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Get the resolved base endpoint for this client
    pub fn base_endpoint(&self) -> &str {
        &self.base_endpoint
    }

    /// Get the timeout applied to each request
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Publish a notification to every device subscribed to at least one of `interests`
    ///
    /// The interest list is validated before anything is sent, then injected
    /// into a copy of `payload` under the `interests` key.
    ///
    /// # Arguments
    ///
    /// * `interests` - Between 1 and 100 interest names
    /// * `payload` - Platform-specific notification bodies keyed by platform
    ///   (`apns`, `fcm`, `web`); must serialize to a JSON object
    ///
    /// # Returns
    ///
    /// Returns `Ok(publish_id)` on success, or `Err(BeamsError)` if validation,
    /// serialization, the network call, or the service rejects the request.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use beams_sdk::BeamsClient;
    /// use serde_json::json;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = BeamsClient::new("instance-id", "SECRET")?;
    ///
    /// let payload = json!({
    ///     "apns": {"aps": {"alert": {"title": "Hello", "body": "Hello, world"}}},
    ///     "fcm": {"notification": {"title": "Hello", "body": "Hello, world"}}
    /// });
    ///
    /// let publish_id = client.publish_to_interests(&["hello"], &payload).await?;
    /// println!("Publish id: {}", publish_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn publish_to_interests<S, P>(
        &self,
        interests: &[S],
        payload: &P,
    ) -> Result<String, BeamsError>
    where
        S: AsRef<str>,
        P: Serialize + ?Sized,
    {
        validate_interests(interests)?;
        let body = build_publish_body(payload, INTERESTS_KEY, interests)?;

        let url = format!(
            "{}/publish_api/v1/instances/{}/publishes",
            self.base_endpoint, self.instance_id
        );

        tracing::info!(
            "Publishing to {} interest(s) on instance {}",
            interests.len(),
            self.instance_id
        );

        self.publish_to_api(&url, &body).await
    }

    /// An alias for [`publish_to_interests`](Self::publish_to_interests)
    #[deprecated(note = "use `publish_to_interests` instead")]
    pub async fn publish<S, P>(&self, interests: &[S], payload: &P) -> Result<String, BeamsError>
    where
        S: AsRef<str>,
        P: Serialize + ?Sized,
    {
        self.publish_to_interests(interests, payload).await
    }

    /// Publish a notification to every device associated with the given user ids
    ///
    /// # Arguments
    ///
    /// * `users` - Between 1 and 1000 user ids, each non-empty, at most 164
    ///   bytes and valid UTF-8
    /// * `payload` - Platform-specific notification bodies; must serialize to
    ///   a JSON object
    ///
    /// # Example
    ///
    /// ```no_run
    /// use beams_sdk::BeamsClient;
    /// use serde_json::json;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = BeamsClient::new("instance-id", "SECRET")?;
    /// let payload = json!({"web": {"notification": {"title": "Hello"}}});
    ///
    /// let publish_id = client.publish_to_users(&["user-001", "user-002"], &payload).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn publish_to_users<U, P>(&self, users: &[U], payload: &P) -> Result<String, BeamsError>
    where
        U: AsRef<[u8]>,
        P: Serialize + ?Sized,
    {
        let user_ids = validate_users(users)?;
        let body = build_publish_body(payload, USERS_KEY, &user_ids)?;

        let url = format!(
            "{}/publish_api/v1/instances/{}/publishes/users",
            self.base_endpoint, self.instance_id
        );

        tracing::info!(
            "Publishing to {} user(s) on instance {}",
            user_ids.len(),
            self.instance_id
        );

        self.publish_to_api(&url, &body).await
    }

    /// Remove a user and every device associated with them from the instance
    ///
    /// # Example
    ///
    /// ```no_run
    /// use beams_sdk::BeamsClient;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = BeamsClient::new("instance-id", "SECRET")?;
    /// client.delete_user("user-001").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn delete_user<U>(&self, user_id: U) -> Result<(), BeamsError>
    where
        U: AsRef<[u8]>,
    {
        let user_id = validate_user_id(&user_id)?;
        let url = self.delete_user_url(user_id)?;

        tracing::info!("Deleting user from instance {}", self.instance_id);
        tracing::debug!("Sending delete user request to: {}", url);

        let (status, body) = self.execute(self.client.delete(url)).await?;

        classify_delete(status, &body).map_err(|e| {
            tracing::error!("Failed to delete user: {}", e);
            BeamsError::Api(e)
        })?;

        tracing::info!("User deleted from instance {}", self.instance_id);
        Ok(())
    }

    /// Create a signed JWT authorizing a device to register as `user_id`
    ///
    /// The token is valid for 24 hours and is never cached; every call signs a
    /// fresh one. No network call is made.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use beams_sdk::BeamsClient;
    ///
    /// let client = BeamsClient::new("instance-id", "SECRET")?;
    /// let beams_token = client.generate_token("user-001")?;
    ///
    /// // {"token":"eyJ..."} is what the device SDK expects back
    /// let response_body = serde_json::to_string(&beams_token).unwrap();
    /// # Ok::<(), beams_sdk::BeamsError>(())
    /// ```
    pub fn generate_token(&self, user_id: &str) -> Result<BeamsToken, BeamsError> {
        let user_id = validate_user_id(user_id)?;
        let claims = BeamsTokenClaims::new(&self.instance_id, user_id);

        tracing::debug!(
            "Generating user token for instance {} expiring at {}",
            self.instance_id,
            claims.exp
        );

        sign_token(&claims, &self.secret_key)
    }

    fn delete_user_url(&self, user_id: &str) -> Result<url::Url, BeamsError> {
        let mut url = url::Url::parse(&self.base_endpoint).map_err(|e| {
            BeamsError::InvalidConfiguration(format!("Invalid base endpoint: {}", e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                BeamsError::InvalidConfiguration(format!(
                    "Base endpoint '{}' cannot be used as a base URL",
                    self.base_endpoint
                ))
            })?
            .pop_if_empty()
            .extend([
                "customer_api",
                "v1",
                "instances",
                self.instance_id.as_str(),
                "users",
                user_id,
            ]);

        Ok(url)
    }

    async fn publish_to_api(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<String, BeamsError> {
        let body = serde_json::to_vec(body).map_err(|e| BeamsError::Serialization(e.to_string()))?;

        tracing::debug!("Sending publish request to: {}", url);

        let (status, response_body) = self.execute(self.client.post(url).body(body)).await?;

        let publish_id = classify_publish(status, &response_body).map_err(|e| {
            tracing::error!("Failed to publish notification: {}", e);
            BeamsError::Api(e)
        })?;

        tracing::info!("Notification published successfully: publish_id={}", publish_id);
        Ok(publish_id)
    }

    /// Attach the mandatory headers, send once, and read the whole response
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<(u16, Vec<u8>), ApiError> {
        let response = request
            .header(
                "Authorization",
                format!("Bearer {}", self.secret_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .header("X-Pusher-Library", LIBRARY_HEADER_VALUE)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed due to a network error: {}", e);
                ApiError::from(e)
            })?;

        let status = response.status().as_u16();
        tracing::debug!("Received response with status: {}", status);

        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            ApiError::from(e)
        })?;

        Ok((status, body.to_vec()))
    }
}
