//! Validation backend client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use maskcheck_core::constants::{
    DEFAULT_TIMEOUT_SECONDS, DEFAULT_VALIDATION_BASE_URL, VALIDATION_ROUTE,
};
use maskcheck_core::error::{MaskcheckError, Result};
use maskcheck_core::traits::LinkValidator;
use maskcheck_core::types::ValidatedLink;

/// Validation client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Backend origin (e.g. "http://localhost:3000")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VALIDATION_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ValidationConfig {
    /// Creates a config for the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full URL of the validation route.
    pub fn endpoint(&self) -> Result<Url> {
        let invalid = |reason: String| MaskcheckError::InvalidUrl {
            url: self.base_url.clone(),
            reason,
        };
        let base = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("cannot be used as a base".into()));
        }
        base.join(VALIDATION_ROUTE).map_err(|e| invalid(e.to_string()))
    }
}

#[derive(Serialize)]
struct ValidateRequest<'a> {
    link: &'a str,
}

/// Client for `POST /api/validategetlink`.
pub struct ValidationClient {
    endpoint: Url,
    http_client: reqwest::Client,
}

impl ValidationClient {
    /// Creates a client against the default local backend.
    pub fn new() -> Result<Self> {
        Self::with_config(ValidationConfig::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: ValidationConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| MaskcheckError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            endpoint,
            http_client,
        })
    }

    /// The resolved route URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends `link` to the backend for validation.
    #[instrument(skip(self))]
    pub async fn validate(&self, link: &str) -> Result<ValidatedLink> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(&ValidateRequest { link })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MaskcheckError::ConnectionTimeout(e.to_string())
                } else {
                    MaskcheckError::HttpError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(%status, "Validation route rejected link");
            return Err(MaskcheckError::ValidationFailed(format!(
                "status {}: {}",
                status, text
            )));
        }

        let validated: ValidatedLink = response
            .json()
            .await
            .map_err(|e| MaskcheckError::ValidationFailed(format!("unreadable response: {}", e)))?;

        debug!(username = %validated.username, "Link validated");
        Ok(validated)
    }
}

#[async_trait]
impl LinkValidator for ValidationClient {
    async fn validate_link(&self, link: &str) -> Result<ValidatedLink> {
        self.validate(link).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LINK: &str = "https://gateway.pinata.cloud/ipfs/Qm123";

    fn client_for(server: &MockServer) -> ValidationClient {
        ValidationClient::with_config(ValidationConfig::new(server.uri())).unwrap()
    }

    #[test]
    fn test_endpoint_join() {
        let config = ValidationConfig::new("http://localhost:3000");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://localhost:3000/api/validategetlink"
        );

        // Route is absolute, so a path on the base is replaced
        let config = ValidationConfig::new("https://example.com/app/");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://example.com/api/validategetlink"
        );
    }

    #[test]
    fn test_endpoint_invalid_base() {
        let err = ValidationConfig::new("not a url").endpoint().unwrap_err();
        assert!(matches!(err, MaskcheckError::InvalidUrl { .. }));

        let err = ValidationConfig::new("mailto:a@b.c").endpoint().unwrap_err();
        assert!(matches!(err, MaskcheckError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_validate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/validategetlink"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "link": LINK })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "link": LINK,
                "username": "ada"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let validated = client_for(&server).validate(LINK).await.unwrap();
        assert_eq!(validated.link, LINK);
        assert_eq!(validated.username, "ada");
    }

    #[tokio::test]
    async fn test_validate_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/validategetlink"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).validate(LINK).await.unwrap_err();
        assert!(matches!(err, MaskcheckError::ValidationFailed(ref m) if m.contains("404")));
    }

    #[tokio::test]
    async fn test_validate_missing_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/validategetlink"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "link": LINK })))
            .mount(&server)
            .await;

        let err = client_for(&server).validate(LINK).await.unwrap_err();
        assert!(matches!(err, MaskcheckError::ValidationFailed(_)));
    }

    #[tokio::test]
    async fn test_validate_unreachable_backend() {
        // Port 9 (discard) is not listening in test environments
        let client =
            ValidationClient::with_config(ValidationConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client.validate(LINK).await.unwrap_err();
        assert!(err.is_network_error());
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(ValidateRequest { link: LINK }).unwrap();
        assert_eq!(body, json!({ "link": LINK }));
    }
}
