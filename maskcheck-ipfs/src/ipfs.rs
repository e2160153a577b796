//! Pinata client implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use maskcheck_core::constants::{
    DEFAULT_TIMEOUT_SECONDS, ENV_LEGACY_API_KEY, ENV_LEGACY_API_SECRET, ENV_PINATA_API_KEY,
    ENV_PINATA_SECRET_API_KEY, PINATA_API_KEY_HEADER, PINATA_FILE_FIELD, PINATA_GATEWAY_URL,
    PINATA_PIN_FILE_URL, PINATA_SECRET_HEADER,
};
use maskcheck_core::error::{MaskcheckError, Result};
use maskcheck_core::traits::Pinner;
use maskcheck_core::types::{PinnedFile, SelectedFile};

/// Pinata client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PinataConfig {
    /// Upload endpoint (e.g. "https://api.pinata.cloud/pinning/pinFileToIPFS")
    pub pin_file_url: String,
    /// Gateway used to build public links (e.g. "https://gateway.pinata.cloud")
    pub gateway_url: String,
    /// API key; read from the environment at upload time when unset
    pub api_key: Option<String>,
    /// API secret; read from the environment at upload time when unset
    pub secret_api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for PinataConfig {
    fn default() -> Self {
        Self {
            pin_file_url: PINATA_PIN_FILE_URL.into(),
            gateway_url: PINATA_GATEWAY_URL.into(),
            api_key: None,
            secret_api_key: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl PinataConfig {
    /// Creates a config with fixed credentials.
    pub fn with_credentials(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            secret_api_key: Some(secret.into()),
            ..Default::default()
        }
    }

    /// Overrides the upload endpoint.
    pub fn with_pin_file_url(mut self, url: impl Into<String>) -> Self {
        self.pin_file_url = url.into();
        self
    }

    /// Overrides the gateway host.
    pub fn with_gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateway_url = gateway.into();
        self
    }

    /// Resolves credentials, falling back to `lookup` for unset values.
    ///
    /// The canonical variable names win over the legacy ones.
    fn credentials_from<F>(&self, lookup: F) -> Result<PinataCredentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |v: Option<String>| v.filter(|v| !v.trim().is_empty());
        let pick = |explicit: &Option<String>, primary: &str, legacy: &str| {
            non_blank(explicit.clone())
                .or_else(|| non_blank(lookup(primary)))
                .or_else(|| non_blank(lookup(legacy)))
        };

        let api_key = pick(&self.api_key, ENV_PINATA_API_KEY, ENV_LEGACY_API_KEY)
            .ok_or_else(|| MaskcheckError::ConfigError("Pinata API key not configured".into()))?;
        let secret_api_key = pick(
            &self.secret_api_key,
            ENV_PINATA_SECRET_API_KEY,
            ENV_LEGACY_API_SECRET,
        )
        .ok_or_else(|| MaskcheckError::ConfigError("Pinata secret key not configured".into()))?;

        Ok(PinataCredentials {
            api_key,
            secret_api_key,
        })
    }

    /// Resolves credentials against the process environment.
    pub fn credentials(&self) -> Result<PinataCredentials> {
        self.credentials_from(|name| std::env::var(name).ok())
    }
}

/// API key pair sent with every upload.
#[derive(Clone, PartialEq, Eq)]
pub struct PinataCredentials {
    /// Value of the `pinata_api_key` header
    pub api_key: String,
    /// Value of the `pinata_secret_api_key` header
    pub secret_api_key: String,
}

impl std::fmt::Debug for PinataCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinataCredentials")
            .field("api_key", &self.api_key)
            .field("secret_api_key", &"<redacted>")
            .finish()
    }
}

/// Client for pinning files through Pinata.
pub struct PinataClient {
    config: PinataConfig,
    http_client: reqwest::Client,
}

impl PinataClient {
    /// Creates a client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(PinataConfig::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: PinataConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| MaskcheckError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PinataConfig {
        &self.config
    }

    /// Uploads `file` and returns its content hash and gateway URL.
    #[instrument(skip(self, file), fields(name = %file.name, size = file.len()))]
    pub async fn upload(&self, file: &SelectedFile) -> Result<PinnedFile> {
        let creds = self.config.credentials()?;

        let file_part = reqwest::multipart::Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|e| MaskcheckError::IpfsUploadFailed(e.to_string()))?;

        let form = reqwest::multipart::Form::new().part(PINATA_FILE_FIELD, file_part);

        let response = self
            .http_client
            .post(&self.config.pin_file_url)
            .header(PINATA_API_KEY_HEADER, &creds.api_key)
            .header(PINATA_SECRET_HEADER, &creds.secret_api_key)
            .multipart(form)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(%status, "Pinata rejected upload");
            return Err(MaskcheckError::IpfsUploadFailed(format!(
                "Upload failed with status {}: {}",
                status, text
            )));
        }

        let json: PinataResponse = response
            .json()
            .await
            .map_err(|e| MaskcheckError::IpfsUploadFailed(e.to_string()))?;

        validate_hash(&json.ipfs_hash)?;

        let pinned = PinnedFile::new(&self.config.gateway_url, json.ipfs_hash);
        debug!(cid = %pinned.ipfs_hash, url = %pinned.gateway_url, "Pinned to IPFS");
        Ok(pinned)
    }
}

#[async_trait]
impl Pinner for PinataClient {
    async fn pin_file(&self, file: &SelectedFile) -> Result<PinnedFile> {
        self.upload(file).await
    }
}

fn map_send_error(e: reqwest::Error) -> MaskcheckError {
    if e.is_timeout() {
        MaskcheckError::ConnectionTimeout(e.to_string())
    } else {
        MaskcheckError::IpfsUploadFailed(e.to_string())
    }
}

/// Rejects hashes that cannot be placed in a URL path segment.
fn validate_hash(hash: &str) -> Result<()> {
    if hash.is_empty() {
        return Err(MaskcheckError::InvalidIpfsCid("CID cannot be empty".into()));
    }
    if !hash.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(MaskcheckError::InvalidIpfsCid(format!(
            "CID contains invalid characters: {}",
            hash
        )));
    }
    Ok(())
}

/// Pinata `pinFileToIPFS` response.
#[derive(Debug, Deserialize)]
struct PinataResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
    #[serde(rename = "PinSize", default)]
    #[allow(dead_code)]
    pin_size: Option<u64>,
    #[serde(rename = "Timestamp", default)]
    #[allow(dead_code)]
    timestamp: Option<String>,
}
