//! Form configuration: remote endpoints and pipeline mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use maskcheck_core::constants::{
    ENV_HTTP_TIMEOUT_SECONDS, ENV_PINATA_GATEWAY_URL, ENV_PIPELINE_MODE, ENV_VALIDATION_BASE_URL,
};
use maskcheck_core::error::{MaskcheckError, Result};
use maskcheck_ipfs::PinataConfig;
use maskcheck_validate::ValidationConfig;

/// How the two role pipelines are scheduled on submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineMode {
    /// Element first, then certificate. A failed element upload stops the
    /// submission before the certificate is touched.
    #[default]
    Sequential,
    /// Both roles run at once and are joined at the end. A failed upload
    /// only affects its own role.
    Concurrent,
}

impl fmt::Display for PipelineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineMode::Concurrent => f.write_str("concurrent"),
            PipelineMode::Sequential => f.write_str("sequential"),
        }
    }
}

impl FromStr for PipelineMode {
    type Err = MaskcheckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Ok(PipelineMode::Concurrent),
            "sequential" => Ok(PipelineMode::Sequential),
            other => Err(MaskcheckError::ConfigError(format!(
                "unknown pipeline mode '{}' (expected concurrent or sequential)",
                other
            ))),
        }
    }
}

/// Everything needed to build a [`crate::ValidationForm`] against real services.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FormConfig {
    /// Pinning service settings
    pub pinata: PinataConfig,
    /// Validation backend settings
    pub validation: ValidationConfig,
    /// Pipeline scheduling
    pub mode: PipelineMode,
}

impl FormConfig {
    /// Loads `.env` (if present) and reads overrides from the environment.
    ///
    /// Pinata credentials are left unset here; the client reads them from
    /// the environment on every upload.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(gateway) = lookup(ENV_PINATA_GATEWAY_URL) {
            config.pinata.gateway_url = gateway;
        }
        if let Some(base) = lookup(ENV_VALIDATION_BASE_URL) {
            config.validation.base_url = base;
        }
        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECONDS) {
            let seconds: u64 = raw.trim().parse().map_err(|_| {
                MaskcheckError::ConfigError(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_HTTP_TIMEOUT_SECONDS, raw
                ))
            })?;
            config.pinata.timeout_seconds = seconds;
            config.validation.timeout_seconds = seconds;
        }
        if let Some(mode) = lookup(ENV_PIPELINE_MODE) {
            config.mode = mode.parse()?;
        }

        Ok(config)
    }

    /// Sets the pipeline mode.
    pub fn with_mode(mut self, mode: PipelineMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use maskcheck_core::constants::{DEFAULT_TIMEOUT_SECONDS, PINATA_GATEWAY_URL};

    fn lookup_in(env: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |name| env.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults() {
        let config = FormConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.mode, PipelineMode::Sequential);
        assert_eq!(config.pinata.gateway_url, PINATA_GATEWAY_URL);
        assert_eq!(config.validation.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert!(config.pinata.api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let env = HashMap::from([
            (ENV_PINATA_GATEWAY_URL, "https://my.mypinata.cloud"),
            (ENV_VALIDATION_BASE_URL, "https://app.example.com"),
            (ENV_HTTP_TIMEOUT_SECONDS, "5"),
            (ENV_PIPELINE_MODE, "Concurrent"),
        ]);
        let config = FormConfig::from_lookup(lookup_in(env)).unwrap();
        assert_eq!(config.pinata.gateway_url, "https://my.mypinata.cloud");
        assert_eq!(config.validation.base_url, "https://app.example.com");
        assert_eq!(config.pinata.timeout_seconds, 5);
        assert_eq!(config.validation.timeout_seconds, 5);
        assert_eq!(config.mode, PipelineMode::Concurrent);
    }

    #[test]
    fn test_bad_timeout() {
        let env = HashMap::from([(ENV_HTTP_TIMEOUT_SECONDS, "soon")]);
        let err = FormConfig::from_lookup(lookup_in(env)).unwrap_err();
        assert!(matches!(err, MaskcheckError::ConfigError(_)));
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("concurrent".parse::<PipelineMode>().unwrap(), PipelineMode::Concurrent);
        assert!("parallel".parse::<PipelineMode>().is_err());
        assert_eq!(PipelineMode::Sequential.to_string(), "sequential");
    }
}
