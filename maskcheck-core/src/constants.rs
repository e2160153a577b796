//! Constants for maskcheck.
//!
//! Remote endpoints and configuration keys.

// ═══════════════════════════════════════════════════════════════════════════════
// PINATA
// ═══════════════════════════════════════════════════════════════════════════════

/// Pinata endpoint that pins a multipart-uploaded file.
pub const PINATA_PIN_FILE_URL: &str = "https://api.pinata.cloud/pinning/pinFileToIPFS";

/// Public gateway used to build links to pinned content.
pub const PINATA_GATEWAY_URL: &str = "https://gateway.pinata.cloud";

/// Header carrying the Pinata API key.
pub const PINATA_API_KEY_HEADER: &str = "pinata_api_key";

/// Header carrying the Pinata API secret.
pub const PINATA_SECRET_HEADER: &str = "pinata_secret_api_key";

/// Multipart field name the pinning endpoint reads the file from.
pub const PINATA_FILE_FIELD: &str = "file";

// ═══════════════════════════════════════════════════════════════════════════════
// VALIDATION BACKEND
// ═══════════════════════════════════════════════════════════════════════════════

/// Route on the backend that validates a gateway link.
pub const VALIDATION_ROUTE: &str = "/api/validategetlink";

/// Base URL of the backend when none is configured.
pub const DEFAULT_VALIDATION_BASE_URL: &str = "http://localhost:3000";

// ═══════════════════════════════════════════════════════════════════════════════
// HTTP
// ═══════════════════════════════════════════════════════════════════════════════

/// Default request timeout for every outbound call.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// MIME type used when a file's type cannot be determined.
pub const FALLBACK_MIME: &str = "application/octet-stream";

// ═══════════════════════════════════════════════════════════════════════════════
// ENVIRONMENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Pinata API key.
pub const ENV_PINATA_API_KEY: &str = "PINATA_API_KEY";

/// Pinata API secret.
pub const ENV_PINATA_SECRET_API_KEY: &str = "PINATA_SECRET_API_KEY";

/// Older name for the API key, still honored.
pub const ENV_LEGACY_API_KEY: &str = "NEXT_PUBLIC_API_Key";

/// Older name for the API secret, still honored.
pub const ENV_LEGACY_API_SECRET: &str = "NEXT_PUBLIC_API_Secret";

/// Override for the gateway host.
pub const ENV_PINATA_GATEWAY_URL: &str = "PINATA_GATEWAY_URL";

/// Base URL of the validation backend.
pub const ENV_VALIDATION_BASE_URL: &str = "VALIDATION_BASE_URL";

/// Request timeout in seconds.
pub const ENV_HTTP_TIMEOUT_SECONDS: &str = "HTTP_TIMEOUT_SECONDS";

/// `concurrent` or `sequential`.
pub const ENV_PIPELINE_MODE: &str = "PIPELINE_MODE";
