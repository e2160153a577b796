//! Results of the two remote calls.

use serde::{Deserialize, Serialize};

/// A file pinned to IPFS.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedFile {
    /// Content hash returned by the pinning service
    pub ipfs_hash: String,
    /// Public gateway URL for the content
    pub gateway_url: String,
}

impl PinnedFile {
    /// Builds the gateway URL for `ipfs_hash` under `gateway`.
    pub fn new(gateway: &str, ipfs_hash: impl Into<String>) -> Self {
        let ipfs_hash = ipfs_hash.into();
        let gateway_url = format!("{}/ipfs/{}", gateway.trim_end_matches('/'), ipfs_hash);
        Self {
            ipfs_hash,
            gateway_url,
        }
    }
}

/// Successful answer from the validation backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedLink {
    /// Link the backend resolved
    pub link: String,
    /// User the link belongs to
    pub username: String,
}
