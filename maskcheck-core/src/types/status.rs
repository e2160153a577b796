//! Per-role progress through the upload & validate pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a role currently is in its pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleStatus {
    /// Nothing submitted yet (or reset by a type change).
    #[default]
    Idle,
    /// File is being sent to the pinning service.
    Uploading,
    /// Gateway link is being checked by the backend.
    Validating,
    /// Validation succeeded.
    Done,
    /// Upload or validation failed.
    Failed,
}

impl RoleStatus {
    /// Returns true while a network call for the role is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RoleStatus::Uploading | RoleStatus::Validating)
    }
}

impl fmt::Display for RoleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoleStatus::Idle => "idle",
            RoleStatus::Uploading => "uploading",
            RoleStatus::Validating => "validating",
            RoleStatus::Done => "done",
            RoleStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}
