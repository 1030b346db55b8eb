//! Common types shared by the CCM client crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// Name of the profile every client starts on.
pub const DEFAULT_PROFILE: &str = "default";

/// Version reported by this client.
pub const CLIENT_VERSION: &str = "v1.0.0";

/// Outcome of a write-style operation.
///
/// Profile operations and request submission report failures here instead of
/// returning an error, so the caller can inspect `success` and move on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpResponse {
    pub success: bool,

    /// Why the operation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    /// Schedule to poll once a request has been accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_schedule_id: Option<String>,

    /// Opaque token issued when a profile is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
}

impl OpResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            msg: None,
            next_schedule_id: None,
            request_id: None,
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: Some(msg.into()),
            next_schedule_id: None,
            request_id: None,
        }
    }

    pub fn with_next_schedule(mut self, schedule_id: impl Into<String>) -> Self {
        self.next_schedule_id = Some(schedule_id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = Some(request_id);
        self
    }
}

impl From<Result<()>> for OpResponse {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => OpResponse::ok(),
            Err(err) => OpResponse::failure(err.to_string()),
        }
    }
}

impl From<Result<Uuid>> for OpResponse {
    fn from(result: Result<Uuid>) -> Self {
        match result {
            Ok(request_id) => OpResponse::ok().with_request_id(request_id),
            Err(err) => OpResponse::failure(err.to_string()),
        }
    }
}

/// Version block reported by the CCM server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerVersion {
    pub version: String,
}

/// Connectivity check: which client, which server, which profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    pub client_version: String,
    pub server_version: ServerVersion,
    pub preference_profile: String,
}
