//! Shared response envelope.

use serde::Serialize;

/// Response envelope used by every endpoint except `/health`.
///
/// The `status` field is always present: `"ok"` on success, a human-readable
/// description on failure. `domains` appears only on the query success path.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            domains: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: message.into(),
            domains: None,
        }
    }

    pub fn with_domains(domains: Vec<String>) -> Self {
        Self {
            status: "ok".to_string(),
            domains: Some(domains),
        }
    }
}
