//! Request handlers for the chat and upload endpoints.
//!
//! Each handler derives a lookup string (the message, or the uploaded file's
//! original name) and hands it to the shared `ResponseMatcher`.

pub(crate) mod chat;
pub(crate) mod upload;

use farmbot_core::Category;
use serde::Serialize;

/// Success envelope shared by the three matching endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct MatchEnvelope {
    pub(crate) response: String,
    #[serde(rename = "type")]
    pub(crate) category: Category,
    /// Original upload name; absent for text chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) filename: Option<String>,
    pub(crate) success: bool,
    pub(crate) timestamp: String,
}

impl MatchEnvelope {
    pub(crate) fn new(category: Category, response: &str, filename: Option<String>) -> Self {
        Self {
            response: response.to_string(),
            category,
            filename,
            success: true,
            timestamp: iso_timestamp(),
        }
    }
}

/// Current UTC time as RFC 3339 with milliseconds (`2026-10-17T08:00:00.000Z`).
pub(crate) fn iso_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
