//! Request and response envelopes exchanged with the classprint rendering API.
//!
//! Every generate endpoint accepts a [`GenerateRequest`] and answers with an
//! envelope carrying a `success` flag. Failures are reported in-band through
//! the `error` field instead of an HTTP error status, so callers always get a
//! decodable body.

use serde::{Deserialize, Serialize};

/// Body of every `POST /api/.../generate*` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub yaml_content: String,
}

impl GenerateRequest {
    pub fn new(yaml_content: impl Into<String>) -> Self {
        Self {
            yaml_content: yaml_content.into(),
        }
    }
}

/// Hypertext output envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub html: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn ok(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            html: String::new(),
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Word-processor output envelope; the document travels base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocxResponse {
    pub docx_base64: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocxResponse {
    pub fn ok(docx_base64: impl Into<String>) -> Self {
        Self {
            docx_base64: docx_base64.into(),
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            docx_base64: String::new(),
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Liveness payloads served by `GET /` and `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: String,
}

impl ServiceStatus {
    pub fn running(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            status: "running".to_string(),
        }
    }

    pub fn healthy() -> Self {
        Self {
            message: None,
            status: "healthy".to_string(),
        }
    }
}
