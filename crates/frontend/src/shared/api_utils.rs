//! API utilities for frontend-backend communication
//!
//! Provides the API base URL, the typed error returned by every backend
//! call and the helper that turns a `gloo-net` response into a typed value.

use contracts::shared::envelope::DetailResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Port the portal backend listens on when the base is derived from the page
const API_PORT: u16 = 8000;

/// Path prefix under which the backend mounts its routes
const API_PREFIX: &str = "/test";

/// Get the base URL for API requests
///
/// Uses `PORTAL_API_BASE` when it was set at compile time. Otherwise the URL
/// is built from the current window location on port 8000.
///
/// # Returns
/// - API base URL like "http://localhost:8000/test"
/// - Empty string if window is not available and no override was given
pub fn api_base() -> String {
    if let Some(base) = option_env!("PORTAL_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}{}", protocol, hostname, API_PORT, API_PREFIX)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/auth/signin");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Errors produced by backend calls.
///
/// `Display` is the text shown to the user on forms that surface errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to build request: {0}")]
    Build(String),
    #[error("Failed to send request: {0}")]
    Network(String),
    /// Non-2xx status; `detail` is the backend message or a caller fallback
    #[error("{detail}")]
    Status { status: u16, detail: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build the error for a rejected request from its status and decoded body
    pub fn rejected(status: u16, body: Option<DetailResponse>, fallback: &str) -> Self {
        let detail = body
            .and_then(|b| b.detail)
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        ApiError::Status { status, detail }
    }

    /// Backend reported the session credential as missing or expired
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

/// Send a prepared request and decode the JSON body.
///
/// `fallback` is used as the error message when a rejected response carries
/// no `detail`.
pub async fn send_json<T>(request: Request, fallback: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response, fallback).await
}

async fn read_json<T>(response: Response, fallback: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let body = response.json::<DetailResponse>().await.ok();
        return Err(ApiError::rejected(response.status(), body, fallback));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_prefers_backend_detail() {
        let body = DetailResponse {
            detail: Some("Invalid email or password".to_string()),
        };
        let err = ApiError::rejected(400, Some(body), "Login failed");
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_rejected_falls_back() {
        assert_eq!(
            ApiError::rejected(500, None, "Login failed").to_string(),
            "Login failed"
        );
        let blank = DetailResponse {
            detail: Some("  ".to_string()),
        };
        assert_eq!(
            ApiError::rejected(500, Some(blank), "Login failed").to_string(),
            "Login failed"
        );
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(ApiError::rejected(401, None, "x").is_unauthorized());
        assert!(!ApiError::rejected(403, None, "x").is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}
