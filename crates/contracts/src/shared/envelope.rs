//! Response envelopes used by the portal backend.
//!
//! Successful payloads are wrapped as `{ "data": ... }`; failures carry a
//! human readable `detail` message.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Body returned by informational endpoints and by every error response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_optional() {
        let body: DetailResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, None);

        let body: DetailResponse =
            serde_json::from_str(r#"{"detail":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Invalid credentials"));
    }
}
