//! Shared HTTP request plumbing.
//!
//! Every Proxmox VE endpoint follows the same flow: send the request, log
//! status and body at debug level, map transport and status failures onto
//! [`ClientError`], and unwrap the `{"data": ...}` response envelope.

use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// Proxmox wraps every payload in a `{"data": ...}` envelope.
#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

/// Execute a request and return the response body on success.
///
/// Non-2xx statuses become errors here so endpoint code never inspects
/// status codes itself:
/// - 401 → [`ClientError::InvalidCredentials`]
/// - 403 → [`ClientError::PermissionDenied`]
/// - anything else → [`ClientError::Api`] with the server's message
pub(crate) async fn execute(
    request: RequestBuilder,
    method: &str,
    path: &str,
) -> Result<String> {
    log::debug!("{method} {path}");

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ClientError::Timeout { source: e }
        } else {
            ClientError::Network { source: e }
        }
    })?;

    let status = response.status();
    log::debug!("Response Status: {status}");

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Network { source: e })?;

    log::debug!("Response Body: {}", truncate_for_log(&body));

    if status.is_success() {
        return Ok(body);
    }

    // pveproxy often sends the reason in the status line with an empty body
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        truncate_for_log(body.trim())
    };

    let err = match status.as_u16() {
        401 => ClientError::InvalidCredentials { message },
        403 => ClientError::PermissionDenied { message },
        code => ClientError::Api {
            status: code,
            message,
        },
    };

    if err.is_expected() {
        log::warn!("{method} {path} failed: {err}");
    } else {
        log::error!("{method} {path} failed: {err}");
    }
    Err(err)
}

/// Unwrap the `data` envelope of a response body.
pub(crate) fn parse_data<T>(body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(body));
        ClientError::Parse {
            detail: e.to_string(),
        }
    })?;

    envelope.data.ok_or_else(|| ClientError::Parse {
        detail: "response has no data field".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RealmRecord;

    #[test]
    fn parse_data_unwraps_envelope() {
        let body = r#"{"data": [{"realm": "pam", "type": "pam"}]}"#;
        let records: Vec<RealmRecord> = parse_data(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].realm, "pam");
    }

    #[test]
    fn parse_data_empty_list() {
        let body = r#"{"data": []}"#;
        let records: Vec<RealmRecord> = parse_data(body).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn parse_data_null_data_is_error() {
        let body = r#"{"data": null}"#;
        let result: Result<Vec<RealmRecord>> = parse_data(body);
        assert!(matches!(
            result,
            Err(ClientError::Parse { detail }) if detail.contains("no data field")
        ));
    }

    #[test]
    fn parse_data_invalid_json_is_error() {
        let result: Result<Vec<RealmRecord>> = parse_data("not json");
        assert!(matches!(result, Err(ClientError::Parse { .. })));
    }

    #[test]
    fn parse_data_missing_envelope_is_error() {
        // A body without the data wrapper deserializes the envelope but
        // yields no data.
        let result: Result<Vec<RealmRecord>> = parse_data("{}");
        assert!(matches!(result, Err(ClientError::Parse { .. })));
    }
}
