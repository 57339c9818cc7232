use reqwest::blocking::Response;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::engine::error::CapabilityError;

/// Transport-level failures never reach the service's decision logic.
pub fn transport_error(err: reqwest::Error) -> CapabilityError {
    if err.is_timeout() {
        CapabilityError::Unavailable("request timed out".into())
    } else if err.is_connect() {
        CapabilityError::Unavailable(format!("could not connect: {err}"))
    } else {
        CapabilityError::Unavailable(err.to_string())
    }
}

pub fn classify_status(status: StatusCode, body: &str) -> Option<CapabilityError> {
    if status.is_success() {
        return None;
    }

    let message = error_message(body).unwrap_or_else(|| status.to_string());
    if status.is_client_error() {
        Some(CapabilityError::Rejected(message))
    } else {
        Some(CapabilityError::Unavailable(message))
    }
}

/// Pull a human readable message out of a JSON error body. Handles both
/// `{"error": "..."}` and `{"error": {"message": "..."}}`.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    error
        .as_str()
        .or_else(|| error.get("message").and_then(|m| m.as_str()))
        .map(str::to_string)
}

pub fn check_status(resp: Response) -> Result<Response, CapabilityError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(classify_status(status, &body).unwrap_or_else(|| CapabilityError::Unavailable(status.to_string())))
}

pub fn decode_json<T: DeserializeOwned>(resp: Response) -> Result<T, CapabilityError> {
    check_status(resp)?
        .json::<T>()
        .map_err(|e| CapabilityError::Unavailable(format!("malformed reply: {e}")))
}
