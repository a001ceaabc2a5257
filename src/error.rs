//! Failure kinds for starting a recording

use serde_json::Value;
use thiserror::Error;

/// Why a start-recording call failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordingError {
    /// Jibri answered with a non-2xx status
    #[error("Jibri rejected the request with status {status}: {body}")]
    ServerRejected { status: u16, body: Value },

    /// The request went out but no response came back (connection failure, timeout, reset)
    #[error("No response from Jibri: {detail}")]
    NoResponse { detail: String },

    /// The request could not be dispatched at all
    #[error("Unexpected error: {message}")]
    LocalFault { message: String },
}

impl From<reqwest::Error> for RecordingError {
    fn from(err: reqwest::Error) -> Self {
        // Builder errors never reach the network
        if err.is_builder() {
            RecordingError::LocalFault {
                message: err.to_string(),
            }
        } else {
            RecordingError::NoResponse {
                detail: describe(&err),
            }
        }
    }
}

// reqwest's top-level message hides the cause (e.g. "connection refused")
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
