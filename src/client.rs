use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::JibriConfig;
use crate::error::RecordingError;
use crate::models::recording::StartRecordingRequest;

/// Starts a recording session for a room
#[async_trait]
pub trait RecordingStarter: Send + Sync {
    /// Issue one start request and return the decoded response body
    async fn start_recording(&self, room_name: &str) -> Result<Value, RecordingError>;
}

/// Client for the Jibri REST API
pub struct JibriClient {
    client: Client,
    config: JibriConfig,
}

impl JibriClient {
    /// Create a client whose every request is bounded by `config.timeout`
    pub fn new(config: JibriConfig) -> Result<Self, RecordingError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| RecordingError::LocalFault {
                message: err.to_string(),
            })?;

        Ok(Self { client, config })
    }

    /// Create a client from `JIBRI_API_URL` (or `.env`)
    pub fn from_env() -> Result<Self, RecordingError> {
        Self::new(JibriConfig::from_env())
    }

    pub fn config(&self) -> &JibriConfig {
        &self.config
    }

    async fn send(&self, request: &StartRecordingRequest) -> Result<Value, RecordingError> {
        let url = self.config.start_recording_url();
        debug!("API URL: {}", url);

        let res = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = res.status();
        info!("Response received with status: {}", status);

        let body = decode_body(&res.text().await?);
        if status.is_success() {
            Ok(body)
        } else {
            Err(RecordingError::ServerRejected {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn report(&self, err: &RecordingError) {
        match err {
            RecordingError::ServerRejected { status, body } => {
                error!("❌ Recording failed: {}", status);
                error!("Response data: {}", body);
            }
            RecordingError::NoResponse { detail } => {
                error!("❌ No response from server: {}", detail);
                error!("Check if Jibri API is running on {}", self.config.base_url);
            }
            RecordingError::LocalFault { message } => {
                error!("❌ Unexpected error: {}", message);
            }
        }
    }
}

#[async_trait]
impl RecordingStarter for JibriClient {
    async fn start_recording(&self, room_name: &str) -> Result<Value, RecordingError> {
        info!("Attempting to start recording for room: {}", room_name);

        let request = StartRecordingRequest::new(room_name, &self.config.recorder);
        let result = self.send(&request).await;

        match &result {
            Ok(body) => info!("✅ Recording started successfully: {}", body),
            Err(err) => self.report(err),
        }
        result
    }
}

/// Accept any body: empty is `null`, non-JSON text is kept as a string
pub(crate) fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
