use dotenv::dotenv;
use std::env;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the Jibri API base URL
pub const BASE_URL_ENV: &str = "JIBRI_API_URL";

/// Fallback Jibri endpoint when `JIBRI_API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://82.29.166.156:2222";

/// Client-side limit on the whole request/response cycle
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

pub const DEFAULT_CALL_URL_BASE: &str = "https://jitsi.parentme360.in";
pub const DEFAULT_RECORDER_EMAIL: &str = "recorder@parentme360.in";
pub const DEFAULT_RECORDER_DISPLAY_NAME: &str = "ParentMe Recorder";

/// Identity the recorder joins the call with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderIdentity {
    /// Jitsi host the room name is appended to
    pub call_url_base: String,
    pub email: String,
    pub display_name: String,
}

impl Default for RecorderIdentity {
    fn default() -> Self {
        Self {
            call_url_base: DEFAULT_CALL_URL_BASE.to_string(),
            email: DEFAULT_RECORDER_EMAIL.to_string(),
            display_name: DEFAULT_RECORDER_DISPLAY_NAME.to_string(),
        }
    }
}

/// Settings for talking to the Jibri API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JibriConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub recorder: RecorderIdentity,
}

impl Default for JibriConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            recorder: RecorderIdentity::default(),
        }
    }
}

impl JibriConfig {
    /// Load configuration from the process environment, reading `.env` first if present
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV)
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Load configuration from a specific env file without touching the process environment
    pub fn from_env_file(path: &Path) -> Result<Self, dotenv::Error> {
        let mut vars = Vec::new();
        for item in dotenv::from_path_iter(path)? {
            vars.push(item?);
        }

        Ok(Self::from_lookup(|key| {
            vars.iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
        }))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the start-recording endpoint
    pub fn start_recording_url(&self) -> String {
        format!(
            "{}/jibri/api/v1.0/startRecording",
            self.base_url.trim_end_matches('/')
        )
    }
}
