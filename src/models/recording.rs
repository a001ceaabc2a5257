use serde::{Deserialize, Serialize};

use crate::config::RecorderIdentity;

// Body of POST /jibri/api/v1.0/startRecording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRecordingRequest {
    pub room: String,
    pub call_params: CallParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallParams {
    pub call_url: String,
    pub email: String,
    pub display_name: String,
}

impl StartRecordingRequest {
    /// Build the request for a room; `room` and the tail of `call_url` always come from the same value
    pub fn new(room_name: &str, recorder: &RecorderIdentity) -> Self {
        Self {
            room: room_name.to_string(),
            call_params: CallParams {
                call_url: format!(
                    "{}/{}",
                    recorder.call_url_base.trim_end_matches('/'),
                    room_name
                ),
                email: recorder.email.clone(),
                display_name: recorder.display_name.clone(),
            },
        }
    }
}
