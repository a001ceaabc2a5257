use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::client::RecordingStarter;
use crate::error::RecordingError;

// Mock of the start-recording operation for entry-point tests
mock! {
    pub JibriClient {}

    #[async_trait]
    impl RecordingStarter for JibriClient {
        async fn start_recording(&self, room_name: &str) -> Result<Value, RecordingError>;
    }
}

// Set up a mock that answers every call with `outcome`
pub fn setup_mock_starter(outcome: Result<Value, RecordingError>) -> MockJibriClient {
    let mut mock_starter = MockJibriClient::new();
    mock_starter
        .expect_start_recording()
        .returning(move |_| outcome.clone());
    mock_starter
}
