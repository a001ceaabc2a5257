//! In-process stand-in for the Jibri REST API

use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Router};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A request as the fake service received it
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

struct FakeState {
    status: StatusCode,
    body: String,
    delay: Duration,
    received: Mutex<Vec<ReceivedRequest>>,
}

/// Handle to a running fake Jibri service
pub struct FakeJibri {
    addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeJibri {
    /// Serve `status` and `body` on the start-recording route
    pub async fn start(status: StatusCode, body: &str) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    /// Like `start`, but hold every response back for `delay`
    pub async fn start_with_delay(status: StatusCode, body: &str, delay: Duration) -> Self {
        let state = Arc::new(FakeState {
            status,
            body: body.to_string(),
            delay,
            received: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/jibri/api/v1.0/startRecording", post(start_recording))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.state.received.lock().unwrap().clone()
    }
}

async fn start_recording(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    let content_type = headers
        .get("content-type")
        .and_then(|val| val.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_str(&body).unwrap_or(Value::Null);

    state
        .received
        .lock()
        .unwrap()
        .push(ReceivedRequest { content_type, body });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (
        state.status,
        [("content-type", "application/json")],
        state.body.clone(),
    )
}

/// A base URL nothing is listening on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
