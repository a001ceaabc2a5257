//! Jibri Recording Starter
//!
//! This library asks a Jibri instance to start recording a conference room.
//! It builds the start-recording request for a room, posts it to the Jibri
//! REST API and classifies the outcome.
//!
//! # Modules
//!
//! - `client`: `JibriClient` and the `RecordingStarter` operation
//! - `config`: base URL, timeout and recorder identity
//! - `error`: the three ways a start request can fail
//!
//! # Errors
//!
//! A received non-2xx response is `ServerRejected`, a request that got no
//! answer (refused, timed out) is `NoResponse`, and anything that failed
//! before dispatch is `LocalFault`.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

#[cfg(test)]
mod client_mock;

// Re-export the main API types for ease of use
pub use client::{JibriClient, RecordingStarter};
pub use config::{JibriConfig, RecorderIdentity};
pub use error::RecordingError;
pub use models::recording::{CallParams, StartRecordingRequest};
