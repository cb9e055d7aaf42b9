// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log service adapters

mod http;
mod noop;

pub use http::HttpLogService;
pub use noop::NoOpLogService;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeLogService, LogCall};

use async_trait::async_trait;
use seqlog_core::{LogEvent, SequenceToken};
use thiserror::Error;

/// Errors from log service operations
///
/// The first three variants are corrective: they carry (or imply) what the
/// caller needs to retry correctly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogServiceError {
    #[error("invalid sequence token, expected {expected}")]
    InvalidSequenceToken { expected: SequenceToken },
    #[error("log stream not found")]
    ResourceNotFound,
    #[error("data already accepted, next token is {expected}")]
    DataAlreadyAccepted { expected: SequenceToken },
    #[error("log stream already exists")]
    ResourceAlreadyExists,
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("{code}: {message}")]
    Service { code: String, message: String },
    #[error("transport error: {0}")]
    Transport(String),
}

/// Adapter for the remote log-aggregation service
#[async_trait]
pub trait LogServiceClient: Clone + Send + Sync + 'static {
    /// Create a log stream in a group
    async fn create_stream(&self, group: &str, stream: &str) -> Result<(), LogServiceError>;

    /// Append events to a stream, returning the token for the next write
    async fn put_events(
        &self,
        group: &str,
        stream: &str,
        token: &SequenceToken,
        events: &[LogEvent],
    ) -> Result<SequenceToken, LogServiceError>;
}
