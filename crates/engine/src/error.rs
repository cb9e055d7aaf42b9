// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the writers

use thiserror::Error;

/// Why an event was not delivered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    #[error("gave up on stream {stream} after {attempts} corrective retries")]
    RetriesExhausted { stream: String, attempts: u32 },
    #[error("stream {stream} rejected the event: {reason}")]
    Rejected { stream: String, reason: String },
    #[error("attempt for stream {stream} stopped before finishing")]
    Incomplete { stream: String },
}
