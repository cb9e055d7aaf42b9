// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log events submitted to a stream

use serde::{Deserialize, Serialize};

/// A single log line with its timestamp (milliseconds since the Unix epoch)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub timestamp: i64,
    pub message: String,
}

impl LogEvent {
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    /// Create an event stamped with the current wall-clock time
    pub fn now(message: impl Into<String>) -> Self {
        Self::new(chrono::Utc::now().timestamp_millis(), message)
    }
}
