// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequence tokens issued by the log service
//!
//! Every accepted write to a log stream yields a new token that must be
//! presented with the next write. The token is opaque to the client.

use serde::{Deserialize, Serialize};

/// Token value meaning "this stream has no prior events"
pub const NO_PRIOR_EVENTS: &str = "0";

/// Opaque, server-issued write position for a log stream
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceToken(pub String);

impl SequenceToken {
    /// The sentinel token for a stream without events
    pub fn no_prior_events() -> Self {
        SequenceToken(NO_PRIOR_EVENTS.to_string())
    }

    pub fn is_no_prior_events(&self) -> bool {
        self.0 == NO_PRIOR_EVENTS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SequenceToken {
    fn default() -> Self {
        Self::no_prior_events()
    }
}

impl std::fmt::Display for SequenceToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SequenceToken {
    fn from(s: String) -> Self {
        SequenceToken(s)
    }
}

impl From<&str> for SequenceToken {
    fn from(s: &str) -> Self {
        SequenceToken(s.to_string())
    }
}
