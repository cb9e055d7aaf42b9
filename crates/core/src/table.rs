// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-stream cache of the last known sequence token
//!
//! Lets repeated writes to the same stream skip asking the server for its
//! current position. Entries are never evicted: the table holds one token per
//! stream the owning writer has touched.

use crate::token::SequenceToken;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct SequenceTokenTable {
    tokens: HashMap<String, SequenceToken>,
}

impl SequenceTokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached token for `stream`, or the no-prior-events sentinel
    pub fn get(&self, stream: &str) -> SequenceToken {
        self.tokens.get(stream).cloned().unwrap_or_default()
    }

    /// Cached token for `stream` if this table has ever stored one
    pub fn cached(&self, stream: &str) -> Option<&SequenceToken> {
        self.tokens.get(stream)
    }

    /// Unconditionally overwrite the token for `stream`
    pub fn set(&mut self, stream: impl Into<String>, token: SequenceToken) {
        self.tokens.insert(stream.into(), token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
