// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op log service for when shipping is disabled.

use super::{LogServiceClient, LogServiceError};
use async_trait::async_trait;
use seqlog_core::{LogEvent, SequenceToken};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Log service that accepts and discards everything.
///
/// Hands out increasing tokens so callers exercise their caching path.
#[derive(Clone, Debug, Default)]
pub struct NoOpLogService {
    counter: Arc<AtomicU64>,
}

impl NoOpLogService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LogServiceClient for NoOpLogService {
    async fn create_stream(&self, _group: &str, _stream: &str) -> Result<(), LogServiceError> {
        Ok(())
    }

    async fn put_events(
        &self,
        _group: &str,
        _stream: &str,
        _token: &SequenceToken,
        _events: &[LogEvent],
    ) -> Result<SequenceToken, LogServiceError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(SequenceToken(n.to_string()))
    }
}
