// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Writer shareable across tasks
//!
//! Tokens live in one [`SequenceTokenTable`] behind a short-held lock. Each
//! stream also gets its own async lock that is held for the whole attempt,
//! so two puts to the same stream never race on the token while puts to
//! different streams proceed independently.

use crate::error::WriteError;
use crate::executor::{finish, Executor};
use seqlog_adapters::LogServiceClient;
use seqlog_core::{LogEvent, SequenceToken, SequenceTokenTable, WriterConfig};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::Instrument;

type StreamLock = Arc<tokio::sync::Mutex<()>>;

/// Cloneable writer with per-stream serialisation
#[derive(Clone)]
pub struct SharedLogWriter<C> {
    executor: Executor<C>,
    tokens: Arc<Mutex<SequenceTokenTable>>,
    streams: Arc<Mutex<HashMap<String, StreamLock>>>,
    max_retries: u32,
}

impl<C: LogServiceClient> SharedLogWriter<C> {
    pub fn new(client: C, config: &WriterConfig) -> Self {
        Self::from_parts(
            Executor::new(client, config.log_group.clone()),
            SequenceTokenTable::new(),
            config.max_retries,
        )
    }

    pub(crate) fn from_parts(
        executor: Executor<C>,
        tokens: SequenceTokenTable,
        max_retries: u32,
    ) -> Self {
        Self {
            executor,
            tokens: Arc::new(Mutex::new(tokens)),
            streams: Arc::new(Mutex::new(HashMap::new())),
            max_retries,
        }
    }

    /// Append `event` to `stream`; waits for other puts to the same stream
    pub async fn put_log_event(
        &self,
        stream: &str,
        event: &LogEvent,
    ) -> Result<SequenceToken, WriteError> {
        let span = tracing::info_span!("writer.put", group = self.executor.group(), stream);

        async {
            let lock = self.stream_lock(stream);
            let _serialised = lock.lock().await;

            let mut slot = self.table().cached(stream).cloned();
            let attempt = self
                .executor
                .run(stream, event, &mut slot, self.max_retries)
                .await;

            if let Some(token) = slot {
                self.table().set(stream, token);
            }
            finish(attempt)
        }
        .instrument(span)
        .await
    }

    /// Cached token for `stream`, waiting for any in-flight put to finish
    pub async fn cached_token(&self, stream: &str) -> Option<SequenceToken> {
        let lock = self.stream_lock(stream);
        let _serialised = lock.lock().await;
        self.table().cached(stream).cloned()
    }

    fn table(&self) -> std::sync::MutexGuard<'_, SequenceTokenTable> {
        self.tokens.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn stream_lock(&self, stream: &str) -> StreamLock {
        self.streams
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(stream.to_string())
            .or_default()
            .clone()
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
