// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequenced log writer
//!
//! Owns the per-stream token table and appends one event at a time,
//! transparently creating missing streams and recovering from stale tokens
//! within a shared retry budget.

use crate::error::WriteError;
use crate::executor::{finish, Executor};
use crate::shared::SharedLogWriter;
use seqlog_adapters::LogServiceClient;
use seqlog_core::{LogEvent, SequenceToken, SequenceTokenTable, WriterConfig};
use tracing::Instrument;

/// Writes events to streams of one log group.
///
/// Not for concurrent use: `put_log_event` takes `&mut self`. Share a
/// [`SharedLogWriter`] instead.
pub struct SequencedLogWriter<C> {
    executor: Executor<C>,
    tokens: SequenceTokenTable,
    max_retries: u32,
}

impl<C: LogServiceClient> SequencedLogWriter<C> {
    pub fn new(client: C, config: &WriterConfig) -> Self {
        Self {
            executor: Executor::new(client, config.log_group.clone()),
            tokens: SequenceTokenTable::new(),
            max_retries: config.max_retries,
        }
    }

    /// Append `event` to `stream`, returning the stream's next token.
    ///
    /// Failures are also reported on the tracing channel, so callers that
    /// treat delivery as best-effort can ignore the result.
    pub async fn put_log_event(
        &mut self,
        stream: &str,
        event: &LogEvent,
    ) -> Result<SequenceToken, WriteError> {
        let span = tracing::info_span!("writer.put", group = self.executor.group(), stream);

        async {
            let mut slot = self.tokens.cached(stream).cloned();
            let attempt = self
                .executor
                .run(stream, event, &mut slot, self.max_retries)
                .await;

            if let Some(token) = slot {
                self.tokens.set(stream, token);
            }
            finish(attempt)
        }
        .instrument(span)
        .await
    }

    pub fn tokens(&self) -> &SequenceTokenTable {
        &self.tokens
    }

    /// Convert into a writer that can be shared across tasks, keeping the
    /// tokens learned so far
    pub fn into_shared(self) -> SharedLogWriter<C> {
        SharedLogWriter::from_parts(self.executor, self.tokens, self.max_retries)
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
