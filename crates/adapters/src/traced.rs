// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::logs::{LogServiceClient, LogServiceError};
use async_trait::async_trait;
use seqlog_core::{LogEvent, SequenceToken};
use tracing::Instrument;

/// Service-side limit on stream name length
const MAX_STREAM_NAME_LEN: usize = 512;

/// Wrapper that adds tracing to any LogServiceClient
#[derive(Clone)]
pub struct TracedLogService<C> {
    inner: C,
}

impl<C> TracedLogService<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

/// Stream names must be 1-512 characters without ':' or '*'
fn check_stream_name(stream: &str) -> Result<(), LogServiceError> {
    if stream.is_empty() || stream.len() > MAX_STREAM_NAME_LEN {
        return Err(LogServiceError::InvalidParameter(format!(
            "stream name must be 1-{} characters",
            MAX_STREAM_NAME_LEN
        )));
    }
    if stream.contains([':', '*']) {
        return Err(LogServiceError::InvalidParameter(format!(
            "stream name may not contain ':' or '*': {}",
            stream
        )));
    }
    Ok(())
}

#[async_trait]
impl<C: LogServiceClient> LogServiceClient for TracedLogService<C> {
    async fn create_stream(&self, group: &str, stream: &str) -> Result<(), LogServiceError> {
        let span = tracing::info_span!("logs.create_stream", group, stream);

        async {
            tracing::info!("creating stream");

            // Precondition: the service would reject this name anyway
            if let Err(e) = check_stream_name(stream) {
                tracing::error!(error = %e, "rejected before sending");
                return Err(e);
            }

            let start = std::time::Instant::now();
            let result = self.inner.create_stream(group, stream).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "stream created"),
                // Losing a creation race to another writer is fine
                Err(LogServiceError::ResourceAlreadyExists) => {
                    tracing::info!(elapsed_ms, "stream already exists")
                }
                Err(e) => tracing::error!(elapsed_ms, error = %e, "create failed"),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn put_events(
        &self,
        group: &str,
        stream: &str,
        token: &SequenceToken,
        events: &[LogEvent],
    ) -> Result<SequenceToken, LogServiceError> {
        let span = tracing::info_span!("logs.put_events", group, stream);

        async {
            tracing::debug!(%token, event_count = events.len(), "sending");

            if let Err(e) = check_stream_name(stream) {
                tracing::error!(error = %e, "rejected before sending");
                return Err(e);
            }
            if events.is_empty() {
                tracing::error!("no events to send");
                return Err(LogServiceError::InvalidParameter(
                    "at least one event is required".to_string(),
                ));
            }

            let start = std::time::Instant::now();
            let result = self.inner.put_events(group, stream, token, events).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(next) => tracing::debug!(next_token = %next, elapsed_ms, "accepted"),
                // The writer decides what to do with these
                Err(
                    e @ (LogServiceError::InvalidSequenceToken { .. }
                    | LogServiceError::DataAlreadyAccepted { .. }
                    | LogServiceError::ResourceNotFound),
                ) => tracing::debug!(elapsed_ms, error = %e, "corrective response"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "put failed"),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
