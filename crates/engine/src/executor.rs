// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor
//!
//! Drives a `PutAttempt` to a terminal state by executing its effects against
//! the log service and feeding the responses back in.

use crate::error::WriteError;
use seqlog_adapters::{LogServiceClient, LogServiceError};
use seqlog_core::{AbandonReason, LogEvent, PutAttempt, PutEffect, PutEvent, PutState, SequenceToken};
use std::collections::VecDeque;

/// Executes put-attempt effects for one log group
#[derive(Clone)]
pub(crate) struct Executor<C> {
    client: C,
    group: String,
}

impl<C: LogServiceClient> Executor<C> {
    pub(crate) fn new(client: C, group: impl Into<String>) -> Self {
        Self {
            client,
            group: group.into(),
        }
    }

    pub(crate) fn group(&self) -> &str {
        &self.group
    }

    /// Run one attempt to completion.
    ///
    /// `slot` is the cached token for `stream` (`None` if never written) and
    /// is updated in place by `CacheToken` effects.
    pub(crate) async fn run(
        &self,
        stream: &str,
        event: &LogEvent,
        slot: &mut Option<SequenceToken>,
        max_retries: u32,
    ) -> PutAttempt {
        let cached = slot.clone().unwrap_or_default();
        let mut attempt = PutAttempt::new(stream, cached, max_retries);
        let mut pending: VecDeque<PutEffect> = attempt.start().into();

        while let Some(effect) = pending.pop_front() {
            let Some(response) = self.execute(stream, event, effect, slot).await else {
                continue;
            };
            log_response(&attempt, &response);

            let (next, effects) = attempt.transition(response);
            attempt = next;
            pending.extend(effects);
        }

        attempt
    }

    /// Execute a single effect, returning the event to feed back (if any)
    async fn execute(
        &self,
        stream: &str,
        event: &LogEvent,
        effect: PutEffect,
        slot: &mut Option<SequenceToken>,
    ) -> Option<PutEvent> {
        match effect {
            PutEffect::PutEvents { token } => {
                let result = self
                    .client
                    .put_events(&self.group, stream, &token, std::slice::from_ref(event))
                    .await;
                Some(put_response(result))
            }

            PutEffect::CreateStream => {
                let result = self.client.create_stream(&self.group, stream).await;
                Some(match result {
                    // Someone else created it first; it exists either way
                    Ok(()) | Err(LogServiceError::ResourceAlreadyExists) => PutEvent::StreamCreated,
                    Err(e) => PutEvent::StreamCreateFailed {
                        reason: format!("failed to create stream: {}", e),
                    },
                })
            }

            PutEffect::CacheToken { token } => {
                *slot = Some(token);
                None
            }
        }
    }
}

/// Classify a put result for the state machine
fn put_response(result: Result<SequenceToken, LogServiceError>) -> PutEvent {
    match result {
        Ok(next_token) => PutEvent::Accepted { next_token },
        Err(LogServiceError::InvalidSequenceToken { expected }) => {
            PutEvent::InvalidSequenceToken { expected }
        }
        Err(LogServiceError::ResourceNotFound) => PutEvent::StreamNotFound,
        Err(LogServiceError::DataAlreadyAccepted { expected }) => {
            PutEvent::DataAlreadyAccepted { expected }
        }
        Err(
            e @ (LogServiceError::ResourceAlreadyExists
            | LogServiceError::InvalidParameter(_)
            | LogServiceError::Service { .. }
            | LogServiceError::Transport(_)),
        ) => PutEvent::Rejected {
            reason: e.to_string(),
        },
    }
}

/// Corrective responses are warnings; the caller logs the final outcome
fn log_response(attempt: &PutAttempt, response: &PutEvent) {
    let stream = attempt.stream.as_str();
    let retries = attempt.retries;
    match response {
        PutEvent::InvalidSequenceToken { expected } => {
            tracing::warn!(stream, retries, %expected, "invalid sequence token")
        }
        PutEvent::StreamNotFound => tracing::warn!(stream, retries, "log stream not found"),
        PutEvent::DataAlreadyAccepted { expected } => {
            tracing::warn!(stream, retries, %expected, "data already accepted")
        }
        PutEvent::StreamCreated => tracing::debug!(stream, "stream ready"),
        PutEvent::Accepted { .. } | PutEvent::Rejected { .. } | PutEvent::StreamCreateFailed { .. } => {}
    }
}

/// Turn a finished attempt into the caller's result, reporting failures
pub(crate) fn finish(attempt: PutAttempt) -> Result<SequenceToken, WriteError> {
    let PutAttempt {
        stream,
        state,
        retries,
        ..
    } = attempt;

    match state {
        PutState::Succeeded { next_token } => {
            tracing::debug!(stream = %stream, retries, %next_token, "event delivered");
            Ok(next_token)
        }
        PutState::Abandoned(AbandonReason::RetriesExhausted) => {
            tracing::error!(stream = %stream, retries, "dropping event: retries exhausted");
            Err(WriteError::RetriesExhausted {
                stream,
                attempts: retries,
            })
        }
        PutState::Abandoned(AbandonReason::Fatal { reason }) => {
            tracing::error!(stream = %stream, retries, error = %reason, "dropping event");
            Err(WriteError::Rejected { stream, reason })
        }
        PutState::Attempting { .. } | PutState::CreatingStream => {
            tracing::error!(stream = %stream, retries, "attempt stopped before finishing");
            Err(WriteError::Incomplete { stream })
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
