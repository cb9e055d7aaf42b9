// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake log service for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{LogServiceClient, LogServiceError};
use async_trait::async_trait;
use seqlog_core::{LogEvent, SequenceToken};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Recorded log service call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogCall {
    CreateStream {
        group: String,
        stream: String,
    },
    PutEvents {
        group: String,
        stream: String,
        token: SequenceToken,
        events: Vec<LogEvent>,
    },
}

type StreamKey = (String, String);

/// Fake log service for testing
///
/// Behaves like the real service by default: puts to unknown streams fail
/// with `ResourceNotFound`, stale tokens fail with `InvalidSequenceToken`
/// carrying the expected token, and accepted puts advance the stream token.
/// Errors can be injected ahead of that behavior.
#[derive(Clone, Default)]
pub struct FakeLogService {
    streams: Arc<Mutex<HashMap<StreamKey, SequenceToken>>>,
    put_errors: Arc<Mutex<VecDeque<LogServiceError>>>,
    persistent_put_error: Arc<Mutex<Option<LogServiceError>>>,
    create_errors: Arc<Mutex<VecDeque<LogServiceError>>>,
    calls: Arc<Mutex<Vec<LogCall>>>,
    next_token: Arc<Mutex<u64>>,
}

impl FakeLogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing, empty stream
    pub fn add_stream(&self, group: &str, stream: &str) {
        self.set_expected_token(group, stream, SequenceToken::no_prior_events());
    }

    /// Set the token the service expects on the next put to a stream
    pub fn set_expected_token(&self, group: &str, stream: &str, token: SequenceToken) {
        self.streams
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key(group, stream), token);
    }

    /// Token the service currently expects for a stream
    pub fn expected_token(&self, group: &str, stream: &str) -> Option<SequenceToken> {
        self.streams
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key(group, stream))
            .cloned()
    }

    /// Fail the next put with `error`, before any stream checks
    pub fn fail_next_put(&self, error: LogServiceError) {
        self.put_errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(error);
    }

    /// Fail every put with `error` from now on
    pub fn fail_all_puts(&self, error: LogServiceError) {
        *self
            .persistent_put_error
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(error);
    }

    /// Fail the next stream creation with `error`
    pub fn fail_next_create(&self, error: LogServiceError) {
        self.create_errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(error);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<LogCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Tokens presented by each recorded put, in order
    pub fn put_tokens(&self) -> Vec<SequenceToken> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                LogCall::PutEvents { token, .. } => Some(token),
                LogCall::CreateStream { .. } => None,
            })
            .collect()
    }

    /// Number of stream creations requested
    pub fn create_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, LogCall::CreateStream { .. }))
            .count()
    }

    fn record(&self, call: LogCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }

    fn issue_token(&self) -> SequenceToken {
        let mut next = self.next_token.lock().unwrap_or_else(|e| e.into_inner());
        *next += 1;
        SequenceToken(next.to_string())
    }
}

fn key(group: &str, stream: &str) -> StreamKey {
    (group.to_string(), stream.to_string())
}

#[async_trait]
impl LogServiceClient for FakeLogService {
    async fn create_stream(&self, group: &str, stream: &str) -> Result<(), LogServiceError> {
        self.record(LogCall::CreateStream {
            group: group.to_string(),
            stream: stream.to_string(),
        });

        if let Some(error) = self
            .create_errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
        {
            return Err(error);
        }

        let mut streams = self.streams.lock().unwrap_or_else(|e| e.into_inner());
        if streams.contains_key(&key(group, stream)) {
            return Err(LogServiceError::ResourceAlreadyExists);
        }
        streams.insert(key(group, stream), SequenceToken::no_prior_events());
        Ok(())
    }

    async fn put_events(
        &self,
        group: &str,
        stream: &str,
        token: &SequenceToken,
        events: &[LogEvent],
    ) -> Result<SequenceToken, LogServiceError> {
        self.record(LogCall::PutEvents {
            group: group.to_string(),
            stream: stream.to_string(),
            token: token.clone(),
            events: events.to_vec(),
        });

        if let Some(error) = self
            .persistent_put_error
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(error);
        }
        if let Some(error) = self
            .put_errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
        {
            return Err(error);
        }

        let expected = self
            .expected_token(group, stream)
            .ok_or(LogServiceError::ResourceNotFound)?;
        if &expected != token {
            return Err(LogServiceError::InvalidSequenceToken { expected });
        }

        let next = self.issue_token();
        self.set_expected_token(group, stream, next.clone());
        Ok(next)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
