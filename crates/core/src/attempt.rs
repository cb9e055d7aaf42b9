// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Put-attempt state machine
//!
//! One `PutAttempt` lives for the duration of a single `put_log_event` call.
//! It reconciles the locally cached sequence token with the token the server
//! expects, reacting to the three corrective responses the service can send:
//!
//! - invalid sequence token: retry with the token the server reported
//! - stream not found: create the stream, reset to the sentinel, retry
//! - data already accepted: retry with the token the server reported
//!
//! All three share a single retry budget. Any other rejection abandons the
//! attempt immediately without consuming budget.
//!
//! The machine is pure: `transition` returns the next attempt plus the effects
//! the caller must execute against the log service and the token cache.

use crate::token::SequenceToken;

/// Why an attempt gave up
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbandonReason {
    /// Corrective retries used up the whole budget
    RetriesExhausted,
    /// The service rejected the request for a non-corrective reason
    Fatal { reason: String },
}

impl std::fmt::Display for AbandonReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbandonReason::RetriesExhausted => write!(f, "retries exhausted"),
            AbandonReason::Fatal { reason } => write!(f, "{}", reason),
        }
    }
}

/// The state of an attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PutState {
    /// A put is in flight (or about to be) with this candidate token
    Attempting { token: SequenceToken },
    /// Waiting for a stream-creation call to finish
    CreatingStream,
    /// The event was accepted
    Succeeded { next_token: SequenceToken },
    /// The attempt was given up
    Abandoned(AbandonReason),
}

/// Responses and outcomes fed back into the attempt
#[derive(Clone, Debug)]
pub enum PutEvent {
    /// The service accepted the event
    Accepted { next_token: SequenceToken },
    /// The presented token was stale; the server expects `expected`
    InvalidSequenceToken { expected: SequenceToken },
    /// The stream does not exist yet
    StreamNotFound,
    /// This exact payload was already stored; the next write must use `expected`
    DataAlreadyAccepted { expected: SequenceToken },
    /// Non-corrective rejection
    Rejected { reason: String },
    /// The stream now exists (created by us or someone else)
    StreamCreated,
    /// Creating the stream failed
    StreamCreateFailed { reason: String },
}

/// Work the caller performs on behalf of the attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PutEffect {
    /// Submit the event with this token
    PutEvents { token: SequenceToken },
    /// Create the target stream
    CreateStream,
    /// Store this token in the cache for the target stream
    CacheToken { token: SequenceToken },
}

/// Per-call retry state for writing one event to one stream
#[derive(Clone, Debug)]
pub struct PutAttempt {
    pub stream: String,
    pub state: PutState,
    /// Corrective retries consumed so far
    pub retries: u32,
    pub max_retries: u32,
}

impl PutAttempt {
    /// Start an attempt from the cached token for `stream`.
    ///
    /// A zero budget never reaches the service.
    pub fn new(stream: impl Into<String>, cached: SequenceToken, max_retries: u32) -> Self {
        let state = if max_retries == 0 {
            PutState::Abandoned(AbandonReason::RetriesExhausted)
        } else {
            PutState::Attempting { token: cached }
        };
        PutAttempt {
            stream: stream.into(),
            state,
            retries: 0,
            max_retries,
        }
    }

    /// Effects that kick off the attempt
    pub fn start(&self) -> Vec<PutEffect> {
        match &self.state {
            PutState::Attempting { token } => vec![PutEffect::PutEvents {
                token: token.clone(),
            }],
            _ => vec![],
        }
    }

    /// Pure transition function - returns new attempt and effects
    pub fn transition(&self, event: PutEvent) -> (PutAttempt, Vec<PutEffect>) {
        match (&self.state, event) {
            (PutState::Attempting { .. }, PutEvent::Accepted { next_token }) => {
                let attempt = PutAttempt {
                    state: PutState::Succeeded {
                        next_token: next_token.clone(),
                    },
                    ..self.clone()
                };
                (attempt, vec![PutEffect::CacheToken { token: next_token }])
            }

            (
                PutState::Attempting { .. },
                PutEvent::InvalidSequenceToken { expected }
                | PutEvent::DataAlreadyAccepted { expected },
            ) => self.retry_with(expected),

            // Count the retry now; whether to put again is decided once the
            // stream exists.
            (PutState::Attempting { .. }, PutEvent::StreamNotFound) => {
                let attempt = PutAttempt {
                    state: PutState::CreatingStream,
                    retries: self.retries + 1,
                    ..self.clone()
                };
                (attempt, vec![PutEffect::CreateStream])
            }

            (PutState::Attempting { .. }, PutEvent::Rejected { reason }) => {
                (self.abandon(AbandonReason::Fatal { reason }), vec![])
            }

            (PutState::CreatingStream, PutEvent::StreamCreated) => {
                let sentinel = SequenceToken::no_prior_events();
                let cache = PutEffect::CacheToken {
                    token: sentinel.clone(),
                };
                if self.retries >= self.max_retries {
                    return (
                        self.abandon(AbandonReason::RetriesExhausted),
                        vec![cache],
                    );
                }
                let attempt = PutAttempt {
                    state: PutState::Attempting {
                        token: sentinel.clone(),
                    },
                    ..self.clone()
                };
                (
                    attempt,
                    vec![cache, PutEffect::PutEvents { token: sentinel }],
                )
            }

            (PutState::CreatingStream, PutEvent::StreamCreateFailed { reason }) => {
                (self.abandon(AbandonReason::Fatal { reason }), vec![])
            }

            // Invalid transitions - no change
            _ => (self.clone(), vec![]),
        }
    }

    fn retry_with(&self, token: SequenceToken) -> (PutAttempt, Vec<PutEffect>) {
        let retries = self.retries + 1;
        if retries >= self.max_retries {
            let attempt = PutAttempt {
                retries,
                ..self.abandon(AbandonReason::RetriesExhausted)
            };
            return (attempt, vec![]);
        }
        let effects = vec![PutEffect::PutEvents {
            token: token.clone(),
        }];
        let attempt = PutAttempt {
            state: PutState::Attempting { token },
            retries,
            ..self.clone()
        };
        (attempt, effects)
    }

    fn abandon(&self, reason: AbandonReason) -> PutAttempt {
        PutAttempt {
            state: PutState::Abandoned(reason),
            ..self.clone()
        }
    }

    /// Token the next put will present, if one is pending
    pub fn candidate_token(&self) -> Option<&SequenceToken> {
        match &self.state {
            PutState::Attempting { token } => Some(token),
            _ => None,
        }
    }

    /// Check if the attempt has finished (succeeded or abandoned)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            PutState::Succeeded { .. } | PutState::Abandoned(_)
        )
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self.state, PutState::Succeeded { .. })
    }

    pub fn is_abandoned(&self) -> bool {
        matches!(self.state, PutState::Abandoned(_))
    }
}

#[cfg(test)]
#[path = "attempt_tests.rs"]
mod tests;
