// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! seqlog-core: Core types for the sequenced log writer
//!
//! This crate provides:
//! - Sequence tokens and the per-stream token table
//! - Log events
//! - The pure put-attempt state machine (corrective retry protocol)
//! - Writer configuration

pub mod attempt;
pub mod config;
pub mod event;
pub mod table;
pub mod token;

// Re-exports
pub use attempt::{AbandonReason, PutAttempt, PutEffect, PutEvent, PutState};
pub use config::{ConfigError, WriterConfig, DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT};
pub use event::LogEvent;
pub use table::SequenceTokenTable;
pub use token::{SequenceToken, NO_PRIOR_EVENTS};
