// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! seqlog engine: writers that drive the put-attempt state machine

mod error;
mod executor;
mod shared;
mod writer;

pub use error::WriteError;
pub use shared::SharedLogWriter;
pub use writer::SequencedLogWriter;
