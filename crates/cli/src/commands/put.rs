// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `seqlog put <stream> <message>` - Write a single event

use super::TargetArgs;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use seqlog_core::LogEvent;

#[derive(Args)]
pub struct PutArgs {
    /// Log stream name
    pub stream: String,

    /// Message text
    pub message: String,

    /// Event time in milliseconds since the Unix epoch (default: now)
    #[arg(long)]
    pub timestamp: Option<i64>,
}

pub async fn put(args: PutArgs, target: &TargetArgs) -> Result<()> {
    let mut writer = target.writer()?;
    let event = match args.timestamp {
        Some(timestamp) => LogEvent::new(timestamp, args.message),
        None => LogEvent::now(args.message),
    };

    let next = writer
        .put_log_event(&args.stream, &event)
        .await
        .map_err(CliError::not_delivered)?;

    println!("Delivered to {} (next token {})", args.stream, next);
    Ok(())
}
