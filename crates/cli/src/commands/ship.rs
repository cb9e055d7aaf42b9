// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `seqlog ship <stream>` - Write one event per stdin line

use super::TargetArgs;
use anyhow::Result;
use clap::Args;
use seqlog_core::LogEvent;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Args)]
pub struct ShipArgs {
    /// Log stream name
    pub stream: String,
}

pub async fn ship(args: ShipArgs, target: &TargetArgs) -> Result<()> {
    let mut writer = target.writer()?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut delivered = 0usize;
    let mut dropped = 0usize;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        // Failures are already on stderr via tracing; keep going
        match writer.put_log_event(&args.stream, &LogEvent::now(line)).await {
            Ok(_) => delivered += 1,
            Err(_) => dropped += 1,
        }
    }

    println!("delivered {}, dropped {}", delivered, dropped);
    if dropped > 0 {
        anyhow::bail!("{} of {} events dropped", dropped, delivered + dropped);
    }
    Ok(())
}
