// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod put;
pub mod ship;

use crate::error::CliError;
use clap::Args;
use seqlog_adapters::{HttpLogService, TracedLogService};
use seqlog_core::WriterConfig;
use seqlog_engine::SequencedLogWriter;
use std::path::PathBuf;

/// Client stack used by every command
pub type Client = TracedLogService<HttpLogService>;

/// Where events go; flags override the config file
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Service region
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Log group to write to
    #[arg(long, global = true)]
    pub log_group: Option<String>,

    /// Endpoint URL override (emulator or signing proxy)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Corrective retries per event
    #[arg(long, global = true)]
    pub max_retries: Option<u32>,
}

impl TargetArgs {
    /// Merge the config file (if any) with flag overrides and validate
    pub fn resolve(&self) -> Result<WriterConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => WriterConfig::load(path).map_err(CliError::bad_config)?,
            None => {
                let region = self
                    .region
                    .clone()
                    .ok_or_else(|| CliError::missing_setting("region", "--region"))?;
                let log_group = self
                    .log_group
                    .clone()
                    .ok_or_else(|| CliError::missing_setting("log_group", "--log-group"))?;
                WriterConfig::new(region, log_group)
            }
        };

        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        if let Some(log_group) = &self.log_group {
            config.log_group = log_group.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(max_retries) = self.max_retries {
            config.max_retries = max_retries;
        }

        config.validate().map_err(CliError::bad_config)?;
        Ok(config)
    }

    /// Build a writer against the resolved target
    pub fn writer(&self) -> Result<SequencedLogWriter<Client>, CliError> {
        let config = self.resolve()?;
        tracing::debug!(
            region = %config.region,
            log_group = %config.log_group,
            max_retries = config.max_retries,
            "resolved target"
        );
        let client = TracedLogService::new(HttpLogService::new(&config));
        Ok(SequencedLogWriter::new(client, &config))
    }
}
