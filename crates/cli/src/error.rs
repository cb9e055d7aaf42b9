// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.

use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// No config file and no flag for a required setting
    pub fn missing_setting(name: &str, flag: &str) -> Self {
        CliError::new(format!("No {} configured", name))
            .with_context("Settings come from --config <file> and are overridden by flags")
            .with_suggestion(format!("Pass it directly: {} <value>", flag))
            .with_suggestion(format!(
                "Or put `{} = \"...\"` in a TOML file and pass --config",
                name
            ))
    }

    /// Config file could not be loaded or failed validation
    pub fn bad_config(err: seqlog_core::ConfigError) -> Self {
        CliError::new(format!("Configuration rejected: {}", err))
            .with_suggestion("Check the file against: region, log_group, max_retries, endpoint, request_timeout")
            .with_source(err)
    }

    /// An event could not be delivered
    pub fn not_delivered(err: seqlog_engine::WriteError) -> Self {
        let mut error = CliError::new(format!("Event not delivered: {}", err));
        if matches!(err, seqlog_engine::WriteError::RetriesExhausted { .. }) {
            error = error
                .with_context("Another writer may be appending to the same stream")
                .with_suggestion("Raise the budget with --max-retries");
        }
        error
            .with_suggestion("Run with RUST_LOG=seqlog=debug to see each request")
            .with_source(err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
