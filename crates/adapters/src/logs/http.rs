// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP log service adapter
//!
//! Speaks the CloudWatch Logs JSON 1.1 protocol. Requests are not signed,
//! so this targets local emulators or a signing proxy in front of the real
//! service.

use super::{LogServiceClient, LogServiceError};
use async_trait::async_trait;
use seqlog_core::{LogEvent, SequenceToken, WriterConfig};
use serde::{Deserialize, Serialize};

const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const TARGET_CREATE_STREAM: &str = "Logs_20140328.CreateLogStream";
const TARGET_PUT_EVENTS: &str = "Logs_20140328.PutLogEvents";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateLogStreamRequest<'a> {
    log_group_name: &'a str,
    log_stream_name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PutLogEventsRequest<'a> {
    log_group_name: &'a str,
    log_stream_name: &'a str,
    // Omitted for a stream without events
    #[serde(skip_serializing_if = "Option::is_none")]
    sequence_token: Option<&'a str>,
    log_events: &'a [LogEvent],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PutLogEventsResponse {
    next_sequence_token: Option<String>,
}

#[derive(Deserialize, Default)]
struct ErrorResponse {
    #[serde(rename = "__type")]
    kind: Option<String>,
    #[serde(rename = "expectedSequenceToken")]
    expected_sequence_token: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Log service reached over HTTP
#[derive(Clone)]
pub struct HttpLogService {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpLogService {
    pub fn new(config: &WriterConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.request_timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            endpoint: config.endpoint_url(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one protocol action, off the async runtime
    async fn call(&self, target: &'static str, body: String) -> Result<String, LogServiceError> {
        let agent = self.agent.clone();
        let url = format!("{}/", self.endpoint);
        tokio::task::spawn_blocking(move || post(&agent, &url, target, body))
            .await
            .map_err(|e| LogServiceError::Transport(format!("request task failed: {}", e)))?
    }
}

fn post(
    agent: &ureq::Agent,
    url: &str,
    target: &str,
    body: String,
) -> Result<String, LogServiceError> {
    let mut response = agent
        .post(url)
        .header("Content-Type", CONTENT_TYPE)
        .header("X-Amz-Target", target)
        .send(body)
        .map_err(|e| LogServiceError::Transport(format!("HTTP request failed: {}", e)))?;

    let status = response.status().as_u16();
    let text = response
        .body_mut()
        .read_to_string()
        .map_err(|e| LogServiceError::Transport(format!("failed to read response: {}", e)))?;

    if (200..300).contains(&status) {
        Ok(text)
    } else {
        Err(classify_error(status, &text))
    }
}

fn encode<T: Serialize>(request: &T) -> Result<String, LogServiceError> {
    serde_json::to_string(request)
        .map_err(|e| LogServiceError::Transport(format!("failed to encode request: {}", e)))
}

/// Map an error response onto a typed error.
///
/// `__type` may be namespaced (`com.amazonaws.logs#ResourceNotFoundException`);
/// only the part after `#` is matched. A missing expected token means the
/// stream has no events yet.
pub(crate) fn classify_error(status: u16, body: &str) -> LogServiceError {
    let parsed: ErrorResponse = serde_json::from_str(body).unwrap_or_default();
    let code = parsed
        .kind
        .as_deref()
        .map(|kind| kind.rsplit('#').next().unwrap_or(kind))
        .unwrap_or("")
        .to_string();
    let expected = || {
        parsed
            .expected_sequence_token
            .clone()
            .map(SequenceToken)
            .unwrap_or_default()
    };

    match code.as_str() {
        "InvalidSequenceTokenException" => LogServiceError::InvalidSequenceToken {
            expected: expected(),
        },
        "DataAlreadyAcceptedException" => LogServiceError::DataAlreadyAccepted {
            expected: expected(),
        },
        "ResourceNotFoundException" => LogServiceError::ResourceNotFound,
        "ResourceAlreadyExistsException" => LogServiceError::ResourceAlreadyExists,
        "InvalidParameterException" => {
            LogServiceError::InvalidParameter(parsed.message.unwrap_or_default())
        }
        "" => LogServiceError::Service {
            code: format!("HTTP {}", status),
            message: parsed.message.unwrap_or_else(|| body.trim().to_string()),
        },
        _ => LogServiceError::Service {
            code,
            message: parsed.message.unwrap_or_default(),
        },
    }
}

#[async_trait]
impl LogServiceClient for HttpLogService {
    async fn create_stream(&self, group: &str, stream: &str) -> Result<(), LogServiceError> {
        let body = encode(&CreateLogStreamRequest {
            log_group_name: group,
            log_stream_name: stream,
        })?;
        self.call(TARGET_CREATE_STREAM, body).await?;
        Ok(())
    }

    async fn put_events(
        &self,
        group: &str,
        stream: &str,
        token: &SequenceToken,
        events: &[LogEvent],
    ) -> Result<SequenceToken, LogServiceError> {
        let sequence_token = (!token.is_no_prior_events()).then(|| token.as_str());
        let body = encode(&PutLogEventsRequest {
            log_group_name: group,
            log_stream_name: stream,
            sequence_token,
            log_events: events,
        })?;

        let text = self.call(TARGET_PUT_EVENTS, body).await?;
        let response: PutLogEventsResponse = serde_json::from_str(&text).map_err(|e| {
            LogServiceError::Transport(format!("failed to decode response: {}", e))
        })?;

        // Services that stopped issuing tokens leave the field out; keep the
        // stream usable by falling back to the sentinel.
        Ok(response
            .next_sequence_token
            .map(SequenceToken)
            .unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
