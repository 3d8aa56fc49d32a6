//! OpenAI-compatible chat-completions provider (blocking).

use std::time::Duration;

use mnemo_core::config::CompletionConfig;
use mnemo_core::errors::{CompletionError, MnemoError, MnemoResult};
use mnemo_core::traits::{CompletionRequest, ICompletionProvider};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prompt::{build_answer_messages, build_instruction_messages, Message};

pub struct ApiProvider {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ApiProvider {
    pub fn new(
        endpoint: String,
        model: String,
        api_key: String,
        temperature: f32,
        timeout: Duration,
    ) -> MnemoResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompletionError::RequestFailed {
                reason: format!("client build: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint,
            model,
            api_key,
            temperature,
        })
    }

    /// Build from config, reading the API key from the configured variable.
    pub fn from_config(config: &CompletionConfig) -> MnemoResult<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            MnemoError::from(CompletionError::RequestFailed {
                reason: format!("API key variable {} is not set", config.api_key_env),
            })
        })?;
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            api_key,
            config.temperature,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn send(&self, messages: &[Message]) -> MnemoResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ChatCompletionRequest {
                model: &self.model,
                temperature: self.temperature,
                messages,
            })
            .send()
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CompletionError::HttpStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: ChatCompletionResponse =
            response.json().map_err(|e| CompletionError::InvalidResponse {
                reason: e.to_string(),
            })?;
        let text = first_choice_text(parsed)?;
        debug!(model = %self.model, chars = text.len(), "completion response");
        Ok(text)
    }
}

/// Content of the first choice, trimmed. A null content is an empty answer.
fn first_choice_text(response: ChatCompletionResponse) -> MnemoResult<String> {
    let choice = response.choices.into_iter().next().ok_or_else(|| {
        MnemoError::from(CompletionError::InvalidResponse {
            reason: "no choices in response".to_string(),
        })
    })?;
    Ok(choice.message.content.unwrap_or_default().trim().to_string())
}

fn map_transport_error(err: reqwest::Error) -> MnemoError {
    if err.is_timeout() {
        return CompletionError::Timeout.into();
    }
    if is_connection_reset(&err) {
        return CompletionError::ConnectionReset {
            reason: err.to_string(),
        }
        .into();
    }
    CompletionError::RequestFailed {
        reason: err.to_string(),
    }
    .into()
}

fn is_connection_reset(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::ConnectionReset {
                return true;
            }
        }
        source = e.source();
    }
    false
}

impl ICompletionProvider for ApiProvider {
    fn complete(&self, request: &CompletionRequest) -> MnemoResult<String> {
        self.send(&build_answer_messages(request))
    }

    fn prompt(&self, instruction: &str, input: &str) -> MnemoResult<String> {
        self.send(&build_instruction_messages(instruction, input))
    }

    fn name(&self) -> &str {
        &self.model
    }
}
