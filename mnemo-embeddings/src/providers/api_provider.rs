//! OpenAI-compatible embedding API provider.
//!
//! One blocking HTTP call per request. Retry lives in the engine, so every
//! failure is mapped to a typed error the retry policy can classify.

use std::time::Duration;

use mnemo_core::config::EmbeddingConfig;
use mnemo_core::errors::{EmbeddingError, MnemoResult};
use mnemo_core::traits::IEmbeddingProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct ApiProvider {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    #[serde(default)]
    index: Option<usize>,
    embedding: Vec<f32>,
}

impl ApiProvider {
    pub fn new(
        endpoint: String,
        model: String,
        api_key: String,
        dimensions: usize,
        timeout: Duration,
    ) -> MnemoResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: format!("client build: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint,
            model,
            api_key,
            dimensions,
        })
    }

    pub fn from_config(config: &EmbeddingConfig, api_key: String) -> MnemoResult<Self> {
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            api_key,
            config.dimensions,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn request_embeddings(&self, texts: &[String]) -> MnemoResult<Vec<Vec<f32>>> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::HttpStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: EmbedResponse = response.json().map_err(|e| EmbeddingError::InvalidResponse {
            reason: e.to_string(),
        })?;
        debug!(count = parsed.data.len(), model = %self.model, "embedding response");
        decode_embeddings(parsed, texts.len(), self.dimensions)
    }
}

/// Order by `index` when present and check counts and dimensions.
fn decode_embeddings(
    mut response: EmbedResponse,
    expected_count: usize,
    dimensions: usize,
) -> MnemoResult<Vec<Vec<f32>>> {
    if response.data.len() != expected_count {
        return Err(EmbeddingError::InvalidResponse {
            reason: format!(
                "expected {expected_count} embeddings, got {}",
                response.data.len()
            ),
        }
        .into());
    }
    response.data.sort_by_key(|d| d.index.unwrap_or(usize::MAX));

    let mut out = Vec::with_capacity(expected_count);
    for data in response.data {
        if data.embedding.len() != dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: dimensions,
                actual: data.embedding.len(),
            }
            .into());
        }
        out.push(data.embedding);
    }
    Ok(out)
}

/// Map a transport failure to timeout, connection reset, or a plain failure.
fn map_transport_error(err: reqwest::Error) -> mnemo_core::errors::MnemoError {
    if err.is_timeout() {
        return EmbeddingError::Timeout.into();
    }
    if is_connection_reset(&err) {
        return EmbeddingError::ConnectionReset {
            reason: err.to_string(),
        }
        .into();
    }
    EmbeddingError::RequestFailed {
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

impl IEmbeddingProvider for ApiProvider {
    fn embed(&self, text: &str) -> MnemoResult<Vec<f32>> {
        let texts = [text.to_string()];
        self.request_embeddings(&texts)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                EmbeddingError::InvalidResponse {
                    reason: "empty response".to_string(),
                }
                .into()
            })
    }

    fn embed_batch(&self, texts: &[String]) -> MnemoResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }
}
