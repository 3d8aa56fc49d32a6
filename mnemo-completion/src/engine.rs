//! CompletionEngine: retry around a completion provider.

use mnemo_core::config::{CompletionConfig, RetryConfig};
use mnemo_core::errors::MnemoResult;
use mnemo_core::retry::RetryPolicy;
use mnemo_core::traits::{CompletionRequest, ICompletionProvider};
use tracing::info;

use crate::api_provider::ApiProvider;

pub struct CompletionEngine {
    provider: Box<dyn ICompletionProvider>,
    retry: RetryPolicy,
}

impl CompletionEngine {
    pub fn new(provider: Box<dyn ICompletionProvider>, retry: RetryPolicy) -> Self {
        info!(provider = provider.name(), "CompletionEngine initialized");
        Self { provider, retry }
    }

    pub fn from_config(config: &CompletionConfig, retry: &RetryConfig) -> MnemoResult<Self> {
        let provider = ApiProvider::from_config(config)?;
        Ok(Self::new(Box::new(provider), RetryPolicy::from_config(retry)))
    }
}

impl ICompletionProvider for CompletionEngine {
    fn complete(&self, request: &CompletionRequest) -> MnemoResult<String> {
        self.retry.run("complete", |_| self.provider.complete(request))
    }

    fn prompt(&self, instruction: &str, input: &str) -> MnemoResult<String> {
        self.retry
            .run("prompt", |_| self.provider.prompt(instruction, input))
    }

    fn name(&self) -> &str {
        self.provider.name()
    }
}
