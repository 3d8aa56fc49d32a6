//! Deterministic port fakes.

use std::collections::VecDeque;
use std::sync::Mutex;

use mnemo_core::errors::{CompletionError, MnemoResult};
use mnemo_core::traits::{CompletionRequest, ICompletionProvider, IEmbeddingProvider};

/// Bag-of-words embedder: each lowercase word hashes into a bucket, and the
/// vector is L2-normalised. Texts sharing words are closer.
pub struct HashEmbedder {
    dims: usize,
}

impl HashEmbedder {
    pub fn new(dims: usize) -> Self {
        Self { dims: dims.max(1) }
    }

    fn bucket(&self, word: &str) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in word.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % self.dims
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0.0f32; self.dims];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            v[self.bucket(&word.to_lowercase())] += 1.0;
        }
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            v.iter_mut().for_each(|x| *x /= norm);
        }
        v
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(64)
    }
}

impl IEmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str) -> MnemoResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> MnemoResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "hash-embedder"
    }
}

/// Completion fake with queued answers. Records every call.
///
/// `complete` pops from the answer queue, `prompt` pops from the extraction
/// queue. An exhausted queue yields the configured default.
#[derive(Default)]
pub struct ScriptedCompletion {
    answers: Mutex<VecDeque<String>>,
    extractions: Mutex<VecDeque<String>>,
    default_answer: String,
    default_extraction: String,
    complete_calls: Mutex<Vec<CompletionRequest>>,
    prompt_calls: Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    pub fn new() -> Self {
        Self {
            default_answer: mnemo_core::constants::DONT_KNOW_LITERAL.to_string(),
            default_extraction: "null".to_string(),
            ..Default::default()
        }
    }

    pub fn with_answers<I, S>(self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers
            .lock()
            .unwrap()
            .extend(answers.into_iter().map(Into::into));
        self
    }

    pub fn with_extractions<I, S>(self, extractions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extractions
            .lock()
            .unwrap()
            .extend(extractions.into_iter().map(Into::into));
        self
    }

    pub fn complete_calls(&self) -> Vec<CompletionRequest> {
        self.complete_calls.lock().unwrap().clone()
    }

    pub fn prompt_calls(&self) -> Vec<String> {
        self.prompt_calls.lock().unwrap().clone()
    }
}

impl ICompletionProvider for ScriptedCompletion {
    fn complete(&self, request: &CompletionRequest) -> MnemoResult<String> {
        self.complete_calls.lock().unwrap().push(request.clone());
        Ok(self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default_answer.clone()))
    }

    fn prompt(&self, _instruction: &str, input: &str) -> MnemoResult<String> {
        self.prompt_calls.lock().unwrap().push(input.to_string());
        Ok(self
            .extractions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default_extraction.clone()))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Completion fake that always fails with the given upstream status.
pub struct FailingCompletion {
    pub status: u16,
}

impl ICompletionProvider for FailingCompletion {
    fn complete(&self, _request: &CompletionRequest) -> MnemoResult<String> {
        Err(CompletionError::HttpStatus {
            status: self.status,
            body: "upstream failure".to_string(),
        }
        .into())
    }

    fn prompt(&self, _instruction: &str, _input: &str) -> MnemoResult<String> {
        self.complete(&CompletionRequest::default())
    }

    fn name(&self) -> &str {
        "failing"
    }
}
