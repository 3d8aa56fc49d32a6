//! Offline hashing provider.
//!
//! Terms are hashed into fixed buckets (FNV-1a) and weighted by term
//! frequency with a length-based IDF approximation, then L2 normalised.
//! Deterministic and network-free.

use std::collections::HashMap;

use mnemo_core::errors::MnemoResult;
use mnemo_core::traits::IEmbeddingProvider;

pub struct TfIdfFallback {
    dimensions: usize,
}

impl TfIdfFallback {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in &tf {
            let idf = 1.0 + (term.len() as f32).ln();
            vec[Self::hash_term(term, self.dimensions)] += (count / total) * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfFallback {
    fn embed(&self, text: &str) -> MnemoResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> MnemoResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn empty_text_is_zero_vector() {
        let v = TfIdfFallback::new(64).embed("").unwrap();
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn output_is_unit_norm() {
        let v = TfIdfFallback::new(256).embed("coffee break policy").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn batch_matches_single() {
        let p = TfIdfFallback::new(128);
        let texts = vec!["my name is Aditia".to_string(), "coffee policy".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, t) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(t).unwrap());
        }
    }

    #[test]
    fn overlapping_texts_are_closer() {
        let p = TfIdfFallback::new(256);
        let a = p.embed("coffee break policy").unwrap();
        let b = p.embed("policy on coffee breaks").unwrap();
        let c = p.embed("favourite hiking trails").unwrap();
        assert!(cosine(&a, &b) > cosine(&a, &c));
    }
}
