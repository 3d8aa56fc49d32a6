pub mod l1_memory;

pub use l1_memory::L1MemoryCache;

/// Cache key for a text embedded by a given model.
pub fn content_key(model: &str, text: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(model.as_bytes());
    hasher.update(&[0]);
    hasher.update(text.as_bytes());
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_depends_on_model_and_text() {
        let a = content_key("m1", "hello");
        assert_eq!(a, content_key("m1", "hello"));
        assert_ne!(a, content_key("m2", "hello"));
        assert_ne!(a, content_key("m1", "hello!"));
    }
}
