//! The shared key/value carrier passed through an operation chain.

use std::collections::HashMap;
use std::fmt;

/// A stored deferred computation yielding an ordered sequence of strings.
///
/// Producers are invoked only when their key is fetched, never at
/// registration time, and once per fetch — results are not cached.
pub type Producer = Box<dyn Fn() -> Vec<String>>;

/// A context for a chain of operations.
///
/// Stages publish values under string keys and read values published by
/// earlier stages. Values are stored as producers so that the real data is
/// not computed until somebody asks for it.
///
/// One `ChainContext` is created per chain run and handed to every stage by
/// mutable reference; it is not safe for concurrent mutation, and any
/// cross-thread serialization is the orchestrator's responsibility.
#[derive(Default)]
pub struct ChainContext {
    data: HashMap<String, Producer>,
}

impl ChainContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `producer` under `key`, overwriting any prior producer for
    /// that key.
    ///
    /// The producer is not invoked here; it runs on every subsequent
    /// [`fetch`](Self::fetch) of the key. Keys and producers are accepted
    /// unconditionally — no key-shape or purity validation.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        producer: impl Fn() -> Vec<String> + 'static,
    ) {
        let key = key.into();
        tracing::trace!(key = %key, "registering producer");
        self.data.insert(key, Box::new(producer));
    }

    /// Stores already materialized `values` under `key`.
    ///
    /// Equivalent to registering a producer that clones `values` on every
    /// fetch.
    pub fn register_values(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.register(key, move || values.clone());
    }

    /// Invokes the producer registered under `key` and returns its output.
    ///
    /// Returns an empty vector if no producer is registered — a default,
    /// not an error. The result is not cached: every call re-executes the
    /// producer, and a panic inside the producer unwinds to the caller
    /// unmodified.
    #[must_use]
    pub fn fetch(&self, key: &str) -> Vec<String> {
        if let Some(producer) = self.data.get(key) {
            tracing::trace!(key = %key, "fetching: invoking producer");
            producer()
        } else {
            tracing::trace!(key = %key, "fetching: no producer, defaulting to empty");
            Vec::new()
        }
    }

    /// Checks whether a producer is registered under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns all registered keys, in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }

    /// Returns the number of registered producers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no producers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for ChainContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainContext")
            .field("keys", &self.data.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_fetch() {
        let mut ctx = ChainContext::new();
        ctx.register("key", || vec!["value".to_string()]);

        assert_eq!(ctx.fetch("key"), vec!["value".to_string()]);
        assert!(ctx.contains_key("key"));
        assert!(!ctx.contains_key("other"));
    }

    #[test]
    fn test_fetch_unknown_key_defaults_to_empty() {
        let ctx = ChainContext::new();
        assert!(ctx.fetch("anything").is_empty());
    }

    #[test]
    fn test_register_values() {
        let mut ctx = ChainContext::new();
        ctx.register_values("items", vec!["a".to_string(), "b".to_string()]);

        assert_eq!(ctx.fetch("items"), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(ctx.fetch("items"), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_keys_and_len() {
        let mut ctx = ChainContext::new();
        assert!(ctx.is_empty());

        ctx.register("a", Vec::new);
        ctx.register("b", Vec::new);

        assert_eq!(ctx.len(), 2);
        let mut keys = ctx.keys();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_reregister_does_not_grow_the_map() {
        let mut ctx = ChainContext::new();
        ctx.register("key", Vec::new);
        ctx.register("key", Vec::new);

        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_debug_lists_keys() {
        let mut ctx = ChainContext::new();
        ctx.register("visible", Vec::new);

        let rendered = format!("{ctx:?}");
        assert!(rendered.contains("visible"));
    }
}
