//! Scorer caching utilities for sharing loaded lexicons across pipelines.
//!
//! Building a scorer parses its lexicon. The cache keeps one instance per
//! option set so that every pipeline built with the same options shares the
//! same immutable resources. Analysis results are never cached.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// Trait implemented by model option types to generate a stable cache key.
pub trait ModelOptions {
    fn cache_key(&self) -> String;
}

type CacheStorage = HashMap<(TypeId, String), Arc<dyn Any + Send + Sync>>;

/// A thread-safe cache for scorer instances.
///
/// Entries are keyed by the model type and its option key, so two model types
/// with identical option keys never collide.
pub struct ModelCache {
    cache: Mutex<CacheStorage>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Get or create a model from the cache.
    ///
    /// If a model with the given key already exists, a clone is returned.
    /// Otherwise `loader` is called and its result stored. The lock is not
    /// held while the loader runs.
    pub fn get_or_create<M, F>(&self, key: &str, loader: F) -> anyhow::Result<M>
    where
        M: Clone + Send + Sync + 'static,
        F: FnOnce() -> anyhow::Result<M>,
    {
        let cache_key = (TypeId::of::<M>(), key.to_string());

        if let Some(model) = self
            .cache
            .lock()
            .get(&cache_key)
            .and_then(|cached| cached.downcast_ref::<M>())
        {
            tracing::trace!(key, "scorer cache hit");
            return Ok(model.clone());
        }

        let model = loader()?;
        self.cache.lock().insert(
            cache_key,
            Arc::new(model.clone()) as Arc<dyn Any + Send + Sync>,
        );
        tracing::debug!(key, "scorer cached");

        Ok(model)
    }

    /// Drop every cached model, e.g. after a lexicon file changed on disk.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_MODEL_CACHE: Lazy<ModelCache> = Lazy::new(ModelCache::new);

/// Get a reference to the process-wide model cache.
pub fn global_cache() -> &'static ModelCache {
    &GLOBAL_MODEL_CACHE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestModel {
        id: String,
    }

    #[derive(Clone)]
    struct OtherModel;

    #[test]
    fn test_cache_returns_same_instance() {
        let cache = ModelCache::new();

        let model1 = cache
            .get_or_create::<TestModel, _>("test-model", || {
                Ok(TestModel {
                    id: "original".to_string(),
                })
            })
            .unwrap();

        let model2 = cache
            .get_or_create::<TestModel, _>("test-model", || {
                // This should not be called
                Ok(TestModel {
                    id: "new".to_string(),
                })
            })
            .unwrap();

        assert_eq!(model1.id, model2.id);
        assert_eq!(model1.id, "original");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_separates_model_types() {
        let cache = ModelCache::new();
        cache
            .get_or_create::<TestModel, _>("shared", || Ok(TestModel { id: "a".into() }))
            .unwrap();
        cache
            .get_or_create::<OtherModel, _>("shared", || Ok(OtherModel))
            .unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_failed_loader_is_not_cached() {
        let cache = ModelCache::new();
        let res = cache.get_or_create::<TestModel, _>("broken", || anyhow::bail!("no lexicon"));
        assert!(res.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = ModelCache::new();
        cache
            .get_or_create::<OtherModel, _>("x", || Ok(OtherModel))
            .unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}
