//! Catalog access helpers: recipe lookup and a bounded, expiring cache
//! for fetched recipe collections.
//!
//! The cache replaces ad hoc module-level memoization with an explicit
//! bounded map: entries are keyed by query string, expire after a fixed
//! TTL, and the oldest entry is evicted when the map is full. Callers own
//! the cache value and provide their own synchronization.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::types::Recipe;

/// Find a recipe by its stable id.
pub fn find_recipe_by_id<'a>(id: &str, recipes: &'a [Recipe]) -> Option<&'a Recipe> {
    recipes.iter().find(|recipe| recipe.id == id)
}

/// Bounded, expiring cache for recipe collections keyed by query string.
#[derive(Debug)]
pub struct CatalogCache {
    entries: HashMap<String, CachedCatalog>,
    capacity: usize,
    ttl: Duration,
}

#[derive(Debug, Clone)]
struct CachedCatalog {
    recipes: Vec<Recipe>,
    cached_at: DateTime<Utc>,
}

impl CatalogCache {
    pub const DEFAULT_CAPACITY: usize = 32;
    /// Matches the original five-minute response-cache window.
    pub const DEFAULT_TTL_MINUTES: i64 = 5;

    /// Create a cache with the default capacity and TTL.
    pub fn new() -> Self {
        Self::with_limits(
            Self::DEFAULT_CAPACITY,
            Duration::minutes(Self::DEFAULT_TTL_MINUTES),
        )
    }

    /// Create a cache with explicit bounds. Capacity is at least 1.
    pub fn with_limits(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Get the cached collection for a query, if present and fresh.
    pub fn get(&mut self, query: &str) -> Option<&[Recipe]> {
        self.get_at(query, Utc::now())
    }

    /// Clock-injected form of [`get`](Self::get).
    pub fn get_at(&mut self, query: &str, now: DateTime<Utc>) -> Option<&[Recipe]> {
        let expired = match self.entries.get(query) {
            Some(entry) => now.signed_duration_since(entry.cached_at) >= self.ttl,
            None => {
                tracing::debug!(query, "catalog cache miss");
                return None;
            }
        };

        if expired {
            self.entries.remove(query);
            tracing::debug!(query, "catalog cache entry expired");
            return None;
        }

        tracing::debug!(query, "catalog cache hit");
        self.entries.get(query).map(|entry| entry.recipes.as_slice())
    }

    /// Store a fetched collection under a query key, evicting the oldest
    /// entry if the cache is full.
    pub fn insert(&mut self, query: String, recipes: Vec<Recipe>) {
        self.insert_at(query, recipes, Utc::now());
    }

    /// Clock-injected form of [`insert`](Self::insert).
    pub fn insert_at(&mut self, query: String, recipes: Vec<Recipe>, now: DateTime<Utc>) {
        if !self.entries.contains_key(&query) && self.entries.len() >= self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.cached_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                self.entries.remove(&oldest);
                tracing::debug!(query = %oldest, "catalog cache full, evicted oldest entry");
            }
        }

        self.entries.insert(
            query,
            CachedCatalog {
                recipes,
                cached_at: now,
            },
        );
    }

    /// Number of live entries (expired entries linger until read).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}
