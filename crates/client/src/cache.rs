//! Time-bounded character cache
//!
//! Characters are effectively static, so detail fetches are cached by id
//! for a fixed TTL. Expiry is the only invalidation path. Once the cache is
//! full the oldest entry makes room for the new one.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use catalog_core::{CharacterDetail, CharacterId};

#[derive(Debug, Clone)]
struct CachedCharacter {
    detail: CharacterDetail,
    inserted_at: Instant,
}

impl CachedCharacter {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() < ttl
    }
}

/// Process-wide cache of character details keyed by id
#[derive(Debug)]
pub struct CharacterCache {
    ttl: Duration,
    capacity: usize,
    entries: RwLock<HashMap<CharacterId, CachedCharacter>>,
}

impl CharacterCache {
    /// Create a cache holding at most `capacity` entries for `ttl` each
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fresh cached detail for `id`, if any
    pub fn get(&self, id: CharacterId) -> Option<CharacterDetail> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&id)
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.detail.clone())
    }

    /// Cache `detail`, dropping expired entries first
    pub fn insert(&self, detail: CharacterDetail) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, entry| entry.is_fresh(self.ttl));

        if entries.len() >= self.capacity && !entries.contains_key(&detail.id) {
            if let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(id, _)| *id)
            {
                entries.remove(&oldest);
            }
        }

        entries.insert(
            detail.id,
            CachedCharacter {
                detail,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Number of stored entries, including expired ones not yet swept
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Tests
// ============================================================================
