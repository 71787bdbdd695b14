use crate::api::models::{Musician, User};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;
use tracing::debug;

/// Entity types cached queries depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Musicians,
    Prospects,
}

/// Cached read queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Musicians,
    CurrentUser,
}

impl QueryKey {
    pub const ALL: [QueryKey; 2] = [QueryKey::Musicians, QueryKey::CurrentUser];

    /// Tags whose invalidation makes this query stale
    pub fn tags(&self) -> &'static [Tag] {
        match self {
            QueryKey::Musicians => &[Tag::Musicians],
            QueryKey::CurrentUser => &[Tag::Prospects],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    Musicians(Vec<Musician>),
    CurrentUser(User),
}

impl CachedValue {
    pub fn key(&self) -> QueryKey {
        match self {
            CachedValue::Musicians(_) => QueryKey::Musicians,
            CachedValue::CurrentUser(_) => QueryKey::CurrentUser,
        }
    }
}

/// Published whenever cached queries are dropped
#[derive(Debug, Clone, PartialEq)]
pub struct Invalidation {
    pub generation: u64,
    pub keys: Vec<QueryKey>,
}

/// Client-held query cache with tag-based invalidation.
///
/// Writes are last-write-wins: a late response for a superseded request
/// still replaces whatever is stored.
#[derive(Clone)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<QueryKey, CachedValue>>>,
    generation: Arc<AtomicU64>,
    events: broadcast::Sender<Invalidation>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(32);
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            generation: Arc::new(AtomicU64::new(0)),
            events,
        }
    }

    pub fn get(&self, key: QueryKey) -> Option<CachedValue> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(&key).cloned())
    }

    pub fn musicians(&self) -> Option<Vec<Musician>> {
        match self.get(QueryKey::Musicians) {
            Some(CachedValue::Musicians(list)) => Some(list),
            _ => None,
        }
    }

    pub fn current_user(&self) -> Option<User> {
        match self.get(QueryKey::CurrentUser) {
            Some(CachedValue::CurrentUser(user)) => Some(user),
            _ => None,
        }
    }

    pub fn store(&self, value: CachedValue) {
        let key = value.key();
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, value);
            debug!("Cached {:?}", key);
        }
    }

    /// Drop every query depending on any of `tags` and notify subscribers
    pub fn invalidate(&self, tags: &[Tag]) -> Invalidation {
        let keys: Vec<QueryKey> = QueryKey::ALL
            .into_iter()
            .filter(|key| key.tags().iter().any(|tag| tags.contains(tag)))
            .collect();
        self.drop_keys(keys)
    }

    /// Drop everything, e.g. on logout
    pub fn clear(&self) -> Invalidation {
        self.drop_keys(QueryKey::ALL.to_vec())
    }

    fn drop_keys(&self, keys: Vec<QueryKey>) -> Invalidation {
        if let Ok(mut entries) = self.entries.write() {
            for key in &keys {
                entries.remove(key);
            }
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let invalidation = Invalidation { generation, keys };
        debug!("Invalidated {:?} (generation {})", invalidation.keys, generation);

        // No receivers is fine, nobody is mounted
        let _ = self.events.send(invalidation.clone());
        invalidation
    }

    /// Number of invalidations so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Invalidation> {
        self.events.subscribe()
    }
}
