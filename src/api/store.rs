use crate::api::cache::{CachedValue, Invalidation, QueryCache, Tag};
use crate::api::client::{ApiClient, BookingBackend};
use crate::api::error::ApiFailure;
use crate::api::models::{Musician, MusicianId, MutationAck, User};
use crate::api::session::Session;
use crate::config::Config;
use dioxus::prelude::*;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{info, warn};

/// Request/result state of a query or mutation
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Pending,
    Success(T),
    Failure(ApiFailure),
}

impl<T> QueryState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            QueryState::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiFailure>> for QueryState<T> {
    fn from(result: Result<T, ApiFailure>) -> Self {
        match result {
            Ok(data) => QueryState::Success(data),
            Err(failure) => QueryState::Failure(failure),
        }
    }
}

/// Mutations are awaited to completion, so they only ever succeed or fail
pub type MutationOutcome = Result<MutationAck, ApiFailure>;

/// Cache-backed accessor the UI talks to
#[derive(Clone)]
pub struct ApiStore {
    backend: Arc<dyn BookingBackend>,
    cache: QueryCache,
    session: Session,
}

impl PartialEq for ApiStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.backend, &other.backend)
    }
}

impl ApiStore {
    pub fn new(backend: Arc<dyn BookingBackend>, session: Session) -> Self {
        Self {
            backend,
            cache: QueryCache::new(),
            session,
        }
    }

    /// Store talking to the configured REST API
    pub fn from_config(config: &Config) -> Self {
        let session = Session::new(config.api_token.clone());
        let client = ApiClient::new(config.api_base_url.clone(), session.clone());
        Self::new(Arc::new(client), session)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Invalidation> {
        self.cache.subscribe()
    }

    /// List musicians, from cache unless `force` is set
    pub async fn musicians(&self, force: bool) -> QueryState<Vec<Musician>> {
        if !force {
            if let Some(list) = self.cache.musicians() {
                return QueryState::Success(list);
            }
        }

        match self.backend.list_musicians().await {
            Ok(list) => {
                info!("Fetched {} musicians", list.len());
                self.cache.store(CachedValue::Musicians(list.clone()));
                QueryState::Success(list)
            }
            Err(e) => {
                warn!("Failed to fetch musicians: {}", e);
                QueryState::Failure(e.into())
            }
        }
    }

    /// Current user with their prospect list, from cache unless `force` is set
    pub async fn current_user(&self, force: bool) -> QueryState<User> {
        if !force {
            if let Some(user) = self.cache.current_user() {
                return QueryState::Success(user);
            }
        }

        match self.backend.current_user().await {
            Ok(user) => {
                info!("Fetched current user with {} prospects", user.musicians.len());
                self.cache.store(CachedValue::CurrentUser(user.clone()));
                QueryState::Success(user)
            }
            Err(e) => {
                warn!("Failed to fetch current user: {}", e);
                QueryState::Failure(e.into())
            }
        }
    }

    pub async fn add_to_prospects(&self, musician_id: MusicianId) -> MutationOutcome {
        let result = self.backend.add_to_prospects(musician_id).await;
        self.finish_mutation("add to prospects", musician_id, result)
    }

    pub async fn remove_musician(&self, musician_id: MusicianId) -> MutationOutcome {
        let result = self.backend.remove_musician(musician_id).await;
        self.finish_mutation("remove musician", musician_id, result)
    }

    fn finish_mutation(
        &self,
        action: &str,
        musician_id: MusicianId,
        result: Result<MutationAck, crate::api::ApiError>,
    ) -> MutationOutcome {
        match result {
            Ok(ack) => {
                info!("{} succeeded for musician {}", action, musician_id);
                self.cache.invalidate(&[Tag::Prospects]);
                Ok(ack)
            }
            Err(e) => {
                warn!("{} failed for musician {}: {}", action, musician_id, e);
                Err(e.into())
            }
        }
    }

    /// Forget the session token and everything cached for it
    pub fn logout(&self) {
        info!("Logging out");
        self.session.clear();
        self.cache.clear();
    }
}

/// Hook to access the shared store from components
pub fn use_api_store() -> ApiStore {
    use_context::<ApiStore>()
}
