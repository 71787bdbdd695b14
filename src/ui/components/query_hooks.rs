use crate::api::{use_api_store, QueryKey};
use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;

/// Restart `resource` whenever the store invalidates `key`
pub fn use_refetch_on_invalidate<T: 'static>(key: QueryKey, mut resource: Resource<T>) {
    let store = use_api_store();

    use_future(move || {
        let store = store.clone();
        async move {
            let mut events = store.subscribe();
            loop {
                match events.recv().await {
                    Ok(invalidation) if invalidation.keys.contains(&key) => {
                        debug!("Refetching {:?} after invalidation", key);
                        resource.restart();
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(_)) => resource.restart(),
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });
}

/// Sign-in flag that follows the session, so logout re-renders readers
pub fn use_signed_in() -> Signal<bool> {
    let store = use_api_store();
    let mut signed_in = use_signal(|| store.session().is_signed_in());

    use_future(move || {
        let mut watcher = store.session().watch_signed_in();
        async move {
            while watcher.changed().await.is_ok() {
                let now = *watcher.borrow_and_update();
                debug!("Session signed in: {}", now);
                signed_in.set(now);
            }
        }
    });

    signed_in
}
