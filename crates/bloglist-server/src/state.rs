use std::sync::Arc;

use bloglist_data::store::BlogStore;
use tokio::sync::RwLock;

/// Shared handler state: the document store behind an async RwLock.
///
/// Read endpoints take the read lock; create/update/delete take the write
/// lock, which also covers the store's persist-to-disk step.
pub struct AppState {
    pub store: RwLock<BlogStore>,
}

/// The state type handed to every handler.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: BlogStore) -> SharedState {
        Arc::new(Self {
            store: RwLock::new(store),
        })
    }
}
