use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use voicecart_protocol::UserState;

/// In-memory state store keyed by user id. Cheap to clone; all clones
/// share the same map.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    inner: Arc<RwLock<HashMap<String, UserState>>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a user's state, empty defaults when nothing was saved yet.
    pub async fn get(&self, user_id: &str) -> UserState {
        self.inner
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Upsert a user's state wholesale.
    pub async fn put(&self, user_id: &str, state: UserState) {
        self.inner.write().await.insert(user_id.to_string(), state);
    }

    pub async fn user_count(&self) -> usize {
        self.inner.read().await.len()
    }
}
