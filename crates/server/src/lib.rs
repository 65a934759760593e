//! Thin persistence service for voicecart sessions: a keyed upsert store
//! behind three routes. Clients treat it as best-effort; losing it never
//! breaks an in-memory session.

mod store;

pub use store::StateStore;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use serde::{Deserialize, Serialize};
use voicecart_protocol::{UserState, DEFAULT_USER_ID};

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(rename = "userId", default = "default_user_id")]
    pub user_id: String,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

pub async fn get_state(
    State(store): State<StateStore>,
    Query(query): Query<UserQuery>,
) -> Json<UserState> {
    Json(store.get(&query.user_id).await)
}

pub async fn post_state(
    State(store): State<StateStore>,
    Query(query): Query<UserQuery>,
    Json(state): Json<UserState>,
) -> Json<Ack> {
    info!(
        "state upsert for {:?}: {} items, {} history entries",
        query.user_id,
        state.items.len(),
        state.history.len()
    );
    store.put(&query.user_id, state).await;
    Json(Ack { ok: true })
}

/// Build the full route table over a shared store.
pub fn router(store: StateStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/state", get(get_state).post(post_state))
        .with_state(store)
}
