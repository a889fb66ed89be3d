//! Request handlers for the blog REST API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, MethodRouter},
    Json,
};
use bloglist_core::list_helper;
use bloglist_core::models::{Blog, BlogStats, NewBlog};
use tracing::info;

use crate::error::ApiError;
use crate::state::SharedState;

// ── Route tables ──────────────────────────────────────────────────────────────

/// `GET` + `POST` on the collection.
pub fn blog_routes() -> MethodRouter<SharedState> {
    get(list_blogs).post(create_blog)
}

/// `PUT` + `DELETE` on a single document.
pub fn blog_item_routes() -> MethodRouter<SharedState> {
    delete(delete_blog).put(update_blog)
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /api/blogs` – all blogs in store order.
pub async fn list_blogs(State(state): State<SharedState>) -> Json<Vec<Blog>> {
    let store = state.store.read().await;
    Json(store.blogs().to_vec())
}

/// `POST /api/blogs` – create a blog; 400 when title or url is missing.
pub async fn create_blog(
    State(state): State<SharedState>,
    Json(payload): Json<NewBlog>,
) -> Result<(StatusCode, Json<Blog>), ApiError> {
    payload.validate()?;

    let mut store = state.store.write().await;
    let blog = store.insert(payload)?;
    info!("Created blog {} ({})", blog.id, blog.title);

    Ok((StatusCode::CREATED, Json(blog)))
}

/// `PUT /api/blogs/{id}` – full replacement of an existing blog.
pub async fn update_blog(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<NewBlog>,
) -> Result<Json<Blog>, ApiError> {
    payload.validate()?;

    let mut store = state.store.write().await;
    match store.update(&id, payload)? {
        Some(blog) => Ok(Json(blog)),
        None => Err(ApiError::NotFound(id)),
    }
}

/// `DELETE /api/blogs/{id}` – 204 on success, 404 when the id is unknown.
pub async fn delete_blog(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    if store.remove(&id)? {
        info!("Deleted blog {id}");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(id))
    }
}

/// `GET /api/stats` – aggregated summary over the current snapshot.
pub async fn get_stats(State(state): State<SharedState>) -> Json<BlogStats> {
    let store = state.store.read().await;
    Json(list_helper::summarize(store.blogs()))
}

/// `GET /health`.
pub async fn health() -> &'static str {
    "ok"
}

// ── Tests ─────────────────────────────────────────────────────────────────────
