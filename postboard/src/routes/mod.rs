//! Local stand-in for the demo posts API.
//!
//! Same contract as JSONPlaceholder: a fixed seed of posts is served, writes
//! are validated and echoed back, and nothing is ever stored.

mod post;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::models::Post;

/// Number of posts the stand-in serves, like the public demo.
pub const SEED_COUNT: u64 = 100;

// ============================================================================
// APPLICATION STATE - Shared, read-only seed
// ============================================================================
/// `Arc` = Atomic Reference Counter
/// - Every request handler shares the same seed without copying it
/// - Nothing writes to it: the stand-in never persists anything
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<Vec<Post>>,
}

impl AppState {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(posts),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_posts(SEED_COUNT))
    }
}

/// Ten posts per user, ids starting at 1.
pub fn seed_posts(count: u64) -> Vec<Post> {
    (1..=count)
        .map(|id| Post {
            id,
            user_id: (id - 1) / 10 + 1,
            title: format!("post {id} of user {}", (id - 1) / 10 + 1),
            body: format!(
                "This is the body of post {id}.\nIt is served by the local stand-in and never changes."
            ),
        })
        .collect()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/posts", get(post::list_posts).post(post::create_post))
        .route(
            "/posts/{id}",
            get(post::get_post)
                .put(post::update_post)
                .delete(post::delete_post),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "../tests/routes_tests.rs"]
mod tests;
