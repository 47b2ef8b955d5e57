//! The remote collaborator: a REST endpoint serving posts that echoes writes
//! without ever storing them.

mod http;

use async_trait::async_trait;
use serde_json::Value;

pub use http::HttpPostsApi;

use crate::{
    dto::PostPayload,
    errors::RequestFailed,
    models::{Post, PostId},
};

/// Default endpoint, the public JSONPlaceholder demo.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Calls the controller makes against the posts endpoint.
///
/// Write responses only tell the caller whether the call went through. Their
/// bodies are returned as loose JSON echoes and never treated as stored data.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// `GET /posts`
    async fn list_posts(&self) -> Result<Vec<Post>, RequestFailed>;

    /// `POST /posts`
    async fn create_post(&self, payload: &PostPayload) -> Result<Value, RequestFailed>;

    /// `PUT /posts/{id}`
    async fn update_post(&self, id: PostId, payload: &PostPayload) -> Result<Value, RequestFailed>;

    /// `DELETE /posts/{id}`
    async fn delete_post(&self, id: PostId) -> Result<(), RequestFailed>;
}
