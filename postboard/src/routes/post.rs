use crate::{
    dto::PostPayload,
    errors::ApiError,
    models::{Post, PostId},
    routes::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

/// GET /posts
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.posts.as_ref().clone())
}

/// GET /posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Json<Post>, ApiError> {
    let post = state
        .posts
        .iter()
        .find(|post| post.id == id)
        .ok_or(ApiError::NotFound)?;

    Ok(Json(post.clone()))
}

/// POST /posts
/// Body: { "title": "...", "body": "...", "userId": 1 }
///
/// Answers as if the post was stored under the next id; it is not.
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<PostPayload>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let post = echo(state.posts.len() as PostId + 1, payload);

    info!("Post create echoed: {} (not stored)", post.id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /posts/:id
/// Body: { "title": "...", "body": "...", "userId": 1 }
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<Post>, ApiError> {
    if !state.posts.iter().any(|post| post.id == id) {
        return Err(ApiError::NotFound);
    }

    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    info!("Post update echoed: {} (not stored)", id);

    Ok(Json(echo(id, payload)))
}

/// DELETE /posts/:id
/// Always answers `{}`; the seed keeps the post.
pub async fn delete_post(Path(id): Path<PostId>) -> Json<serde_json::Value> {
    info!("Post delete acknowledged: {} (not removed)", id);

    Json(serde_json::json!({}))
}

fn echo(id: PostId, payload: PostPayload) -> Post {
    Post {
        id,
        user_id: payload.user_id,
        title: payload.title,
        body: payload.body,
    }
}
