use async_trait::async_trait;
use reqwest::{Client, Response, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::PostsApi;
use crate::{
    dto::PostPayload,
    errors::{Operation, RequestFailed},
    models::{Post, PostId},
};

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// `PostsApi` over HTTP with reqwest.
///
/// No timeout is configured: a request waits as long as the transport lets it.
#[derive(Debug, Clone)]
pub struct HttpPostsApi {
    http: Client,
    base_url: String,
}

impl HttpPostsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: PostId) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }
}

/// Turns any non-2xx answer into the operation's failure.
fn ensure_success(operation: Operation, res: Response) -> Result<Response, RequestFailed> {
    let status = res.status();
    if !status.is_success() {
        debug!(%operation, status = status.as_u16(), "request rejected");
        return Err(RequestFailed::status(operation, status.as_u16()));
    }
    Ok(res)
}

async fn decode<T: DeserializeOwned>(operation: Operation, res: Response) -> Result<T, RequestFailed> {
    res.json::<T>()
        .await
        .map_err(|e| RequestFailed::from((operation, e)))
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self) -> Result<Vec<Post>, RequestFailed> {
        let op = Operation::Fetch;
        let res = self
            .http
            .get(self.posts_url())
            .send()
            .await
            .map_err(|e| RequestFailed::from((op, e)))?;

        decode(op, ensure_success(op, res)?).await
    }

    async fn create_post(&self, payload: &PostPayload) -> Result<Value, RequestFailed> {
        let op = Operation::Create;
        let res = self
            .http
            .post(self.posts_url())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(payload)
            .send()
            .await
            .map_err(|e| RequestFailed::from((op, e)))?;

        decode(op, ensure_success(op, res)?).await
    }

    async fn update_post(&self, id: PostId, payload: &PostPayload) -> Result<Value, RequestFailed> {
        let op = Operation::Update;
        let res = self
            .http
            .put(self.post_url(id))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(payload)
            .send()
            .await
            .map_err(|e| RequestFailed::from((op, e)))?;

        decode(op, ensure_success(op, res)?).await
    }

    async fn delete_post(&self, id: PostId) -> Result<(), RequestFailed> {
        let op = Operation::Delete;
        let res = self
            .http
            .delete(self.post_url(id))
            .send()
            .await
            .map_err(|e| RequestFailed::from((op, e)))?;

        // Body is whatever the server felt like sending back.
        ensure_success(op, res).map(|_| ())
    }
}
