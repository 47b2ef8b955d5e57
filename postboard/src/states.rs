use tracing::{debug, info, warn};

use crate::{
    client::PostsApi,
    dto::{PostForm, PostPayload},
    errors::{FormError, IdsExhausted, RequestFailed},
    models::{Post, PostId},
    reducer::{PostAction, PostsState},
};

pub const CREATED_NOTICE: &str = "Post created successfully!";
pub const UPDATED_NOTICE: &str = "Post updated successfully!";
pub const DELETED_NOTICE: &str = "Post deleted successfully!";

/// How a controller operation ended.
///
/// Every operation goes `idle -> requesting -> {reconciled | error surfaced}`
/// and is back to idle by the time it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Reconciled,
    ErrorSurfaced,
    /// The user declined the delete confirmation; nothing was sent.
    Cancelled,
}

// ============================================================================
// APPLICATION STATE - The single source of truth for the post list
// ============================================================================
/// Owns the local post collection and keeps it in line with user intent.
///
/// The server is trusted once, for the initial load. After that a write
/// response only says "the call went through" and the mutation itself is
/// replayed locally through [`PostsState::apply`].
///
/// Every operation takes `&mut self` and runs its request to completion, so
/// two operations can never overlap on the same controller.
pub struct PostsController<A> {
    api: A,
    state: PostsState,
    error: Option<String>,
    notice: Option<String>,
    loading: bool,
    last_outcome: Option<Outcome>,
}

impl<A: PostsApi> PostsController<A> {
    /// Starts empty and in the loading state until the first [`load`](Self::load).
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: PostsState::default(),
            error: None,
            notice: None,
            loading: true,
            last_outcome: None,
        }
    }

    pub fn state(&self) -> &PostsState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        self.state.posts()
    }

    pub fn find(&self, id: PostId) -> Option<&Post> {
        self.state.get(id)
    }

    /// Most recent failure message, until the next successful operation.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Confirmation text of the last successful write.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// GET the posts and replace local state with the first ten.
    pub async fn load(&mut self) -> Outcome {
        self.notice = None;
        self.loading = true;
        let result = self.api.list_posts().await;
        self.loading = false;

        match result {
            Ok(posts) => {
                let received = posts.len();
                match self.reconcile(PostAction::Loaded(posts), None) {
                    Ok(_) => {
                        info!(received, kept = self.state.len(), "Posts loaded");
                        self.finish(Outcome::Reconciled)
                    }
                    Err(err) => self.refuse(err),
                }
            }
            Err(err) => self.surface(err),
        }
    }

    /// POST a new post and prepend it locally under a fresh local id.
    ///
    /// When no id is left above the largest local one, the acknowledged post
    /// is not added and the failure becomes the current error.
    pub async fn create(&mut self, form: PostForm) -> Result<Outcome, FormError> {
        form.check()?;
        self.notice = None;

        match self.api.create_post(&PostPayload::from(&form)).await {
            Ok(echo) => {
                debug!(remote_id = ?echo.get("id"), "Ignoring id assigned by the server");
                Ok(match self.reconcile(PostAction::Created(form), Some(CREATED_NOTICE)) {
                    Ok(id) => {
                        info!(id = ?id, "Post created");
                        self.finish(Outcome::Reconciled)
                    }
                    Err(err) => self.refuse(err),
                })
            }
            Err(err) => Ok(self.surface(err)),
        }
    }

    /// PUT the edited fields and merge them into the local post.
    ///
    /// A successful PUT for an id missing from the local list clears the
    /// error but changes nothing and sets no notice.
    pub async fn update(&mut self, id: PostId, form: PostForm) -> Result<Outcome, FormError> {
        form.check()?;
        self.notice = None;

        match self.api.update_post(id, &PostPayload::from(&form)).await {
            Ok(_) => {
                let outcome = match self.reconcile(PostAction::Updated { id, form }, None) {
                    Ok(Some(_)) => {
                        self.notice = Some(UPDATED_NOTICE.to_string());
                        info!(id, "Post updated");
                        self.finish(Outcome::Reconciled)
                    }
                    Ok(None) => {
                        warn!(id, "Updated post is not in the local list");
                        self.finish(Outcome::Reconciled)
                    }
                    Err(err) => self.refuse(err),
                };
                Ok(outcome)
            }
            Err(err) => Ok(self.surface(err)),
        }
    }

    /// DELETE a post once `confirm` agrees, then drop it locally.
    pub async fn delete(&mut self, id: PostId, confirm: impl FnOnce() -> bool) -> Outcome {
        if !confirm() {
            debug!(id, "Delete cancelled");
            return self.finish(Outcome::Cancelled);
        }
        self.notice = None;

        match self.api.delete_post(id).await {
            Ok(()) => match self.reconcile(PostAction::Deleted(id), Some(DELETED_NOTICE)) {
                Ok(_) => {
                    info!(id, "Post deleted");
                    self.finish(Outcome::Reconciled)
                }
                Err(err) => self.refuse(err),
            },
            Err(err) => self.surface(err),
        }
    }

    /// Applies an acknowledged action. State, error and notice only change
    /// when the action applies.
    fn reconcile(
        &mut self,
        action: PostAction,
        notice: Option<&str>,
    ) -> Result<Option<PostId>, IdsExhausted> {
        let touched = self.state.apply(action)?;
        self.error = None;
        self.notice = notice.map(str::to_string);
        Ok(touched)
    }

    fn surface(&mut self, err: RequestFailed) -> Outcome {
        warn!(operation = %err.operation, status = ?err.status, "Request failed: {}", err);
        self.error = Some(err.message);
        self.finish(Outcome::ErrorSurfaced)
    }

    /// The server agreed but the local list could not take the change.
    fn refuse(&mut self, err: IdsExhausted) -> Outcome {
        warn!("Acknowledged write not applied: {}", err);
        self.error = Some(err.to_string());
        self.finish(Outcome::ErrorSurfaced)
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.last_outcome = Some(outcome);
        outcome
    }
}

#[cfg(test)]
#[path = "tests/states_tests.rs"]
mod tests;
