//! Local reconciliation of the post collection.
//!
//! The remote endpoint throws writes away, so after the initial load this
//! collection is the record of truth. Every write the server acknowledges is
//! replayed here as a [`PostAction`]; the server's own copy is never read
//! back. Re-fetching after a write would silently undo the user's change.

use crate::{
    dto::PostForm,
    errors::IdsExhausted,
    models::{DEFAULT_USER_ID, Post, PostId},
};

/// Only the first entries of the remote listing are kept.
pub const LOAD_CAP: usize = 10;

/// A mutation acknowledged by the server, ready to be applied locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostAction {
    Loaded(Vec<Post>),
    Created(PostForm),
    Updated { id: PostId, form: PostForm },
    Deleted(PostId),
}

/// Ordered posts, newest local creations first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsState {
    posts: Vec<Post>,
}

impl PostsState {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Id for the next locally created post: one past the largest id, or 1.
    ///
    /// `None` when the largest id is already `PostId::MAX`.
    pub fn next_id(&self) -> Option<PostId> {
        match self.posts.iter().map(|post| post.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Applies an acknowledged action and returns the id it touched, if any.
    ///
    /// Only `Created` can fail, and it leaves the state as it was.
    pub fn apply(&mut self, action: PostAction) -> Result<Option<PostId>, IdsExhausted> {
        let touched = match action {
            PostAction::Loaded(mut posts) => {
                posts.truncate(LOAD_CAP);
                self.posts = posts;
                None
            }
            PostAction::Created(form) => {
                let id = self.next_id().ok_or(IdsExhausted)?;
                self.posts.insert(
                    0,
                    Post {
                        id,
                        user_id: DEFAULT_USER_ID,
                        title: form.title,
                        body: form.body,
                    },
                );
                Some(id)
            }
            PostAction::Updated { id, form } => {
                self.posts.iter_mut().find(|post| post.id == id).map(|post| {
                    post.title = form.title;
                    post.body = form.body;
                    id
                })
            }
            PostAction::Deleted(id) => {
                let before = self.posts.len();
                self.posts.retain(|post| post.id != id);
                (self.posts.len() != before).then_some(id)
            }
        };
        Ok(touched)
    }
}

/// Pure form of [`PostsState::apply`]: `(state, action) -> state`.
pub fn reduce(mut state: PostsState, action: PostAction) -> Result<PostsState, IdsExhausted> {
    state.apply(action)?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: PostId) -> Post {
        Post {
            id,
            user_id: 7,
            title: format!("title {id}"),
            body: format!("body {id}"),
        }
    }

    fn ids(state: &PostsState) -> Vec<PostId> {
        state.posts().iter().map(|p| p.id).collect()
    }

    #[test]
    fn load_keeps_at_most_ten_posts() {
        let state = reduce(PostsState::default(), PostAction::Loaded((1..=100).map(post).collect()))
            .unwrap();
        assert_eq!(ids(&state), (1..=10).collect::<Vec<_>>());

        let state = reduce(state, PostAction::Loaded((1..=3).map(post).collect())).unwrap();
        assert_eq!(state.len(), 3);

        let state = reduce(state, PostAction::Loaded(Vec::new())).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn create_prepends_with_next_id() {
        let state = PostsState::new(vec![post(1), post(2)]);
        let state = reduce(state, PostAction::Created(PostForm::new("new", "post"))).unwrap();

        assert_eq!(ids(&state), vec![3, 1, 2]);
        let created = &state.posts()[0];
        assert_eq!(created.title, "new");
        assert_eq!(created.body, "post");
        assert_eq!(created.user_id, DEFAULT_USER_ID);
    }

    #[test]
    fn create_on_empty_starts_at_one() {
        let mut state = PostsState::default();
        assert_eq!(state.apply(PostAction::Created(PostForm::new("a", "b"))), Ok(Some(1)));
        assert_eq!(ids(&state), vec![1]);
    }

    #[test]
    fn next_id_follows_the_largest_id_not_the_length() {
        let state = PostsState::new(vec![post(4), post(42), post(9)]);
        assert_eq!(state.next_id(), Some(43));
    }

    #[test]
    fn create_after_the_largest_possible_id_fails_without_touching_state() {
        let mut state = PostsState::new(vec![post(1), post(PostId::MAX)]);
        assert_eq!(state.next_id(), None);

        let result = state.apply(PostAction::Created(PostForm::new("one", "too many")));

        assert_eq!(result, Err(IdsExhausted));
        assert_eq!(ids(&state), vec![1, PostId::MAX]);
    }

    #[test]
    fn update_touches_only_the_matching_post() {
        let before = PostsState::new(vec![post(1), post(2), post(3)]);
        let after = reduce(
            before.clone(),
            PostAction::Updated {
                id: 2,
                form: PostForm::new("edited", "text"),
            },
        )
        .unwrap();

        assert_eq!(ids(&after), vec![1, 2, 3]);
        assert_eq!(after.posts()[0], before.posts()[0]);
        assert_eq!(after.posts()[2], before.posts()[2]);

        let edited = after.get(2).unwrap();
        assert_eq!(edited.title, "edited");
        assert_eq!(edited.body, "text");
        assert_eq!(edited.user_id, 7);
    }

    #[test]
    fn update_of_missing_id_is_a_no_op() {
        let mut state = PostsState::new(vec![post(1)]);
        let touched = state.apply(PostAction::Updated {
            id: 9,
            form: PostForm::new("x", "y"),
        });

        assert_eq!(touched, Ok(None));
        assert_eq!(state, PostsState::new(vec![post(1)]));
    }

    #[test]
    fn delete_removes_and_keeps_order() {
        let state = PostsState::new(vec![post(1), post(2), post(3)]);
        let state = reduce(state, PostAction::Deleted(2)).unwrap();
        assert_eq!(ids(&state), vec![1, 3]);
        assert!(state.get(2).is_none());
    }
}
