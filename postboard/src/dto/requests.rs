use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    errors::FormError,
    models::{DEFAULT_USER_ID, Post},
};

/// What the user typed into the add/edit form.
///
/// Both fields must contain something other than whitespace before the form
/// is allowed anywhere near the network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate, Deserialize, Serialize)]
pub struct PostForm {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub body: String,
}

impl PostForm {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Pre-fills the edit form with the current values of a post.
    pub fn from_post(post: &Post) -> Self {
        Self::new(post.title.clone(), post.body.clone())
    }

    pub fn check(&self) -> Result<(), FormError> {
        self.validate().map_err(|_| FormError::Incomplete)
    }
}

/// Body of `POST /posts` and `PUT /posts/{id}`: the form plus the fixed owner.
#[derive(Debug, Clone, PartialEq, Eq, Validate, Deserialize, Serialize)]
pub struct PostPayload {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub body: String,
    #[serde(rename = "userId", default = "default_user_id")]
    pub user_id: u64,
}

impl From<&PostForm> for PostPayload {
    fn from(form: &PostForm) -> Self {
        Self {
            title: form.title.clone(),
            body: form.body.clone(),
            user_id: DEFAULT_USER_ID,
        }
    }
}

fn default_user_id() -> u64 {
    DEFAULT_USER_ID
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed(FormError::INCOMPLETE_MESSAGE)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_whitespace_only_fields() {
        assert_eq!(PostForm::new("  ", "body").check(), Err(FormError::Incomplete));
        assert_eq!(PostForm::new("title", "\n\t").check(), Err(FormError::Incomplete));
        assert_eq!(PostForm::default().check(), Err(FormError::Incomplete));
        assert_eq!(PostForm::new("title", "body").check(), Ok(()));
    }

    #[test]
    fn payload_carries_the_fixed_owner() {
        let payload = PostPayload::from(&PostForm::new("hello", "world"));
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"title": "hello", "body": "world", "userId": 1})
        );
    }

    #[test]
    fn payload_without_owner_defaults_to_one() {
        let payload: PostPayload =
            serde_json::from_str(r#"{"title": "a", "body": "b"}"#).unwrap();
        assert_eq!(payload.user_id, DEFAULT_USER_ID);
    }
}
