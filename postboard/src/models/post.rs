use serde::{Deserialize, Serialize};

/// Identifier of a post, unique within one collection.
pub type PostId = u64;

/// Owner id sent with every write; the demo API has no real users.
pub const DEFAULT_USER_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_camel_case_owner_field_on_the_wire() {
        let post: Post = serde_json::from_str(
            r#"{"userId": 3, "id": 21, "title": "asperiores", "body": "repellat aliquid"}"#,
        )
        .unwrap();

        assert_eq!(post.id, 21);
        assert_eq!(post.user_id, 3);

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 3);
        assert!(json.get("user_id").is_none());
    }
}
