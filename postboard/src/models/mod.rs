mod post;

pub use post::{DEFAULT_USER_ID, Post, PostId};
