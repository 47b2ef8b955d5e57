mod requests;

pub use requests::{PostForm, PostPayload};
