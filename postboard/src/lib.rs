//! Post list client for a demo REST API that never stores writes.
//!
//! - `client`: the remote posts endpoint behind the `PostsApi` trait
//! - `reducer`: local reconciliation of acknowledged writes
//! - `states`: the controller owning the post list, error and notices
//! - `view`: plain-text rendering for the terminal front end
//! - `routes`: a local stand-in server with the same contract

pub mod client;
pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod reducer;
pub mod routes;
pub mod states;
pub mod view;

pub use client::{HttpPostsApi, PostsApi};
pub use dto::{PostForm, PostPayload};
pub use errors::{FormError, IdsExhausted, Operation, RequestFailed};
pub use models::{Post, PostId};
pub use reducer::{PostAction, PostsState};
pub use states::{Outcome, PostsController};
