//! Plain-text rendering of controller state. Reads only, never mutates.

use std::fmt::Write;

use crate::{client::PostsApi, models::Post, states::PostsController};

/// Bodies longer than this are cut in the list.
pub const EXCERPT_CHARS: usize = 100;

pub fn excerpt(body: &str) -> String {
    match body.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

pub fn render_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found.\n".to_string();
    }

    let mut out = String::new();
    for post in posts {
        let _ = writeln!(out, "[{}] {}", post.id, post.title);
        let _ = writeln!(out, "    {}", excerpt(&post.body).replace('\n', " "));
    }
    out
}

pub fn render_post(post: &Post) -> String {
    format!(
        "View Post #{}\nTitle: {}\nContent:\n{}\n",
        post.id, post.title, post.body
    )
}

/// Error banner, loading line or notice, then the list.
pub fn render_screen<A: PostsApi>(controller: &PostsController<A>) -> String {
    let mut out = String::new();
    if let Some(error) = controller.error() {
        let _ = writeln!(out, "Error: {error}");
    }
    if let Some(notice) = controller.notice() {
        let _ = writeln!(out, "{notice}");
    }
    if controller.is_loading() {
        out.push_str("Loading posts...\n");
    } else {
        out.push_str(&render_list(controller.posts()));
    }
    out
}
