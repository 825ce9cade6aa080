//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use confusion::action::Action;
use confusion::comments::{Comment, CommentsState, NewComment, Rating};
use confusion::root::AppState;
use confusion::seed::Seed;

pub fn rating(value: u8) -> Rating {
    Rating::new(value).expect("valid rating")
}

pub fn comment(id: usize, dish_id: u32, author: &str) -> Comment {
    Comment {
        id,
        dish_id,
        rating: rating(4),
        author: author.to_string(),
        comment: format!("comment by {}", author),
        date: "2012-10-16T17:57:28.556Z".to_string(),
    }
}

pub fn add_comment(dish_id: u32, value: u8, author: &str, text: &str) -> Action {
    Action::AddComment(NewComment {
        dish_id,
        rating: rating(value),
        author: author.to_string(),
        comment: text.to_string(),
    })
}

pub fn comments_state(comments: Vec<Comment>) -> Arc<CommentsState> {
    Arc::new(CommentsState::new(comments))
}

/// AppState built from the built-in seed.
pub fn seeded_state() -> AppState {
    AppState::from(Seed::builtin().expect("builtin seed"))
}
